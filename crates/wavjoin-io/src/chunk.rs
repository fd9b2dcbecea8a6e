//! RIFF chunk framing.

use crate::error::ContainerError;
use std::io::{self, Read, Write};

pub(crate) const RIFF: [u8; 4] = *b"RIFF";
pub(crate) const WAVE: [u8; 4] = *b"WAVE";
pub(crate) const FMT: [u8; 4] = *b"fmt ";
pub(crate) const DATA: [u8; 4] = *b"data";

/// Fixed part of a `fmt ` chunk.
pub(crate) const FMT_LEN: u32 = 16;

/// Minimum `fmt ` length carrying a `WAVE_FORMAT_EXTENSIBLE` SubFormat GUID.
pub(crate) const FMT_EXTENSIBLE_LEN: u32 = 40;

/// A chunk ID and its payload length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChunkHeader {
    pub id: [u8; 4],
    pub len: u32,
}

impl ChunkHeader {
    /// Payload length plus the pad byte that follows odd-length chunks.
    pub fn padded_len(&self) -> u64 {
        u64::from(self.len) + u64::from(self.len & 1)
    }

    /// Read the next header, or `None` at a clean end of stream.
    pub fn read<R: Read>(reader: &mut R) -> Result<Option<Self>, ContainerError> {
        let mut buf = [0u8; 8];
        let mut filled = 0;
        while filled < buf.len() {
            match reader.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => return Err(ContainerError::Truncated("chunk header")),
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(Some(Self {
            id: [buf[0], buf[1], buf[2], buf[3]],
            len: u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
        }))
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.id)?;
        writer.write_all(&self.len.to_le_bytes())
    }
}

/// `read_exact` reporting a short read as [`ContainerError::Truncated`].
pub(crate) fn read_exact_or<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    what: &'static str,
) -> Result<(), ContainerError> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => ContainerError::Truncated(what),
        _ => ContainerError::Io(e),
    })
}
