//! Path-based WAV helpers.

use crate::error::{ContainerError, Error};
use crate::reader::WavReader;
use crate::writer::WavWriter;
use crate::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use wavjoin_core::{AudioFormat, SampleSequence, StreamInfo};

/// Open `path` and parse its header.
pub(crate) fn open_reader(path: &Path) -> Result<WavReader<BufReader<File>>> {
    WavReader::open(path).map_err(|e| match e {
        ContainerError::Io(source) => Error::io(path, source),
        other => Error::container(path, other),
    })
}

/// Read WAV header information without loading sample data.
pub fn read_wav_info(path: impl AsRef<Path>) -> Result<StreamInfo> {
    Ok(open_reader(path.as_ref())?.info())
}

/// Read a whole WAV file.
///
/// # Example
/// ```ignore
/// let (format, samples) = read_wav("take.L.wav")?;
/// println!("{} samples at {} Hz", samples.len(), format.sample_rate);
/// ```
pub fn read_wav(path: impl AsRef<Path>) -> Result<(AudioFormat, SampleSequence)> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;
    let samples = reader.read_all().map_err(|e| Error::container(path, e))?;
    Ok((reader.format(), samples))
}

/// Write `samples` to `path` as a WAV file.
///
/// The file is written to a temporary file in the same directory and moved
/// into place only once complete, so a failure never leaves a partial file
/// at `path`. An existing file is replaced unless `overwrite` is false, in
/// which case [`Error::OutputExists`] is returned.
pub fn write_wav(
    path: impl AsRef<Path>,
    format: AudioFormat,
    samples: &SampleSequence,
    overwrite: bool,
) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let count = u32::try_from(samples.len()).map_err(|_| {
        Error::container(
            path,
            ContainerError::TooLarge {
                samples: u32::MAX,
                block_align: format.block_align(),
            },
        )
    })?;

    let mut builder = tempfile::Builder::new();
    builder.prefix(".wavjoin-").suffix(".tmp");
    // Staged files default to owner-only; give the output ordinary file permissions.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    let staging = builder.tempfile_in(dir).map_err(|e| Error::io(dir, e))?;
    tracing::debug!(staging = %staging.path().display(), output = %path.display(), "staging output");

    let mut writer = WavWriter::new(BufWriter::new(staging), count, format)
        .map_err(|e| Error::container(path, e))?;
    writer
        .write_sequence(samples)
        .map_err(|e| Error::container(path, e))?;
    tracing::debug!(samples = writer.declared(), written = writer.written(), "finishing output");
    let buffered = writer.finish().map_err(|e| Error::container(path, e))?;
    let staging = buffered
        .into_inner()
        .map_err(|e| Error::io(path, e.into_error()))?;

    let persisted = if overwrite {
        staging.persist(path)
    } else {
        staging.persist_noclobber(path)
    };
    persisted.map_err(|e| {
        if !overwrite && e.error.kind() == std::io::ErrorKind::AlreadyExists {
            Error::OutputExists(path.to_path_buf())
        } else {
            Error::io(path, e.error)
        }
    })?;

    Ok(())
}
