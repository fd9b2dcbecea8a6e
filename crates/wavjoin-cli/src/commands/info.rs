//! Display WAV file metadata.

use super::common::format_bytes;
use clap::Args;
use wavjoin_core::{FORMAT_IEEE_FLOAT, FORMAT_PCM};
use wavjoin_io::read_wav_info;

/// Display WAV file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAV file
    pub file: std::path::PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;
    let format = info.format;

    let format_str = match format.format_tag {
        FORMAT_PCM => "PCM".to_string(),
        FORMAT_IEEE_FLOAT => "IEEE Float".to_string(),
        tag => format!("tag {tag:#06x}"),
    };

    println!("File:        {}", args.file.display());
    println!("Format:      {} {}-bit", format_str, format.bits_per_sample);
    println!(
        "Channels:    {} ({})",
        format.channels,
        if format.is_mono() { "mono" } else { "stereo" }
    );
    println!("Sample Rate: {} Hz", format.sample_rate);
    println!("Block Align: {} bytes", format.block_align());
    println!(
        "Duration:    {:.3}s ({} samples)",
        info.duration_secs(),
        info.sample_count()
    );

    let file_size = std::fs::metadata(&args.file)?.len();
    println!("File Size:   {}", format_bytes(file_size));

    Ok(())
}
