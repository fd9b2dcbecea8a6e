//! Integration tests for wavjoin-cli.
//!
//! Runs the built binary against temporary directories of generated WAV files.

use std::path::Path;
use std::process::Command;
use wavjoin_core::{AudioFormat, SampleSequence};
use wavjoin_io::{read_wav, write_wav};

/// Helper to get the path to the `wavjoin` binary built by cargo.
fn wavjoin_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wavjoin"));
    // Keep the user's own config file out of the picture.
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("wavjoin-cli-tests"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_mono(dir: &Path, name: &str, rate: u32, values: &[i64]) {
    let samples = SampleSequence::from_mono_values(values.iter().copied());
    write_wav(dir.join(name), AudioFormat::pcm(1, rate, 16), &samples, true).unwrap();
}

// ---------------------------------------------------------------------------
// help / usage
// ---------------------------------------------------------------------------

#[test]
fn cli_help_lists_subcommands() {
    let output = wavjoin_bin().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for sub in ["merge", "pairs", "info"] {
        assert!(stdout.contains(sub), "help should mention '{sub}'");
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    let output = wavjoin_bin().arg("explode").output().unwrap();
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// merge
// ---------------------------------------------------------------------------

#[test]
fn cli_merge_joins_pair() {
    let dir = tempfile::tempdir().unwrap();
    write_mono(dir.path(), "take.L.wav", 44100, &[1, 2, 3]);
    write_mono(dir.path(), "take.R.wav", 44100, &[-1, -2, -3]);

    let output = wavjoin_bin()
        .arg("merge")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "merge failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Opening take.L.wav"), "got: {stdout}");
    assert!(stdout.contains("Opening take.R.wav"), "got: {stdout}");
    assert!(stdout.contains("Writing take.wav...Done."), "got: {stdout}");
    assert!(stdout.contains("Joined 1 of 1"), "got: {stdout}");

    let (format, samples) = read_wav(dir.path().join("take.wav")).unwrap();
    assert_eq!(format, AudioFormat::pcm(2, 44100, 16));
    assert_eq!(
        samples,
        SampleSequence::from_stereo_frames([(1, -1), (2, -2), (3, -3)])
    );
    assert!(dir.path().join("take.L.wav").exists());
}

#[test]
fn cli_merge_del_removes_sources() {
    let dir = tempfile::tempdir().unwrap();
    write_mono(dir.path(), "a.L.wav", 48000, &[5; 16]);
    write_mono(dir.path(), "a.R.wav", 48000, &[7; 16]);

    let output = wavjoin_bin()
        .args(["merge", "--del"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cleaning..."), "got: {stdout}");
    assert!(dir.path().join("a.wav").exists());
    assert!(!dir.path().join("a.L.wav").exists());
    assert!(!dir.path().join("a.R.wav").exists());
}

#[test]
fn cli_merge_fails_on_orphan_but_joins_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    write_mono(dir.path(), "good.L.wav", 44100, &[1, 2]);
    write_mono(dir.path(), "good.R.wav", 44100, &[3, 4]);
    write_mono(dir.path(), "lonely.L.wav", 44100, &[1, 2]);

    let output = wavjoin_bin()
        .arg("merge")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Opening good.L.wav"), "got: {stdout}");
    assert!(!stdout.contains("lonely.L.wav"), "got: {stdout}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lonely.wav"), "got: {stderr}");
    assert!(stderr.contains("OrphanPair"), "got: {stderr}");
    assert!(dir.path().join("good.wav").exists());
    assert!(!dir.path().join("lonely.wav").exists());
}

#[test]
fn cli_merge_reports_rate_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    write_mono(dir.path(), "x.L.wav", 44100, &[0; 4]);
    write_mono(dir.path(), "x.R.wav", 48000, &[0; 4]);

    let output = wavjoin_bin()
        .arg("merge")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Sample rates not equal: L 44100 R 48000"),
        "got: {stderr}"
    );
    assert!(!dir.path().join("x.wav").exists());
}

#[test]
fn cli_merge_custom_markers() {
    let dir = tempfile::tempdir().unwrap();
    write_mono(dir.path(), "vox_left.wav", 44100, &[1]);
    write_mono(dir.path(), "vox_right.wav", 44100, &[2]);

    let output = wavjoin_bin()
        .args(["merge", "--left", "_left", "--right", "_right", "--stereo", ""])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "merge failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(dir.path().join("vox.wav").exists());
}

#[test]
fn cli_merge_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    write_mono(dir.path(), "b-l.wav", 44100, &[1]);
    write_mono(dir.path(), "b-r.wav", 44100, &[2]);
    let config = dir.path().join("join.toml");
    std::fs::write(
        &config,
        "left_marker = \"-l.wav\"\nright_marker = \"-r.wav\"\n",
    )
    .unwrap();

    let output = wavjoin_bin()
        .arg("merge")
        .arg(dir.path())
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(dir.path().join("b.wav").exists());
}

#[test]
fn cli_merge_rejects_stereo_marker_matching_a_source() {
    let dir = tempfile::tempdir().unwrap();
    write_mono(dir.path(), "x.L.wav", 44100, &[1]);
    write_mono(dir.path(), "x.R.wav", 44100, &[2]);

    let output = wavjoin_bin()
        .args(["merge", "--del", "--stereo", ".L.wav"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stereo_marker"), "got: {stderr}");
    assert!(dir.path().join("x.L.wav").exists());
    assert!(dir.path().join("x.R.wav").exists());
}

#[test]
fn cli_merge_no_clobber_keeps_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    write_mono(dir.path(), "k.L.wav", 44100, &[1]);
    write_mono(dir.path(), "k.R.wav", 44100, &[2]);
    std::fs::write(dir.path().join("k.wav"), b"keep me").unwrap();

    let output = wavjoin_bin()
        .args(["merge", "--no-clobber"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert_eq!(std::fs::read(dir.path().join("k.wav")).unwrap(), b"keep me");
}

#[test]
fn cli_merge_empty_directory_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let output = wavjoin_bin()
        .arg("merge")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No pairs found"));
}

// ---------------------------------------------------------------------------
// pairs / info
// ---------------------------------------------------------------------------

#[test]
fn cli_pairs_json_lists_statuses() {
    let dir = tempfile::tempdir().unwrap();
    write_mono(dir.path(), "a.L.wav", 44100, &[1]);
    write_mono(dir.path(), "a.R.wav", 44100, &[1]);
    write_mono(dir.path(), "b.R.wav", 44100, &[1]);

    let output = wavjoin_bin()
        .args(["pairs", "--json"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["output"], "a.wav");
    assert_eq!(listed[0]["status"], "ready");
    assert_eq!(listed[1]["output"], "b.wav");
    assert_eq!(listed[1]["status"], "orphan");

    // Dry run writes nothing.
    assert!(!dir.path().join("a.wav").exists());
}

#[test]
fn cli_info_shows_format() {
    let dir = tempfile::tempdir().unwrap();
    write_mono(dir.path(), "tone.L.wav", 22050, &[0; 22050]);

    let output = wavjoin_bin()
        .arg("info")
        .arg(dir.path().join("tone.L.wav"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PCM 16-bit"), "got: {stdout}");
    assert!(stdout.contains("22050 Hz"), "got: {stdout}");
    assert!(stdout.contains("1.000s (22050 samples)"), "got: {stdout}");
}

#[test]
fn cli_info_rejects_non_wav() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.wav");
    std::fs::write(&path, b"definitely not riff").unwrap();

    let output = wavjoin_bin().arg("info").arg(&path).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a RIFF file"));
}
