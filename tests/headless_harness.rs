//! Headless mode process-level integration harness.
//!
//! # What this covers
//!
//! This harness runs `sdash --once` as a compiled binary via
//! [`std::process::Command`] and checks what a script consuming its output
//! would observe.
//!
//! - **JSON snapshot**: metrics, feed, chart and captures as parsed JSON.
//! - **Text snapshot**: the plain-text rendering, placeholders included.
//! - **Flag precedence**: `--log-file` / `--captures-dir` override the file.
//! - **Exit codes**: success = 0; bad flags or a missing `--config` file =
//!   non-zero.
//!
//! # What this does NOT cover
//!
//! - TUI rendering (covered by `TestBackend` tests in `sdash-tui`)
//!
//! # Running
//!
//! ```sh
//! cargo test --test headless_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};

fn sdash_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sdash"));
    // Keep the user's environment out of config resolution.
    cmd.env_remove("SDASH_SOURCES__LOG_FILE")
        .env_remove("SDASH_SOURCES__CAPTURES_DIR")
        .env_remove("SDASH_DASHBOARD__FEED_LEN")
        .env_remove("SDASH_DASHBOARD__CAPTURE_CAP");
    cmd
}

fn run(args: &[&str], config: &Path) -> Output {
    sdash_binary()
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("spawn sdash")
}

fn json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "sdash failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

/// A temp dir holding the daemon corpus, two captures and a config file
/// pointing at them.
fn populated() -> (tempfile::TempDir, std::path::PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let log = write_log(tmp.path(), CORPUS_DAEMON);
    let alerts = tmp.path().join("alerts");
    write_captures(&alerts, &["FIRE_20240115_100512.jpg", "FIRE_20240115_101544.jpg"]);
    let config = write_config(tmp.path(), &log, &alerts);
    (tmp, config)
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn once_prints_dashboard_as_json() {
    let (_tmp, config) = populated();
    let v = json(&run(&["--once"], &config));

    assert_eq!(v["metrics"]["fire_alerts"], 2);
    assert_eq!(v["metrics"]["intruder_alerts"], 2);
    assert_eq!(v["metrics"]["last_temp"], 61.3);
    assert_eq!(v["total_events"], 4);

    assert_eq!(v["feed"][0]["timestamp"], "20240115_101544");
    assert_eq!(v["feed"][0]["type"], "FIRE");
    assert_eq!(v["feed"][3]["type"], "INTRUDER");

    assert_eq!(v["chart"][0]["field"], "temp");
    assert_eq!(v["chart"][0]["values"].as_array().map(Vec::len), Some(4));

    assert_eq!(v["captures"][0]["filename"], "FIRE_20240115_101544.jpg");
    assert_eq!(v["captures"][0]["type"], "FIRE");
    assert_eq!(v["captures"][0]["width"], 96);
    assert_eq!(v["captures"].as_array().map(Vec::len), Some(2));
}

#[test]
fn once_on_empty_sources_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_config(
        tmp.path(),
        &tmp.path().join("absent.log"),
        &tmp.path().join("absent"),
    );
    let v = json(&run(&["--once"], &config));

    assert_eq!(v["total_events"], 0);
    assert_eq!(v["chart"], Value::Null);
    assert_eq!(v["feed"], Value::Array(Vec::new()));
    assert_eq!(v["captures"], Value::Array(Vec::new()));
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

#[test]
fn text_format_renders_metrics_and_placeholders() {
    let tmp = tempfile::tempdir().unwrap();
    let log = write_log(tmp.path(), &CORPUS_COMPACT[..1]);
    let config = write_config(tmp.path(), &log, &tmp.path().join("alerts"));

    let output = run(&["--once", "--format", "text"], &config);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();

    assert!(text.contains("Fire alerts:     1"), "{text}");
    assert!(text.contains("Last temp:       45.5°C"), "{text}");
    assert!(text.contains("No captures yet"), "{text}");
    assert!(text.contains("Event log (1 of 1):"), "{text}");
    assert!(!text.contains("No events yet"), "{text}");
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

#[test]
fn flags_override_config_file() {
    let (tmp, config) = populated();
    let other = tmp.path().join("other");
    std::fs::create_dir(&other).unwrap();
    let other_log = write_log(&other, &CORPUS_COMPACT);

    let v = json(&run(
        &[
            "--once",
            "--log-file",
            other_log.to_str().unwrap(),
            "--captures-dir",
            other.to_str().unwrap(),
        ],
        &config,
    ));

    assert_eq!(v["total_events"], 3);
    assert_eq!(v["metrics"]["fire_alerts"], 1);
    assert_eq!(v["captures"], Value::Array(Vec::new()));
}

#[test]
fn format_without_once_is_rejected() {
    let (_tmp, config) = populated();
    let output = run(&["--format", "text"], &config);
    assert!(!output.status.success());
}

#[test]
fn missing_explicit_config_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run(&["--once"], &tmp.path().join("nope.toml"));
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}
