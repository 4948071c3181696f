//! Desktop notification glue.
//!
//! Notifications are strictly best-effort: the notifier binary may be
//! missing, headless CI has no notification daemon, and none of that may
//! affect the command outcome. Every failure path is ignored.

use std::process::{Command, Stdio};

/// Notify the desktop that `action` finished with the given outcome.
///
/// Set `STRATA_NO_NOTIFY=1` to suppress notifications entirely.
pub fn notify_success(action: &str, success: bool) {
    if std::env::var("STRATA_NO_NOTIFY").ok().as_deref() == Some("1") {
        return;
    }
    let summary = if success {
        format!("strata {}: succeeded", action)
    } else {
        format!("strata {}: failed", action)
    };
    let _ = spawn_notifier(&summary);
}

#[cfg(target_os = "linux")]
fn spawn_notifier(summary: &str) -> std::io::Result<()> {
    Command::new("notify-send")
        .arg("strata")
        .arg(summary)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(target_os = "macos")]
fn spawn_notifier(summary: &str) -> std::io::Result<()> {
    let script = format!(
        "display notification \"{}\" with title \"strata\"",
        summary.replace('"', "\\\"")
    );
    Command::new("osascript")
        .arg("-e")
        .arg(script)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn spawn_notifier(_summary: &str) -> std::io::Result<()> {
    Ok(())
}
