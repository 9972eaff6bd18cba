use std::process::{Command, Output};
use std::time::{Duration, Instant};

use crate::provider::ForegroundApp;

const CHILD_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Frontmost application name via `osascript` on macOS.
///
/// Other platforms have no lookup and always report "undetermined", which the
/// filter maps through its strict/permissive policy.
#[derive(Default)]
pub struct SystemForeground;

impl SystemForeground {
    pub fn new() -> Self {
        Self
    }
}

impl ForegroundApp for SystemForeground {
    #[cfg(target_os = "macos")]
    fn current_app_name(&self) -> Option<String> {
        use std::process::Stdio;

        use crate::constants::FOREGROUND_LOOKUP_TIMEOUT_MS;

        const FRONTMOST_SCRIPT: &str = "tell application \"System Events\" to get name of \
            first application process whose frontmost is true";

        let mut cmd = Command::new("osascript");
        cmd.args(["-e", FRONTMOST_SCRIPT])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        let output = output_within(&mut cmd, Duration::from_millis(FOREGROUND_LOOKUP_TIMEOUT_MS))?;
        if !output.status.success() {
            tracing::debug!(status = %output.status, "osascript frontmost lookup failed");
            return None;
        }
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn current_app_name(&self) -> Option<String> {
        None
    }
}

/// Run `cmd` to completion, killing it once `timeout` passes.
///
/// Only suitable for commands with small output: stdout is read after exit.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn output_within(cmd: &mut Command, timeout: Duration) -> Option<Output> {
    let mut child = cmd.spawn().ok()?;
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => break,
            Ok(None) if Instant::now() < deadline => std::thread::sleep(CHILD_POLL_INTERVAL),
            Ok(None) => {
                tracing::debug!(timeout_ms = timeout.as_millis() as u64, "Foreground lookup timed out");
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Foreground lookup wait failed");
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
        }
    }
    child.wait_with_output().ok()
}
