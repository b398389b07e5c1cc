use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use tripwire_core::{Monitor, SessionState, SystemClock};
use tripwire_ocr::{EscapeStop, KeyWatcher};

use crate::state::AppState;

const TEST_MESSAGE: &str = "Test message from the keyword monitor";

/// `H:MM:SS`, hours unbounded
pub fn format_runtime(runtime: Duration) -> String {
    let secs = runtime.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

pub fn start_monitoring(state: &mut AppState) -> Result<()> {
    if !state.config.credentials().is_complete() {
        println!("\nError: Discord token and channel ID must be configured first!");
        return Ok(());
    }

    println!("\nMonitoring started. Press ESC to stop.");
    println!("Keywords: {}", state.config.keywords.join(", "));
    println!("Response: {}", state.config.response);
    if !state.config.target_username.is_empty() {
        println!("Target username: {}", state.config.target_username);
    }
    println!();

    let mut monitor = Monitor::new(SystemClock);
    let mut stop = EscapeStop::new(KeyWatcher::new());
    let mut shown = None;

    let report = monitor.run(&state.watcher, &state.config, &mut stop, |status| {
        let line = format!(
            "Runtime: {} | Messages Detected: {} | Messages Sent: {}",
            format_runtime(status.runtime),
            status.detected,
            status.sent
        );
        if shown.as_ref() != Some(&line) {
            print!("\r{line}");
            let _ = io::stdout().flush();
            shown = Some(line);
        }
    });

    println!("\n\nMonitoring stopped.");
    println!("Total runtime: {}", format_runtime(report.runtime));
    println!("Total messages detected: {}", report.detected);
    println!("Total messages sent: {}", report.sent);

    state.update(|c| c.record_session(report.to_record()))?;
    Ok(())
}

pub fn send_test_message(state: &AppState) {
    let mut session = SessionState::new();
    if state
        .watcher
        .send_response(&state.config, &mut session, TEST_MESSAGE)
    {
        println!("\nTest message sent successfully!");
    } else {
        println!("\nFailed to send test message. Check the token and channel ID.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_formats_as_clock() {
        assert_eq!(format_runtime(Duration::ZERO), "0:00:00");
        assert_eq!(format_runtime(Duration::from_millis(59_999)), "0:00:59");
        assert_eq!(format_runtime(Duration::from_secs(3_725)), "1:02:05");
        assert_eq!(format_runtime(Duration::from_secs(100 * 3600)), "100:00:00");
    }
}
