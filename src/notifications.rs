//! Desktop notification support. Currently macOS only; a no-op
//! elsewhere.

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when the today set first exceeds the day's budget
pub fn notify_overloaded(selected_weight: f64, balance: u32) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{:.1} pts selected against a {} pt budget" with title "Flow State - Overloaded""#,
            selected_weight, balance
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = (selected_weight, balance);
    }
}
