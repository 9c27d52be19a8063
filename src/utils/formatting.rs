//! Formatting utilities used for the status-bar output.

const SECONDS_EPSILON: f64 = 1e-7;

/// Render a signed hour count as `[+|-| ]HH:MM:SS`.
///
/// Exactly zero (either sign) gets a blank instead of a sign. The magnitude is
/// truncated to whole seconds, never rounded, and hours are not wrapped at 24.
pub fn format_duration(hours: f64) -> String {
    let sign = if hours < 0.0 {
        "-"
    } else if hours > 0.0 {
        "+"
    } else {
        " "
    };

    // whole seconds elapsed come back from hours as 114.99999..., not 115
    let total = (hours.abs() * 3600.0 + SECONDS_EPSILON).trunc() as u64;
    let h = total / 3600;
    let m = (total / 60) % 60;
    let s = total % 60;

    format!("{}{:02}:{:02}:{:02}", sign, h, m, s)
}

/// Quote a value for a plugin parameter (`key='value'`).
pub fn quote_param(value: &str) -> String {
    format!("'{}'", value.replace('\'', "\\'"))
}
