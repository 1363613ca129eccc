//! Seek and playback-rate arithmetic.
//!
//! Pure functions only; the controller reads the element's actual values,
//! runs them through here and writes the result back.

/// Which way a relative seek goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Forward,
    Backward,
}

/// Target position for a relative seek.
///
/// Backward seeks stop at zero. Forward seeks are not clamped; running past
/// the end is left to the media element.
pub fn seek_target(position: f64, step: f64, direction: SeekDirection) -> f64 {
    match direction {
        SeekDirection::Forward => position + step,
        SeekDirection::Backward => (position - step).max(0.0),
    }
}

/// Round a rate to two decimal places so repeated steps don't drift.
pub fn round_rate(rate: f64) -> f64 {
    (rate * 100.0).round() / 100.0
}

/// Next rate after one speed-up step.
pub fn step_rate_up(rate: f64, step: f64, min_rate: f64) -> f64 {
    round_rate(rate + step).max(min_rate)
}

/// Next rate after one slow-down step, never below `min_rate`.
pub fn step_rate_down(rate: f64, step: f64, min_rate: f64) -> f64 {
    round_rate(rate - step).max(min_rate)
}

/// Parse a typed rate such as `"2x"`, `"1.25"` or `" 2.0 "`.
///
/// Returns `None` for anything that is not a finite positive number.
pub fn parse_rate_entry(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let without_unit = trimmed
        .strip_suffix(['x', 'X', '×'])
        .unwrap_or(trimmed)
        .trim();
    if without_unit.is_empty() {
        return None;
    }
    let rate = without_unit.parse::<f64>().ok()?;
    (rate.is_finite() && rate > 0.0).then_some(rate)
}

/// Display text for a rate, e.g. `1.25x`.
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}x", rate)
}
