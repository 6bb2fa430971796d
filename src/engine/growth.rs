//! Growth calculation helper
//!
//! Percentage growth between two numeric baselines, used for stage and
//! year-over-year comparisons.

/// `(curr - prev) / prev * 100`, rounded to one decimal place. A zero
/// baseline defines growth as `0.0` rather than infinity or an error.
pub fn growth_percent(prev: u64, curr: u64) -> f64 {
    if prev == 0 {
        return 0.0;
    }

    let raw = (curr as f64 - prev as f64) / prev as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Renders a growth percentage with an explicit leading `+` when positive.
pub fn format_growth(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{:.1}%", percent)
    } else {
        format!("{:.1}%", percent)
    }
}
