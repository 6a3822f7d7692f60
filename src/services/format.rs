//! Display formatting for counts, durations and scores

use crate::services::youku::Flex;

/// Human-readable play/comment count
///
/// Up to 9,999 the number is printed as is; above that it is bucketed into
/// 万 (10^4) or 亿 (10^8) with two decimals.
pub fn format_count(n: i64) -> String {
    if n <= 9_999 {
        n.to_string()
    } else if n <= 99_999_999 {
        format!("{:.2}万", n as f64 / 10_000.0)
    } else {
        format!("{:.2}亿", n as f64 / 100_000_000.0)
    }
}

/// `M:SS` or `H:MM:SS`
///
/// Hours are taken modulo 60, so a 60-hour duration renders as `0:00`.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as i64
    } else {
        0
    };

    let hours = (total / 3600) % 60;
    let minutes = (total / 60) % 60;
    let secs = total % 60;

    if hours == 0 {
        format!("{}:{:02}", minutes, secs)
    } else {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    }
}

/// Score from a number or numeric string; anything else is 0.0
pub fn format_score(raw: &Flex) -> f64 {
    raw.as_f64()
}
