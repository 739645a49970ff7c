// src/extract/normalize.rs
//
// Pure converters from free-text fragments to scalar values. None of these
// fail: text that doesn't match yields the type's absent value.
use std::sync::OnceLock;

use regex::Regex;

use crate::core::sanitize::first_line;

fn hours_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*h").expect("hours regex is valid"))
}

fn minutes_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*m").expect("minutes regex is valid"))
}

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+-\d+-\d+").expect("date regex is valid"))
}

// The capture is all digits, so a failed parse can only mean overflow.
fn first_number(re: &Regex, text: &str) -> u64 {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// "2h 15m" → 135, "Length: 11 hrs and 3 mins" → 663, "15m" → 15, "" → 0.
/// Saturates at `u32::MAX`.
pub fn parse_duration(text: &str) -> u32 {
    let hours = first_number(hours_re(), text);
    let minutes = first_number(minutes_re(), text);
    let total = hours.saturating_mul(60).saturating_add(minutes);
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// First `digits-digits-digits` token, verbatim: "Released: 05-05-04" → "05-05-04".
pub fn parse_date_token(text: &str) -> Option<String> {
    date_re().find(text).map(|m| s!(m.as_str()))
}

/// Remaining-time blocks carry the duration on their first line only.
pub fn parse_first_line_duration(text: &str) -> u32 {
    parse_duration(first_line(text))
}

/// `data-star-count` values: "4.5" → 4.5; missing or junk → 0.
pub fn parse_star_count(raw: Option<&str>) -> f32 {
    raw.and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}
