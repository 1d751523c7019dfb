// Text formatting helpers for the report

use chrono::TimeZone;

const UNIT: u64 = 1024;
const UNIT_PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Human-readable byte count using 1024-based units, e.g. `1.5 KB`.
/// Values below 1 KB are printed as whole bytes (`1023 B`).
pub fn format_bytes(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!(
        "{:.1} {}B",
        bytes as f64 / div as f64,
        UNIT_PREFIXES[exp]
    )
}

/// Coarsest unit plus the finer ones below it: `2 days, 3 hours, 4 minutes`,
/// `3 hours, 4 minutes` or `4 minutes`. Seconds are dropped.
pub fn format_uptime(uptime_secs: u64) -> String {
    let days = uptime_secs / 86_400;
    let hours = (uptime_secs / 3_600) % 24;
    let minutes = (uptime_secs / 60) % 60;

    if days > 0 {
        format!("{} days, {} hours, {} minutes", days, hours, minutes)
    } else if hours > 0 {
        format!("{} hours, {} minutes", hours, minutes)
    } else {
        format!("{} minutes", minutes)
    }
}

/// Cut `s` to at most `max_len` characters, ending in `...` when shortened.
/// With `max_len < 3` there is no room for the ellipsis and the prefix is returned as is.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len < 3 {
        return s.chars().take(max_len).collect();
    }
    let mut out: String = s.chars().take(max_len - 3).collect();
    out.push_str("...");
    out
}

/// `[#####...............] 25.00%` style bar.
///
/// Out-of-range percentages only affect how many cells are filled (clamped to
/// the bar); the printed number is always the raw value.
pub fn usage_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0 * width as f64) as usize).min(width);
    format!(
        "[{}{}] {:.2}%",
        "#".repeat(filled),
        ".".repeat(width - filled),
        percent
    )
}

/// Epoch seconds as `YYYY-MM-DD HH:MM:SS` in `tz`; falls back to the raw number
/// when the timestamp cannot be represented.
pub fn format_timestamp<Tz>(epoch_secs: u64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    i64::try_from(epoch_secs)
        .ok()
        .and_then(|secs| tz.timestamp_opt(secs, 0).single())
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| epoch_secs.to_string())
}
