/// Utility functions
use chrono::{Days, NaiveDate};
use serde_json::Value;

/// Pick string value from JSON by trying multiple keys
pub fn s_pick(v: &Value, keys: &[&str]) -> Option<String> {
    for k in keys {
        if let Some(x) = v.get(*k) {
            if let Some(s) = x.as_str() {
                if !s.is_empty() {
                    return Some(s.to_string());
                }
            } else if x.is_number() {
                return Some(x.to_string());
            }
        }
    }
    None
}

/// Extract an unsigned integer from a JSON value, defaulting to 0.
///
/// Absent or malformed pagination fields evaluate as 0, which makes the
/// exhaustion check `offset + limit >= total` terminate on a bad envelope.
pub fn uint(v: &Value) -> u64 {
    if let Some(n) = v.as_u64() {
        return n;
    }
    if let Some(s) = v.as_str() {
        return s.parse().unwrap_or(0);
    }
    0
}

/// Consecutive calendar dates starting at `start`, formatted DD-MM-YYYY.
pub fn window_dates(start: NaiveDate, days: u32) -> Vec<String> {
    (0..days)
        .map(|i| {
            (start + Days::new(u64::from(i)))
                .format("%d-%m-%Y")
                .to_string()
        })
        .collect()
}
