//! Field Resolution Helpers
//!
//! Candidate-list lookups over raw `serde_json::Value` records, plus the
//! shared display formatting used by the canonical records.

use serde_json::Value;

/// Sentinel shown when every candidate field is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// First candidate field holding a present, non-empty value, rendered as
/// display text. Strings are used as-is; numbers keep their JSON rendering
/// (so `30` shows as "30", not "30.0"); null and empty strings lose.
pub fn pick_display(record: &Value, candidates: &[&str]) -> Option<String> {
    for name in candidates {
        match record.get(name) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            Some(Value::Bool(b)) => return Some(b.to_string()),
            _ => {}
        }
    }
    None
}

/// `pick_display` with the "N/A" sentinel when no candidate is present.
pub fn display_or_na(record: &Value, candidates: &[&str]) -> String {
    pick_display(record, candidates).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// First candidate field holding an integer value. Numeric strings are
/// accepted; floats are rounded.
pub fn pick_int(record: &Value, candidates: &[&str]) -> Option<i64> {
    for name in candidates {
        match record.get(name) {
            Some(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    return Some(i);
                }
                if let Some(f) = n.as_f64() {
                    return Some(f.round() as i64);
                }
            }
            Some(Value::String(s)) => {
                if let Ok(i) = s.trim().parse::<i64>() {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Format a backend timestamp ("2024-03-05T14:30:00Z", with or without
/// offset or time part) as a short date like "Mar 5, 2024". Unparseable
/// input yields `None` and the renderer shows the sentinel instead.
pub fn format_date(raw: &str) -> Option<String> {
    let date = chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|dt| dt.date())
        })
        .or_else(|_| chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%b %-d, %Y").to_string())
}

/// Group digits in thousands: 1234567 -> "1,234,567".
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_present_candidate_wins() {
        let record = json!({"user_name": "alice", "user": "ignored", "user_id": 7});
        assert_eq!(
            pick_display(&record, &["user_name", "user", "user_id"]),
            Some("alice".to_string())
        );
    }

    #[test]
    fn fallback_skips_absent_null_and_empty() {
        let record = json!({"user_name": "", "user": null, "user_id": 42});
        assert_eq!(
            pick_display(&record, &["user_name", "user", "user_id"]),
            Some("42".to_string())
        );
    }

    #[test]
    fn sentinel_when_all_candidates_missing() {
        let record = json!({"unrelated": true});
        assert_eq!(display_or_na(&record, &["user_name", "user"]), "N/A");
    }

    #[test]
    fn numeric_zero_is_a_present_value() {
        // A present 0 wins its chain; only absence falls through.
        let record = json!({"duration_minutes": 0, "duration": 45});
        assert_eq!(
            pick_display(&record, &["duration_minutes", "duration"]),
            Some("0".to_string())
        );
    }

    #[test]
    fn pick_int_accepts_numeric_strings() {
        let record = json!({"total_calories": "1200"});
        assert_eq!(pick_int(&record, &["total_calories"]), Some(1200));
        assert_eq!(pick_int(&record, &["missing"]), None);
    }

    #[test]
    fn dates_format_in_short_us_style() {
        assert_eq!(
            format_date("2024-03-05T14:30:00Z").as_deref(),
            Some("Mar 5, 2024")
        );
        assert_eq!(
            format_date("2024-03-05T14:30:00.123456").as_deref(),
            Some("Mar 5, 2024")
        );
        assert_eq!(format_date("2024-12-25").as_deref(), Some("Dec 25, 2024"));
        assert_eq!(format_date("not a date"), None);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-45000), "-45,000");
    }
}
