use chrono::{DateTime, Utc};

/// Coarse "how long ago" label.
///
/// Whole days elapsed: 0 → "Today", 1 → "Yesterday", under a week → "N days
/// ago", under 30 days → "N weeks ago", otherwise "N months ago" (30-day
/// months). Timestamps in the future read as "Today".
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - date).num_days().max(0);
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => format!("{} weeks ago", d / 7),
        d => format!("{} months ago", d / 30),
    }
}

/// Label for an optional timestamp; pending server writes read as "Recently".
pub fn posted_label(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match date {
        Some(date) => relative_time(date, now),
        None => "Recently".to_string(),
    }
}
