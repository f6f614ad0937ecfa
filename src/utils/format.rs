// src/utils/format.rs
use chrono::{DateTime, Utc};

// Format a duration for display
pub fn format_time_ago(time: DateTime<Utc>) -> String {
    format_time_between(time, Utc::now())
}

fn format_time_between(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(time);

    let seconds = duration.num_seconds().max(0);

    if seconds < 5 {
        "just now".to_string()
    } else if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 3600 {
        format!("{} minutes ago", duration.num_minutes())
    } else if seconds < 86400 {
        format!("{} hours ago", duration.num_hours())
    } else {
        format!("{} days ago", duration.num_days())
    }
}

// Hidden view of a password: one bullet per character
pub fn mask_password(password: &str) -> String {
    "•".repeat(password.chars().count())
}
