use chrono::{DateTime, Duration, Utc};

/// Server-side copy of the due-date proximity label, precomputed into the
/// `dueText` field of bill and EMI responses.
pub fn due_text(due: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (due - now).num_seconds();
    let days = (seconds + 86_399).div_euclid(86_400);
    match days {
        d if d < 0 => "Overdue".to_string(),
        0 => "Due Today".to_string(),
        1 => "Due Tomorrow".to_string(),
        d => format!("Due in {d} days"),
    }
}

/// Cutoff instant for a history period code. Unknown codes fall back to the
/// medium range, like the original backend.
pub fn period_cutoff(period: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let days = match period {
        "3m" => 90,
        "1y" => 365,
        _ => 180,
    };
    now - Duration::days(days)
}
