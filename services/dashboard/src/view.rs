use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Proximity label for a due date, derived client-side when the server omits
/// an explicit `dueText`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueLabel {
    Overdue,
    DueToday,
    DueTomorrow,
    DueInDays(i64),
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueLabel::Overdue => write!(f, "Overdue"),
            DueLabel::DueToday => write!(f, "Due Today"),
            DueLabel::DueTomorrow => write!(f, "Due Tomorrow"),
            DueLabel::DueInDays(n) => write!(f, "Due in {n} days"),
        }
    }
}

/// Ceiling day difference between `due` and `now`, mapped onto the label set.
/// Holds for all integer day offsets, including negative ones.
pub fn due_label(due: DateTime<Utc>, now: DateTime<Utc>) -> DueLabel {
    let seconds = (due - now).num_seconds();
    let days = (seconds + 86_399).div_euclid(86_400);
    match days {
        d if d < 0 => DueLabel::Overdue,
        0 => DueLabel::DueToday,
        1 => DueLabel::DueTomorrow,
        d => DueLabel::DueInDays(d),
    }
}

/// Categorical credit-health label attached to a score snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Rating {
    pub fn badge(&self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::Fair => "fair",
            Rating::Poor => "poor",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rating::Excellent => "You're in great shape! Keep it up.",
            Rating::Good => "Good credit health. Keep maintaining it.",
            Rating::Fair => "Room for improvement. Pay bills on time.",
            Rating::Poor => "Needs attention. Focus on timely payments.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendIndicator {
    Positive,
    Negative,
    Flat,
}

/// "₹1,23,456" with Indian digit grouping, matching the original display.
pub fn format_amount(amount: f64) -> String {
    format!("₹{}", group_indian(amount.round().max(0.0) as u64))
}

/// "Jan 5, 2026"
pub fn format_date(date: DateTime<Utc>) -> String {
    let day = date.format("%d").to_string();
    let day = day.trim_start_matches('0');
    format!("{} {}, {}", date.format("%b"), day, date.format("%Y"))
}

fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        parts.push(&head[end - 2..end]);
        end -= 2;
    }
    parts.push(&head[..end]);
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}
