use api_client::Endpoint;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::session::Session;
use crate::sync::{EmptyView, Projection, ProjectionError, SectionResource};
use crate::view::format_date;

#[derive(Debug, Deserialize)]
struct HistoryPayload {
    #[serde(default)]
    history: Vec<EventPayload>,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    date: DateTime<Utc>,
    score: u32,
    event: String,
    impact: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub date_text: String,
    pub score_line: String,
    pub description: String,
    pub impact_line: String,
    pub positive: bool,
}

/// The credit-history timeline. The period filter lives in the session; the
/// server interprets the code.
pub struct HistorySection;

impl SectionResource for HistorySection {
    type View = HistoryView;

    fn name(&self) -> &'static str {
        "history"
    }

    fn endpoint(&self, session: &Session) -> Endpoint {
        Endpoint::CreditHistory {
            period: session.period(),
        }
    }

    fn project(&self, payload: Value) -> Result<Projection<HistoryView>, ProjectionError> {
        let payload: HistoryPayload = serde_json::from_value(payload)?;
        if payload.history.is_empty() {
            return Ok(Projection::Empty);
        }

        let events = payload
            .history
            .into_iter()
            .map(|event| TimelineEvent {
                date_text: format_date(event.date),
                score_line: format!("Score: {}", event.score),
                description: event.event,
                impact_line: if event.impact > 0 {
                    format!("Impact: +{}", event.impact)
                } else {
                    format!("Impact: {}", event.impact)
                },
                positive: event.impact > 0,
            })
            .collect();

        Ok(Projection::View(HistoryView { events }))
    }

    fn empty_view(&self) -> EmptyView {
        EmptyView {
            placeholder: "No credit history available",
            count_text: None,
            meta_text: None,
        }
    }

    fn failure_placeholder(&self) -> &'static str {
        "Failed to load credit history"
    }

    fn lines(&self, view: &HistoryView) -> Vec<String> {
        view.events
            .iter()
            .map(|event| {
                let marker = if event.positive { "+" } else { "-" };
                format!(
                    "[{marker}] {} — {} — {} ({})",
                    event.date_text, event.score_line, event.description, event.impact_line
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_client::HistoryPeriod;
    use serde_json::json;

    #[test]
    fn events_carry_signed_impact() {
        let payload = json!({"history": [
            {"date": "2026-01-05T00:00:00Z", "score": 742, "event": "Paid credit card bill", "impact": 12},
            {"date": "2025-12-20T00:00:00Z", "score": 730, "event": "Missed EMI", "impact": -15},
        ]});

        let Projection::View(view) = HistorySection.project(payload).unwrap() else {
            panic!("expected a rendered view");
        };
        assert_eq!(view.events[0].impact_line, "Impact: +12");
        assert!(view.events[0].positive);
        assert_eq!(view.events[0].date_text, "Jan 5, 2026");
        assert_eq!(view.events[1].impact_line, "Impact: -15");
        assert!(!view.events[1].positive);
    }

    #[test]
    fn endpoint_reflects_the_selected_period() {
        let mut session = Session::default();
        session.set_period(HistoryPeriod::OneYear);
        assert_eq!(
            HistorySection.endpoint(&session).path(),
            "/credit/history?period=1y"
        );
    }

    #[test]
    fn no_events_is_empty() {
        assert_eq!(
            HistorySection.project(json!({"history": []})).unwrap(),
            Projection::Empty
        );
    }
}
