use api_client::Endpoint;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::session::Session;
use crate::sync::{EmptyView, Projection, ProjectionError, SectionResource};
use crate::view::{due_label, format_amount};

#[derive(Debug, Deserialize)]
struct BillsPayload {
    #[serde(default)]
    bills: Vec<BillPayload>,
}

#[derive(Debug, Deserialize)]
struct BillPayload {
    id: String,
    name: String,
    amount: f64,
    #[serde(rename = "dueDate")]
    due_date: DateTime<Utc>,
    #[serde(default)]
    urgent: bool,
    icon: Option<String>,
    #[serde(rename = "dueText")]
    due_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillsView {
    pub count_text: String,
    pub meta_line: String,
    pub cards: Vec<BillCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillCard {
    pub id: String,
    pub name: String,
    pub amount_text: String,
    pub due_line: String,
    pub urgent: bool,
    pub icon: String,
}

pub struct BillsSection;

impl SectionResource for BillsSection {
    type View = BillsView;

    fn name(&self) -> &'static str {
        "bills"
    }

    fn endpoint(&self, _session: &Session) -> Endpoint {
        Endpoint::UpcomingBills
    }

    fn project(&self, payload: Value) -> Result<Projection<BillsView>, ProjectionError> {
        let payload: BillsPayload = serde_json::from_value(payload)?;
        if payload.bills.is_empty() {
            return Ok(Projection::Empty);
        }

        let now = Utc::now();
        let next_due = due_label(payload.bills[0].due_date, now);
        let cards = payload
            .bills
            .into_iter()
            .map(|bill| BillCard {
                // The label is derived locally when the server omits dueText.
                due_line: bill
                    .due_text
                    .unwrap_or_else(|| due_label(bill.due_date, now).to_string()),
                amount_text: format_amount(bill.amount),
                icon: bill.icon.unwrap_or_else(|| "💳".to_string()),
                id: bill.id,
                name: bill.name,
                urgent: bill.urgent,
            })
            .collect::<Vec<_>>();

        Ok(Projection::View(BillsView {
            count_text: cards.len().to_string(),
            meta_line: format!("Next due: {next_due}"),
            cards,
        }))
    }

    fn empty_view(&self) -> EmptyView {
        EmptyView {
            placeholder: "No upcoming bills found",
            count_text: Some("0"),
            meta_text: Some("No bills due"),
        }
    }

    fn failure_placeholder(&self) -> &'static str {
        "Failed to load bills"
    }

    fn lines(&self, view: &BillsView) -> Vec<String> {
        let mut lines = vec![format!("{} upcoming — {}", view.count_text, view.meta_line)];
        for card in &view.cards {
            let urgent = if card.urgent { " (urgent)" } else { "" };
            lines.push(format!(
                "{} {} — {} — {}{urgent}",
                card.icon, card.name, card.amount_text, card.due_line
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_bill_list_zeroes_count_and_meta() {
        let projection = BillsSection.project(json!({"bills": []})).unwrap();
        assert_eq!(projection, Projection::Empty);

        let empty = BillsSection.empty_view();
        assert_eq!(empty.count_text, Some("0"));
        assert_eq!(empty.meta_text, Some("No bills due"));
        assert_eq!(empty.placeholder, "No upcoming bills found");
    }

    #[test]
    fn bills_project_into_cards() {
        let due = Utc::now() + chrono::Duration::days(3);
        let payload = json!({"bills": [
            {"id": "b1", "name": "Electricity", "amount": 2340.0,
             "dueDate": due.to_rfc3339(), "urgent": true, "icon": "⚡"},
            {"id": "b2", "name": "Internet", "amount": 999.0,
             "dueDate": due.to_rfc3339(), "dueText": "Due in 3 days"},
        ]});

        let Projection::View(view) = BillsSection.project(payload).unwrap() else {
            panic!("expected a rendered view");
        };
        assert_eq!(view.count_text, "2");
        assert_eq!(view.meta_line, "Next due: Due in 3 days");

        assert_eq!(view.cards[0].amount_text, "₹2,340");
        assert!(view.cards[0].urgent);
        assert_eq!(view.cards[0].icon, "⚡");

        // Server-provided dueText wins; otherwise the label is derived.
        assert_eq!(view.cards[1].due_line, "Due in 3 days");
        assert_eq!(view.cards[0].due_line, "Due in 3 days");
        assert_eq!(view.cards[1].icon, "💳");
    }
}
