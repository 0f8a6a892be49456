use api_client::Endpoint;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::session::Session;
use crate::sync::{EmptyView, Projection, ProjectionError, SectionResource};
use crate::view::{due_label, format_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn badge(&self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }
}

#[derive(Debug, Deserialize)]
struct EmisPayload {
    #[serde(default)]
    emis: Vec<EmiPayload>,
    #[serde(rename = "totalMonthly", default)]
    total_monthly: f64,
}

#[derive(Debug, Deserialize)]
struct EmiPayload {
    name: String,
    amount: f64,
    #[serde(rename = "dueDate")]
    due_date: DateTime<Utc>,
    priority: Priority,
    note: Option<String>,
    #[serde(rename = "dueText")]
    due_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmisView {
    pub count_text: String,
    pub meta_line: String,
    pub items: Vec<EmiItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmiItem {
    pub position: usize,
    pub name: String,
    pub priority: Priority,
    pub priority_badge: &'static str,
    pub due_line: String,
    pub amount_text: String,
    pub note: String,
}

pub struct EmisSection;

impl SectionResource for EmisSection {
    type View = EmisView;

    fn name(&self) -> &'static str {
        "emis"
    }

    fn endpoint(&self, _session: &Session) -> Endpoint {
        Endpoint::PrioritizedEmis
    }

    fn project(&self, payload: Value) -> Result<Projection<EmisView>, ProjectionError> {
        let payload: EmisPayload = serde_json::from_value(payload)?;
        if payload.emis.is_empty() {
            return Ok(Projection::Empty);
        }

        // Priority determines render order, high first. Stable, so the
        // server's ordering survives within a priority band.
        let mut emis = payload.emis;
        emis.sort_by_key(|emi| emi.priority);

        let now = Utc::now();
        let items = emis
            .into_iter()
            .enumerate()
            .map(|(index, emi)| EmiItem {
                position: index + 1,
                priority_badge: emi.priority.badge(),
                priority: emi.priority,
                due_line: emi
                    .due_text
                    .unwrap_or_else(|| due_label(emi.due_date, now).to_string()),
                amount_text: format_amount(emi.amount),
                note: emi.note.unwrap_or_else(|| "Regular payment".to_string()),
                name: emi.name,
            })
            .collect::<Vec<_>>();

        Ok(Projection::View(EmisView {
            count_text: items.len().to_string(),
            meta_line: format!("Total: {}/mo", format_amount(payload.total_monthly)),
            items,
        }))
    }

    fn empty_view(&self) -> EmptyView {
        EmptyView {
            placeholder: "No active EMIs found",
            count_text: Some("0"),
            meta_text: Some("No active EMIs"),
        }
    }

    fn failure_placeholder(&self) -> &'static str {
        "Failed to load EMIs"
    }

    fn lines(&self, view: &EmisView) -> Vec<String> {
        let mut lines = vec![format!("{} active — {}", view.count_text, view.meta_line)];
        for item in &view.items {
            lines.push(format!(
                "{}. {} [{}] — {} — {} — {}",
                item.position, item.name, item.priority_badge, item.amount_text,
                item.due_line, item.note
            ));
        }
        lines
    }
}
