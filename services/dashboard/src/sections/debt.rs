use api_client::Endpoint;
use serde::Deserialize;
use serde_json::Value;

use crate::session::Session;
use crate::sync::{EmptyView, Projection, ProjectionError, SectionResource};
use crate::view::format_amount;

#[derive(Debug, Deserialize)]
struct DebtPayload {
    #[serde(default)]
    categories: Vec<CategoryPayload>,
    #[serde(rename = "totalHiddenDebt", default)]
    total_hidden_debt: f64,
    #[serde(rename = "totalSubscriptions", default)]
    total_subscriptions: u32,
}

#[derive(Debug, Deserialize)]
struct CategoryPayload {
    name: String,
    icon: Option<String>,
    total: f64,
    #[serde(default)]
    items: Vec<ItemPayload>,
}

#[derive(Debug, Deserialize)]
struct ItemPayload {
    name: String,
    amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebtView {
    pub amount_text: String,
    pub meta_line: String,
    pub total_line: String,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub name: String,
    pub icon: String,
    pub total_text: String,
    pub items: Vec<(String, String)>,
}

pub struct DebtSection;

impl SectionResource for DebtSection {
    type View = DebtView;

    fn name(&self) -> &'static str {
        "hidden-debt"
    }

    fn endpoint(&self, _session: &Session) -> Endpoint {
        Endpoint::HiddenDebt
    }

    fn project(&self, payload: Value) -> Result<Projection<DebtView>, ProjectionError> {
        let payload: DebtPayload = serde_json::from_value(payload)?;
        if payload.categories.is_empty() {
            return Ok(Projection::Empty);
        }

        let categories = payload
            .categories
            .into_iter()
            .map(|category| CategoryView {
                total_text: format_amount(category.total),
                icon: category.icon.unwrap_or_else(|| "💳".to_string()),
                name: category.name,
                items: category
                    .items
                    .into_iter()
                    .map(|item| (item.name, format_amount(item.amount)))
                    .collect(),
            })
            .collect();

        Ok(Projection::View(DebtView {
            amount_text: format_amount(payload.total_hidden_debt),
            meta_line: format!("{} subscriptions", payload.total_subscriptions),
            total_line: format!("Total: {}/month", format_amount(payload.total_hidden_debt)),
            categories,
        }))
    }

    fn empty_view(&self) -> EmptyView {
        EmptyView {
            placeholder: "No hidden debt detected",
            count_text: Some("₹0"),
            meta_text: Some("No subscriptions"),
        }
    }

    fn failure_placeholder(&self) -> &'static str {
        "Failed to load hidden debt"
    }

    fn lines(&self, view: &DebtView) -> Vec<String> {
        let mut lines = vec![
            format!("{} — {}", view.amount_text, view.meta_line),
            view.total_line.clone(),
        ];
        for category in &view.categories {
            lines.push(format!(
                "{} {} — {}",
                category.icon, category.name, category.total_text
            ));
            for (name, amount) in &category.items {
                lines.push(format!("  {name} — {amount}"));
            }
        }
        lines
    }
}
