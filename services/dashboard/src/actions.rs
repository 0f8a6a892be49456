use api_client::{ApiError, Endpoint};
use serde_json::{json, Value};
use tracing::warn;

use crate::render::{DisplaySink, ToastLevel};
use crate::sections::{BillsSection, DebtSection, ScoreSection};
use crate::session::Session;
use crate::sync::{Fetch, Synchronizer};

/// The control that triggered an action. Disabled while the request is in
/// flight; a failed action restores label and enabled state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    label: &'static str,
    busy_label: &'static str,
    enabled: bool,
    text: String,
}

impl ActionButton {
    pub fn new(label: &'static str, busy_label: &'static str) -> Self {
        Self {
            label,
            busy_label,
            enabled: true,
            text: label.to_string(),
        }
    }

    pub fn press(&mut self) {
        self.enabled = false;
        self.text = self.busy_label.to_string();
    }

    pub fn restore(&mut self) {
        self.enabled = true;
        self.text = self.label.to_string();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Whether a mutation's response declared success.
fn declared_success(result: &Result<Value, ApiError>) -> bool {
    matches!(
        result,
        Ok(payload) if payload.get("success").and_then(Value::as_bool).unwrap_or(false)
    )
}

/// Pays one bill. On declared success re-fetches the bills section and,
/// unconditionally, the score section; the paid card disappears with the
/// refresh, so the button is only restored on failure.
pub async fn pay_bill<F: Fetch>(
    client: &F,
    session: &Session,
    bill_id: &str,
    bills: &mut Synchronizer<BillsSection>,
    score: &mut Synchronizer<ScoreSection>,
    button: &mut ActionButton,
    sink: &mut dyn DisplaySink,
) -> bool {
    button.press();
    sink.toast(ToastLevel::Info, "Processing payment...");

    let body = json!({ "billId": bill_id });
    let result = client
        .send(&Endpoint::PayBill, Some(body), session.token())
        .await;

    if declared_success(&result) {
        sink.toast(ToastLevel::Success, "Payment successful!");
        bills.refresh(client, session).await;
        score.refresh(client, session).await;
        true
    } else {
        if let Err(e) = result {
            warn!("bill payment failed: {e}");
        }
        sink.toast(ToastLevel::Error, "Payment failed. Please try again.");
        button.restore();
        false
    }
}

/// Runs a hidden-debt scan and re-fetches the section on success. Unlike bill
/// payment the scan control always comes back, so the button is restored on
/// both outcomes.
pub async fn scan_for_debt<F: Fetch>(
    client: &F,
    session: &Session,
    debt: &mut Synchronizer<DebtSection>,
    button: &mut ActionButton,
    sink: &mut dyn DisplaySink,
) -> bool {
    button.press();
    sink.toast(ToastLevel::Info, "Scanning for hidden expenses...");

    let result = client.send(&Endpoint::ScanDebt, None, session.token()).await;

    let succeeded = declared_success(&result);
    if succeeded {
        let new_items = result
            .as_ref()
            .ok()
            .and_then(|payload| payload.get("newItems").and_then(Value::as_u64))
            .unwrap_or(0);
        sink.toast(
            ToastLevel::Success,
            &format!("Found {new_items} new recurring expenses"),
        );
        debt.refresh(client, session).await;
    } else {
        if let Err(e) = result {
            warn!("debt scan failed: {e}");
        }
        sink.toast(ToastLevel::Error, "Scan failed. Please try again.");
    }
    button.restore();
    succeeded
}
