use api_client::Endpoint;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::session::Session;
use crate::sync::{EmptyView, Projection, ProjectionError, SectionResource};
use crate::view::{format_date, Rating, TrendIndicator};

#[derive(Debug, Deserialize)]
struct ScorePayload {
    score: Option<u32>,
    date: Option<DateTime<Utc>>,
    #[serde(default)]
    trend: i32,
    rating: Option<Rating>,
    factors: Option<FactorsPayload>,
}

#[derive(Debug, Deserialize, Default)]
struct FactorsPayload {
    #[serde(rename = "paymentHistory", default)]
    payment_history: u8,
    #[serde(rename = "creditUtilization", default)]
    credit_utilization: u8,
    #[serde(rename = "creditAge", default)]
    credit_age: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreView {
    pub score_text: String,
    pub score_percent: f64,
    pub updated_line: String,
    pub trend_text: Option<String>,
    pub indicator: TrendIndicator,
    pub rating_text: String,
    pub rating_message: String,
    pub factors: FactorBars,
}

/// Factor breakdown percentages, rendered as bar widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FactorBars {
    pub payment_history: u8,
    pub credit_utilization: u8,
    pub credit_age: u8,
}

pub struct ScoreSection;

impl SectionResource for ScoreSection {
    type View = ScoreView;

    fn name(&self) -> &'static str {
        "score"
    }

    fn endpoint(&self, _session: &Session) -> Endpoint {
        Endpoint::CreditScore
    }

    fn project(&self, payload: Value) -> Result<Projection<ScoreView>, ProjectionError> {
        let snapshot: ScorePayload = serde_json::from_value(payload)?;

        let (trend_text, indicator) = match snapshot.trend {
            0 => (None, TrendIndicator::Flat),
            t if t > 0 => (Some(format!("+{t} pts")), TrendIndicator::Positive),
            t => (Some(format!("{t} pts")), TrendIndicator::Negative),
        };

        let factors = snapshot.factors.unwrap_or_default();

        Ok(Projection::View(ScoreView {
            score_text: snapshot
                .score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "---".to_string()),
            score_percent: f64::from(snapshot.score.unwrap_or(0)) / 850.0 * 100.0,
            updated_line: match snapshot.date {
                Some(date) => format!("Last updated: {}", format_date(date)),
                None => "Last updated: —".to_string(),
            },
            trend_text,
            indicator,
            rating_text: snapshot
                .rating
                .map(|r| r.badge().to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            rating_message: snapshot
                .rating
                .map(|r| r.message().to_string())
                .unwrap_or_else(|| "Loading...".to_string()),
            factors: FactorBars {
                payment_history: factors.payment_history,
                credit_utilization: factors.credit_utilization,
                credit_age: factors.credit_age,
            },
        }))
    }

    fn empty_view(&self) -> EmptyView {
        // A score snapshot is a single record, never a list.
        EmptyView {
            placeholder: "No score available",
            count_text: Some("---"),
            meta_text: None,
        }
    }

    fn failure_placeholder(&self) -> &'static str {
        "Failed to load credit score"
    }

    fn lines(&self, view: &ScoreView) -> Vec<String> {
        let mut lines = vec![
            format!("Score: {} [{}]", view.score_text, view.rating_text),
            view.updated_line.clone(),
        ];
        if let Some(trend) = &view.trend_text {
            lines.push(format!("Trend: {trend}"));
        }
        lines.push(view.rating_message.clone());
        lines.push(format!(
            "Factors: payment {}% | utilization {}% | age {}%",
            view.factors.payment_history,
            view.factors.credit_utilization,
            view.factors.credit_age
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view(payload: Value) -> ScoreView {
        match ScoreSection.project(payload).unwrap() {
            Projection::View(view) => view,
            Projection::Empty => panic!("score is never empty"),
        }
    }

    #[test]
    fn good_score_with_positive_trend() {
        let view = view(json!({"score": 742, "trend": 12, "rating": "good"}));
        assert_eq!(view.score_text, "742");
        assert_eq!(view.trend_text.as_deref(), Some("+12 pts"));
        assert_eq!(view.indicator, TrendIndicator::Positive);
        assert_eq!(view.rating_text, "good");
    }

    #[test]
    fn negative_trend_keeps_its_sign() {
        let view = view(json!({"score": 615, "trend": -8, "rating": "fair"}));
        assert_eq!(view.trend_text.as_deref(), Some("-8 pts"));
        assert_eq!(view.indicator, TrendIndicator::Negative);
    }

    #[test]
    fn zero_trend_renders_nothing() {
        let view = view(json!({"score": 700, "trend": 0, "rating": "good"}));
        assert_eq!(view.trend_text, None);
        assert_eq!(view.indicator, TrendIndicator::Flat);
    }

    #[test]
    fn missing_fields_fall_back() {
        let view = view(json!({}));
        assert_eq!(view.score_text, "---");
        assert_eq!(view.rating_text, "N/A");
        assert_eq!(view.rating_message, "Loading...");
        assert_eq!(view.factors, FactorBars::default());
    }

    #[test]
    fn factors_project_into_bars() {
        let view = view(json!({
            "score": 742,
            "date": "2026-02-01T00:00:00Z",
            "factors": {"paymentHistory": 92, "creditUtilization": 41, "creditAge": 67}
        }));
        assert_eq!(view.factors.payment_history, 92);
        assert_eq!(view.factors.credit_utilization, 41);
        assert_eq!(view.factors.credit_age, 67);
        assert_eq!(view.updated_line, "Last updated: Feb 1, 2026");
    }

    #[test]
    fn identical_payloads_project_identically() {
        let payload = json!({"score": 742, "trend": 12, "rating": "good"});
        assert_eq!(view(payload.clone()), view(payload));
    }
}
