use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct HistoryQuery {
    pub period: Option<String>,
}
