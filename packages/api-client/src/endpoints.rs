use reqwest::Method;
use serde::{Deserialize, Serialize};

/// The fixed set of backend resources the dashboard talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Profile,
    CreditScore,
    CreditHistory { period: HistoryPeriod },
    UpcomingBills,
    PayBill,
    PrioritizedEmis,
    PayEmi,
    HiddenDebt,
    ScanDebt,
}

/// Range codes for the credit-history filter. The server interprets them;
/// the client only passes the code through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryPeriod {
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl HistoryPeriod {
    pub fn code(&self) -> &'static str {
        match self {
            HistoryPeriod::ThreeMonths => "3m",
            HistoryPeriod::SixMonths => "6m",
            HistoryPeriod::OneYear => "1y",
        }
    }
}

impl Default for HistoryPeriod {
    fn default() -> Self {
        HistoryPeriod::SixMonths
    }
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Login | Endpoint::PayBill | Endpoint::PayEmi | Endpoint::ScanDebt => {
                Method::POST
            }
            _ => Method::GET,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/api/auth/login".to_string(),
            Endpoint::Profile => "/user/profile".to_string(),
            Endpoint::CreditScore => "/credit/score".to_string(),
            Endpoint::CreditHistory { period } => {
                format!("/credit/history?period={}", period.code())
            }
            Endpoint::UpcomingBills => "/bills/upcoming".to_string(),
            Endpoint::PayBill => "/bills/pay".to_string(),
            Endpoint::PrioritizedEmis => "/emis/prioritized".to_string(),
            Endpoint::PayEmi => "/emis/pay".to_string(),
            Endpoint::HiddenDebt => "/debt/hidden".to_string(),
            Endpoint::ScanDebt => "/debt/scan".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutating_endpoints_use_post() {
        for endpoint in [
            Endpoint::Login,
            Endpoint::PayBill,
            Endpoint::PayEmi,
            Endpoint::ScanDebt,
        ] {
            assert_eq!(endpoint.method(), Method::POST, "{:?}", endpoint);
        }
        for endpoint in [
            Endpoint::Profile,
            Endpoint::CreditScore,
            Endpoint::UpcomingBills,
            Endpoint::PrioritizedEmis,
            Endpoint::HiddenDebt,
        ] {
            assert_eq!(endpoint.method(), Method::GET, "{:?}", endpoint);
        }
    }

    #[test]
    fn history_path_carries_period_code() {
        let endpoint = Endpoint::CreditHistory {
            period: HistoryPeriod::OneYear,
        };
        assert_eq!(endpoint.path(), "/credit/history?period=1y");
        assert_eq!(HistoryPeriod::default().code(), "6m");
    }
}
