use std::fs;
use std::io;
use std::path::Path;

use api_client::HistoryPeriod;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Client-side session state: the persisted bearer token and the currently
/// selected history period. Passed explicitly to the client and the
/// synchronizers so tests can substitute a fake.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,
    #[serde(default)]
    period: HistoryPeriod,
}

impl Session {
    /// The client never checks expiry; the server enforces it.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn period(&self) -> HistoryPeriod {
        self.period
    }

    pub fn set_period(&mut self, period: HistoryPeriod) {
        self.period = period;
    }

    /// A missing or unreadable session file starts a fresh session.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("discarding corrupt session file {}: {e}", path.display());
                Session::default()
            }),
            Err(_) => Session::default(),
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self).expect("session serializes");
        fs::write(path, raw)
    }
}
