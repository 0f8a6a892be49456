use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub api_base_url: String,
    pub session_path: PathBuf,
    pub refresh_interval: Duration,
    pub login: Option<Credentials>,
}

impl Config {
    pub fn load() -> Self {
        let api_base_url = load_or("API_BASE_URL", "http://localhost:3000");
        let session_path = PathBuf::from(load_or("SESSION_FILE", ".cred-tracker-session.json"));
        let refresh_secs: u64 = load_or("REFRESH_INTERVAL_SECS", "300")
            .parse()
            .expect("REFRESH_INTERVAL_SECS must be an integer");

        // Optional headless login when no token is persisted yet.
        let login = match (env::var("DASH_EMAIL"), env::var("DASH_PASSWORD")) {
            (Ok(email), Ok(password)) => Some(Credentials { email, password }),
            _ => None,
        };

        Self {
            api_base_url,
            session_path,
            refresh_interval: Duration::from_secs(refresh_secs),
            login,
        }
    }
}

fn load_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
