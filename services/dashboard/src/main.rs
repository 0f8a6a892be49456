use api_client::{ApiClient, LoginRequest};
use dashboard::config::Config;
use dashboard::render::{render_section, TerminalSink};
use dashboard::sections::{
    BillsSection, DebtSection, EmisSection, HistorySection, ProfileSection, ScoreSection,
};
use dashboard::session::Session;
use dashboard::sync::Synchronizer;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

async fn run() {
    dotenv().ok();

    let config = Config::load();
    let mut session = Session::load(&config.session_path);
    let client = ApiClient::new(config.api_base_url.clone());

    if session.token().is_none() {
        if let Some(credentials) = &config.login {
            let request = LoginRequest {
                email: credentials.email.clone(),
                password: credentials.password.clone(),
            };
            match client.login(&request).await {
                Ok(response) => {
                    info!("logged in as {}", response.user.name);
                    session.set_token(response.token);
                    if let Err(e) = session.save(&config.session_path) {
                        warn!("failed to persist session: {e}");
                    }
                }
                Err(e) => warn!("login failed, continuing unauthenticated: {e}"),
            }
        }
    }

    let mut profile = Synchronizer::new(ProfileSection);
    let mut score = Synchronizer::new(ScoreSection);
    let mut bills = Synchronizer::new(BillsSection);
    let mut emis = Synchronizer::new(EmisSection);
    let mut debt = Synchronizer::new(DebtSection);
    let mut history = Synchronizer::new(HistorySection);
    let mut sink = TerminalSink;

    // Initial load: every section fetches in parallel, each independently
    // rendering or falling back. No ordering between sections.
    tokio::join!(
        profile.refresh(&client, &session),
        score.refresh(&client, &session),
        bills.refresh(&client, &session),
        emis.refresh(&client, &session),
        debt.refresh(&client, &session),
        history.refresh(&client, &session),
    );

    render_section(&profile, &mut sink);
    render_section(&score, &mut sink);
    render_section(&bills, &mut sink);
    render_section(&emis, &mut sink);
    render_section(&debt, &mut sink);
    render_section(&history, &mut sink);

    // Fixed-interval re-fetch of the volatile sections, same subset as the
    // original dashboard's auto refresh.
    let mut ticker = tokio::time::interval(config.refresh_interval);
    ticker.tick().await;
    loop {
        ticker.tick().await;
        tokio::join!(
            score.refresh(&client, &session),
            bills.refresh(&client, &session),
            emis.refresh(&client, &session),
            debt.refresh(&client, &session),
        );
        render_section(&score, &mut sink);
        render_section(&bills, &mut sink);
        render_section(&emis, &mut sink);
        render_section(&debt, &mut sink);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime");
    runtime.block_on(run())
}
