use std::fs;

use api_client::HistoryPeriod;
use dashboard::render::{render_section, DisplaySink, ToastLevel};
use dashboard::sections::ScoreSection;
use dashboard::session::Session;
use dashboard::sync::{SectionState, Synchronizer};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn session_round_trips_through_its_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("session.json");

    let mut session = Session::default();
    session.set_token("tok-123".to_string());
    session.set_period(HistoryPeriod::OneYear);
    session.save(&path).expect("save session");

    let restored = Session::load(&path);
    assert_eq!(restored.token(), Some("tok-123"));
    assert_eq!(restored.period(), HistoryPeriod::OneYear);
}

#[test]
fn missing_or_corrupt_session_starts_fresh() {
    let dir = tempdir().expect("create temp dir");

    let missing = Session::load(&dir.path().join("nope.json"));
    assert_eq!(missing.token(), None);
    assert_eq!(missing.period(), HistoryPeriod::SixMonths);

    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").expect("write corrupt file");
    let corrupt = Session::load(&path);
    assert_eq!(corrupt.token(), None);
}

#[derive(Default)]
struct CollectingSink {
    sections: Vec<(String, Vec<String>)>,
}

impl DisplaySink for CollectingSink {
    fn section(&mut self, name: &str, lines: &[String]) {
        self.sections.push((name.to_string(), lines.to_vec()));
    }

    fn toast(&mut self, _level: ToastLevel, _message: &str) {}
}

#[test]
fn score_scenario_renders_through_the_sink() {
    let mut sync = Synchronizer::new(ScoreSection);
    sync.apply(Ok(json!({"score": 742, "trend": 12, "rating": "good"})));
    assert!(matches!(sync.state(), SectionState::Rendered(_)));

    let mut sink = CollectingSink::default();
    render_section(&sync, &mut sink);

    let (name, lines) = &sink.sections[0];
    assert_eq!(name, "score");
    assert!(lines[0].contains("742"));
    assert!(lines[0].contains("good"));
    assert!(lines.iter().any(|l| l.contains("+12 pts")));
}
