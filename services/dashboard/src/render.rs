use crate::sync::{SectionResource, SectionState, Synchronizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// Where section state and transient notifications get written. The terminal
/// sink is the production implementation; tests substitute a recording sink.
pub trait DisplaySink {
    fn section(&mut self, name: &str, lines: &[String]);
    fn toast(&mut self, level: ToastLevel, message: &str);
}

/// Writes the section's current state to the sink: rendered lines, the empty
/// placeholder with zeroed meta, or the failure placeholder.
pub fn render_section<R: SectionResource>(sync: &Synchronizer<R>, sink: &mut dyn DisplaySink) {
    let resource = sync.resource();
    match sync.state() {
        SectionState::Loading => {
            sink.section(resource.name(), &["Loading...".to_string()]);
        }
        SectionState::Rendered(view) => {
            sink.section(resource.name(), &resource.lines(view));
        }
        SectionState::Empty => {
            let empty = resource.empty_view();
            let mut lines = vec![empty.placeholder.to_string()];
            if let Some(count) = empty.count_text {
                lines.push(format!("Count: {count}"));
            }
            if let Some(meta) = empty.meta_text {
                lines.push(meta.to_string());
            }
            sink.section(resource.name(), &lines);
        }
        SectionState::Failed(_) => {
            sink.section(
                resource.name(),
                &[resource.failure_placeholder().to_string()],
            );
        }
    }
}

pub struct TerminalSink;

impl DisplaySink for TerminalSink {
    fn section(&mut self, name: &str, lines: &[String]) {
        println!("── {name} ──");
        for line in lines {
            println!("   {line}");
        }
    }

    fn toast(&mut self, level: ToastLevel, message: &str) {
        let tag = match level {
            ToastLevel::Info => "info",
            ToastLevel::Success => "ok",
            ToastLevel::Error => "error",
        };
        println!("[{tag}] {message}");
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records everything written to it, for assertions.
    #[derive(Default)]
    pub struct RecordingSink {
        pub sections: Vec<(String, Vec<String>)>,
        pub toasts: Vec<(ToastLevel, String)>,
    }

    impl DisplaySink for RecordingSink {
        fn section(&mut self, name: &str, lines: &[String]) {
            self.sections.push((name.to_string(), lines.to_vec()));
        }

        fn toast(&mut self, level: ToastLevel, message: &str) {
            self.toasts.push((level, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;
    use crate::sections::BillsSection;
    use api_client::ApiError;
    use serde_json::json;

    #[test]
    fn empty_bills_render_zeroed_placeholder() {
        let mut sync = Synchronizer::new(BillsSection);
        sync.apply(Ok(json!({"bills": []})));

        let mut sink = RecordingSink::default();
        render_section(&sync, &mut sink);

        let (name, lines) = &sink.sections[0];
        assert_eq!(name, "bills");
        assert_eq!(
            lines,
            &[
                "No upcoming bills found".to_string(),
                "Count: 0".to_string(),
                "No bills due".to_string()
            ]
        );
    }

    #[test]
    fn failed_bills_render_the_failure_placeholder() {
        let mut sync = Synchronizer::new(BillsSection);
        sync.apply(Err(ApiError::Status {
            status: 500,
            message: "API Error: 500".to_string(),
        }));

        let mut sink = RecordingSink::default();
        render_section(&sync, &mut sink);

        assert_eq!(sink.sections[0].1, vec!["Failed to load bills".to_string()]);
    }
}
