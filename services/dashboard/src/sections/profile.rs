use api_client::Endpoint;
use serde::Deserialize;
use serde_json::Value;

use crate::session::Session;
use crate::sync::{EmptyView, Projection, ProjectionError, SectionResource};

#[derive(Debug, Deserialize)]
struct ProfilePayload {
    name: Option<String>,
    email: Option<String>,
    #[serde(rename = "isPremium", default)]
    is_premium: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub avatar_letter: char,
    pub name: String,
    pub email: String,
    pub status_line: String,
}

pub struct ProfileSection;

impl SectionResource for ProfileSection {
    type View = ProfileView;

    fn name(&self) -> &'static str {
        "profile"
    }

    fn endpoint(&self, _session: &Session) -> Endpoint {
        Endpoint::Profile
    }

    fn project(&self, payload: Value) -> Result<Projection<ProfileView>, ProjectionError> {
        let profile: ProfilePayload = serde_json::from_value(payload)?;
        let name = profile.name.filter(|n| !n.is_empty()).unwrap_or_else(|| "User".to_string());
        let avatar_letter = name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U');
        Ok(Projection::View(ProfileView {
            avatar_letter,
            name,
            email: profile.email.unwrap_or_default(),
            status_line: if profile.is_premium {
                "Premium Member".to_string()
            } else {
                "Free User".to_string()
            },
        }))
    }

    fn empty_view(&self) -> EmptyView {
        // The profile resource is a single record, never a list.
        EmptyView {
            placeholder: "Error loading",
            count_text: None,
            meta_text: None,
        }
    }

    fn failure_placeholder(&self) -> &'static str {
        "Error loading"
    }

    fn lines(&self, view: &ProfileView) -> Vec<String> {
        vec![
            format!("[{}] {}", view.avatar_letter, view.name),
            view.status_line.clone(),
        ]
    }
}
