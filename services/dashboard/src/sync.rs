use api_client::{ApiClient, ApiError, Endpoint};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::session::Session;

/// One round trip against the backend. `ApiClient` is the real transport;
/// synchronizers and actions only see this seam.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn send(
        &self,
        endpoint: &Endpoint,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<Value, ApiError>;

    async fn fetch(&self, endpoint: &Endpoint, token: Option<&str>) -> Result<Value, ApiError> {
        self.send(endpoint, None, token).await
    }
}

impl Fetch for ApiClient {
    async fn send(
        &self,
        endpoint: &Endpoint,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        self.execute(endpoint, body.as_ref(), token).await
    }
}

/// Display lifecycle of one dashboard section.
///
/// `Loading` is only re-entered externally: initial load, the refresh timer,
/// a user refresh action, or the follow-up refresh after a mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<V> {
    Loading,
    Rendered(V),
    Empty,
    Failed(String),
}

/// Outcome of projecting a raw payload: either renderable state or a
/// legitimately empty resource. Empty is not a failure.
#[derive(Debug, PartialEq)]
pub enum Projection<V> {
    View(V),
    Empty,
}

#[derive(Debug, Error)]
#[error("malformed payload: {0}")]
pub struct ProjectionError(#[from] serde_json::Error);

/// Placeholder texts shown while a section has no renderable data. Count and
/// meta fields are zeroed alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyView {
    pub placeholder: &'static str,
    pub count_text: Option<&'static str>,
    pub meta_text: Option<&'static str>,
}

/// One dashboard section's resource descriptor: which endpoint backs it, how
/// its payload becomes display state, and what its fallbacks look like.
pub trait SectionResource {
    type View: Clone + PartialEq;

    fn name(&self) -> &'static str;

    fn endpoint(&self, session: &Session) -> Endpoint;

    fn project(&self, payload: Value) -> Result<Projection<Self::View>, ProjectionError>;

    fn empty_view(&self) -> EmptyView;

    fn failure_placeholder(&self) -> &'static str;

    /// Lays the view out as display lines for the sink.
    fn lines(&self, view: &Self::View) -> Vec<String>;
}

/// Owns one section's display state. Sections never share state, so one
/// section's failure cannot block or abort another's refresh.
pub struct Synchronizer<R: SectionResource> {
    resource: R,
    state: SectionState<R::View>,
    last_view: Option<R::View>,
}

impl<R: SectionResource> Synchronizer<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            state: SectionState::Loading,
            last_view: None,
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn state(&self) -> &SectionState<R::View> {
        &self.state
    }

    /// The most recent successfully rendered view. Kept stale across failures
    /// until the next successful refresh; never partially merged.
    pub fn last_view(&self) -> Option<&R::View> {
        self.last_view.as_ref()
    }

    /// One full refresh round trip. Overlapping refreshes of the same section
    /// are not de-duplicated or cancelled; the last response to arrive wins.
    pub async fn refresh<F: Fetch>(&mut self, client: &F, session: &Session) {
        self.state = SectionState::Loading;
        let result = client
            .fetch(&self.resource.endpoint(session), session.token())
            .await;
        self.apply(result);
    }

    /// Folds one fetch result into the section state.
    pub fn apply(&mut self, result: Result<Value, ApiError>) {
        match result {
            Ok(payload) => match self.resource.project(payload) {
                Ok(Projection::View(view)) => {
                    self.last_view = Some(view.clone());
                    self.state = SectionState::Rendered(view);
                }
                Ok(Projection::Empty) => {
                    self.last_view = None;
                    self.state = SectionState::Empty;
                }
                Err(e) => {
                    warn!(section = self.resource.name(), "{e}");
                    self.state = SectionState::Failed(e.to_string());
                }
            },
            Err(e) => {
                warn!(section = self.resource.name(), "fetch failed: {e}");
                self.state = SectionState::Failed(e.to_string());
            }
        }
    }
}
