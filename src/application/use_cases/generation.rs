use crate::application::use_cases::compose::PromptComposer;
use crate::domain::category::{Category, CategoryTemplates};
use crate::domain::endpoint_spec::EndpointSpec;
use crate::domain::session::SessionState;
use crate::infrastructure::backend::AnalyzeClient;
use crate::infrastructure::diagnostics::DiagnosticsSink;
use crate::infrastructure::response::normalize;
use std::sync::{Arc, Mutex};

/// Per-interaction controller: owns the current category and result/error
/// state, drives the backend call, and feeds the reply through the
/// normalizer. One intended in-flight call at a time; if a newer generation
/// starts anyway, the older completion is discarded (last started wins).
pub struct GenerationSession {
    client: Arc<dyn AnalyzeClient + Send + Sync>,
    diagnostics: Arc<dyn DiagnosticsSink>,
    composer: PromptComposer,
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    state: SessionState,
    token: u64,
}

impl GenerationSession {
    pub fn new(
        client: Arc<dyn AnalyzeClient + Send + Sync>,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self::with_templates(client, diagnostics, CategoryTemplates::default())
    }

    pub fn with_templates(
        client: Arc<dyn AnalyzeClient + Send + Sync>,
        diagnostics: Arc<dyn DiagnosticsSink>,
        templates: CategoryTemplates,
    ) -> Self {
        Self {
            client,
            diagnostics,
            composer: PromptComposer::new(templates),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Runs one generation to its terminal state and returns the session
    /// state afterwards. Empty input is a no-op back to `Idle`, not a
    /// failure. The session stays usable after any outcome.
    pub async fn start_generation(
        &self,
        spec: &EndpointSpec,
        category: Category,
    ) -> SessionState {
        let token = {
            let mut inner = self.inner.lock().unwrap();
            inner.token += 1;
            inner.state = SessionState::begin(category);
            inner.token
        };

        let prompt = match self.composer.compose(spec, category) {
            Ok(prompt) => prompt,
            Err(_) => {
                self.diagnostics.record(
                    "INFO",
                    "Session",
                    "No endpoint text supplied; generation skipped",
                );
                return self.settle(token, SessionState::Idle);
            }
        };

        let next = match self.client.analyze(&prompt).await {
            Ok(reply) => match reply.error_message() {
                Some(message) => {
                    self.diagnostics.record(
                        "ERROR",
                        "Session",
                        &format!("Backend reported error: {}", message),
                    );
                    SessionState::failed(category)
                }
                None => SessionState::ready(category, normalize(&reply, category)),
            },
            Err(err) => {
                self.diagnostics
                    .record("ERROR", "Session", &err.to_string());
                SessionState::failed(category)
            }
        };

        self.settle(token, next)
    }

    /// Applies a completion only if no newer generation has started since
    /// the token was issued; returns whatever state now holds.
    fn settle(&self, token: u64, next: SessionState) -> SessionState {
        let mut inner = self.inner.lock().unwrap();
        if inner.token == token {
            inner.state = next;
        }
        inner.state.clone()
    }
}
