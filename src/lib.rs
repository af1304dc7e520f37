pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::compose::PromptComposer;
pub use application::use_cases::generation::GenerationSession;
pub use domain::category::{Category, CategoryTemplates};
pub use domain::endpoint_spec::EndpointSpec;
pub use domain::error::{AppError, Result};
pub use domain::session::SessionState;
pub use domain::test_case::{FallbackRecord, TestCase, TestOutcome};
pub use infrastructure::backend::{AnalyzeClient, BackendReply, HttpAnalyzeClient};
pub use infrastructure::config::BackendConfig;
pub use infrastructure::diagnostics::{DiagnosticsSink, LogBuffer, LogEntry, TracingSink};
pub use infrastructure::response::normalize;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
}
