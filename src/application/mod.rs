pub mod use_cases;

pub use use_cases::compose::PromptComposer;
pub use use_cases::generation::GenerationSession;
