use serde::{Deserialize, Serialize};

/// Raw multi-line endpoint description as typed by the user. Only the first
/// non-empty line feeds the current generation; trailing lines are inert.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EndpointSpec {
    pub content: String,
}

impl EndpointSpec {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// First non-empty line, trimmed. `None` when the text is empty or
    /// whitespace only.
    pub fn first_endpoint(&self) -> Option<&str> {
        self.content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
    }
}
