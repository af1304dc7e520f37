use crate::domain::category::Category;
use crate::domain::test_case::TestOutcome;

/// Per-session state. Exactly one variant holds at a time; transitions
/// replace the whole value, nothing is patched in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading {
        category: Category,
    },
    Ready {
        category: Category,
        outcome: TestOutcome,
    },
    Failed {
        category: Category,
    },
}

impl SessionState {
    /// Entered when a new generation starts; discards any previous result.
    pub fn begin(category: Category) -> Self {
        SessionState::Loading { category }
    }

    pub fn ready(category: Category, outcome: TestOutcome) -> Self {
        SessionState::Ready { category, outcome }
    }

    pub fn failed(category: Category) -> Self {
        SessionState::Failed { category }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading { .. })
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            SessionState::Idle => None,
            SessionState::Loading { category }
            | SessionState::Ready { category, .. }
            | SessionState::Failed { category } => Some(*category),
        }
    }
}
