use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical test-case record. Every field is optional; normalization does
/// not fill defaults, the display layer substitutes its own placeholder.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TestCase {
    pub request_url: Option<String>,
    pub http_method: Option<String>,
    pub headers: Option<Value>,
    pub request_body: Option<Value>,
    pub expected_response_code: Option<Value>,
    pub expected_response_body: Option<Value>,
    pub description: Option<String>,
}

impl TestCase {
    /// Lenient projection of one normalized element. Fields of the wrong
    /// type, missing fields, and non-object elements all come back as `None`
    /// rather than an error; the element itself stays untouched in the
    /// normalized sequence.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).filter(|v| !v.is_null()).cloned();
        Self {
            request_url: value
                .get("request_url")
                .and_then(Value::as_str)
                .map(str::to_string),
            http_method: value
                .get("http_method")
                .and_then(Value::as_str)
                .map(str::to_string),
            headers: field("headers"),
            request_body: field("request_body"),
            expected_response_code: field("expected_response_code"),
            expected_response_body: field("expected_response_body"),
            description: value
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Single-record stand-in shown when the backend's testcases string cannot
/// be decoded. Carries the original text verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FallbackRecord {
    pub raw_response: String,
}

/// Result of normalization: either the canonical (possibly empty) sequence,
/// taken verbatim from the backend, or exactly one fallback record.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum TestOutcome {
    Cases(Vec<Value>),
    Unparsed(FallbackRecord),
}

impl TestOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, TestOutcome::Unparsed(_))
    }

    /// Number of records the display layer will render.
    pub fn len(&self) -> usize {
        match self {
            TestOutcome::Cases(cases) => cases.len(),
            TestOutcome::Unparsed(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
