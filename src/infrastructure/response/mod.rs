use crate::domain::category::Category;
use crate::domain::test_case::{FallbackRecord, TestOutcome};
use crate::infrastructure::backend::BackendReply;
use serde_json::{Map, Value};

/// Shape of the `testcases` payload, decoded once at the boundary instead of
/// probing types repeatedly downstream.
#[derive(Debug, Clone, PartialEq)]
enum TestcasesPayload {
    Text(String),
    Keyed(Map<String, Value>),
    List(Vec<Value>),
    Other(Value),
}

impl TestcasesPayload {
    fn classify(value: Value) -> Self {
        match value {
            Value::String(s) => TestcasesPayload::Text(s),
            Value::Object(map) => TestcasesPayload::Keyed(map),
            Value::Array(list) => TestcasesPayload::List(list),
            other => TestcasesPayload::Other(other),
        }
    }
}

/// Reconciles the backend's inconsistent `testcases` shapes into one
/// canonical sequence. Never fails: undecodable strings downgrade to a
/// single fallback record carrying the original text, and any unrecognized
/// shape yields an empty sequence.
///
/// Rule order matters: a string payload is JSON-decoded before any shape
/// inspection, and the category-keyed object check runs before the bare
/// array check because the backend wraps its output either way.
pub fn normalize(reply: &BackendReply, category: Category) -> TestOutcome {
    let raw = reply.testcases.clone().unwrap_or(Value::Null);

    let payload = match TestcasesPayload::classify(raw) {
        TestcasesPayload::Text(raw_text) => match serde_json::from_str::<Value>(&raw_text) {
            Ok(decoded) => TestcasesPayload::classify(decoded),
            Err(_) => {
                return TestOutcome::Unparsed(FallbackRecord {
                    raw_response: raw_text,
                })
            }
        },
        payload => payload,
    };

    match payload {
        TestcasesPayload::Keyed(map) => match map.get(&category.response_key()) {
            Some(Value::Array(cases)) => TestOutcome::Cases(cases.clone()),
            _ => TestOutcome::Cases(Vec::new()),
        },
        TestcasesPayload::List(cases) => TestOutcome::Cases(cases),
        // A string that decoded to yet another string is not decoded again,
        // it falls through here like any other unusable shape.
        TestcasesPayload::Text(_) | TestcasesPayload::Other(_) => TestOutcome::Cases(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(testcases: Value) -> BackendReply {
        BackendReply {
            testcases: Some(testcases),
            error: None,
        }
    }

    #[test]
    fn test_keyed_object_extracts_category_array() {
        let cases = json!([
            {"http_method": "GET", "request_url": "/users", "expected_response_code": 404}
        ]);
        let outcome = normalize(
            &reply(json!({ "negative_tests": cases.clone() })),
            Category::Negative,
        );
        assert_eq!(outcome, TestOutcome::Cases(cases.as_array().unwrap().clone()));
    }

    #[test]
    fn test_keyed_object_wrong_category_is_empty() {
        let outcome = normalize(
            &reply(json!({ "negative_tests": [{"a": 1}] })),
            Category::Security,
        );
        assert_eq!(outcome, TestOutcome::Cases(vec![]));
    }

    #[test]
    fn test_keyed_object_without_expected_key_is_empty() {
        let outcome = normalize(&reply(json!({})), Category::Positive);
        assert_eq!(outcome, TestOutcome::Cases(vec![]));
    }

    #[test]
    fn test_key_present_but_not_array_is_empty() {
        let outcome = normalize(
            &reply(json!({ "edge_tests": "not an array" })),
            Category::Edge,
        );
        assert_eq!(outcome, TestOutcome::Cases(vec![]));
    }

    #[test]
    fn test_bare_array_passes_through_for_any_category() {
        let cases = vec![json!({"a": 1}), json!({"b": 2})];
        for category in Category::ALL {
            let outcome = normalize(&reply(json!(cases.clone())), category);
            assert_eq!(outcome, TestOutcome::Cases(cases.clone()));
        }
    }

    #[test]
    fn test_array_elements_kept_verbatim_and_ordered() {
        let cases = vec![json!("loose string"), json!(7), json!({"unknown_field": true})];
        let outcome = normalize(&reply(json!(cases.clone())), Category::Positive);
        assert_eq!(outcome, TestOutcome::Cases(cases));
    }

    #[test]
    fn test_string_payload_decodes_then_keyed_lookup() {
        let wrapped = json!({ "positive_tests": [{"request_url": "/users"}] });
        let encoded = serde_json::to_string(&wrapped).unwrap();
        let outcome = normalize(&reply(json!(encoded)), Category::Positive);
        assert_eq!(
            outcome,
            TestOutcome::Cases(vec![json!({"request_url": "/users"})])
        );
    }

    #[test]
    fn test_string_payload_decodes_to_bare_array() {
        let encoded = serde_json::to_string(&json!([{"x": 1}])).unwrap();
        let outcome = normalize(&reply(json!(encoded)), Category::Edge);
        assert_eq!(outcome, TestOutcome::Cases(vec![json!({"x": 1})]));
    }

    #[test]
    fn test_undecodable_string_becomes_fallback_with_original_text() {
        let outcome = normalize(&reply(json!("not json")), Category::Positive);
        assert_eq!(
            outcome,
            TestOutcome::Unparsed(FallbackRecord {
                raw_response: "not json".to_string()
            })
        );
    }

    #[test]
    fn test_string_decoding_to_string_is_not_decoded_again() {
        // "\"still text\"" decodes to a plain string, which is unusable.
        let outcome = normalize(&reply(json!("\"still text\"")), Category::Negative);
        assert_eq!(outcome, TestOutcome::Cases(vec![]));
    }

    #[test]
    fn test_scalar_shapes_are_empty() {
        for value in [json!(null), json!(42), json!(true), json!(1.5)] {
            let outcome = normalize(&reply(value), Category::Security);
            assert_eq!(outcome, TestOutcome::Cases(vec![]));
        }
    }

    #[test]
    fn test_absent_testcases_field_is_empty() {
        let outcome = normalize(&BackendReply::default(), Category::Positive);
        assert_eq!(outcome, TestOutcome::Cases(vec![]));
    }
}
