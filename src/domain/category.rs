use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Positive,
    Negative,
    Edge,
    Security,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Positive,
        Category::Negative,
        Category::Edge,
        Category::Security,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "positive",
            Category::Negative => "negative",
            Category::Edge => "edge",
            Category::Security => "security",
        }
    }

    /// Key the backend uses when it wraps the result in a keyed object,
    /// e.g. `positive_tests`.
    pub fn response_key(&self) -> String {
        format!("{}_tests", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable category -> instruction table. Injected into the composer at
/// construction so tests can substitute their own wording.
#[derive(Debug, Clone)]
pub struct CategoryTemplates {
    positive: String,
    negative: String,
    edge: String,
    security: String,
}

fn default_instruction(category: Category) -> String {
    format!(
        "Generate only {category} test cases for this API endpoint. \
         Return ONLY a valid JSON array of {category} test cases as described \
         in the previous format. Do not include any other categories or explanations.",
        category = category.as_str()
    )
}

impl CategoryTemplates {
    pub fn new(positive: String, negative: String, edge: String, security: String) -> Self {
        Self {
            positive,
            negative,
            edge,
            security,
        }
    }

    pub fn instruction(&self, category: Category) -> &str {
        match category {
            Category::Positive => &self.positive,
            Category::Negative => &self.negative,
            Category::Edge => &self.edge,
            Category::Security => &self.security,
        }
    }
}

impl Default for CategoryTemplates {
    fn default() -> Self {
        Self {
            positive: default_instruction(Category::Positive),
            negative: default_instruction(Category::Negative),
            edge: default_instruction(Category::Edge),
            security: default_instruction(Category::Security),
        }
    }
}
