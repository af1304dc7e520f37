use crate::domain::category::{Category, CategoryTemplates};
use crate::domain::endpoint_spec::EndpointSpec;
use crate::domain::error::{AppError, Result};

/// Builds the backend prompt for one category: first non-empty endpoint line,
/// a newline, then the category instruction. No escaping, no truncation.
pub struct PromptComposer {
    templates: CategoryTemplates,
}

impl PromptComposer {
    pub fn new(templates: CategoryTemplates) -> Self {
        Self { templates }
    }

    pub fn compose(&self, spec: &EndpointSpec, category: Category) -> Result<String> {
        let endpoint = spec.first_endpoint().ok_or(AppError::EmptyInput)?;
        Ok(format!("{}\n{}", endpoint, self.templates.instruction(category)))
    }
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new(CategoryTemplates::default())
    }
}
