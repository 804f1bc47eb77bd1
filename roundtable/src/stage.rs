//! Stage specifications.
//!
//! A stage is one step of the meeting: a description template bound to a
//! role, optionally consuming the outputs of earlier stages.

use crate::errors::ConfigError;
use crate::role::Role;
use std::sync::Arc;

/// Specification for a single stage in a meeting pipeline.
///
/// Dependencies are an ordered list, not a set: the outputs of dependency
/// stages are concatenated into the effective prompt in exactly this order.
#[derive(Debug, Clone)]
pub struct StageSpec {
    /// The unique identifier of the stage.
    pub id: String,
    /// The role that speaks during this stage.
    pub role: Arc<Role>,
    /// Description template; `{topic}` is replaced with the meeting topic.
    pub description: String,
    /// Identifiers of earlier stages whose outputs feed this stage, in
    /// prompt order.
    pub dependencies: Vec<String>,
    /// A short statement of the expected deliverable, appended to the
    /// prompt when present.
    pub expected_output: Option<String>,
}

impl StageSpec {
    /// Creates a new stage specification with no dependencies.
    #[must_use]
    pub fn new(id: impl Into<String>, role: Arc<Role>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            description: description.into(),
            dependencies: Vec::new(),
            expected_output: None,
        }
    }

    /// Sets the ordered dependency list.
    #[must_use]
    pub fn with_dependencies(
        mut self,
        deps: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a single dependency.
    #[must_use]
    pub fn with_dependency(mut self, dep: impl Into<String>) -> Self {
        self.dependencies.push(dep.into());
        self
    }

    /// Sets the expected-output note.
    #[must_use]
    pub fn with_expected_output(mut self, expected: impl Into<String>) -> Self {
        self.expected_output = Some(expected.into());
        self
    }

    /// Validates the stage specification in isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the stage depends on itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id.trim().is_empty() {
            return Err(ConfigError::new("Stage id cannot be empty"));
        }
        if self.dependencies.iter().any(|dep| dep == &self.id) {
            return Err(ConfigError::new(format!(
                "Stage '{}' cannot depend on itself",
                self.id
            ))
            .with_stages(vec![self.id.clone()]));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role() -> Arc<Role> {
        Arc::new(Role::new("analyst", "analyze", "You analyze things."))
    }

    #[test]
    fn test_stage_spec_creation() {
        let spec = StageSpec::new("market-analysis", role(), "Analyze the market for '{topic}'.")
            .with_dependencies(["a", "b"])
            .with_expected_output("A short market analysis report");

        assert_eq!(spec.id, "market-analysis");
        assert_eq!(spec.dependencies, vec!["a", "b"]);
        assert!(spec.expected_output.is_some());
    }

    #[test]
    fn test_dependency_order_is_preserved() {
        let spec = StageSpec::new("s", role(), "desc")
            .with_dependency("z")
            .with_dependency("a");

        assert_eq!(spec.dependencies, vec!["z", "a"]);
    }

    #[test]
    fn test_self_dependency_rejected() {
        let spec = StageSpec::new("s", role(), "desc").with_dependency("s");
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_empty_id_rejected() {
        let spec = StageSpec::new("  ", role(), "desc");
        assert!(spec.validate().is_err());
    }
}
