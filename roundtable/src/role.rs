//! Meeting participant descriptors.

use crate::client::GenerationOptions;
use serde::{Deserialize, Serialize};

/// A role-played meeting participant.
///
/// A `Role` is a static descriptor (identifier, objective, persona text)
/// that grounds the prompt of every stage it is attached to. Roles are
/// created at configuration time and never mutated; stages share them
/// through `Arc<Role>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// The unique identifier of the role.
    pub id: String,
    /// What the participant is trying to achieve in the meeting.
    pub objective: String,
    /// Persona text grounding the participant's voice and expertise.
    pub persona: String,
    /// Per-role generation override; falls back to the pipeline default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerationOptions>,
}

impl Role {
    /// Creates a new role.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        objective: impl Into<String>,
        persona: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            objective: objective.into(),
            persona: persona.into(),
            options: None,
        }
    }

    /// Overrides the pipeline-level generation options for this role.
    #[must_use]
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = Some(options);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_creation() {
        let role = Role::new(
            "market-analyst",
            "Provide accurate market insight",
            "You are a sharp market analyst.",
        );

        assert_eq!(role.id, "market-analyst");
        assert!(role.options.is_none());
    }

    #[test]
    fn test_role_options_override() {
        let role = Role::new("writer", "Write well", "You write.")
            .with_options(GenerationOptions::new(0.3, 2000));

        let options = role.options.unwrap();
        assert!((options.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(options.max_tokens, 2000);
    }

    #[test]
    fn test_role_serialization_skips_missing_options() {
        let role = Role::new("a", "b", "c");
        let json = serde_json::to_string(&role).unwrap();
        assert!(!json.contains("options"));
    }
}
