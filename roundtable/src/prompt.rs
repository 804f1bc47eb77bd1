//! Effective-prompt composition.
//!
//! One prompt per stage: persona and objective from the role, the stage's
//! topic-substituted description, the expected deliverable, then the stored
//! outputs of the stage's dependencies, verbatim, labeled by source stage
//! id, in dependency-list order.

use crate::stage::StageSpec;
use std::fmt::Write as _;

/// Placeholder replaced with the meeting topic in stage descriptions.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Substitutes the topic into a description template.
#[must_use]
pub fn substitute_topic(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}

/// Composes the effective prompt for a stage.
///
/// `context` holds `(stage id, stored output)` pairs for the stage's
/// dependencies, already in dependency-list order.
#[must_use]
pub fn compose_prompt(stage: &StageSpec, topic: &str, context: &[(&str, &str)]) -> String {
    let mut prompt = String::new();

    let _ = writeln!(prompt, "{}", stage.role.persona.trim());
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Your objective: {}", stage.role.objective.trim());
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "{}", substitute_topic(stage.description.trim(), topic));

    if let Some(expected) = &stage.expected_output {
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "Expected output: {}", expected.trim());
    }

    if !context.is_empty() {
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "Context from earlier stages:");
        for (id, output) in context {
            let _ = writeln!(prompt);
            let _ = writeln!(prompt, "--- output of {id} ---");
            let _ = writeln!(prompt, "{output}");
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use std::sync::Arc;

    fn stage() -> StageSpec {
        let role = Arc::new(Role::new(
            "market-analyst",
            "Provide accurate market insight",
            "You are a sharp market analyst.",
        ));
        StageSpec::new(
            "market-analysis",
            role,
            "Analyze the market opportunity for '{topic}'.",
        )
        .with_expected_output("A short market analysis report")
    }

    #[test]
    fn test_topic_substitution() {
        assert_eq!(
            substitute_topic("Plan '{topic}' now. Again: {topic}", "an app"),
            "Plan 'an app' now. Again: an app"
        );
    }

    #[test]
    fn test_prompt_contains_role_and_description() {
        let prompt = compose_prompt(&stage(), "a reading assistant", &[]);

        assert!(prompt.contains("You are a sharp market analyst."));
        assert!(prompt.contains("Your objective: Provide accurate market insight"));
        assert!(prompt.contains("Analyze the market opportunity for 'a reading assistant'."));
        assert!(prompt.contains("Expected output: A short market analysis report"));
        assert!(!prompt.contains("Context from earlier stages"));
    }

    #[test]
    fn test_context_is_verbatim_labeled_and_ordered() {
        let context = [
            ("alpha", "first output text"),
            ("beta", "second output text"),
        ];
        let prompt = compose_prompt(&stage(), "t", &context);

        let alpha_label = prompt.find("--- output of alpha ---").unwrap();
        let alpha_body = prompt.find("first output text").unwrap();
        let beta_label = prompt.find("--- output of beta ---").unwrap();
        let beta_body = prompt.find("second output text").unwrap();

        assert!(alpha_label < alpha_body);
        assert!(alpha_body < beta_label);
        assert!(beta_label < beta_body);
    }
}
