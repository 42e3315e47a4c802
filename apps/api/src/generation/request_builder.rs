//! Request builder — deterministic, pure mapping from intent to upstream request.
//!
//! No side effects, no network access. The same intent always yields a
//! byte-identical request; any nonce or timestamp is the transport's business.

use crate::generation::intent::{ArtifactKind, GenerationIntent, IntentError};
use crate::generation::prompts::{
    COMPLIMENT_PROMPT_TEMPLATE, COMPLIMENT_SYSTEM, HAIKU_PROMPT_TEMPLATE, HAIKU_SYSTEM,
    NO_NAME_SENTINEL,
};
use crate::llm_client::GenerationRequest;

/// Fixed sampling temperature for all generation calls.
pub const TEMPERATURE: f32 = 0.7;
/// Output cap — bounds the upstream response size. Not user-controlled.
pub const MAX_COMPLETION_TOKENS: u32 = 500;

/// Builds the upstream request for an intent. Fails with `IntentError` rather
/// than emitting a request for an invalid intent.
pub fn build_request(intent: &GenerationIntent) -> Result<GenerationRequest, IntentError> {
    intent.validate()?;

    let (system, template) = match intent.kind {
        ArtifactKind::Compliment => (COMPLIMENT_SYSTEM, COMPLIMENT_PROMPT_TEMPLATE),
        ArtifactKind::Haiku => (HAIKU_SYSTEM, HAIKU_PROMPT_TEMPLATE),
    };

    let name_line = match &intent.name {
        Some(name) => format!("Name: {name}"),
        None => NO_NAME_SENTINEL.to_string(),
    };

    let user_instructions = template
        .replace("{style}", intent.style.tag())
        .replace("{relationship}", &intent.relationship)
        .replace("{specificity}", &intent.specificity.to_string())
        .replace("{context}", &intent.context.join(", "))
        .replace("{name_line}", &name_line);

    Ok(GenerationRequest {
        system_instructions: system.to_string(),
        user_instructions,
        temperature: TEMPERATURE,
        max_tokens: MAX_COMPLETION_TOKENS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::intent::ComplimentStyle;

    fn intent(kind: ArtifactKind) -> GenerationIntent {
        GenerationIntent {
            relationship: "mentor".to_string(),
            context: vec![
                "patient with questions".to_string(),
                "great at explaining tradeoffs".to_string(),
            ],
            style: ComplimentStyle::Poetic,
            specificity: 4,
            kind,
            name: None,
        }
    }

    #[test]
    fn test_same_intent_builds_identical_request() {
        let intent = intent(ArtifactKind::Compliment);
        let a = build_request(&intent).unwrap();
        let b = build_request(&intent).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_compliment_kind_selects_compliment_template() {
        let request = build_request(&intent(ArtifactKind::Compliment)).unwrap();
        assert_eq!(request.system_instructions, COMPLIMENT_SYSTEM);
        assert!(request.user_instructions.contains("poetic compliment"));
        assert!(!request.user_instructions.contains("5-7-5"));
    }

    #[test]
    fn test_haiku_kind_selects_haiku_template() {
        let request = build_request(&intent(ArtifactKind::Haiku)).unwrap();
        assert_eq!(request.system_instructions, HAIKU_SYSTEM);
        assert!(request.user_instructions.contains("poetic haiku"));
        assert!(request.user_instructions.contains("5-7-5"));
    }

    #[test]
    fn test_hints_joined_comma_separated_in_order() {
        let request = build_request(&intent(ArtifactKind::Compliment)).unwrap();
        assert!(request
            .user_instructions
            .contains("Context: patient with questions, great at explaining tradeoffs"));
    }

    #[test]
    fn test_missing_name_uses_exact_sentinel() {
        let request = build_request(&intent(ArtifactKind::Compliment)).unwrap();
        assert!(request.user_instructions.contains("No specific name provided"));
        assert!(!request.user_instructions.contains("Name:"));
    }

    #[test]
    fn test_present_name_is_interpolated() {
        let mut with_name = intent(ArtifactKind::Compliment);
        with_name.name = Some("Priya".to_string());
        let request = build_request(&with_name).unwrap();
        assert!(request.user_instructions.contains("Name: Priya"));
        assert!(!request.user_instructions.contains(NO_NAME_SENTINEL));
    }

    #[test]
    fn test_relationship_and_specificity_interpolated() {
        let request = build_request(&intent(ArtifactKind::Compliment)).unwrap();
        assert!(request
            .user_instructions
            .contains("for a mentor with specificity level 4"));
    }

    #[test]
    fn test_no_placeholders_left_unfilled() {
        let request = build_request(&intent(ArtifactKind::Haiku)).unwrap();
        assert!(!request.user_instructions.contains('{'));
        assert!(!request.user_instructions.contains('}'));
    }

    #[test]
    fn test_fixed_sampling_parameters() {
        let request = build_request(&intent(ArtifactKind::Compliment)).unwrap();
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(request.max_tokens, 500);
    }

    #[test]
    fn test_empty_context_fails_instead_of_building() {
        let mut bad = intent(ArtifactKind::Compliment);
        bad.context.clear();
        assert_eq!(build_request(&bad), Err(IntentError::EmptyContext));
    }
}
