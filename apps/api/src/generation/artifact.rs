//! Artifact — the normalized, invariant-satisfying result of one generation call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::generation::intent::{ArtifactKind, GenerationIntent};

/// Score used whenever upstream supplies a non-numeric or out-of-range value.
pub const DEFAULT_SPARKLE_SCORE: u8 = 3;

/// Tag the core appends to every fallback-supplied artifact. Upstream never
/// sets this — the UI relies on it to disclose degraded results.
pub const FALLBACK_TAG: &str = "fallback";

/// Where an artifact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Upstream,
    Fallback,
}

/// A validated compliment or haiku. Constructed once per generation call and
/// immutable after — persistence of favorites/history happens client-side, by
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub text: String,
    /// Always within [1,5].
    pub sparkle_score: u8,
    /// Deduplicated, insertion-order preserved. Always contains the style tag;
    /// haikus always carry "haiku".
    pub tags: Vec<String>,
    pub provenance: Provenance,
}

/// Coerces an upstream score value to an integer in [1,5]. Anything that is
/// not a number in range becomes the default — a silent repair, since the
/// score is decorative.
pub fn coerce_score(value: &Value) -> u8 {
    match value.as_f64() {
        Some(score) if (1.0..=5.0).contains(&score) => score.round() as u8,
        _ => DEFAULT_SPARKLE_SCORE,
    }
}

/// Reconciles upstream tags against the intent: deduplicates preserving
/// first-seen order, guarantees the style tag (inserted at the front when
/// absent), and guarantees "haiku" on haikus.
pub fn reconcile_tags(raw: Vec<String>, intent: &GenerationIntent) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(raw.len() + 2);
    for tag in raw {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    let style_tag = intent.style.tag().to_string();
    if !tags.contains(&style_tag) {
        tags.insert(0, style_tag);
    }

    if intent.kind == ArtifactKind::Haiku {
        let haiku_tag = ArtifactKind::Haiku.tag().to_string();
        if !tags.contains(&haiku_tag) {
            tags.push(haiku_tag);
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::intent::ComplimentStyle;
    use serde_json::json;

    fn intent(kind: ArtifactKind, style: ComplimentStyle) -> GenerationIntent {
        GenerationIntent {
            relationship: "friend".to_string(),
            context: vec!["always on time".to_string()],
            style,
            specificity: 2,
            kind,
            name: None,
        }
    }

    #[test]
    fn test_score_in_range_is_kept() {
        assert_eq!(coerce_score(&json!(1)), 1);
        assert_eq!(coerce_score(&json!(4)), 4);
        assert_eq!(coerce_score(&json!(5)), 5);
    }

    #[test]
    fn test_score_zero_coerces_to_default() {
        assert_eq!(coerce_score(&json!(0)), 3);
    }

    #[test]
    fn test_score_ninety_nine_coerces_to_default() {
        assert_eq!(coerce_score(&json!(99)), 3);
    }

    #[test]
    fn test_non_numeric_score_coerces_to_default() {
        assert_eq!(coerce_score(&json!("five")), 3);
        assert_eq!(coerce_score(&json!(null)), 3);
        assert_eq!(coerce_score(&json!([4])), 3);
    }

    #[test]
    fn test_fractional_in_range_score_rounds() {
        assert_eq!(coerce_score(&json!(4.0)), 4);
        assert_eq!(coerce_score(&json!(2.6)), 3);
    }

    #[test]
    fn test_negative_score_coerces_to_default() {
        assert_eq!(coerce_score(&json!(-2)), 3);
    }

    #[test]
    fn test_tags_deduplicated_preserving_first_seen_order() {
        let intent = intent(ArtifactKind::Compliment, ComplimentStyle::Classic);
        let tags = reconcile_tags(
            vec![
                "classic".to_string(),
                "work".to_string(),
                "classic".to_string(),
                "team".to_string(),
                "work".to_string(),
            ],
            &intent,
        );
        assert_eq!(tags, vec!["classic", "work", "team"]);
    }

    #[test]
    fn test_missing_style_tag_inserted_at_front() {
        let intent = intent(ArtifactKind::Compliment, ComplimentStyle::Professional);
        let tags = reconcile_tags(vec!["work".to_string()], &intent);
        assert_eq!(tags, vec!["professional", "work"]);
    }

    #[test]
    fn test_haiku_tag_guaranteed_for_haikus() {
        let intent = intent(ArtifactKind::Haiku, ComplimentStyle::Goofy);
        let tags = reconcile_tags(vec!["goofy".to_string()], &intent);
        assert!(tags.contains(&"haiku".to_string()));
    }

    #[test]
    fn test_haiku_tag_not_duplicated_when_upstream_supplies_it() {
        let intent = intent(ArtifactKind::Haiku, ComplimentStyle::Poetic);
        let tags = reconcile_tags(vec!["haiku".to_string(), "nature".to_string()], &intent);
        assert_eq!(
            tags.iter().filter(|t| t.as_str() == "haiku").count(),
            1,
            "haiku tag must appear exactly once"
        );
    }

    #[test]
    fn test_compliments_do_not_get_haiku_tag() {
        let intent = intent(ArtifactKind::Compliment, ComplimentStyle::Classic);
        let tags = reconcile_tags(vec![], &intent);
        assert_eq!(tags, vec!["classic"]);
    }

    #[test]
    fn test_provenance_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Provenance::Upstream).unwrap(),
            r#""upstream""#
        );
        assert_eq!(
            serde_json::to_string(&Provenance::Fallback).unwrap(),
            r#""fallback""#
        );
    }
}
