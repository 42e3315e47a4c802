//! Generation intent — the caller's parameters before they become a prompt.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Most hints the UI slider allows; anything beyond this is a caller bug.
pub const MAX_CONTEXT_HINTS: usize = 8;

/// Kind of artifact to generate. Drives template selection and tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Compliment,
    Haiku,
}

impl ArtifactKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ArtifactKind::Compliment => "compliment",
            ArtifactKind::Haiku => "haiku",
        }
    }
}

/// Tone style requested by the user. Goofy is the only style allowed to emit emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplimentStyle {
    #[default]
    Classic,
    Goofy,
    Poetic,
    Professional,
}

impl ComplimentStyle {
    pub fn tag(&self) -> &'static str {
        match self {
            ComplimentStyle::Classic => "classic",
            ComplimentStyle::Goofy => "goofy",
            ComplimentStyle::Poetic => "poetic",
            ComplimentStyle::Professional => "professional",
        }
    }

    /// Emoji are a Goofy-only device — every other style must reject them.
    pub fn allows_emoji(&self) -> bool {
        matches!(self, ComplimentStyle::Goofy)
    }
}

/// Caller-input validation failures. Surfaced to the caller as-is — never
/// silently fixed, never routed to the fallback pool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntentError {
    #[error("relationship cannot be empty")]
    BlankRelationship,

    #[error("at least one context hint is required")]
    EmptyContext,

    #[error("at most {MAX_CONTEXT_HINTS} context hints are allowed, got {0}")]
    TooManyHints(usize),

    #[error("context hints cannot be blank")]
    BlankHint,

    #[error("specificity must be between 1 and 5, got {0}")]
    SpecificityOutOfRange(u8),
}

/// A single generation request as the frontend sends it. Immutable once built.
///
/// Wire shape matches the browser client:
/// `{relationship, context, style, specificity, type, name?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationIntent {
    pub relationship: String,
    /// Ordered, non-empty hint strings. Duplicates are the UI's problem.
    pub context: Vec<String>,
    pub style: ComplimentStyle,
    /// 1 = generic praise, 5 = heavy reuse of the supplied context.
    pub specificity: u8,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    /// Present only when the client-side privacy setting allows sharing it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GenerationIntent {
    /// Validates the intent at the boundary. RequestBuilder revalidates, so an
    /// invalid intent can never reach the upstream call even if a handler
    /// forgets this step.
    pub fn validate(&self) -> Result<(), IntentError> {
        if self.relationship.trim().is_empty() {
            return Err(IntentError::BlankRelationship);
        }
        if self.context.is_empty() {
            return Err(IntentError::EmptyContext);
        }
        if self.context.len() > MAX_CONTEXT_HINTS {
            return Err(IntentError::TooManyHints(self.context.len()));
        }
        if self.context.iter().any(|hint| hint.trim().is_empty()) {
            return Err(IntentError::BlankHint);
        }
        if !(1..=5).contains(&self.specificity) {
            return Err(IntentError::SpecificityOutOfRange(self.specificity));
        }
        Ok(())
    }
}
