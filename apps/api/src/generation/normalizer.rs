//! Response normalizer — turns raw model output into a validated artifact.
//!
//! Upstream output is semi-structured at best: sometimes clean JSON, sometimes
//! JSON wrapped in a markdown fence, sometimes plain prose. The normalizer
//! strips wrappers, parses, repairs what is repairable, and rejects what is
//! not. The one invariant it must hold: no artifact leaves this module
//! violating the length, score, or tag contracts — regardless of what
//! upstream sent.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::generation::artifact::{
    coerce_score, reconcile_tags, Artifact, Provenance, DEFAULT_SPARKLE_SCORE,
};
use crate::generation::intent::GenerationIntent;

/// Hard cap on artifact text length, in characters.
pub const MAX_TEXT_CHARS: usize = 280;

/// Normalization failures. All of them route the caller to the fallback pool;
/// the distinction exists for logging only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("upstream content was empty")]
    EmptyContent,

    #[error("upstream content too long: {chars} chars (max {MAX_TEXT_CHARS})")]
    ContentTooLong { chars: usize },

    #[error("emoji found in a non-goofy artifact")]
    PolicyViolation,
}

/// The structured payload the upstream contract asks for. Score and tags stay
/// loosely typed — upstream cannot be trusted to honor the field types, so
/// every access goes through the coercion rules.
#[derive(Debug, Deserialize)]
struct ModelPayload {
    /// Models drift between "compliment" and "text" for the body field.
    #[serde(alias = "text")]
    compliment: Option<String>,
    #[serde(default, rename = "sparkleScore")]
    sparkle_score: Value,
    #[serde(default)]
    tags: Value,
}

/// Normalizes raw model output against the originating intent.
///
/// Steps: fence strip → structural parse (salvaging plain prose) → field
/// coercion → length bound → emoji policy. Errors route to the fallback pool.
pub fn normalize(raw: &str, intent: &GenerationIntent) -> Result<Artifact, NormalizeError> {
    let unwrapped = strip_code_fences(raw);

    if unwrapped.is_empty() {
        return Err(NormalizeError::EmptyContent);
    }

    let (text, sparkle_score, tags) = match serde_json::from_str::<ModelPayload>(unwrapped) {
        Ok(payload) => match payload.compliment.filter(|t| !t.trim().is_empty()) {
            Some(text) => (
                text,
                coerce_score(&payload.sparkle_score),
                reconcile_tags(string_items(payload.tags, intent), intent),
            ),
            // Parsed but carries no usable body — salvage the raw text instead.
            None => salvage(unwrapped, intent),
        },
        // Plain prose instead of JSON — keep it as low-confidence content.
        Err(_) => salvage(unwrapped, intent),
    };

    let chars = text.chars().count();
    if chars > MAX_TEXT_CHARS {
        // Never truncate — truncation can cut a haiku mid-line
        return Err(NormalizeError::ContentTooLong { chars });
    }

    if !intent.style.allows_emoji() && contains_emoji(&text) {
        // Reject, don't strip — stripping can corrupt multi-codepoint sequences
        return Err(NormalizeError::PolicyViolation);
    }

    Ok(Artifact {
        text,
        sparkle_score,
        tags,
        provenance: Provenance::Upstream,
    })
}

/// Salvage path for unparseable-but-nonempty output: the unwrapped text
/// verbatim, default score, kind + style tags.
fn salvage(unwrapped: &str, intent: &GenerationIntent) -> (String, u8, Vec<String>) {
    (
        unwrapped.to_string(),
        DEFAULT_SPARKLE_SCORE,
        vec![
            intent.kind.tag().to_string(),
            intent.style.tag().to_string(),
        ],
    )
}

/// Interprets the loosely-typed tags value: a non-array coerces to the style
/// tag alone (reconciliation inserts it); non-string array entries are dropped.
fn string_items(tags: Value, intent: &GenerationIntent) -> Vec<String> {
    match tags {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => vec![intent.style.tag().to_string()],
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
/// Tolerates fences with or without a trailing newline.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Fixed deny-list of emoji Unicode blocks: pictographs, emoticons, transport,
/// supplemental/extended symbols, misc symbols, dingbats, regional indicators.
pub(crate) fn contains_emoji(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{1F300}'..='\u{1F5FF}'
            | '\u{1F600}'..='\u{1F64F}'
            | '\u{1F680}'..='\u{1F6FF}'
            | '\u{1F900}'..='\u{1F9FF}'
            | '\u{1FA70}'..='\u{1FAFF}'
            | '\u{2600}'..='\u{26FF}'
            | '\u{2700}'..='\u{27BF}'
            | '\u{1F1E6}'..='\u{1F1FF}'
        )
    })
}
