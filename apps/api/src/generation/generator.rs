//! Generation pipeline — build → one upstream attempt → normalize → fallback.
//!
//! The contract is total for any valid intent: the caller always gets an
//! artifact, never a transport or normalization error. Absorbed failures are
//! logged and disclosed through fallback provenance instead. There is no retry
//! loop here — a user-initiated "try again" simply re-enters the pipeline.

use tracing::{info, warn};

use crate::generation::artifact::Artifact;
use crate::generation::fallback;
use crate::generation::intent::{GenerationIntent, IntentError};
use crate::generation::normalizer::normalize;
use crate::generation::request_builder::build_request;
use crate::llm_client::CompletionBackend;

/// Runs one full generation. Only caller-input errors escape; every upstream
/// or normalization failure degrades to the fallback pool.
pub async fn generate_artifact(
    backend: &dyn CompletionBackend,
    intent: &GenerationIntent,
) -> Result<Artifact, IntentError> {
    let request = build_request(intent)?;

    let raw = match backend.complete(&request).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("upstream call failed, serving fallback: {e}");
            return Ok(fallback::supply(intent));
        }
    };

    match normalize(&raw, intent) {
        Ok(artifact) => {
            info!(
                "generated {} ({:?}, specificity {})",
                intent.kind.tag(),
                intent.style,
                intent.specificity
            );
            Ok(artifact)
        }
        Err(e) => {
            warn!("normalization failed ({e}), serving fallback");
            Ok(fallback::supply(intent))
        }
    }
}
