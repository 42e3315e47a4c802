//! Fallback policy — pre-authored artifacts for when the upstream path fails.
//!
//! Every pool entry is hand-authored to already satisfy the length and emoji
//! invariants, so this module can guarantee a valid artifact with no network
//! access and no failure path.

use rand::seq::SliceRandom;

use crate::generation::artifact::{reconcile_tags, Artifact, Provenance, FALLBACK_TAG};
use crate::generation::intent::{ArtifactKind, ComplimentStyle, GenerationIntent};

const FALLBACK_HAIKU_SCORE: u8 = 4;
const FALLBACK_COMPLIMENT_SCORE: u8 = 3;

/// Last-resort artifacts if a pool ever comes up empty. Safe for every style.
const UNIVERSAL_COMPLIMENT: &str =
    "You make the spaces you enter a little warmer, and people notice.";
const UNIVERSAL_HAIKU: &str = "Quiet steady work\ncarries more than it announces\nthank you for yours";

fn compliment_pool(style: ComplimentStyle) -> &'static [&'static str] {
    match style {
        ComplimentStyle::Classic => &[
            "Your dedication to helping others never goes unnoticed. You have a way of making complex things feel simple.",
            "Thanks for being the kind of person who always shows up when it matters most.",
            "Your positive attitude is contagious and makes every interaction better.",
        ],
        ComplimentStyle::Goofy => &[
            "You're like a human ray of sunshine with extra sparkles! ✨",
            "If there was a championship for being awesome, you'd win it every time! 🏆",
            "Your energy is so infectious, I'm pretty sure you could cheer up a grumpy cat! 😸",
        ],
        ComplimentStyle::Poetic => &[
            "Like morning light breaking through clouds, your presence brings clarity to confusion.",
            "You weave words into bridges that connect hearts and minds across distances.",
            "Your kindness flows like a gentle stream, nourishing the soil of every relationship.",
        ],
        ComplimentStyle::Professional => &[
            "Your strategic thinking and attention to detail consistently deliver exceptional results.",
            "The way you approach challenges with both creativity and precision sets a high standard for excellence.",
            "Your professional integrity and collaborative spirit create an environment where everyone can thrive.",
        ],
    }
}

fn haiku_pool(style: ComplimentStyle) -> &'static [&'static str] {
    match style {
        ComplimentStyle::Classic => &[
            "Gentle morning light\nShines through your kind actions now\nWarming every heart",
            "Steady as a rock\nYour support never falters\nStrength in quiet ways",
            "Like a gentle breeze\nYour presence brings fresh insight\nTo every moment",
        ],
        ComplimentStyle::Goofy => &[
            "Sparkles in your eyes\nJoy bubbles up like soda\nPop! There goes my heart ✨",
            "Giggle like a stream\nFlowing through the workday bright\nSplash! Fun everywhere",
            "Bounce like a bunny\nEnergy that never stops\nHop! Skip! Jump! Yay! 🐰",
        ],
        ComplimentStyle::Poetic => &[
            "Petals fall like words\nEach syllable a blessing\nPoetry in motion",
            "Moonlight on still water\nReflects your inner beauty\nRipples of kindness",
            "Mountains touch the sky\nYour spirit reaches higher still\nEagles soar with you",
        ],
        ComplimentStyle::Professional => &[
            "Precision in thought\nLeads to excellence achieved\nMastery displayed",
            "Collaboration flows\nLike rivers joining oceans\nStrength in unity",
            "Innovation sparks\nFrom your creative mind\nFuture takes shape",
        ],
    }
}

/// Supplies a guaranteed-valid substitute artifact for the intent. Selection
/// within a pool is uniform-random (presentation variety only); everything
/// else is deterministic. Never fails.
pub fn supply(intent: &GenerationIntent) -> Artifact {
    let (pool, universal, score) = match intent.kind {
        ArtifactKind::Compliment => (
            compliment_pool(intent.style),
            UNIVERSAL_COMPLIMENT,
            FALLBACK_COMPLIMENT_SCORE,
        ),
        ArtifactKind::Haiku => (
            haiku_pool(intent.style),
            UNIVERSAL_HAIKU,
            FALLBACK_HAIKU_SCORE,
        ),
    };

    let text = pool
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(universal);

    let mut raw_tags: Vec<String> = match intent.kind {
        ArtifactKind::Haiku => vec![
            ArtifactKind::Haiku.tag().to_string(),
            intent.style.tag().to_string(),
        ],
        ArtifactKind::Compliment => vec![intent.style.tag().to_string()],
    };
    for (needle, tag) in [("work", "work"), ("team", "team")] {
        if intent
            .context
            .iter()
            .any(|hint| hint.to_lowercase().contains(needle))
        {
            raw_tags.push(tag.to_string());
        }
    }

    let mut tags = reconcile_tags(raw_tags, intent);
    let fallback_tag = FALLBACK_TAG.to_string();
    if !tags.contains(&fallback_tag) {
        tags.push(fallback_tag);
    }

    Artifact {
        text: text.to_string(),
        sparkle_score: score,
        tags,
        provenance: Provenance::Fallback,
    }
}
