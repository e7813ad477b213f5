//! Deterministic, rules-based reply synthesis.
//!
//! A reply is composed from three fixed tables: an archetype opening, a
//! keyword-selected core, and an archetype tailoring sentence. No state, no
//! failure modes; unknown archetypes get a generic opening and no tailoring.

/// Opening label per known archetype.
const OPENINGS: [(&str, &str); 5] = [
    ("zen", "Zen Reflection:"),
    ("yogi", "Yogic Guidance:"),
    ("astrologer", "Astrological Insight:"),
    ("monk", "Monastic Wisdom:"),
    ("sufi", "Sufi Whisper:"),
];

const GENERIC_OPENING: &str = "Guidance:";

/// Tailoring sentence per known archetype. Each entry carries its own
/// leading space so composition can append it directly to the core.
const TAILORINGS: [(&str, &str); 5] = [
    (
        "zen",
        " Embrace simplicity—wash the bowl, one mindful action at a time.",
    ),
    (
        "yogi",
        " Align breath and intention; the posture of your day shapes the posture of your mind.",
    ),
    (
        "astrologer",
        " Trust timing; not every seed sprouts in the same season.",
    ),
    (
        "monk",
        " Choose quiet courage. Consistency is a humble miracle.",
    ),
    (
        "sufi",
        " Let love polish the heart; dance gently with what is.",
    ),
];

/// A topic bucket: keyword cues and the core reply they select.
/// Buckets are priority-ordered; the first match wins.
struct Topic {
    keywords: &'static [&'static str],
    core: &'static str,
}

const TOPICS: [Topic; 4] = [
    Topic {
        keywords: &["stress", "anxious", "anxiety", "overwhelmed"],
        core: "Place a hand on your heart. Inhale for 4, hold for 4, exhale for 6. \
               Notice one thing you can see, hear, and feel. Your mind will follow your breath.",
    },
    Topic {
        keywords: &["purpose", "meaning", "direction"],
        core: "Purpose unfolds in small, honest steps. Name one value you refuse to abandon; \
               take one action today that honors it.",
    },
    Topic {
        keywords: &["love", "relationship", "breakup", "heart"],
        core: "Love matures through presence and boundaries. Speak your needs with kindness; \
               listen without preparing your defense.",
    },
    Topic {
        keywords: &["career", "job", "work"],
        core: "Treat your work as a dojo: show up, practice, reflect. Choose the smallest improvement \
               you can repeat for 7 days; let results compound.",
    },
];

const SILENCE_CORE: &str =
    "Silence can be a teacher. Breathe, observe, and allow the next question to arise naturally.";

const DEFAULT_CORE: &str =
    "Return to the body: relax the jaw, soften the shoulders. Ask: What is truly needed now? \
     Let the simple, compassionate response lead your next move.";

/// Synthesize a reply for `archetype` to `user_message`.
///
/// Pure and deterministic: identical inputs always produce identical output.
pub fn synthesize_reply(archetype: &str, user_message: &str) -> String {
    let message = user_message.trim();
    let archetype = archetype.to_lowercase();

    let opening = lookup(&OPENINGS, &archetype).unwrap_or(GENERIC_OPENING);
    let core = core_reply(message);
    let tailoring = lookup(&TAILORINGS, &archetype).unwrap_or("");

    format!("{opening} {core}{tailoring}")
}

fn core_reply(message: &str) -> &'static str {
    if message.is_empty() {
        return SILENCE_CORE;
    }

    let lowered = message.to_lowercase();
    TOPICS
        .iter()
        .find(|topic| topic.keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(DEFAULT_CORE, |topic| topic.core)
}

fn lookup(table: &'static [(&str, &str)], archetype: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == archetype)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_selects_silence_core_for_every_archetype() {
        for (archetype, opening) in OPENINGS {
            let reply = synthesize_reply(archetype, "   ");
            assert!(reply.starts_with(opening), "unexpected opening in {reply}");
            assert!(reply.contains(SILENCE_CORE));
        }
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let first = synthesize_reply("monk", "I feel overwhelmed");
        let second = synthesize_reply("monk", "I feel overwhelmed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_stress_bucket_wins_over_lower_priority_buckets() {
        // "anxious" (stress) and "job" (career) both appear; stress wins.
        let reply = synthesize_reply("zen", "I'm anxious about my job");
        assert!(reply.contains("Place a hand on your heart."));
        assert!(!reply.contains("Treat your work as a dojo"));
    }

    #[test]
    fn test_bucket_matching_is_case_insensitive() {
        let reply = synthesize_reply("yogi", "SO MUCH STRESS LATELY");
        assert!(reply.contains("Your mind will follow your breath."));
    }

    #[test]
    fn test_purpose_bucket_wins_over_relationship() {
        let reply = synthesize_reply("sufi", "What is the meaning of love?");
        assert!(reply.contains("Purpose unfolds in small, honest steps."));
    }

    #[test]
    fn test_relationship_bucket_wins_over_career() {
        let reply = synthesize_reply("zen", "My breakup is affecting my work");
        assert!(reply.contains("Love matures through presence and boundaries."));
    }

    #[test]
    fn test_unmatched_message_gets_default_core() {
        let reply = synthesize_reply("monk", "Tell me something");
        assert!(reply.contains("Return to the body: relax the jaw, soften the shoulders."));
    }

    #[test]
    fn test_unknown_archetype_gets_generic_opening_and_no_tailoring() {
        let reply = synthesize_reply("oracle", "I need direction");
        assert!(reply.starts_with("Guidance: "));
        assert!(reply.ends_with("take one action today that honors it."));
    }

    #[test]
    fn test_archetype_lookup_is_case_insensitive() {
        let reply = synthesize_reply("Zen", "hello there");
        assert!(reply.starts_with("Zen Reflection:"));
        assert!(reply.ends_with("wash the bowl, one mindful action at a time."));
    }

    #[test]
    fn test_composition_shape() {
        let reply = synthesize_reply("astrologer", "");
        assert_eq!(
            reply,
            "Astrological Insight: Silence can be a teacher. Breathe, observe, and allow the \
             next question to arise naturally. Trust timing; not every seed sprouts in the \
             same season."
        );
    }
}
