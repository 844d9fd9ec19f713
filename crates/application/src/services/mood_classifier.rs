//! Mood classification
//!
//! Maps free-form mood text to a [`MoodTone`] using an ordered rule table.
//! Rules are checked in order and the first rule with any keyword present in
//! the text wins, regardless of where in the text the keyword appears.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use domain::MoodTone;

/// A keyword that selects a tone
#[derive(Debug, Clone, Copy)]
struct MoodRule {
    keyword: &'static str,
    tone: MoodTone,
}

/// Rules in priority order
static MOOD_RULES: &[MoodRule] = &[
    MoodRule {
        keyword: "плох",
        tone: MoodTone::Fatigued,
    },
    MoodRule {
        keyword: "устал",
        tone: MoodTone::Fatigued,
    },
    MoodRule {
        keyword: "сплю",
        tone: MoodTone::Fatigued,
    },
    MoodRule {
        keyword: "не хочу",
        tone: MoodTone::Fatigued,
    },
    MoodRule {
        keyword: "норм",
        tone: MoodTone::Steady,
    },
    MoodRule {
        keyword: "средне",
        tone: MoodTone::Steady,
    },
    MoodRule {
        keyword: "обычно",
        tone: MoodTone::Steady,
    },
];

/// Matcher over all keywords; pattern ids index into `MOOD_RULES`
///
/// Cyrillic needs full Unicode lowercasing, so input is lowercased before
/// matching instead of relying on ASCII case folding.
static MOOD_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    let patterns: Vec<&str> = MOOD_RULES.iter().map(|r| r.keyword).collect();
    #[allow(clippy::expect_used)] // Infallible with valid static patterns
    AhoCorasick::new(&patterns).expect("Failed to build mood matcher")
});

/// Classify mood text
///
/// Empty or unrecognised text is [`MoodTone::Eager`].
pub fn classify_mood(text: &str) -> MoodTone {
    let lowered = text.to_lowercase();
    MOOD_MATCHER
        .find_overlapping_iter(&lowered)
        .map(|m| m.pattern().as_usize())
        .min()
        .and_then(|idx| MOOD_RULES.get(idx))
        .map_or(MoodTone::Eager, |rule| rule.tone)
}
