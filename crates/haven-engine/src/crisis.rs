//! Crisis detection.
//!
//! Two independent triggers, either one sufficient:
//!
//! 1. the pending question is critical and its answer is affirmative;
//! 2. the raw text contains a crisis phrase, whatever the question.
//!
//! The phrase scan runs on every turn because a parent may disclose risk
//! while answering something unrelated. Phrases match on whole words,
//! case-insensitively. Negation is not considered: "she never said she
//! wants to die" is still flagged.

use haven_core::models::answer::{FieldValue, YesNo};
use haven_core::models::question::Question;

use crate::extract::pattern;

/// Self-harm, suicidal ideation, and violence toward others, in first and
/// third person.
pub const CRISIS_PHRASES: &[&str] = &[
    "kill myself",
    "killing myself",
    "kill herself",
    "kill himself",
    "kill themselves",
    "kill themself",
    "killing herself",
    "killing himself",
    "killing themselves",
    "suicide",
    "suicidal",
    "self harm",
    "self harming",
    "selfharm",
    "hurt myself",
    "hurt herself",
    "hurt himself",
    "hurt themselves",
    "hurting myself",
    "hurting herself",
    "hurting himself",
    "hurting themselves",
    "harm herself",
    "harm himself",
    "harm themselves",
    "harming herself",
    "harming himself",
    "harming themselves",
    "cut herself",
    "cut himself",
    "cut themselves",
    "cutting herself",
    "cutting himself",
    "cutting themselves",
    "end my life",
    "end her life",
    "end his life",
    "end their life",
    "want to die",
    "wants to die",
    "wanted to die",
    "better off dead",
    "don't want to live",
    "doesn't want to live",
    "not want to be alive",
    "overdose",
    "kill someone",
    "kill somebody",
    "kill people",
    "kill others",
    "kill everyone",
    "hurt someone",
    "hurt somebody",
    "hurt others",
    "hurt other people",
    "hurt other kids",
    "stab someone",
    "shoot someone",
    "shoot people",
];

/// Crisis phrases present in `raw`, in table order.
pub fn matched_phrases(raw: &str) -> Vec<&'static str> {
    let words = pattern::tokenize(raw);
    if words.is_empty() {
        return Vec::new();
    }
    CRISIS_PHRASES
        .iter()
        .copied()
        .filter(|phrase| pattern::contains_phrase(&words, &pattern::tokenize(phrase)))
        .collect()
}

/// True when this turn must end the assessment as a crisis.
pub fn is_crisis(raw: &str, value: &FieldValue, question: &Question) -> bool {
    let affirmative_screen = question.critical
        && (value.is_affirmative_crisis() || pattern::match_yes_no(raw) == YesNo::Yes);
    affirmative_screen || !matched_phrases(raw).is_empty()
}
