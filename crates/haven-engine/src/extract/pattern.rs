//! Deterministic extraction: integers, phrase-matched options, yes/no.
//!
//! Text is compared as lower-cased word sequences, so "2-4 weeks" and
//! "2 to 4 weeks" tokenize cleanly and "weekend" never matches "week".

use haven_core::models::answer::{Age, Choice, Concerns, CrisisScreen, OrdinalLabel, YesNo};
use haven_core::models::question::ChoiceOption;

/// Indicator recorded when the crisis screen is answered yes without a
/// model reading.
pub const AFFIRMATIVE_SCREEN: &str = "affirmative answer to crisis screen";

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "of", "to", "than", "it", "is", "been", "for", "and", "or", "my", "has",
    "have", "about",
];

const AFFIRMATIVE: &[&str] = &[
    "yes",
    "yeah",
    "yep",
    "yup",
    "ya",
    "y",
    "definitely",
    "absolutely",
    "correct",
    "true",
    "sometimes",
    "occasionally",
    "maybe",
    "i think so",
];

const NEGATIVE: &[&str] = &[
    "no", "nope", "nah", "n", "never", "not", "none", "nothing", "false", "don't", "doesn't",
    "hasn't", "haven't",
];

/// Lower-case words with punctuation removed. Apostrophes stay so that
/// "don't" remains one word.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace(['\u{2019}', '\u{2018}'], "'")
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// True when `phrase` appears in `words` as a contiguous run.
pub fn contains_phrase(words: &[String], phrase: &[String]) -> bool {
    !phrase.is_empty()
        && words.len() >= phrase.len()
        && words.windows(phrase.len()).any(|w| w == phrase)
}

/// True when every word of `phrase` appears in `words`, in order.
fn contains_in_order(words: &[String], phrase: &[String]) -> bool {
    let mut remaining = words.iter();
    phrase.iter().all(|p| remaining.any(|w| w == p))
}

/// First integer literal in the text.
pub fn extract_age(raw: &str) -> Age {
    let digits: String = raw
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    match digits.parse::<u8>() {
        Ok(years) => Age::Years(years),
        Err(_) => Age::Unparsed(raw.trim().to_string()),
    }
}

/// Match the answer against the options' phrases.
///
/// A contiguous phrase match wins, longest phrase first. Failing that, a
/// phrase of two or more content words matches when all of them appear in
/// the text in the same order, with other words allowed in between; the
/// phrase with the most content words wins. Phrases containing a negation
/// never match this way. Otherwise the answer is kept verbatim.
pub fn match_choice<T: OrdinalLabel>(raw: &str, options: &[ChoiceOption]) -> Choice<T> {
    let words = tokenize(raw);

    let mut best_phrase: Option<(usize, &str)> = None;
    for option in options {
        for phrase in option.phrases.iter().chain(std::iter::once(&option.label)) {
            let phrase_words = tokenize(phrase);
            if contains_phrase(&words, &phrase_words)
                && best_phrase.is_none_or(|(len, _)| phrase_words.len() > len)
            {
                best_phrase = Some((phrase_words.len(), option.label));
            }
        }
    }

    if let Some(value) = best_phrase.and_then(|(_, label)| T::from_label(label)) {
        return Choice::Matched(value);
    }

    let mut best_spread: Option<(usize, &str)> = None;
    for option in options {
        for phrase in option.phrases {
            let content: Vec<String> = tokenize(phrase)
                .into_iter()
                .filter(|w| !STOPWORDS.contains(&w.as_str()))
                .collect();
            if content.len() < 2 || content.iter().any(|w| NEGATIVE.contains(&w.as_str())) {
                continue;
            }
            if contains_in_order(&words, &content)
                && best_spread.is_none_or(|(len, _)| content.len() > len)
            {
                best_spread = Some((content.len(), option.label));
            }
        }
    }

    match best_spread.and_then(|(_, label)| T::from_label(label)) {
        Some(value) => Choice::Matched(value),
        None => Choice::Verbatim(raw.trim().to_string()),
    }
}

/// Affirmative tokens take precedence over negative ones.
pub fn match_yes_no(raw: &str) -> YesNo {
    let words = tokenize(raw);
    let found = |set: &[&str]| set.iter().any(|t| contains_phrase(&words, &tokenize(t)));

    if found(AFFIRMATIVE) {
        YesNo::Yes
    } else if found(NEGATIVE) {
        YesNo::No
    } else {
        YesNo::Unclear
    }
}

/// Concerns without a model: the whole answer as the summary, split into
/// issues on commas, semicolons, line breaks, and "and".
pub fn split_concerns(raw: &str) -> Concerns {
    let summary = raw.trim().to_string();
    let issues = summary
        .split([',', ';', '\n'])
        .flat_map(|part| part.split(" and "))
        .map(|issue| issue.trim().trim_end_matches(['.', '!', '?']).trim())
        .filter(|issue| !issue.is_empty())
        .map(str::to_string)
        .collect();
    Concerns { summary, issues }
}

/// Crisis screen answered without a model: a yes/no reading of the text.
/// An unclear answer is not flagged here but is kept verbatim for review.
pub fn crisis_screen(raw: &str) -> CrisisScreen {
    match match_yes_no(raw) {
        YesNo::Yes => CrisisScreen {
            flag: true,
            indicators: vec![AFFIRMATIVE_SCREEN.to_string()],
            verbatim: None,
        },
        YesNo::No => CrisisScreen {
            flag: false,
            indicators: Vec::new(),
            verbatim: None,
        },
        YesNo::Unclear => CrisisScreen {
            flag: false,
            indicators: Vec::new(),
            verbatim: Some(raw.trim().to_string()),
        },
    }
}
