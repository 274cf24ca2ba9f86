//! Model-assisted extraction: prompt construction, reply parsing, and the
//! fallback used when a reply cannot be read.
//!
//! Each [`ModelSchema`] has an explicit output contract. A reply is accepted
//! only if it parses against that contract; individual out-of-vocabulary
//! labels degrade to `not_reported`, and an unreadable reply degrades to the
//! deterministic fallback for the schema.

use haven_bedrock::error::GenerationError;
use haven_bedrock::generate::{GenerationMessage, GenerationOptions, GenerationRequest};
use haven_bedrock::parse::parse_reply;
use haven_core::models::answer::{
    AnxietyItems, Concerns, CrisisScreen, DepressionItems, FieldValue, Frequency, OrdinalLabel,
};
use haven_core::models::question::{ModelSchema, Question};
use haven_instruments::Instrument;
use haven_instruments::instruments::{gad7::Gad7, phq_a::PhqA};
use serde::Deserialize;
use tracing::warn;

use super::pattern;

const SYSTEM_PREAMBLE: &str = "\
You are assisting a structured intake for a children's mental health service. \
A parent has answered one intake question about their child. \
Convert the answer into the JSON object described below. \
Use only what the parent actually said; never guess or add information. \
Reply with the JSON object only, with no commentary.";

#[derive(Debug, Deserialize)]
struct ConcernsReply {
    summary: String,
    #[serde(default)]
    issues: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CrisisReply {
    crisis: bool,
    #[serde(default)]
    indicators: Vec<String>,
}

/// Build the single generation request for `question`.
pub fn build_request(
    schema: ModelSchema,
    question: &Question,
    raw: &str,
    options: GenerationOptions,
) -> GenerationRequest {
    let system = format!("{SYSTEM_PREAMBLE}\n\n{}", output_contract(schema));
    let user = format!(
        "Question asked: {}\n\nParent's answer:\n<answer>\n{}\n</answer>",
        question.prompt,
        raw.trim()
    );
    GenerationRequest {
        messages: vec![GenerationMessage::system(system), GenerationMessage::user(user)],
        options,
    }
}

fn output_contract(schema: ModelSchema) -> String {
    match schema {
        ModelSchema::Concerns => "\
Output shape:
{\"summary\": string, \"issues\": [string]}

- summary: one or two neutral sentences restating the parent's concerns.
- issues: each distinct concern as a short phrase, in the parent's words."
            .to_string(),
        ModelSchema::DepressionItems => items_contract(&PhqA),
        ModelSchema::AnxietyItems => items_contract(&Gad7),
        ModelSchema::Crisis => "\
Output shape:
{\"crisis\": boolean, \"indicators\": [string]}

- crisis: true if the answer mentions any self-harm, suicidal thoughts, a wish \
to die or not be alive, or intent to hurt others, past or present, including \
uncertain or partial disclosures. Otherwise false.
- indicators: a short phrase for each such thing mentioned; empty when crisis is false."
            .to_string(),
    }
}

fn items_contract(instrument: &dyn Instrument) -> String {
    let keys = instrument
        .items()
        .iter()
        .map(|item| format!("\"{}\": LABEL", item.id))
        .collect::<Vec<_>>()
        .join(", ");
    let meanings = instrument
        .items()
        .iter()
        .map(|item| format!("- {}: {}", item.id, item.name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Output shape:\n{{{keys}}}\n\n\
         LABEL is one of: {vocabulary}\n\n\
         Meaning of each key:\n{meanings}\n\n\
         Frequencies refer to the last two weeks. Use \"not_at_all\" only when the \
         parent says the symptom is absent, and \"not_reported\" when the answer \
         does not mention it.",
        vocabulary = Frequency::vocabulary(),
    )
}

/// Parse a reply strictly against the schema's contract.
pub fn parse(schema: ModelSchema, reply: &str) -> Result<FieldValue, GenerationError> {
    match schema {
        ModelSchema::Concerns => {
            let parsed: ConcernsReply = parse_reply(reply)?;
            if parsed.summary.trim().is_empty() {
                return Err(GenerationError::SchemaViolation(
                    "empty concerns summary".to_string(),
                ));
            }
            Ok(FieldValue::Concerns(Concerns {
                summary: parsed.summary.trim().to_string(),
                issues: parsed
                    .issues
                    .into_iter()
                    .map(|i| i.trim().to_string())
                    .filter(|i| !i.is_empty())
                    .collect(),
            }))
        }
        ModelSchema::DepressionItems => {
            match parse_item_labels(&PhqA, reply)?.as_slice() {
                &[interest, mood, sleep, appetite] => Ok(FieldValue::Depression(DepressionItems {
                    interest,
                    mood,
                    sleep,
                    appetite,
                })),
                other => Err(item_count_mismatch(PhqA.id(), 4, other.len())),
            }
        }
        ModelSchema::AnxietyItems => {
            match parse_item_labels(&Gad7, reply)?.as_slice() {
                &[nervousness, worry, restlessness] => Ok(FieldValue::Anxiety(AnxietyItems {
                    nervousness,
                    worry,
                    restlessness,
                })),
                other => Err(item_count_mismatch(Gad7.id(), 3, other.len())),
            }
        }
        ModelSchema::Crisis => {
            let parsed: CrisisReply = parse_reply(reply)?;
            Ok(FieldValue::Crisis(CrisisScreen {
                flag: parsed.crisis,
                indicators: parsed.indicators,
                verbatim: None,
            }))
        }
    }
}

fn item_count_mismatch(instrument_id: &str, expected: usize, got: usize) -> GenerationError {
    GenerationError::SchemaViolation(format!(
        "{instrument_id} expects {expected} items, instrument defines {got}"
    ))
}

/// One label per instrument item, in item order. Missing or unknown labels
/// become `not_reported`.
fn parse_item_labels(
    instrument: &dyn Instrument,
    reply: &str,
) -> Result<Vec<Frequency>, GenerationError> {
    let object: serde_json::Map<String, serde_json::Value> = parse_reply(reply)?;

    Ok(instrument
        .items()
        .iter()
        .map(|item| {
            let value = object.get(&item.id);
            match value.and_then(|v| v.as_str()).and_then(Frequency::from_label) {
                Some(frequency) => frequency,
                None => {
                    warn!(
                        instrument = instrument.id(),
                        item = %item.id,
                        value = ?value,
                        "out-of-vocabulary item label, using not_reported"
                    );
                    Frequency::NotReported
                }
            }
        })
        .collect())
}

/// The deterministic value used when no usable reply is available.
pub fn fallback(schema: ModelSchema, raw: &str) -> FieldValue {
    match schema {
        ModelSchema::Concerns => FieldValue::Concerns(pattern::split_concerns(raw)),
        ModelSchema::DepressionItems => FieldValue::Depression(DepressionItems::default()),
        ModelSchema::AnxietyItems => FieldValue::Anxiety(AnxietyItems::default()),
        ModelSchema::Crisis => FieldValue::Crisis(pattern::crisis_screen(raw)),
    }
}

/// Parse `reply`, degrading to [`fallback`] when it does not conform.
pub fn parse_or_fallback(schema: ModelSchema, reply: &str, raw: &str) -> FieldValue {
    match parse(schema, reply) {
        Ok(value) => value,
        Err(e) => {
            warn!(?schema, error = %e, "unusable extraction reply, using fallback");
            fallback(schema, raw)
        }
    }
}
