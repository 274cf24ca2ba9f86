//! haven-instruments
//!
//! Screening instrument definitions and the scoring rules applied to a
//! finished intake. Pure data and pure functions, no I/O.

pub mod error;
pub mod instruments;
pub mod scoring;

use haven_core::models::answer::{Frequency, OrdinalLabel};

use error::InstrumentError;
use scoring::{ItemDefinition, ScoreRange};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g., "phq_a", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-A").
    fn name(&self) -> &str;

    /// The items the intake asks about, in response order.
    fn items(&self) -> &[ItemDefinition];

    /// Range of the full instrument's total score.
    fn total_range(&self) -> ScoreRange;

    /// Look up an item by ID.
    fn item(&self, item_id: &str) -> Result<&ItemDefinition, InstrumentError> {
        self.items()
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| InstrumentError::UnknownItem {
                instrument_id: self.id().to_string(),
                item_id: item_id.to_string(),
            })
    }

    /// Sum item responses through the frequency map, clamped to the total
    /// range. Missing responses count as zero.
    fn score(&self, responses: &[Frequency]) -> u8 {
        let sum: u32 = responses
            .iter()
            .take(self.items().len())
            .map(|f| u32::from(scoring::frequency_score(*f)))
            .sum();
        let range = self.total_range();
        sum.clamp(u32::from(range.min), u32::from(range.max)) as u8
    }

    /// Format responses as structured text for a reviewer or a prompt.
    fn to_structured_input(&self, responses: &[Frequency]) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for (item, response) in self.items().iter().zip(responses) {
            output.push_str(&format!(
                "- {}: {} ({})\n",
                item.name,
                response.label(),
                scoring::frequency_score(*response)
            ));
        }
        output.push_str(&format!("\nTotal: {}\n", self.score(responses)));
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq_a::PhqA),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
