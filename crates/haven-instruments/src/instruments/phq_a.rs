use crate::scoring::{item, ItemDefinition, ScoreRange};
use crate::Instrument;

/// PHQ-A: Patient Health Questionnaire, adolescent version.
/// Items rated 0–3 over the last two weeks; the full instrument totals 0–27.
/// The intake asks four of its items.
pub struct PhqA;

pub const ID: &str = "phq_a";

impl Instrument for PhqA {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        "PHQ-A"
    }

    fn items(&self) -> &[ItemDefinition] {
        static ITEMS: std::sync::LazyLock<Vec<ItemDefinition>> = std::sync::LazyLock::new(|| {
            vec![
                item("interest", "Little interest or pleasure in doing things"),
                item("mood", "Feeling down, depressed, irritable, or hopeless"),
                item(
                    "sleep",
                    "Trouble falling or staying asleep, or sleeping too much",
                ),
                item("appetite", "Poor appetite, weight loss, or overeating"),
            ]
        });
        &ITEMS
    }

    fn total_range(&self) -> ScoreRange {
        ScoreRange { min: 0, max: 27 }
    }
}
