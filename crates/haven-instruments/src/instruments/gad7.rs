use crate::scoring::{item, ItemDefinition, ScoreRange};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder scale.
/// Seven items rated 0–3, total 0–21. The intake asks three of them.
pub struct Gad7;

pub const ID: &str = "gad7";

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn items(&self) -> &[ItemDefinition] {
        static ITEMS: std::sync::LazyLock<Vec<ItemDefinition>> = std::sync::LazyLock::new(|| {
            vec![
                item("nervousness", "Feeling nervous, anxious, or on edge"),
                item("worry", "Not being able to stop or control worrying"),
                item("restlessness", "Trouble relaxing"),
            ]
        });
        &ITEMS
    }

    fn total_range(&self) -> ScoreRange {
        ScoreRange { min: 0, max: 21 }
    }
}
