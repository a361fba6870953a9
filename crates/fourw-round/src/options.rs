//! Draggable answer options and their shuffled pool.

use fourw_catalog::domain::item::CatalogItem;
use fourw_core::category::Category;
use fourw_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

/// One draggable chip.
///
/// `option_id` is the chip's position in the unshuffled pool, so two chips
/// with the same text stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Positional identity within the round.
    pub option_id: usize,
    /// Text shown on the chip and compared when scoring.
    pub text: String,
}

/// Builds the shuffled option pool for `item`.
///
/// For each category in order, the correct answer is followed by that
/// category's distractors; ids are assigned in that order and the result is
/// shuffled. Items without distractors yield exactly four options.
pub fn build_pool(item: &CatalogItem, rng: &mut dyn DeterministicRng) -> Vec<AnswerOption> {
    let mut pool: Vec<AnswerOption> = Category::ALL
        .into_iter()
        .flat_map(|category| {
            std::iter::once(item.answers.get(category)).chain(
                item.distractors(category)
                    .iter()
                    .map(String::as_str),
            )
        })
        .enumerate()
        .map(|(option_id, text)| AnswerOption {
            option_id,
            text: text.to_owned(),
        })
        .collect();

    shuffle(&mut pool, rng);
    pool
}

/// Uniform in-place Fisher–Yates shuffle.
#[allow(clippy::cast_possible_truncation)]
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn DeterministicRng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_u32_range(0, i as u32) as usize;
        items.swap(i, j);
    }
}
