//! Answer cycle for one scenario or story.

use fourw_catalog::domain::item::CatalogItem;
use fourw_core::category::Category;
use fourw_core::error::QuizError;
use fourw_core::rng::DeterministicRng;
use tracing::debug;

use crate::options::{AnswerOption, build_pool};
use crate::score::{CategoryOutcome, ScoreResult};
use crate::slots::AnswerSlotSet;

/// One round: the item being answered, its option pool, and the slots.
///
/// Every option is either in the available pool or in exactly one slot;
/// moving an option never duplicates or loses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEngine {
    item: CatalogItem,
    options: Vec<AnswerOption>,
    slots: AnswerSlotSet<AnswerOption>,
}

impl RoundEngine {
    /// Starts a round for `item`: empty slots and a freshly shuffled pool.
    #[must_use]
    pub fn start_round(item: CatalogItem, rng: &mut dyn DeterministicRng) -> Self {
        let options = build_pool(&item, rng);
        Self::with_pool(item, options)
    }

    /// Starts a round for `item` with an already built pool.
    #[must_use]
    pub fn with_pool(item: CatalogItem, options: Vec<AnswerOption>) -> Self {
        Self {
            item,
            options,
            slots: AnswerSlotSet::new(),
        }
    }

    /// Moves this engine on to `item` with an already built pool. Every slot
    /// is emptied; options from the previous round are discarded.
    pub fn load_round(&mut self, item: CatalogItem, options: Vec<AnswerOption>) {
        self.item = item;
        self.options = options;
        self.slots.clear_all();
    }

    /// The item being answered.
    #[must_use]
    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    /// The full pool in shuffled order, including placed options.
    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Options not currently in any slot, in pool order.
    #[must_use]
    pub fn available(&self) -> Vec<&AnswerOption> {
        self.options
            .iter()
            .filter(|o| self.slots.slot_of(|placed| placed.option_id == o.option_id).is_none())
            .collect()
    }

    /// Current slot assignments.
    #[must_use]
    pub fn slots(&self) -> &AnswerSlotSet<AnswerOption> {
        &self.slots
    }

    /// Places option `option_id` into `category`.
    ///
    /// The option may come from the pool or from another slot (which is then
    /// emptied). Returns the option evicted from `category`, which is back in
    /// the available pool.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Validation` if `option_id` is not in this round's
    /// pool.
    pub fn place(
        &mut self,
        category: Category,
        option_id: usize,
    ) -> Result<Option<AnswerOption>, QuizError> {
        let option = self
            .options
            .iter()
            .find(|o| o.option_id == option_id)
            .cloned()
            .ok_or_else(|| {
                QuizError::Validation(format!(
                    "option {option_id} is not part of round for item {}",
                    self.item.id
                ))
            })?;

        match self.slots.slot_of(|placed| placed.option_id == option_id) {
            Some(current) if current == category => return Ok(None),
            Some(current) => {
                self.slots.clear(current);
            }
            None => {}
        }

        let evicted = self.slots.place(category, option);
        if let Some(previous) = &evicted {
            debug!(%category, evicted = %previous.text, "slot occupant returned to pool");
        }
        Ok(evicted)
    }

    /// Empties `category`, returning its option to the pool.
    pub fn clear(&mut self, category: Category) -> Option<AnswerOption> {
        self.slots.clear(category)
    }

    /// Scores the filled slots against the item's correct answers using
    /// exact string equality.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::IncompleteAnswer` if any slot is empty; nothing is
    /// scored in that case.
    pub fn submit(&self) -> Result<ScoreResult, QuizError> {
        let missing = self.slots.missing();
        if !missing.is_empty() {
            return Err(QuizError::IncompleteAnswer { missing });
        }

        let outcomes = Category::ALL
            .into_iter()
            .filter_map(|category| {
                let placed = self.slots.get(category)?;
                let expected = self.item.answers.get(category);
                Some(CategoryOutcome {
                    category,
                    placed: placed.text.clone(),
                    expected: expected.to_owned(),
                    correct: placed.text == expected,
                })
            })
            .collect();

        Ok(ScoreResult::from_outcomes(outcomes))
    }
}
