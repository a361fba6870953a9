//! The four answer slots.

use std::collections::BTreeMap;

use fourw_core::category::Category;

/// Current assignment of values to the four categories.
///
/// Each category holds at most one value. Placing into an occupied slot
/// hands the previous value back to the caller instead of dropping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSlotSet<V = String> {
    slots: BTreeMap<Category, V>,
}

impl<V> Default for AnswerSlotSet<V> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }
}

impl<V> AnswerSlotSet<V> {
    /// Creates an empty slot set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `value` into `category`, returning the evicted previous value.
    pub fn place(&mut self, category: Category, value: V) -> Option<V> {
        self.slots.insert(category, value)
    }

    /// Empties `category`, returning what it held.
    pub fn clear(&mut self, category: Category) -> Option<V> {
        self.slots.remove(&category)
    }

    /// Empties every slot.
    pub fn clear_all(&mut self) {
        self.slots.clear();
    }

    /// Value currently in `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&V> {
        self.slots.get(&category)
    }

    /// `true` once all four categories are occupied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Category::ALL.iter().all(|c| self.slots.contains_key(c))
    }

    /// Empty categories in presentation order.
    #[must_use]
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| !self.slots.contains_key(c))
            .collect()
    }

    /// Category whose value satisfies `predicate`, if any.
    pub fn slot_of(&self, mut predicate: impl FnMut(&V) -> bool) -> Option<Category> {
        self.slots
            .iter()
            .find_map(|(category, value)| predicate(value).then_some(*category))
    }

    /// Read-only view of the occupied slots.
    #[must_use]
    pub fn snapshot(&self) -> &BTreeMap<Category, V> {
        &self.slots
    }
}
