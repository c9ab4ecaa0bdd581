//! Rule composition engine.

use super::types::RankRule;

/// Engine for composing and applying ranking rules in precedence order.
///
/// Rules are consulted left to right: a later rule only matters when
/// every earlier rule produced a tie. Ties remaining after all rules
/// preserve input order (stable sort) — no further tie-break is defined.
///
/// # Examples
///
/// ```ignore
/// let sequencer = Sequencer::new()
///     .with_rule(ByTier)
///     .with_rule(ByPod)
///     .with_rule(ByRack);
///
/// let visiting_order = sequencer.sort(&tickets);
/// ```
pub struct Sequencer<T> {
    rules: Vec<Box<dyn RankRule<T>>>,
}

impl<T> Sequencer<T> {
    /// Creates an engine with no rules; without rules, input order is kept.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule at the lowest precedence position.
    pub fn with_rule<R: RankRule<T> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in precedence order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Computes the composite key for a single item.
    fn composite_key(&self, item: &T) -> Vec<u32> {
        self.rules.iter().map(|rule| rule.key(item)).collect()
    }

    /// Ranks items and returns indices into the slice in visiting order.
    pub fn sort_indices(&self, items: &[T]) -> Vec<usize> {
        if self.rules.is_empty() {
            return (0..items.len()).collect();
        }

        let keys: Vec<Vec<u32>> = items.iter().map(|item| self.composite_key(item)).collect();

        let mut indices: Vec<usize> = (0..items.len()).collect();
        // sort_by is stable, so equal composite keys keep input order
        indices.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
        indices
    }

    /// Ranks items and returns references in visiting order.
    pub fn sort<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.sort_indices(items)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }

    /// Returns the index of the first stop (best-ranked item).
    ///
    /// Returns `None` if the slice is empty.
    pub fn first(&self, items: &[T]) -> Option<usize> {
        self.sort_indices(items).first().copied()
    }

    /// Reorders the eligible subset of `items`, leaving everything else in
    /// place.
    ///
    /// The output is a permutation of the input: slots holding items for
    /// which `eligible` returns `true` are refilled with those same items
    /// in rank order, and every ineligible item keeps its exact position.
    /// Nothing is dropped or mutated.
    pub fn resequence<F>(&self, items: Vec<T>, eligible: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let keys: Vec<Vec<u32>> = items.iter().map(|item| self.composite_key(item)).collect();

        let slots: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|&(_, item)| eligible(item))
            .map(|(i, _)| i)
            .collect();

        // Rank the eligible items; stable sort keeps input order on ties.
        let mut order = slots.clone();
        order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));

        // target[i] = output position of the item currently at index i
        let mut target: Vec<usize> = (0..items.len()).collect();
        for (&src, &dst) in order.iter().zip(&slots) {
            target[src] = dst;
        }

        let mut tagged: Vec<(usize, T)> = items.into_iter().enumerate().collect();
        tagged.sort_by_key(|&(i, _)| target[i]);
        tagged.into_iter().map(|(_, item)| item).collect()
    }
}

impl<T> Default for Sequencer<T> {
    fn default() -> Self {
        Self::new()
    }
}
