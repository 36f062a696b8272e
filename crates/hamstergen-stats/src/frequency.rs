//! Frequency counting with deterministic mode resolution.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of items and exposes them as counts, fractions of the
/// total, and the mode.
///
/// First-occurrence order is remembered so that [`mode`](Self::mode) is
/// deterministic: ties resolve to the item seen first, independent of hash
/// ordering.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    counts: HashMap<T, usize>,
    order: Vec<T>,
    total: usize,
}

impl<T> FrequencyTable<T>
where
    T: Clone + Eq + Hash,
{
    #[must_use]
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut counts = HashMap::new();
        let mut order = Vec::new();
        let mut total = 0;
        for item in items {
            let count = counts.entry(item.clone()).or_insert(0);
            if *count == 0 {
                order.push(item);
            }
            *count += 1;
            total += 1;
        }
        Self {
            counts,
            order,
            total,
        }
    }

    /// Total number of counted items (with multiplicity).
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// The item's share of the total, in `[0, 1]`. Zero for unseen items and
    /// for an empty table.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fraction(&self, item: &T) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(item) as f64 / self.total as f64
    }

    /// All observed items mapped to their fraction of the total.
    #[must_use]
    pub fn fractions(&self) -> HashMap<T, f64> {
        self.order
            .iter()
            .map(|item| (item.clone(), self.fraction(item)))
            .collect()
    }

    /// The most frequent item; ties resolve to the item observed first.
    /// `None` for an empty table.
    #[must_use]
    pub fn mode(&self) -> Option<&T> {
        let mut best: Option<(&T, usize)> = None;
        for item in &self.order {
            let count = self.count(item);
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((item, count));
            }
        }
        best.map(|(item, _)| item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_fractions() {
        let table = FrequencyTable::new(["a", "b", "a", "a", "c"]);
        assert_eq!(table.total(), 5);
        assert_eq!(table.count(&"a"), 3);
        assert_eq!(table.count(&"z"), 0);
        assert!((table.fraction(&"a") - 0.6).abs() < 1e-12);
        assert_eq!(table.fraction(&"z"), 0.0);
    }

    #[test]
    fn test_mode_prefers_first_seen_on_tie() {
        let table = FrequencyTable::new(["b", "a", "a", "b"]);
        assert_eq!(table.mode(), Some(&"b"));
    }

    #[test]
    fn test_empty_table() {
        let table: FrequencyTable<u32> = FrequencyTable::new([]);
        assert_eq!(table.total(), 0);
        assert_eq!(table.mode(), None);
        assert!(table.fractions().is_empty());
    }

    #[test]
    fn test_fractions_sum_to_one() {
        let table = FrequencyTable::new([1, 2, 2, 3, 3, 3]);
        let sum: f64 = table.fractions().values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }
}
