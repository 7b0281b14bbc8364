use crate::{
    itemset::Itemset,
    types::{ItemId, ItemsetCounts, ItemsetLength, SupportCount},
};

/// Frequent itemsets of a run, grouped by size.
///
/// Levels are 1-indexed: `level(k)` holds the frequent `k`-itemsets. Only
/// non-empty levels are kept, so `len()` is the size of the largest frequent
/// itemset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequentItemsets {
    levels: Vec<ItemsetCounts>,
    num_transactions: usize,
}

impl FrequentItemsets {
    pub(crate) fn new(num_transactions: usize) -> Self {
        Self {
            levels: Vec::new(),
            num_transactions,
        }
    }

    /// Builds a lattice from known counts; `levels[0]` holds the 1-itemsets.
    /// Empty trailing levels are dropped.
    pub fn from_levels(mut levels: Vec<ItemsetCounts>, num_transactions: usize) -> Self {
        while levels.last().map_or(false, |level| level.is_empty()) {
            levels.pop();
        }
        Self {
            levels,
            num_transactions,
        }
    }

    pub(crate) fn push_level(&mut self, level: ItemsetCounts) {
        debug_assert!(level.keys().all(|items| items.len() == self.levels.len() + 1));
        self.levels.push(level);
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn level(&self, size: ItemsetLength) -> Option<&ItemsetCounts> {
        size.checked_sub(1).and_then(|index| self.levels.get(index))
    }

    pub fn levels(&self) -> impl Iterator<Item = (ItemsetLength, &ItemsetCounts)> {
        self.levels
            .iter()
            .enumerate()
            .map(|(index, level)| (index + 1, level))
    }

    /// Support count of a sorted itemset, if it is frequent.
    pub fn support_count(&self, items: &[ItemId]) -> Option<SupportCount> {
        self.level(items.len())
            .and_then(|level| level.get(items))
            .copied()
    }

    /// Fraction of transactions containing a sorted itemset, if it is frequent.
    pub fn support(&self, items: &[ItemId]) -> Option<f64> {
        if self.num_transactions == 0 {
            return None;
        }
        self.support_count(items)
            .map(|count| f64::from(count) / self.num_transactions as f64)
    }

    /// The `size`-itemsets in ascending item order.
    pub fn itemsets(&self, size: ItemsetLength) -> Vec<Itemset> {
        let mut itemsets: Vec<Itemset> = self
            .level(size)
            .into_iter()
            .flatten()
            .map(|(items, &count)| Itemset::from_sorted(items.clone(), count))
            .collect();
        itemsets.sort_unstable_by(|a, b| a.items().cmp(b.items()));
        itemsets
    }

    pub fn total_itemsets(&self) -> usize {
        self.levels.iter().map(|level| level.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    fn lattice() -> FrequentItemsets {
        FrequentItemsets::from_levels(
            vec![
                hashmap! { vec![0] => 4, vec![1] => 4, vec![2] => 3 },
                hashmap! { vec![0, 1] => 3, vec![1, 2] => 2 },
                hashmap! {},
            ],
            5,
        )
    }

    #[test]
    fn levels_are_one_indexed() {
        let lattice = lattice();
        assert_eq!(lattice.len(), 2);
        assert!(lattice.level(0).is_none());
        assert_eq!(lattice.level(1).map(|level| level.len()), Some(3));
        assert_eq!(lattice.level(2).map(|level| level.len()), Some(2));
        assert!(lattice.level(3).is_none());
        assert_eq!(lattice.total_itemsets(), 5);

        let sizes: Vec<ItemsetLength> = lattice.levels().map(|(size, _)| size).collect();
        assert_eq!(sizes, vec![1, 2]);
    }

    #[test]
    fn looks_up_support() {
        let lattice = lattice();
        assert_eq!(lattice.support_count(&[0, 1]), Some(3));
        assert_eq!(lattice.support_count(&[0, 2]), None);
        assert_eq!(lattice.support_count(&[]), None);
        assert_eq!(lattice.support(&[1]), Some(0.8));
    }

    #[test]
    fn itemsets_come_out_sorted() {
        let itemsets = lattice().itemsets(1);
        let items: Vec<&[ItemId]> = itemsets.iter().map(|itemset| itemset.items()).collect();
        assert_eq!(items, vec![&[0][..], &[1][..], &[2][..]]);
        assert_eq!(itemsets[2].count(), 3);
        assert!(lattice().itemsets(4).is_empty());
    }
}
