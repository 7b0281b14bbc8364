use std::{
    fmt::{Display, Formatter, Result},
    hash::{Hash, Hasher},
};

use crate::types::{ItemId, SupportCount};

/// Sorted item ids together with the number of transactions containing them.
///
/// Equality and hashing only look at the items.
#[derive(Debug, Clone)]
pub struct Itemset {
    items: Vec<ItemId>,
    count: SupportCount,
}

impl Itemset {
    /// Sorts and de-duplicates `items`.
    pub fn new(mut items: Vec<ItemId>, count: SupportCount) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items, count }
    }

    pub(crate) fn from_sorted(items: Vec<ItemId>, count: SupportCount) -> Self {
        debug_assert!(items.windows(2).all(|pair| pair[0] < pair[1]));
        Self { items, count }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn count(&self) -> SupportCount {
        self.count
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<ItemId> {
        self.items
    }
}

impl PartialEq for Itemset {
    fn eq(&self, other: &Itemset) -> bool {
        self.items == other.items
    }
}

impl Eq for Itemset {}

impl Hash for Itemset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl Display for Itemset {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({:?}, {})", self.items, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashset;

    #[test]
    fn new_sorts_and_dedups() {
        let itemset = Itemset::new(vec![3, 1, 2, 1], 4);
        assert_eq!(itemset.items(), &[1, 2, 3]);
        assert_eq!(itemset.count(), 4);
        assert_eq!(itemset.len(), 3);
    }

    #[test]
    fn equality_ignores_count() {
        assert_eq!(Itemset::new(vec![0, 1], 3), Itemset::new(vec![1, 0], 7));
        assert_ne!(Itemset::new(vec![0, 1], 3), Itemset::new(vec![0, 2], 3));

        let set = hashset! { Itemset::new(vec![0, 1], 3), Itemset::new(vec![0, 1], 5) };
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn displays_items_and_count() {
        assert_eq!(Itemset::new(vec![2, 0], 4).to_string(), "([0, 2], 4)");
    }
}
