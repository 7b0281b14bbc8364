use std::collections::HashSet;

use itertools::Itertools;

use crate::types::ItemId;

/// Join step: combines every pair of sorted `k-1` itemsets sharing their
/// first `k-2` items into a sorted `k` itemset.
///
/// https://github.com/tommyod/Efficient-Apriori/blob/master/efficient_apriori/itemsets.py
pub fn join_step(itemsets: &[Vec<ItemId>]) -> Vec<Vec<ItemId>> {
    let mut itemsets: Vec<&[ItemId]> = itemsets
        .iter()
        .map(|itemset| itemset.as_slice())
        .filter(|itemset| !itemset.is_empty())
        .collect();
    if itemsets.is_empty() {
        return vec![];
    }

    itemsets.sort_unstable();
    itemsets.dedup();

    let mut final_itemsets: Vec<Vec<ItemId>> = Vec::new();
    let mut tail_items: Vec<ItemId> = Vec::with_capacity(itemsets.len());

    let mut i = 0;
    while i < itemsets.len() {
        let (prefix, _) = itemsets[i].split_at(itemsets[i].len() - 1);

        tail_items.clear();
        let group = itemsets[i..]
            .iter()
            .take_while(|itemset| itemset.len() == prefix.len() + 1 && itemset.starts_with(prefix));
        for itemset in group {
            tail_items.push(itemset[prefix.len()]);
        }

        // tails are ascending within a group, so each pair extends the prefix in order
        for (a, b) in tail_items.iter().tuple_combinations() {
            let mut candidate = Vec::with_capacity(prefix.len() + 2);
            candidate.extend_from_slice(prefix);
            candidate.push(*a);
            candidate.push(*b);
            final_itemsets.push(candidate);
        }

        i += tail_items.len().max(1);
    }

    final_itemsets
}

/// Join step followed by the prune step: a candidate survives only if every
/// subset obtained by dropping one item is among `itemsets`.
pub fn apriori_gen(itemsets: &[Vec<ItemId>]) -> Vec<Vec<ItemId>> {
    let known: HashSet<&[ItemId]> = itemsets.iter().map(|itemset| itemset.as_slice()).collect();

    join_step(itemsets)
        .into_iter()
        .filter(|candidate| has_known_subsets(candidate, &known))
        .collect()
}

fn has_known_subsets(candidate: &[ItemId], known: &HashSet<&[ItemId]>) -> bool {
    let mut subset = Vec::with_capacity(candidate.len());
    // dropping either of the last two items gives back the joined parents
    (0..candidate.len().saturating_sub(2)).all(|skip| {
        subset.clear();
        subset.extend_from_slice(&candidate[..skip]);
        subset.extend_from_slice(&candidate[skip + 1..]);
        known.contains(subset.as_slice())
    })
}

/// Items of the sorted `itemset` that are not in the sorted `removed`.
pub fn difference(itemset: &[ItemId], removed: &[ItemId]) -> Vec<ItemId> {
    itemset
        .iter()
        .copied()
        .filter(|item| removed.binary_search(item).is_err())
        .collect()
}
