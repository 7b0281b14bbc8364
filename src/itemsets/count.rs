#![allow(non_snake_case)]

use bitvec::prelude::*;
use itertools::Itertools;
use log::{debug, info, trace};

use crate::{
    combi::apriori_gen,
    config::AprioriConfig,
    error::{ConfigError, MiningError},
    hash_tree::HashTree,
    hasher::ModHasher,
    itemsets::lattice::FrequentItemsets,
    types::{ItemCounts, ItemId, ItemsetCounts, Transaction},
};

/// Mine the frequent itemsets of `raw_transactions` over the item universe
/// `0..n_items`.
///
/// Level `k` is built from level `k-1` by [`apriori_gen`], counted against
/// every transaction through a [`HashTree`] of the candidates and filtered by
/// `min_support`. Mining stops once a level holds fewer than two itemsets,
/// nothing survives, or `max_len` is reached.
pub fn generate_frequent_itemsets<T>(
    raw_transactions: &[T],
    n_items: usize,
    config: &AprioriConfig,
) -> Result<FrequentItemsets, MiningError>
where
    for<'t> &'t T: IntoIterator<Item = &'t ItemId>,
{
    config.validate()?;
    if n_items == 0 {
        return Err(ConfigError::EmptyItemUniverse.into());
    }
    if raw_transactions.is_empty() {
        return Err(MiningError::EmptyTransactions);
    }

    let mut transactions = normalize_transactions(raw_transactions, n_items)?;
    let N = transactions.len();
    let min_support_count = config.min_support_count(N);
    let mut lattice = FrequentItemsets::new(N);

    // 1-itemset
    let frequent_1_itemset_counts =
        generate_frequent_1_itemset_counts(&transactions, n_items, min_support_count);
    info!(
        "Level 1: {} of {} items are frequent.",
        frequent_1_itemset_counts.len(),
        n_items
    );
    if frequent_1_itemset_counts.is_empty() {
        return Ok(lattice);
    }
    lattice.push_level(frequent_1_itemset_counts);

    // k-itemset, k >= 2
    let mut size = 1;
    while let Some(prev) = lattice.level(size) {
        if prev.len() <= 1 {
            debug!("Level {} holds {} itemset(s), nothing left to join.", size, prev.len());
            break;
        }
        if config.max_len.map_or(false, |max_len| size >= max_len) {
            debug!("Reached max_len {}.", size);
            break;
        }

        let prev_itemsets: Vec<Vec<ItemId>> = prev.keys().cloned().collect();
        size += 1;

        let candidates = apriori_gen(&prev_itemsets);
        debug!("Level {}: {} candidates.", size, candidates.len());
        if candidates.is_empty() {
            break;
        }

        transactions.retain(|transaction| transaction.len() >= size);
        let frequent_itemset_counts = generate_frequent_k_itemset_counts(
            candidates,
            &transactions,
            n_items,
            config.max_leaf,
            min_support_count,
        )?;
        info!(
            "Level {}: {} frequent itemsets.",
            size,
            frequent_itemset_counts.len()
        );

        if frequent_itemset_counts.is_empty() {
            break;
        }
        lattice.push_level(frequent_itemset_counts);
    }

    Ok(lattice)
}

/// Sorts and de-duplicates every transaction, rejecting ids outside
/// `0..n_items`.
pub fn normalize_transactions<T>(
    raw_transactions: &[T],
    n_items: usize,
) -> Result<Vec<Transaction>, MiningError>
where
    for<'t> &'t T: IntoIterator<Item = &'t ItemId>,
{
    let mut seen = bitvec![0; n_items];

    raw_transactions
        .iter()
        .enumerate()
        .map(|(index, raw_transaction)| {
            let mut items: Transaction = Vec::new();
            for &item in raw_transaction {
                if item >= n_items {
                    return Err(MiningError::ItemOutOfRange {
                        item,
                        n_items,
                        transaction: index,
                    });
                }
                if !seen[item] {
                    seen.set(item, true);
                    items.push(item);
                }
            }
            for &item in &items {
                seen.set(item, false);
            }

            items.sort_unstable();
            Ok(items)
        })
        .collect()
}

/// 1-itemset
/// space: O(n_items)
fn generate_frequent_1_itemset_counts(
    transactions: &[Transaction],
    n_items: usize,
    min_support_count: f64,
) -> ItemsetCounts {
    let mut item_counts: ItemCounts = vec![0; n_items];
    for transaction in transactions {
        for &item in transaction {
            item_counts[item] += 1;
        }
    }

    item_counts
        .into_iter()
        .enumerate()
        .filter(|&(_, count)| f64::from(count) >= min_support_count)
        .map(|(item, count)| (vec![item], count))
        .collect()
}

/// Counts each candidate by probing a hash tree with every `size`-subset of
/// every transaction, then prunes by minimum support.
fn generate_frequent_k_itemset_counts(
    candidates: Vec<Vec<ItemId>>,
    transactions: &[Transaction],
    n_items: usize,
    max_leaf: usize,
    min_support_count: f64,
) -> Result<ItemsetCounts, MiningError> {
    let size = match candidates.first() {
        Some(candidate) => candidate.len(),
        None => return Ok(ItemsetCounts::new()),
    };

    let mut tree = HashTree::new(ModHasher::new(n_items), max_leaf, size)?;
    let mut candidate_counts = ItemsetCounts::with_capacity(candidates.len());
    for candidate in candidates {
        candidate_counts.insert(candidate.clone(), 0);
        tree.insert(candidate)?;
    }
    trace!(
        "Candidate tree for level {} holds {} tuples, {} levels deep.",
        size,
        tree.len(),
        tree.depth()
    );

    for transaction in transactions {
        // subsets of a sorted transaction come out sorted
        for subset in transaction.iter().copied().combinations(size) {
            if tree.contains(&subset)? {
                if let Some(count) = candidate_counts.get_mut(&subset) {
                    *count += 1;
                }
            }
        }
    }

    candidate_counts.retain(|_, &mut count| f64::from(count) >= min_support_count);
    Ok(candidate_counts)
}
