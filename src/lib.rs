//! Frequent itemset and association rule mining with Apriori.
//!
//! Candidates of each level are loaded into a [`HashTree`] so that the
//! support-counting pass can test every `k`-subset of a transaction in
//! roughly `O(k)` instead of scanning all candidates.
//!
//! ```
//! use apriori_hashtree::{apriori, AprioriConfig};
//!
//! let transactions: Vec<Vec<usize>> =
//!     vec![vec![0, 1, 2], vec![0, 1], vec![0, 2], vec![1, 2], vec![0, 1, 2]];
//! let (frequent_itemsets, rules) =
//!     apriori(&transactions, 3, &AprioriConfig::new(0.6, 0.7)).unwrap();
//!
//! assert_eq!(frequent_itemsets.support_count(&[0, 1]), Some(3));
//! assert!(rules.iter().all(|rule| rule.confidence >= 0.7));
//! ```

pub mod combi;
pub mod config;
pub mod dataset;
pub mod error;
pub mod hash_tree;
pub mod hasher;
pub mod itemset;
pub mod itemsets;
pub mod report;
pub mod rules;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

pub use crate::{
    config::AprioriConfig,
    error::{ConfigError, DatasetError, HashTreeError, MiningError},
    hash_tree::HashTree,
    hasher::{Hasher, ModHasher, StdHasher},
    itemset::Itemset,
    itemsets::{generate_frequent_itemsets, FrequentItemsets},
    rules::{generate_rules, Rule},
    types::{ItemId, SupportCount},
};

use log::info;

/// Mine frequent itemsets, then derive the rules meeting `min_confidence`.
pub fn apriori<T>(
    transactions: &[T],
    n_items: usize,
    config: &AprioriConfig,
) -> Result<(FrequentItemsets, Vec<Rule>), MiningError>
where
    for<'t> &'t T: IntoIterator<Item = &'t ItemId>,
{
    let frequent_itemsets = generate_frequent_itemsets(transactions, n_items, config)?;
    let rules = generate_rules(&frequent_itemsets, config.min_confidence)?;
    info!(
        "Mined {} frequent itemsets and {} rules from {} transactions.",
        frequent_itemsets.total_itemsets(),
        rules.len(),
        frequent_itemsets.num_transactions()
    );
    Ok((frequent_itemsets, rules))
}
