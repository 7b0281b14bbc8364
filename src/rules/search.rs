use log::{debug, trace};

use crate::{
    combi::{apriori_gen, difference},
    error::MiningError,
    itemset::Itemset,
    itemsets::lattice::FrequentItemsets,
    rules::rule::Rule,
    types::{ItemId, SupportCount},
};

/// Generate rules based on frequent itemsets
pub fn generate_rules(
    frequent_itemsets: &FrequentItemsets,
    min_conf: f64,
) -> Result<Vec<Rule>, MiningError> {
    let mut rules = Vec::new();

    for (size, itemset_counts) in frequent_itemsets.levels().filter(|&(size, _)| size > 1) {
        let before = rules.len();
        for (itemset, &count) in itemset_counts {
            rules_from_itemset(frequent_itemsets, itemset, count, min_conf, &mut rules)?;
        }
        debug!("{} rules from {}-itemsets.", rules.len() - before, size);
    }

    Ok(rules)
}

/// Given a frequent itemset, find the rules it supports, growing consequents
/// one item at a time.
fn rules_from_itemset(
    frequent_itemsets: &FrequentItemsets,
    itemset: &[ItemId],
    count: SupportCount,
    min_conf: f64,
    rules: &mut Vec<Rule>,
) -> Result<(), MiningError> {
    let mut consequents: Vec<Vec<ItemId>> = itemset.iter().map(|&item| vec![item]).collect();
    consequents =
        confident_consequents(frequent_itemsets, itemset, count, consequents, min_conf, rules)?;

    // a consequent can only be confident if every consequent one item smaller was
    while let Some(consequent_len) = consequents.first().map(|consequent| consequent.len()) {
        if itemset.len() <= consequent_len + 1 {
            break;
        }
        let candidates = apriori_gen(&consequents);
        trace!(
            "{:?}: {} consequent candidates of size {}.",
            itemset,
            candidates.len(),
            consequent_len + 1
        );
        consequents =
            confident_consequents(frequent_itemsets, itemset, count, candidates, min_conf, rules)?;
    }

    Ok(())
}

/// Emits a rule for every candidate consequent meeting `min_conf` and returns
/// those consequents.
fn confident_consequents(
    frequent_itemsets: &FrequentItemsets,
    itemset: &[ItemId],
    count: SupportCount,
    candidates: Vec<Vec<ItemId>>,
    min_conf: f64,
    rules: &mut Vec<Rule>,
) -> Result<Vec<Vec<ItemId>>, MiningError> {
    let mut confident = Vec::with_capacity(candidates.len());

    for consequent in candidates {
        let antecedent = difference(itemset, &consequent);
        let antecedent_count = lookup_support(frequent_itemsets, &antecedent)?;
        let confidence = f64::from(count) / f64::from(antecedent_count);

        if confidence >= min_conf {
            let consequent_count = lookup_support(frequent_itemsets, &consequent)?;
            rules.push(Rule::new(
                Itemset::from_sorted(antecedent, antecedent_count),
                Itemset::from_sorted(consequent.clone(), consequent_count),
                count,
                frequent_itemsets.num_transactions(),
            ));
            confident.push(consequent);
        }
    }

    Ok(confident)
}

/// Every proper subset of a frequent itemset sits in an earlier level with a
/// positive count.
fn lookup_support(
    frequent_itemsets: &FrequentItemsets,
    items: &[ItemId],
) -> Result<SupportCount, MiningError> {
    match frequent_itemsets.support_count(items) {
        Some(0) => Err(MiningError::ZeroSupport {
            itemset: items.to_vec(),
        }),
        Some(count) => Ok(count),
        None => Err(MiningError::MissingSupport {
            itemset: items.to_vec(),
        }),
    }
}
