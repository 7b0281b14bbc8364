use std::fmt::{Display, Formatter, Result};

use crate::{itemset::Itemset, types::SupportCount};

/// `antecedent => consequent`, where the union of both sides is a frequent
/// itemset.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    /// Support count of `antecedent ∪ consequent`.
    pub union_count: SupportCount,
    pub confidence: f64,
    pub lift: f64,
}

impl Rule {
    pub fn new(
        antecedent: Itemset,
        consequent: Itemset,
        union_count: SupportCount,
        num_transactions: usize,
    ) -> Self {
        let antecedent_count = f64::from(antecedent.count());
        let consequent_count = f64::from(consequent.count());
        let union = f64::from(union_count);
        let confidence = union / antecedent_count;
        let lift = union / (antecedent_count * consequent_count) * num_transactions as f64;
        Self {
            antecedent,
            consequent,
            union_count,
            confidence,
            lift,
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "({}, {}, {})",
            self.antecedent, self.consequent, self.confidence
        )
    }
}
