use crate::{itemset::Itemset, rules::Rule, types::ItemId};

/// Renders item ids through their labels, falling back to the id itself.
#[derive(Debug, Clone, Default)]
pub struct ItemLabels {
    names: Vec<String>,
}

impl ItemLabels {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn label(&self, item: ItemId) -> String {
        self.names
            .get(item)
            .cloned()
            .unwrap_or_else(|| item.to_string())
    }

    fn join(&self, items: &[ItemId]) -> String {
        items
            .iter()
            .map(|&item| self.label(item))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `[ a b ] count`
    pub fn itemset(&self, itemset: &Itemset) -> String {
        format!("[ {} ] {}", self.join(itemset.items()), itemset.count())
    }

    /// `a b (count) => c (count) conf(confidence)`
    pub fn rule(&self, rule: &Rule) -> String {
        format!(
            "{} ({}) => {} ({}) conf({:?})",
            self.join(rule.antecedent.items()),
            rule.antecedent.count(),
            self.join(rule.consequent.items()),
            rule.consequent.count(),
            rule.confidence
        )
    }
}
