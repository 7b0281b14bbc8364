use crate::{error::ConfigError, types::ItemsetLength};

/// Thresholds and tuning knobs for a mining run.
#[derive(Debug, Clone, PartialEq)]
pub struct AprioriConfig {
    pub min_support: f64,
    pub min_confidence: f64,
    /// Leaf occupancy above which a candidate tree leaf splits.
    pub max_leaf: usize,
    /// Largest itemset size to mine. `None` runs until no level can be joined.
    pub max_len: Option<ItemsetLength>,
}

impl Default for AprioriConfig {
    fn default() -> Self {
        Self {
            min_support: 0.45,
            min_confidence: 0.95,
            max_leaf: 3,
            max_len: None,
        }
    }
}

impl AprioriConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support,
            min_confidence,
            ..Self::default()
        }
    }

    pub fn with_max_leaf(mut self, max_leaf: usize) -> Self {
        self.max_leaf = max_leaf;
        self
    }

    pub fn with_max_len(mut self, max_len: ItemsetLength) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !in_unit_interval(self.min_support) {
            return Err(ConfigError::MinSupport(self.min_support));
        }
        if !in_unit_interval(self.min_confidence) {
            return Err(ConfigError::MinConfidence(self.min_confidence));
        }
        if self.max_len == Some(0) {
            return Err(ConfigError::ZeroMaxLen);
        }
        Ok(())
    }

    /// Smallest support count (possibly fractional) an itemset needs out of
    /// `num_transactions` to be frequent.
    pub fn min_support_count(&self, num_transactions: usize) -> f64 {
        self.min_support * num_transactions as f64
    }
}

fn in_unit_interval(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(AprioriConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_thresholds_outside_unit_interval() {
        assert_eq!(
            AprioriConfig::new(0.0, 0.5).validate(),
            Err(ConfigError::MinSupport(0.0))
        );
        assert_eq!(
            AprioriConfig::new(0.5, 1.5).validate(),
            Err(ConfigError::MinConfidence(1.5))
        );
        assert!(AprioriConfig::new(f64::NAN, 0.5).validate().is_err());
        assert_eq!(AprioriConfig::new(1.0, 1.0).validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_max_len() {
        let config = AprioriConfig::new(0.5, 0.5).with_max_len(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxLen));
    }

    #[test]
    fn min_support_count_scales_with_transactions() {
        let config = AprioriConfig::new(0.6, 0.5);
        assert!((config.min_support_count(5) - 3.0).abs() < 1e-12);
    }
}
