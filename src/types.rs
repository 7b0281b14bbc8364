use std::collections::HashMap;

pub type ItemId = usize;
pub type SupportCount = u32;
pub type ItemsetLength = usize;

/// Sorted, de-duplicated item ids.
pub type Transaction = Vec<ItemId>;

pub type ItemCounts = Vec<SupportCount>;
pub type ItemsetCounts = HashMap<Vec<ItemId>, SupportCount>;
