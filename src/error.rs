use thiserror::Error;

use crate::types::ItemId;

#[derive(Debug, PartialEq, Error)]
pub enum HashTreeError {
    #[error("tuple of length {actual} does not match the tree's tuple length {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("a hash tree needs a tuple length of at least 1")]
    ZeroTupleLength,
}

#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("min_support must lie in (0, 1], got {0}")]
    MinSupport(f64),
    #[error("min_confidence must lie in (0, 1], got {0}")]
    MinConfidence(f64),
    #[error("the item universe must contain at least one item")]
    EmptyItemUniverse,
    #[error("max_len must be at least 1")]
    ZeroMaxLen,
}

#[derive(Debug, PartialEq, Error)]
pub enum MiningError {
    #[error("cannot mine an empty transaction set")]
    EmptyTransactions,
    #[error("item {item} in transaction {transaction} is outside the universe of {n_items} items")]
    ItemOutOfRange {
        item: ItemId,
        n_items: usize,
        transaction: usize,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("hash tree misuse: {0}")]
    HashTree(#[from] HashTreeError),
    #[error("internal consistency error: {itemset:?} has no recorded support")]
    MissingSupport { itemset: Vec<ItemId> },
    #[error("internal consistency error: {itemset:?} has a support count of zero")]
    ZeroSupport { itemset: Vec<ItemId> },
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: cannot parse {token:?} as an item id")]
    InvalidToken { line: usize, token: String },
    #[error("line {line}: item id {item} exceeds the largest supported id {max}")]
    ItemIdTooLarge { line: usize, item: ItemId, max: ItemId },
}
