pub mod count;
pub mod lattice;

pub use count::{generate_frequent_itemsets, normalize_transactions};
pub use lattice::FrequentItemsets;
