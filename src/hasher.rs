use std::{
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash, Hasher as _},
};

/// Maps a key to the bucket id used to route it through one level of a
/// [`HashTree`](crate::hash_tree::HashTree).
pub trait Hasher<K> {
    fn hash(&self, key: &K) -> usize;
}

/// Buckets integer item ids by remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModHasher {
    modulus: usize,
}

impl ModHasher {
    /// A zero modulus is clamped to 1, which routes every key to bucket 0.
    pub fn new(modulus: usize) -> Self {
        Self {
            modulus: modulus.max(1),
        }
    }

    pub fn modulus(&self) -> usize {
        self.modulus
    }
}

impl Hasher<usize> for ModHasher {
    fn hash(&self, key: &usize) -> usize {
        key % self.modulus
    }
}

/// Buckets any `Hash` key through a `BuildHasher`.
#[derive(Debug, Clone)]
pub struct StdHasher<S = RandomState> {
    build: S,
    buckets: usize,
}

impl StdHasher<RandomState> {
    pub fn new(buckets: usize) -> Self {
        Self::with_build_hasher(RandomState::new(), buckets)
    }
}

impl<S: BuildHasher> StdHasher<S> {
    pub fn with_build_hasher(build: S, buckets: usize) -> Self {
        Self {
            build,
            buckets: buckets.max(1),
        }
    }
}

impl<K: Hash, S: BuildHasher> Hasher<K> for StdHasher<S> {
    fn hash(&self, key: &K) -> usize {
        let mut state = self.build.build_hasher();
        key.hash(&mut state);
        (state.finish() % self.buckets as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_hasher_wraps_around() {
        let hasher = ModHasher::new(3);
        assert_eq!(hasher.hash(&0), 0);
        assert_eq!(hasher.hash(&4), 1);
        assert_eq!(hasher.hash(&5), 2);
    }

    #[test]
    fn mod_hasher_clamps_zero_modulus() {
        let hasher = ModHasher::new(0);
        assert_eq!(hasher.modulus(), 1);
        assert_eq!(hasher.hash(&42), 0);
    }

    #[test]
    fn std_hasher_stays_in_range_and_is_stable() {
        let hasher = StdHasher::new(7);
        for key in ["bread", "milk", "yoghurt", "cheese"] {
            let bucket = hasher.hash(&key);
            assert!(bucket < 7);
            assert_eq!(bucket, hasher.hash(&key));
        }
    }
}
