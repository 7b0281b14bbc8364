use std::collections::{hash_map::Entry, HashMap};

use crate::{error::HashTreeError, hasher::Hasher};

/// Fixed-depth trie over tuples of `tuple_len` keys.
///
/// Each internal node at depth `d` routes a tuple by the bucket of
/// `tuple[d]`. Tuples pile up in leaves until a leaf holds `max_leaf` of
/// them; the next insertion into that leaf turns it into an internal node one
/// level deeper and re-inserts everything it held. Leaves hanging off the last
/// position never split, since there is no key left to route on.
#[derive(Debug)]
pub struct HashTree<K, H> {
    hasher: H,
    max_leaf: usize,
    tuple_len: usize,
    root: Internal<K>,
    len: usize,
}

#[derive(Debug)]
enum Node<K> {
    Internal(Internal<K>),
    Leaf(Leaf<K>),
}

#[derive(Debug)]
struct Internal<K> {
    depth: usize,
    children: HashMap<usize, Node<K>>,
}

#[derive(Debug)]
struct Leaf<K> {
    depth: usize,
    tuples: Vec<Vec<K>>,
}

impl<K: PartialEq, H: Hasher<K>> HashTree<K, H> {
    pub fn new(hasher: H, max_leaf: usize, tuple_len: usize) -> Result<Self, HashTreeError> {
        if tuple_len == 0 {
            return Err(HashTreeError::ZeroTupleLength);
        }
        Ok(Self {
            hasher,
            max_leaf,
            tuple_len,
            root: Internal::new(0),
            len: 0,
        })
    }

    pub fn insert(&mut self, tuple: Vec<K>) -> Result<(), HashTreeError> {
        self.check_len(tuple.len())?;
        self.root
            .insert(tuple, &self.hasher, self.max_leaf, self.tuple_len);
        self.len += 1;
        Ok(())
    }

    pub fn contains(&self, tuple: &[K]) -> Result<bool, HashTreeError> {
        self.check_len(tuple.len())?;

        let mut current = &self.root;
        for key in tuple {
            match current.children.get(&self.hasher.hash(key)) {
                None => return Ok(false),
                Some(Node::Internal(internal)) => current = internal,
                Some(Node::Leaf(leaf)) => return Ok(leaf.contains(tuple)),
            }
        }

        // Internal nodes stop at depth tuple_len - 1, so every full walk ends
        // on a leaf or a missing branch.
        Ok(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn tuple_len(&self) -> usize {
        self.tuple_len
    }

    pub fn max_leaf(&self) -> usize {
        self.max_leaf
    }

    /// Depth of the deepest leaf, 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.root.max_leaf_depth()
    }

    fn check_len(&self, actual: usize) -> Result<(), HashTreeError> {
        if actual == self.tuple_len {
            Ok(())
        } else {
            Err(HashTreeError::LengthMismatch {
                expected: self.tuple_len,
                actual,
            })
        }
    }
}

impl<K: PartialEq> Internal<K> {
    fn new(depth: usize) -> Self {
        Self {
            depth,
            children: HashMap::new(),
        }
    }

    fn insert<H: Hasher<K>>(
        &mut self,
        tuple: Vec<K>,
        hasher: &H,
        max_leaf: usize,
        tuple_len: usize,
    ) {
        let depth = self.depth;
        let bucket = hasher.hash(&tuple[depth]);

        let child = match self.children.entry(bucket) {
            Entry::Vacant(slot) => {
                slot.insert(Node::Leaf(Leaf {
                    depth: depth + 1,
                    tuples: vec![tuple],
                }));
                return;
            }
            Entry::Occupied(slot) => slot.into_mut(),
        };

        match child {
            Node::Internal(internal) => internal.insert(tuple, hasher, max_leaf, tuple_len),
            Node::Leaf(leaf) if leaf.tuples.len() < max_leaf || depth + 1 == tuple_len => {
                leaf.tuples.push(tuple)
            }
            Node::Leaf(leaf) => {
                let mut split = Internal::new(depth + 1);
                for stored in leaf.tuples.drain(..) {
                    split.insert(stored, hasher, max_leaf, tuple_len);
                }
                split.insert(tuple, hasher, max_leaf, tuple_len);
                *child = Node::Internal(split);
            }
        }
    }

    fn max_leaf_depth(&self) -> usize {
        self.children
            .values()
            .map(|child| match child {
                Node::Internal(internal) => internal.max_leaf_depth(),
                Node::Leaf(leaf) => leaf.depth,
            })
            .max()
            .unwrap_or(0)
    }
}

impl<K: PartialEq> Leaf<K> {
    fn contains(&self, tuple: &[K]) -> bool {
        self.tuples.iter().any(|stored| stored.as_slice() == tuple)
    }
}
