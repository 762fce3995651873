//! Lazy in-order traversal
//!
//! [`Iter`] walks the tree with an explicit stack holding the left spine of
//! the subtree still to be visited, so it never recurses and needs at most
//! `height` stack slots. It borrows the index, which rules out mutation
//! while a traversal is in flight.

use super::node::{Link, Node};
use crate::core::Timestamp;
use std::iter::FusedIterator;

/// Ascending iterator over `(timestamp, details)` pairs
///
/// Created by [`EventIndex::iter`](super::EventIndex::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: &'a Link, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Timestamp, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.timestamp, node.details.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use crate::{EventIndex, Timestamp};

    #[test]
    fn test_empty_index_yields_nothing() {
        let index = EventIndex::new();
        let mut iter = index.iter();
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_iter_is_ascending_and_exact_size() {
        let mut index = EventIndex::new();
        for raw in [50, 20, 80, 10, 30, 70, 90, 60] {
            index
                .insert(Timestamp::from_u64(raw).unwrap(), format!("e{}", raw))
                .unwrap();
        }

        let mut iter = index.iter();
        assert_eq!(iter.len(), 8);
        iter.next();
        assert_eq!(iter.len(), 7);

        let keys: Vec<u64> = index.iter().map(|(ts, _)| ts.get()).collect();
        assert_eq!(keys, vec![10, 20, 30, 50, 60, 70, 80, 90]);
    }

    #[test]
    fn test_each_call_starts_a_fresh_traversal() {
        let mut index = EventIndex::new();
        index.insert(Timestamp::from_u64(1).unwrap(), "a").unwrap();
        index.insert(Timestamp::from_u64(2).unwrap(), "b").unwrap();

        let first: Vec<_> = index.iter().collect();
        let second: Vec<_> = (&index).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first[1].1, "b");
    }
}
