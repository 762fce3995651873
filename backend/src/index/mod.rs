//! Ordered Event Index
//!
//! An AVL-balanced binary search tree keyed by [`Timestamp`]. It keeps every
//! scheduled event ordered so the next upcoming event, an arbitrary event,
//! or the full ordered listing can be retrieved in time bounded by the tree
//! height.
//!
//! # Structure
//!
//! - **node**: owned tree nodes and height/balance helpers
//! - **rotation**: ownership-transferring left/right rotations
//! - **rebalance**: separate case tables for insert and delete
//! - **iter**: lazy in-order traversal
//! - **validation**: invariant checker
//!
//! # Critical Invariants
//!
//! After every public operation returns:
//!
//! 1. **BST ordering**: left subtree keys < node key < right subtree keys
//! 2. **Uniqueness**: no two nodes share a timestamp
//! 3. **Height correctness**: cached height = 1 + max(child heights)
//! 4. **AVL balance**: |height(left) - height(right)| <= 1 at every node
//!
//! Rejected operations leave the tree untouched.
//!
//! # Example
//!
//! ```rust
//! use event_scheduler_core::{EventIndex, IndexError, Timestamp};
//!
//! let ts = |raw| Timestamp::new(raw).unwrap();
//! let mut index = EventIndex::new();
//!
//! index.insert(ts(30), "deploy").unwrap();
//! index.insert(ts(10), "standup").unwrap();
//! assert_eq!(index.insert(ts(10), "again"), Err(IndexError::DuplicateKey(ts(10))));
//!
//! assert_eq!(index.minimum(), Ok((ts(10), "standup")));
//! assert_eq!(index.search(ts(30)), Ok("deploy"));
//!
//! index.delete(ts(10)).unwrap();
//! assert_eq!(index.minimum(), Ok((ts(30), "deploy")));
//! ```

mod iter;
mod node;
mod rebalance;
mod rotation;
mod validation;

pub use iter::Iter;
pub use validation::InvariantViolation;

use crate::core::Timestamp;
use crate::models::event::Event;
use node::{Link, Node};
use std::cmp::Ordering;
use std::mem;
use thiserror::Error;
use tracing::debug;

/// Errors returned by index operations
///
/// None of these are fatal; the index is unchanged whenever one is returned.
#[derive(Debug, Error, PartialEq)]
pub enum IndexError {
    #[error("An event with timestamp {0} already exists")]
    DuplicateKey(Timestamp),

    #[error("No event found with timestamp {0}")]
    NotFound(Timestamp),

    #[error("No events scheduled")]
    Empty,
}

/// AVL-balanced index of events ordered by timestamp
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    root: Link,
    len: usize,
}

impl EventIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert a new event
    ///
    /// Creates exactly one leaf and rebalances every ancestor on the way
    /// back up. The root may change.
    ///
    /// # Errors
    ///
    /// `IndexError::DuplicateKey` if `timestamp` is already scheduled.
    pub fn insert(
        &mut self,
        timestamp: Timestamp,
        details: impl Into<String>,
    ) -> Result<(), IndexError> {
        if self.contains(timestamp) {
            debug!(%timestamp, "insert rejected: duplicate timestamp");
            return Err(IndexError::DuplicateKey(timestamp));
        }

        let root = self.root.take();
        self.root = Some(insert_into(root, timestamp, details.into()));
        self.len += 1;
        debug!(%timestamp, len = self.len, height = self.height(), "event inserted");
        Ok(())
    }

    /// Remove the event at `timestamp` and return it
    ///
    /// A node with two children is relabeled with its in-order successor,
    /// and the successor's node is the one released.
    ///
    /// # Errors
    ///
    /// `IndexError::NotFound` if no event has this timestamp.
    pub fn delete(&mut self, timestamp: Timestamp) -> Result<Event, IndexError> {
        if !self.contains(timestamp) {
            debug!(%timestamp, "delete rejected: not found");
            return Err(IndexError::NotFound(timestamp));
        }

        let root = self.root.take();
        let (root, removed) = remove_from(root, timestamp);
        self.root = root;

        let removed = removed.ok_or(IndexError::NotFound(timestamp))?;
        self.len -= 1;
        debug!(%timestamp, len = self.len, height = self.height(), "event deleted");
        Ok(removed)
    }

    /// Look up the details of the event at `timestamp`
    ///
    /// # Errors
    ///
    /// `IndexError::NotFound` if no event has this timestamp.
    pub fn search(&self, timestamp: Timestamp) -> Result<&str, IndexError> {
        self.get(timestamp).ok_or(IndexError::NotFound(timestamp))
    }

    /// Like [`search`](Self::search), returning `None` on a miss
    pub fn get(&self, timestamp: Timestamp) -> Option<&str> {
        let mut current = self.root.as_ref();
        while let Some(node) = current {
            match timestamp.cmp(&node.timestamp) {
                Ordering::Equal => return Some(node.details.as_str()),
                Ordering::Less => current = node.left.as_ref(),
                Ordering::Greater => current = node.right.as_ref(),
            }
        }
        None
    }

    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.get(timestamp).is_some()
    }

    /// The next upcoming event (smallest timestamp)
    ///
    /// # Errors
    ///
    /// `IndexError::Empty` if nothing is scheduled.
    pub fn minimum(&self) -> Result<(Timestamp, &str), IndexError> {
        let mut node = self.root.as_ref().ok_or(IndexError::Empty)?;
        while let Some(left) = node.left.as_ref() {
            node = left;
        }
        Ok((node.timestamp, node.details.as_str()))
    }

    /// Lazily iterate over all events in ascending timestamp order
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root, self.len)
    }

    /// Materialize all events in ascending timestamp order
    pub fn traverse_in_order(&self) -> Vec<Event> {
        self.iter().map(Event::from).collect()
    }

    /// Number of scheduled events
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree, 0 when empty
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Release every node
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Verify the structural invariants of the whole tree
    ///
    /// Costs O(n); intended for tests.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        validation::check(&self.root, self.len)
    }
}

impl<'a> IntoIterator for &'a EventIndex {
    type Item = (Timestamp, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Recursive mutation helpers
// ============================================================================

/// Insert below `link`, returning the new subtree root
///
/// The caller guarantees `timestamp` is not already present.
fn insert_into(link: Link, timestamp: Timestamp, details: String) -> Box<Node> {
    let Some(mut node) = link else {
        return Node::leaf(timestamp, details);
    };

    match timestamp.cmp(&node.timestamp) {
        Ordering::Less => node.left = Some(insert_into(node.left.take(), timestamp, details)),
        Ordering::Greater => node.right = Some(insert_into(node.right.take(), timestamp, details)),
        Ordering::Equal => return node,
    }

    rebalance::after_insert(node, timestamp)
}

/// Remove `timestamp` from below `link`
///
/// Returns the new subtree root and the removed event, if it was found.
fn remove_from(link: Link, timestamp: Timestamp) -> (Link, Option<Event>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    let removed = match timestamp.cmp(&node.timestamp) {
        Ordering::Less => {
            let (left, removed) = remove_from(node.left.take(), timestamp);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove_from(node.right.take(), timestamp);
            node.right = right;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return (None, Some(into_event(node))),
            (Some(child), None) | (None, Some(child)) => {
                return (Some(child), Some(into_event(node)))
            }
            (Some(left), Some(right)) => {
                let (right, successor) = detach_min(right);
                node.left = Some(left);
                node.right = right;

                let successor = into_event(successor);
                Some(Event {
                    timestamp: mem::replace(&mut node.timestamp, successor.timestamp),
                    details: mem::replace(&mut node.details, successor.details),
                })
            }
        },
    };

    (Some(rebalance::after_delete(node)), removed)
}

/// Unlink the leftmost node of a subtree
///
/// Returns the rebalanced remainder and the detached node.
fn detach_min(mut node: Box<Node>) -> (Link, Box<Node>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = detach_min(left);
            node.left = rest;
            (Some(rebalance::after_delete(node)), min)
        }
    }
}

fn into_event(node: Box<Node>) -> Event {
    let Node {
        timestamp, details, ..
    } = *node;
    Event { timestamp, details }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: u64) -> Timestamp {
        Timestamp::from_u64(raw).unwrap()
    }

    fn root_key(index: &EventIndex) -> Option<u64> {
        index.root.as_ref().map(|n| n.timestamp.get())
    }

    #[test]
    fn test_left_left_insert_reroots_tree() {
        let mut index = EventIndex::new();
        index.insert(ts(30), "A").unwrap();
        index.insert(ts(20), "B").unwrap();
        index.insert(ts(10), "C").unwrap();

        let root = index.root.as_ref().unwrap();
        assert_eq!(root.timestamp, ts(20));
        assert_eq!(root.left.as_ref().unwrap().timestamp, ts(10));
        assert_eq!(root.right.as_ref().unwrap().timestamp, ts(30));
        assert_eq!(index.height(), 2);
    }

    #[test]
    fn test_two_child_delete_relabels_with_successor() {
        let mut index = EventIndex::new();
        for raw in [20, 10, 30, 25, 40] {
            index.insert(ts(raw), format!("e{}", raw)).unwrap();
        }
        assert_eq!(root_key(&index), Some(20));

        let removed = index.delete(ts(20)).unwrap();

        assert_eq!(removed, Event::new(ts(20), "e20"));
        assert_eq!(root_key(&index), Some(25));
        assert_eq!(index.root.as_ref().unwrap().details, "e25");
        assert_eq!(index.len(), 4);
        assert_eq!(index.check_invariants(), Ok(()));
    }

    #[test]
    fn test_detach_min_rebalances_remainder() {
        let mut index = EventIndex::new();
        for raw in [20, 10, 30, 40] {
            index.insert(ts(raw), "").unwrap();
        }

        let root = index.root.take().unwrap();
        let (rest, min) = detach_min(root);

        assert_eq!(min.timestamp, ts(10));
        index.root = rest;
        index.len = 3;
        assert_eq!(root_key(&index), Some(30));
        assert_eq!(index.check_invariants(), Ok(()));
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut index = EventIndex::new();
        index.insert(ts(1), "a").unwrap();
        index.insert(ts(2), "b").unwrap();

        index.clear();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.height(), 0);
        assert_eq!(index.minimum(), Err(IndexError::Empty));
    }
}
