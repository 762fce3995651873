// Structural invariant checks
//
// Walks the whole tree and verifies:
// - BST ordering (strict, which also rules out duplicate keys)
// - cached heights match the children
// - every balance factor is within [-1, 1]
// - the cached entry count matches the node count

use super::node::Link;
use crate::core::Timestamp;
use thiserror::Error;

/// A broken tree invariant
#[derive(Debug, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("Key {key} is out of order under bound {bound}")]
    OutOfOrder { key: Timestamp, bound: Timestamp },

    #[error("Key {0} appears more than once")]
    DuplicateKey(Timestamp),

    #[error("Node {key} caches height {cached}, actual height is {actual}")]
    HeightMismatch {
        key: Timestamp,
        cached: usize,
        actual: usize,
    },

    #[error("Node {key} has balance factor {balance}")]
    Unbalanced { key: Timestamp, balance: isize },

    #[error("Index records {recorded} entries but holds {actual} nodes")]
    CountMismatch { recorded: usize, actual: usize },
}

/// Check every invariant of the subtree at `root` holding `recorded` entries
pub(crate) fn check(root: &Link, recorded: usize) -> Result<(), InvariantViolation> {
    let mut count = 0;
    check_subtree(root, None, None, &mut count)?;

    if count != recorded {
        return Err(InvariantViolation::CountMismatch {
            recorded,
            actual: count,
        });
    }
    Ok(())
}

/// Returns the recomputed height of the subtree
fn check_subtree(
    link: &Link,
    lower: Option<Timestamp>,
    upper: Option<Timestamp>,
    count: &mut usize,
) -> Result<usize, InvariantViolation> {
    let Some(node) = link else {
        return Ok(0);
    };
    let key = node.timestamp;

    for bound in lower.into_iter().chain(upper) {
        if key == bound {
            return Err(InvariantViolation::DuplicateKey(key));
        }
    }
    if let Some(bound) = lower.filter(|&bound| key < bound) {
        return Err(InvariantViolation::OutOfOrder { key, bound });
    }
    if let Some(bound) = upper.filter(|&bound| key > bound) {
        return Err(InvariantViolation::OutOfOrder { key, bound });
    }

    *count += 1;
    let left = check_subtree(&node.left, lower, Some(key), count)?;
    let right = check_subtree(&node.right, Some(key), upper, count)?;

    let actual = 1 + left.max(right);
    if node.height != actual {
        return Err(InvariantViolation::HeightMismatch {
            key,
            cached: node.height,
            actual,
        });
    }

    let balance = left as isize - right as isize;
    if balance.abs() > 1 {
        return Err(InvariantViolation::Unbalanced { key, balance });
    }

    Ok(actual)
}
