//! Rebalancing case tables
//!
//! Insert and delete use different triggers to pick a rotation case, so
//! they are kept as two separate tables:
//!
//! | case        | after insert (key position)  | after delete (child balance) |
//! |-------------|------------------------------|------------------------------|
//! | left-left   | `b > 1`, key < left.key      | `b > 1`, bal(left) >= 0      |
//! | left-right  | `b > 1`, key > left.key      | `b > 1`, bal(left) < 0       |
//! | right-right | `b < -1`, key > right.key    | `b < -1`, bal(right) <= 0    |
//! | right-left  | `b < -1`, key < right.key    | `b < -1`, bal(right) > 0     |
//!
//! Both functions first refresh the node's cached height, then apply at
//! most one case, and return the (possibly new) subtree root.

use super::node::{balance, Node};
use super::rotation::{rotate_left, rotate_right};
use crate::core::Timestamp;
use std::cmp::Ordering;
use tracing::trace;

/// Restore balance on the return path of an insert of `inserted`
pub(crate) fn after_insert(mut node: Box<Node>, inserted: Timestamp) -> Box<Node> {
    node.update_height();
    let factor = node.balance();

    if factor > 1 {
        let left_key = node.left.as_ref().map(|left| left.timestamp);
        match left_key.map(|key| inserted.cmp(&key)) {
            Some(Ordering::Less) => {
                trace!(at = %node.timestamp, "insert rebalance: left-left");
                return rotate_right(node);
            }
            Some(Ordering::Greater) => {
                trace!(at = %node.timestamp, "insert rebalance: left-right");
                node.left = node.left.take().map(rotate_left);
                return rotate_right(node);
            }
            _ => {}
        }
    }

    if factor < -1 {
        let right_key = node.right.as_ref().map(|right| right.timestamp);
        match right_key.map(|key| inserted.cmp(&key)) {
            Some(Ordering::Greater) => {
                trace!(at = %node.timestamp, "insert rebalance: right-right");
                return rotate_left(node);
            }
            Some(Ordering::Less) => {
                trace!(at = %node.timestamp, "insert rebalance: right-left");
                node.right = node.right.take().map(rotate_right);
                return rotate_left(node);
            }
            _ => {}
        }
    }

    node
}

/// Restore balance on the return path of a removal
pub(crate) fn after_delete(mut node: Box<Node>) -> Box<Node> {
    node.update_height();
    let factor = node.balance();

    if factor > 1 {
        if balance(&node.left) >= 0 {
            trace!(at = %node.timestamp, "delete rebalance: left-left");
            return rotate_right(node);
        }
        trace!(at = %node.timestamp, "delete rebalance: left-right");
        node.left = node.left.take().map(rotate_left);
        return rotate_right(node);
    }

    if factor < -1 {
        if balance(&node.right) <= 0 {
            trace!(at = %node.timestamp, "delete rebalance: right-right");
            return rotate_left(node);
        }
        trace!(at = %node.timestamp, "delete rebalance: right-left");
        node.right = node.right.take().map(rotate_right);
        return rotate_left(node);
    }

    node
}
