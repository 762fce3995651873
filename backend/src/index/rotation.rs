//! Subtree rotations
//!
//! Both rotations take ownership of a subtree root and return the owning
//! handle of the new root. Heights of the two nodes that change level are
//! recomputed bottom-up; heights of the moved grandchild subtrees are
//! unaffected.
//!
//! ```text
//!        y                       x
//!       / \     rotate_right    / \
//!      x   C    ----------->   A   y
//!     / \       <-----------      / \
//!    A   B      rotate_left      B   C
//! ```
//!
//! A rotation whose pivot child is absent returns the subtree unchanged.

use super::node::Node;

pub(crate) fn rotate_right(mut root: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = root.left.take() else {
        return root;
    };
    root.left = pivot.right.take();
    root.update_height();
    pivot.right = Some(root);
    pivot.update_height();
    pivot
}

pub(crate) fn rotate_left(mut root: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = root.right.take() else {
        return root;
    };
    root.right = pivot.left.take();
    root.update_height();
    pivot.left = Some(root);
    pivot.update_height();
    pivot
}
