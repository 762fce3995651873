//! Tree node and height bookkeeping
//!
//! Every child slot is an exclusively owned `Option<Box<Node>>`. There are
//! no parent pointers: mutations descend recursively and fix heights on the
//! way back up.

use crate::core::Timestamp;

/// Owning handle to a (possibly empty) subtree
pub(crate) type Link = Option<Box<Node>>;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) timestamp: Timestamp,
    pub(crate) details: String,
    /// Cached height of the subtree rooted here; a leaf has height 1
    pub(crate) height: usize,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn leaf(timestamp: Timestamp, details: String) -> Box<Self> {
        Box::new(Self {
            timestamp,
            details,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// Recompute the cached height from the children's cached heights
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left height minus right height
    pub(crate) fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Height of a subtree, 0 when absent
pub(crate) fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Balance factor of a subtree, 0 when absent
pub(crate) fn balance(link: &Link) -> isize {
    link.as_ref().map_or(0, |node| node.balance())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: u64) -> Timestamp {
        Timestamp::from_u64(raw).unwrap()
    }

    #[test]
    fn test_absent_subtree_has_zero_height_and_balance() {
        assert_eq!(height(&None), 0);
        assert_eq!(balance(&None), 0);
    }

    #[test]
    fn test_update_height_uses_taller_child() {
        let mut root = Node::leaf(ts(20), "root".into());
        let mut left = Node::leaf(ts(10), "left".into());
        left.left = Some(Node::leaf(ts(5), "left-left".into()));
        left.update_height();
        root.left = Some(left);
        root.update_height();

        assert_eq!(root.height, 3);
        assert_eq!(root.balance(), 2);
    }
}
