use crate::os_tree::tree;

/// A struct representing an internal node of an order-statistics tree.
pub struct Node {
    pub key: i64,
    pub size: usize,
    pub left: tree::Tree,
    pub right: tree::Tree,
}

impl Node {
    pub fn new(key: i64, size: usize) -> Self {
        Node {
            key,
            size,
            left: None,
            right: None,
        }
    }

    // The rank of this node within its own subtree.
    pub fn order(&self) -> usize {
        match self.left {
            Some(ref left_node) => left_node.size + 1,
            None => 1,
        }
    }
}
