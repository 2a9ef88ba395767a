//! Binary search tree where every node also stores the size of its subtree.

mod node;
mod tree;

use crate::counter::{NoopCounter, OperationCounter};
use crate::error::{Error, Result};
use crate::os_tree::node::Node;
use serde_derive::Serialize;
use std::convert::TryFrom;
use std::fmt;

/// A node as seen during a pre-order traversal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Visit {
    pub key: i64,
    pub size: usize,
    pub depth: usize,
}

/// An order-statistics tree over `i64` keys.
///
/// Every node stores the number of nodes in its subtree, itself included. The rank of a node
/// within its subtree is therefore the size of its left subtree plus one, which lets the tree
/// find and remove the `i`-th smallest key in time proportional to its height. Ranks are
/// 1-based.
///
/// Trees are built perfectly balanced, but removals never rebalance, so a long run of lopsided
/// removals can degrade the height towards the number of keys.
///
/// # Examples
///
/// ```
/// use dynamic_order_statistics::OsTree;
///
/// let mut tree = OsTree::build(11);
/// assert_eq!(tree.select(5), Ok(5));
///
/// assert_eq!(tree.delete(5), Ok(Some(5)));
/// assert_eq!(tree.select(5), Ok(6));
/// assert_eq!(tree.len(), 10);
/// ```
pub struct OsTree {
    tree: tree::Tree,
}

impl OsTree {
    /// Constructs a new, empty `OsTree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_order_statistics::OsTree;
    ///
    /// let tree = OsTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        OsTree { tree: None }
    }

    /// Constructs a balanced tree containing the keys `1..=n`. Sizes beyond `i64::MAX` are
    /// clamped to `i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_order_statistics::OsTree;
    ///
    /// let tree = OsTree::build(11);
    /// assert_eq!(tree.len(), 11);
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn build(n: usize) -> Self {
        Self::from_range(1, last_key(n))
    }

    /// Constructs a balanced tree containing every key in `low..=high`. The tree is empty if
    /// `low > high`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_order_statistics::OsTree;
    ///
    /// let tree = OsTree::from_range(-3, 3);
    /// assert_eq!(tree.min(), Some(-3));
    /// assert_eq!(tree.max(), Some(3));
    /// ```
    pub fn from_range(low: i64, high: i64) -> Self {
        Self::from_range_with(low, high, &mut NoopCounter)
    }

    /// Same as `from_range`, reporting one operation per node created.
    pub fn from_range_with<C>(low: i64, high: i64, counter: &mut C) -> Self
    where
        C: OperationCounter,
    {
        let tree = tree::build_range(low, high, counter);
        debug!("built tree over [{}, {}] with {} keys", low, high, tree::size(&tree));
        OsTree { tree }
    }

    /// Constructs a balanced tree from strictly increasing keys.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unsorted` with the index of the first offending key if `keys` is not
    /// strictly increasing.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_order_statistics::{Error, OsTree};
    ///
    /// let tree = OsTree::from_sorted(&[2, 3, 5, 7]).unwrap();
    /// assert_eq!(tree.select(3), Ok(5));
    ///
    /// assert_eq!(OsTree::from_sorted(&[1, 1]).err(), Some(Error::Unsorted { index: 1 }));
    /// ```
    pub fn from_sorted(keys: &[i64]) -> Result<Self> {
        Self::from_sorted_with(keys, &mut NoopCounter)
    }

    /// Same as `from_sorted`, reporting one operation per node created.
    pub fn from_sorted_with<C>(keys: &[i64], counter: &mut C) -> Result<Self>
    where
        C: OperationCounter,
    {
        if let Some(index) = keys.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(Error::Unsorted { index: index + 1 });
        }
        let tree = tree::build_sorted(keys, counter);
        debug!("built tree over {} sorted keys", keys.len());
        Ok(OsTree { tree })
    }

    /// Returns the key of rank `rank`, that is the `rank`-th smallest key in the tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTree` if the tree is empty and `Error::OutOfRange` if `rank` is not in
    /// `1..=len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_order_statistics::{Error, OsTree};
    ///
    /// let tree = OsTree::from_range(10, 20);
    /// assert_eq!(tree.select(1), Ok(10));
    /// assert_eq!(tree.select(12), Err(Error::OutOfRange { rank: 12, len: 11 }));
    /// ```
    pub fn select(&self, rank: usize) -> Result<i64> {
        self.select_with(rank, &mut NoopCounter)
    }

    /// Same as `select`, reporting one operation per node visited.
    pub fn select_with<C>(&self, rank: usize, counter: &mut C) -> Result<i64>
    where
        C: OperationCounter,
    {
        self.check_rank(rank)?;
        match tree::select(&self.tree, rank, counter) {
            Some(node) => Ok(node.key),
            None => Err(Error::OutOfRange {
                rank,
                len: self.len(),
            }),
        }
    }

    /// Removes the key of rank `rank` and returns it. Removing from an empty tree does nothing
    /// and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the tree is non-empty and `rank` is not in `1..=len`. The
    /// tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_order_statistics::OsTree;
    ///
    /// let mut tree = OsTree::build(3);
    /// assert_eq!(tree.delete(2), Ok(Some(2)));
    /// assert_eq!(tree.iter().collect::<Vec<i64>>(), vec![1, 3]);
    ///
    /// let mut empty = OsTree::new();
    /// assert_eq!(empty.delete(1), Ok(None));
    /// ```
    pub fn delete(&mut self, rank: usize) -> Result<Option<i64>> {
        self.delete_with(rank, &mut NoopCounter)
    }

    /// Same as `delete`, reporting one operation per node visited and per size updated.
    pub fn delete_with<C>(&mut self, rank: usize, counter: &mut C) -> Result<Option<i64>>
    where
        C: OperationCounter,
    {
        match self.check_rank(rank) {
            Ok(()) => {},
            Err(Error::EmptyTree) => return Ok(None),
            Err(error) => return Err(error),
        }
        let (tree, key) = tree::delete(self.tree.take(), rank, counter);
        debug!("deleted key {:?} at rank {}", key, rank);
        self.tree = tree;
        Ok(key)
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        tree::size(&self.tree)
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the smallest key in the tree.
    pub fn min(&self) -> Option<i64> {
        tree::min(&self.tree)
    }

    /// Returns the largest key in the tree.
    pub fn max(&self) -> Option<i64> {
        tree::max(&self.tree)
    }

    /// Clears the tree, removing all keys.
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Verifies that every node's stored size equals one plus the sizes of its children and that
    /// keys are in strict search order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_order_statistics::OsTree;
    ///
    /// let mut tree = OsTree::build(100);
    /// tree.delete(50).unwrap();
    /// assert!(tree.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<()> {
        tree::check(&self.tree, None, None).map(|_| ())
    }

    /// Returns a pre-order iterator over the nodes of the tree, yielding each node's key, subtree
    /// size and depth. The root has depth 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_order_statistics::{OsTree, Visit};
    ///
    /// let tree = OsTree::build(3);
    /// let visits = tree.traverse().collect::<Vec<Visit>>();
    /// assert_eq!(visits[0], Visit { key: 2, size: 3, depth: 0 });
    /// assert_eq!(visits[1], Visit { key: 1, size: 1, depth: 1 });
    /// assert_eq!(visits[2], Visit { key: 3, size: 1, depth: 1 });
    /// ```
    pub fn traverse(&self) -> Traverse<'_> {
        let mut stack = Vec::new();
        if let Some(ref node) = self.tree {
            stack.push((&**node, 0));
        }
        Traverse { stack }
    }

    /// Returns an iterator over the keys of the tree in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_order_statistics::OsTree;
    ///
    /// let tree = OsTree::from_range(4, 6);
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(4));
    /// assert_eq!(iterator.next(), Some(5));
    /// assert_eq!(iterator.next(), Some(6));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> OsTreeIter<'_> {
        OsTreeIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    fn check_rank(&self, rank: usize) -> Result<()> {
        let len = self.len();
        if len == 0 {
            Err(Error::EmptyTree)
        } else if rank == 0 || rank > len {
            Err(Error::OutOfRange { rank, len })
        } else {
            Ok(())
        }
    }
}

// The largest key of a tree over `1..=n`.
fn last_key(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl Default for OsTree {
    fn default() -> Self {
        Self::new()
    }
}

// One line per node in pre-order: `|`, three dashes per level of depth, then `key(size)`.
impl fmt::Display for OsTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for Visit { key, size, depth } in self.traverse() {
            writeln!(f, "|{}{}({})", "---".repeat(depth), key, size)?;
        }
        Ok(())
    }
}

impl fmt::Debug for OsTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl IntoIterator for OsTree {
    type IntoIter = OsTreeIntoIter;
    type Item = i64;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a> IntoIterator for &'a OsTree {
    type IntoIter = OsTreeIter<'a>;
    type Item = i64;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A pre-order iterator for `OsTree`.
///
/// Calling `OsTree::traverse` again restarts the walk from the root.
pub struct Traverse<'a> {
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(|(node, depth)| {
            if let Some(ref right_node) = node.right {
                self.stack.push((&**right_node, depth + 1));
            }
            if let Some(ref left_node) = node.left {
                self.stack.push((&**left_node, depth + 1));
            }
            Visit {
                key: node.key,
                size: node.size,
                depth,
            }
        })
    }
}

/// An owning iterator for `OsTree`.
///
/// This iterator traverses the keys of the tree in-order.
pub struct OsTreeIntoIter {
    current: tree::Tree,
    stack: Vec<Node>,
}

impl Iterator for OsTreeIntoIter {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `OsTree`.
///
/// This iterator traverses the keys of the tree in-order.
pub struct OsTreeIter<'a> {
    current: &'a tree::Tree,
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for OsTreeIter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            node.key
        })
    }
}
