use crate::counter::OperationCounter;
use crate::error::{Error, Result};
use crate::os_tree::node::Node;
use std::cmp::{self, Ordering};

pub type Tree = Option<Box<Node>>;

pub fn size(tree: &Tree) -> usize {
    match tree {
        Some(ref node) => node.size,
        None => 0,
    }
}

// Sizes come straight from the range, so no post-order pass is needed. Arithmetic is widened so
// ranges touching the ends of `i64` neither overflow nor wrap.
pub fn build_range<C>(low: i64, high: i64, counter: &mut C) -> Tree
where
    C: OperationCounter,
{
    if low > high {
        return None;
    }
    counter.count(1);
    let width = i128::from(high) - i128::from(low);
    let mid = (i128::from(low) + width / 2) as i64;
    let mut node = Node::new(mid, (width + 1) as usize);
    if mid > low {
        node.left = build_range(low, mid - 1, counter);
    }
    if mid < high {
        node.right = build_range(mid + 1, high, counter);
    }
    Some(Box::new(node))
}

// precondition: keys are strictly increasing
pub fn build_sorted<C>(keys: &[i64], counter: &mut C) -> Tree
where
    C: OperationCounter,
{
    if keys.is_empty() {
        return None;
    }
    counter.count(1);
    let mid = (keys.len() - 1) / 2;
    let mut node = Node::new(keys[mid], keys.len());
    node.left = build_sorted(&keys[..mid], counter);
    node.right = build_sorted(&keys[mid + 1..], counter);
    Some(Box::new(node))
}

pub fn select<'a, C>(tree: &'a Tree, rank: usize, counter: &mut C) -> Option<&'a Node>
where
    C: OperationCounter,
{
    tree.as_ref().and_then(|node| {
        counter.count(1);
        let order = node.order();
        match rank.cmp(&order) {
            Ordering::Less => select(&node.left, rank, counter),
            Ordering::Greater => select(&node.right, rank - order, counter),
            Ordering::Equal => Some(&**node),
        }
    })
}

/// Removes the node of rank `rank` and returns the new root of the tree along with the removed
/// key. Deleting from an empty tree returns the empty tree and `None`.
///
/// # Panics
///
/// Panics if the tree is non-empty and `rank` is not in `1..=size(&tree)`.
pub fn delete<C>(tree: Tree, rank: usize, counter: &mut C) -> (Tree, Option<i64>)
where
    C: OperationCounter,
{
    match tree {
        Some(node) => {
            assert!(1 <= rank && rank <= node.size);
            let (tree, key) = remove(node, rank, counter);
            (tree, Some(key))
        },
        None => (None, None),
    }
}

// precondition: `rank` is in `1..=node.size`
fn remove<C>(mut node: Box<Node>, rank: usize, counter: &mut C) -> (Tree, i64)
where
    C: OperationCounter,
{
    counter.count(1);
    let order = node.order();
    match rank.cmp(&order) {
        Ordering::Less => {
            node.size -= 1;
            counter.count(1);
            let key = match node.left.take() {
                Some(left) => {
                    let (left, key) = remove(left, rank, counter);
                    node.left = left;
                    key
                },
                None => unreachable!(),
            };
            (Some(node), key)
        },
        Ordering::Greater => {
            node.size -= 1;
            counter.count(1);
            let key = match node.right.take() {
                Some(right) => {
                    let (right, key) = remove(right, rank - order, counter);
                    node.right = right;
                    key
                },
                None => unreachable!(),
            };
            (Some(node), key)
        },
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => {
                trace!("splicing {} into its right child", node.key);
                (right, node.key)
            },
            (left, None) => {
                trace!("splicing {} into its left child", node.key);
                (left, node.key)
            },
            (left, Some(right)) => {
                let (successor, right) = remove_min(right, counter);
                trace!("replacing {} with its successor {}", node.key, successor);
                let key = node.key;
                node.key = successor;
                node.size -= 1;
                counter.count(1);
                node.left = left;
                node.right = right;
                (Some(node), key)
            },
        },
    }
}

// Every node passed on the way down loses exactly one descendant; the minimum is replaced by its
// right subtree in its parent's left link.
fn remove_min<C>(mut node: Box<Node>, counter: &mut C) -> (i64, Tree)
where
    C: OperationCounter,
{
    counter.count(1);
    match node.left.take() {
        Some(left) => {
            node.size -= 1;
            counter.count(1);
            let (key, left) = remove_min(left, counter);
            node.left = left;
            (key, Some(node))
        },
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        },
    }
}

pub fn height(tree: &Tree) -> usize {
    match tree {
        Some(ref node) => cmp::max(height(&node.left), height(&node.right)) + 1,
        None => 0,
    }
}

pub fn min(tree: &Tree) -> Option<i64> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        curr.key
    })
}

pub fn max(tree: &Tree) -> Option<i64> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        curr.key
    })
}

// Returns the number of nodes in the tree after checking that every key lies strictly inside
// `(lower, upper)` and that every stored size matches.
pub fn check(tree: &Tree, lower: Option<i64>, upper: Option<i64>) -> Result<usize> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };
    let below = lower.map_or(false, |lower| node.key <= lower);
    let above = upper.map_or(false, |upper| node.key >= upper);
    if below || above {
        return Err(Error::KeyOrder { key: node.key });
    }
    let actual =
        check(&node.left, lower, Some(node.key))? + check(&node.right, Some(node.key), upper)? + 1;
    if actual != node.size {
        return Err(Error::SizeMismatch {
            key: node.key,
            stored: node.size,
            actual,
        });
    }
    Ok(actual)
}
