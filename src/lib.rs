//! An order-statistics binary search tree.
//!
//! Every node of the tree stores the size of its subtree, which makes it possible to select and
//! remove the `i`-th smallest key in time proportional to the height of the tree. All operations
//! can report manual operation counts to an `OperationCounter` for empirical analysis.

#[macro_use]
extern crate log;

pub mod analysis;
pub mod counter;
pub mod datagen;
mod error;
pub mod os_tree;

pub use crate::error::{Error, Result};
pub use crate::os_tree::{OsTree, Visit};
