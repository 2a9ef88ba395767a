use std::error;
use std::fmt;
use std::result;

/// Errors reported by the checked operations of this crate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A query was made against a tree with no keys.
    EmptyTree,
    /// A rank outside of `1..=len` was requested.
    OutOfRange { rank: usize, len: usize },
    /// Keys handed to a sorted constructor were not strictly increasing at `index`.
    Unsorted { index: usize },
    /// A unique sequence was requested from a range holding too few values.
    RangeTooSmall { requested: usize, available: u64 },
    /// A node's stored subtree size disagrees with the size of its subtree.
    SizeMismatch { key: i64, stored: usize, actual: usize },
    /// A node's key is not strictly between the keys bounding its subtree.
    KeyOrder { key: i64 },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyTree => write!(f, "tree is empty"),
            Error::OutOfRange { rank, len } => {
                write!(f, "rank {} is out of range for a tree of {} keys", rank, len)
            },
            Error::Unsorted { index } => {
                write!(f, "keys are not strictly increasing at index {}", index)
            },
            Error::RangeTooSmall { requested, available } => write!(
                f,
                "cannot draw {} unique values from a range of {}",
                requested, available,
            ),
            Error::SizeMismatch { key, stored, actual } => write!(
                f,
                "node {} stores size {} but its subtree holds {} nodes",
                key, stored, actual,
            ),
            Error::KeyOrder { key } => write!(f, "node {} violates the search order", key),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
