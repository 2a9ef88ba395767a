//! Sinks for manual operation counts.
//!
//! Every instrumented operation takes a `&mut C` where `C: OperationCounter`. Counts never feed
//! back into the operation, so `NoopCounter` can always be substituted.

/// A sink that receives operation counts.
pub trait OperationCounter {
    /// Records `n` elementary operations.
    fn count(&mut self, n: u64);
}

/// A counter that discards everything it is given.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoopCounter;

impl OperationCounter for NoopCounter {
    #[inline]
    fn count(&mut self, _n: u64) {}
}

/// A counter that keeps a running total.
///
/// # Examples
///
/// ```
/// use dynamic_order_statistics::counter::{OperationCounter, Tally};
///
/// let mut tally = Tally::new();
/// tally.count(2);
/// tally.count(3);
/// assert_eq!(tally.total(), 5);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    total: u64,
}

impl Tally {
    /// Constructs a new `Tally` starting at zero.
    pub fn new() -> Self {
        Tally { total: 0 }
    }

    /// Returns the number of operations recorded so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Resets the total to zero and returns the previous total.
    pub fn reset(&mut self) -> u64 {
        let total = self.total;
        self.total = 0;
        total
    }
}

impl OperationCounter for Tally {
    #[inline]
    fn count(&mut self, n: u64) {
        self.total += n;
    }
}

impl<'a, C> OperationCounter for &'a mut C
where
    C: OperationCounter + ?Sized,
{
    #[inline]
    fn count(&mut self, n: u64) {
        (**self).count(n);
    }
}
