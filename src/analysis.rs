//! Empirical operation counts for building, selecting from and emptying trees of growing size.

use crate::counter::Tally;
use crate::error::Result;
use crate::os_tree::OsTree;
use rand::Rng;

/// Number of repetitions averaged per size in the reference experiment.
pub const DEFAULT_REPEATS: usize = 5;

/// Average operation counts observed for trees of `n` keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub n: usize,
    pub build: f64,
    pub select: f64,
    pub delete: f64,
}

/// Returns the sizes `100, 200, ..., 10000`.
pub fn default_sizes() -> Vec<usize> {
    (1..=100).map(|step| step * 100).collect()
}

/// For each size `n`, builds a tree over `1..=n` and then repeatedly selects a uniformly random
/// rank and deletes that same rank until the tree is empty. Counts are averaged over `repeats`
/// runs.
///
/// # Examples
///
/// ```
/// use dynamic_order_statistics::analysis;
/// use rand::SeedableRng;
///
/// let mut rng: rand::XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
/// let samples = analysis::measure(&[10, 20], 2, &mut rng).unwrap();
/// assert_eq!(samples.len(), 2);
/// assert_eq!(samples[0].build, 10.0);
/// ```
pub fn measure<R>(sizes: &[usize], repeats: usize, rng: &mut R) -> Result<Vec<Sample>>
where
    R: Rng,
{
    let mut samples = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let mut build = Tally::new();
        let mut select = Tally::new();
        let mut delete = Tally::new();

        for _ in 0..repeats {
            let mut tree = OsTree::from_range_with(1, n as i64, &mut build);
            while !tree.is_empty() {
                let rank = rng.gen_range(1, tree.len() + 1);
                tree.select_with(rank, &mut select)?;
                tree.delete_with(rank, &mut delete)?;
            }
        }

        let runs = repeats.max(1) as f64;
        let sample = Sample {
            n,
            build: build.total() as f64 / runs,
            select: select.total() as f64 / runs,
            delete: delete.total() as f64 / runs,
        };
        debug!("measured {:?}", sample);
        samples.push(sample);
    }
    Ok(samples)
}
