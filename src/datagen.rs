//! Pseudo-random integer sequences for building experiment inputs.

use crate::error::{Error, Result};
use rand::Rng;
use std::collections::HashSet;

/// The order of a generated sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    Random,
    Ascending,
    Descending,
}

/// Generates `n` integers drawn uniformly from `min..=max`.
///
/// If `unique` is set, no value appears twice. `order` sorts the result after it has been drawn.
///
/// # Errors
///
/// Returns `Error::RangeTooSmall` if the range holds fewer values than requested while `unique`
/// is set, or if the range is empty and `n > 0`.
///
/// # Examples
///
/// ```
/// use dynamic_order_statistics::datagen::{self, Order};
/// use rand::SeedableRng;
///
/// let mut rng: rand::XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
/// let values = datagen::fill(&mut rng, 10, 1, 10, true, Order::Ascending).unwrap();
/// assert_eq!(values, (1..=10).collect::<Vec<i64>>());
/// ```
pub fn fill<R>(
    rng: &mut R,
    n: usize,
    min: i64,
    max: i64,
    unique: bool,
    order: Order,
) -> Result<Vec<i64>>
where
    R: Rng,
{
    // Counted in `u128` so that the full `i64` range (2^64 values) fits.
    let available = if min > max {
        0
    } else {
        (i128::from(max) - i128::from(min)) as u128 + 1
    };
    if (unique && n as u128 > available) || (available == 0 && n > 0) {
        return Err(Error::RangeTooSmall {
            requested: n,
            available: available as u64,
        });
    }

    let mut values = if !unique {
        (0..n).map(|_| draw(rng, min, max)).collect::<Vec<i64>>()
    } else if (n as u128) * 2 <= available {
        let mut seen = HashSet::with_capacity(n);
        let mut values = Vec::with_capacity(n);
        while values.len() < n {
            let value = draw(rng, min, max);
            if seen.insert(value) {
                values.push(value);
            }
        }
        values
    } else {
        let mut values = (min..=max).collect::<Vec<i64>>();
        rng.shuffle(&mut values);
        values.truncate(n);
        values
    };

    match order {
        Order::Random => {},
        Order::Ascending => values.sort(),
        Order::Descending => values.sort_by(|a, b| b.cmp(a)),
    }
    Ok(values)
}

// Draws uniformly from `min..=max` as an offset from `min`, so `max` may be `i64::MAX`.
// precondition: min <= max
fn draw<R>(rng: &mut R, min: i64, max: i64) -> i64
where
    R: Rng,
{
    let span = max.wrapping_sub(min) as u64;
    if span == u64::MAX {
        return rng.gen::<i64>();
    }
    min.wrapping_add(rng.gen_range(0, span + 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::{draw, fill, Order};
    use crate::error::Error;
    use rand::{SeedableRng, XorShiftRng};
    use std::collections::HashSet;

    fn rng() -> XorShiftRng {
        SeedableRng::from_seed([1, 1, 1, 1])
    }

    #[test]
    fn test_fill_within_bounds() {
        let values = fill(&mut rng(), 1000, -5, 5, false, Order::Random).unwrap();
        assert_eq!(values.len(), 1000);
        assert!(values.iter().all(|value| -5 <= *value && *value <= 5));
    }

    #[test]
    fn test_fill_unique_sparse() {
        let values = fill(&mut rng(), 100, 0, 1_000_000, true, Order::Ascending).unwrap();
        assert_eq!(values.iter().collect::<HashSet<&i64>>().len(), 100);
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_fill_unique_dense() {
        let values = fill(&mut rng(), 15, 1, 20, true, Order::Descending).unwrap();
        assert_eq!(values.iter().collect::<HashSet<&i64>>().len(), 15);
        assert!(values.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_fill_range_too_small() {
        assert_eq!(
            fill(&mut rng(), 11, 1, 10, true, Order::Random),
            Err(Error::RangeTooSmall {
                requested: 11,
                available: 10,
            }),
        );
        assert_eq!(
            fill(&mut rng(), 1, 3, 2, false, Order::Random),
            Err(Error::RangeTooSmall {
                requested: 1,
                available: 0,
            }),
        );
    }

    #[test]
    fn test_fill_at_key_limits() {
        let values = fill(&mut rng(), 100, 0, i64::MAX, false, Order::Random).unwrap();
        assert!(values.iter().all(|value| *value >= 0));

        let values = fill(&mut rng(), 2, i64::MAX - 1, i64::MAX, true, Order::Ascending).unwrap();
        assert_eq!(values, vec![i64::MAX - 1, i64::MAX]);

        let values = fill(&mut rng(), 50, i64::MIN, i64::MAX, true, Order::Ascending).unwrap();
        assert_eq!(values.len(), 50);
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));

        let values = fill(&mut rng(), 3, i64::MIN, i64::MIN, false, Order::Random).unwrap();
        assert_eq!(values, vec![i64::MIN; 3]);
    }

    #[test]
    fn test_draw_stays_in_range() {
        let mut rng = rng();
        for _ in 0..1000 {
            let value = draw(&mut rng, i64::MAX - 3, i64::MAX);
            assert!(value >= i64::MAX - 3);
            let value = draw(&mut rng, -2, 2);
            assert!(-2 <= value && value <= 2);
        }
    }

    #[test]
    fn test_fill_empty() {
        assert_eq!(fill(&mut rng(), 0, 3, 2, true, Order::Random), Ok(Vec::new()));
    }
}
