//! The Cartesian product engine.
//!
//! A product over factors `F0, F1, ..., Fn-1` enumerates every tuple that
//! takes one element from each factor. Tuples are ordered like the readings
//! of an odometer: the last factor turns fastest, the first slowest. Index
//! `i` therefore corresponds to the mixed-radix number whose digits are the
//! per-factor positions and whose radices are the factor lengths:
//!
//! ```text
//! sizes = [2, 3]          index  positions  combination
//! F0 = [x, y]               0     [0, 0]     [x, a]
//! F1 = [a, b, c]            1     [0, 1]     [x, b]
//!                           2     [0, 2]     [x, c]
//!                           3     [1, 0]     [y, a]
//!                           ...
//! ```

use alloc::vec::Vec;
use core::fmt;

use smallvec::{SmallVec, smallvec};

use crate::error::ProductError;
use crate::iter::{Iter, Odometer};

/// One element from each factor, in factor order.
pub type Combination<'a, T> = Vec<&'a T>;

/// Per-factor positions of a combination: the mixed-radix digits of its index.
pub type Positions = SmallVec<[usize; 8]>;

/// A lazy, index-addressable Cartesian product over borrowed factors.
///
/// Construction measures the factors once; after that the product is
/// immutable. Combinations are built on demand and never cached.
///
/// # Example
///
/// ```
/// use odometer_core::CartesianProduct;
///
/// let factors = [vec!['x', 'y'], vec!['a', 'b', 'c']];
/// let product = CartesianProduct::new(&factors);
///
/// assert_eq!(product.len(), 6);
/// assert_eq!(product.get(4), Some(vec![&'y', &'b']));
/// assert_eq!(product.get(6), None);
/// assert_eq!(product.get(-1), None);
///
/// let all: Vec<_> = product.iter().collect();
/// assert_eq!(all[1], vec![&'x', &'b']);
/// ```
///
/// # Empty products
///
/// A product with an empty factor has no combinations. A product with no
/// factors at all has exactly one: the empty tuple.
pub struct CartesianProduct<'a, T> {
    factors: SmallVec<[&'a [T]; 8]>,
    sizes: SmallVec<[usize; 8]>,
    total: usize,
}

static_assertions::assert_impl_all!(CartesianProduct<'static, u8>: Send, Sync, Clone);

impl<'a, T> CartesianProduct<'a, T> {
    /// Builds the product of `factors`.
    ///
    /// Accepts anything that iterates over borrowed slices or slice-like
    /// values: `&Vec<Vec<T>>`, `&[[T; K]; N]`, `[&[T]; N]`, ...
    ///
    /// # Panics
    ///
    /// Panics if the number of combinations overflows `usize`. Use
    /// [`try_new`](Self::try_new) to handle that case.
    pub fn new<F>(factors: impl IntoIterator<Item = &'a F>) -> Self
    where
        F: AsRef<[T]> + ?Sized + 'a,
    {
        Self::try_new(factors).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Builds the product of `factors`, failing if the number of combinations
    /// overflows `usize`.
    pub fn try_new<F>(factors: impl IntoIterator<Item = &'a F>) -> Result<Self, ProductError>
    where
        F: AsRef<[T]> + ?Sized + 'a,
    {
        let factors: SmallVec<[&'a [T]; 8]> =
            factors.into_iter().map(|factor| factor.as_ref()).collect();
        let sizes: SmallVec<[usize; 8]> = factors.iter().map(|factor| factor.len()).collect();

        // An empty factor empties the product, however large the others are.
        let total = if sizes.contains(&0) {
            0
        } else {
            match sizes.iter().try_fold(1usize, |acc, &size| acc.checked_mul(size)) {
                Some(total) => total,
                None => {
                    tracing::debug!(?sizes, "combination count overflows usize");
                    return Err(ProductError::TotalOverflow { arity: sizes.len() });
                }
            }
        };

        tracing::debug!(?sizes, total, "built cartesian product");
        Ok(CartesianProduct {
            factors,
            sizes,
            total,
        })
    }

    /// Number of combinations.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of factors, which is also the length of every combination.
    pub fn arity(&self) -> usize {
        self.factors.len()
    }

    /// Length of each factor, in factor order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn factors(&self) -> &[&'a [T]] {
        &self.factors
    }

    /// Returns the combination at `index`.
    ///
    /// Any integer type is accepted; negative indices, indices that don't fit
    /// in a `usize`, and indices `>= len()` all give `None`.
    ///
    /// Runs in O(arity) by decoding `index` directly, without visiting the
    /// combinations before it.
    pub fn get<I: TryInto<usize>>(&self, index: I) -> Option<Combination<'a, T>> {
        let positions = self.positions(index.try_into().ok()?)?;
        Some(self.combination(&positions))
    }

    /// Decodes `index` into per-factor positions.
    ///
    /// ```
    /// use odometer_core::CartesianProduct;
    ///
    /// let factors = [vec![0; 2], vec![0; 3], vec![0; 4]];
    /// let product = CartesianProduct::new(&factors);
    ///
    /// assert_eq!(product.positions(17).unwrap().as_slice(), &[1, 1, 1]);
    /// assert_eq!(product.positions(24), None);
    /// ```
    pub fn positions(&self, index: usize) -> Option<Positions> {
        if index >= self.total {
            return None;
        }

        let mut positions: Positions = smallvec![0; self.arity()];
        let mut remainder = index;
        for (position, &size) in positions.iter_mut().zip(&self.sizes).rev() {
            *position = remainder % size;
            remainder /= size;
        }
        Some(positions)
    }

    /// Encodes per-factor positions back into an index.
    ///
    /// Returns `None` if `positions` has the wrong length or any position is
    /// past the end of its factor.
    pub fn index_of(&self, positions: &[usize]) -> Option<usize> {
        if positions.len() != self.arity() {
            return None;
        }

        positions
            .iter()
            .zip(&self.sizes)
            .try_fold(0usize, |index, (&position, &size)| {
                (position < size).then(|| index * size + position)
            })
    }

    /// Calls `f` with every combination and its index, in index order.
    ///
    /// The combination is lent as a slice that is updated in place between
    /// calls, so only the positions that changed are rewritten at each step.
    ///
    /// ```
    /// use odometer_core::CartesianProduct;
    ///
    /// let factors = [[1, 2], [3, 4]];
    /// let mut sums = Vec::new();
    /// CartesianProduct::new(&factors).for_each(|combination, index| {
    ///     sums.push((index, combination.iter().copied().sum::<i32>()));
    /// });
    /// assert_eq!(sums, [(0, 4), (1, 5), (2, 5), (3, 6)]);
    /// ```
    pub fn for_each(&self, mut f: impl FnMut(&[&'a T], usize)) {
        tracing::trace!(total = self.total, "for_each traversal");
        if self.total == 0 {
            return;
        }

        let mut odometer = Odometer::start(&self.factors);
        for index in 0..self.total {
            if index > 0 {
                odometer.advance();
            }
            f(odometer.current(), index);
        }
    }

    /// A fresh iterator over all combinations, in index order.
    ///
    /// Every call starts a new, independent traversal.
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter::new(self)
    }

    pub(crate) fn combination(&self, positions: &[usize]) -> Combination<'a, T> {
        positions
            .iter()
            .zip(&self.factors)
            .map(|(&position, &factor)| &factor[position])
            .collect()
    }
}

impl<'p, 'a, T> IntoIterator for &'p CartesianProduct<'a, T> {
    type Item = Combination<'a, T>;
    type IntoIter = Iter<'p, 'a, T>;

    fn into_iter(self) -> Iter<'p, 'a, T> {
        self.iter()
    }
}

// --- Manual Clone/Debug to avoid T: Clone/Debug bounds where possible ---

impl<T> Clone for CartesianProduct<'_, T> {
    fn clone(&self) -> Self {
        CartesianProduct {
            factors: self.factors.clone(),
            sizes: self.sizes.clone(),
            total: self.total,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CartesianProduct<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartesianProduct")
            .field("factors", &self.factors)
            .field("total", &self.total)
            .finish()
    }
}

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;
