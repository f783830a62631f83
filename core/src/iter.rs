//! Lazy traversal of a [`CartesianProduct`].

use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::product::{CartesianProduct, Combination, Positions};

/// Odometer over the factors: one counter per factor plus the elements the
/// counters currently point at.
///
/// Every factor must be non-empty.
pub(crate) struct Odometer<'p, 'a, T> {
    factors: &'p [&'a [T]],
    counters: Positions,
    current: SmallVec<[&'a T; 8]>,
}

impl<'p, 'a, T> Odometer<'p, 'a, T> {
    pub(crate) fn start(factors: &'p [&'a [T]]) -> Self {
        Self::at(factors, factors.iter().map(|_| 0).collect())
    }

    pub(crate) fn at(factors: &'p [&'a [T]], counters: Positions) -> Self {
        let current = counters
            .iter()
            .zip(factors)
            .map(|(&counter, &factor)| &factor[counter])
            .collect();
        Odometer {
            factors,
            counters,
            current,
        }
    }

    pub(crate) fn current(&self) -> &[&'a T] {
        &self.current
    }

    /// Steps to the next combination, carrying into slower factors on
    /// overflow. Returns `false` after wrapping around past the last one.
    pub(crate) fn advance(&mut self) -> bool {
        for i in (0..self.factors.len()).rev() {
            let factor = self.factors[i];
            self.counters[i] += 1;
            if self.counters[i] < factor.len() {
                self.current[i] = &factor[self.counters[i]];
                return true;
            }
            self.counters[i] = 0;
            self.current[i] = &factor[0];
        }
        false
    }
}

impl<T> Clone for Odometer<'_, '_, T> {
    fn clone(&self) -> Self {
        Odometer {
            factors: self.factors,
            counters: self.counters.clone(),
            current: self.current.clone(),
        }
    }
}

/// Iterator over the combinations of a [`CartesianProduct`], in index order.
///
/// Created by [`CartesianProduct::iter`]. Each iterator owns its own cursor,
/// so any number of traversals can run side by side. Cloning an iterator
/// forks the traversal at its current position.
///
/// Stepping forward costs amortized O(1) counter updates plus the copy of the
/// yielded combination. [`nth`](Iterator::nth) and iteration from the back
/// jump directly to their index instead of stepping.
pub struct Iter<'p, 'a, T> {
    product: &'p CartesianProduct<'a, T>,
    /// Positioned at `front` whenever `front < back`.
    odometer: Option<Odometer<'p, 'a, T>>,
    front: usize,
    back: usize,
}

impl<'p, 'a, T> Iter<'p, 'a, T> {
    pub(crate) fn new(product: &'p CartesianProduct<'a, T>) -> Self {
        tracing::trace!(total = product.len(), "starting traversal");
        let odometer = (!product.is_empty()).then(|| Odometer::start(product.factors()));
        Iter {
            product,
            odometer,
            front: 0,
            back: product.len(),
        }
    }

    /// Index of the combination the next call to `next` yields.
    pub fn next_index(&self) -> usize {
        self.front
    }
}

impl<'a, T> Iterator for Iter<'_, 'a, T> {
    type Item = Combination<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let odometer = self.odometer.as_mut()?;
        let combination = odometer.current().to_vec();

        self.front += 1;
        if self.front < self.back {
            odometer.advance();
        }
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.front = self.back;
            return None;
        }
        self.front += n;
        let positions = self.product.positions(self.front)?;
        self.odometer = Some(Odometer::at(self.product.factors(), positions));
        self.next()
    }

    fn count(self) -> usize {
        self.len()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, '_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.product.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, '_, T> {
    fn len(&self) -> usize {
        self.back.saturating_sub(self.front)
    }
}

impl<T> FusedIterator for Iter<'_, '_, T> {}

impl<T> Clone for Iter<'_, '_, T> {
    fn clone(&self) -> Self {
        Iter {
            product: self.product,
            odometer: self.odometer.clone(),
            front: self.front,
            back: self.back,
        }
    }
}

impl<T> fmt::Debug for Iter<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "iter_test.rs"]
mod iter_test;
