//! A [`CartesianProduct`] read by position.

use core::fmt;
use core::ops::Deref;

use odometer_index::{AccessorFn, IndexAccess, Indexed, Lookup};

use crate::error::ProductError;
use crate::iter::Iter;
use crate::product::{CartesianProduct, Combination};

impl<'a, T> IndexAccess for CartesianProduct<'a, T> {
    type Output = Combination<'a, T>;

    fn access(&self, index: usize) -> Option<Combination<'a, T>> {
        self.get(index)
    }
}

/// A [`CartesianProduct`] with positional access.
///
/// [`at`](Self::at) and [`lookup`](Self::lookup) read a combination by
/// position; every other method is the wrapped product's, through `Deref`.
///
/// ```
/// use odometer_core::IndexedCartesianProduct;
/// use odometer_index::Lookup;
///
/// let numbers = [1, 2];
/// let letters = [10, 20];
/// let product = IndexedCartesianProduct::new([&numbers, &letters]);
///
/// assert_eq!(product.at(3), Some(vec![&2, &20]));
/// assert_eq!(product.lookup("0"), Lookup::Found(vec![&1, &10]));
/// assert_eq!(product.lookup("4"), Lookup::OutOfRange(4));
/// assert_eq!(product.lookup("len"), Lookup::NotAnIndex);
/// assert_eq!(product.len(), 4);
/// ```
pub struct IndexedCartesianProduct<'a, T> {
    inner: Indexed<CartesianProduct<'a, T>, AccessorFn<CartesianProduct<'a, T>, Combination<'a, T>>>,
}

impl<'a, T> IndexedCartesianProduct<'a, T> {
    /// Builds the product of `factors`. See [`CartesianProduct::new`].
    pub fn new<F>(factors: impl IntoIterator<Item = &'a F>) -> Self
    where
        F: AsRef<[T]> + ?Sized + 'a,
    {
        CartesianProduct::new(factors).into()
    }

    /// Builds the product of `factors`. See [`CartesianProduct::try_new`].
    pub fn try_new<F>(factors: impl IntoIterator<Item = &'a F>) -> Result<Self, ProductError>
    where
        F: AsRef<[T]> + ?Sized + 'a,
    {
        CartesianProduct::try_new(factors).map(Self::from)
    }

    /// The combination at `index`, or `None` past the end.
    pub fn at(&self, index: usize) -> Option<Combination<'a, T>> {
        self.inner.at(index)
    }

    /// The combination named by a string key.
    ///
    /// Decimal keys are indices: an index past the end gives
    /// [`Lookup::OutOfRange`]. Any other key gives [`Lookup::NotAnIndex`].
    pub fn lookup(&self, key: &str) -> Lookup<Combination<'a, T>> {
        self.inner.lookup(key)
    }

    pub fn product(&self) -> &CartesianProduct<'a, T> {
        self.inner.base()
    }

    pub fn into_product(self) -> CartesianProduct<'a, T> {
        self.inner.into_inner()
    }
}

impl<'a, T> From<CartesianProduct<'a, T>> for IndexedCartesianProduct<'a, T> {
    fn from(product: CartesianProduct<'a, T>) -> Self {
        IndexedCartesianProduct {
            inner: Indexed::new(product),
        }
    }
}

impl<'a, T> Deref for IndexedCartesianProduct<'a, T> {
    type Target = CartesianProduct<'a, T>;

    fn deref(&self) -> &CartesianProduct<'a, T> {
        self.inner.base()
    }
}

impl<'p, 'a, T> IntoIterator for &'p IndexedCartesianProduct<'a, T> {
    type Item = Combination<'a, T>;
    type IntoIter = Iter<'p, 'a, T>;

    fn into_iter(self) -> Iter<'p, 'a, T> {
        self.product().iter()
    }
}

impl<T> Clone for IndexedCartesianProduct<'_, T> {
    fn clone(&self) -> Self {
        IndexedCartesianProduct {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedCartesianProduct<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IndexedCartesianProduct")
            .field(self.product())
            .finish()
    }
}

#[cfg(test)]
#[path = "indexed_test.rs"]
mod indexed_test;
