use core::fmt;
use core::ops::Deref;

use crate::key::parse_index_key;

/// A type whose elements can be computed from an integer position.
///
/// Implementing this is the shortest way to get an [`Indexed`] wrapper:
/// [`Indexed::new`] uses [`IndexAccess::access`] as the accessor.
pub trait IndexAccess {
    type Output;

    /// Returns the element at `index`, or `None` when `index` is out of range.
    fn access(&self, index: usize) -> Option<Self::Output>;
}

/// The accessor type [`Indexed::new`] stores: a plain function pointer.
pub type AccessorFn<B, O> = fn(&B, usize) -> Option<O>;

/// Outcome of a string-keyed [`Indexed::lookup`].
///
/// The two "missing" outcomes are kept apart on purpose: a key that names an
/// index past the end is [`Lookup::OutOfRange`], while a key that does not
/// name an index at all is [`Lookup::NotAnIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup<T> {
    /// The key named an index and the accessor produced an element.
    Found(T),

    /// The key named an index, but the accessor had nothing there.
    OutOfRange(usize),

    /// The key is not an index. Resolve it against the base value instead.
    NotAnIndex,
}

impl<T> Lookup<T> {
    /// The element, if one was found.
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::OutOfRange(_) | Lookup::NotAnIndex => None,
        }
    }

    /// Whether the key was interpreted as an index (found or not).
    pub fn is_index(&self) -> bool {
        !matches!(self, Lookup::NotAnIndex)
    }

    pub fn as_ref(&self) -> Lookup<&T> {
        match self {
            Lookup::Found(value) => Lookup::Found(value),
            Lookup::OutOfRange(index) => Lookup::OutOfRange(*index),
            Lookup::NotAnIndex => Lookup::NotAnIndex,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::OutOfRange(index) => Lookup::OutOfRange(index),
            Lookup::NotAnIndex => Lookup::NotAnIndex,
        }
    }
}

/// A base value paired with an accessor that reads it by position.
///
/// The accessor is any `Fn(&B, usize) -> Option<O>`: a closure, a function,
/// or (through [`Indexed::new`]) the base type's [`IndexAccess`] impl. All
/// other access reaches the base value through `Deref`.
///
/// ```
/// use odometer_index::{Indexed, Lookup};
///
/// struct Grid {
///     width: usize,
///     cells: Vec<char>,
/// }
///
/// // Index the grid by column of the first row.
/// let grid = Grid { width: 3, cells: vec!['a', 'b', 'c', 'd', 'e', 'f'] };
/// let first_row = Indexed::with_accessor(grid, |g: &Grid, i: usize| {
///     (i < g.width).then(|| g.cells[i])
/// });
///
/// assert_eq!(first_row.at(2), Some('c'));
/// assert_eq!(first_row.lookup("3"), Lookup::OutOfRange(3));
/// assert_eq!(first_row.width, 3);
/// ```
#[derive(Clone)]
pub struct Indexed<B, F> {
    base: B,
    accessor: F,
}

impl<B: IndexAccess> Indexed<B, AccessorFn<B, B::Output>> {
    /// Wraps `base`, dispatching indices to [`IndexAccess::access`].
    pub fn new(base: B) -> Self {
        Indexed {
            base,
            accessor: B::access,
        }
    }
}

impl<B, F> Indexed<B, F> {
    /// Wraps `base`, dispatching indices to `accessor`.
    pub fn with_accessor(base: B, accessor: F) -> Self {
        Indexed { base, accessor }
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    pub fn into_inner(self) -> B {
        self.base
    }

    /// Reads the element at `index` through the accessor.
    pub fn at<O>(&self, index: usize) -> Option<O>
    where
        F: Fn(&B, usize) -> Option<O>,
    {
        (self.accessor)(&self.base, index)
    }

    /// Reads the element named by a string key.
    ///
    /// Keys accepted by [`parse_index_key`](crate::parse_index_key) go to the
    /// accessor; an index it has no element for is reported as
    /// [`Lookup::OutOfRange`]. Every other key yields [`Lookup::NotAnIndex`].
    pub fn lookup<O>(&self, key: &str) -> Lookup<O>
    where
        F: Fn(&B, usize) -> Option<O>,
    {
        match parse_index_key(key) {
            Ok(index) => match self.at(index) {
                Some(value) => Lookup::Found(value),
                None => Lookup::OutOfRange(index),
            },
            Err(reason) => {
                tracing::trace!(key, %reason, "key is not an index");
                Lookup::NotAnIndex
            }
        }
    }
}

impl<B, F> Deref for Indexed<B, F> {
    type Target = B;

    fn deref(&self) -> &B {
        &self.base
    }
}

impl<B: fmt::Debug, F> fmt::Debug for Indexed<B, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indexed")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}
