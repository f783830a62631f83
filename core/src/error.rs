//! Errors raised while building a product.
//!
//! Lookups never fail: an index outside the product is `None`, not an error.

/// Error building a [`CartesianProduct`](crate::CartesianProduct).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    /// The number of combinations does not fit in a `usize`, so some of them
    /// could not be addressed by index.
    #[error("combination count overflow: the product of {arity} factor lengths exceeds usize::MAX")]
    TotalOverflow { arity: usize },
}
