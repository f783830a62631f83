//! Lazy, index-addressable Cartesian products.
//!
//! [`CartesianProduct`] borrows a list of factors and offers three ways to
//! reach its combinations, all in the same order (last factor fastest):
//!
//! - [`CartesianProduct::get`]: random access by index, by mixed-radix decoding
//! - [`CartesianProduct::for_each`]: eager traversal with an odometer
//! - [`CartesianProduct::iter`]: lazy, restartable traversal with an odometer
//!
//! [`IndexedCartesianProduct`] adds positional and string-keyed access on top
//! of the same product.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod error;
pub mod indexed;
pub mod iter;
pub mod product;

pub use error::ProductError;
pub use indexed::IndexedCartesianProduct;
pub use iter::Iter;
pub use product::{CartesianProduct, Combination, Positions};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_overflowing_product() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
