//! Odometer - Lazy, index-addressable Cartesian products
//!
//! # Overview
//!
//! A Cartesian product over factors `F0, F1, ..., Fn-1` is every tuple that
//! picks one element from each factor. Odometer enumerates those tuples
//! without materializing them, and can jump straight to the tuple at any
//! index. Common use cases include:
//!
//! - Parameter sweeps and test matrices
//! - Enumerating configurations or grid points
//! - Sharding a large combination space by index range
//!
//! # Quick Start
//!
//! ```
//! use odometer::CartesianProduct;
//!
//! let sizes = ["S", "M", "L"];
//! let colors = ["red", "blue"];
//! let product = CartesianProduct::new([&sizes[..], &colors[..]]);
//!
//! // Random access: the last factor varies fastest.
//! assert_eq!(product.len(), 6);
//! assert_eq!(product.get(3), Some(vec![&"M", &"blue"]));
//! assert_eq!(product.get(6), None);
//!
//! // Lazy, restartable iteration.
//! let first_two: Vec<_> = product.iter().take(2).collect();
//! assert_eq!(first_two, [vec![&"S", &"red"], vec![&"S", &"blue"]]);
//!
//! // Eager traversal with the index of each combination.
//! let mut labels = Vec::new();
//! product.for_each(|combination, index| {
//!     labels.push(format!("{index}:{}-{}", combination[0], combination[1]));
//! });
//! assert_eq!(labels[5], "5:L-blue");
//! ```
//!
//! # Indexed access
//!
//! [`IndexedCartesianProduct`] reads combinations by position, including from
//! string keys. Keys that aren't indices are reported separately from indices
//! past the end:
//!
//! ```
//! use odometer::{IndexedCartesianProduct, Lookup};
//!
//! let factors = [vec![1, 2], vec![3, 4]];
//! let product = IndexedCartesianProduct::new(&factors);
//!
//! assert_eq!(product.at(3), Some(vec![&2, &4]));
//! assert_eq!(product.lookup("1"), Lookup::Found(vec![&1, &4]));
//! assert_eq!(product.lookup("4"), Lookup::OutOfRange(4));
//! assert_eq!(product.lookup("sizes"), Lookup::NotAnIndex);
//! ```
//!
//! The same wrapper works for any type with a positional accessor; see
//! [`Indexed`].

pub use odometer_core::{
    CartesianProduct, Combination, IndexedCartesianProduct, Iter, Positions, ProductError,
};
pub use odometer_index::{
    AccessorFn, IndexAccess, Indexed, KeyError, Lookup, MAX_SAFE_INDEX, parse_index_key,
};
