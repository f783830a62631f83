//! Indexed access for types that expose an integer-keyed accessor.
//!
//! Some values are naturally addressed by position but don't *store* their
//! elements: a lazily enumerated sequence computes element `i` on demand.
//! Such types can't implement [`core::ops::Index`] (there is no place to
//! borrow from), yet callers still want `value.at(i)` and string-keyed lookup
//! that treats `"3"` as position 3.
//!
//! [`Indexed`] wraps any base value together with an accessor capability and
//! provides exactly that:
//!
//! - [`Indexed::at`] forwards a typed index to the accessor.
//! - [`Indexed::lookup`] parses a string key with [`parse_index_key`] and
//!   dispatches it, distinguishing three outcomes (see [`Lookup`]).
//! - Everything else goes to the base value through `Deref`.
//!
//! # Example
//!
//! ```
//! use odometer_index::{IndexAccess, Indexed, Lookup};
//!
//! /// The squares of `0..limit`, computed on demand.
//! struct Squares {
//!     limit: usize,
//! }
//!
//! impl IndexAccess for Squares {
//!     type Output = usize;
//!
//!     fn access(&self, index: usize) -> Option<usize> {
//!         (index < self.limit).then(|| index * index)
//!     }
//! }
//!
//! let squares = Indexed::new(Squares { limit: 4 });
//! assert_eq!(squares.at(3), Some(9));
//! assert_eq!(squares.lookup("2"), Lookup::Found(4));
//! assert_eq!(squares.lookup("4"), Lookup::OutOfRange(4));
//! assert_eq!(squares.lookup("limit"), Lookup::NotAnIndex);
//!
//! // Non-index access goes straight to the base value.
//! assert_eq!(squares.limit, 4);
//! ```
//!
//! # Keys
//!
//! A key names an index when it is a plain base-10 digit string whose value
//! is at most [`MAX_SAFE_INDEX`] (`2^53 - 1`). Signs, whitespace, fractions
//! and exponents are never indices.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

mod indexed;
mod key;

pub use indexed::{AccessorFn, IndexAccess, Indexed, Lookup};
pub use key::{KeyError, MAX_SAFE_INDEX, parse_index_key};
