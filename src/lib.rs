//! textkit: a stateless toolkit of pure string transformations.
//!
//! Every function here is deterministic for a given input (the [`random`]
//! module excepted, by definition), performs no I/O, and holds no state
//! beyond lazily-compiled regular expressions. All of it is safe to call
//! concurrently without coordination.
//!
//! Length, truncation, and indexing operate on Unicode code points, never
//! bytes.

pub mod casing;
pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod masking;
pub mod matcher;
pub mod normalize;
pub mod random;
pub mod sanitize;

pub use error::{Result, TextKitError};
pub use matcher::LoginField;
