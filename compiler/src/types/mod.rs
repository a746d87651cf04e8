//! Static type domain for whilst
//!
//! The checker assigns every expression one of these types. There are no
//! type variables and no compound types; `IllTyped` is the failure sentinel.

pub mod core;

pub use self::core::*;
