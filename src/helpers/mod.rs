//! Helper Utilities
//!
//! Common utilities used across the application.

mod bounded;

pub use bounded::*;
