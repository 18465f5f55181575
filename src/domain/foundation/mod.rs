//! Foundation module - Shared domain primitives.
//!
//! Value objects and wire adapters that the fulfillment envelope is built
//! from.

mod timestamp;
pub mod nullable;
pub mod string_bool;

pub use timestamp::Timestamp;
