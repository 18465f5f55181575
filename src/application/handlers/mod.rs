//! Intent handlers shipped with the crate.

pub mod double;

pub use double::{DoubleHandler, DOUBLE_INTENT, NUM_PARAM};
