//! Adapters - Implementations facing the outside world.
//!
//! - `http` - axum webhook endpoint the intent platform calls

pub mod http;
