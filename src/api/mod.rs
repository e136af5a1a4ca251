//! Data Loading
//!
//! One-shot fetch of the static weight series.

pub mod client;

pub use client::{fetch_weights, parse_weights, WEIGHTS_PATH};
