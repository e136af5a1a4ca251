//! State Management
//!
//! Global reactive state for the page.

pub mod global;

pub use global::{provide_global_state, GlobalState, WeightEntry};
