//! UI Components
//!
//! Reusable Leptos components for the page.

pub mod accent_card;
pub mod chart;
pub mod contact;
pub mod hero;
pub mod journey;

pub use accent_card::AccentCard;
pub use chart::{TotalLost, WeightChart};
pub use contact::Contact;
pub use hero::Hero;
pub use journey::Journey;
