//! My Weight Loss Journey
//!
//! A single-page personal site built with Leptos (WASM).
//!
//! # Features
//!
//! - Hero header and journey narrative with before/after photos
//! - Bar chart of weight observations loaded from a static JSON asset
//! - "Total lost" summary derived reactively from the loaded series
//! - Color-cycling motivational accent card
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend: the weight series is a static JSON
//! document fetched once on mount, and everything else is presentation.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod theme;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
