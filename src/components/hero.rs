//! Hero Component
//!
//! Gradient banner with the page title.

use leptos::*;

/// Hero header component
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="w-full bg-gradient-to-r from-teal-500 to-blue-400 py-12 shadow-lg mb-10">
            <h1 class="text-5xl sm:text-6xl font-extrabold text-white text-center tracking-tight drop-shadow-lg">
                "My Weight Loss Journey"
            </h1>
            <p class="text-xl sm:text-2xl text-white/90 text-center mt-4 font-medium">
                "Vaibhav Yadav"
            </p>
        </header>
    }
}
