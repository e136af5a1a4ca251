//! App Root Component
//!
//! Page shell with global providers.

use leptos::*;

use crate::components::Hero;
use crate::pages::Home;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-teal-100 flex flex-col items-center font-sans">
            <Hero />
            <Home />
            <Footer />
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full max-w-5xl text-center text-gray-500 mt-12 mb-4 text-sm">
            "© 2025 My Weight Loss Journey"
        </footer>
    }
}
