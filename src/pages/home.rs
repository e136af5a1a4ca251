//! Home Page
//!
//! The single page: narrative, accent card, chart, and contact sections.
//! Owns the one-shot load of the weight series.

use leptos::*;

use crate::api;
use crate::components::{AccentCard, Contact, Journey, TotalLost, WeightChart};
use crate::state::global::GlobalState;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the weight series once on mount. On any failure the series
    // stays empty and the page renders its empty state; nothing retries.
    let series = state.series;
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_weights().await {
                Ok(entries) => {
                    // try_set: a response arriving after teardown is dropped
                    let _ = series.try_set(entries);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch weights: {}", e).into());
                }
            }
        });
    });

    view! {
        <main class="w-full max-w-5xl flex-1 px-4 flex flex-col gap-10 items-center">
            <section class="w-full flex flex-col md:flex-row gap-8 items-center justify-center">
                <Journey />
                <AccentCard />
            </section>

            <section class="w-full bg-white rounded-3xl shadow-2xl p-8 border border-gray-100">
                <h2 class="text-2xl font-bold text-teal-700 mb-6 text-center">
                    "Weight Progress Chart"
                </h2>
                <WeightChart />
                <TotalLost />
            </section>

            <Contact />
        </main>
    }
}
