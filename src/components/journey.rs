//! Journey Component
//!
//! Narrative section with before/after photos.

use leptos::*;

use crate::state::global::{format_kg, GlobalState, STARTING_WEIGHT_KG};

/// Narrative card telling the story so far
#[component]
pub fn Journey() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Current weight falls back to the baseline until the series loads.
    let state_for_current = state.clone();
    let current_weight = create_memo(move |_| {
        state_for_current
            .series
            .get()
            .last()
            .map(|entry| entry.weight)
            .unwrap_or(STARTING_WEIGHT_KG)
    });

    let total_lost = create_memo(move |_| state.total_lost());

    view! {
        <div class="bg-white rounded-3xl shadow-2xl p-8 max-w-xl w-full border border-gray-100">
            <h2 class="text-2xl font-bold text-teal-700 mb-3">"Meet Vaibhav Yadav"</h2>
            <p class="text-gray-800 text-lg leading-relaxed">
                "On "
                <span class="font-semibold">"May 22nd, 2025"</span>
                ", I began a life-changing journey weighing "
                <span class="font-semibold">{format_kg(STARTING_WEIGHT_KG)} " kg"</span>
                ".\u{00a0}Through consistency, discipline, and a strong mindset, I've brought my weight down to "
                <span class="font-semibold">
                    {move || format_kg(current_weight.get())} " kg"
                </span>
                " — a loss of "
                <span class="font-semibold">
                    {move || format_kg(total_lost.get())} " kg"
                </span>
                " and a major win in the direction of better health and self-confidence."
                <br />
                <br />
                "This is just the beginning, and I'm here to prove that with the right mindset, anything is possible."
            </p>
            <div class="mt-8 grid grid-cols-1 md:grid-cols-2 gap-6">
                <PhotoCaption
                    src="/images/before.jpg"
                    alt="Vaibhav Yadav before weight loss"
                    caption="Before (113.2 kg)"
                />
                <PhotoCaption
                    src="/images/after.jpg"
                    alt="Vaibhav Yadav after weight loss"
                    caption="After (104.6 kg)"
                />
            </div>
        </div>
    }
}

/// Captioned photo cell
#[component]
fn PhotoCaption(
    src: &'static str,
    alt: &'static str,
    caption: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <img
                src=src
                alt=alt
                width="200"
                height="300"
                class="rounded-lg shadow-lg mx-auto object-cover w-full h-full"
            />
            <p class="mt-2 font-semibold text-gray-700">{caption}</p>
        </div>
    }
}
