//! Accent Card Component
//!
//! Motivational card whose background gradient rotates through the accent
//! palette on a fixed period.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::state::global::{advance_accent, GlobalState};
use crate::theme::{ACCENT_PALETTE, ACCENT_PERIOD_MS};

/// Motivational card with a rotating accent gradient
#[component]
pub fn AccentCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let accent_index = state.accent_index;

    // Advance the accent once per period while mounted. Dropping the
    // Interval clears the underlying timer, so no tick can fire after
    // this component is cleaned up.
    let interval = Interval::new(ACCENT_PERIOD_MS, move || {
        accent_index.update(|index| *index = advance_accent(*index, ACCENT_PALETTE.len()));
    });
    on_cleanup(move || drop(interval));

    let background = move || {
        let accent = ACCENT_PALETTE[accent_index.get() % ACCENT_PALETTE.len()];
        format!("background: {}", accent.gradient())
    };

    view! {
        <div
            class="accent-card rounded-3xl shadow-xl p-8 w-full max-w-xs text-center text-white font-bold text-xl"
            style=background
        >
            <span class="block mb-2 text-3xl">"🔥"</span>
            "Stay Consistent, Stay Strong!"
        </div>
    }
}

// Browser-only checks, run with `wasm-pack test --headless --chrome`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::callback::Interval;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn interval_stops_ticking_after_drop() {
        let ticks = Rc::new(Cell::new(0u32));

        let ticks_in_cb = Rc::clone(&ticks);
        let interval = Interval::new(10, move || {
            ticks_in_cb.set(ticks_in_cb.get() + 1);
        });

        TimeoutFuture::new(45).await;
        drop(interval);
        let seen = ticks.get();
        assert!(seen >= 1, "interval never fired while alive");

        TimeoutFuture::new(50).await;
        assert_eq!(ticks.get(), seen, "interval fired after drop");
    }
}
