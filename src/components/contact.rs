//! Contact Component
//!
//! Contact details and acknowledgements.

use leptos::*;

/// Contact and acknowledgements section
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section class="w-full bg-white rounded-3xl shadow-2xl p-8 border border-gray-100 text-center">
            <h2 class="text-2xl font-bold text-teal-700 mb-6">"Contact & Acknowledgements"</h2>
            <div class="flex flex-col md:flex-row justify-center items-center gap-8 text-gray-800">
                <div>
                    <h3 class="font-semibold text-lg mb-2">"Get in Touch"</h3>
                    <p>
                        "📧 "
                        <a href="mailto:yvaibbhav@gmail.com" class="hover:underline">
                            "yvaibbhav@gmail.com"
                        </a>
                    </p>
                    <p>"📱 7704868375"</p>
                </div>
                <div class="border-l border-gray-300 h-16 hidden md:block"></div>
                <div>
                    <h3 class="font-semibold text-lg mb-2">"Special Thanks"</h3>
                    <p>"A huge thank you to all my amazing coaches for their incredible support on this journey!"</p>
                </div>
            </div>
        </section>
    }
}
