//! Stat Card
//!
//! Compact aggregate display for the dashboard landing page.

use leptos::*;

#[component]
pub fn StatCard(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{value}</div>
        </div>
    }
}
