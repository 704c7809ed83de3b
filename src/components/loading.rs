//! Loading and Empty States

use leptos::*;

use crate::state::global::GlobalState;

/// Full-width loading spinner for page content.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Fixed indicator shown while any call is outstanding. The UI stays
/// interactive; triggering controls disable themselves instead.
#[component]
pub fn GlobalLoader() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let loading = state.loading;

    view! {
        {move || {
            if loading.get() {
                view! {
                    <div class="fixed top-4 right-4 z-50 flex items-center space-x-2
                                bg-gray-800 border border-gray-700 rounded-lg px-3 py-2 text-sm">
                        <div class="loading-spinner w-4 h-4" />
                        <span class="text-gray-300">"Loading..."</span>
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

/// Centered placeholder for empty or failed page content.
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl py-12 text-center">
            <p class="text-gray-400">{message}</p>
        </div>
    }
}
