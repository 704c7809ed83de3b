//! Modal Dialog Shell
//!
//! Shared overlay and close behavior for the dashboard's dialogs: the ✕
//! button and a click on the overlay both dismiss.

use leptos::*;

/// Overlay plus dialog frame; the content comes from the caller.
#[component]
pub fn ModalShell(on_close: impl Fn() + Clone + 'static, children: Children) -> impl IntoView {
    let close_from_overlay = on_close.clone();

    view! {
        <div
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-40"
            on:click=move |_| close_from_overlay()
        >
            <div
                class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4"
                on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                <div class="flex justify-end">
                    <button
                        on:click=move |_| on_close()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
