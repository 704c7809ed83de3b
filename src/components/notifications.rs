//! Notification Bell
//!
//! Unread badge and dropdown feed backed by the notifications endpoints.

use leptos::*;

use crate::api;
use crate::api::types::Notification;
use crate::state::global::GlobalState;

#[component]
pub fn NotificationBell() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let data_version = state.data_version;

    let (open, set_open) = create_signal(false);
    let (items, set_items) = create_signal(Vec::<Notification>::new());

    let load = move || {
        spawn_local(async move {
            match api::fetch_notifications().await {
                Ok(list) => set_items.set(list),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch notifications: {}", err).into(),
                    );
                }
            }
        })
    };

    create_effect(move |_| {
        let _ = data_version.get();
        load();
    });

    let unread = move || items.get().iter().filter(|n| !n.is_read).count();

    let state_for_mark = state;
    let mark_all_read = move |_: web_sys::MouseEvent| {
        let state = state_for_mark.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::mark_notifications_read().await {
                Ok(()) => load(),
                Err(err) => state.show_error(&err.to_string()),
            }
            state.loading.set(false);
        });
    };

    view! {
        <div class="relative">
            <button
                on:click=move |_| set_open.update(|o| *o = !*o)
                class="w-full text-left px-4 py-2 rounded-lg text-gray-300
                       hover:text-white hover:bg-gray-700 transition-colors"
            >
                "Notifications"
                {move || {
                    let count = unread();
                    (count > 0).then(|| view! {
                        <span class="ml-2 bg-red-600 text-white text-xs px-2 py-0.5 rounded-full">
                            {count}
                        </span>
                    })
                }}
            </button>

            {move || {
                open.get().then(|| view! {
                    <div class="absolute bottom-12 left-2 w-72 max-h-80 overflow-y-auto
                                bg-gray-800 border border-gray-700 rounded-xl shadow-lg z-30">
                        <div class="flex items-center justify-between px-4 py-2 border-b border-gray-700">
                            <span class="text-sm font-medium">"Notifications"</span>
                            <button
                                on:click=mark_all_read.clone()
                                class="text-xs text-primary-400 hover:underline"
                            >
                                "Mark all read"
                            </button>
                        </div>
                        {move || {
                            let list = items.get();
                            if list.is_empty() {
                                view! {
                                    <p class="px-4 py-6 text-sm text-gray-400 text-center">
                                        "Nothing here yet."
                                    </p>
                                }.into_view()
                            } else {
                                list.into_iter().map(|item| view! {
                                    <NotificationRow item=item />
                                }).collect_view()
                            }
                        }}
                    </div>
                })
            }}
        </div>
    }
}

#[component]
fn NotificationRow(item: Notification) -> impl IntoView {
    let time = item.created_at.format("%b %d, %H:%M").to_string();

    view! {
        <div class="px-4 py-3 border-b border-gray-700 last:border-0">
            <div class="flex items-start space-x-2">
                {(!item.is_read).then(|| view! {
                    <span class="w-2 h-2 mt-1.5 bg-primary-500 rounded-full shrink-0" />
                })}
                <div>
                    <p class="text-sm">{item.message}</p>
                    <p class="text-xs text-gray-500 mt-1">{time}</p>
                </div>
            </div>
        </div>
    }
}
