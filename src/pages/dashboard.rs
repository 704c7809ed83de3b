//! Dashboard Page
//!
//! Landing page: greeting plus aggregate stat cards. The greeting renders
//! whether or not the stats fetch succeeds.

use leptos::*;

use crate::api;
use crate::api::types::DashboardStats;
use crate::components::StatCard;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let identity = state.identity;
    let data_version = state.data_version;

    let (stats, set_stats) = create_signal(None::<DashboardStats>);

    create_effect(move |_| {
        let _ = data_version.get();
        spawn_local(async move {
            match api::fetch_dashboard_stats().await {
                Ok(fetched) => set_stats.set(Some(fetched)),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch dashboard stats: {}", err).into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">
                    {move || {
                        identity.get()
                            .map(|identity| format!("Welcome, {}!", identity.username))
                            .unwrap_or_else(|| "Welcome!".to_string())
                    }}
                </h1>
                <p class="text-gray-400 mt-1">"Select an option from the sidebar to get started."</p>
            </div>

            {move || stats.get().map(|stats| view! {
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <StatCard label="Pending Expenses" value=stats.pending_count.to_string() />
                    <StatCard label="Approved Expenses" value=stats.approved_count.to_string() />
                    <StatCard label="Total Approved" value=stats.total_approved_amount.clone() />
                </div>
            })}
        </div>
    }
}
