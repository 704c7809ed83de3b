//! Approvals Page
//!
//! Pending approvals inbox with approve/reject actions.

use leptos::*;

use crate::actions::{dispatch, Action};
use crate::api;
use crate::api::types::{Approval, ApprovalStatus};
use crate::components::{EmptyState, Loading};
use crate::pages::Fetch;
use crate::policy::APPROVALS_TITLES;
use crate::state::global::GlobalState;

/// Keep only entries still awaiting a decision, preserving input order.
fn pending_only(approvals: Vec<Approval>) -> Vec<Approval> {
    approvals
        .into_iter()
        .filter(|approval| approval.status == ApprovalStatus::Pending)
        .collect()
}

/// Approvals inbox page
#[component]
pub fn Approvals() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let identity = state.identity;
    let data_version = state.data_version;

    let (approvals, set_approvals) = create_signal(Fetch::<Vec<Approval>>::Loading);

    let state_for_effect = state;
    create_effect(move |_| {
        let _ = data_version.get();
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_approvals().await {
                Ok(list) => set_approvals.set(Fetch::Ready(pending_only(list))),
                Err(err) => {
                    state.show_error(&err.to_string());
                    set_approvals.set(Fetch::Failed);
                }
            }
        });
    });

    let title = move || {
        identity
            .get()
            .map(|identity| APPROVALS_TITLES.title_for(&identity.username))
            .unwrap_or_else(|| APPROVALS_TITLES.default_title())
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">{title}</h1>
                <p class="text-gray-400 mt-1">"Pending Approvals"</p>
            </div>

            {move || match approvals.get() {
                Fetch::Loading => view! { <Loading /> }.into_view(),
                Fetch::Failed => view! {
                    <EmptyState message="Failed to load data. Please try again." />
                }.into_view(),
                Fetch::Ready(pending) if pending.is_empty() => view! {
                    <EmptyState message="No pending approvals. Great job!" />
                }.into_view(),
                Fetch::Ready(pending) => view! {
                    <ApprovalTable approvals=pending />
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ApprovalTable(approvals: Vec<Approval>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden">
            <table class="w-full text-left">
                <thead class="bg-gray-700 text-gray-300 text-sm">
                    <tr>
                        <th class="px-4 py-3">"Employee"</th>
                        <th class="px-4 py-3">"Description"</th>
                        <th class="px-4 py-3">"Amount"</th>
                        <th class="px-4 py-3">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {approvals
                        .into_iter()
                        .map(|approval| view! { <ApprovalRow approval=approval /> })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ApprovalRow(approval: Approval) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let acting_on = state.acting_on;

    let id = approval.id;
    let employee = approval.expense.employee.username.clone();
    let description = approval.expense.description.clone();
    let amount = format!("{} {}", approval.expense.amount, approval.expense.currency);

    // Disabled while this row's decision is in flight.
    let acting = move || acting_on.get() == Some(id);

    let state_for_approve = state.clone();
    let state_for_reject = state;

    view! {
        <tr class="border-t border-gray-700">
            <td class="px-4 py-3">{employee}</td>
            <td class="px-4 py-3">{description}</td>
            <td class="px-4 py-3">{amount}</td>
            <td class="px-4 py-3 space-x-2">
                <button
                    on:click=move |_| dispatch(state_for_approve.clone(), Action::Approve(id))
                    disabled=acting
                    class="px-3 py-1.5 bg-green-600 hover:bg-green-700 disabled:bg-gray-600
                           rounded-lg text-sm font-medium transition-colors"
                >
                    "Approve"
                </button>
                <button
                    on:click=move |_| dispatch(state_for_reject.clone(), Action::Reject(id))
                    disabled=acting
                    class="px-3 py-1.5 bg-red-600 hover:bg-red-700 disabled:bg-gray-600
                           rounded-lg text-sm font-medium transition-colors"
                >
                    "Reject"
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn approval(id: u64, status: &str) -> Approval {
        serde_json::from_value(json!({
            "id": id,
            "status": status,
            "sequence": 1,
            "expense": {
                "id": id * 10,
                "employee": {
                    "id": 1,
                    "username": "omar",
                    "email": "omar@example.com",
                    "role": "employee"
                },
                "amount": "40.00",
                "currency": "USD",
                "category": "Travel",
                "description": "Taxi",
                "status": "pending",
                "created_at": "2024-03-11T09:24:00Z"
            }
        }))
        .unwrap()
    }

    #[test]
    fn non_pending_entries_are_dropped() {
        let filtered = pending_only(vec![
            approval(1, "approved"),
            approval(2, "pending"),
            approval(3, "rejected"),
            approval(4, "pending"),
        ]);
        let ids: Vec<u64> = filtered.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn input_order_is_preserved() {
        let filtered = pending_only(vec![
            approval(9, "pending"),
            approval(3, "pending"),
            approval(7, "pending"),
        ]);
        let ids: Vec<u64> = filtered.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![9, 3, 7]);
    }

    #[test]
    fn all_non_pending_means_empty() {
        assert!(pending_only(vec![approval(1, "approved"), approval(2, "rejected")]).is_empty());
    }
}
