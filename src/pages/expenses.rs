//! Expenses Page
//!
//! The employee's expense list, receipt attachment, and the new-expense
//! dialog form.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::actions::{dispatch, Action};
use crate::api;
use crate::api::types::{Expense, ExpenseStatus, NewExpense, Workflow};
use crate::components::{EmptyState, Loading, ModalShell};
use crate::pages::Fetch;
use crate::state::global::GlobalState;

/// Expense list page
#[component]
pub fn Expenses() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let data_version = state.data_version;

    let (expenses, set_expenses) = create_signal(Fetch::<Vec<Expense>>::Loading);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let _ = data_version.get();
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_expenses().await {
                Ok(list) => set_expenses.set(Fetch::Ready(list)),
                Err(err) => {
                    state.show_error(&err.to_string());
                    set_expenses.set(Fetch::Failed);
                }
            }
        });
    });

    let state_for_new = state;
    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"My Expenses"</h1>
                    <p class="text-gray-400 mt-1">"Everything you have submitted."</p>
                </div>
                <button
                    on:click=move |_| dispatch(state_for_new.clone(), Action::OpenExpenseModal)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "New Expense"
                </button>
            </div>

            {move || match expenses.get() {
                Fetch::Loading => view! { <Loading /> }.into_view(),
                Fetch::Failed => view! {
                    <EmptyState message="Failed to load data. Please try again." />
                }.into_view(),
                Fetch::Ready(list) => view! { <ExpenseTable expenses=list /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ExpenseTable(expenses: Vec<Expense>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden">
            <table class="w-full text-left">
                <thead class="bg-gray-700 text-gray-300 text-sm">
                    <tr>
                        <th class="px-4 py-3">"Description"</th>
                        <th class="px-4 py-3">"Category"</th>
                        <th class="px-4 py-3">"Amount"</th>
                        <th class="px-4 py-3">"Status"</th>
                        <th class="px-4 py-3">"Created"</th>
                        <th class="px-4 py-3">"Receipt"</th>
                    </tr>
                </thead>
                <tbody>
                    {if expenses.is_empty() {
                        // An explicit row, not a silently empty table body.
                        view! {
                            <tr>
                                <td colspan="6" class="px-4 py-8 text-center text-gray-400">
                                    "No expenses found. Click 'New Expense' to start."
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        expenses
                            .into_iter()
                            .map(|expense| view! { <ExpenseRow expense=expense /> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ExpenseRow(expense: Expense) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let created = expense.created_at.format("%b %d, %Y").to_string();
    let amount = format!("{} {}", expense.amount, expense.currency);
    let expense_id = expense.id;
    let has_receipt = expense.receipt.is_some();
    // Where the chain is stuck, for anything still undecided.
    let awaiting = matches!(
        expense.status,
        ExpenseStatus::Pending | ExpenseStatus::InProgress
    )
    .then(|| expense.current_step())
    .flatten();

    let state_for_upload = state;
    let on_receipt = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Ok(form) = web_sys::FormData::new() else {
            return;
        };
        if form.append_with_blob("receipt", &file).is_err() {
            return;
        }

        let state = state_for_upload.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::upload_receipt(expense_id, form).await {
                Ok(upload) => {
                    state.show_success(&upload.message);
                    state.mark_data_changed();
                }
                Err(err) => state.show_error(&err.to_string()),
            }
            state.loading.set(false);
        });
    };

    view! {
        <tr class="border-t border-gray-700">
            <td class="px-4 py-3">{expense.description.clone()}</td>
            <td class="px-4 py-3 text-gray-400">{expense.category.clone()}</td>
            <td class="px-4 py-3">{amount}</td>
            <td class="px-4 py-3">
                <span class=format!(
                    "{} text-xs px-2 py-0.5 rounded-full text-white",
                    expense.status.badge_class()
                )>
                    {expense.status.label()}
                </span>
                {awaiting.map(|step| view! {
                    <span class="block text-xs text-gray-500 mt-1">
                        {format!("awaiting step {}", step)}
                    </span>
                })}
            </td>
            <td class="px-4 py-3 text-gray-400">{created}</td>
            <td class="px-4 py-3">
                {if has_receipt {
                    view! { <span class="text-green-400 text-sm">"Attached"</span> }.into_view()
                } else {
                    view! {
                        <label class="text-primary-400 text-sm cursor-pointer hover:underline">
                            "Attach receipt"
                            <input
                                type="file"
                                accept="image/*"
                                class="hidden"
                                on:change=on_receipt
                            />
                        </label>
                    }.into_view()
                }}
            </td>
        </tr>
    }
}

/// New-expense dialog, opened once workflows have been fetched.
#[component]
pub fn ExpenseModal(workflows: Vec<Workflow>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (description, set_description) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (category, set_category) = create_signal(String::new());
    let (currency, set_currency) = create_signal(String::new());
    let (workflow, set_workflow) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_close = state.clone();
    let on_close = move || dispatch(state_for_close.clone(), Action::CloseModal);

    let state_for_submit = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = NewExpense {
            description: description.get(),
            amount: amount.get(),
            category: category.get(),
            currency: currency.get(),
            // Unselected stays out of the body entirely.
            workflow: workflow.get().parse().ok(),
        };
        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::create_expense(&request).await {
                Ok(_) => {
                    state.close_modals();
                    state.show_success("Expense submitted!");
                    state.mark_data_changed();
                }
                // The dialog stays open so the input can be corrected.
                Err(err) => state.show_error(&err.to_string()),
            }
            state.loading.set(false);
            set_submitting.set(false);
        });
    };

    view! {
        <ModalShell on_close=on_close>
            <h2 class="text-xl font-semibold mb-6">"New Expense"</h2>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                    <input
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Amount"</label>
                    <input
                        type="number"
                        step="0.01"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Category"</label>
                    <input
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Currency"</label>
                    <input
                        type="text"
                        maxlength="3"
                        placeholder="e.g., USD"
                        prop:value=move || currency.get()
                        on:input=move |ev| set_currency.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        "Approval Workflow (Optional)"
                    </label>
                    <select
                        on:change=move |ev| set_workflow.set(event_target_value(&ev))
                        prop:value=move || workflow.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"Default (Manager Only)"</option>
                        {workflows.into_iter().map(|wf| view! {
                            <option value=wf.id.to_string()>{wf.name}</option>
                        }).collect_view()}
                    </select>
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Expense" }}
                </button>
            </form>
        </ModalShell>
    }
}
