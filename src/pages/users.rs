//! Users Page
//!
//! Admin-only company user management and the new-user dialog form.

use leptos::*;

use crate::actions::{dispatch, Action};
use crate::api;
use crate::api::types::{NewUser, User};
use crate::components::{EmptyState, Loading, ModalShell};
use crate::pages::Fetch;
use crate::state::global::GlobalState;
use crate::state::session::Role;

/// User management page
#[component]
pub fn Users() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let data_version = state.data_version;

    let (users, set_users) = create_signal(Fetch::<Vec<User>>::Loading);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let _ = data_version.get();
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(list) => set_users.set(Fetch::Ready(list)),
                Err(err) => {
                    state.show_error(&err.to_string());
                    set_users.set(Fetch::Failed);
                }
            }
        });
    });

    let state_for_new = state;
    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"User Management"</h1>
                    <p class="text-gray-400 mt-1">"Company Users"</p>
                </div>
                <button
                    on:click=move |_| dispatch(state_for_new.clone(), Action::OpenUserModal)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "Add User"
                </button>
            </div>

            {move || match users.get() {
                Fetch::Loading => view! { <Loading /> }.into_view(),
                Fetch::Failed => view! {
                    <EmptyState message="Failed to load data. Please try again." />
                }.into_view(),
                Fetch::Ready(list) => view! { <UserTable users=list /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn UserTable(users: Vec<User>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden">
            <table class="w-full text-left">
                <thead class="bg-gray-700 text-gray-300 text-sm">
                    <tr>
                        <th class="px-4 py-3">"Username"</th>
                        <th class="px-4 py-3">"Name"</th>
                        <th class="px-4 py-3">"Email"</th>
                        <th class="px-4 py-3">"Role"</th>
                    </tr>
                </thead>
                <tbody>
                    {users.into_iter().map(|user| {
                        let name = user.full_name();
                        view! {
                            <tr class="border-t border-gray-700">
                                <td class="px-4 py-3">{user.username.clone()}</td>
                                <td class="px-4 py-3 text-gray-400">{name}</td>
                                <td class="px-4 py-3 text-gray-400">{user.email.clone()}</td>
                                <td class="px-4 py-3">
                                    <span class="bg-gray-600 text-xs px-2 py-0.5 rounded-full text-white">
                                        {user.role.as_str()}
                                    </span>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// New-user dialog
#[component]
pub fn UserModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (role, set_role) = create_signal("employee".to_string());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_close = state.clone();
    let on_close = move || dispatch(state_for_close.clone(), Action::CloseModal);

    let state_for_submit = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = NewUser {
            username: username.get(),
            password: password.get(),
            email: email.get(),
            role: if role.get() == "manager" {
                Role::Manager
            } else {
                Role::Employee
            },
        };
        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::create_user(&request).await {
                Ok(_) => {
                    state.close_modals();
                    state.show_success("User created successfully!");
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
            <h2 class="text-xl font-semibold mb-6">"Create New User"</h2>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Role"</label>
                    <select
                        on:change=move |ev| set_role.set(event_target_value(&ev))
                        prop:value=move || role.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="employee">"Employee"</option>
                        <option value="manager">"Manager"</option>
                    </select>
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Creating..." } else { "Create User" }}
                </button>
            </form>
        </ModalShell>
    }
}
