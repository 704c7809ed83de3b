//! Login Page

use leptos::*;

use crate::actions::{dispatch, Action};
use crate::api;
use crate::router::Route;
use crate::state::global::GlobalState;
use crate::state::session::{self, Role};

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();
        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::login(&user, &pass).await {
                Ok(token) => {
                    session::store_token(&token.access);
                    // Resolve the identity right away so the landing page can
                    // be chosen by role; a bad token clears itself here.
                    if let Some(identity) = session::load_identity() {
                        let landing = if identity.role == Role::Employee {
                            Route::Dashboard
                        } else {
                            Route::Approvals
                        };
                        state.identity.set(Some(identity));
                        state.show_success("Login successful!");
                        dispatch(state.clone(), Action::Navigate(landing));
                    }
                }
                Err(err) => state.show_error(&err.to_string()),
            }
            state.loading.set(false);
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-sm">
                <h2 class="text-2xl font-bold">"Welcome Back"</h2>
                <p class="text-gray-400 mt-1 mb-6">"Login to access your dashboard."</p>

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

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Login" }}
                    </button>

                    <p class="text-sm text-gray-400 text-center">
                        "No account? "
                        <a href="#signup" class="text-primary-400 hover:underline">"Sign Up"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
