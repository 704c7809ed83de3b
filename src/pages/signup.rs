//! Signup Page
//!
//! Creates the company and its first admin user in one step.

use leptos::*;

use crate::actions::{dispatch, Action};
use crate::api;
use crate::api::types::SignupRequest;
use crate::router::Route;
use crate::state::global::GlobalState;

#[component]
pub fn Signup() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (company, set_company) = create_signal(String::new());
    let (currency, set_currency) = create_signal(String::new());
    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = SignupRequest {
            company_name: company.get(),
            default_currency: currency.get(),
            username: username.get(),
            email: email.get(),
            password: password.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
        };
        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::signup(&request).await {
                Ok(()) => {
                    state.show_success("Signup successful! Please log in.");
                    dispatch(state.clone(), Action::Navigate(Route::Login));
                }
                Err(err) => state.show_error(&err.to_string()),
            }
            state.loading.set(false);
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4 py-8">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md">
                <h2 class="text-2xl font-bold">"Create Company Account"</h2>
                <p class="text-gray-400 mt-1 mb-6">
                    "This will create your company and the first admin user."
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <Field label="Company Name" value=company set=set_company />
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">
                            "Default Currency (e.g., USD)"
                        </label>
                        <input
                            type="text"
                            maxlength="3"
                            prop:value=move || currency.get()
                            on:input=move |ev| set_currency.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <Field label="Admin Username" value=username set=set_username />
                    <Field label="Admin Email" kind="email" value=email set=set_email />
                    <Field label="Password" kind="password" value=password set=set_password />
                    <div class="grid grid-cols-2 gap-4">
                        <Field label="First Name" value=first_name set=set_first_name />
                        <Field label="Last Name" value=last_name set=set_last_name />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Creating..." } else { "Create Account" }}
                    </button>

                    <p class="text-sm text-gray-400 text-center">
                        "Already have an account? "
                        <a href="#login" class="text-primary-400 hover:underline">"Log In"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

/// Labeled text input bound to a signal pair.
#[component]
fn Field(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: ReadSignal<String>,
    set: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| set.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
