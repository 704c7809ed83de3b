//! App Root Component
//!
//! Wires the hash router to the component tree: every hash change resolves
//! the session, runs the pure transition function, and applies whatever
//! effects the outcome calls for.

use leptos::*;

use crate::components::{GlobalLoader, Sidebar, Toast};
use crate::pages::{Approvals, Dashboard, ExpenseModal, Expenses, Login, Signup, UserModal, Users};
use crate::router::{self, AuthScreen, Outcome, Page, Route};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (route, set_route) = create_signal(Route::from_hash(&router::current_hash()));
    router::on_hash_change(move |hash| set_route.set(Route::from_hash(&hash)));

    let state_for_view = state;
    view! {
        <div class="min-h-screen bg-gray-900 text-gray-100">
            {move || render_route(state_for_view.clone(), route.get())}

            <ModalHost />
            <GlobalLoader />
            <Toast />
        </div>
    }
}

/// Apply one routing transition.
///
/// Identity is resolved from the credential before any page-access decision;
/// the in-memory copy wins when present, so resolution is idempotent.
fn render_route(state: GlobalState, route: Route) -> View {
    let has_token = session::stored_token().is_some();

    let role = if has_token && !route.is_auth() {
        match state.identity.get_untracked() {
            Some(identity) => Some(identity.role),
            None => {
                let loaded = session::load_identity();
                if let Some(identity) = &loaded {
                    state.identity.set(Some(identity.clone()));
                }
                loaded.map(|identity| identity.role)
            }
        }
    } else {
        None
    };

    match router::resolve(route, has_token, role) {
        Outcome::Auth(screen) => {
            // Entering the auth view always drops the whole session, storage
            // included.
            state.reset_session();
            session::clear_storage();
            match screen {
                AuthScreen::Login => view! { <Login /> }.into_view(),
                AuthScreen::Signup => view! { <Signup /> }.into_view(),
            }
        }
        Outcome::Redirect(target) => {
            // Reassign the hash so the URL and the rendered page stay in
            // step; the change re-enters the router.
            router::navigate(target);
            view! {}.into_view()
        }
        Outcome::Dashboard(page) => view! { <DashboardLayout page=page route=route /> }.into_view(),
    }
}

/// Sidebar plus the gated page for the current route.
#[component]
fn DashboardLayout(page: Page, route: Route) -> impl IntoView {
    view! {
        <div class="flex">
            <Sidebar route=route />
            <main class="flex-1 px-8 py-8">
                {match page {
                    Page::Dashboard => view! { <Dashboard /> }.into_view(),
                    Page::Expenses => view! { <Expenses /> }.into_view(),
                    Page::Approvals => view! { <Approvals /> }.into_view(),
                    Page::Users => view! { <Users /> }.into_view(),
                }}
            </main>
        </div>
    }
}

/// Shared host for the dashboard's dialogs.
#[component]
fn ModalHost() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let expense_modal = state.expense_modal;
    let user_modal = state.user_modal;

    view! {
        {move || expense_modal.get().map(|workflows| view! {
            <ExpenseModal workflows=workflows />
        })}
        {move || user_modal.get().then(|| view! { <UserModal /> })}
    }
}
