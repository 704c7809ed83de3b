//! Global Application State
//!
//! Reactive state shared across the component tree via Leptos signals. The
//! session identity lives here; every other entity is re-fetched per page
//! view and kept in page-local signals.

use leptos::*;

use crate::api::types::Workflow;
use crate::state::session::Identity;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Identity decoded from the stored credential, if any.
    pub identity: RwSignal<Option<Identity>>,
    /// Global loading indicator for in-flight calls.
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Bumped after every successful mutation so list pages re-fetch.
    pub data_version: RwSignal<u64>,
    /// Approval id with a decision in flight; its controls are disabled.
    pub acting_on: RwSignal<Option<u64>>,
    /// New-expense dialog, carrying the workflows fetched before opening.
    pub expense_modal: RwSignal<Option<Vec<Workflow>>>,
    /// New-user dialog visibility.
    pub user_modal: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        identity: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        data_version: create_rw_signal(0),
        acting_on: create_rw_signal(None),
        expense_modal: create_rw_signal(None),
        user_modal: create_rw_signal(false),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Record a completed mutation so dependent pages re-fetch.
    pub fn mark_data_changed(&self) {
        self.data_version.update(|v| *v += 1);
    }

    /// Close whichever dialog is open.
    pub fn close_modals(&self) {
        self.expense_modal.set(None);
        self.user_modal.set(false);
    }

    /// Forget the in-memory session. Persisted state is the session layer's
    /// concern.
    pub fn reset_session(&self) {
        self.identity.set(None);
        self.acting_on.set(None);
        self.close_modals();
    }
}
