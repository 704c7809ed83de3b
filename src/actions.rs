//! UI Actions
//!
//! Tagged actions produced by the view layer and consumed by a single
//! dispatcher, instead of pattern-matching on event targets. Mutating
//! actions drive the backend and bump the data version so the affected list
//! page re-fetches.

use leptos::spawn_local;
use leptos::{SignalGetUntracked, SignalSet};

use crate::api;
use crate::api::types::Decision;
use crate::router::{self, Route};
use crate::state::global::GlobalState;

/// Comment recorded when approving straight from the dashboard.
const APPROVE_COMMENT: &str = "Approved via web UI.";

/// Everything a click in the dashboard can mean.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    Logout,
    OpenExpenseModal,
    OpenUserModal,
    CloseModal,
    Approve(u64),
    Reject(u64),
}

/// Apply one action.
pub fn dispatch(state: GlobalState, action: Action) {
    match action {
        Action::Navigate(route) => router::navigate(route),
        // Entering the auth view clears the session; that is all logout is.
        Action::Logout => router::navigate(Route::Login),
        Action::CloseModal => state.close_modals(),
        Action::OpenUserModal => state.user_modal.set(true),
        Action::OpenExpenseModal => open_expense_modal(state),
        Action::Approve(id) => act(state, id, Decision::Approved, APPROVE_COMMENT.to_string()),
        Action::Reject(id) => {
            // The prompt is synchronous; a dismissed or blank prompt means no
            // network call at all.
            let Some(comment) = reject_comment(prompt_reject_reason()) else {
                return;
            };
            act(state, id, Decision::Rejected, comment);
        }
    }
}

/// Workflows are fetched before the dialog opens; on failure the dialog
/// stays closed and only a notification is shown.
fn open_expense_modal(state: GlobalState) {
    spawn_local(async move {
        state.loading.set(true);
        match api::fetch_workflows().await {
            Ok(workflows) => state.expense_modal.set(Some(workflows)),
            Err(_) => state.show_error("Could not load workflows."),
        }
        state.loading.set(false);
    });
}

fn act(state: GlobalState, approval_id: u64, decision: Decision, comment: String) {
    if state.acting_on.get_untracked().is_some() {
        // A decision is already in flight; ignore the duplicate.
        return;
    }
    state.acting_on.set(Some(approval_id));

    spawn_local(async move {
        state.loading.set(true);
        match api::act_on_approval(approval_id, decision, &comment).await {
            Ok(_) => {
                let message = match decision {
                    Decision::Approved => "Expense Approved!",
                    Decision::Rejected => "Expense Rejected!",
                };
                state.show_success(message);
                state.mark_data_changed();
            }
            Err(err) => state.show_error(&err.to_string()),
        }
        state.loading.set(false);
        state.acting_on.set(None);
    });
}

/// Reason text usable for a rejection; dismissed or blank input is `None`.
pub fn reject_comment(input: Option<String>) -> Option<String> {
    input
        .map(|reason| reason.trim().to_string())
        .filter(|reason| !reason.is_empty())
}

fn prompt_reject_reason() -> Option<String> {
    web_sys::window()
        .and_then(|w| {
            w.prompt_with_message("Please provide a reason for rejection:")
                .ok()
        })
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismissed_prompt_yields_no_comment() {
        assert_eq!(reject_comment(None), None);
    }

    #[test]
    fn blank_reasons_yield_no_comment() {
        assert_eq!(reject_comment(Some(String::new())), None);
        assert_eq!(reject_comment(Some("   ".to_string())), None);
    }

    #[test]
    fn real_reasons_are_trimmed() {
        assert_eq!(
            reject_comment(Some("  over budget  ".to_string())),
            Some("over budget".to_string())
        );
    }
}
