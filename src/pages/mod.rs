//! Pages
//!
//! Top-level page components for the auth screens and each dashboard route.

pub mod approvals;
pub mod dashboard;
pub mod expenses;
pub mod login;
pub mod signup;
pub mod users;

pub use approvals::Approvals;
pub use dashboard::Dashboard;
pub use expenses::{ExpenseModal, Expenses};
pub use login::Login;
pub use signup::Signup;
pub use users::{UserModal, Users};

/// Lifecycle of a page's data fetch.
#[derive(Clone)]
pub enum Fetch<T> {
    Loading,
    Ready(T),
    Failed,
}
