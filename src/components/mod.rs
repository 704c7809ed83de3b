//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod modal;
pub mod nav;
pub mod notifications;
pub mod stat_card;
pub mod toast;

pub use loading::{EmptyState, GlobalLoader, Loading};
pub use modal::ModalShell;
pub use nav::Sidebar;
pub use stat_card::StatCard;
pub use toast::Toast;
