//! State Management
//!
//! Session resolution and global reactive state.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState};
pub use session::{Identity, Role};
