//! Backend API
//!
//! Transport wrapper and typed calls for every backend resource. The backend
//! is the system of record; the client only ever holds what these calls
//! return for the duration of one render pass.

pub mod client;
pub mod error;
pub mod types;

pub use client::*;
pub use error::ApiError;
