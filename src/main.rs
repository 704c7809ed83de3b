//! Expensio Dashboard
//!
//! Expense-approval frontend built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the expense-approval REST API over HTTP; the
//! backend stays the system of record and every page re-fetches what it
//! shows. The only state the client persists is the bearer credential.

use leptos::*;

mod actions;
mod api;
mod app;
mod components;
mod pages;
mod policy;
mod router;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
