//! Lost & Found Portal
//!
//! Client for the campus lost-and-found service, built with Leptos (WASM).
//!
//! # Features
//!
//! - Cookie-session authentication with admin and user roles
//! - Item reporting with image upload and inline preview
//! - Ownership claims with admin review
//! - Client-side item search
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the portal API over HTTP; the server owns
//! all persistent state and the client re-fetches after every mutation.

use leptos::*;

mod actions;
mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
