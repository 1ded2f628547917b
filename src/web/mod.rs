//! Browser UI rendered with Leptos.
//!
//! Components hold the registration forms in signals and forward DOM events to
//! them; all validation, focus and countdown rules live in
//! [`crate::registration`]. Only [`config`] is compiled for native targets.

pub mod config;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
pub use self::app::App;

/// Mount [`App`] on the document body.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    leptos::prelude::mount_to_body(App);
}
