//! Horizontal panel navigation for landing pages.
//!
//! `core` is platform-free and tested on the host. Everything else adapts it
//! to the browser through `web-sys` and only builds for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod indicators;
#[cfg(target_arch = "wasm32")]
mod reveal;
