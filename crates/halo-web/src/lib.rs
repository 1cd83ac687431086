#![forbid(unsafe_code)]

//! WASM frontend for the Halo site.
//!
//! Binds [`halo_core::Router`] to the browser: a `web-sys` render target, the
//! `hashchange`/`DOMContentLoaded` wiring, and a console sink for `tracing`.
//! The JS host loads the module and calls `boot()`, or constructs a
//! `HaloSite` itself for custom configuration.

pub mod logging;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomScene, DomScrollSubscription, DomTarget};
#[cfg(target_arch = "wasm32")]
pub use wasm::{HaloSite, boot};
