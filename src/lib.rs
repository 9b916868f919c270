//! Showcase - page scripts for a static portfolio site
//!
//! Gallery carousel, click-to-enlarge modal viewers, theme toggle, mobile
//! menu, smooth anchor scrolling and reveal-on-scroll, compiled to
//! WebAssembly. Component state lives in `showcase_core`; this crate binds it
//! to the DOM.

mod error;

pub use error::DomError;
pub use showcase_core;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
