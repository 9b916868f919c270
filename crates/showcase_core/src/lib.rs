//! Platform-agnostic state for the showcase page scripts.
//!
//! Each page component is an explicit state object bound to a small view
//! trait. The browser build implements those traits on top of `web-sys`; the
//! tests here implement them with recording fakes.
//!
//! - [`carousel`]: gallery viewer driven by a thumbnail strip
//! - [`modal`]: click-to-enlarge overlay viewers
//! - [`preview`]: still-frame previews for video thumbnails
//! - [`keys`]: single keyboard dispatcher for all components
//! - [`theme`]: persisted light/dark preference
//! - [`nav`]: mobile menu and in-page anchors
//! - [`config`]: element hooks, timings and log level

pub mod carousel;
pub mod config;
pub mod constants;
pub mod keys;
pub mod media;
pub mod modal;
pub mod nav;
pub mod preview;
pub mod storage;
pub mod theme;

#[cfg(test)]
mod tests;

pub use carousel::{Carousel, CarouselView};
pub use config::{ConfigError, LogLevel, SiteConfig};
pub use keys::{KeyDispatcher, KeyTarget, NavKey};
pub use media::{ClickableMedia, MediaItem, MediaKind, ThumbnailAttributes};
pub use modal::{ModalVariant, ModalView, ModalViewer};
pub use nav::{NavMenu, NavMenuView};
pub use preview::{PreviewPhase, PreviewSurface, PreviewTimings, VideoPreview};
pub use storage::{MemoryStore, PreferenceStore};
pub use theme::{ThemeChoice, ThemeToggle, ThemeView};
