//! Theme toggle and its `localStorage` preference.

use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::config::ThemeConfig;
use showcase_core::{ConfigError, PreferenceStore, ThemeToggle, ThemeView};
use web_sys::{Document, Element, Event, HtmlElement, Storage};

use super::{listen, set_class};
use crate::error::DomError;

/// Preference store backed by `window.localStorage`.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    /// Open local storage. Private browsing modes may deny access; reads then
    /// return nothing and writes fail.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage not available, theme preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| ConfigError::StorageError("localStorage not available".to_string()))?;
        storage.set_item(key, value).map_err(|e| {
            ConfigError::StorageError(format!("Failed to save to localStorage: {:?}", e))
        })
    }
}

/// Body class, toggle icon and label.
pub struct DomThemeView {
    body: Option<HtmlElement>,
    icon: Option<Element>,
    label: Option<Element>,
}

impl ThemeView for DomThemeView {
    fn set_dark_class(&mut self, class: &str, enabled: bool) {
        if let Some(body) = &self.body {
            set_class(body, class, enabled);
        }
    }

    fn set_icon(&mut self, class: &str) {
        if let Some(icon) = &self.icon {
            icon.set_class_name(class);
        }
    }

    fn set_label(&mut self, text: &str) {
        if let Some(label) = &self.label {
            label.set_text_content(Some(text));
        }
    }
}

/// Apply the stored theme and bind the toggle.
///
/// Returns `Ok(false)` when the page has no toggle; the stored preference is
/// then left untouched.
pub fn mount(document: &Document, config: &ThemeConfig) -> Result<bool, DomError> {
    let Some(toggle_button) = document.get_element_by_id(&config.toggle_id) else {
        return Ok(false);
    };

    let view = DomThemeView {
        body: document.body(),
        icon: document.query_selector(&config.icon_selector)?,
        label: document.query_selector(&config.label_selector)?,
    };
    let theme = Rc::new(RefCell::new(ThemeToggle::load(
        config.clone(),
        LocalStorageStore::open(),
        view,
    )));

    listen(&toggle_button, "click", move |event: Event| {
        event.prevent_default();
        event.stop_propagation();
        let choice = theme.borrow_mut().toggle();
        log::debug!("Theme switched to {:?}", choice);
    })?;
    Ok(true)
}
