//! Light/dark theme preference.
//!
//! The choice is stored as `"true"` (dark) or `"false"` under a single key.
//! Anything other than `"true"`, including a missing value, means light.

use crate::config::ThemeConfig;
use crate::storage::PreferenceStore;

/// Theme choice - dark or light mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    Dark,
    #[default]
    Light,
}

impl ThemeChoice {
    /// Interpret a stored preference value.
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some("true") {
            ThemeChoice::Dark
        } else {
            ThemeChoice::Light
        }
    }

    /// Value written back to the store.
    pub fn stored_value(&self) -> &'static str {
        match self {
            ThemeChoice::Dark => "true",
            ThemeChoice::Light => "false",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeChoice::Dark => ThemeChoice::Light,
            ThemeChoice::Light => ThemeChoice::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeChoice::Dark)
    }

    /// Icon class for the toggle. The icon shows the theme a click switches to.
    pub fn icon_class<'a>(&self, config: &'a ThemeConfig) -> &'a str {
        match self {
            ThemeChoice::Dark => &config.light_icon,
            ThemeChoice::Light => &config.dark_icon,
        }
    }

    /// Label next to the toggle, naming the theme a click switches to.
    pub fn toggle_label<'a>(&self, config: &'a ThemeConfig) -> &'a str {
        match self {
            ThemeChoice::Dark => &config.light_label,
            ThemeChoice::Light => &config.dark_label,
        }
    }
}

/// Page elements affected by the theme.
pub trait ThemeView {
    /// Add or remove the dark-mode class on the document body.
    fn set_dark_class(&mut self, class: &str, enabled: bool);
    fn set_icon(&mut self, class: &str);
    fn set_label(&mut self, text: &str);
}

/// Theme toggle bound to a preference store and the page.
#[derive(Debug)]
pub struct ThemeToggle<S, V> {
    choice: ThemeChoice,
    config: ThemeConfig,
    store: S,
    view: V,
}

impl<S: PreferenceStore, V: ThemeView> ThemeToggle<S, V> {
    /// Read the stored preference and apply it.
    pub fn load(config: ThemeConfig, store: S, view: V) -> Self {
        let choice = ThemeChoice::from_stored(store.get(&config.storage_key).as_deref());
        log::info!("Theme preference: {:?}", choice);
        let mut toggle = Self {
            choice,
            config,
            store,
            view,
        };
        toggle.apply();
        toggle
    }

    /// Flip the theme, persist it and update the page.
    pub fn toggle(&mut self) -> ThemeChoice {
        self.choice = self.choice.toggled();
        if let Err(e) = self
            .store
            .set(&self.config.storage_key, self.choice.stored_value())
        {
            log::warn!("Failed to persist theme preference: {}", e);
        }
        self.apply();
        self.choice
    }

    fn apply(&mut self) {
        self.view
            .set_dark_class(&self.config.body_class, self.choice.is_dark());
        self.view.set_icon(self.choice.icon_class(&self.config));
        self.view.set_label(self.choice.toggle_label(&self.config));
    }

    pub fn choice(&self) -> ThemeChoice {
        self.choice
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Debug, Default)]
    struct FakePage {
        dark: bool,
        icon: String,
        label: String,
    }

    impl ThemeView for FakePage {
        fn set_dark_class(&mut self, class: &str, enabled: bool) {
            assert_eq!(class, "dark-mode");
            self.dark = enabled;
        }

        fn set_icon(&mut self, class: &str) {
            self.icon = class.to_string();
        }

        fn set_label(&mut self, text: &str) {
            self.label = text.to_string();
        }
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(ThemeChoice::from_stored(Some("true")), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::from_stored(Some("false")), ThemeChoice::Light);
        assert_eq!(ThemeChoice::from_stored(Some("yes")), ThemeChoice::Light);
        assert_eq!(ThemeChoice::from_stored(None), ThemeChoice::Light);
    }

    #[test]
    fn test_unset_preference_then_toggle() {
        let mut toggle =
            ThemeToggle::load(ThemeConfig::default(), MemoryStore::new(), FakePage::default());

        assert_eq!(toggle.choice(), ThemeChoice::Light);
        assert!(!toggle.view().dark);
        assert_eq!(toggle.view().icon, "fas fa-moon");
        assert_eq!(toggle.view().label, "Dark");

        assert_eq!(toggle.toggle(), ThemeChoice::Dark);
        assert_eq!(toggle.store().get("darkMode").as_deref(), Some("true"));
        assert!(toggle.view().dark);
        assert_eq!(toggle.view().icon, "fas fa-sun");
        assert_eq!(toggle.view().label, "Light");

        toggle.toggle();
        assert_eq!(toggle.store().get("darkMode").as_deref(), Some("false"));
        assert!(!toggle.view().dark);
    }

    #[test]
    fn test_stored_dark_preference() {
        let mut store = MemoryStore::new();
        store.set("darkMode", "true").unwrap();

        let toggle = ThemeToggle::load(ThemeConfig::default(), store, FakePage::default());
        assert_eq!(toggle.choice(), ThemeChoice::Dark);
        assert!(toggle.view().dark);
        assert_eq!(toggle.view().label, "Light");
    }
}
