//! Page configuration.
//!
//! Every element id, selector and timing the page components use lives in
//! [`SiteConfig`]. All fields have serde defaults matching the stock markup,
//! so a page only needs to embed the values it changes.

use serde::{Deserialize, Serialize};

use crate::preview::PreviewTimings;

/// Log level setting for the page scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's Level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        self.to_level().to_level_filter()
    }
}

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Element id of the optional embedded JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "showcase-config";

/// Complete page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub version: u32,
    pub log_level: LogLevel,
    pub gallery: GalleryConfig,
    pub modals: ModalConfig,
    pub preview: PreviewTimings,
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            gallery: GalleryConfig::default(),
            modals: ModalConfig::default(),
            preview: PreviewTimings::default(),
            theme: ThemeConfig::default(),
            nav: NavConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

/// Carousel markup hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub viewer_id: String,
    pub image_id: String,
    pub video_id: String,
    pub title_id: String,
    pub description_id: String,
    pub rail_id: String,
    pub thumbnail_selector: String,
    pub prev_id: String,
    pub next_id: String,
    /// Class marking the highlighted thumbnail.
    pub active_class: String,
    /// Selector for the fallback image inside a video thumbnail.
    pub fallback_selector: String,
    /// Class added to the injected preview video.
    pub preview_class: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            viewer_id: "gallery-viewer".to_string(),
            image_id: "viewer-image".to_string(),
            video_id: "viewer-video".to_string(),
            title_id: "viewer-title".to_string(),
            description_id: "viewer-desc".to_string(),
            rail_id: "thumbnail-rail".to_string(),
            thumbnail_selector: ".thumbnail".to_string(),
            prev_id: "gallery-prev".to_string(),
            next_id: "gallery-next".to_string(),
            active_class: "active".to_string(),
            fallback_selector: "img".to_string(),
            preview_class: "thumbnail-preview".to_string(),
        }
    }
}

/// Modal group markup hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Container ids, one modal viewer each.
    pub groups: Vec<String>,
    /// Standalone figures, one single-item viewer each.
    pub single_figures: Vec<String>,
    pub clickable_selector: String,
    pub caption_selector: String,
    /// Class toggled on the overlay while it is open.
    pub open_class: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            groups: vec!["project-gallery".to_string(), "media-gallery".to_string()],
            single_figures: vec!["featured-figure".to_string()],
            clickable_selector: ".gallery-item".to_string(),
            caption_selector: "figcaption, .caption".to_string(),
            open_class: "active".to_string(),
        }
    }
}

/// Theme toggle markup hooks and preference key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_id: String,
    pub icon_selector: String,
    pub label_selector: String,
    pub body_class: String,
    /// Icon shown while light mode is active.
    pub dark_icon: String,
    /// Icon shown while dark mode is active.
    pub light_icon: String,
    pub dark_label: String,
    pub light_label: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "darkMode".to_string(),
            toggle_id: "dark-mode-toggle".to_string(),
            icon_selector: "#dark-mode-toggle i".to_string(),
            label_selector: ".mode-label".to_string(),
            body_class: "dark-mode".to_string(),
            dark_icon: "fas fa-moon".to_string(),
            light_icon: "fas fa-sun".to_string(),
            dark_label: "Dark".to_string(),
            light_label: "Light".to_string(),
        }
    }
}

/// Navigation menu and anchor scrolling hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_id: String,
    pub menu_selector: String,
    pub link_selector: String,
    pub open_class: String,
    pub anchor_selector: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_id: "nav-toggle".to_string(),
            menu_selector: "nav ul".to_string(),
            link_selector: "nav a".to_string(),
            open_class: "active".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
        }
    }
}

/// Fade-in-on-scroll settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub section_selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub animation: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_selector: "section".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            animation: "fadeIn 0.6s ease-in-out forwards".to_string(),
        }
    }
}

impl SiteConfig {
    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Parse the optional config block embedded in the page.
    ///
    /// A missing or blank block yields the defaults.
    pub fn from_embedded(json: Option<&str>) -> Result<Self, ConfigError> {
        match json.map(str::trim).filter(|j| !j.is_empty()) {
            Some(json) => Self::from_json(json),
            None => Ok(Self::default()),
        }
    }
}

/// Errors that can occur when loading configuration or preferences.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Preference storage error (localStorage in the browser)
    #[error("Storage error: {0}")]
    StorageError(String),
}
