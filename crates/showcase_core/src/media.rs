//! Media items declared by page markup.
//!
//! Both the carousel and the modal viewers consume a fixed list of
//! [`MediaItem`]s built once at page-ready time. The builders here take the raw
//! attribute values the DOM layer scraped, so the parsing rules can be tested
//! without a browser.

use serde::{Deserialize, Serialize};

/// Kind of media an item displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    /// Parse a `data-type` attribute value.
    ///
    /// Only `video` (case-insensitive) selects the video slot; anything else,
    /// including a missing attribute, is treated as an image.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("video") => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }

    /// Attribute spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// One displayable image or video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub source_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Position in the list the item was declared in.
    pub origin_index: usize,
}

impl MediaItem {
    pub fn new(kind: MediaKind, source_url: impl Into<String>, origin_index: usize) -> Self {
        Self {
            kind,
            source_url: source_url.into(),
            title: String::new(),
            description: String::new(),
            origin_index,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Raw `data-*` attributes read from one carousel thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThumbnailAttributes {
    pub kind: Option<String>,
    pub src: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ThumbnailAttributes {
    /// Build the carousel item for the thumbnail at `index`.
    ///
    /// A thumbnail without `data-src` still produces an item so that thumbnail
    /// positions and item indices stay aligned; it renders an empty slot.
    pub fn into_item(self, index: usize) -> MediaItem {
        let kind = MediaKind::from_attribute(self.kind.as_deref());
        let src = match self.src {
            Some(src) if !src.trim().is_empty() => src,
            _ => {
                log::warn!("Thumbnail {} has no data-src", index);
                String::new()
            }
        };

        MediaItem::new(kind, src, index)
            .with_title(self.title.unwrap_or_default())
            .with_description(self.description.unwrap_or_default())
    }
}

/// Media discovered inside one clickable element of a modal group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickableMedia {
    pub video_src: Option<String>,
    pub image_src: Option<String>,
    pub caption: Option<String>,
}

impl ClickableMedia {
    /// Build the modal item for the clickable at `index`.
    ///
    /// A nested video wins over a nested image. Returns `None` when the
    /// element carries no usable media at all.
    pub fn into_item(self, index: usize) -> Option<MediaItem> {
        let non_empty = |s: Option<String>| s.filter(|s| !s.trim().is_empty());

        let (kind, src) = match (non_empty(self.video_src), non_empty(self.image_src)) {
            (Some(video), _) => (MediaKind::Video, video),
            (None, Some(image)) => (MediaKind::Image, image),
            (None, None) => return None,
        };

        let title = self
            .caption
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| default_caption(index));

        Some(MediaItem::new(kind, src, index).with_title(title))
    }
}

/// Caption used when a clickable has none: `Item N`, 1-based.
pub fn default_caption(index: usize) -> String {
    format!("Item {}", index + 1)
}

/// Floor-style wrap of a possibly negative index into `0..len`.
///
/// `len` must be non-zero.
pub fn wrap_index(index: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrap_index on empty list");
    index.rem_euclid(len as isize) as usize
}
