//! Shared constants for the page components

/// Keyframes referenced by the reveal-on-scroll animation.
pub const FADE_IN_KEYFRAMES: &str = "
    @keyframes fadeIn {
        from {
            opacity: 0;
            transform: translateY(20px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }
";

/// Attribute written back onto each carousel thumbnail.
pub const THUMBNAIL_INDEX_ATTRIBUTE: &str = "data-index";

/// Thumbnail data attributes read by the carousel.
pub mod thumbnail_attributes {
    pub const TYPE: &str = "data-type";
    pub const SRC: &str = "data-src";
    pub const TITLE: &str = "data-title";
    pub const DESCRIPTION: &str = "data-desc";
}

/// Overlay element classes for the modal viewers.
pub mod overlay {
    pub const ROOT: &str = "modal-overlay";
    pub const CONTENT: &str = "modal-content";
    pub const CLOSE: &str = "modal-close";
    pub const PREV: &str = "modal-prev";
    pub const NEXT: &str = "modal-next";
    pub const IMAGE: &str = "modal-image";
    pub const VIDEO: &str = "modal-video";
    pub const TITLE: &str = "modal-title";
    pub const COUNTER: &str = "modal-counter";

    /// Button glyphs.
    pub const CLOSE_GLYPH: &str = "\u{00d7}";
    pub const PREV_GLYPH: &str = "\u{2039}";
    pub const NEXT_GLYPH: &str = "\u{203a}";
}
