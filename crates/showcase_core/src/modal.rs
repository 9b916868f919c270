//! Click-to-enlarge overlay viewers.
//!
//! Every designated group on the page gets its own [`ModalViewer`] with its
//! own overlay, selection and open flag. The [`ModalVariant::Single`] variant
//! backs a standalone figure: one image, a close button, no navigation.

use crate::keys::{KeyTarget, NavKey};
use crate::media::{MediaItem, MediaKind, wrap_index};

/// The overlay nodes a modal viewer writes to.
pub trait ModalView {
    /// Mark the overlay active (visible) or inactive.
    fn set_open(&mut self, open: bool);
    /// Pause the video slot if it is playing.
    fn pause_video(&mut self);
    /// Show the image slot with `src`, hiding the video slot.
    fn show_image(&mut self, src: &str, alt: &str);
    /// Show the video slot with `src` and load it, hiding the image slot.
    fn show_video(&mut self, src: &str);
    fn set_title(&mut self, title: &str);
    fn set_counter(&mut self, text: &str);
}

/// Which overlay layout an instance uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalVariant {
    /// Prev/next buttons, title and counter.
    Gallery,
    /// Image and close button only.
    Single,
}

impl ModalVariant {
    pub fn has_navigation(&self) -> bool {
        matches!(self, ModalVariant::Gallery)
    }
}

/// One overlay viewer and its selection state.
#[derive(Debug)]
pub struct ModalViewer<V> {
    name: String,
    variant: ModalVariant,
    items: Vec<MediaItem>,
    current: usize,
    is_open: bool,
    view: V,
}

impl<V: ModalView> ModalViewer<V> {
    /// Create a viewer named after its container.
    ///
    /// Returns `None` when the group has no items.
    pub fn new(
        name: impl Into<String>,
        variant: ModalVariant,
        items: Vec<MediaItem>,
        view: V,
    ) -> Option<Self> {
        let name = name.into();
        if items.is_empty() {
            log::debug!("Modal group '{}' has no clickable items", name);
            return None;
        }
        Some(Self {
            name,
            variant,
            items,
            current: 0,
            is_open: false,
            view,
        })
    }

    /// Single-item viewer for a standalone figure.
    pub fn single(name: impl Into<String>, item: MediaItem, view: V) -> Self {
        Self {
            name: name.into(),
            variant: ModalVariant::Single,
            items: vec![item],
            current: 0,
            is_open: false,
            view,
        }
    }

    /// Display the item at `index` without changing the open state.
    ///
    /// Indices wrap in both directions, matching the carousel.
    pub fn show_item(&mut self, index: isize) {
        let len = self.items.len();
        self.current = wrap_index(index, len);
        let item = &self.items[self.current];
        log::debug!("Modal '{}' showing {}/{}", self.name, self.current + 1, len);

        self.view.pause_video();
        match item.kind {
            MediaKind::Video => self.view.show_video(&item.source_url),
            MediaKind::Image => self.view.show_image(&item.source_url, &item.title),
        }

        if self.variant.has_navigation() {
            self.view.set_title(&item.title);
            self.view
                .set_counter(&format!("{} / {}", self.current + 1, len));
        }
    }

    /// Handle a click on the clickable at `index`: show it, then open.
    pub fn open_at(&mut self, index: usize) {
        self.show_item(index as isize);
        self.open();
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.view.set_open(true);
    }

    /// Hide the overlay and stop playback.
    pub fn close(&mut self) {
        self.is_open = false;
        self.view.set_open(false);
        self.view.pause_video();
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        if self.variant.has_navigation() {
            self.show_item(self.current as isize + delta);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variant(&self) -> ModalVariant {
        self.variant
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &MediaItem {
        &self.items[self.current]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

impl<V: ModalView> KeyTarget for ModalViewer<V> {
    fn is_active(&self) -> bool {
        self.is_open
    }

    fn handle_key(&mut self, key: NavKey) -> bool {
        if !self.is_open {
            return false;
        }
        match key {
            NavKey::Escape => {
                self.close();
                true
            }
            NavKey::Left | NavKey::Right if self.variant.has_navigation() => {
                if let Some(delta) = key.step() {
                    self.step(delta);
                }
                true
            }
            NavKey::Left | NavKey::Right => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeOverlay {
        open: bool,
        playing: bool,
        image_src: Option<String>,
        video_src: Option<String>,
        title: String,
        counter: String,
        pauses: usize,
    }

    impl ModalView for FakeOverlay {
        fn set_open(&mut self, open: bool) {
            self.open = open;
        }

        fn pause_video(&mut self) {
            self.playing = false;
            self.pauses += 1;
        }

        fn show_image(&mut self, src: &str, _alt: &str) {
            self.image_src = Some(src.to_string());
            self.video_src = None;
        }

        fn show_video(&mut self, src: &str) {
            self.video_src = Some(src.to_string());
            self.image_src = None;
        }

        fn set_title(&mut self, title: &str) {
            self.title = title.to_string();
        }

        fn set_counter(&mut self, text: &str) {
            self.counter = text.to_string();
        }
    }

    fn group(count: usize) -> ModalViewer<FakeOverlay> {
        let items = (0..count)
            .map(|i| {
                let kind = if i % 2 == 1 {
                    MediaKind::Video
                } else {
                    MediaKind::Image
                };
                MediaItem::new(kind, format!("media-{}", i), i).with_title(format!("Item {}", i + 1))
            })
            .collect();
        ModalViewer::new("projects", ModalVariant::Gallery, items, FakeOverlay::default()).unwrap()
    }

    #[test]
    fn test_empty_group_does_not_activate() {
        let viewer = ModalViewer::new(
            "empty",
            ModalVariant::Gallery,
            Vec::new(),
            FakeOverlay::default(),
        );
        assert!(viewer.is_none());
    }

    #[test]
    fn test_click_then_next_updates_counter() {
        let mut viewer = group(2);
        viewer.open_at(0);
        assert!(viewer.is_open());
        assert_eq!(viewer.view().counter, "1 / 2");

        viewer.next();
        assert_eq!(viewer.current_index(), 1);
        assert_eq!(viewer.view().counter, "2 / 2");
        assert_eq!(viewer.view().video_src.as_deref(), Some("media-1"));
        assert_eq!(viewer.view().image_src, None);
        assert_eq!(viewer.view().title, "Item 2");
    }

    #[test]
    fn test_show_item_plain_modulo_for_non_negative() {
        let mut viewer = group(3);
        for i in 0..10isize {
            viewer.show_item(i);
            assert_eq!(viewer.current_index(), (i % 3) as usize);
        }
    }

    #[test]
    fn test_prev_from_first_wraps() {
        let mut viewer = group(3);
        viewer.open_at(0);
        viewer.prev();
        assert_eq!(viewer.current_index(), 2);
        assert_eq!(viewer.view().counter, "3 / 3");
    }

    #[test]
    fn test_open_then_close_stops_video() {
        let mut viewer = group(2);
        viewer.open_at(1);
        viewer.view_mut().playing = true;

        viewer.close();
        assert!(!viewer.is_open());
        assert!(!viewer.view().open);
        assert!(!viewer.view().playing);
    }

    #[test]
    fn test_showing_new_item_pauses_previous() {
        let mut viewer = group(2);
        viewer.open_at(1);
        viewer.view_mut().playing = true;
        viewer.next();
        assert!(!viewer.view().playing);
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut viewer = group(3);
        viewer.show_item(1);

        assert!(!viewer.is_active());
        assert!(!viewer.handle_key(NavKey::Escape));
        assert!(!viewer.handle_key(NavKey::Right));
        assert_eq!(viewer.current_index(), 1);
        assert!(!viewer.is_open());
    }

    #[test]
    fn test_keys_while_open() {
        let mut viewer = group(3);
        viewer.open_at(2);

        assert!(viewer.handle_key(NavKey::Right));
        assert_eq!(viewer.current_index(), 0);
        assert!(viewer.handle_key(NavKey::Left));
        assert_eq!(viewer.current_index(), 2);
        assert!(viewer.handle_key(NavKey::Escape));
        assert!(!viewer.is_open());
    }

    #[test]
    fn test_single_variant_has_no_navigation() {
        let item = MediaItem::new(MediaKind::Image, "figure.png", 0).with_title("Figure");
        let mut viewer = ModalViewer::single("figure", item, FakeOverlay::default());

        viewer.open_at(0);
        assert!(viewer.is_open());
        assert_eq!(viewer.view().image_src.as_deref(), Some("figure.png"));
        assert_eq!(viewer.view().counter, "");

        assert!(!viewer.handle_key(NavKey::Right));
        viewer.next();
        assert_eq!(viewer.current_index(), 0);

        assert!(viewer.handle_key(NavKey::Escape));
        assert!(!viewer.is_open());
    }
}
