//! Gallery carousel: one large viewer driven by a strip of thumbnails.
//!
//! [`Carousel`] owns the selection and reflects it into a [`CarouselView`].
//! `render` fully rewrites the view from the selection, so it can be called
//! from any trigger (thumbnail click, prev/next buttons, arrow keys) in any
//! order.

use crate::keys::{KeyTarget, NavKey};
use crate::media::{MediaItem, MediaKind, wrap_index};

/// The DOM nodes the carousel writes to.
pub trait CarouselView {
    /// Pause the video slot and clear the sources of both slots.
    fn clear_media(&mut self);
    /// Show the image slot with `src`, hiding the video slot.
    fn show_image(&mut self, src: &str, alt: &str);
    /// Show the video slot with `src` and reload it, hiding the image slot.
    fn show_video(&mut self, src: &str);
    fn set_caption(&mut self, title: &str, description: &str);
    fn set_thumbnail_active(&mut self, index: usize, active: bool);
    /// Scroll the thumbnail into the horizontal centre of its rail.
    fn reveal_thumbnail(&mut self, index: usize);
}

/// Carousel selection state bound to its view.
#[derive(Debug)]
pub struct Carousel<V> {
    items: Vec<MediaItem>,
    current: usize,
    view: V,
}

impl<V: CarouselView> Carousel<V> {
    /// Create a carousel over `items`.
    ///
    /// Returns `None` for an empty list; the component then stays inactive.
    /// Nothing is rendered until [`Carousel::render`] is called.
    pub fn new(items: Vec<MediaItem>, view: V) -> Option<Self> {
        if items.is_empty() {
            log::debug!("Carousel has no items, not activating");
            return None;
        }
        Some(Self {
            items,
            current: 0,
            view,
        })
    }

    /// Select the item at `index` (wrapping in both directions) and redraw.
    pub fn render(&mut self, index: isize) {
        let len = self.items.len();
        self.current = wrap_index(index, len);
        let item = &self.items[self.current];
        log::debug!("Carousel showing {}/{}: {:?}", self.current + 1, len, item.kind);

        self.view.clear_media();
        match item.kind {
            MediaKind::Video => self.view.show_video(&item.source_url),
            MediaKind::Image => self.view.show_image(&item.source_url, &item.title),
        }
        self.view.set_caption(&item.title, &item.description);

        for i in 0..len {
            self.view.set_thumbnail_active(i, i == self.current);
        }
        self.view.reveal_thumbnail(self.current);
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        self.render(self.current as isize + delta);
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &MediaItem {
        &self.items[self.current]
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; an empty carousel is never constructed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<V: CarouselView> KeyTarget for Carousel<V> {
    fn is_active(&self) -> bool {
        true
    }

    fn handle_key(&mut self, key: NavKey) -> bool {
        match key.step() {
            Some(delta) => {
                self.step(delta);
                true
            }
            None => false,
        }
    }
}
