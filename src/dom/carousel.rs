//! Gallery carousel bound to the page's viewer and thumbnail rail.

use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::config::GalleryConfig;
use showcase_core::constants::{THUMBNAIL_INDEX_ATTRIBUTE, thumbnail_attributes};
use showcase_core::{Carousel, CarouselView, KeyDispatcher, PreviewTimings, ThumbnailAttributes};
use web_sys::{
    Document, Element, HtmlImageElement, HtmlVideoElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use super::preview::{self, DomPreviewSurface};
use super::{attribute, by_id, listen, query_all_in, set_class, set_visible};
use crate::error::DomError;

/// The viewer slots, caption and thumbnails of the gallery.
pub struct DomCarouselView {
    image: HtmlImageElement,
    video: HtmlVideoElement,
    title: Option<Element>,
    description: Option<Element>,
    thumbnails: Vec<Element>,
    active_class: String,
}

impl CarouselView for DomCarouselView {
    fn clear_media(&mut self) {
        self.video.pause().ok();
        self.video.remove_attribute("src").ok();
        self.video.load();
        self.image.remove_attribute("src").ok();
    }

    fn show_image(&mut self, src: &str, alt: &str) {
        set_visible(&self.video, false);
        set_visible(&self.image, true);
        self.image.set_src(src);
        self.image.set_alt(alt);
    }

    fn show_video(&mut self, src: &str) {
        set_visible(&self.image, false);
        set_visible(&self.video, true);
        self.video.set_src(src);
        self.video.load();
    }

    fn set_caption(&mut self, title: &str, description: &str) {
        if let Some(el) = &self.title {
            el.set_text_content(Some(title));
        }
        if let Some(el) = &self.description {
            el.set_text_content(Some(description));
        }
    }

    fn set_thumbnail_active(&mut self, index: usize, active: bool) {
        if let Some(thumb) = self.thumbnails.get(index) {
            set_class(thumb, &self.active_class, active);
        }
    }

    fn reveal_thumbnail(&mut self, index: usize) {
        let Some(thumb) = self.thumbnails.get(index) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        options.set_inline(ScrollLogicalPosition::Center);
        thumb.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn read_thumbnail(thumb: &Element) -> ThumbnailAttributes {
    ThumbnailAttributes {
        kind: attribute(thumb, thumbnail_attributes::TYPE),
        src: attribute(thumb, thumbnail_attributes::SRC),
        title: attribute(thumb, thumbnail_attributes::TITLE),
        description: attribute(thumb, thumbnail_attributes::DESCRIPTION),
    }
}

/// Bind the gallery if the page has one.
///
/// Returns `Ok(false)` when the viewer, its slots or the thumbnails are
/// missing.
pub fn mount(
    document: &Document,
    config: &GalleryConfig,
    timings: PreviewTimings,
    dispatcher: &mut KeyDispatcher,
) -> Result<bool, DomError> {
    if document.get_element_by_id(&config.viewer_id).is_none() {
        return Ok(false);
    }
    let Some(rail) = document.get_element_by_id(&config.rail_id) else {
        return Ok(false);
    };
    let (Some(image), Some(video)) = (
        by_id::<HtmlImageElement>(document, &config.image_id)?,
        by_id::<HtmlVideoElement>(document, &config.video_id)?,
    ) else {
        return Ok(false);
    };

    let thumbnails = query_all_in(&rail, &config.thumbnail_selector)?;
    let mut items = Vec::with_capacity(thumbnails.len());
    for (index, thumb) in thumbnails.iter().enumerate() {
        thumb.set_attribute(THUMBNAIL_INDEX_ATTRIBUTE, &index.to_string())?;
        let item = read_thumbnail(thumb).into_item(index);

        if item.is_video() && !item.source_url.is_empty() {
            let surface = DomPreviewSurface::new(
                document.clone(),
                thumb.clone(),
                &config.fallback_selector,
                &config.preview_class,
            );
            if let Err(e) = preview::start(surface, &item.source_url, timings) {
                log::debug!("Thumbnail {} preview skipped: {}", index, e);
            }
        }
        items.push(item);
    }

    let view = DomCarouselView {
        image,
        video,
        title: document.get_element_by_id(&config.title_id),
        description: document.get_element_by_id(&config.description_id),
        thumbnails: thumbnails.clone(),
        active_class: config.active_class.clone(),
    };
    let Some(carousel) = Carousel::new(items, view) else {
        return Ok(false);
    };
    let carousel = Rc::new(RefCell::new(carousel));

    for (index, thumb) in thumbnails.iter().enumerate() {
        let carousel = carousel.clone();
        listen(thumb, "click", move |_| {
            carousel.borrow_mut().render(index as isize);
        })?;
    }
    if let Some(prev) = document.get_element_by_id(&config.prev_id) {
        let carousel = carousel.clone();
        listen(&prev, "click", move |_| carousel.borrow_mut().prev())?;
    }
    if let Some(next) = document.get_element_by_id(&config.next_id) {
        let carousel = carousel.clone();
        listen(&next, "click", move |_| carousel.borrow_mut().next())?;
    }

    carousel.borrow_mut().render(0);
    log::info!("Gallery carousel ready with {} items", carousel.borrow().len());
    dispatcher.register(carousel);
    Ok(true)
}
