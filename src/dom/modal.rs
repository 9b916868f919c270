//! Overlay viewers for modal groups and standalone figures.

use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::config::ModalConfig;
use showcase_core::constants::overlay;
use showcase_core::{
    ClickableMedia, KeyDispatcher, MediaItem, MediaKind, ModalVariant, ModalView, ModalViewer,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement, HtmlVideoElement};

use super::{attribute, create, listen, query_all_in, set_class, set_visible};
use crate::error::DomError;

type SharedViewer = Rc<RefCell<ModalViewer<DomModalView>>>;

/// Nodes of one overlay.
pub struct DomModalView {
    overlay: HtmlElement,
    image: HtmlImageElement,
    video: Option<HtmlVideoElement>,
    title: Option<Element>,
    counter: Option<Element>,
    open_class: String,
}

impl ModalView for DomModalView {
    fn set_open(&mut self, open: bool) {
        set_class(&self.overlay, &self.open_class, open);
    }

    fn pause_video(&mut self) {
        if let Some(video) = &self.video {
            video.pause().ok();
        }
    }

    fn show_image(&mut self, src: &str, alt: &str) {
        if let Some(video) = &self.video {
            set_visible(video, false);
        }
        set_visible(&self.image, true);
        self.image.set_src(src);
        self.image.set_alt(alt);
    }

    fn show_video(&mut self, src: &str) {
        let Some(video) = &self.video else {
            log::warn!("Overlay has no video slot for {}", src);
            return;
        };
        set_visible(&self.image, false);
        set_visible(video, true);
        video.set_src(src);
        video.load();
    }

    fn set_title(&mut self, title: &str) {
        if let Some(el) = &self.title {
            el.set_text_content(Some(title));
        }
    }

    fn set_counter(&mut self, text: &str) {
        if let Some(el) = &self.counter {
            el.set_text_content(Some(text));
        }
    }
}

/// Overlay nodes that need listeners.
struct OverlayControls {
    close: Element,
    prev: Option<Element>,
    next: Option<Element>,
}

fn button(document: &Document, class: &str, glyph: &str, label: &str) -> Result<Element, DomError> {
    let button: Element = create(document, "button", class)?;
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", label)?;
    button.set_text_content(Some(glyph));
    Ok(button)
}

/// Build the overlay for `name` and append it to the body.
fn build_overlay(
    document: &Document,
    name: &str,
    variant: ModalVariant,
    open_class: &str,
) -> Result<(DomModalView, OverlayControls), DomError> {
    let body = document.body().ok_or(DomError::Missing("body"))?;

    let root: HtmlElement = create(document, "div", overlay::ROOT)?;
    root.set_id(&format!("{}-modal", name));
    let close = button(document, overlay::CLOSE, overlay::CLOSE_GLYPH, "Close")?;
    root.append_child(&close)?;

    let content: Element = create(document, "div", overlay::CONTENT)?;
    let image: HtmlImageElement = create(document, "img", overlay::IMAGE)?;
    content.append_child(&image)?;

    let (mut video, mut title, mut counter, mut prev, mut next) = (None, None, None, None, None);
    if variant.has_navigation() {
        let prev_button = button(document, overlay::PREV, overlay::PREV_GLYPH, "Previous")?;
        let next_button = button(document, overlay::NEXT, overlay::NEXT_GLYPH, "Next")?;
        root.append_child(&prev_button)?;
        root.append_child(&next_button)?;

        let video_slot: HtmlVideoElement = create(document, "video", overlay::VIDEO)?;
        video_slot.set_controls(true);
        video_slot.set_attribute("playsinline", "")?;
        set_visible(&video_slot, false);
        content.append_child(&video_slot)?;

        let title_el: Element = create(document, "div", overlay::TITLE)?;
        let counter_el: Element = create(document, "div", overlay::COUNTER)?;
        content.append_child(&title_el)?;
        content.append_child(&counter_el)?;

        video = Some(video_slot);
        title = Some(title_el);
        counter = Some(counter_el);
        prev = Some(prev_button);
        next = Some(next_button);
    }

    root.append_child(&content)?;
    body.append_child(&root)?;

    let view = DomModalView {
        overlay: root,
        image,
        video,
        title,
        counter,
        open_class: open_class.to_string(),
    };
    Ok((view, OverlayControls { close, prev, next }))
}

/// Close, backdrop and prev/next listeners shared by both variants.
fn wire_controls(viewer: &SharedViewer, controls: OverlayControls) -> Result<(), DomError> {
    {
        let viewer = viewer.clone();
        listen(&controls.close, "click", move |_| viewer.borrow_mut().close())?;
    }
    {
        let backdrop: JsValue = viewer.borrow().view().overlay.clone().into();
        let overlay = viewer.borrow().view().overlay.clone();
        let viewer = viewer.clone();
        listen(&overlay, "click", move |event: Event| {
            // Only clicks on the backdrop itself, not on bubbled content clicks.
            if event.target().map(JsValue::from).as_ref() == Some(&backdrop) {
                viewer.borrow_mut().close();
            }
        })?;
    }
    if let Some(prev) = controls.prev {
        let viewer = viewer.clone();
        listen(&prev, "click", move |_| viewer.borrow_mut().prev())?;
    }
    if let Some(next) = controls.next {
        let viewer = viewer.clone();
        listen(&next, "click", move |_| viewer.borrow_mut().next())?;
    }
    Ok(())
}

fn media_src(element: &Element) -> Option<String> {
    attribute(element, "src").or_else(|| {
        element
            .query_selector("source")
            .ok()
            .flatten()
            .and_then(|source| attribute(&source, "src"))
    })
}

fn read_clickable(clickable: &Element, caption_selector: &str) -> Result<ClickableMedia, DomError> {
    let video_src = clickable.query_selector("video")?.and_then(|v| media_src(&v));
    let image_src = if clickable.tag_name().eq_ignore_ascii_case("img") {
        attribute(clickable, "src")
    } else {
        clickable.query_selector("img")?.and_then(|i| attribute(&i, "src"))
    };
    let caption = clickable
        .query_selector(caption_selector)?
        .and_then(|c| c.text_content());
    Ok(ClickableMedia {
        video_src,
        image_src,
        caption,
    })
}

/// Bind a modal viewer to the group container `container_id`.
///
/// Returns `Ok(false)` when the container or its clickable items are absent.
pub fn mount_group(
    document: &Document,
    container_id: &str,
    config: &ModalConfig,
    dispatcher: &mut KeyDispatcher,
) -> Result<bool, DomError> {
    let Some(container) = document.get_element_by_id(container_id) else {
        return Ok(false);
    };

    let mut items = Vec::new();
    let mut clickables = Vec::new();
    for element in query_all_in(&container, &config.clickable_selector)? {
        let media = read_clickable(&element, &config.caption_selector)?;
        if let Some(item) = media.into_item(items.len()) {
            clickables.push((element, items.len()));
            items.push(item);
        } else {
            log::warn!("Clickable in '{}' has no image or video", container_id);
        }
    }
    if items.is_empty() {
        return Ok(false);
    }

    let (view, controls) =
        build_overlay(document, container_id, ModalVariant::Gallery, &config.open_class)?;
    let Some(viewer) = ModalViewer::new(container_id, ModalVariant::Gallery, items, view) else {
        return Ok(false);
    };
    let viewer = Rc::new(RefCell::new(viewer));

    for (element, index) in clickables {
        let viewer = viewer.clone();
        listen(&element, "click", move |event: Event| {
            event.prevent_default();
            viewer.borrow_mut().open_at(index);
        })?;
    }
    wire_controls(&viewer, controls)?;

    log::info!(
        "Modal group '{}' ready with {} items",
        container_id,
        viewer.borrow().len()
    );
    dispatcher.register(viewer);
    Ok(true)
}

/// Bind a single-image viewer to the figure `figure_id`.
///
/// Returns `Ok(false)` when the figure or its image is absent.
pub fn mount_single(
    document: &Document,
    figure_id: &str,
    config: &ModalConfig,
    dispatcher: &mut KeyDispatcher,
) -> Result<bool, DomError> {
    let Some(figure) = document.get_element_by_id(figure_id) else {
        return Ok(false);
    };
    let Some(image) = figure
        .query_selector("img")?
        .and_then(|e| e.dyn_into::<HtmlImageElement>().ok())
    else {
        return Ok(false);
    };
    let Some(src) = attribute(&image, "src") else {
        return Ok(false);
    };

    let title = attribute(&image, "alt").unwrap_or_default();
    let item = MediaItem::new(MediaKind::Image, src, 0).with_title(title);

    let (view, controls) =
        build_overlay(document, figure_id, ModalVariant::Single, &config.open_class)?;
    let viewer = Rc::new(RefCell::new(ModalViewer::single(figure_id, item, view)));

    {
        let viewer = viewer.clone();
        listen(&image, "click", move |_| viewer.borrow_mut().open_at(0))?;
    }
    wire_controls(&viewer, controls)?;

    log::info!("Figure viewer '{}' ready", figure_id);
    dispatcher.register(viewer);
    Ok(true)
}
