//! Preview frames for video thumbnails.

use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::{PreviewSurface, PreviewTimings, VideoPreview};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlVideoElement};

use super::{listen, set_timeout, set_visible};
use crate::error::DomError;

/// A thumbnail element hosting an injected preview video.
pub struct DomPreviewSurface {
    document: Document,
    thumbnail: Element,
    fallback: Option<HtmlElement>,
    video: Option<HtmlVideoElement>,
    preview_class: String,
}

impl DomPreviewSurface {
    pub fn new(
        document: Document,
        thumbnail: Element,
        fallback_selector: &str,
        preview_class: &str,
    ) -> Self {
        let fallback = thumbnail
            .query_selector(fallback_selector)
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        Self {
            document,
            thumbnail,
            fallback,
            video: None,
            preview_class: preview_class.to_string(),
        }
    }

    fn create_video(&self, src: &str) -> Result<HtmlVideoElement, DomError> {
        let video: HtmlVideoElement = super::create(&self.document, "video", &self.preview_class)?;
        video.set_muted(true);
        video.set_autoplay(false);
        video.set_preload("metadata");
        video.set_attribute("muted", "")?;
        video.set_attribute("playsinline", "")?;
        video.set_src(src);

        let before = match &self.fallback {
            Some(fallback) => Some(fallback.clone().unchecked_into()),
            None => self.thumbnail.first_child(),
        };
        self.thumbnail.insert_before(&video, before.as_ref())?;
        Ok(video)
    }
}

impl PreviewSurface for DomPreviewSurface {
    fn inject(&mut self, src: &str) {
        match self.create_video(src) {
            Ok(video) => self.video = Some(video),
            Err(e) => log::debug!("Could not inject preview for {}: {}", src, e),
        }
    }

    fn schedule_seek(&mut self, secs: f64) {
        let Some(video) = self.video.clone() else {
            return;
        };
        if let Err(e) = super::next_frame(move || video.set_current_time(secs)) {
            log::trace!("Preview seek not scheduled: {}", e);
        }
    }

    fn pause(&mut self) {
        if let Some(video) = &self.video {
            video.pause().ok();
        }
    }

    fn hide_fallback(&mut self) {
        if let Some(fallback) = &self.fallback {
            set_visible(fallback, false);
        }
    }

    fn remove(&mut self) {
        if let Some(video) = self.video.take() {
            video.remove();
        }
    }

    fn ready_state(&self) -> u16 {
        self.video.as_ref().map_or(0, |v| v.ready_state())
    }
}

/// Inject and drive a preview for one video thumbnail.
pub fn start(
    surface: DomPreviewSurface,
    src: &str,
    timings: PreviewTimings,
) -> Result<(), DomError> {
    let preview = Rc::new(RefCell::new(VideoPreview::new(surface, timings)));
    if !preview.borrow_mut().start(src) {
        return Ok(());
    }

    let Some(video) = preview.borrow().surface().video.clone() else {
        return Ok(());
    };

    {
        let preview = preview.clone();
        let element = video.clone();
        listen(&video, "loadedmetadata", move |_| {
            preview.borrow_mut().on_loaded_metadata(element.duration());
        })?;
    }
    {
        let preview = preview.clone();
        listen(&video, "seeked", move |_| preview.borrow_mut().on_seeked())?;
    }
    {
        let preview = preview.clone();
        listen(&video, "error", move |_| preview.borrow_mut().on_error())?;
    }

    set_timeout(timings.fallback_timeout_ms, move || {
        preview.borrow_mut().on_fallback_timeout();
    })
}
