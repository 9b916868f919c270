//! Mobile menu, in-page anchor scrolling and reveal-on-scroll.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use showcase_core::config::{NavConfig, RevealConfig};
use showcase_core::constants::FADE_IN_KEYFRAMES;
use showcase_core::nav::anchor_target;
use showcase_core::{NavMenu, NavMenuView};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::{create, listen, query_all, set_class};
use crate::error::DomError;

pub struct DomMenuView {
    menu: Element,
    open_class: String,
}

impl NavMenuView for DomMenuView {
    fn set_menu_open(&mut self, open: bool) {
        set_class(&self.menu, &self.open_class, open);
    }
}

/// Bind the hamburger toggle. Needs both the toggle and the menu.
pub fn mount_menu(document: &Document, config: &NavConfig) -> Result<bool, DomError> {
    let Some(toggle) = document.get_element_by_id(&config.toggle_id) else {
        return Ok(false);
    };
    let Some(menu) = document.query_selector(&config.menu_selector)? else {
        return Ok(false);
    };

    let open = menu.class_list().contains(&config.open_class);
    let view = DomMenuView {
        menu,
        open_class: config.open_class.clone(),
    };
    let nav = Rc::new(RefCell::new(NavMenu::with_open(view, open)));

    {
        let nav = nav.clone();
        listen(&toggle, "click", move |_| {
            nav.borrow_mut().toggle();
        })?;
    }
    for link in query_all(document, &config.link_selector)? {
        let nav = nav.clone();
        listen(&link, "click", move |_| nav.borrow_mut().close())?;
    }
    Ok(true)
}

/// Smooth-scroll every in-page link to its target.
pub fn mount_anchors(document: &Document, config: &NavConfig) -> Result<bool, DomError> {
    let anchors = query_all(document, &config.anchor_selector)?;
    if anchors.is_empty() {
        return Ok(false);
    }

    for anchor in anchors {
        let document = document.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event: Event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href).and_then(|id| document.get_element_by_id(id))
            else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(true)
}

/// Fade sections in as they scroll into view.
pub fn mount_reveal(document: &Document, config: &RevealConfig) -> Result<bool, DomError> {
    let sections = query_all(document, &config.section_selector)?;
    if sections.is_empty() {
        return Ok(false);
    }

    let head = document.head().ok_or(DomError::Missing("head"))?;
    let style: Element = create(document, "style", "")?;
    style.set_text_content(Some(FADE_IN_KEYFRAMES));
    head.append_child(&style)?;

    let animation = config.animation.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                    target.style().set_property("animation", &animation).ok();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget(); // Leak the closure to keep it alive

    for section in &sections {
        observer.observe(section);
    }
    log::debug!("Observing {} sections for reveal", sections.len());
    Ok(true)
}
