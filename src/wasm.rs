use std::rc::Rc;

use showcase_core::config::CONFIG_ELEMENT_ID;
use showcase_core::{KeyDispatcher, SiteConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, KeyboardEvent};

use crate::dom;
use crate::error::DomError;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            web_sys::console::error_1(&format!("Showcase scripts not started: {}", e).into());
            return;
        }
    };

    let embedded = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let parsed = SiteConfig::from_embedded(embedded.as_deref());
    let config = parsed.as_ref().cloned().unwrap_or_default();

    if let Err(e) = console_log::init_with_level(config.log_level.to_level()) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
    if let Err(e) = parsed {
        log::warn!("Ignoring embedded page config: {}", e);
    }

    mount_page(&document, &config);
}

/// Bind every component present on the page.
///
/// Components are independent: one failing to bind does not stop the rest.
fn mount_page(document: &Document, config: &SiteConfig) {
    let mut dispatcher = KeyDispatcher::new();

    report("navigation menu", dom::nav::mount_menu(document, &config.nav));
    report("theme toggle", dom::theme::mount(document, &config.theme));
    report("anchor scrolling", dom::nav::mount_anchors(document, &config.nav));
    report("reveal animation", dom::nav::mount_reveal(document, &config.reveal));
    report(
        "gallery carousel",
        dom::carousel::mount(document, &config.gallery, config.preview, &mut dispatcher),
    );
    for id in &config.modals.groups {
        report(
            &format!("modal group '{}'", id),
            dom::modal::mount_group(document, id, &config.modals, &mut dispatcher),
        );
    }
    for id in &config.modals.single_figures {
        report(
            &format!("figure viewer '{}'", id),
            dom::modal::mount_single(document, id, &config.modals, &mut dispatcher),
        );
    }

    if dispatcher.is_empty() {
        return;
    }
    let dispatcher = Rc::new(dispatcher);
    let result = dom::listen(document, "keydown", move |event: Event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            dispatcher.dispatch_name(&event.key());
        }
    });
    report("keyboard navigation", result.map(|()| true));
}

fn report(component: &str, result: Result<bool, DomError>) {
    match result {
        Ok(true) => log::debug!("{} active", component),
        Ok(false) => log::debug!("{} not present on this page", component),
        Err(e) => log::error!("Failed to set up {}: {}", component, e),
    }
}
