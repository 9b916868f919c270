//! `web-sys` bindings for the page components.
//!
//! Each submodule implements the view traits from `showcase_core` on top of
//! real elements and wires the browser events to the component. All
//! listeners live as long as the page, so their closures are leaked.

pub mod carousel;
pub mod modal;
pub mod nav;
pub mod preview;
pub mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::Missing("window"))
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::Missing("document"))
}

/// Look up an element by id and cast it.
///
/// `Ok(None)` if it does not exist, `Err` if it has the wrong type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<Option<T>, DomError> {
    match document.get_element_by_id(id) {
        Some(element) => element
            .dyn_into::<T>()
            .map(Some)
            .map_err(|_| DomError::WrongType(id.to_string())),
        None => Ok(None),
    }
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(document.query_selector_all(selector)?))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(root.query_selector_all(selector)?))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Create an element with a class name.
pub fn create<T: JsCast>(document: &Document, tag: &str, class: &str) -> Result<T, DomError> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    element
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(tag.to_string()))
}

/// Attach a page-lifetime event listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget(); // Leak the closure to keep it alive
    Ok(())
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout<F>(ms: u32, f: F) -> Result<(), DomError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    let ms = i32::try_from(ms).unwrap_or(i32::MAX);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)?;
    Ok(())
}

/// Run `f` once on the next animation frame.
pub fn next_frame<F>(f: F) -> Result<(), DomError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(move |_timestamp: f64| f());
    window()?.request_animation_frame(callback.unchecked_ref())?;
    Ok(())
}

pub fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "" } else { "none" };
    if let Err(e) = element.style().set_property("display", display) {
        log::warn!("Failed to set display: {:?}", e);
    }
}

pub fn set_class(element: &Element, class: &str, enabled: bool) {
    let list = element.class_list();
    let result = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("Failed to update class '{}': {:?}", class, e);
    }
}

/// Non-empty, trimmed attribute value.
pub fn attribute(element: &Element, name: &str) -> Option<String> {
    element
        .get_attribute(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
