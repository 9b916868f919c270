//! Errors raised while wiring page components to the DOM.

/// Failure while binding a component to the page.
///
/// A missing optional element is not an error; components that cannot find
/// their markup simply stay inactive. These cover the cases where the markup
/// is present but the browser rejects an operation.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// A global the page cannot run without (window, document, body)
    #[error("Missing {0}")]
    Missing(&'static str),

    /// Element exists but is not of the expected type
    #[error("Element '{0}' has an unexpected type")]
    WrongType(String),

    /// A browser API threw
    #[error("DOM call failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
