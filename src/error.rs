//! Error types

use thiserror::Error;

/// Failures while binding the controller to the host page
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window/document available")]
    NoDocument,
    #[error("required element `{0}` not found")]
    MissingElement(String),
    #[error("element `{selector}` is not a {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Failures reported by a registration gateway
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("registration service unavailable")]
    Unavailable,
}
