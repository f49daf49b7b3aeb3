use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while mounting a hero layer. Each one is fatal to the layer that
/// hit it and nothing else.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HeroError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("layer element is not mounted or has no parent container")]
    MissingContainer,
    #[error("2d drawing context unavailable")]
    MissingContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for HeroError {
    fn from(value: JsValue) -> Self {
        HeroError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
