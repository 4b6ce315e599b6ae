//! Startup errors
//!
//! The simulation itself cannot fail; everything here is a precondition the host
//! has to satisfy before the first frame runs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no global window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id '{0}'")]
    CanvasNotFound(String),
    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),
    #[error("canvas has no 2d rendering context")]
    NoContext2d,
    #[error("playfield {width}x{height} is too small for paddles and ball")]
    FieldTooSmall { width: f32, height: f32 },
    #[error("host call failed: {0}")]
    Js(String),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Js(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<Error> for wasm_bindgen::JsValue {
    fn from(err: Error) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
