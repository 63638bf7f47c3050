//! Frontend error types.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors from calls into the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Backend rejected '{command}': {message}")]
    Invoke { command: &'static str, message: String },

    #[error("Failed to encode arguments for '{command}': {message}")]
    Encode { command: &'static str, message: String },

    #[error("Failed to decode response from '{command}': {message}")]
    Decode { command: &'static str, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from reading the host page configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid app config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Best-effort text for a rejected promise value.
///
/// Tauri rejects with a plain string for command errors and with an
/// `Error` object for IPC failures.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
