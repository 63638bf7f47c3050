//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod candidate;
mod job;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{js_error_message, ApiError, ApiResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invoke `command` with serialized `args` and decode the reply.
async fn call<A, R>(command: &'static str, args: &A) -> ApiResult<R>
where
    A: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| ApiError::Encode {
        command,
        message: e.to_string(),
    })?;
    let result = invoke(command, js_args).await.map_err(|e| ApiError::Invoke {
        command,
        message: js_error_message(&e),
    })?;
    serde_wasm_bindgen::from_value(result).map_err(|e| ApiError::Decode {
        command,
        message: e.to_string(),
    })
}

// Re-export all public items
pub use candidate::*;
pub use job::*;
