// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON method codec.
//!
//! Byte-compatible with Flutter's `JSONMethodCodec`:
//!
//! - call: `{"method": "<name>", "args": <any>}`
//! - success envelope: `[<result>]`
//! - error envelope: `["<code>", "<message>" | null, <details>]`
//! - not implemented: an empty reply (zero bytes)

use dnd_core::{MethodCall, MethodResponse};
use serde_json::{json, Value};
use thiserror::Error;

/// Codec errors
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid method call: {0}")]
    InvalidCall(String),

    #[error("invalid envelope: {0}")]
    InvalidEnvelope(String),

    #[error("Message too large: {size} bytes (max {max})")]
    MessageTooLarge { size: usize, max: usize },
}

/// Maximum encoded message size (1 MB)
pub const MAX_MESSAGE_SIZE: usize = 1024 * 1024;

fn check_size(len: usize) -> Result<(), CodecError> {
    if len > MAX_MESSAGE_SIZE {
        return Err(CodecError::MessageTooLarge {
            size: len,
            max: MAX_MESSAGE_SIZE,
        });
    }
    Ok(())
}

pub fn encode_call(call: &MethodCall) -> Result<Vec<u8>, CodecError> {
    let bytes = serde_json::to_vec(&json!({ "method": call.method, "args": call.args }))?;
    check_size(bytes.len())?;
    Ok(bytes)
}

pub fn decode_call(bytes: &[u8]) -> Result<MethodCall, CodecError> {
    check_size(bytes.len())?;
    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Object(mut map) = value else {
        return Err(CodecError::InvalidCall("expected a JSON object".to_string()));
    };
    let method = match map.remove("method") {
        Some(Value::String(name)) => name,
        _ => return Err(CodecError::InvalidCall("missing method name".to_string())),
    };
    let args = map.remove("args").unwrap_or(Value::Null);
    Ok(MethodCall::new(method, args))
}

pub fn encode_response(response: &MethodResponse) -> Result<Vec<u8>, CodecError> {
    let envelope = match response {
        MethodResponse::Success(result) => json!([result]),
        MethodResponse::Error {
            code,
            message,
            details,
        } => json!([code, message, details]),
        MethodResponse::NotImplemented => return Ok(Vec::new()),
    };
    let bytes = serde_json::to_vec(&envelope)?;
    check_size(bytes.len())?;
    Ok(bytes)
}

/// Decode a reply envelope. An empty reply means the method is not implemented.
pub fn decode_response(bytes: &[u8]) -> Result<MethodResponse, CodecError> {
    if bytes.is_empty() {
        return Ok(MethodResponse::NotImplemented);
    }
    check_size(bytes.len())?;
    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Array(mut items) = value else {
        return Err(CodecError::InvalidEnvelope("expected a JSON array".to_string()));
    };

    match items.len() {
        1 => Ok(MethodResponse::Success(items.remove(0))),
        // A fourth element carries a platform stacktrace; it is dropped.
        3 | 4 => {
            let mut items = items.into_iter();
            let code = match items.next() {
                Some(Value::String(code)) => code,
                _ => {
                    return Err(CodecError::InvalidEnvelope(
                        "error code must be a string".to_string(),
                    ))
                }
            };
            let message = match items.next() {
                Some(Value::String(message)) => message,
                Some(Value::Null) => String::new(),
                _ => {
                    return Err(CodecError::InvalidEnvelope(
                        "error message must be a string or null".to_string(),
                    ))
                }
            };
            let details = items.next().unwrap_or(Value::Null);
            Ok(MethodResponse::Error {
                code,
                message,
                details,
            })
        }
        n => Err(CodecError::InvalidEnvelope(format!(
            "unexpected envelope length {n}"
        ))),
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
