// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use dnd_core::MethodResponse;
use serde::Serialize;
use serde_json::Value;

use crate::exit_error::{ExitError, EXIT_ERROR_ENVELOPE, EXIT_NOT_IMPLEMENTED};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write a value as pretty JSON followed by a newline.
pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Unwrap a successful response, mapping the other outcomes to exit codes.
pub fn into_result(method: &str, response: MethodResponse) -> Result<Value, ExitError> {
    match response {
        MethodResponse::Success(value) => Ok(value),
        MethodResponse::Error { code, message, .. } => Err(ExitError::new(
            EXIT_ERROR_ENVELOPE,
            format!("{}: {}", code, message),
        )),
        MethodResponse::NotImplemented => Err(ExitError::new(
            EXIT_NOT_IMPLEMENTED,
            format!("method not implemented: {}", method),
        )),
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
