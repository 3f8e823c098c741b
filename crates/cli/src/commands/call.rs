// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dnd call` - Raw method-channel calls

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use dnd_adapters::PolicyPort;
use dnd_bridge::{codec, PolicyChannel};
use dnd_core::{MethodCall, MethodResponse, DEFAULT_CHANNEL};
use serde_json::{json, Value};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct CallArgs {
    /// Method name as the app layer sends it (e.g. hasPolicyAccess)
    pub method: String,

    /// Call arguments as a JSON value (e.g. '{"filter": 2}')
    #[arg(long, value_name = "JSON")]
    pub args: Option<String>,
}

pub async fn handle<P: PolicyPort>(
    args: CallArgs,
    channel: &PolicyChannel<P>,
    format: OutputFormat,
) -> Result<()> {
    let call_args = match args.args.as_deref() {
        Some(raw) => serde_json::from_str(raw)
            .with_context(|| format!("invalid --args JSON: {}", raw))?,
        None => Value::Null,
    };
    let call = MethodCall::new(args.method, call_args);

    let reply = channel.handle_message(&codec::encode_call(&call)?).await?;
    let response = codec::decode_response(&reply)?;

    format_reply(&mut std::io::stdout(), &call.method, &reply, &response, format)?;
    output::into_result(&call.method, response)?;
    Ok(())
}

/// Text output is the envelope exactly as the channel encoded it.
pub(crate) fn format_reply(
    out: &mut impl Write,
    method: &str,
    reply: &[u8],
    response: &MethodResponse,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if !reply.is_empty() {
                out.write_all(reply)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Json => {
            let obj = match response {
                MethodResponse::Success(result) => json!({
                    "channel": DEFAULT_CHANNEL,
                    "method": method,
                    "status": "success",
                    "result": result,
                }),
                MethodResponse::Error {
                    code,
                    message,
                    details,
                } => json!({
                    "channel": DEFAULT_CHANNEL,
                    "method": method,
                    "status": "error",
                    "code": code,
                    "message": message,
                    "details": details,
                }),
                MethodResponse::NotImplemented => json!({
                    "channel": DEFAULT_CHANNEL,
                    "method": method,
                    "status": "not_implemented",
                }),
            };
            output::write_json(out, &obj)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "call_tests.rs"]
mod tests;
