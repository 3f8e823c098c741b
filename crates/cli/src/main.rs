// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dnd - Do Not Disturb bridge CLI

mod commands;
mod env;
mod exit_error;
mod host;
mod logging;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{access, call, filter, present, session, status};
use dnd_adapters::{FileFlagStore, TracedPolicy};
use dnd_bridge::{PolicyChannel, PresentationDecider};
use dnd_core::session_flag_key;

use crate::host::HostPolicy;

#[derive(Parser)]
#[command(
    name = "dnd",
    version,
    about = "Do Not Disturb bridge - notification policy and focus sessions"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a raw method-channel call and print the reply envelope
    Call(call::CallArgs),
    /// Notification-policy access
    Access(access::AccessArgs),
    /// Interruption filter
    Filter(filter::FilterArgs),
    /// Focus session flag
    Session(session::SessionArgs),
    /// Decide how an incoming notification is presented
    Present(present::PresentArgs),
    /// Show policy and session state
    Status,
}

fn cli_command() -> clap::Command {
    Cli::command()
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(exit_error::EXIT_FAILURE, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn policy_channel() -> Result<(&'static str, PolicyChannel<TracedPolicy<HostPolicy>>)> {
    let host = HostPolicy::select(env::adapter()?).await;
    let name = host.name();
    tracing::debug!(adapter = name, "selected policy adapter");
    Ok((name, PolicyChannel::new(host.traced())))
}

fn flag_store() -> Result<FileFlagStore> {
    Ok(FileFlagStore::new(env::session_file()?))
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided: print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    let _log_guard = logging::setup_logging()?;
    let flag_key = session_flag_key(&env::app_id());

    // Flag-only commands never probe the desktop for a policy adapter.
    match command {
        Commands::Call(args) => {
            let (_, channel) = policy_channel().await?;
            call::handle(args, &channel, format).await?
        }
        Commands::Access(args) => {
            let (_, channel) = policy_channel().await?;
            access::handle(args.command, &channel, format).await?
        }
        Commands::Filter(args) => {
            let (_, channel) = policy_channel().await?;
            filter::handle(args.command, &channel, format).await?
        }
        Commands::Session(args) => {
            session::handle(args.command, &flag_store()?, &flag_key, format)?
        }
        Commands::Present(args) => {
            let decider = PresentationDecider::with_key(flag_store()?, flag_key);
            present::handle(args, &decider, format)?
        }
        Commands::Status => {
            let (name, channel) = policy_channel().await?;
            let decider = PresentationDecider::with_key(flag_store()?, flag_key);
            status::handle(name, &channel, &decider, format).await?
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
