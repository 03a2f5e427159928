// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! pma command-line binary.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pma_server_config::{LoggingConfig, ServerConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod git_revision;
mod locale;
mod version;

/// pma - render admin sidebar fragments from the command line.
#[derive(Parser, Debug)]
#[command(name = "pma", about = "Render pma admin sidebar fragments", version)]
struct Cli {
	/// Server config file; defaults to /etc/pma/server.toml
	#[arg(long, global = true, value_name = "PATH")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the "Git revision" sidebar item as HTML
	GitRevision(git_revision::GitRevisionArgs),
	/// Show version and build information
	Version,
}

fn main() -> anyhow::Result<ExitCode> {
	run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
	match cli.command {
		Command::Version => {
			println!("{}", version::format_version_info());
			Ok(ExitCode::SUCCESS)
		}
		Command::GitRevision(args) => {
			let config = load_config(cli.config.as_ref())?;
			init_tracing(&config.logging);

			match git_revision::render(&config, &args)? {
				Some(html) => {
					println!("{html}");
					Ok(ExitCode::SUCCESS)
				}
				None => {
					tracing::warn!("no git revision available");
					Ok(ExitCode::FAILURE)
				}
			}
		}
	}
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ServerConfig> {
	match path {
		Some(path) => pma_server_config::load_config_with_file(path)
			.with_context(|| format!("failed to load config from {}", path.display())),
		None => pma_server_config::load_config().context("failed to load config"),
	}
}

/// Logs go to stderr so stdout carries only the rendered fragment.
fn init_tracing(logging: &LoggingConfig) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.level.clone().into());
	let registry = tracing_subscriber::registry().with(filter);

	if logging.json {
		registry
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		registry.with(fmt::layer().with_writer(std::io::stderr)).init();
	}
}
