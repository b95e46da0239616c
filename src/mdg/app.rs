// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: msgdigester
// File: app.rs
// Author: msgdigester maintainers

use crate::mdg::commands;
use crate::mdg::digester::MessageDigester;
use crate::mdg::output::OutputOptions;
use crate::mdg::provider::ProviderRegistry;
use crate::mdg::rustcrypto::PROVIDER_NAME;
use clap::{Arg, ArgAction, ArgMatches};
use clap_complete::{generate, Generator, Shell};
use std::error::Error;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

const BIN_NAME: &str = "mdg";

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Primary command families:
  mdg digest string -a <algorithm> <INPUT>   Hash a string (e.g. mdg digest string -a SHA-256 'text')
  mdg list                                   Show the algorithms the provider supports
  mdg demo                                   Digest a sample message with every algorithm
{usage-heading} {usage}

{all-args}{after-help}
";

/// Settings shared by every digest command.
#[derive(Clone, Debug)]
pub struct DigestConfig {
	pub provider: String,
	pub output: OutputOptions,
	pub hash_only: bool,
}

impl Default for DigestConfig {
	fn default() -> Self {
		DigestConfig {
			provider: PROVIDER_NAME.to_string(),
			output: OutputOptions::Hex,
			hash_only: false,
		}
	}
}

impl DigestConfig {
	/// Overlays whatever `matches` carries on top of the defaults.
	pub fn from_matches(matches: &ArgMatches) -> Self {
		let mut config = DigestConfig::default();
		if let Ok(Some(provider)) =
			matches.try_get_one::<String>("provider")
		{
			config.provider = provider.clone();
		}
		if let Ok(Some(output)) =
			matches.try_get_one::<OutputOptions>("output")
		{
			config.output = *output;
		}
		if let Ok(Some(hash_only)) =
			matches.try_get_one::<bool>("hash-only")
		{
			config.hash_only = *hash_only;
		}
		config
	}
}

fn algorithm_arg() -> Arg {
	Arg::new("algorithm")
		.short('a')
		.long("algorithm")
		.help("Digest algorithm identifier (e.g., SHA-256)")
		.required(true)
}

fn output_arg() -> Arg {
	Arg::new("output")
		.short('o')
		.long("output")
		.value_parser(clap::value_parser!(OutputOptions))
		.help("Output format (hex, base64, hex-base64)")
		.default_value("hex")
}

fn hash_only_arg(help: &'static str) -> Arg {
	Arg::new("hash-only")
		.long("hash-only")
		.help(help)
		.action(ArgAction::SetTrue)
}

pub fn build_cli() -> clap::Command {
	clap::Command::new(BIN_NAME)
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name(BIN_NAME)
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("Compute message digests through a pluggable hash provider")
		.subcommand_required(true)
		.arg_required_else_help(true)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.help("Increase log verbosity (repeat for more)")
				.action(ArgAction::Count)
				.global(true),
		)
		.arg(
			Arg::new("provider")
				.long("provider")
				.help("Name of the registered digest provider to use")
				.default_value(PROVIDER_NAME)
				.global(true),
		)
		.subcommand(
			clap::command!("digest")
				.about("Digest text with a single algorithm")
				.subcommand_required(true)
				.arg_required_else_help(true)
				.subcommand(
					clap::command!("string")
						.about("Hash a provided string")
						.arg(algorithm_arg())
						.arg(
							Arg::new("input")
								.help("String to hash")
								.required(true),
						)
						.arg(output_arg())
						.arg(hash_only_arg(
							"Emit only digests without original input",
						)),
				)
				.subcommand(
					clap::command!("stdio")
						.about("Hash newline-delimited stdin input")
						.arg(algorithm_arg())
						.arg(output_arg())
						.arg(hash_only_arg(
							"Emit only digests without echoing input lines",
						)),
				),
		)
		.subcommand(
			clap::command!("list")
				.about("List the digest algorithms the provider supports")
				.arg(
					Arg::new("details")
						.long("details")
						.help("Also show digest size and legacy status")
						.action(ArgAction::SetTrue),
				),
		)
		.subcommand(
			clap::command!("demo")
				.about("Digest a sample message with every available algorithm")
				.arg(
					Arg::new("message")
						.short('m')
						.long("message")
						.help("Message to digest")
						.default_value(commands::DEMO_MESSAGE),
				),
		)
		.subcommand(
			clap::command!("completions")
				.about("Generate shell completions")
				.arg(
					Arg::new("shell")
						.value_parser(clap::value_parser!(Shell))
						.required(true),
				),
		)
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v` when it
/// parses.
pub fn init_tracing(verbosity: u8) {
	let default_level = match verbosity {
		0 => LevelFilter::WARN,
		1 => LevelFilter::INFO,
		2 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	};
	let targets = std::env::var("RUST_LOG")
		.ok()
		.and_then(|var| var.parse::<Targets>().ok())
		.unwrap_or_else(|| Targets::new().with_default(default_level));
	let _ = tracing_subscriber::fmt()
		.compact()
		.with_writer(std::io::stderr)
		.with_max_level(LevelFilter::TRACE)
		.finish()
		.with(targets)
		.try_init();
}

fn handle_digest_command(
	digester: &MessageDigester,
	matches: &ArgMatches,
) -> Result<(), Box<dyn Error>> {
	match matches.subcommand() {
		Some(("string", args)) => {
			let config = DigestConfig::from_matches(args);
			let algorithm = args
				.get_one::<String>("algorithm")
				.expect("algorithm must be provided");
			let input = args
				.get_one::<String>("input")
				.expect("input must be provided");
			commands::digest_string(
				digester,
				algorithm,
				input,
				config.output,
				config.hash_only,
			)
		}
		Some(("stdio", args)) => {
			let config = DigestConfig::from_matches(args);
			let algorithm = args
				.get_one::<String>("algorithm")
				.expect("algorithm must be provided");
			commands::digest_stdio(
				digester,
				algorithm,
				config.output,
				config.hash_only,
			)
		}
		_ => Ok(()),
	}
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let mut capp = build_cli();
	let m = capp.clone().get_matches();
	init_tracing(m.get_count("verbose"));

	if let Some(("completions", sub_m)) = m.subcommand() {
		let shell = sub_m
			.get_one::<Shell>("shell")
			.copied()
			.expect("shell must be provided");
		print_completions(shell, &mut capp);
		return Ok(());
	}

	let config = DigestConfig::from_matches(&m);
	let registry = ProviderRegistry::with_defaults()?;
	let digester =
		MessageDigester::from_registry(&registry, &config.provider)?;

	match m.subcommand() {
		Some(("digest", matches)) => {
			handle_digest_command(&digester, matches)?;
		}
		Some(("list", sub_m)) => {
			commands::list_algorithms(
				&digester,
				sub_m.get_flag("details"),
			)?;
		}
		Some(("demo", sub_m)) => {
			let message = sub_m
				.get_one::<String>("message")
				.map(String::as_str)
				.unwrap_or(commands::DEMO_MESSAGE);
			commands::demo(&digester, message)?;
		}
		_ => {}
	}
	Ok(())
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
	generate(
		gen,
		cmd,
		cmd.get_name().to_string(),
		&mut std::io::stdout(),
	);
}
