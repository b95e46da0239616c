// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: msgdigester
// File: commands.rs
// Author: msgdigester maintainers
//
// Handlers behind the `mdg` subcommands.

use crate::mdg::digester::MessageDigester;
use crate::mdg::error::DigestError;
use crate::mdg::output::{assemble_output, OutputOptions};
use crate::mdg::provider::AlgorithmInfo;
use crate::mdg::weak::{emit_warning_banner, warning_for};
use std::error::Error;
use std::io::{self, BufRead, Write};

/// Sample message the demonstration digests.
pub const DEMO_MESSAGE: &str = "Hello SrcCodes !";

/// Print every algorithm the provider advertises, one per line.
pub fn list_algorithms(
	digester: &MessageDigester,
	details: bool,
) -> Result<(), Box<dyn Error>> {
	let stdout = io::stdout();
	let mut out = stdout.lock();
	for name in digester.list_algorithms() {
		match digester.algorithm_info(&name).filter(|_| details) {
			Some(info) => writeln!(
				out,
				"{}\t{} bytes{}",
				info.identifier,
				info.output_size,
				if info.legacy { "\tlegacy" } else { "" }
			)?,
			None => writeln!(out, "{}", name)?,
		}
	}
	Ok(())
}

/// Hash a provided string using the selected digest algorithm.
pub fn digest_string(
	digester: &MessageDigester,
	algorithm: &str,
	input: &str,
	output: OutputOptions,
	hash_only: bool,
) -> Result<(), Box<dyn Error>> {
	let info = resolve(digester, algorithm)?;
	warn_if_legacy(&info);
	let tokens =
		digester.digest_encoded(info.identifier, input, output)?;
	println!("{}", assemble_output(hash_only, tokens, Some(input)));
	Ok(())
}

/// Hash newline-delimited stdin using the selected digest algorithm.
pub fn digest_stdio(
	digester: &MessageDigester,
	algorithm: &str,
	output: OutputOptions,
	hash_only: bool,
) -> Result<(), Box<dyn Error>> {
	let info = resolve(digester, algorithm)?;
	warn_if_legacy(&info);
	let stdin = io::stdin();
	for line in stdin.lock().lines() {
		let line = line?;
		let tokens =
			digester.digest_encoded(info.identifier, &line, output)?;
		println!("{}", assemble_output(hash_only, tokens, Some(&line)));
	}
	Ok(())
}

/// Digest `message` with every available algorithm, printing
/// `NAME-->hex` lines in listing order.
pub fn demo(
	digester: &MessageDigester,
	message: &str,
) -> Result<(), Box<dyn Error>> {
	let stdout = io::stdout();
	let mut out = stdout.lock();
	let header = format!(
		"Calculating Message Digest of '{}' using all Algorithms available in {}",
		message,
		digester.provider_name()
	);
	writeln!(out, "{}", header)?;
	writeln!(out, "{}\n\n", "-".repeat(header.chars().count()))?;
	for (name, hex) in digester.digest_all(message)? {
		writeln!(out, "{}", demo_line(&name, &hex))?;
	}
	Ok(())
}

pub fn demo_line(name: &str, hex: &str) -> String {
	format!("{}-->{}", name, hex)
}

fn resolve(
	digester: &MessageDigester,
	algorithm: &str,
) -> Result<AlgorithmInfo, DigestError> {
	digester.algorithm_info(algorithm).ok_or_else(|| {
		DigestError::unknown_algorithm(
			algorithm,
			digester.provider_name(),
		)
	})
}

fn warn_if_legacy(info: &AlgorithmInfo) {
	if !info.legacy {
		return;
	}
	if let Some(message) = warning_for(info.identifier) {
		emit_warning_banner(&message);
	}
}
