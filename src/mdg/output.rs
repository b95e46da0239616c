// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: msgdigester
// Module: output
// Purpose: Rendering of raw digests for the CLI and the facade.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::ValueEnum;
use std::fmt;
use strum::EnumIter;

#[derive(
	Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum, EnumIter,
)]
#[value(rename_all = "kebab-case")]
pub enum OutputOptions {
	#[default]
	Hex,
	Base64,
	#[value(alias = "hex+base64")]
	HexBase64,
}

impl fmt::Display for OutputOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Hex => "hex",
			Self::Base64 => "base64",
			Self::HexBase64 => "hex-base64",
		};
		write!(f, "{}", label)
	}
}

impl OutputOptions {
	/// Encoded tokens for `digest`, in display order. Hex is lowercase,
	/// base64 uses the padded standard alphabet.
	pub fn render(self, digest: &[u8]) -> Vec<String> {
		match self {
			Self::Hex => vec![hex::encode(digest)],
			Self::Base64 => vec![STANDARD.encode(digest)],
			Self::HexBase64 => {
				vec![hex::encode(digest), STANDARD.encode(digest)]
			}
		}
	}
}

/// Joins the encoded tokens and, unless `hash_only`, appends the input they
/// were computed from.
pub fn assemble_output(
	hash_only: bool,
	tokens: Vec<String>,
	input: Option<&str>,
) -> String {
	let mut line = tokens.join(" ");
	if !hash_only {
		if let Some(input) = input {
			line.push(' ');
			line.push_str(input);
		}
	}
	line
}
