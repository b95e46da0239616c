// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: msgdigester
// Module: legacy algorithm warnings
// Author: msgdigester maintainers

//! Warning banners for digest algorithms with known practical collisions.

use colored::Colorize;

const NIST_REFERENCE: &str =
	"https://doi.org/10.6028/NIST.SP.800-131Ar2";
const BSI_REFERENCE: &str =
    "https://www.bsi.bund.de/SharedDocs/Downloads/EN/BSI/Publications/TechGuidelines/TG02102/BSI-TR-02102-1.pdf";

const REFERENCES: &[&str] = &[NIST_REFERENCE, BSI_REFERENCE];

#[derive(Debug, Clone)]
pub struct WeakAlgorithmMetadata {
	/// Provider identifier (e.g. "SHA-1").
	pub identifier: &'static str,
	/// Compact spellings that name the same algorithm.
	pub aliases: &'static [&'static str],
	pub replacement_hint: &'static str,
}

impl WeakAlgorithmMetadata {
	fn matches(&self, name: &str) -> bool {
		self.identifier.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

#[derive(Debug, Clone)]
pub struct WarningMessage {
	pub severity_icon: &'static str,
	pub headline: String,
	pub body: String,
	pub references: &'static [&'static str],
}

impl WarningMessage {
	pub fn banner(&self) -> String {
		format!(
			"{} {} {}",
			self.severity_icon, self.headline, self.body
		)
	}
}

const WEAK_ALGORITHMS: &[WeakAlgorithmMetadata] = &[
	WeakAlgorithmMetadata {
		identifier: "MD2",
		aliases: &[],
		replacement_hint: "Use SHA-256 or BLAKE3",
	},
	WeakAlgorithmMetadata {
		identifier: "MD4",
		aliases: &[],
		replacement_hint: "Use SHA-256 or BLAKE3",
	},
	WeakAlgorithmMetadata {
		identifier: "MD5",
		aliases: &[],
		replacement_hint: "Use SHA-256 or BLAKE3 for new digests",
	},
	WeakAlgorithmMetadata {
		identifier: "SHA-1",
		aliases: &["SHA1"],
		replacement_hint: "Use SHA-256 or SHA-512",
	},
	WeakAlgorithmMetadata {
		identifier: "SHA-224",
		aliases: &["SHA224"],
		replacement_hint: "Use SHA-256 or SHA-512",
	},
];

pub fn metadata_for(
	algorithm: &str,
) -> Option<&'static WeakAlgorithmMetadata> {
	WEAK_ALGORITHMS.iter().find(|entry| entry.matches(algorithm))
}

pub fn warning_for(algorithm: &str) -> Option<WarningMessage> {
	let metadata = metadata_for(algorithm)?;
	let headline = format!(
		"WARNING: {} is a weak algorithm (collisions known)",
		metadata.identifier
	);
	let body = format!(
		"See NIST SP 800-131A rev.2 and BSI TR-02102-1 recommendations. {}.",
		metadata.replacement_hint
	);
	Some(WarningMessage {
		severity_icon: "⚠",
		headline,
		body,
		references: REFERENCES,
	})
}

pub fn all_metadata() -> &'static [WeakAlgorithmMetadata] {
	WEAK_ALGORITHMS
}

/// Writes the banner and its references line to stderr.
pub fn emit_warning_banner(message: &WarningMessage) {
	let banner = message.banner();
	let references = message.references.join(" | ");
	eprintln!("{}", banner.yellow().bold());
	eprintln!("{}", format!("References: {}", references).yellow());
}
