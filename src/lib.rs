// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: msgdigester
// File: lib.rs
// Author: msgdigester maintainers

//! Message digests through a pluggable hash provider.
//!
//! ```
//! use msgdigester::mdg::digester::MessageDigester;
//!
//! let digester = MessageDigester::with_default_provider()?;
//! let hex = digester.digest("SHA-256", "abc")?;
//! assert_eq!(
//! 	hex,
//! 	"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # Ok::<(), msgdigester::mdg::error::DigestError>(())
//! ```

pub mod mdg {
	pub mod app;
	pub mod commands;
	pub mod digester;
	pub mod error;
	pub mod output;
	pub mod provider;
	pub mod rustcrypto;
	pub mod weak;
}

pub use mdg::digester::MessageDigester;
pub use mdg::error::{DigestError, DigestErrorKind};
pub use mdg::provider::{AlgorithmInfo, DigestProvider, ProviderRegistry};

#[cfg(test)]
mod tests {
	use super::*;

	fn digester() -> MessageDigester {
		MessageDigester::with_default_provider()
			.expect("built-in provider initializes")
	}

	#[test]
	fn test_digest_md5() {
		assert_eq!(
			digester().digest("MD5", "").unwrap(),
			"d41d8cd98f00b204e9800998ecf8427e"
		);
	}

	#[test]
	fn test_digest_sha1() {
		assert_eq!(
			digester().digest("SHA-1", "").unwrap(),
			"da39a3ee5e6b4b0d3255bfef95601890afd80709"
		);
	}

	#[test]
	fn test_digest_md4() {
		assert_eq!(
			digester().digest("md4", "").unwrap(),
			"31d6cfe0d16ae931b73c59d7e0c089c0"
		);
	}

	#[test]
	fn test_digest_sha512_abc() {
		assert_eq!(
			digester().digest("SHA512", "abc").unwrap(),
			"ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
		);
	}

	#[test]
	fn test_digest_sha3_256_abc() {
		assert_eq!(
			digester().digest("SHA3-256", "abc").unwrap(),
			"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
		);
	}

	#[test]
	fn test_digest_blake3_empty() {
		assert_eq!(
			digester().digest("BLAKE3", "").unwrap(),
			"af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
		);
	}

	#[test]
	fn test_digest_ripemd160_abc() {
		assert_eq!(
			digester().digest("RIPEMD160", "abc").unwrap(),
			"8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"
		);
	}
}
