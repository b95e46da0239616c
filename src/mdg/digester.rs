// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: msgdigester
// File: digester.rs
// Author: msgdigester maintainers

//! The digest facade. Messages are always hashed as their UTF-8 bytes.

use std::io::Read;
use std::sync::Arc;

use super::error::Result;
use super::output::OutputOptions;
use super::provider::{AlgorithmInfo, DigestProvider, ProviderRegistry};
use super::rustcrypto::RustCryptoProvider;

const READ_BUFFER_SIZE: usize = 8 * 1024;

#[derive(Clone)]
pub struct MessageDigester {
	provider: Arc<dyn DigestProvider>,
}

impl MessageDigester {
	pub fn new(provider: Arc<dyn DigestProvider>) -> Self {
		Self { provider }
	}

	/// Resolves `name` from an explicitly populated registry.
	pub fn from_registry(
		registry: &ProviderRegistry,
		name: &str,
	) -> Result<Self> {
		Ok(Self::new(registry.get(name)?))
	}

	/// Facade over a freshly initialized RustCrypto provider.
	pub fn with_default_provider() -> Result<Self> {
		Ok(Self::new(Arc::new(RustCryptoProvider::initialize()?)))
	}

	pub fn provider_name(&self) -> &str {
		self.provider.name()
	}

	/// Lowercase hex digest of the UTF-8 bytes of `message`.
	pub fn digest(&self, algorithm: &str, message: &str) -> Result<String> {
		let digest = self.digest_bytes(algorithm, message.as_bytes())?;
		Ok(hex::encode(digest))
	}

	pub fn digest_bytes(
		&self,
		algorithm: &str,
		data: &[u8],
	) -> Result<Vec<u8>> {
		let mut hasher = self.provider.create(algorithm)?;
		tracing::debug!(
			algorithm,
			provider = self.provider.name(),
			len = data.len(),
			"computing digest"
		);
		hasher.update(data);
		Ok(hasher.finalize().into_vec())
	}

	/// Streams `reader` through the hasher until EOF.
	pub fn digest_reader<R: Read>(
		&self,
		algorithm: &str,
		mut reader: R,
	) -> Result<Vec<u8>> {
		let mut hasher = self.provider.create(algorithm)?;
		let mut buffer = vec![0; READ_BUFFER_SIZE];
		let mut total = 0usize;
		loop {
			let count = reader.read(&mut buffer)?;
			if count == 0 {
				break;
			}
			total += count;
			hasher.update(&buffer[..count]);
		}
		tracing::debug!(
			algorithm,
			provider = self.provider.name(),
			len = total,
			"computed streamed digest"
		);
		Ok(hasher.finalize().into_vec())
	}

	/// Digest of `message` rendered as the tokens `output` selects.
	pub fn digest_encoded(
		&self,
		algorithm: &str,
		message: &str,
		output: OutputOptions,
	) -> Result<Vec<String>> {
		let digest = self.digest_bytes(algorithm, message.as_bytes())?;
		Ok(output.render(&digest))
	}

	/// Every identifier the provider advertises, in its order.
	pub fn list_algorithms(&self) -> Vec<String> {
		self.provider
			.algorithms()
			.into_iter()
			.map(|info| info.identifier.to_string())
			.collect()
	}

	pub fn algorithm_info(&self, algorithm: &str) -> Option<AlgorithmInfo> {
		self.provider.find(algorithm)
	}

	/// `(identifier, hex digest)` for every listed algorithm.
	pub fn digest_all(&self, message: &str) -> Result<Vec<(String, String)>> {
		self.list_algorithms()
			.into_iter()
			.map(|name| {
				let hex = self.digest(&name, message)?;
				Ok((name, hex))
			})
			.collect()
	}
}
