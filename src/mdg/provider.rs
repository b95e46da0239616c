// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: msgdigester
// File: provider.rs
// Author: msgdigester maintainers

//! Provider abstraction and the caller-owned registry the facade resolves
//! providers from. Nothing here is global: a registry only knows the
//! providers that were explicitly registered with it.

use std::sync::Arc;

use digest::DynDigest;

use super::error::{DigestError, Result};
use super::rustcrypto::RustCryptoProvider;

/// Static metadata for one algorithm a provider advertises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmInfo {
	pub identifier: &'static str,
	pub aliases: &'static [&'static str],
	/// Digest length in bytes.
	pub output_size: usize,
	pub legacy: bool,
}

impl AlgorithmInfo {
	pub const fn current(
		identifier: &'static str,
		aliases: &'static [&'static str],
		output_size: usize,
	) -> Self {
		Self {
			identifier,
			aliases,
			output_size,
			legacy: false,
		}
	}

	pub const fn legacy(
		identifier: &'static str,
		aliases: &'static [&'static str],
		output_size: usize,
	) -> Self {
		Self {
			identifier,
			aliases,
			output_size,
			legacy: true,
		}
	}

	/// Case-insensitive match against the identifier or any alias.
	pub fn matches(&self, name: &str) -> bool {
		self.identifier.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}

	pub fn is_legacy(&self) -> bool {
		self.legacy
	}
}

pub trait DigestProvider: Send + Sync {
	fn name(&self) -> &str;

	/// Advertised algorithms, in the provider's own order.
	fn algorithms(&self) -> Vec<AlgorithmInfo>;

	/// Returns a fresh hasher for `algorithm`.
	fn create(&self, algorithm: &str) -> Result<Box<dyn DynDigest>>;

	fn find(&self, algorithm: &str) -> Option<AlgorithmInfo> {
		self.algorithms()
			.into_iter()
			.find(|info| info.matches(algorithm))
	}
}

#[derive(Default)]
pub struct ProviderRegistry {
	providers: Vec<Arc<dyn DigestProvider>>,
}

impl ProviderRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry holding the built-in RustCrypto provider.
	pub fn with_defaults() -> Result<Self> {
		let mut registry = Self::new();
		registry.register(Arc::new(RustCryptoProvider::initialize()?));
		Ok(registry)
	}

	/// Adds `provider`, replacing a provider registered under the same
	/// name.
	pub fn register(&mut self, provider: Arc<dyn DigestProvider>) {
		let name = provider.name().to_string();
		if let Some(pos) = self
			.providers
			.iter()
			.position(|p| p.name().eq_ignore_ascii_case(&name))
		{
			tracing::warn!(provider = %name, "replacing registered provider");
			self.providers[pos] = provider;
		} else {
			tracing::info!(provider = %name, "registered digest provider");
			self.providers.push(provider);
		}
	}

	pub fn get(&self, name: &str) -> Result<Arc<dyn DigestProvider>> {
		self.providers
			.iter()
			.find(|p| p.name().eq_ignore_ascii_case(name))
			.cloned()
			.ok_or_else(|| {
				DigestError::provider_unavailable(
					name,
					"no provider registered under this name",
				)
			})
	}

	pub fn names(&self) -> Vec<String> {
		self.providers
			.iter()
			.map(|p| p.name().to_string())
			.collect()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}
}
