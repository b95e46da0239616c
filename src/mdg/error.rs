// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: msgdigester
// File: error.rs
// Author: msgdigester maintainers

//! Error type shared by the provider layer and the digest facade.

use thiserror::Error;

/// Coarse category of a [`DigestError`], for callers that only branch on
/// what went wrong and not on the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestErrorKind {
	UnknownAlgorithm,
	ProviderUnavailable,
	Io,
}

#[derive(Debug, Error)]
pub enum DigestError {
	/// The provider has no algorithm registered under the requested name.
	#[error(
		"unsupported digest algorithm `{algorithm}` for provider `{provider}`"
	)]
	UnknownAlgorithm { algorithm: String, provider: String },

	/// The provider is not registered or failed to initialize.
	#[error("provider `{provider}` is unavailable: {reason}")]
	ProviderUnavailable { provider: String, reason: String },

	/// Reading streamed input failed.
	#[error("failed to read input: {0}")]
	Io(#[from] std::io::Error),
}

impl DigestError {
	pub fn unknown_algorithm(
		algorithm: impl Into<String>,
		provider: impl Into<String>,
	) -> Self {
		Self::UnknownAlgorithm {
			algorithm: algorithm.into(),
			provider: provider.into(),
		}
	}

	pub fn provider_unavailable(
		provider: impl Into<String>,
		reason: impl Into<String>,
	) -> Self {
		Self::ProviderUnavailable {
			provider: provider.into(),
			reason: reason.into(),
		}
	}

	pub fn kind(&self) -> DigestErrorKind {
		match self {
			Self::UnknownAlgorithm { .. } => {
				DigestErrorKind::UnknownAlgorithm
			}
			Self::ProviderUnavailable { .. } => {
				DigestErrorKind::ProviderUnavailable
			}
			Self::Io(_) => DigestErrorKind::Io,
		}
	}
}

pub type Result<T> = std::result::Result<T, DigestError>;
