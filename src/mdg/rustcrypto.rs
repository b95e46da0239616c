// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: msgdigester
// File: rustcrypto.rs
// Author: msgdigester maintainers

//! Built-in provider backed by the RustCrypto hash crates.
//!
//! The crates have no runtime registry, so the provider carries a static
//! catalog mapping identifiers to hasher factories. Identifiers follow the
//! usual JCA spelling (`SHA-256`, `SHA3-512`); the compact spellings
//! (`SHA256`, `SHA3_512`) are accepted as aliases.

use std::collections::HashSet;

use digest::DynDigest;
use skein::{consts::U32, Skein1024, Skein256, Skein512};

use super::error::{DigestError, Result};
use super::provider::{AlgorithmInfo, DigestProvider};

pub const PROVIDER_NAME: &str = "RustCrypto";

pub type HasherFactory = fn() -> Box<dyn DynDigest>;

#[derive(Clone, Copy)]
pub struct DigestEntry {
	pub info: AlgorithmInfo,
	pub factory: HasherFactory,
}

impl DigestEntry {
	pub const fn new(info: AlgorithmInfo, factory: HasherFactory) -> Self {
		Self { info, factory }
	}
}

fn boxed<D>() -> Box<dyn DynDigest>
where
	D: DynDigest + Default + 'static,
{
	Box::new(D::default())
}

macro_rules! catalog {
	($($ctor:ident($id:expr, [$($alias:expr),*], $size:expr) => $hasher:ty),+ $(,)?) => {
		&[
			$(
				DigestEntry::new(
					AlgorithmInfo::$ctor($id, &[$($alias),*], $size),
					boxed::<$hasher>,
				),
			)+
		]
	};
}

pub const CATALOG: &[DigestEntry] = catalog!(
	current("BELT-HASH", ["BELTHASH"], 32) => belt_hash::BeltHash,
	current("BLAKE2B-512", ["BLAKE2B"], 64) => blake2::Blake2b512,
	current("BLAKE2S-256", ["BLAKE2S"], 32) => blake2::Blake2s256,
	current("BLAKE3", ["BLAKE3-256"], 32) => blake3::Hasher,
	current("FSB-160", ["FSB160"], 20) => fsb::Fsb160,
	current("FSB-224", ["FSB224"], 28) => fsb::Fsb224,
	current("FSB-256", ["FSB256"], 32) => fsb::Fsb256,
	current("FSB-384", ["FSB384"], 48) => fsb::Fsb384,
	current("FSB-512", ["FSB512"], 64) => fsb::Fsb512,
	current("GOST3411", ["GOST94-CRYPTOPRO"], 32) => gost94::Gost94CryptoPro,
	current("GOST94-TEST", ["GOST94"], 32) => gost94::Gost94Test,
	current("GOST94-UA", ["GOST94UA"], 32) => gost94::Gost94UA,
	current("GROESTL-256", ["GROESTL"], 32) => groestl::Groestl256,
	current("JH-224", ["JH224"], 28) => jh::Jh224,
	current("JH-256", ["JH256"], 32) => jh::Jh256,
	current("JH-384", ["JH384"], 48) => jh::Jh384,
	current("JH-512", ["JH512"], 64) => jh::Jh512,
	current("KECCAK-224", ["KECCAK224"], 28) => sha3::Keccak224,
	current("KECCAK-256", ["KECCAK256"], 32) => sha3::Keccak256,
	current("KECCAK-384", ["KECCAK384"], 48) => sha3::Keccak384,
	current("KECCAK-512", ["KECCAK512"], 64) => sha3::Keccak512,
	legacy("MD2", [], 16) => md2::Md2,
	legacy("MD4", [], 16) => md4::Md4,
	legacy("MD5", [], 16) => md5::Md5,
	current("RIPEMD160", ["RIPEMD-160"], 20) => ripemd::Ripemd160,
	current("RIPEMD320", ["RIPEMD-320"], 40) => ripemd::Ripemd320,
	legacy("SHA-1", ["SHA1"], 20) => sha1::Sha1,
	legacy("SHA-224", ["SHA224"], 28) => sha2::Sha224,
	current("SHA-256", ["SHA256"], 32) => sha2::Sha256,
	current("SHA-384", ["SHA384"], 48) => sha2::Sha384,
	current("SHA-512", ["SHA512"], 64) => sha2::Sha512,
	current("SHA-512/224", ["SHA512_224"], 28) => sha2::Sha512_224,
	current("SHA-512/256", ["SHA512_256"], 32) => sha2::Sha512_256,
	current("SHA3-224", ["SHA3_224"], 28) => sha3::Sha3_224,
	current("SHA3-256", ["SHA3_256"], 32) => sha3::Sha3_256,
	current("SHA3-384", ["SHA3_384"], 48) => sha3::Sha3_384,
	current("SHA3-512", ["SHA3_512"], 64) => sha3::Sha3_512,
	current("SHABAL-192", ["SHABAL192"], 24) => shabal::Shabal192,
	current("SHABAL-224", ["SHABAL224"], 28) => shabal::Shabal224,
	current("SHABAL-256", ["SHABAL256"], 32) => shabal::Shabal256,
	current("SHABAL-384", ["SHABAL384"], 48) => shabal::Shabal384,
	current("SHABAL-512", ["SHABAL512"], 64) => shabal::Shabal512,
	current("SKEIN-256-256", ["SKEIN256"], 32) => Skein256<U32>,
	current("SKEIN-512-256", ["SKEIN512"], 32) => Skein512<U32>,
	current("SKEIN-1024-256", ["SKEIN1024"], 32) => Skein1024<U32>,
	current("SM3", [], 32) => sm3::Sm3,
	current("STREEBOG-256", ["STREEBOG256", "GOST3411-2012-256"], 32) => streebog::Streebog256,
	current("STREEBOG-512", ["STREEBOG512", "GOST3411-2012-512"], 64) => streebog::Streebog512,
	current("TIGER", [], 24) => tiger::Tiger,
	current("TIGER2", [], 24) => tiger::Tiger2,
	current("WHIRLPOOL", [], 64) => whirlpool::Whirlpool,
);

pub struct RustCryptoProvider {
	name: String,
	catalog: &'static [DigestEntry],
}

impl RustCryptoProvider {
	/// Provider over the built-in catalog.
	pub fn initialize() -> Result<Self> {
		Self::with_catalog(PROVIDER_NAME, CATALOG)
	}

	/// Provider over an arbitrary catalog. The catalog is checked once
	/// here: names must be unique ignoring case and every factory must
	/// produce the digest size its entry declares.
	pub fn with_catalog(
		name: &str,
		catalog: &'static [DigestEntry],
	) -> Result<Self> {
		let mut seen = HashSet::new();
		for entry in catalog {
			let names = std::iter::once(entry.info.identifier)
				.chain(entry.info.aliases.iter().copied());
			for n in names {
				if !seen.insert(n.to_ascii_uppercase()) {
					return Err(DigestError::provider_unavailable(
						name,
						format!("algorithm name `{}` is registered twice", n),
					));
				}
			}
			let actual = (entry.factory)().output_size();
			if actual != entry.info.output_size {
				return Err(DigestError::provider_unavailable(
					name,
					format!(
						"`{}` declares {} byte digests but produces {}",
						entry.info.identifier,
						entry.info.output_size,
						actual
					),
				));
			}
		}
		tracing::info!(
			provider = name,
			algorithms = catalog.len(),
			"digest provider initialized"
		);
		Ok(Self {
			name: name.to_string(),
			catalog,
		})
	}

	fn entry(&self, algorithm: &str) -> Option<&'static DigestEntry> {
		self.catalog.iter().find(|entry| entry.info.matches(algorithm))
	}
}

impl DigestProvider for RustCryptoProvider {
	fn name(&self) -> &str {
		&self.name
	}

	fn algorithms(&self) -> Vec<AlgorithmInfo> {
		self.catalog.iter().map(|entry| entry.info).collect()
	}

	fn create(&self, algorithm: &str) -> Result<Box<dyn DynDigest>> {
		let entry = self.entry(algorithm).ok_or_else(|| {
			DigestError::unknown_algorithm(algorithm, &self.name)
		})?;
		Ok((entry.factory)())
	}

	fn find(&self, algorithm: &str) -> Option<AlgorithmInfo> {
		self.entry(algorithm).map(|entry| entry.info)
	}
}
