use sha2::Digest as _;
use zeroize::Zeroizing;

use super::Error;

/// Digest functions for turning a password into key material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hash {
	Sha256,
	Sha512,
	Sha3_256,
	Sha3_512,
}

impl Hash {
	pub const ALL: [Hash; 4] = [Hash::Sha256, Hash::Sha512, Hash::Sha3_256, Hash::Sha3_512];

	pub const fn name(self) -> &'static str {
		match self {
			Hash::Sha256 => "SHA-256",
			Hash::Sha512 => "SHA-512",
			Hash::Sha3_256 => "SHA3-256",
			Hash::Sha3_512 => "SHA3-512",
		}
	}

	/// Digest length in bytes.
	pub const fn bytes(self) -> usize {
		match self {
			Hash::Sha256 | Hash::Sha3_256 => 32,
			Hash::Sha512 | Hash::Sha3_512 => 64,
		}
	}

	/// Digest length in bits.
	pub const fn bits(self) -> usize {
		self.bytes() * 8
	}

	pub(crate) fn digest(self, data: &[u8]) -> Zeroizing<Vec<u8>> {
		Zeroizing::new(match self {
			Hash::Sha256 => sha2::Sha256::digest(data).to_vec(),
			Hash::Sha512 => sha2::Sha512::digest(data).to_vec(),
			Hash::Sha3_256 => sha3::Sha3_256::digest(data).to_vec(),
			Hash::Sha3_512 => sha3::Sha3_512::digest(data).to_vec(),
		})
	}
}

impl std::fmt::Display for Hash {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl std::str::FromStr for Hash {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::ALL
			.into_iter()
			.find(|h| h.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| Error::unsupported_hash_algorithm(s))
	}
}
