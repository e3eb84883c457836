use super::Error;

/// Block cipher modes of operation.
///
/// Whether a mode takes an IV decides whether its output can be cached: without one, the same
/// plaintext under the same key always produces the same ciphertext.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
	/// Electronic Codebook.  No IV, so identical plaintext blocks produce identical ciphertext
	/// blocks, which leaks patterns in the plaintext.
	Ecb,
	/// Cipher Block Chaining, with a fresh random IV for every encryption.
	Cbc,
}

impl Mode {
	pub const ALL: [Mode; 2] = [Mode::Ecb, Mode::Cbc];

	pub const fn name(self) -> &'static str {
		match self {
			Mode::Ecb => "ECB",
			Mode::Cbc => "CBC",
		}
	}

	pub const fn needs_iv(self) -> bool {
		match self {
			Mode::Ecb => false,
			Mode::Cbc => true,
		}
	}
}

impl std::fmt::Display for Mode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl std::str::FromStr for Mode {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::ALL
			.into_iter()
			.find(|m| m.name() == s)
			.ok_or_else(|| Error::cipher_initialization(s, "unknown mode"))
	}
}
