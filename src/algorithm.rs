use super::Error;

/// The symmetric block ciphers an [`Encryption`](super::Encryption) can be configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// Advanced Encryption Standard, with 128, 192, or 256-bit keys.
	Aes,
	/// Single DES.  56 bits of key, plus parity, in 8 bytes.  Only here for compatibility.
	Des,
	/// Three-key Triple DES (EDE), with a 24-byte key.
	DesEde,
}

impl Algorithm {
	pub const ALL: [Algorithm; 3] = [Algorithm::Aes, Algorithm::Des, Algorithm::DesEde];

	/// The name the algorithm goes by in a transformation string.
	pub const fn name(self) -> &'static str {
		match self {
			Algorithm::Aes => "AES",
			Algorithm::Des => "DES",
			Algorithm::DesEde => "DESede",
		}
	}

	/// Every key length, in bytes, the algorithm accepts, smallest first.
	pub const fn key_sizes(self) -> &'static [usize] {
		match self {
			Algorithm::Aes => &[16, 24, 32],
			Algorithm::Des => &[8],
			Algorithm::DesEde => &[24],
		}
	}

	/// The key length that password-derived keys are stretched (or cut) to; always the largest
	/// of [`key_sizes`](Self::key_sizes).
	pub const fn key_size(self) -> usize {
		match self {
			Algorithm::Aes => 32,
			Algorithm::Des => 8,
			Algorithm::DesEde => 24,
		}
	}

	pub fn is_key_size_supported(self, key_size: usize) -> bool {
		self.key_sizes().contains(&key_size)
	}

	/// Cipher block length in bytes, which is also the IV length for modes that take one.
	pub const fn block_size(self) -> usize {
		match self {
			Algorithm::Aes => 16,
			Algorithm::Des | Algorithm::DesEde => 8,
		}
	}
}

impl std::fmt::Display for Algorithm {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl std::str::FromStr for Algorithm {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::ALL
			.into_iter()
			.find(|a| a.name() == s)
			.ok_or_else(|| Error::cipher_initialization(s, "unknown algorithm"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn key_size_is_the_largest_supported() {
		for alg in Algorithm::ALL {
			assert_eq!(Some(&alg.key_size()), alg.key_sizes().last());
			assert!(alg.is_key_size_supported(alg.key_size()));
		}
	}

	#[test]
	fn only_listed_key_sizes_are_supported() {
		assert!(Algorithm::Aes.is_key_size_supported(16));
		assert!(Algorithm::Aes.is_key_size_supported(24));
		assert!(!Algorithm::Aes.is_key_size_supported(20));
		assert!(!Algorithm::Des.is_key_size_supported(16));
		assert!(!Algorithm::DesEde.is_key_size_supported(16));
	}

	#[test]
	fn names_round_trip() {
		for alg in Algorithm::ALL {
			assert_eq!(alg, alg.to_string().parse().unwrap());
		}

		assert!(matches!(
			"Blowfish".parse::<Algorithm>(),
			Err(Error::CipherInitialization { .. })
		));
	}
}
