use super::{Algorithm, Error, Mode, Padding};

/// A supported combination of [`Algorithm`], [`Mode`], and [`Padding`].
///
/// Not every combination of the three makes sense, so rather than validating arbitrary triples
/// at runtime, only the combinations listed here can be expressed at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transformer {
	AesEcbPkcs5,
	DesEcbPkcs5,
	DesEdeEcbPkcs5,
	AesCbcPkcs5,
	DesCbcPkcs5,
	DesEdeCbcPkcs5,
	AesEcbNoPadding,
	AesCbcNoPadding,
}

impl Transformer {
	pub const ALL: [Transformer; 8] = [
		Transformer::AesEcbPkcs5,
		Transformer::DesEcbPkcs5,
		Transformer::DesEdeEcbPkcs5,
		Transformer::AesCbcPkcs5,
		Transformer::DesCbcPkcs5,
		Transformer::DesEdeCbcPkcs5,
		Transformer::AesEcbNoPadding,
		Transformer::AesCbcNoPadding,
	];

	const fn parts(self) -> (Algorithm, Mode, Padding) {
		use Algorithm::{Aes, Des, DesEde};
		use Mode::{Cbc, Ecb};
		use Padding::{NoPadding, Pkcs5Padding};

		match self {
			Transformer::AesEcbPkcs5 => (Aes, Ecb, Pkcs5Padding),
			Transformer::DesEcbPkcs5 => (Des, Ecb, Pkcs5Padding),
			Transformer::DesEdeEcbPkcs5 => (DesEde, Ecb, Pkcs5Padding),
			Transformer::AesCbcPkcs5 => (Aes, Cbc, Pkcs5Padding),
			Transformer::DesCbcPkcs5 => (Des, Cbc, Pkcs5Padding),
			Transformer::DesEdeCbcPkcs5 => (DesEde, Cbc, Pkcs5Padding),
			Transformer::AesEcbNoPadding => (Aes, Ecb, NoPadding),
			Transformer::AesCbcNoPadding => (Aes, Cbc, NoPadding),
		}
	}

	pub const fn algorithm(self) -> Algorithm {
		self.parts().0
	}

	pub const fn mode(self) -> Mode {
		self.parts().1
	}

	pub const fn padding(self) -> Padding {
		self.parts().2
	}

	/// Look up the transformer for a combination, if that combination is supported.
	pub fn find(algorithm: Algorithm, mode: Mode, padding: Padding) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|t| t.parts() == (algorithm, mode, padding))
	}

	/// The canonical `Algorithm/Mode/Padding` string, eg. `AES/ECB/PKCS5Padding`.
	pub fn transformation(self) -> String {
		let (algorithm, mode, padding) = self.parts();
		format!("{algorithm}/{mode}/{padding}")
	}

	pub const fn key_sizes(self) -> &'static [usize] {
		self.algorithm().key_sizes()
	}

	pub fn is_key_size_supported(self, key_size: usize) -> bool {
		self.algorithm().is_key_size_supported(key_size)
	}

	pub const fn needs_iv(self) -> bool {
		self.mode().needs_iv()
	}
}

impl std::fmt::Display for Transformer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.transformation())
	}
}

impl std::str::FromStr for Transformer {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		let mut pieces = s.split('/');

		let (Some(algorithm), Some(mode), Some(padding), None) =
			(pieces.next(), pieces.next(), pieces.next(), pieces.next())
		else {
			return Err(Error::cipher_initialization(
				s,
				"expected Algorithm/Mode/Padding",
			));
		};

		Self::find(algorithm.parse()?, mode.parse()?, padding.parse()?)
			.ok_or_else(|| Error::cipher_initialization(s, "unsupported transformation"))
	}
}
