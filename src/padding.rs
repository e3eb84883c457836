use super::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Padding {
	/// PKCS#5 padding, generalised (as PKCS#7) to the cipher's block size.
	Pkcs5Padding,
	/// No padding at all; input has to be a whole number of blocks.
	NoPadding,
}

impl Padding {
	pub const ALL: [Padding; 2] = [Padding::Pkcs5Padding, Padding::NoPadding];

	pub const fn name(self) -> &'static str {
		match self {
			Padding::Pkcs5Padding => "PKCS5Padding",
			Padding::NoPadding => "NoPadding",
		}
	}
}

impl std::fmt::Display for Padding {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl std::str::FromStr for Padding {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::ALL
			.into_iter()
			.find(|p| p.name() == s)
			.ok_or_else(|| Error::cipher_initialization(s, "unknown padding"))
	}
}
