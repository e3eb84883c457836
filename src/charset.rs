use encoding_rs::Encoding;
use std::borrow::Cow;

use super::Error;

/// The text encoding used to turn passwords and strings into bytes, and back again.
///
/// Charsets are looked up by their [WHATWG label](https://encoding.spec.whatwg.org/#names-and-labels),
/// so some legacy labels resolve to their modern superset (`latin1` is `windows-1252`, for
/// instance).  Only encodings that can be *written* are accepted, which rules out UTF-16.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Charset {
	pub fn utf_8() -> Self {
		Self(encoding_rs::UTF_8)
	}

	/// Find the charset that goes by `label`.
	///
	/// # Errors
	///
	/// [`Error::UnsupportedCharset`] if the label is unknown, or names an encoding that text
	/// cannot be encoded into.
	pub fn for_label(label: &str) -> Result<Self, Error> {
		let encoding = Encoding::for_label(label.trim().as_bytes())
			.ok_or_else(|| Error::unsupported_charset(label))?;

		if encoding.output_encoding() != encoding {
			return Err(Error::unsupported_charset(label));
		}

		Ok(Self(encoding))
	}

	pub fn name(&self) -> &'static str {
		self.0.name()
	}

	pub(crate) fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>, Error> {
		let (bytes, _, unmappable) = self.0.encode(text);

		if unmappable {
			Err(Error::invalid_text(self.name()))
		} else {
			Ok(bytes)
		}
	}

	pub(crate) fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, Error> {
		self.0
			.decode_without_bom_handling_and_without_replacement(bytes)
			.ok_or_else(|| Error::invalid_text(self.name()))
	}
}

impl Default for Charset {
	fn default() -> Self {
		Self::utf_8()
	}
}

impl std::fmt::Debug for Charset {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Charset").field(&self.name()).finish()
	}
}

impl std::fmt::Display for Charset {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl std::str::FromStr for Charset {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::for_label(s)
	}
}
