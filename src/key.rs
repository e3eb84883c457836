use secrecy::{ExposeSecret as _, SecretSlice};

/// Key material for an [`Encryption`](super::Encryption).
///
/// The bytes are zeroed when the key is dropped, and never show up in `Debug` output.
#[derive(Debug)]
pub struct Key(SecretSlice<u8>);

impl Key {
	pub fn expose_secret(&self) -> &[u8] {
		self.0.expose_secret()
	}

	pub fn len(&self) -> usize {
		self.expose_secret().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Clone for Key {
	fn clone(&self) -> Self {
		Self(self.expose_secret().to_vec().into())
	}
}

impl From<Vec<u8>> for Key {
	fn from(k: Vec<u8>) -> Self {
		Key(k.into())
	}
}

impl PartialEq for Key {
	fn eq(&self, other: &Self) -> bool {
		constant_time_eq::constant_time_eq(self.expose_secret(), other.expose_secret())
	}
}

impl Eq for Key {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn debug_output_is_redacted() {
		let key = Key::from(vec![0x41; 16]);

		assert!(!format!("{key:?}").contains("65"));
	}

	#[test]
	fn equality_is_by_content() {
		assert_eq!(Key::from(vec![1, 2, 3]), Key::from(vec![1, 2, 3]));
		assert_ne!(Key::from(vec![1, 2, 3]), Key::from(vec![1, 2, 4]));
		assert_ne!(Key::from(vec![1, 2, 3]), Key::from(vec![1, 2, 3, 0]));
	}
}
