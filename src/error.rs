#[derive(Debug, thiserror::Error, thiserror_ext::Construct)]
#[non_exhaustive]
pub enum Error {
	#[error("unsupported hash algorithm: {0}")]
	UnsupportedHashAlgorithm(String),

	#[error("unsupported charset: {0}")]
	UnsupportedCharset(String),

	#[error("failed to initialize {transformation} cipher: {reason}")]
	CipherInitialization {
		transformation: String,
		reason: String,
	},

	#[error("failed to encrypt plaintext: {0}")]
	Encryption(String),

	#[error("failed to decrypt ciphertext: {0}")]
	Decryption(String),

	#[error("invalid ciphertext: {0}")]
	InvalidCiphertext(String),

	#[error("text not representable in {charset}")]
	InvalidText { charset: String },

	#[error("failed to serialize value: {0}")]
	Serialization(ciborium::ser::Error<std::io::Error>),

	#[error("failed to deserialize value: {0}")]
	Deserialization(ciborium::de::Error<std::io::Error>),
}

impl Error {
	/// Whether this error stems from how the [`Encryption`](super::Encryption) was configured,
	/// rather than from the data it was handed.
	pub fn is_configuration(&self) -> bool {
		matches!(
			self,
			Error::UnsupportedHashAlgorithm(_)
				| Error::UnsupportedCharset(_)
				| Error::CipherInitialization { .. }
		)
	}

	/// Whether this error means the ciphertext could not be turned back into plaintext.
	///
	/// That almost always means the wrong password, or data that was corrupted or tampered with.
	pub fn is_bad_ciphertext(&self) -> bool {
		matches!(self, Error::Decryption(_) | Error::InvalidCiphertext(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classification() {
		assert!(Error::unsupported_hash_algorithm("MD5").is_configuration());
		assert!(Error::cipher_initialization("AES/ECB/PKCS5Padding", "bad key").is_configuration());
		assert!(!Error::decryption("bad padding").is_configuration());

		assert!(Error::decryption("bad padding").is_bad_ciphertext());
		assert!(Error::invalid_ciphertext("not base64").is_bad_ciphertext());
		assert!(!Error::encryption("unaligned").is_bad_ciphertext());
	}

	#[test]
	fn messages_name_the_failure() {
		assert_eq!(
			"failed to initialize DES/ECB/PKCS5Padding cipher: invalid key length 7",
			Error::cipher_initialization("DES/ECB/PKCS5Padding", "invalid key length 7").to_string()
		);
		assert_eq!(
			"unsupported hash algorithm: MD5",
			Error::unsupported_hash_algorithm("MD5").to_string()
		);
	}
}
