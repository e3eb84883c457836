use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use parking_lot::RwLock;
use serde::{Serialize, de::DeserializeOwned};
use std::{
	collections::HashMap,
	sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
};

use super::{Algorithm, Charset, Error, Hash, Key, Mode, Padding, Transformer, codec, kdf, provider};

/// Password-keyed encryption and decryption of bytes, strings, and serializable values.
///
/// An [`Encryption`] derives its key once, from the password it is created with (see
/// [`derive_key`](super::derive_key) for how, and why that derivation is weak), and then
/// encrypts and decrypts with the cipher, mode, and padding of its [`Transformer`].
///
/// # Caching
///
/// When the mode does not use an IV, encryption is deterministic, so every result is remembered:
/// encrypting the same plaintext again (or decrypting a ciphertext it produced, or vice versa)
/// does not touch the cipher at all.  Under modes that do use an IV nothing is cached, and every
/// ciphertext is different.
///
/// The cache has no size limit, and keeps plaintext around in memory, until
/// [`clear_cache`](Encryption::clear_cache) is called or the last clone of the [`Encryption`]
/// is dropped.  That is fine for short-lived use, or a bounded set of values, and not much else.
///
/// Clones share the cache, so the usual way to use one [`Encryption`] from many threads is to
/// clone it into each of them.
///
/// # Example
///
/// ```rust
/// use passcrypt::{Encryption, Error, Hash, Transformer};
/// # fn main() -> Result<(), Error> {
///
/// let encryption = Encryption::new("secure-password", Hash::Sha256, Transformer::AesEcbPkcs5)?;
///
/// let ciphertext = encryption.encrypt_string("Hello, World!")?;
/// assert_eq!("vYQEHPaleCEbRT7UueAO6A==", ciphertext);
/// assert_eq!("Hello, World!", encryption.decrypt_string(&ciphertext)?);
///
/// // A different password won't get you anywhere
/// let imposter = Encryption::new("wrong-password", Hash::Sha256, Transformer::AesEcbPkcs5)?;
/// let result = imposter.decrypt_string(&ciphertext);
/// assert!(result.is_err_and(|e| e.is_bad_ciphertext()));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Encryption {
	charset: Charset,
	hash: Hash,
	transformer: Transformer,
	key: Key,

	cache: Arc<RwLock<TransformCache>>,
	cipher_invocations: Arc<AtomicU64>,
}

impl std::fmt::Debug for Encryption {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Encryption")
			.field("charset", &self.charset)
			.field("hash", &self.hash)
			.field("transformer", &self.transformer)
			.field("cached_entries", &self.cached_entries())
			.finish_non_exhaustive()
	}
}

// Both directions sit behind the one lock, so that pairs go in together, and a clear
// empties both at once
#[derive(Default)]
struct TransformCache {
	// plaintext -> ciphertext
	encrypted: HashMap<Vec<u8>, Vec<u8>>,
	// ciphertext -> plaintext
	decrypted: HashMap<Vec<u8>, Vec<u8>>,
}

impl TransformCache {
	fn insert(&mut self, plaintext: Vec<u8>, ciphertext: Vec<u8>) {
		self.encrypted.insert(plaintext.clone(), ciphertext.clone());
		self.decrypted.insert(ciphertext, plaintext);
	}

	fn clear(&mut self) {
		self.encrypted.clear();
		self.decrypted.clear();
	}
}

#[derive(Clone, Copy, Debug)]
enum Direction {
	Encrypt,
	Decrypt,
}

impl Encryption {
	/// Create a new [`Encryption`], encoding the password as UTF-8.
	///
	/// # Errors
	///
	/// Cannot fail for UTF-8 passwords in practice, but see [`Encryption::with_charset`].
	pub fn new(password: &str, hash: Hash, transformer: Transformer) -> Result<Self, Error> {
		Self::with_charset(password, Charset::default(), hash, transformer)
	}

	/// Create a new [`Encryption`], encoding the password (and, by default, any strings that get
	/// encrypted or decrypted) with `charset`.
	///
	/// # Errors
	///
	/// [`Error::InvalidText`] if the password contains characters `charset` cannot represent.
	#[tracing::instrument(level = "debug", skip(password))]
	pub fn with_charset(
		password: &str,
		charset: Charset,
		hash: Hash,
		transformer: Transformer,
	) -> Result<Self, Error> {
		let key = kdf::derive_key(password, charset, hash, transformer.algorithm())?;

		tracing::debug!(
			transformation = %transformer,
			key_len = key.len(),
			caching = !transformer.needs_iv(),
			"Derived key"
		);

		Ok(Self {
			charset,
			hash,
			transformer,
			key,
			cache: Arc::default(),
			cipher_invocations: Arc::default(),
		})
	}

	/// Encrypt `plaintext`.
	///
	/// # Errors
	///
	/// * [`Error::Encryption`] if the cipher cannot process the plaintext, which only happens
	///   with unaligned input to a transformer without padding.
	/// * [`Error::CipherInitialization`] if the cipher rejected the key.
	#[tracing::instrument(level = "debug", skip(self, plaintext), fields(transformation = %self.transformer))]
	pub fn encrypt(&self, plaintext: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
		self.transform(Direction::Encrypt, plaintext.as_ref())
	}

	/// Decrypt `ciphertext`.
	///
	/// # Errors
	///
	/// * [`Error::Decryption`] if the ciphertext was encrypted with a different key, or was
	///   corrupted or tampered with.
	/// * [`Error::CipherInitialization`] if the cipher rejected the key.
	#[tracing::instrument(level = "debug", skip(self, ciphertext), fields(transformation = %self.transformer))]
	pub fn decrypt(&self, ciphertext: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
		self.transform(Direction::Decrypt, ciphertext.as_ref())
	}

	fn transform(&self, direction: Direction, input: &[u8]) -> Result<Vec<u8>, Error> {
		let caching = self.cache_enabled();

		if caching {
			let cache = self.cache.read();
			let cached = match direction {
				Direction::Encrypt => cache.encrypted.get(input),
				Direction::Decrypt => cache.decrypted.get(input),
			};

			if let Some(output) = cached {
				tracing::trace!(?direction, "Cache hit");
				return Ok(output.clone());
			}
		}

		self.cipher_invocations.fetch_add(1, Ordering::Relaxed);

		let output = match direction {
			Direction::Encrypt => provider::encrypt(self.transformer, self.key.expose_secret(), input)?,
			Direction::Decrypt => provider::decrypt(self.transformer, self.key.expose_secret(), input)?,
		};

		if caching {
			tracing::trace!(?direction, "Caching result");
			let mut cache = self.cache.write();
			match direction {
				Direction::Encrypt => cache.insert(input.to_vec(), output.clone()),
				Direction::Decrypt => cache.insert(output.clone(), input.to_vec()),
			}
		}

		Ok(output)
	}

	/// Encrypt a string, encoded with this [`Encryption`]'s charset, into Base64.
	///
	/// # Errors
	///
	/// As for [`Encryption::encrypt_string_with`].
	pub fn encrypt_string(&self, plaintext: &str) -> Result<String, Error> {
		self.encrypt_string_with(plaintext, self.charset)
	}

	/// Encrypt a string, encoded with `charset`, into Base64.
	///
	/// # Errors
	///
	/// [`Error::InvalidText`] if `charset` can't represent the string, otherwise as for
	/// [`Encryption::encrypt`].
	pub fn encrypt_string_with(&self, plaintext: &str, charset: Charset) -> Result<String, Error> {
		Ok(BASE64.encode(self.encrypt(charset.encode(plaintext)?)?))
	}

	/// Decrypt Base64 produced by [`Encryption::encrypt_string`] back into a string.
	///
	/// # Errors
	///
	/// As for [`Encryption::decrypt_string_with`].
	pub fn decrypt_string(&self, ciphertext: &str) -> Result<String, Error> {
		self.decrypt_string_with(ciphertext, self.charset)
	}

	/// Decrypt Base64 back into a string, decoding the plaintext with `charset`.
	///
	/// # Errors
	///
	/// * [`Error::InvalidCiphertext`] if `ciphertext` is not valid Base64.
	/// * [`Error::InvalidText`] if the plaintext is not valid in `charset`.
	/// * Otherwise, as for [`Encryption::decrypt`].
	pub fn decrypt_string_with(&self, ciphertext: &str, charset: Charset) -> Result<String, Error> {
		let ciphertext = BASE64
			.decode(ciphertext)
			.map_err(|e| Error::invalid_ciphertext(format!("bad Base64: {e}")))?;

		Ok(charset.decode(&self.decrypt(ciphertext)?)?.into_owned())
	}

	/// Serialize `value` and encrypt the result.
	///
	/// # Errors
	///
	/// [`Error::Serialization`], or as for [`Encryption::encrypt`].
	pub fn encrypt_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, Error> {
		self.encrypt(codec::serialize(value)?)
	}

	/// Decrypt `ciphertext` and deserialize the plaintext into a `T`.
	///
	/// # Errors
	///
	/// [`Error::Deserialization`], or as for [`Encryption::decrypt`].
	pub fn decrypt_value<T: DeserializeOwned>(&self, ciphertext: impl AsRef<[u8]>) -> Result<T, Error> {
		codec::deserialize(&self.decrypt(ciphertext)?)
	}

	/// Forget every cached result, in both directions.
	#[tracing::instrument(level = "debug", skip(self))]
	pub fn clear_cache(&self) {
		self.cache.write().clear();
	}

	/// Whether results are being cached, which is whenever the mode doesn't take an IV.
	pub fn cache_enabled(&self) -> bool {
		!self.transformer.needs_iv()
	}

	/// How many plaintexts currently have a cached ciphertext.
	pub fn cached_entries(&self) -> usize {
		self.cache.read().encrypted.len()
	}

	/// How many encryptions and decryptions actually reached the cipher, rather than being
	/// answered from the cache.
	pub fn cipher_invocations(&self) -> u64 {
		self.cipher_invocations.load(Ordering::Relaxed)
	}

	pub fn charset(&self) -> Charset {
		self.charset
	}

	pub fn hash(&self) -> Hash {
		self.hash
	}

	pub fn transformer(&self) -> Transformer {
		self.transformer
	}

	pub fn algorithm(&self) -> Algorithm {
		self.transformer.algorithm()
	}

	pub fn mode(&self) -> Mode {
		self.transformer.mode()
	}

	pub fn padding(&self) -> Padding {
		self.transformer.padding()
	}

	pub fn key(&self) -> &Key {
		&self.key
	}
}
