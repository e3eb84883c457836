use zeroize::Zeroizing;

use super::{Algorithm, Charset, Error, Hash, Key};

/// Turn a password into a key for `algorithm`.
///
/// The password is encoded with `charset`, run through `hash` once, and the digest is cut down
/// (or zero-extended) to [`Algorithm::key_size`] bytes.  The same inputs always produce the same
/// key, which is what lets ciphertexts from earlier runs (or other implementations of the same
/// scheme) be decrypted.
///
/// **This is not a password hardening KDF.**  There is no salt and no work factor, so a weak
/// password falls to an offline guessing attack quickly.  Changing that would change every key
/// this function has ever produced.
///
/// # Errors
///
/// [`Error::InvalidText`] if the password has characters `charset` cannot represent.
#[tracing::instrument(level = "debug", skip(password))]
pub fn derive_key(
	password: &str,
	charset: Charset,
	hash: Hash,
	algorithm: Algorithm,
) -> Result<Key, Error> {
	let password = Zeroizing::new(charset.encode(password)?.into_owned());
	let digest = hash.digest(&password);

	Ok(fit_key(&digest, algorithm.key_size()))
}

fn fit_key(digest: &[u8], key_size: usize) -> Key {
	let mut key = vec![0u8; key_size];
	let n = digest.len().min(key_size);

	key[..n].copy_from_slice(&digest[..n]);

	key.into()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_inputs_same_key() {
		for hash in Hash::ALL {
			for alg in Algorithm::ALL {
				let k1 = derive_key("secure-password", Charset::utf_8(), hash, alg).unwrap();
				let k2 = derive_key("secure-password", Charset::utf_8(), hash, alg).unwrap();

				assert_eq!(k1, k2);
				assert_eq!(alg.key_size(), k1.len());
			}
		}
	}

	#[test]
	fn different_passwords_different_keys() {
		let k1 = derive_key("secure-password", Charset::utf_8(), Hash::Sha256, Algorithm::Aes).unwrap();
		let k2 = derive_key("secure-passwore", Charset::utf_8(), Hash::Sha256, Algorithm::Aes).unwrap();

		assert_ne!(k1, k2);
	}

	#[test]
	fn key_is_a_digest_prefix() {
		let digest = Hash::Sha512.digest(b"secure-password");

		for alg in Algorithm::ALL {
			let key = derive_key("secure-password", Charset::utf_8(), Hash::Sha512, alg).unwrap();
			assert_eq!(&digest[..alg.key_size()], key.expose_secret());
		}
	}

	#[test]
	fn short_digests_are_zero_extended() {
		let key = fit_key(&[0xaa; 20], 32);

		assert_eq!(&[0xaa; 20], &key.expose_secret()[..20]);
		assert_eq!(&[0u8; 12], &key.expose_secret()[20..]);
	}

	#[test]
	fn charset_changes_the_key() {
		let latin1 = Charset::for_label("latin1").unwrap();

		let k1 = derive_key("pässword", Charset::utf_8(), Hash::Sha256, Algorithm::Aes).unwrap();
		let k2 = derive_key("pässword", latin1, Hash::Sha256, Algorithm::Aes).unwrap();

		assert_ne!(k1, k2);
	}

	#[test]
	fn unencodable_password() {
		let latin1 = Charset::for_label("latin1").unwrap();

		let result = derive_key("パスワード", latin1, Hash::Sha256, Algorithm::Aes);
		assert!(matches!(result, Err(Error::InvalidText { .. })));
	}
}
