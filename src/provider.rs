use aes::{Aes128, Aes192, Aes256};
use cipher::{
	BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit,
	block_padding::{NoPadding, Pkcs7},
};
use des::{Des, TdesEde3};
use rand::{RngCore, rng};

use super::{Algorithm, Error, Mode, Padding, Transformer};

/// Run `transformer` over `plaintext` in the encrypt direction.
///
/// Under modes that need an IV, a fresh one is generated and prepended to the returned
/// ciphertext.
pub(crate) fn encrypt(
	transformer: Transformer,
	key: &[u8],
	plaintext: &[u8],
) -> Result<Vec<u8>, Error> {
	let block_size = transformer.algorithm().block_size();

	if transformer.padding() == Padding::NoPadding && plaintext.len() % block_size != 0 {
		return Err(Error::encryption(format!(
			"{} bytes is not a multiple of the {block_size} byte block size",
			plaintext.len()
		)));
	}

	match (transformer.algorithm(), key.len()) {
		(Algorithm::Aes, 16) => encrypt_with::<Aes128>(transformer, key, plaintext),
		(Algorithm::Aes, 24) => encrypt_with::<Aes192>(transformer, key, plaintext),
		(Algorithm::Aes, 32) => encrypt_with::<Aes256>(transformer, key, plaintext),
		(Algorithm::Des, 8) => encrypt_with::<Des>(transformer, key, plaintext),
		(Algorithm::DesEde, 24) => encrypt_with::<TdesEde3>(transformer, key, plaintext),
		(_, n) => Err(invalid_key_length(transformer, n)),
	}
}

/// Run `transformer` over `ciphertext` in the decrypt direction.
pub(crate) fn decrypt(
	transformer: Transformer,
	key: &[u8],
	ciphertext: &[u8],
) -> Result<Vec<u8>, Error> {
	match (transformer.algorithm(), key.len()) {
		(Algorithm::Aes, 16) => decrypt_with::<Aes128>(transformer, key, ciphertext),
		(Algorithm::Aes, 24) => decrypt_with::<Aes192>(transformer, key, ciphertext),
		(Algorithm::Aes, 32) => decrypt_with::<Aes256>(transformer, key, ciphertext),
		(Algorithm::Des, 8) => decrypt_with::<Des>(transformer, key, ciphertext),
		(Algorithm::DesEde, 24) => decrypt_with::<TdesEde3>(transformer, key, ciphertext),
		(_, n) => Err(invalid_key_length(transformer, n)),
	}
}

fn invalid_key_length(transformer: Transformer, len: usize) -> Error {
	Error::cipher_initialization(
		transformer.transformation(),
		format!(
			"invalid key length {len}, expected one of {:?}",
			transformer.key_sizes()
		),
	)
}

fn encrypt_with<C>(transformer: Transformer, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, Error>
where
	C: BlockCipher + BlockEncryptMut + KeyInit,
{
	let init_failed = |_| Error::cipher_initialization(transformer.transformation(), "rejected key");

	match transformer.mode() {
		Mode::Ecb => {
			let enc = ecb::Encryptor::<C>::new_from_slice(key).map_err(init_failed)?;
			Ok(pad_and_encrypt(enc, transformer.padding(), plaintext))
		}
		Mode::Cbc => {
			let mut iv = vec![0u8; C::block_size()];
			rng().fill_bytes(&mut iv);

			let enc = cbc::Encryptor::<C>::new_from_slices(key, &iv).map_err(init_failed)?;

			let mut ciphertext = iv;
			ciphertext.extend_from_slice(&pad_and_encrypt(enc, transformer.padding(), plaintext));
			Ok(ciphertext)
		}
	}
}

fn decrypt_with<C>(
	transformer: Transformer,
	key: &[u8],
	ciphertext: &[u8],
) -> Result<Vec<u8>, Error>
where
	C: BlockCipher + BlockDecryptMut + KeyInit,
{
	let init_failed = |_| Error::cipher_initialization(transformer.transformation(), "rejected key");

	match transformer.mode() {
		Mode::Ecb => {
			let dec = ecb::Decryptor::<C>::new_from_slice(key).map_err(init_failed)?;
			decrypt_and_unpad(dec, transformer.padding(), ciphertext)
		}
		Mode::Cbc => {
			if ciphertext.len() < C::block_size() {
				return Err(Error::decryption("ciphertext is shorter than its IV"));
			}
			let (iv, ciphertext) = ciphertext.split_at(C::block_size());

			let dec = cbc::Decryptor::<C>::new_from_slices(key, iv).map_err(init_failed)?;
			decrypt_and_unpad(dec, transformer.padding(), ciphertext)
		}
	}
}

fn pad_and_encrypt(enc: impl BlockEncryptMut, padding: Padding, plaintext: &[u8]) -> Vec<u8> {
	match padding {
		Padding::Pkcs5Padding => enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext),
		// Alignment was checked on the way in; NoPadding panics on a partial block
		Padding::NoPadding => enc.encrypt_padded_vec_mut::<NoPadding>(plaintext),
	}
}

fn decrypt_and_unpad(
	dec: impl BlockDecryptMut,
	padding: Padding,
	ciphertext: &[u8],
) -> Result<Vec<u8>, Error> {
	match padding {
		Padding::Pkcs5Padding => dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
		Padding::NoPadding => dec.decrypt_padded_vec_mut::<NoPadding>(ciphertext),
	}
	.map_err(|_| Error::decryption("bad padding or truncated ciphertext"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn key_for(alg: Algorithm) -> Vec<u8> {
		(0..alg.key_size()).map(|i| i as u8).collect()
	}

	#[test]
	fn every_transformer_round_trips() {
		for t in Transformer::ALL {
			let key = key_for(t.algorithm());
			let plaintext = [0x5au8; 32];

			let ciphertext = encrypt(t, &key, &plaintext).unwrap();
			assert_eq!(plaintext.to_vec(), decrypt(t, &key, &ciphertext).unwrap(), "{t}");
		}
	}

	#[test]
	fn every_aes_key_size_is_usable() {
		for len in Algorithm::Aes.key_sizes() {
			let key = vec![7u8; *len];

			let ciphertext = encrypt(Transformer::AesEcbPkcs5, &key, b"sixteen and more").unwrap();
			assert_eq!(
				b"sixteen and more".to_vec(),
				decrypt(Transformer::AesEcbPkcs5, &key, &ciphertext).unwrap()
			);
		}
	}

	#[rstest]
	#[case(Transformer::AesEcbPkcs5, 0, 16)]
	#[case(Transformer::AesEcbPkcs5, 13, 16)]
	#[case(Transformer::AesEcbPkcs5, 16, 32)]
	#[case(Transformer::DesEcbPkcs5, 13, 16)]
	#[case(Transformer::DesEdeEcbPkcs5, 8, 16)]
	#[case(Transformer::AesCbcPkcs5, 13, 32)]
	#[case(Transformer::DesCbcPkcs5, 13, 24)]
	#[case(Transformer::AesEcbNoPadding, 32, 32)]
	#[case(Transformer::AesCbcNoPadding, 16, 32)]
	fn ciphertext_lengths(#[case] t: Transformer, #[case] input: usize, #[case] output: usize) {
		let key = key_for(t.algorithm());

		assert_eq!(output, encrypt(t, &key, &vec![1u8; input]).unwrap().len());
	}

	#[rstest]
	#[case(Transformer::AesEcbPkcs5, 20)]
	#[case(Transformer::AesEcbPkcs5, 0)]
	#[case(Transformer::DesEcbPkcs5, 16)]
	#[case(Transformer::DesEdeCbcPkcs5, 16)]
	#[case(Transformer::DesEdeCbcPkcs5, 32)]
	fn wrong_key_lengths_fail_initialization(#[case] t: Transformer, #[case] key_len: usize) {
		let key = vec![0u8; key_len];

		assert!(matches!(
			encrypt(t, &key, b"data"),
			Err(Error::CipherInitialization { .. })
		));
		assert!(matches!(
			decrypt(t, &key, &[0u8; 32]),
			Err(Error::CipherInitialization { .. })
		));
	}

	#[test]
	fn unaligned_input_without_padding() {
		let key = key_for(Algorithm::Aes);

		assert!(matches!(
			encrypt(Transformer::AesEcbNoPadding, &key, b"not sixteen"),
			Err(Error::Encryption(_))
		));
		assert!(matches!(
			decrypt(Transformer::AesEcbNoPadding, &key, b"not sixteen"),
			Err(Error::Decryption(_))
		));
		assert!(matches!(
			decrypt(Transformer::AesCbcNoPadding, &key, &[0u8; 20]),
			Err(Error::Decryption(_))
		));
	}

	#[test]
	fn cbc_ciphertext_shorter_than_iv() {
		let key = key_for(Algorithm::Des);

		assert!(matches!(
			decrypt(Transformer::DesCbcPkcs5, &key, &[0u8; 7]),
			Err(Error::Decryption(_))
		));
	}

	#[test]
	fn cbc_uses_a_fresh_iv_every_time() {
		let key = key_for(Algorithm::Aes);

		let c1 = encrypt(Transformer::AesCbcPkcs5, &key, b"same").unwrap();
		let c2 = encrypt(Transformer::AesCbcPkcs5, &key, b"same").unwrap();

		assert_ne!(c1[..16], c2[..16]);
		assert_ne!(c1, c2);
	}

	#[test]
	fn ecb_is_deterministic() {
		let key = key_for(Algorithm::DesEde);

		assert_eq!(
			encrypt(Transformer::DesEdeEcbPkcs5, &key, b"same").unwrap(),
			encrypt(Transformer::DesEdeEcbPkcs5, &key, b"same").unwrap()
		);
	}

	#[test]
	fn truncated_padded_ciphertext() {
		let key = key_for(Algorithm::Aes);
		let ciphertext = encrypt(Transformer::AesEcbPkcs5, &key, b"some plaintext").unwrap();

		assert!(matches!(
			decrypt(Transformer::AesEcbPkcs5, &key, &ciphertext[..15]),
			Err(Error::Decryption(_))
		));
	}
}
