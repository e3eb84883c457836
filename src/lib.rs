//! Symmetric encryption keyed by a password, for when you just need to get some bytes (or
//! strings, or structs) in and out of ciphertext with a familiar cipher.
//!
//! An [`Encryption`] is created from a password, a [`Hash`] to turn that password into a key,
//! and a [`Transformer`]: one of a fixed list of supported [`Algorithm`] / [`Mode`] / [`Padding`]
//! combinations, each known by its transformation string (such as `AES/ECB/PKCS5Padding`).  It
//! can then encrypt and decrypt raw bytes, Base64-wrapped strings in any writable [`Charset`], and
//! anything that implements `serde`'s traits (via the [`serialize`] and [`deserialize`] functions,
//! which can also be used on their own).
//!
//! Under modes that don't use an IV, the output of the cipher depends only on its input, so an
//! [`Encryption`] remembers every result and never runs the cipher twice for the same input.
//!
//! # Caveats
//!
//! This crate reproduces an existing, simple scheme, so that data encrypted under that scheme
//! stays readable.  Before using it for anything new, be aware that:
//!
//! * Keys come from a single, unsalted hash of the password ([`derive_key`]).  A weak password
//!   will not survive an offline guessing attack.
//! * ECB mode encrypts equal blocks of plaintext to equal blocks of ciphertext, and none of the
//!   supported modes detect tampering.  At best, a tampered ciphertext fails to unpad.
//! * The result cache is unbounded and keeps plaintext in memory.  Call
//!   [`Encryption::clear_cache`] if the set of values you encrypt isn't small.
mod algorithm;
mod charset;
mod codec;
mod encryption;
mod error;
mod hash;
mod kdf;
mod key;
mod mode;
mod padding;
mod provider;
mod transformer;

pub use ::ciborium;

pub use algorithm::Algorithm;
pub use charset::Charset;
pub use codec::{deserialize, serialize};
pub use encryption::Encryption;
pub use error::Error;
pub use hash::Hash;
pub use kdf::derive_key;
pub use key::Key;
pub use mode::Mode;
pub use padding::Padding;
pub use transformer::Transformer;

#[cfg(test)]
pub(crate) fn init_tracing() {
	use std::sync::Once;
	use tracing_subscriber::{layer::SubscriberExt as _, registry::Registry};

	static INIT: Once = Once::new();

	INIT.call_once(|| {
		let layer = tracing_tree::HierarchicalLayer::default()
			.with_writer(tracing_subscriber::fmt::TestWriter::new())
			.with_indent_lines(true)
			.with_indent_amount(2)
			.with_targets(true);

		let sub = Registry::default().with(layer);
		tracing::subscriber::set_global_default(sub).unwrap();
	});
}
