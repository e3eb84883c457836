//! Turning structured values into bytes (and back), ready to be handed to an
//! [`Encryption`](super::Encryption).
//!
//! Values are encoded as CBOR.  Encoding is deterministic as long as the value's `Serialize`
//! impl visits things in a stable order; derived impls on structs and enums, `Vec`s, and
//! `BTreeMap`s all do, while `HashMap` does not.
use serde::{Serialize, de::DeserializeOwned};

use super::Error;

/// Encode `value` into a byte buffer.
///
/// # Errors
///
/// [`Error::Serialization`] if the value's `Serialize` impl refuses to be encoded.
#[tracing::instrument(level = "trace", skip(value))]
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
	let mut bytes = Vec::new();

	ciborium::into_writer(value, &mut bytes).map_err(Error::serialization)?;

	Ok(bytes)
}

/// Decode a value previously encoded with [`serialize`].
///
/// # Errors
///
/// [`Error::Deserialization`] if `bytes` is not valid CBOR, or does not have the shape `T`
/// expects.
#[tracing::instrument(level = "trace", skip(bytes))]
pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
	ciborium::from_reader(bytes).map_err(Error::deserialization)
}
