use argon2::{Algorithm, Argon2};

use crate::error::{Error, Result};
use crate::params::{Params, Variant, Version};

/// A memory-hard key-derivation primitive.
///
/// Implementations must return exactly `params.hash_len()` bytes.
pub trait Kdf {
    fn derive(&self, password: &[u8], salt: &[u8], params: &Params) -> Result<Vec<u8>>;
}

/// The RustCrypto `argon2` implementation. Argon2d is not offered.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Kdf;

impl Kdf for Argon2Kdf {
    fn derive(&self, password: &[u8], salt: &[u8], params: &Params) -> Result<Vec<u8>> {
        let algorithm = match params.variant() {
            Variant::Argon2d => return Err(Error::UnsupportedVariant(Variant::Argon2d)),
            Variant::Argon2i => Algorithm::Argon2i,
            Variant::Argon2id => Algorithm::Argon2id,
        };
        let version = match params.version() {
            Version::V10 => argon2::Version::V0x10,
            Version::V13 => argon2::Version::V0x13,
        };

        let output_len = usize::try_from(params.hash_len())
            .map_err(|_| Error::InvalidParameter("hash length exceeds usize"))?;

        let argon_params = argon2::Params::new(
            params.memory_cost(),
            params.time_cost(),
            u32::from(params.parallelism()),
            Some(output_len),
        )
        .map_err(Error::Kdf)?;

        let argon2 = Argon2::new(algorithm, version, argon_params);

        let mut hash = vec![0u8; output_len];
        argon2
            .hash_password_into(password, salt, &mut hash)
            .map_err(Error::Kdf)?;

        Ok(hash)
    }
}
