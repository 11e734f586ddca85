//! Hashing and verification on top of a [`Kdf`].

use subtle::ConstantTimeEq;
use tracing::debug;

use crate::crypto::{Argon2Kdf, Kdf, generate_salt};
use crate::error::{Error, Result};
use crate::params::{Params, Variant};
use crate::record::Record;

impl Params {
    /// Hashes `password` with the Argon2 primitive.
    ///
    /// When `salt` is `None` a fresh salt of [`Params::salt_len`] random bytes
    /// is generated.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if the parameters do not validate.
    /// - [`Error::UnsupportedVariant`] for argon2d, which can be decoded but
    ///   not generated.
    /// - [`Error::RandomSource`] if the OS random source fails.
    /// - [`Error::Kdf`] if the primitive rejects the parameters.
    pub fn hash(&self, password: &[u8], salt: Option<&[u8]>) -> Result<Record> {
        self.hash_with(&Argon2Kdf, password, salt)
    }

    /// Same as [`Params::hash`] with a caller-supplied primitive.
    pub fn hash_with<K>(&self, kdf: &K, password: &[u8], salt: Option<&[u8]>) -> Result<Record>
    where
        K: Kdf + ?Sized,
    {
        self.validate()?;

        match self.variant() {
            Variant::Argon2d => return Err(Error::UnsupportedVariant(Variant::Argon2d)),
            Variant::Argon2i | Variant::Argon2id => {}
        }

        let salt = match salt {
            Some([]) => return Err(Error::InvalidParameter("salt must not be empty")),
            Some(salt) => salt.to_vec(),
            None => generate_salt(self.salt_len())?,
        };

        debug!(
            variant = %self.variant(),
            version = %self.version(),
            m_cost = self.memory_cost(),
            t_cost = self.time_cost(),
            p_cost = self.parallelism(),
            "deriving argon2 hash"
        );
        let hash = kdf.derive(password, &salt, self)?;
        if usize::try_from(self.hash_len()).ok() != Some(hash.len()) {
            return Err(Error::InvalidParameter("derived hash has the wrong length"));
        }

        let params = self.with_lengths(salt.len(), hash.len())?;
        Record::new(params, salt, hash)
    }

    /// Hashes `password` with a freshly generated salt.
    pub fn hash_raw(&self, password: &[u8]) -> Result<Record> {
        self.hash(password, None)
    }

    /// Hashes `password` with a freshly generated salt and encodes the result.
    pub fn hash_encoded(&self, password: &[u8]) -> Result<String> {
        Ok(self.hash_raw(password)?.encode())
    }
}

impl Record {
    /// Returns `Ok(true)` if `password` produces this record's hash.
    ///
    /// A wrong password is `Ok(false)`. An `Err` means the check could not be
    /// carried out, for example for an argon2d record.
    pub fn verify(&self, password: &[u8]) -> Result<bool> {
        self.verify_with(&Argon2Kdf, password)
    }

    /// Same as [`Record::verify`] with a caller-supplied primitive.
    pub fn verify_with<K>(&self, kdf: &K, password: &[u8]) -> Result<bool>
    where
        K: Kdf + ?Sized,
    {
        let mut fresh = self.params().hash_with(kdf, password, Some(self.salt()))?;
        let matches = bool::from(fresh.hash().ct_eq(self.hash()));
        fresh.wipe();
        Ok(matches)
    }
}

/// Decodes `encoded` and verifies `password` against it.
pub fn verify_encoded(password: &[u8], encoded: impl AsRef<[u8]>) -> Result<bool> {
    Record::decode(encoded)?.verify(password)
}
