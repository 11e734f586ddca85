use std::str::FromStr;

use crate::crypto::wipe;
use crate::error::{Error, Result};
use crate::format;
use crate::params::Params;

/// A salt and hash pair together with the parameters that produced it.
///
/// Produced by [`Params::hash`] or [`Record::decode`]. A record has no
/// setters; clone it if a changed copy is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    params: Params,
    salt: Vec<u8>,
    hash: Vec<u8>,
}

impl Record {
    /// Builds a record from stored parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `params` do not validate, or if
    /// the salt or hash length does not match the lengths recorded in them.
    pub fn new(params: Params, salt: Vec<u8>, hash: Vec<u8>) -> Result<Self> {
        params.validate()?;
        if usize::try_from(params.salt_len()).ok() != Some(salt.len()) {
            return Err(Error::InvalidParameter("salt length does not match parameters"));
        }
        if usize::try_from(params.hash_len()).ok() != Some(hash.len()) {
            return Err(Error::InvalidParameter("hash length does not match parameters"));
        }
        Ok(Self { params, salt, hash })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// Encodes the record as a PHC string.
    pub fn encode(&self) -> String {
        format::encode(self)
    }

    /// Parses a PHC string.
    pub fn decode(encoded: impl AsRef<[u8]>) -> Result<Self> {
        format::decode(encoded.as_ref())
    }

    /// Zeroes the salt and hash buffers. Nothing calls this automatically.
    pub fn wipe(&mut self) {
        wipe(&mut self.salt);
        wipe(&mut self.hash);
    }
}

impl FromStr for Record {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}
