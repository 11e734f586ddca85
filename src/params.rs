//! Argon2 parameter sets.
//!
//! A [`Params`] value carries every knob needed to derive a hash and to
//! describe it in an encoded string. Two presets follow RFC 9106 section 4.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Argon2 sub-algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Data-dependent memory access. Decodable, but hashes cannot be generated.
    Argon2d,
    /// Data-independent memory access.
    Argon2i,
    /// Hybrid of the two, the recommended choice.
    Argon2id,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Argon2d => "argon2d",
            Variant::Argon2i => "argon2i",
            Variant::Argon2id => "argon2id",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "d" | "argon2d" => Ok(Variant::Argon2d),
            "i" | "argon2i" => Ok(Variant::Argon2i),
            "id" | "argon2id" => Ok(Variant::Argon2id),
            _ => Err(Error::IncorrectType),
        }
    }
}

/// Argon2 algorithm revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
pub enum Version {
    /// Version 1.0, kept for decoding legacy hashes.
    V10 = 0x10,
    /// Version 1.3.
    V13 = 0x13,
}

impl From<Version> for u32 {
    fn from(version: Version) -> Self {
        version as u32
    }
}

impl TryFrom<u32> for Version {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0x10 => Ok(Version::V10),
            0x13 => Ok(Version::V13),
            _ => Err(Error::InvalidParameter("unknown argon2 version")),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V10 => f.write_str("10"),
            Version::V13 => f.write_str("13"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Params {
    hash_len: u32,
    salt_len: u32,
    time_cost: u32,
    memory_cost: u32,
    parallelism: u8,
    variant: Variant,
    version: Version,
}

impl Default for Params {
    fn default() -> Self {
        Self::memory_constrained()
    }
}

impl Params {
    /// Builds a parameter set, rejecting any zero-valued knob.
    pub fn new(
        hash_len: u32,
        salt_len: u32,
        time_cost: u32,
        memory_cost: u32,
        parallelism: u8,
        variant: Variant,
        version: Version,
    ) -> Result<Self> {
        let params = Self {
            hash_len,
            salt_len,
            time_cost,
            memory_cost,
            parallelism,
            variant,
            version,
        };
        params.validate()?;
        Ok(params)
    }

    /// First RFC 9106 option: t=1, p=4, m=2 GiB.
    pub fn recommended() -> Self {
        Self {
            hash_len: 32,
            salt_len: 16,
            time_cost: 1,
            memory_cost: 2 * 1024 * 1024, // 2 GiB
            parallelism: 4,
            variant: Variant::Argon2id,
            version: Version::V13,
        }
    }

    /// Second RFC 9106 option for hosts with less memory: t=3, p=4, m=64 MiB.
    pub fn memory_constrained() -> Self {
        Self {
            hash_len: 32,
            salt_len: 16,
            time_cost: 3,
            memory_cost: 64 * 1024, // 64 MiB
            parallelism: 4,
            variant: Variant::Argon2id,
            version: Version::V13,
        }
    }

    pub fn hash_len(&self) -> u32 {
        self.hash_len
    }

    pub fn salt_len(&self) -> u32 {
        self.salt_len
    }

    pub fn time_cost(&self) -> u32 {
        self.time_cost
    }

    /// Memory cost in KiB.
    pub fn memory_cost(&self) -> u32 {
        self.memory_cost
    }

    pub fn parallelism(&self) -> u8 {
        self.parallelism
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn validate(&self) -> Result<()> {
        if self.hash_len == 0 {
            return Err(Error::InvalidParameter("hash length must be >= 1"));
        }
        if self.salt_len == 0 {
            return Err(Error::InvalidParameter("salt length must be >= 1"));
        }
        if self.time_cost == 0 {
            return Err(Error::InvalidParameter("time cost must be >= 1"));
        }
        if self.memory_cost == 0 {
            return Err(Error::InvalidParameter("memory cost must be >= 1"));
        }
        if self.parallelism == 0 {
            return Err(Error::InvalidParameter("parallelism must be >= 1"));
        }
        Ok(())
    }

    /// Returns a copy whose lengths describe the given salt and hash.
    pub(crate) fn with_lengths(mut self, salt_len: usize, hash_len: usize) -> Result<Self> {
        self.salt_len = u32::try_from(salt_len)
            .map_err(|_| Error::InvalidParameter("salt length exceeds u32"))?;
        self.hash_len = u32::try_from(hash_len)
            .map_err(|_| Error::InvalidParameter("hash length exceeds u32"))?;
        Ok(self)
    }
}
