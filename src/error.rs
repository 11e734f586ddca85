use std::fmt;

use crate::params::Variant;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    MissingPassword,
    RandomSource(getrandom::Error),
    UnsupportedVariant(Variant),
    InvalidParameter(&'static str),
    IncorrectType,
    DecodingFailed,
    VerifyMismatch,
    Kdf(argon2::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingPassword => write!(f, "no password provided"),
            Error::RandomSource(e) => write!(f, "OS random generator unavailable: {e}"),
            Error::UnsupportedVariant(v) => write!(f, "{v} hashing is unsupported"),
            Error::InvalidParameter(reason) => write!(f, "invalid argon2 parameter: {reason}"),
            Error::IncorrectType => write!(f, "there is no such version of argon2"),
            Error::DecodingFailed => write!(f, "decoding failed"),
            Error::VerifyMismatch => write!(f, "the password does not match the supplied hash"),
            Error::Kdf(e) => write!(f, "argon2 key derivation failed: {e}"),
        }
    }
}

impl std::error::Error for Error {}
