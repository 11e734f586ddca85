//! PHC string encoding of Argon2 hash records.
//!
//! ```text
//! $argon2<d|i|id>$v=<version>$m=<memory>,t=<time>,p=<parallelism>$<b64 salt>$<b64 hash>
//! ```
//!
//! Base64 uses the standard alphabet without padding, so an encoded record
//! is plain ASCII and never contains a NUL byte.

use std::fmt::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD as B64;

use crate::error::{Error, Result};
use crate::params::{Params, Variant, Version};
use crate::record::Record;

mod scanner;
mod tag;

use scanner::Scanner;

const PREFIX: &str = "$argon2";
const VERSION_KEY: &str = "v=";
const MEMORY_KEY: &str = "$m=";
const TIME_KEY: &str = ",t=";
const PARALLELISM_KEY: &str = ",p=";

const TAG_D: &str = "d$v=";
const TAG_I: &str = "i$v=";
const TAG_ID: &str = "id$v=";

/// Upper estimate of everything but the base64 segments:
/// `$argon2` (7) + tag (2) + `$v=` (3) + version (2) + `$m=` (3) + memory (7)
/// + `,t=` (3) + time (2) + `,p=` (3) + parallelism (2) + two `$` separators.
const STATIC_OVERHEAD: usize = 36;

fn push_decimal(buf: &mut String, value: u32) {
    // writing into a String cannot fail
    let _ = write!(buf, "{value}");
}

/// Encodes a record into its canonical string.
pub fn encode(record: &Record) -> String {
    let params = record.params();
    let salt_len = base64::encoded_len(record.salt().len(), false).unwrap_or_default();
    let hash_len = base64::encoded_len(record.hash().len(), false).unwrap_or_default();

    let mut buf = String::with_capacity(salt_len + hash_len + STATIC_OVERHEAD);

    buf.push_str(PREFIX);
    buf.push_str(match params.variant() {
        Variant::Argon2d => TAG_D,
        Variant::Argon2i => TAG_I,
        Variant::Argon2id => TAG_ID,
    });
    push_decimal(&mut buf, u32::from(params.version()));
    buf.push_str(MEMORY_KEY);
    push_decimal(&mut buf, params.memory_cost());
    buf.push_str(TIME_KEY);
    push_decimal(&mut buf, params.time_cost());
    buf.push_str(PARALLELISM_KEY);
    push_decimal(&mut buf, u32::from(params.parallelism()));
    buf.push('$');
    B64.encode_string(record.salt(), &mut buf);
    buf.push('$');
    B64.encode_string(record.hash(), &mut buf);

    buf
}

/// Decodes a canonical string into a record.
///
/// Extra comma-separated attributes after the parallelism (such as
/// `,data=...`) are skipped.
///
/// # Errors
///
/// - [`Error::IncorrectType`] if the `$argon2` prefix or the variant tag is
///   wrong.
/// - [`Error::DecodingFailed`] for anything else: a missing literal, a zero,
///   overflowing or unknown numeric field, a missing segment, or invalid
///   base64. No indication is given of which part was wrong.
pub fn decode(encoded: &[u8]) -> Result<Record> {
    let mut scanner = Scanner::new(encoded);

    if !scanner.expect(PREFIX.as_bytes()) {
        return Err(Error::IncorrectType);
    }

    let variant = tag::read_variant(&mut scanner)?;

    let mut matched = scanner.expect(VERSION_KEY.as_bytes());
    let version = scanner.read_u32();
    matched &= scanner.expect(MEMORY_KEY.as_bytes());
    let memory_cost = scanner.read_u32();
    matched &= scanner.expect(TIME_KEY.as_bytes());
    let time_cost = scanner.read_u32();
    matched &= scanner.expect(PARALLELISM_KEY.as_bytes());
    let parallelism = scanner.read_u8();
    scanner.skip_until(b'$');
    let salt = scanner.read_until(b'$');
    let hash = scanner.read_rest();

    let (Some(salt), Some(hash)) = (salt, hash) else {
        return Err(rejected());
    };

    if !matched
        || version == 0
        || version > u32::from(u8::MAX)
        || memory_cost == 0
        || time_cost == 0
        || parallelism == 0
    {
        return Err(rejected());
    }

    let version = Version::try_from(version).map_err(|_| rejected())?;
    let salt = B64.decode(salt).map_err(|_| rejected())?;
    let hash = B64.decode(hash).map_err(|_| rejected())?;

    let hash_len = u32::try_from(hash.len()).map_err(|_| rejected())?;
    let salt_len = u32::try_from(salt.len()).map_err(|_| rejected())?;
    let params = Params::new(
        hash_len,
        salt_len,
        time_cost,
        memory_cost,
        parallelism,
        variant,
        version,
    )
    .map_err(|_| rejected())?;

    Record::new(params, salt, hash)
}

fn rejected() -> Error {
    tracing::debug!("rejected malformed encoded hash");
    Error::DecodingFailed
}
