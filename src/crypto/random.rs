use getrandom::fill;

use crate::error::{Error, Result};

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(Error::RandomSource)
}

/// Generate a salt of `len` bytes
pub fn generate_salt(len: u32) -> Result<Vec<u8>> {
    let len =
        usize::try_from(len).map_err(|_| Error::InvalidParameter("salt length exceeds usize"))?;
    let mut salt = vec![0u8; len];
    secure_random(&mut salt)?;
    tracing::trace!(len, "generated random salt");
    Ok(salt)
}
