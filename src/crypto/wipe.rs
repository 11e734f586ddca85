use zeroize::Zeroize;

/// Zeroes every byte of `buf` up to its capacity, keeping its length.
///
/// Best effort only: copies the allocator or the caller made earlier are
/// out of reach.
pub fn wipe(buf: &mut Vec<u8>) {
    let len = buf.len();
    // zeroes the elements, clears, then zeroes the spare capacity
    buf.zeroize();
    buf.resize(len, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wipe_keeps_length() {
        let mut buf = b"password".to_vec();
        wipe(&mut buf);
        assert_eq!(buf, vec![0u8; 8]);
    }

    #[test]
    fn wipe_reaches_spare_capacity() {
        let mut buf = Vec::with_capacity(8);
        buf.extend_from_slice(b"password");
        buf.truncate(0);

        wipe(&mut buf);
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 8);
    }

    #[test]
    fn wipe_keeps_allocation() {
        let mut buf = Vec::with_capacity(32);
        buf.extend_from_slice(b"password");
        let ptr = buf.as_ptr();

        wipe(&mut buf);
        assert_eq!(buf.as_ptr(), ptr);
        assert_eq!(buf, vec![0u8; 8]);
    }
}
