use super::scanner::Scanner;
use crate::error::{Error, Result};
use crate::params::Variant;

/// Reads the variant tag following `$argon2`, including the `$` that ends it
/// for `i` and `id`. `i` and `id` share a leading byte, so a third byte is
/// only read after `id`.
pub(crate) fn read_variant(scanner: &mut Scanner<'_>) -> Result<Variant> {
    match (scanner.read_byte(), scanner.read_byte()) {
        (Some(b'i'), Some(b'$')) => Ok(Variant::Argon2i),
        (Some(b'i'), Some(b'd')) => match scanner.read_byte() {
            Some(b'$') => Ok(Variant::Argon2id),
            _ => Err(Error::IncorrectType),
        },
        (Some(b'd'), _) => Ok(Variant::Argon2d),
        _ => Err(Error::IncorrectType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &[u8]) -> Result<Variant> {
        read_variant(&mut Scanner::new(input))
    }

    #[test]
    fn recognizes_all_tags() {
        assert_eq!(parse(b"i$v=19").unwrap(), Variant::Argon2i);
        assert_eq!(parse(b"id$v=19").unwrap(), Variant::Argon2id);
        assert_eq!(parse(b"d$v=19").unwrap(), Variant::Argon2d);
    }

    #[test]
    fn d_consumes_the_following_byte() {
        let mut s = Scanner::new(b"d$v=");
        assert_eq!(read_variant(&mut s).unwrap(), Variant::Argon2d);
        assert!(s.expect(b"v="));
    }

    #[test]
    fn id_without_terminator_is_rejected() {
        assert!(matches!(parse(b"idx"), Err(Error::IncorrectType)));
        assert!(matches!(parse(b"id"), Err(Error::IncorrectType)));
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert!(matches!(parse(b"x$v=19"), Err(Error::IncorrectType)));
        assert!(matches!(parse(b"ix"), Err(Error::IncorrectType)));
        assert!(matches!(parse(b"i"), Err(Error::IncorrectType)));
        assert!(matches!(parse(b""), Err(Error::IncorrectType)));
    }
}
