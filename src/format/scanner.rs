//! Forward-only cursor over an encoded hash.
//!
//! Every operation moves the cursor forward or leaves it in place; nothing
//! backtracks.

pub(crate) struct Scanner<'a> {
    buf: &'a [u8],
    off: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, off: 0 }
    }

    fn rest(&self) -> &'a [u8] {
        self.buf.get(self.off..).unwrap_or_default()
    }

    /// Checks that the next `literal.len()` bytes equal `literal` and moves
    /// past them whether or not they matched. Running off the end counts as
    /// a mismatch and leaves the cursor at the end.
    pub fn expect(&mut self, literal: &[u8]) -> bool {
        match self.rest().get(..literal.len()) {
            Some(window) => {
                self.off += literal.len();
                window == literal
            }
            None => {
                self.off = self.buf.len();
                false
            }
        }
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.buf.get(self.off)?;
        self.off += 1;
        Some(byte)
    }

    /// Reads a run of ASCII digits. Overflow yields 0, same as a literal
    /// zero, so callers rejecting zero also reject overflow.
    pub fn read_u32(&mut self) -> u32 {
        let mut value = Some(0u32);
        while let Some(digit) = self.buf.get(self.off).filter(|b| b.is_ascii_digit()) {
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(u32::from(digit - b'0')));
            self.off += 1;
        }
        value.unwrap_or(0)
    }

    /// Like [`Scanner::read_u32`], narrowed to a byte.
    pub fn read_u8(&mut self) -> u8 {
        u8::try_from(self.read_u32()).unwrap_or(0)
    }

    /// Moves past the next `delim`, or to the end if there is none.
    pub fn skip_until(&mut self, delim: u8) {
        match self.rest().iter().position(|b| *b == delim) {
            Some(idx) => self.off += idx + 1,
            None => self.off = self.buf.len(),
        }
    }

    /// Returns the bytes before the next `delim` and moves past it. An empty
    /// or unterminated token is `None` and leaves the cursor in place.
    pub fn read_until(&mut self, delim: u8) -> Option<&'a [u8]> {
        let rest = self.rest();
        let idx = rest.iter().position(|b| *b == delim).filter(|idx| *idx > 0)?;
        self.off += idx + 1;
        Some(&rest[..idx])
    }

    pub fn read_rest(&mut self) -> Option<&'a [u8]> {
        let rest = self.rest();
        if rest.is_empty() {
            return None;
        }
        self.off = self.buf.len();
        Some(rest)
    }
}
