/// A cursor for left-to-right inline scanning over a string slice.
///
/// Positions are byte offsets. Every delimiter the scanner looks for is ASCII,
/// so any offset the cursor stops at is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The unconsumed remainder.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().as_bytes().starts_with(pat)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances past the current char, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Offset of the first byte at or after `from` that satisfies `pred`.
    pub fn find_from(&self, from: usize, pred: impl Fn(u8) -> bool) -> Option<usize> {
        self.s
            .as_bytes()
            .get(from..)?
            .iter()
            .position(|&b| pred(b))
            .map(|p| from + p)
    }
}

/// Forward search for one byte that remembers its last answer.
///
/// Searching again from a later offset reuses the previous hit while it is
/// still ahead, so a run of failed attempts costs one pass over the line.
#[derive(Debug, Clone, Copy)]
pub struct ByteSearch {
    byte: u8,
    from: usize,
    hit: Option<usize>,
    primed: bool,
}

impl ByteSearch {
    pub fn new(byte: u8) -> Self {
        Self {
            byte,
            from: 0,
            hit: None,
            primed: false,
        }
    }

    /// Offset of the first `byte` in `s` at or after `from`.
    ///
    /// `s` must be the same string on every call.
    pub fn next_from(&mut self, s: &str, from: usize) -> Option<usize> {
        if self.primed && from >= self.from && self.hit.is_none_or(|h| h >= from) {
            return self.hit;
        }
        let byte = self.byte;
        self.hit = s
            .as_bytes()
            .get(from..)
            .and_then(|rest| rest.iter().position(|&b| b == byte))
            .map(|p| from + p);
        self.from = from;
        self.primed = true;
        self.hit
    }
}
