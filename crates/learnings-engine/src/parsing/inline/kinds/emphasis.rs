/// `**strong**`. The inner text may not contain `*`.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static [u8; 2] = b"**";
    pub const FORBIDDEN: u8 = b'*';
}

/// `==marked==`. The inner text may not contain `=`.
pub struct Highlight;

impl Highlight {
    pub const DELIM: &'static [u8; 2] = b"==";
    pub const FORBIDDEN: u8 = b'=';
}

/// `*emphasis*` or `_emphasis_`.
///
/// The span closes at the first `*` or `_` after the opener, and only if that
/// byte is the same as the opener.
pub struct Italic;

impl Italic {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    pub fn is_delim(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }
}
