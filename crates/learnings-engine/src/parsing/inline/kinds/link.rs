/// Markdown link `[text](href)`.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const HREF_OPEN: u8 = b'(';
    pub const HREF_CLOSE: u8 = b')';
}
