//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Bold`**, **`Highlight`**: paired two-byte delimiters (`**`, `==`)
//! - **`Italic`**: single `*` or `_`, closed by the same byte
//! - **`Link`**: `[text](href)`
//! - **`AutoLink`**: bare `http://`, `https://` and `www.` URLs
//!
//! The parser calls these constants; it never hardcodes a delimiter.

pub mod autolink;
pub mod code_span;
pub mod emphasis;
pub mod link;

pub use autolink::AutoLink;
pub use code_span::CodeSpan;
pub use emphasis::{Bold, Highlight, Italic};
pub use link::Link;
