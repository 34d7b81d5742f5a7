//! # Inline Parsing
//!
//! Cursor-based inline parsing over the display text of a block (heading
//! text, paragraph text, list items, quote and note lines).
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, Italic, Highlight, Code, Link, AutoLink)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for left-to-right scanning
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `**x**` `` parses as a single code span,
//! not as text containing bold.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{MAX_INLINE_DEPTH, parse_inline};
pub use types::{InlineSpan, plain_text};
