//! # Block Parsing
//!
//! Two-phase, single-pass block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineKind`
//!    from local facts only (fence marker, heading marker, quote prefix, bullet, blank)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` holds one open block and
//!    emits `ContentNode`s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`ContentNode`, `HeadingLevel`)
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, BlockQuote, Note, ListItem)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Nothing stays pending after `finish`; unterminated blocks are flushed
//! - Lists and quotes are single level

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{ContentNode, HeadingLevel};
