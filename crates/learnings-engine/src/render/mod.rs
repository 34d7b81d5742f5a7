//! HTML rendering of content nodes and whole pages.
//!
//! All text and attribute values are escaped; the formatter output is never
//! trusted as markup.

pub mod document;
pub mod html;

pub use document::render_page;
pub use html::{render_nodes, render_spans};
