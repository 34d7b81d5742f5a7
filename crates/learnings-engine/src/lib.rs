//! Engine for the Learnings section of a portfolio site.
//!
//! - [`parsing`]: the content formatter (post body text to [`ContentNode`]s)
//! - [`posts`]: the compiled-in post store
//! - [`page`]: routes, page resolution and metadata
//! - [`render`]: HTML output
//! - [`io`]: static site writer

pub mod io;
pub mod page;
pub mod parsing;
pub mod posts;
pub mod render;

// Re-export key types for easier usage
pub use io::{IoError, build_site};
pub use page::{Page, Route, SiteInfo, resolve};
pub use parsing::{
    blocks::{ContentNode, HeadingLevel},
    inline::{InlineSpan, parse_inline},
    parse_content,
};
pub use posts::{LearningPost, PostError, PostStore};
pub use render::{render_nodes, render_page};
