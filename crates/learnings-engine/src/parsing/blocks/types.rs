use serde::Serialize;

use crate::parsing::inline::InlineSpan;

/// Heading levels a post body can produce.
///
/// `# ` maps to level 2 because the page title already owns level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

/// One block-level unit of formatted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ContentNode {
    Heading {
        level: HeadingLevel,
        spans: Vec<InlineSpan>,
    },
    /// Consecutive text lines, trimmed and joined with single spaces.
    Paragraph { spans: Vec<InlineSpan> },
    BulletList { items: Vec<Vec<InlineSpan>> },
    /// A fenced code block. `text` is the raw lines joined with `\n`.
    CodeBlock {
        language: Option<String>,
        text: String,
    },
    Blockquote { lines: Vec<Vec<InlineSpan>> },
    /// A blockquote opened by a `> NOTE:` line.
    Note { lines: Vec<Vec<InlineSpan>> },
}
