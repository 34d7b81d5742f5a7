use crate::parsing::inline::{InlineSpan, parse_inline};

use super::{
    classify::{LineClass, LineKind},
    kinds::CodeFence,
    types::{ContentNode, HeadingLevel},
};

/// The block currently being accumulated. Each variant owns its pending lines.
#[derive(Debug, Default)]
enum BlockState {
    #[default]
    Default,
    Paragraph(Vec<String>),
    List(Vec<String>),
    Blockquote(Vec<String>),
    Note(Vec<String>),
    CodeBlock {
        language: Option<String>,
        lines: Vec<String>,
    },
}

/// Line-buffered block kinds, i.e. every state except code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Buffered {
    Paragraph,
    List,
    Blockquote,
    Note,
}

impl BlockState {
    fn open(kind: Buffered) -> Self {
        match kind {
            Buffered::Paragraph => BlockState::Paragraph(vec![]),
            Buffered::List => BlockState::List(vec![]),
            Buffered::Blockquote => BlockState::Blockquote(vec![]),
            Buffered::Note => BlockState::Note(vec![]),
        }
    }

    fn buffered(&mut self) -> Option<(Buffered, &mut Vec<String>)> {
        match self {
            BlockState::Paragraph(lines) => Some((Buffered::Paragraph, lines)),
            BlockState::List(lines) => Some((Buffered::List, lines)),
            BlockState::Blockquote(lines) => Some((Buffered::Blockquote, lines)),
            BlockState::Note(lines) => Some((Buffered::Note, lines)),
            BlockState::Default | BlockState::CodeBlock { .. } => None,
        }
    }
}

/// Turns classified lines into [`ContentNode`]s.
///
/// Exactly one block is open at a time. Opening a block of a different kind,
/// or a blank line, flushes the open one. [`BlockBuilder::finish`] flushes
/// whatever is still open, including an unterminated code fence.
///
/// The first `# ` heading of a document is the post title, which the page
/// renders on its own; it is consumed without touching the open block.
pub struct BlockBuilder {
    state: BlockState,
    title_pending: bool,
    out: Vec<ContentNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: BlockState::Default,
            title_pending: true,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if matches!(self.state, BlockState::CodeBlock { .. }) {
            if matches!(c.kind, LineKind::Fence { .. }) {
                self.flush();
            } else if let BlockState::CodeBlock { lines, .. } = &mut self.state {
                lines.push(c.raw.to_string());
            }
            return;
        }

        match c.kind {
            LineKind::Fence { info } => {
                self.flush();
                self.state = BlockState::CodeBlock {
                    language: CodeFence::language(info),
                    lines: vec![],
                };
            }
            LineKind::Heading {
                level: HeadingLevel::H2,
                ..
            } if self.title_pending => {
                self.title_pending = false;
            }
            LineKind::Heading { level, text } => {
                self.flush();
                self.out.push(ContentNode::Heading {
                    level,
                    spans: parse_inline(text),
                });
            }
            LineKind::NoteOpener { text } => self.append(Buffered::Note, text),
            LineKind::Quote { text } => {
                let kind = if matches!(self.state, BlockState::Note(_)) {
                    Buffered::Note
                } else {
                    Buffered::Blockquote
                };
                self.append(kind, text);
            }
            LineKind::ListItem { text } => self.append(Buffered::List, text),
            LineKind::Text { text } => self.append(Buffered::Paragraph, text),
            LineKind::Blank => self.flush(),
        }
    }

    pub fn finish(mut self) -> Vec<ContentNode> {
        // EOF flush
        self.flush();
        self.out
    }

    /// Appends to the open block of `kind`, opening it first if another
    /// block (or none) is open.
    fn append(&mut self, kind: Buffered, text: &str) {
        if let Some((open, lines)) = self.state.buffered()
            && open == kind
        {
            lines.push(text.to_string());
            return;
        }
        self.flush();
        self.state = BlockState::open(kind);
        if let Some((_, lines)) = self.state.buffered() {
            lines.push(text.to_string());
        }
    }

    fn flush(&mut self) {
        let node = match std::mem::take(&mut self.state) {
            BlockState::Default => return,
            BlockState::Paragraph(lines) => ContentNode::Paragraph {
                spans: parse_inline(&lines.join(" ")),
            },
            BlockState::List(items) => ContentNode::BulletList {
                items: parse_each(&items),
            },
            BlockState::Blockquote(lines) => ContentNode::Blockquote {
                lines: parse_each(&lines),
            },
            BlockState::Note(lines) => ContentNode::Note {
                lines: parse_each(&lines),
            },
            BlockState::CodeBlock { language, lines } => ContentNode::CodeBlock {
                language,
                text: lines.join("\n"),
            },
        };
        self.out.push(node);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_each(lines: &[String]) -> Vec<Vec<InlineSpan>> {
    lines.iter().map(|l| parse_inline(l)).collect()
}
