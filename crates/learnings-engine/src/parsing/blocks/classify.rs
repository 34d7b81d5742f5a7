use super::{
    kinds::{BlockQuote, CodeFence, Heading, ListItem, Note},
    types::HeadingLevel,
};

/// What a single line looks like on its own.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. The builder decides what a
/// class means given the open block (e.g. a quote line inside a note).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A fence marker with its trimmed info string.
    Fence { info: &'a str },
    Heading { level: HeadingLevel, text: &'a str },
    /// `> NOTE:` opener; `text` starts at `NOTE:`.
    NoteOpener { text: &'a str },
    Quote { text: &'a str },
    ListItem { text: &'a str },
    /// Any other non-blank line, trimmed.
    Text { text: &'a str },
    Blank,
}

/// A line together with its classification.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The line as written, without its line terminator.
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line. The first matching rule wins: fence, heading, note
    /// opener, quote, list item, blank, text.
    pub fn classify<'a>(&self, raw: &'a str) -> LineClass<'a> {
        let raw = raw.trim_end_matches(['\r', '\n']);
        LineClass {
            raw,
            kind: Self::kind(raw),
        }
    }

    fn kind(line: &str) -> LineKind<'_> {
        if let Some(info) = CodeFence::info(line) {
            return LineKind::Fence { info };
        }
        if let Some((level, text)) = Heading::split(line) {
            return LineKind::Heading { level, text };
        }
        if let Some(text) = Note::opener_text(line) {
            return LineKind::NoteOpener { text };
        }
        if let Some(text) = BlockQuote::text(line) {
            return LineKind::Quote { text };
        }
        if let Some(text) = ListItem::text(line) {
            return LineKind::ListItem { text };
        }
        match line.trim() {
            "" => LineKind::Blank,
            text => LineKind::Text { text },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("```js", LineKind::Fence { info: "js" })]
    #[case("# Title", LineKind::Heading { level: HeadingLevel::H2, text: "Title" })]
    #[case("### Deep", LineKind::Heading { level: HeadingLevel::H4, text: "Deep" })]
    #[case("> NOTE: careful", LineKind::NoteOpener { text: "NOTE: careful" })]
    #[case("> quoted", LineKind::Quote { text: "quoted" })]
    #[case("- item", LineKind::ListItem { text: "item" })]
    #[case("* item", LineKind::ListItem { text: "item" })]
    #[case("   ", LineKind::Blank)]
    #[case("", LineKind::Blank)]
    #[case("  some text  ", LineKind::Text { text: "some text" })]
    #[case("#### not a heading", LineKind::Text { text: "#### not a heading" })]
    fn classifies(#[case] line: &str, #[case] expected: LineKind<'_>) {
        assert_eq!(MarkdownLineClassifier.classify(line).kind, expected);
    }

    #[test]
    fn strips_carriage_return() {
        let lc = MarkdownLineClassifier.classify("- item\r");
        assert_eq!(lc.raw, "- item");
        assert_eq!(lc.kind, LineKind::ListItem { text: "item" });
    }

    #[test]
    fn fence_inside_text_wins_over_heading() {
        let lc = MarkdownLineClassifier.classify("```# not heading");
        assert_eq!(
            lc.kind,
            LineKind::Fence {
                info: "# not heading"
            }
        );
    }
}
