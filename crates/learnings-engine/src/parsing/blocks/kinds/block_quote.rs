/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote line prefix.
    pub const PREFIX: &'static str = "> ";

    /// Text after the prefix, if `line` is a quote line.
    pub fn text(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}

/// A blockquote opened by a `> NOTE:` line, rendered as a callout.
pub struct Note;

impl Note {
    pub const OPENER: &'static str = "> note:";

    /// Text of a note-opening line, matched case-insensitively after trimming.
    pub fn opener_text(line: &str) -> Option<&str> {
        let trimmed = line.trim();
        let head = trimmed.get(..Self::OPENER.len())?;
        if head.eq_ignore_ascii_case(Self::OPENER) {
            Some(&trimmed[BlockQuote::PREFIX.len()..])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_text_after_prefix() {
        assert_eq!(BlockQuote::text("> hello"), Some("hello"));
        assert_eq!(BlockQuote::text(">hello"), None);
        assert_eq!(BlockQuote::text(" > hello"), None);
    }

    #[test]
    fn note_opener_is_case_insensitive() {
        assert_eq!(Note::opener_text("> NOTE: a"), Some("NOTE: a"));
        assert_eq!(Note::opener_text("> note: b"), Some("note: b"));
        assert_eq!(Note::opener_text("  > Note: c  "), Some("Note: c"));
    }

    #[test]
    fn plain_quote_is_not_a_note() {
        assert_eq!(Note::opener_text("> a note: here"), None);
        assert_eq!(Note::opener_text("> NOTE"), None);
        assert_eq!(Note::opener_text(""), None);
    }
}
