use serde::Serialize;

/// A parsed inline span.
///
/// Spans own their text. Emphasis-like variants and links hold nested spans
/// because their inner text is scanned again for further markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum InlineSpan {
    /// Plain text that isn't part of any special construct.
    Text { text: String },
    /// `**strong**`
    Bold { children: Vec<InlineSpan> },
    /// `*emphasis*` or `_emphasis_`
    Italic { children: Vec<InlineSpan> },
    /// `==marked==`
    Highlight { children: Vec<InlineSpan> },
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    Code { text: String },
    /// `[text](href)`
    Link {
        children: Vec<InlineSpan>,
        href: String,
    },
    /// A bare `http://`, `https://` or `www.` URL.
    AutoLink {
        /// The text as written.
        text: String,
        /// Target URL; `www.` URLs are given an `https://` scheme.
        href: String,
    },
}

impl InlineSpan {
    pub fn text(s: impl Into<String>) -> Self {
        InlineSpan::Text { text: s.into() }
    }

    /// Concatenated visible text of this span and its children, without markers.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            InlineSpan::Text { text } | InlineSpan::Code { text } => out.push_str(text),
            InlineSpan::AutoLink { text, .. } => out.push_str(text),
            InlineSpan::Bold { children }
            | InlineSpan::Italic { children }
            | InlineSpan::Highlight { children }
            | InlineSpan::Link { children, .. } => {
                for child in children {
                    child.push_plain_text(out);
                }
            }
        }
    }
}

/// Visible text of a whole span sequence.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::plain_text).collect()
}
