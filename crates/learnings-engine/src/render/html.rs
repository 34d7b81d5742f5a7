use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{blocks::ContentNode, inline::InlineSpan};

/// Renders content nodes as an HTML fragment, one block per line.
pub fn render_nodes(nodes: &[ContentNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        push_node(&mut out, node);
        out.push('\n');
    }
    out
}

/// Renders inline spans as HTML.
pub fn render_spans(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    push_spans(&mut out, spans);
    out
}

fn push_node(out: &mut String, node: &ContentNode) {
    match node {
        ContentNode::Heading { level, spans } => {
            let n = level.as_u8();
            out.push_str(&format!("<h{n}>"));
            push_spans(out, spans);
            out.push_str(&format!("</h{n}>"));
        }
        ContentNode::Paragraph { spans } => {
            out.push_str("<p>");
            push_spans(out, spans);
            out.push_str("</p>");
        }
        ContentNode::BulletList { items } => {
            out.push_str("<ul>\n");
            for item in items {
                out.push_str("<li>");
                push_spans(out, item);
                out.push_str("</li>\n");
            }
            out.push_str("</ul>");
        }
        ContentNode::CodeBlock { language, text } => {
            let language = language.as_deref().unwrap_or("text");
            out.push_str(&format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                encode_double_quoted_attribute(language),
                encode_text(text)
            ));
        }
        ContentNode::Blockquote { lines } => {
            out.push_str("<blockquote>\n");
            for line in lines {
                out.push_str("<p>");
                push_spans(out, line);
                out.push_str("</p>\n");
            }
            out.push_str("</blockquote>");
        }
        ContentNode::Note { lines } => {
            // Note lines read as one paragraph.
            out.push_str("<div class=\"note\"><p>");
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                push_spans(out, line);
            }
            out.push_str("</p></div>");
        }
    }
}

fn push_spans(out: &mut String, spans: &[InlineSpan]) {
    for span in spans {
        push_span(out, span);
    }
}

fn push_span(out: &mut String, span: &InlineSpan) {
    match span {
        InlineSpan::Text { text } => out.push_str(&encode_text(text)),
        InlineSpan::Bold { children } => wrap(out, "strong", children),
        InlineSpan::Italic { children } => wrap(out, "em", children),
        InlineSpan::Highlight { children } => wrap(out, "mark", children),
        InlineSpan::Code { text } => {
            out.push_str("<code>");
            out.push_str(&encode_text(text));
            out.push_str("</code>");
        }
        InlineSpan::Link { children, href } => {
            open_anchor(out, href);
            push_spans(out, children);
            out.push_str("</a>");
        }
        InlineSpan::AutoLink { text, href } => {
            open_anchor(out, href);
            out.push_str(&encode_text(text));
            out.push_str("</a>");
        }
    }
}

fn wrap(out: &mut String, tag: &str, children: &[InlineSpan]) {
    out.push_str(&format!("<{tag}>"));
    push_spans(out, children);
    out.push_str(&format!("</{tag}>"));
}

/// External links open in a new tab.
fn open_anchor(out: &mut String, href: &str) {
    out.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">",
        encode_double_quoted_attribute(href)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_content;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_text() {
        assert_eq!(
            render_nodes(&parse_content("a < b & c")),
            "<p>a &lt; b &amp; c</p>\n"
        );
    }

    #[test]
    fn code_block_defaults_to_text_language() {
        assert_eq!(
            render_nodes(&parse_content("```\n<br>\n```")),
            "<pre><code class=\"language-text\">&lt;br&gt;</code></pre>\n"
        );
    }

    #[test]
    fn nested_inline_markup() {
        let spans = crate::parsing::inline::parse_inline("**bold ==hi==** and _it_");
        assert_eq!(
            render_spans(&spans),
            "<strong>bold <mark>hi</mark></strong> and <em>it</em>"
        );
    }

    #[test]
    fn autolink_keeps_written_text() {
        let spans = crate::parsing::inline::parse_inline("www.rust-lang.org");
        assert_eq!(
            render_spans(&spans),
            "<a href=\"https://www.rust-lang.org\" target=\"_blank\" rel=\"noopener noreferrer\">www.rust-lang.org</a>"
        );
    }

    #[test]
    fn note_lines_share_a_paragraph() {
        assert_eq!(
            render_nodes(&parse_content("> NOTE: one\n> two")),
            "<div class=\"note\"><p>NOTE: one two</p></div>\n"
        );
    }
}
