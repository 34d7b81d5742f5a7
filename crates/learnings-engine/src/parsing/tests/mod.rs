//! Block-level tests for the content formatter.

use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{ContentNode, HeadingLevel},
    inline::InlineSpan,
    parse_content,
};

fn text(s: &str) -> Vec<InlineSpan> {
    vec![InlineSpan::text(s)]
}

fn para(s: &str) -> ContentNode {
    ContentNode::Paragraph { spans: text(s) }
}

#[test]
fn empty_document() {
    assert!(parse_content("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_content("\n\n   \n").is_empty());
}

#[test]
fn paragraph_lines_are_trimmed_and_joined() {
    assert_eq!(
        parse_content("  first line  \nsecond line\n\nthird"),
        vec![para("first line second line"), para("third")]
    );
}

#[test]
fn fenced_block_with_language() {
    assert_eq!(
        parse_content("```js\nlet x=1;\n```"),
        vec![ContentNode::CodeBlock {
            language: Some("js".into()),
            text: "let x=1;".into(),
        }]
    );
}

#[test]
fn fenced_block_is_raw() {
    assert_eq!(
        parse_content("```\n# not a heading\n\n- not a list\n  **kept**\n```"),
        vec![ContentNode::CodeBlock {
            language: None,
            text: "# not a heading\n\n- not a list\n  **kept**".into(),
        }]
    );
}

#[test]
fn unterminated_fence_is_flushed() {
    assert_eq!(
        parse_content("text\n```rust\nfn main() {}"),
        vec![
            para("text"),
            ContentNode::CodeBlock {
                language: Some("rust".into()),
                text: "fn main() {}".into(),
            },
        ]
    );
}

#[test]
fn list_then_paragraph() {
    assert_eq!(
        parse_content("- a\n- b\n\ntext"),
        vec![
            ContentNode::BulletList {
                items: vec![text("a"), text("b")],
            },
            para("text"),
        ]
    );
}

#[test]
fn text_line_closes_list_without_blank() {
    assert_eq!(
        parse_content("- a\n* b\nafter"),
        vec![
            ContentNode::BulletList {
                items: vec![text("a"), text("b")],
            },
            para("after"),
        ]
    );
}

#[test]
fn list_item_closes_paragraph() {
    assert_eq!(
        parse_content("intro\n- a"),
        vec![
            para("intro"),
            ContentNode::BulletList {
                items: vec![text("a")],
            },
        ]
    );
}

#[test]
fn note_is_never_a_blockquote() {
    assert_eq!(
        parse_content("> NOTE: watch out\n"),
        vec![ContentNode::Note {
            lines: vec![text("NOTE: watch out")],
        }]
    );
    assert_eq!(
        parse_content("> NOTE: watch out\n\nafter"),
        vec![
            ContentNode::Note {
                lines: vec![text("NOTE: watch out")],
            },
            para("after"),
        ]
    );
}

#[test]
fn note_collects_following_quote_lines() {
    assert_eq!(
        parse_content("> note: first\n> second\nplain"),
        vec![
            ContentNode::Note {
                lines: vec![text("note: first"), text("second")],
            },
            para("plain"),
        ]
    );
}

#[test]
fn blockquote_lines_and_blank_split() {
    assert_eq!(
        parse_content("> one\n> two\n\n> three"),
        vec![
            ContentNode::Blockquote {
                lines: vec![text("one"), text("two")],
            },
            ContentNode::Blockquote {
                lines: vec![text("three")],
            },
        ]
    );
}

#[test]
fn note_opener_closes_blockquote() {
    assert_eq!(
        parse_content("> quoted\n> NOTE: callout"),
        vec![
            ContentNode::Blockquote {
                lines: vec![text("quoted")],
            },
            ContentNode::Note {
                lines: vec![text("NOTE: callout")],
            },
        ]
    );
}

#[test]
fn first_title_heading_is_dropped() {
    assert_eq!(
        parse_content("# Title\n\nbody\n\n# Other"),
        vec![
            para("body"),
            ContentNode::Heading {
                level: HeadingLevel::H2,
                spans: text("Other"),
            },
        ]
    );
}

#[test]
fn title_suppression_only_applies_to_single_hash() {
    assert_eq!(
        parse_content("## Sub\n# Title\n### Deep"),
        vec![
            ContentNode::Heading {
                level: HeadingLevel::H3,
                spans: text("Sub"),
            },
            ContentNode::Heading {
                level: HeadingLevel::H4,
                spans: text("Deep"),
            },
        ]
    );
}

#[test]
fn heading_closes_open_blocks() {
    assert_eq!(
        parse_content("- a\n## Next\n> q\n## Again"),
        vec![
            ContentNode::BulletList {
                items: vec![text("a")],
            },
            ContentNode::Heading {
                level: HeadingLevel::H3,
                spans: text("Next"),
            },
            ContentNode::Blockquote {
                lines: vec![text("q")],
            },
            ContentNode::Heading {
                level: HeadingLevel::H3,
                spans: text("Again"),
            },
        ]
    );
}

#[test]
fn fence_closes_open_quote_and_list() {
    assert_eq!(
        parse_content("> q\n```\nx\n```\n- a\n```\ny\n```"),
        vec![
            ContentNode::Blockquote {
                lines: vec![text("q")],
            },
            ContentNode::CodeBlock {
                language: None,
                text: "x".into(),
            },
            ContentNode::BulletList {
                items: vec![text("a")],
            },
            ContentNode::CodeBlock {
                language: None,
                text: "y".into(),
            },
        ]
    );
}

#[test]
fn trailing_blocks_are_flushed() {
    assert_eq!(
        parse_content("> NOTE: end"),
        vec![ContentNode::Note {
            lines: vec![text("NOTE: end")],
        }]
    );
    assert_eq!(
        parse_content("- last"),
        vec![ContentNode::BulletList {
            items: vec![text("last")],
        }]
    );
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        parse_content("## H\r\n\r\n- a\r\n- b\r\n"),
        vec![
            ContentNode::Heading {
                level: HeadingLevel::H3,
                spans: text("H"),
            },
            ContentNode::BulletList {
                items: vec![text("a"), text("b")],
            },
        ]
    );
}

#[test]
fn inline_spans_in_every_block() {
    let nodes = parse_content("## A **b**\n\n- `c`\n\n> ==d==");
    assert_eq!(
        nodes,
        vec![
            ContentNode::Heading {
                level: HeadingLevel::H3,
                spans: vec![
                    InlineSpan::text("A "),
                    InlineSpan::Bold {
                        children: text("b"),
                    },
                ],
            },
            ContentNode::BulletList {
                items: vec![vec![InlineSpan::Code { text: "c".into() }]],
            },
            ContentNode::Blockquote {
                lines: vec![vec![InlineSpan::Highlight {
                    children: text("d"),
                }]],
            },
        ]
    );
}

#[test]
fn formatting_is_deterministic() {
    let body = crate::posts::PostStore::builtin()
        .posts()
        .into_iter()
        .map(|p| p.content)
        .collect::<Vec<_>>()
        .join("\n\n");
    assert_eq!(parse_content(&body), parse_content(&body));
}
