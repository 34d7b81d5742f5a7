use super::{
    cursor::{ByteSearch, Cursor},
    kinds::{AutoLink, Bold, CodeSpan, Highlight, Italic, Link},
    types::InlineSpan,
};

/// Nesting limit for recursive re-scanning of matched spans.
///
/// Inner text at this depth is kept as a single [`InlineSpan::Text`].
pub const MAX_INLINE_DEPTH: usize = 32;

/// Parses inline content into a sequence of [`InlineSpan`]s.
///
/// # Precedence
/// At each position the constructs are tried in this order: code span, bold,
/// highlight, italic, link, bare URL. The first match wins. Code spans are raw
/// zones; the inner text of every other construct except bare URLs is scanned
/// again.
///
/// # Returns
/// Spans covering the entire input. Text between constructs, and any marker
/// that failed to match, is emitted as [`InlineSpan::Text`] with adjacent runs
/// merged.
pub fn parse_inline(s: &str) -> Vec<InlineSpan> {
    parse_at_depth(s, 0)
}

fn parse_at_depth(s: &str, depth: usize) -> Vec<InlineSpan> {
    if depth >= MAX_INLINE_DEPTH {
        return if s.is_empty() {
            vec![]
        } else {
            vec![InlineSpan::text(s)]
        };
    }

    let mut cur = Cursor::new(s);
    let mut links = LinkSearch::new();
    let mut out = vec![];
    let mut text_start = 0;

    // Helper to flush accumulated text as a Text span
    fn flush_text(out: &mut Vec<InlineSpan>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineSpan::text(&s[start..end]));
        }
    }

    while !cur.eof() {
        let start = cur.i;
        if let Some(span) = try_parse_span(&mut cur, &mut links, depth) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.i;
            out.push(span);
            continue;
        }

        // Nothing opens here: the marker (if any) is text, then skip ahead to
        // the next position where something could open.
        cur.bump_char();
        while !cur.eof() && !starts_special(cur.rest()) {
            cur.bump_char();
        }
    }

    flush_text(&mut out, s, text_start, cur.i.min(s.len()));
    out
}

/// Tries every construct at the cursor in precedence order.
fn try_parse_span(
    cur: &mut Cursor<'_>,
    links: &mut LinkSearch,
    depth: usize,
) -> Option<InlineSpan> {
    if let Some(span) = try_parse_code_span(cur) {
        return Some(span);
    }
    if let Some(inner) = try_parse_paired(cur, Bold::DELIM, Bold::FORBIDDEN) {
        return Some(InlineSpan::Bold {
            children: parse_at_depth(inner, depth + 1),
        });
    }
    if let Some(inner) = try_parse_paired(cur, Highlight::DELIM, Highlight::FORBIDDEN) {
        return Some(InlineSpan::Highlight {
            children: parse_at_depth(inner, depth + 1),
        });
    }
    if let Some(inner) = try_parse_italic(cur) {
        return Some(InlineSpan::Italic {
            children: parse_at_depth(inner, depth + 1),
        });
    }
    if let Some((text, href)) = try_parse_link(cur, links) {
        return Some(InlineSpan::Link {
            children: parse_at_depth(text, depth + 1),
            href: href.to_string(),
        });
    }
    try_parse_autolink(cur)
}

/// Whether a construct could open at the start of `rest`.
fn starts_special(rest: &str) -> bool {
    let Some(&b) = rest.as_bytes().first() else {
        return false;
    };
    b == CodeSpan::TICK
        || b == Link::TEXT_OPEN
        || Italic::is_delim(b)
        || rest.as_bytes().starts_with(Highlight::DELIM)
        || AutoLink::PREFIXES.iter().any(|p| rest.starts_with(p))
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty, or if it isn't
/// closed. The cursor only moves on success.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let inner_start = cur.i + 1;
    let close = cur.find_from(inner_start, |b| b == CodeSpan::TICK)?;
    if close == inner_start {
        return None;
    }
    let text = cur.s[inner_start..close].to_string();
    cur.i = close + 1;
    Some(InlineSpan::Code { text })
}

/// Attempts to parse `DELIM inner DELIM` where `inner` is non-empty and free
/// of `forbidden`. Returns the inner text.
fn try_parse_paired<'a>(cur: &mut Cursor<'a>, delim: &[u8], forbidden: u8) -> Option<&'a str> {
    if !cur.starts_with(delim) {
        return None;
    }
    let s = cur.s;
    let inner_start = cur.i + delim.len();
    let close = cur.find_from(inner_start, |b| b == forbidden)?;
    if close == inner_start || !s.as_bytes()[close..].starts_with(delim) {
        return None;
    }
    cur.i = close + delim.len();
    Some(&s[inner_start..close])
}

/// Attempts to parse `*inner*` or `_inner_`. The closing delimiter is the
/// first `*` or `_` after the opener and must match it.
fn try_parse_italic<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    let open = cur.peek().filter(|&b| Italic::is_delim(b))?;
    let s = cur.s;
    let inner_start = cur.i + 1;
    let close = cur.find_from(inner_start, Italic::is_delim)?;
    if close == inner_start || s.as_bytes()[close] != open {
        return None;
    }
    cur.i = close + 1;
    Some(&s[inner_start..close])
}

/// Closing-bracket searches shared by every link attempt on one line.
struct LinkSearch {
    text_close: ByteSearch,
    href_close: ByteSearch,
}

impl LinkSearch {
    fn new() -> Self {
        Self {
            text_close: ByteSearch::new(Link::TEXT_CLOSE),
            href_close: ByteSearch::new(Link::HREF_CLOSE),
        }
    }
}

/// Attempts to parse `[text](href)`. Returns `(text, href)`.
fn try_parse_link<'a>(
    cur: &mut Cursor<'a>,
    links: &mut LinkSearch,
) -> Option<(&'a str, &'a str)> {
    if cur.peek() != Some(Link::TEXT_OPEN) {
        return None;
    }
    let s = cur.s;
    let text_start = cur.i + 1;
    let text_end = links.text_close.next_from(s, text_start)?;
    if text_end == text_start || s.as_bytes().get(text_end + 1) != Some(&Link::HREF_OPEN) {
        return None;
    }
    let href_start = text_end + 2;
    let href_end = links.href_close.next_from(s, href_start)?;
    if href_end == href_start {
        return None;
    }
    cur.i = href_end + 1;
    Some((&s[text_start..text_end], &s[href_start..href_end]))
}

/// Attempts to parse a bare URL running up to the next whitespace.
fn try_parse_autolink(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    let rest = cur.rest();
    let prefix = AutoLink::PREFIXES.iter().find(|p| rest.starts_with(**p))?;
    let end = rest
        .char_indices()
        .find(|(_, c)| c.is_whitespace())
        .map_or(rest.len(), |(i, _)| i);
    if end <= prefix.len() {
        return None;
    }
    let text = &rest[..end];
    cur.bump_n(end);
    Some(InlineSpan::AutoLink {
        text: text.to_string(),
        href: AutoLink::href(text),
    })
}
