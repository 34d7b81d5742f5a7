use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    page::{IndexPage, Page, PageMetadata, PostPage, Route},
    posts::LearningPost,
};

use super::html::render_nodes;

pub const EMPTY_INDEX_MESSAGE: &str = "No learnings yet. Check back soon!";
pub const NOT_FOUND_HEADING: &str = "Learning Not Found";
pub const NOT_FOUND_MESSAGE: &str =
    "The learning post you're looking for doesn't exist or has been removed.";

/// Renders a resolved page as a complete HTML document.
pub fn render_page(page: &Page<'_>) -> String {
    let body = match page {
        Page::Index(index) => index_body(index),
        Page::Post(post) => post_body(post),
        Page::NotFound(_) => not_found_body(),
    };
    document(page.metadata(), &body)
}

fn document(meta: &PageMetadata, body: &str) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", encode_text(&meta.title)));
    push_head_meta(&mut out, meta);
    out.push_str("</head>\n<body>\n<main>\n");
    out.push_str(body);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn push_head_meta(out: &mut String, meta: &PageMetadata) {
    if let Some(description) = &meta.description {
        push_meta(out, "name", "description", description);
    }
    if let Some(og) = &meta.open_graph {
        push_meta(out, "property", "og:title", &og.title);
        push_meta(out, "property", "og:description", &og.description);
        push_meta(out, "property", "og:type", og.kind.as_str());
        push_meta(out, "property", "og:url", &og.url);
        if let Some(published) = &og.published_time {
            push_meta(out, "property", "article:published_time", published);
        }
        for image in &og.images {
            push_meta(out, "property", "og:image", &image.url);
            push_meta(out, "property", "og:image:width", &image.width.to_string());
            push_meta(out, "property", "og:image:height", &image.height.to_string());
            push_meta(out, "property", "og:image:alt", &image.alt);
        }
    }
    if let Some(twitter) = &meta.twitter {
        push_meta(out, "name", "twitter:card", twitter.card);
        push_meta(out, "name", "twitter:title", &twitter.title);
        push_meta(out, "name", "twitter:description", &twitter.description);
        for image in &twitter.images {
            push_meta(out, "name", "twitter:image", image);
        }
    }
}

fn push_meta(out: &mut String, attr: &str, key: &str, content: &str) {
    out.push_str(&format!(
        "<meta {attr}=\"{key}\" content=\"{}\">\n",
        encode_double_quoted_attribute(content)
    ));
}

fn post_href(post: &LearningPost) -> String {
    Route::Post(post.slug.to_string()).path()
}

fn post_body(page: &PostPage<'_>) -> String {
    let post = page.post;
    let mut out = String::from("<article>\n<header>\n");
    out.push_str(&format!("<h1>{}</h1>\n", encode_text(post.title)));
    out.push_str(&format!(
        "<p class=\"meta\"><time datetime=\"{}\">{}</time> · {} · {}</p>\n",
        encode_double_quoted_attribute(post.date),
        encode_text(&post.display_date()),
        encode_text(post.category),
        encode_text(post.read_time)
    ));
    out.push_str("</header>\n");
    out.push_str(&render_nodes(&page.nodes));
    out.push_str("</article>\n");

    if !page.related.is_empty() {
        out.push_str("<aside class=\"related\">\n<h2>Related</h2>\n<ul>\n");
        for related in &page.related {
            out.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                encode_double_quoted_attribute(&post_href(related)),
                encode_text(related.title)
            ));
        }
        out.push_str("</ul>\n</aside>\n");
    }
    out.push_str(&back_link());
    out
}

fn index_body(page: &IndexPage<'_>) -> String {
    let mut out = String::from("<h2>Learnings ~</h2>\n");
    if let Some(description) = &page.metadata.description {
        out.push_str(&format!("<p>{}</p>\n", encode_text(description)));
    }
    if page.sections.is_empty() {
        out.push_str(&format!("<p class=\"empty\">{EMPTY_INDEX_MESSAGE}</p>\n"));
        return out;
    }
    for section in &page.sections {
        out.push_str("<section class=\"category\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", encode_text(section.category)));
        for post in &section.posts {
            out.push_str(&format!(
                "<a class=\"post\" href=\"{}\"><h4>{}</h4><p>{} · {}</p><p>{}</p></a>\n",
                encode_double_quoted_attribute(&post_href(post)),
                encode_text(post.title),
                encode_text(&post.display_date()),
                encode_text(post.read_time),
                encode_text(post.excerpt)
            ));
        }
        out.push_str("</section>\n");
    }
    out
}

fn not_found_body() -> String {
    format!(
        "<h1>{NOT_FOUND_HEADING}</h1>\n<p>{}</p>\n{}",
        encode_text(NOT_FOUND_MESSAGE),
        back_link()
    )
}

fn back_link() -> String {
    format!("<a class=\"back\" href=\"{}\">Back to Learnings</a>\n", Route::BASE)
}
