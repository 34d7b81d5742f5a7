use serde::Serialize;

use crate::posts::LearningPost;

use super::{route::Route, site::SiteInfo};

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const TWITTER_CARD: &str = "summary_large_image";

/// Title, description and social preview fields of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: Option<String>,
    pub open_graph: Option<OpenGraph>,
    pub twitter: Option<TwitterCard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OgType {
    Website,
    Article,
}

impl OgType {
    pub fn as_str(self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub kind: OgType,
    /// Publication date of an article.
    pub published_time: Option<String>,
    pub url: String,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Metadata of a post detail page.
pub fn post_metadata(site: &SiteInfo, post: &LearningPost) -> PageMetadata {
    let image = site.image_for(post.slug);
    PageMetadata {
        title: format!("{} - {}", post.title, site.author),
        description: Some(post.excerpt.to_string()),
        open_graph: Some(OpenGraph {
            title: post.title.to_string(),
            description: post.excerpt.to_string(),
            kind: OgType::Article,
            published_time: Some(post.date.to_string()),
            url: site.absolute_url(&Route::Post(post.slug.to_string()).path()),
            images: vec![OgImage {
                url: image.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: post.title.to_string(),
            }],
        }),
        twitter: Some(TwitterCard {
            card: TWITTER_CARD,
            title: post.title.to_string(),
            description: post.excerpt.to_string(),
            images: vec![image],
        }),
    }
}

/// Metadata of the Learnings index page.
pub fn index_metadata(site: &SiteInfo) -> PageMetadata {
    let title = format!("Learnings - {}", site.author);
    PageMetadata {
        title: title.clone(),
        description: Some(site.index_description.clone()),
        open_graph: Some(OpenGraph {
            title,
            description: site.index_description.clone(),
            kind: OgType::Website,
            published_time: None,
            url: site.absolute_url(Route::BASE),
            images: vec![],
        }),
        twitter: None,
    }
}

/// Metadata of the page shown for an unknown slug.
pub fn not_found_metadata(site: &SiteInfo) -> PageMetadata {
    PageMetadata {
        title: format!("Learning Not Found - {}", site.author),
        description: None,
        open_graph: None,
        twitter: None,
    }
}
