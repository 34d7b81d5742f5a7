//! Route and metadata layer: turns a request path into a resolved page.

pub mod metadata;
pub mod route;
pub mod site;

pub use metadata::{PageMetadata, index_metadata, not_found_metadata, post_metadata};
pub use route::Route;
pub use site::SiteInfo;

use crate::{
    parsing::blocks::ContentNode,
    posts::{LearningPost, PostError, PostStore},
};

/// How many related posts a detail page shows.
pub const RELATED_LIMIT: usize = 3;

/// A fully resolved page, ready for rendering.
#[derive(Debug, Clone)]
pub enum Page<'a> {
    Index(IndexPage<'a>),
    Post(PostPage<'a>),
    NotFound(PageMetadata),
}

impl Page<'_> {
    pub fn metadata(&self) -> &PageMetadata {
        match self {
            Page::Index(page) => &page.metadata,
            Page::Post(page) => &page.metadata,
            Page::NotFound(metadata) => metadata,
        }
    }
}

/// Posts of one category on the index page.
#[derive(Debug, Clone)]
pub struct CategorySection<'a> {
    pub category: &'a str,
    pub posts: Vec<&'a LearningPost>,
}

#[derive(Debug, Clone)]
pub struct IndexPage<'a> {
    /// Sections in category order; empty when there are no posts.
    pub sections: Vec<CategorySection<'a>>,
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone)]
pub struct PostPage<'a> {
    pub post: &'a LearningPost,
    pub nodes: Vec<ContentNode>,
    pub related: Vec<&'a LearningPost>,
    pub metadata: PageMetadata,
}

/// Resolves a route against the store. Unknown slugs resolve to
/// [`Page::NotFound`].
pub fn resolve<'a>(store: &PostStore<'a>, site: &SiteInfo, route: &Route) -> Page<'a> {
    match route {
        Route::Index => Page::Index(index_page(store, site)),
        Route::Post(slug) => match post_page(store, site, slug) {
            Ok(page) => Page::Post(page),
            Err(e) => {
                log::debug!("{e}, serving not-found page");
                Page::NotFound(not_found_metadata(site))
            }
        },
        Route::NotFound => Page::NotFound(not_found_metadata(site)),
    }
}

pub fn index_page<'a>(store: &PostStore<'a>, site: &SiteInfo) -> IndexPage<'a> {
    let sections = store
        .categories()
        .into_iter()
        .map(|category| CategorySection {
            category,
            posts: store.by_category(category),
        })
        .collect();
    IndexPage {
        sections,
        metadata: index_metadata(site),
    }
}

pub fn post_page<'a>(
    store: &PostStore<'a>,
    site: &SiteInfo,
    slug: &str,
) -> Result<PostPage<'a>, PostError> {
    let post = store.get(slug)?;
    Ok(PostPage {
        post,
        nodes: post.nodes(),
        related: store.related(slug, RELATED_LIMIT),
        metadata: post_metadata(site, post),
    })
}

/// Every route that has a static page, one per slug.
pub fn static_params(store: &PostStore<'_>) -> Vec<Route> {
    store
        .list_slugs()
        .into_iter()
        .map(|slug| Route::Post(slug.to_string()))
        .collect()
}
