//! Read-only store of the posts compiled into the binary.

mod data;

use chrono::NaiveDate;
use serde::Serialize;

use crate::parsing::{blocks::ContentNode, parse_content};

pub use data::POSTS;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PostError {
    #[error("Post not found: {0}")]
    NotFound(String),
}

/// A single post in the Learnings section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Body in the restricted markdown dialect understood by [`parse_content`].
    pub content: &'static str,
    /// Publication date as `YYYY-MM-DD`.
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub slug: &'static str,
}

impl LearningPost {
    /// The publication date, if `date` is a valid ISO date.
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// Long-form date such as `January 20, 2025`; falls back to `date` as written.
    pub fn display_date(&self) -> String {
        match self.published() {
            Some(d) => d.format("%B %-d, %Y").to_string(),
            None => self.date.to_string(),
        }
    }

    /// The formatted body.
    pub fn nodes(&self) -> Vec<ContentNode> {
        parse_content(self.content)
    }
}

/// Lookup and grouping over a fixed slice of posts.
#[derive(Debug, Clone, Copy)]
pub struct PostStore<'a> {
    posts: &'a [LearningPost],
}

impl<'a> PostStore<'a> {
    pub fn new(posts: &'a [LearningPost]) -> Self {
        Self { posts }
    }

    /// The posts compiled into this crate.
    pub fn builtin() -> PostStore<'static> {
        PostStore::new(&POSTS)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&'a LearningPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Like [`PostStore::find_by_slug`], with the miss as an error.
    pub fn get(&self, slug: &str) -> Result<&'a LearningPost, PostError> {
        self.find_by_slug(slug)
            .ok_or_else(|| PostError::NotFound(slug.to_string()))
    }

    /// Every slug, in table order.
    pub fn list_slugs(&self) -> Vec<&'a str> {
        self.posts.iter().map(|p| p.slug).collect()
    }

    /// All posts, newest first. Ties keep the higher id first.
    pub fn posts(&self) -> Vec<&'a LearningPost> {
        let mut posts: Vec<_> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.date.cmp(a.date).then(b.id.cmp(&a.id)));
        posts
    }

    /// Distinct categories in the order they first appear in [`PostStore::posts`].
    pub fn categories(&self) -> Vec<&'a str> {
        let mut out: Vec<&'a str> = vec![];
        for post in self.posts() {
            if !out.contains(&post.category) {
                out.push(post.category);
            }
        }
        out
    }

    pub fn by_category(&self, category: &str) -> Vec<&'a LearningPost> {
        self.posts()
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Up to `limit` other posts sharing the category of `slug`, newest first.
    /// Unknown slugs have no related posts.
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&'a LearningPost> {
        let Some(post) = self.find_by_slug(slug) else {
            return vec![];
        };
        self.by_category(post.category)
            .into_iter()
            .filter(|p| p.slug != slug)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(id: u32, slug: &'static str, date: &'static str, category: &'static str) -> LearningPost {
        LearningPost {
            id,
            title: "T",
            excerpt: "E",
            content: "# T\n\nbody",
            date,
            read_time: "1 min read",
            category,
            slug,
        }
    }

    fn fixture() -> Vec<LearningPost> {
        vec![
            post(1, "old-web", "2024-05-01", "Web"),
            post(2, "ml", "2024-09-12", "ML"),
            post(3, "new-web", "2025-01-03", "Web"),
            post(4, "newer-web", "2025-01-03", "Web"),
        ]
    }

    #[test]
    fn find_by_slug_hits_and_misses() {
        let posts = fixture();
        let store = PostStore::new(&posts);
        assert_eq!(store.find_by_slug("ml").map(|p| p.id), Some(2));
        assert!(store.find_by_slug("missing").is_none());
    }

    #[test]
    fn get_reports_missing_slug() {
        let posts = fixture();
        let store = PostStore::new(&posts);
        assert_eq!(
            store.get("nope"),
            Err(PostError::NotFound("nope".to_string()))
        );
        assert_eq!(
            PostError::NotFound("nope".into()).to_string(),
            "Post not found: nope"
        );
    }

    #[test]
    fn list_slugs_in_table_order() {
        let posts = fixture();
        let store = PostStore::new(&posts);
        assert_eq!(store.list_slugs(), vec!["old-web", "ml", "new-web", "newer-web"]);
    }

    #[test]
    fn posts_newest_first() {
        let posts = fixture();
        let store = PostStore::new(&posts);
        let ids: Vec<u32> = store.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn categories_follow_post_order() {
        let posts = fixture();
        let store = PostStore::new(&posts);
        assert_eq!(store.categories(), vec!["Web", "ML"]);
    }

    #[test]
    fn related_excludes_self_and_other_categories() {
        let posts = fixture();
        let store = PostStore::new(&posts);
        let related: Vec<&str> = store.related("new-web", 3).iter().map(|p| p.slug).collect();
        assert_eq!(related, vec!["newer-web", "old-web"]);
        assert_eq!(store.related("new-web", 1).len(), 1);
        assert!(store.related("ml", 3).is_empty());
        assert!(store.related("missing", 3).is_empty());
    }

    #[test]
    fn empty_store() {
        let store = PostStore::new(&[]);
        assert!(store.is_empty());
        assert!(store.categories().is_empty());
        assert!(store.list_slugs().is_empty());
    }

    #[test]
    fn display_date_long_form() {
        let p = post(1, "a", "2025-01-20", "X");
        assert_eq!(p.display_date(), "January 20, 2025");
        let p = post(1, "a", "2025-03-08", "X");
        assert_eq!(p.display_date(), "March 8, 2025");
    }

    #[test]
    fn display_date_falls_back_to_raw() {
        let p = post(1, "a", "someday", "X");
        assert_eq!(p.published(), None);
        assert_eq!(p.display_date(), "someday");
    }

    #[test]
    fn builtin_slugs_are_unique() {
        let store = PostStore::builtin();
        let mut slugs = store.list_slugs();
        let n = slugs.len();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), n);
        assert!(store.find_by_slug("lorem-ipsum-dolor-sit-amet").is_some());
    }

    #[test]
    fn builtin_dates_parse() {
        for post in PostStore::builtin().posts() {
            assert!(post.published().is_some(), "bad date on {}", post.slug);
        }
    }
}
