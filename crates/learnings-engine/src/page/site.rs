use std::collections::BTreeMap;

use serde::Serialize;

/// Site identity used when deriving page metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    /// Appended to page titles: `"{title} - {author}"`.
    pub author: String,
    /// Absolute origin, e.g. `https://example.com`.
    pub base_url: String,
    /// Social preview image used when a post has no override.
    pub default_image: String,
    /// Description of the Learnings index page.
    pub index_description: String,
    /// Per-slug social preview images.
    pub image_overrides: BTreeMap<String, String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            author: "Bedanta Kataki".to_string(),
            base_url: "https://xbedanta.vercel.app".to_string(),
            default_image: "/me.jpeg".to_string(),
            index_description:
                "Thoughts, tutorials, and insights on web development, AI/ML, and tech in general."
                    .to_string(),
            image_overrides: BTreeMap::from([(
                "making-search-feel-smart-without-ai".to_string(),
                "/learnings/fuselogo.png".to_string(),
            )]),
        }
    }
}

impl SiteInfo {
    /// Joins a site-relative path onto `base_url`. Absolute URLs pass through.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Absolute social preview image for a post.
    pub fn image_for(&self, slug: &str) -> String {
        let image = self
            .image_overrides
            .get(slug)
            .unwrap_or(&self.default_image);
        self.absolute_url(image)
    }
}
