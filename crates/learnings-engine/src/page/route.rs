/// A request path within the Learnings section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Index,
    Post(String),
    NotFound,
}

impl Route {
    pub const BASE: &'static str = "/learnings";

    /// Maps a URL path to a route. Query strings, fragments and one trailing
    /// slash are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.strip_suffix('/').unwrap_or(path);

        if path == Self::BASE {
            return Route::Index;
        }
        match path
            .strip_prefix(Self::BASE)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            Some(slug) if !slug.is_empty() && !slug.contains('/') => Route::Post(slug.to_string()),
            _ => Route::NotFound,
        }
    }

    /// The canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Index => Self::BASE.to_string(),
            Route::Post(slug) => format!("{}/{slug}", Self::BASE),
            Route::NotFound => "/404".to_string(),
        }
    }
}
