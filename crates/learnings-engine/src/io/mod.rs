use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    page::{Page, Route, SiteInfo, index_page, not_found_metadata, post_page, static_params},
    posts::PostStore,
    render::render_page,
};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid output directory: {0}")]
    InvalidOutputDir(String),
    #[error(transparent)]
    Post(#[from] crate::posts::PostError),
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Output file for a route, relative to the site root.
pub fn route_file(route: &Route) -> PathBuf {
    match route {
        Route::Index => PathBuf::from("learnings").join("index.html"),
        Route::Post(slug) => PathBuf::from("learnings").join(slug).join("index.html"),
        Route::NotFound => PathBuf::from("404.html"),
    }
}

/// Writes every static page of the Learnings section under `out_dir`.
///
/// Returns the written paths: the index, one page per slug, then `404.html`.
pub fn build_site(
    out_dir: &Path,
    store: &PostStore<'_>,
    site: &SiteInfo,
) -> Result<Vec<PathBuf>, IoError> {
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(IoError::InvalidOutputDir(format!(
            "{} is not a directory",
            out_dir.display()
        )));
    }

    let mut pages = vec![(Route::Index, Page::Index(index_page(store, site)))];
    for route in static_params(store) {
        let Route::Post(slug) = &route else {
            continue;
        };
        let page = Page::Post(post_page(store, site, slug)?);
        pages.push((route, page));
    }
    pages.push((Route::NotFound, Page::NotFound(not_found_metadata(site))));

    let mut written = Vec::with_capacity(pages.len());
    for (route, page) in pages {
        let path = out_dir.join(route_file(&route));
        log::debug!("writing {} -> {}", route.path(), path.display());
        write_file(&path, &render_page(&page))?;
        written.push(path);
    }

    log::info!("wrote {} pages to {}", written.len(), out_dir.display());
    Ok(written)
}
