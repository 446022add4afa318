//! Report persistence.
//!
//! Each table becomes one HTML file under a per-scope directory:
//! `{report_dir}/{scope_slug}/{scope_slug}_{name}.html`. Page scopes slug
//! the host and path together, so two pages on the same host never
//! collide. Re-running a term overwrites the previous artifacts in place.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::Result;

use super::style::render_html;
use super::{Scope, Table};

/// Maximum slug length; enough to keep host + path distinctive without
/// overrunning filesystem name limits.
const MAX_SLUG_LEN: usize = 80;

/// Write one table to disk, creating the scope directory as needed.
///
/// Returns the path of the written file. An existing file at that path is
/// replaced. Filesystem failures propagate as [`crate::LensError::Report`].
pub fn save_table(table: &Table, report_dir: &Path) -> Result<PathBuf> {
    let slug = scope_slug(&table.scope);
    let dir = report_dir.join(&slug);
    fs::create_dir_all(&dir)?;

    let path = dir.join(format!("{slug}_{}.html", table.name));
    fs::write(&path, render_html(table))?;

    tracing::info!(name = table.name, path = %path.display(), "report written");
    Ok(path)
}

/// Filesystem-safe slug identifying a scope.
///
/// Search scopes slug the query term; page scopes slug the URL's host and
/// path. Characters outside `[a-z0-9]` become hyphens, runs collapse, and
/// the result is trimmed and truncated.
pub fn scope_slug(scope: &Scope) -> String {
    let raw = match scope {
        Scope::Search(term) => format!("search {term}"),
        Scope::Page(url) => match Url::parse(url) {
            Ok(parsed) => format!(
                "{} {}",
                parsed.host_str().unwrap_or_default(),
                parsed.path()
            ),
            Err(_) => url.clone(),
        },
    };
    slugify(&raw)
}

fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut last_hyphen = true;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug.truncate(MAX_SLUG_LEN);
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("unnamed");
    }
    slug
}
