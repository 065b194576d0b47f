//! Page identity and resolved page data.
//!
//! [`PageContext`] replaces any discovery of a page's identity from its
//! source location: the caller states the page's path name and parent path.

use serde::Serialize;

/// Author information shared by every page of a site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Explicit identity of the page being rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    /// This page's own URL path segment (e.g., "pointers").
    pub path_name: String,
    /// URL path of the directory containing this page (e.g., "/cs-274/lecture-notes").
    pub parent_path: String,
}

impl PageContext {
    #[must_use]
    pub fn new(path_name: impl Into<String>, parent_path: impl Into<String>) -> Self {
        Self {
            path_name: path_name.into(),
            parent_path: parent_path.into(),
        }
    }

    /// Absolute URL of this page.
    #[must_use]
    pub fn href(&self) -> String {
        join_url(&self.parent_path, &self.path_name)
    }

    /// Absolute URL of a sibling page.
    #[must_use]
    pub fn sibling_href(&self, path_name: &str) -> String {
        join_url(&self.parent_path, path_name)
    }
}

/// Generated metadata for a page (document title and title block).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    #[serde(flatten)]
    pub info: SiteInfo,
}

/// Resolved hyperlink to another page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CrossLink {
    pub href: String,
    /// Target page title, usable as link text.
    pub text: String,
}

/// One line of a course index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub href: String,
    pub title: String,
}

/// Course index page: its own metadata plus every page in source order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CourseIndex {
    pub metadata: PageMetadata,
    pub entries: Vec<IndexEntry>,
}

/// Join a URL directory path and a path segment with exactly one slash.
pub(crate) fn join_url(parent: &str, segment: &str) -> String {
    format!("{}/{}", parent.trim_end_matches('/'), segment)
}
