//! Consistency check between a course's registry and its content directory.
//!
//! Each subdirectory of the content directory that contains the page file
//! (e.g., `page.tsx`) is a published page named after the directory. Other
//! subdirectories (shared components, assets) are ignored.

use std::fmt;
use std::fs;

use crate::course::Course;
use crate::error::SiteError;

/// Mismatch between registered pages and pages on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentIssue {
    /// Page directory exists but its path name is not registered.
    ///
    /// Rendering it would fail to resolve its own title.
    Unregistered { path_name: String },
    /// Registered path name with no page directory.
    Missing { path_name: String },
}

impl ContentIssue {
    /// Whether this issue should fail a build.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Unregistered { .. })
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unregistered { path_name } => {
                write!(f, "page '{path_name}' exists but is not registered")
            }
            Self::Missing { path_name } => {
                write!(f, "page '{path_name}' is registered but has no content")
            }
        }
    }
}

impl Course {
    /// Compare the registry against page directories on disk.
    ///
    /// Issues are returned sorted: unregistered pages by directory name, then
    /// missing pages in source order.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Io`] if the content directory cannot be read.
    pub fn check_content(&self, page_file: &str) -> Result<Vec<ContentIssue>, SiteError> {
        let content_dir = self.content_dir();
        let io_err = |source| SiteError::Io {
            path: content_dir.to_path_buf(),
            source,
        };

        let mut on_disk = Vec::new();
        for entry in fs::read_dir(content_dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let path = entry.path();
            if !path.is_dir() || !path.join(page_file).is_file() {
                continue;
            }
            match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => on_disk.push(name.to_owned()),
                None => tracing::warn!(
                    course = %self.name(),
                    path = %path.display(),
                    "Skipping page directory with a non UTF-8 name"
                ),
            }
        }
        on_disk.sort();

        let registry = self.registry();
        let mut issues: Vec<ContentIssue> = on_disk
            .iter()
            .filter(|name| !registry.contains_path(name))
            .map(|name| ContentIssue::Unregistered {
                path_name: name.clone(),
            })
            .collect();

        let mut reported = std::collections::HashSet::new();
        for page in registry.pages() {
            if !on_disk.contains(&page.path_name) && reported.insert(page.path_name.as_str()) {
                issues.push(ContentIssue::Missing {
                    path_name: page.path_name.clone(),
                });
            }
        }

        for issue in &issues {
            if issue.is_error() {
                tracing::error!(course = %self.name(), "{issue}");
            } else {
                tracing::warn!(course = %self.name(), "{issue}");
            }
        }

        Ok(issues)
    }
}
