//! Site error types.

use std::path::PathBuf;

use lectern_registry::{Duplicate, LookupError, RegistryError};

/// Error assembling a site or resolving one of its pages.
///
/// Every variant names the course it came from so a failed build points at
/// the offending sources file or key.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A course's page registry could not be built.
    #[error("Course '{course}': {source}")]
    Registry {
        course: String,
        #[source]
        source: RegistryError,
    },
    /// A path name or identifier did not resolve.
    #[error("Course '{course}': {source}")]
    Lookup {
        course: String,
        #[source]
        source: LookupError,
    },
    /// Duplicate keys found while strict duplicate handling is enabled.
    #[error("Course '{course}': {}", describe_duplicates(.duplicates))]
    DuplicateKeys {
        course: String,
        duplicates: Vec<Duplicate>,
    },
    /// No course with this name is configured.
    #[error("Unknown course '{0}'")]
    UnknownCourse(String),
    /// Content directory could not be scanned.
    #[error("Failed to scan {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn describe_duplicates(duplicates: &[Duplicate]) -> String {
    let first = duplicates.first().map(ToString::to_string).unwrap_or_default();
    format!("{} duplicate page key(s), first: {first}", duplicates.len())
}

impl SiteError {
    pub(crate) fn lookup(course: &str, source: LookupError) -> Self {
        Self::Lookup {
            course: course.to_owned(),
            source,
        }
    }
}
