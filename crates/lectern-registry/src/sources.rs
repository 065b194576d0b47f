//! Sources file (`sources.yaml`) parsing.
//!
//! A sources file lists a course's pages in publication order:
//!
//! ```yaml
//! pages:
//!   - pathName: hello-world
//!     pageTitle: Hello, World!
//!     namedIdentifier: hello-world
//! ```

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::descriptor::PageDescriptor;
use crate::error::RegistryError;

/// Parsed sources document.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesFile {
    /// Page descriptors in source order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pages: Vec<PageDescriptor>,
}

/// `pages:` with no items deserializes as null.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<PageDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PageDescriptor>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SourcesFile {
    /// Parse a sources document.
    ///
    /// Uses serde_yaml for correct handling of all YAML value styles.
    /// Empty or whitespace-only content parses to an empty page list.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] if the YAML is malformed or a record
    /// is missing a required key.
    pub fn parse(content: &str) -> Result<Self, RegistryError> {
        Self::parse_with_origin(content, None)
    }

    /// Read and parse a sources file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read and
    /// [`RegistryError::Parse`] if its content is invalid.
    pub fn read(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_with_origin(&content, Some(path))
    }

    /// Serialize back to YAML, preserving page order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, RegistryError> {
        serde_yaml::to_string(self).map_err(|source| RegistryError::Parse { path: None, source })
    }

    fn parse_with_origin(content: &str, path: Option<&Path>) -> Result<Self, RegistryError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let raw: Option<Self> =
            serde_yaml::from_str(trimmed).map_err(|source| RegistryError::Parse {
                path: path.map(Path::to_path_buf),
                source,
            })?;
        Ok(raw.unwrap_or_default())
    }
}
