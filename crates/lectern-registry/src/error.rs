//! Registry error types.

use std::path::PathBuf;

use crate::descriptor::DescriptorField;

/// Error building a registry from its sources.
///
/// Any of these prevents the registry from being constructed; there is no
/// partially built registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Sources file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Sources document is not valid YAML or a record is missing a field.
    #[error("Invalid sources{}: {source}", origin(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },
    /// A record has an empty required field.
    #[error("Page #{} has an empty `{field}`", .index + 1)]
    EmptyField {
        /// Zero-based position of the record in the sources list.
        index: usize,
        field: DescriptorField,
    },
}

fn origin(path: Option<&std::path::Path>) -> String {
    path.map(|p| format!(" in {}", p.display())).unwrap_or_default()
}

/// Look-up key absent from the registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("No page registered with path name '{0}'")]
    PathNotFound(String),
    #[error("No page registered with identifier '{0}'")]
    IdentifierNotFound(String),
}

impl LookupError {
    /// The key that failed to resolve.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::PathNotFound(key) | Self::IdentifierNotFound(key) => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_message_is_one_based() {
        let err = RegistryError::EmptyField {
            index: 0,
            field: DescriptorField::PageTitle,
        };
        assert_eq!(err.to_string(), "Page #1 has an empty `pageTitle`");
    }

    #[test]
    fn test_lookup_error_names_key() {
        let err = LookupError::IdentifierNotFound("inheritance".to_owned());
        assert_eq!(err.key(), "inheritance");
        assert!(err.to_string().contains("'inheritance'"));

        let err = LookupError::PathNotFound("nonexistent".to_owned());
        assert_eq!(err.key(), "nonexistent");
        assert!(err.to_string().contains("path name"));
    }

    #[test]
    fn test_parse_error_mentions_path_when_known() {
        let source = serde_yaml::from_str::<u32>("[").unwrap_err();
        let err = RegistryError::Parse {
            path: Some(PathBuf::from("notes/sources.yaml")),
            source,
        };
        assert!(err.to_string().contains("notes/sources.yaml"));
    }
}
