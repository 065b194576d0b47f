//! Page descriptor types.
//!
//! A [`PageDescriptor`] is the source-of-truth record for one published page.
//! The two index value types, [`PathEntry`] and [`IdentifierEntry`], hold the
//! remaining fields once a descriptor is keyed by path name or by identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Static record describing one publishable page.
///
/// Serialized with camelCase keys to match `sources.yaml`:
///
/// ```yaml
/// - pathName: encapsulation
///   pageTitle: Encapsulation
///   namedIdentifier: encapsulation
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    /// URL path segment (e.g., "pointers").
    pub path_name: String,
    /// Human-readable title shown in navigation and metadata.
    pub page_title: String,
    /// Stable logical name used for cross-linking.
    pub named_identifier: String,
}

impl PageDescriptor {
    /// Create a descriptor from its three fields.
    #[must_use]
    pub fn new(
        path_name: impl Into<String>,
        page_title: impl Into<String>,
        named_identifier: impl Into<String>,
    ) -> Self {
        Self {
            path_name: path_name.into(),
            page_title: page_title.into(),
            named_identifier: named_identifier.into(),
        }
    }

    /// Return the first required field that is empty or whitespace-only.
    pub(crate) fn first_empty_field(&self) -> Option<DescriptorField> {
        [
            (DescriptorField::PathName, &self.path_name),
            (DescriptorField::PageTitle, &self.page_title),
            (DescriptorField::NamedIdentifier, &self.named_identifier),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// Field of a [`PageDescriptor`], used in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptorField {
    /// `pathName`
    PathName,
    /// `pageTitle`
    PageTitle,
    /// `namedIdentifier`
    NamedIdentifier,
}

impl DescriptorField {
    /// Key as written in the sources file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PathName => "pathName",
            Self::PageTitle => "pageTitle",
            Self::NamedIdentifier => "namedIdentifier",
        }
    }
}

impl fmt::Display for DescriptorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value stored in the path index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathEntry {
    pub page_title: String,
    pub named_identifier: String,
}

/// Value stored in the identifier index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierEntry {
    pub path_name: String,
    pub page_title: String,
}

impl From<&PageDescriptor> for PathEntry {
    fn from(page: &PageDescriptor) -> Self {
        Self {
            page_title: page.page_title.clone(),
            named_identifier: page.named_identifier.clone(),
        }
    }
}

impl From<&PageDescriptor> for IdentifierEntry {
    fn from(page: &PageDescriptor) -> Self {
        Self {
            path_name: page.path_name.clone(),
            page_title: page.page_title.clone(),
        }
    }
}
