//! Bidirectional page registry.
//!
//! Indexes a course's pages by URL path name and by named identifier so that
//! a page can render its own title from its path, and prose can link to
//! another page by stable name without hard-coding its URL.
//!
//! # Architecture
//!
//! Descriptors are kept in a flat `Vec` in source order. Both indexes are
//! built from that list in a single pass and never mutated afterward:
//! - O(1) path name lookups via `by_path` `HashMap`
//! - O(1) identifier lookups via `by_identifier` `HashMap`
//!
//! A repeated key overwrites the earlier entry (last-write-wins). Each
//! overwrite is logged and kept as a [`Duplicate`] report.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::descriptor::{IdentifierEntry, PageDescriptor, PathEntry};
use crate::error::{LookupError, RegistryError};
use crate::sources::SourcesFile;

/// Which index a duplicate key was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuplicateKey {
    PathName,
    NamedIdentifier,
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathName => f.write_str("pathName"),
            Self::NamedIdentifier => f.write_str("namedIdentifier"),
        }
    }
}

/// A key that appeared more than once in the sources list.
///
/// Positions are zero-based indexes into [`PageRegistry::pages`]. The entry
/// at `overridden_by` is the one the registry resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Duplicate {
    pub kind: DuplicateKey,
    pub key: String,
    pub first: usize,
    pub overridden_by: usize,
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate {} '{}': page #{} overrides page #{}",
            self.kind,
            self.key,
            self.overridden_by + 1,
            self.first + 1
        )
    }
}

/// Index slot remembering which record produced the entry.
#[derive(Debug)]
struct Slot<T> {
    position: usize,
    entry: T,
}

/// Immutable lookup tables between path names, identifiers and titles.
///
/// Built once from a list of [`PageDescriptor`]s. A `PageRegistry` value is
/// always fully built; construction either succeeds completely or returns
/// an error.
#[derive(Debug)]
pub struct PageRegistry {
    pages: Vec<PageDescriptor>,
    by_path: HashMap<String, Slot<PathEntry>>,
    by_identifier: HashMap<String, Slot<IdentifierEntry>>,
    duplicates: Vec<Duplicate>,
}

impl PageRegistry {
    /// Build a registry from descriptors in source order.
    ///
    /// Duplicate path names or identifiers do not fail construction; the
    /// later record wins and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyField`] if any record has an empty
    /// required field.
    pub fn new(pages: Vec<PageDescriptor>) -> Result<Self, RegistryError> {
        if let Some((index, field)) = pages
            .iter()
            .enumerate()
            .find_map(|(i, page)| page.first_empty_field().map(|field| (i, field)))
        {
            return Err(RegistryError::EmptyField { index, field });
        }

        let mut by_path = HashMap::with_capacity(pages.len());
        let mut by_identifier = HashMap::with_capacity(pages.len());
        let mut duplicates = Vec::new();

        for (position, page) in pages.iter().enumerate() {
            let previous = by_path.insert(
                page.path_name.clone(),
                Slot {
                    position,
                    entry: PathEntry::from(page),
                },
            );
            if let Some(previous) = previous {
                duplicates.push(Duplicate {
                    kind: DuplicateKey::PathName,
                    key: page.path_name.clone(),
                    first: previous.position,
                    overridden_by: position,
                });
            }

            let previous = by_identifier.insert(
                page.named_identifier.clone(),
                Slot {
                    position,
                    entry: IdentifierEntry::from(page),
                },
            );
            if let Some(previous) = previous {
                duplicates.push(Duplicate {
                    kind: DuplicateKey::NamedIdentifier,
                    key: page.named_identifier.clone(),
                    first: previous.position,
                    overridden_by: position,
                });
            }
        }

        for duplicate in &duplicates {
            tracing::warn!(
                kind = %duplicate.kind,
                key = %duplicate.key,
                first = duplicate.first + 1,
                overridden_by = duplicate.overridden_by + 1,
                "Duplicate page key: later entry wins"
            );
        }

        tracing::debug!(
            pages = pages.len(),
            paths = by_path.len(),
            identifiers = by_identifier.len(),
            "Page registry built"
        );

        Ok(Self {
            pages,
            by_path,
            by_identifier,
            duplicates,
        })
    }

    /// Build a registry from a sources document.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed YAML or missing keys and
    /// [`RegistryError::EmptyField`] for empty values.
    pub fn from_yaml(content: &str) -> Result<Self, RegistryError> {
        Self::new(SourcesFile::parse(content)?.pages)
    }

    /// Build a registry from a sources file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`PageRegistry::from_yaml`].
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        tracing::debug!(path = %path.display(), "Loading page sources");
        Self::new(SourcesFile::read(path)?.pages)
    }

    /// Resolve a page's title and identifier from its path name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::PathNotFound`] if no page has this path name.
    pub fn resolve_by_path(&self, path_name: &str) -> Result<&PathEntry, LookupError> {
        self.by_path
            .get(path_name)
            .map(|slot| &slot.entry)
            .ok_or_else(|| LookupError::PathNotFound(path_name.to_owned()))
    }

    /// Resolve a page's path name and title from its named identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::IdentifierNotFound`] if no page has this identifier.
    pub fn resolve_by_identifier(
        &self,
        named_identifier: &str,
    ) -> Result<&IdentifierEntry, LookupError> {
        self.by_identifier
            .get(named_identifier)
            .map(|slot| &slot.entry)
            .ok_or_else(|| LookupError::IdentifierNotFound(named_identifier.to_owned()))
    }

    /// Descriptors in source order, including overridden duplicates.
    #[must_use]
    pub fn pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    /// Duplicate keys found while building, in source order.
    #[must_use]
    pub fn duplicates(&self) -> &[Duplicate] {
        &self.duplicates
    }

    /// Check whether a path name is registered.
    #[must_use]
    pub fn contains_path(&self, path_name: &str) -> bool {
        self.by_path.contains_key(path_name)
    }

    /// Number of descriptors in the sources list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Serialize the sources list back to YAML in source order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, RegistryError> {
        SourcesFile {
            pages: self.pages.clone(),
        }
        .to_yaml()
    }
}
