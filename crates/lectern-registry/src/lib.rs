//! Page registry for lecture-note sites.
//!
//! This crate provides:
//! - [`PageDescriptor`]: one published page (path segment, title, identifier)
//! - [`PageRegistry`]: immutable lookup indexes by path name and by named identifier
//! - Sources file parsing (`sources.yaml`) via [`PageRegistry::from_yaml`]
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use lectern_registry::PageRegistry;
//!
//! let registry = PageRegistry::from_yaml(
//!     "pages:\n  - pathName: pointers\n    pageTitle: Pointers\n    namedIdentifier: pointers\n",
//! )?;
//!
//! // Own title for page metadata
//! let entry = registry.resolve_by_path("pointers")?;
//! assert_eq!(entry.page_title, "Pointers");
//!
//! // Cross-link target by stable name
//! let target = registry.resolve_by_identifier("pointers")?;
//! assert_eq!(target.path_name, "pointers");
//! # Ok(())
//! # }
//! ```

mod descriptor;
mod error;
mod registry;
mod sources;

pub use descriptor::{DescriptorField, IdentifierEntry, PageDescriptor, PathEntry};
pub use error::{LookupError, RegistryError};
pub use registry::{Duplicate, DuplicateKey, PageRegistry};
pub use sources::SourcesFile;
