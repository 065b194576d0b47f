//! Course assembly and page resolution for Lectern.
//!
//! This crate provides:
//! - [`Site`]: every configured course, each with its own page registry
//! - [`Course`]: page metadata, cross-links and the course index
//! - [`PageContext`]: explicit identity handed to each rendering unit
//! - [`Manifest`]: serializable listing of every resolved page
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use lectern_config::Config;
//! use lectern_site::Site;
//!
//! let config = Config::load(None, None)?;
//! let site = Site::load(&config)?;
//!
//! let course = site.course("cs-274")?;
//! let ctx = course.page_context("pointers");
//!
//! // Metadata for the page being rendered
//! let meta = course.page_metadata(&ctx)?;
//!
//! // Link from this page to another by stable name
//! let link = course.link_from(&ctx, "arrays")?;
//! println!("{} -> {}", meta.title, link.href);
//! # Ok(())
//! # }
//! ```

mod content;
mod course;
mod error;
mod manifest;
mod page;
mod site;

pub use content::ContentIssue;
pub use course::Course;
pub use error::SiteError;
pub use manifest::{Manifest, ManifestCourse, ManifestLink, ManifestPage};
pub use page::{CourseIndex, CrossLink, IndexEntry, PageContext, PageMetadata, SiteInfo};
pub use site::Site;
