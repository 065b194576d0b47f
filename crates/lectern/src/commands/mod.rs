//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod list;
pub(crate) mod manifest;
pub(crate) mod resolve;

pub(crate) use check::CheckArgs;
pub(crate) use list::ListArgs;
pub(crate) use manifest::ManifestArgs;
pub(crate) use resolve::ResolveArgs;

use lectern_config::Config;
use lectern_site::{Course, SiteError, SiteInfo};

/// Load a single configured course without reading the others.
pub(crate) fn load_course(config: &Config, name: &str) -> Result<Course, SiteError> {
    let course = config
        .course(name)
        .ok_or_else(|| SiteError::UnknownCourse(name.to_owned()))?;
    let info = SiteInfo {
        author: config.site.author.clone(),
        email: config.site.email.clone(),
    };
    Course::load(course, info)
}
