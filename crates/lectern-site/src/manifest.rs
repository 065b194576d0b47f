//! Serializable listing of every resolved page.
//!
//! The manifest is what a static build would generate metadata from: for
//! each course, its index page and each distinct page with its resolved
//! URL, title and identifier.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::Serialize;

use crate::course::Course;
use crate::page::join_url;

/// Every course of the site, in configuration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub courses: Vec<ManifestCourse>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ManifestCourse {
    pub name: String,
    pub index: ManifestLink,
    pub pages: Vec<ManifestPage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ManifestLink {
    pub href: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ManifestPage {
    pub href: String,
    pub title: String,
    pub identifier: String,
}

impl Manifest {
    /// Build the manifest, resolving courses and pages in parallel.
    ///
    /// Each path name appears once, at its first position in the sources
    /// list, with the entry the registry resolves to.
    pub(crate) fn build(courses: &[Course]) -> Self {
        let courses = courses.par_iter().map(ManifestCourse::build).collect();
        Self { courses }
    }
}

impl ManifestCourse {
    fn build(course: &Course) -> Self {
        let registry = course.registry();

        let mut seen = HashSet::new();
        let path_names: Vec<&str> = registry
            .pages()
            .iter()
            .map(|page| page.path_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect();

        let pages = path_names
            .par_iter()
            .filter_map(|path_name| {
                let entry = registry.resolve_by_path(path_name).ok()?;
                Some(ManifestPage {
                    href: join_url(course.root_path(), path_name),
                    title: entry.page_title.clone(),
                    identifier: entry.named_identifier.clone(),
                })
            })
            .collect();

        Self {
            name: course.name().to_owned(),
            index: ManifestLink {
                href: course.root_path().to_owned(),
                title: course.index_title().to_owned(),
            },
            pages,
        }
    }
}
