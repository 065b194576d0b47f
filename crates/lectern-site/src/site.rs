//! Site assembly from configuration.
//!
//! Provides [`Site`], which owns one [`Course`] per configured course.
//!
//! # Thread Safety
//!
//! `Site` has no interior mutability. Once [`Site::load`] returns, it can be
//! shared as `&Site` or `Arc<Site>` across any number of page workers
//! without locking. There is no reload path: picking up changed sources
//! means loading a new `Site` and swapping the reference.

use lectern_config::Config;
use rayon::prelude::*;

use crate::course::Course;
use crate::error::SiteError;
use crate::manifest::Manifest;
use crate::page::SiteInfo;

/// Every configured course with its page registry.
#[derive(Debug)]
pub struct Site {
    info: SiteInfo,
    courses: Vec<Course>,
}

impl Site {
    /// Create a site from already built courses.
    #[must_use]
    pub fn new(info: SiteInfo, courses: Vec<Course>) -> Self {
        Self { info, courses }
    }

    /// Load every configured course.
    ///
    /// Sources files are read in parallel; courses keep configuration order.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Registry`] for the first course whose sources
    /// cannot be loaded, or [`SiteError::DuplicateKeys`] when
    /// `registry.strict_duplicates` is set and a course repeats a key.
    pub fn load(config: &Config) -> Result<Self, SiteError> {
        let info = SiteInfo {
            author: config.site.author.clone(),
            email: config.site.email.clone(),
        };

        let courses = config
            .courses_resolved
            .par_iter()
            .map(|course| Course::load(course, info.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        if config.registry.strict_duplicates
            && let Some(course) = courses.iter().find(|c| !c.registry().duplicates().is_empty())
        {
            return Err(SiteError::DuplicateKeys {
                course: course.name().to_owned(),
                duplicates: course.registry().duplicates().to_vec(),
            });
        }

        tracing::info!(
            courses = courses.len(),
            pages = courses.iter().map(|c| c.registry().len()).sum::<usize>(),
            "Site loaded"
        );

        Ok(Self::new(info, courses))
    }

    #[must_use]
    pub fn info(&self) -> &SiteInfo {
        &self.info
    }

    /// Courses in configuration order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Find a course by name.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::UnknownCourse`] if no course has this name.
    pub fn course(&self, name: &str) -> Result<&Course, SiteError> {
        self.courses
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| SiteError::UnknownCourse(name.to_owned()))
    }

    /// Resolved listing of every course and page.
    #[must_use]
    pub fn manifest(&self) -> Manifest {
        Manifest::build(&self.courses)
    }
}
