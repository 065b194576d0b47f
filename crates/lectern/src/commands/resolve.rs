//! `lectern resolve` command implementation.

use std::path::Path;

use clap::{ArgGroup, Args};
use lectern_config::Config;
use lectern_registry::LookupError;
use lectern_site::{Course, SiteError};
use serde::Serialize;

use super::load_course;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
#[command(group(ArgGroup::new("key").required(true).args(["path", "id"])))]
pub(crate) struct ResolveArgs {
    /// Course to resolve in.
    #[arg(long)]
    course: String,

    /// Resolve a page by its path name.
    #[arg(long)]
    path: Option<String>,

    /// Resolve a page by its named identifier.
    #[arg(long)]
    id: Option<String>,
}

/// Resolved page, as printed.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Resolved {
    href: String,
    path_name: String,
    page_title: String,
    named_identifier: String,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the course is unknown or the key is not registered.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = Config::load(config_path, None)?;
        let course = load_course(&config, &self.course)?;

        let resolved = match (&self.path, &self.id) {
            (Some(path_name), _) => by_path(&course, path_name)?,
            (None, Some(identifier)) => by_identifier(&course, identifier)?,
            (None, None) => {
                return Err(CliError::Validation(
                    "Either --path or --id is required".to_owned(),
                ));
            }
        };

        let output = Output::new();
        output.highlight(&resolved.page_title);
        output.entry(&resolved.href, &serde_json::to_string(&resolved)?);
        Ok(())
    }
}

fn by_path(course: &Course, path_name: &str) -> Result<Resolved, SiteError> {
    let entry = course
        .registry()
        .resolve_by_path(path_name)
        .map_err(|source| lookup_error(course, source))?;
    Ok(Resolved {
        href: course.page_context(path_name).href(),
        path_name: path_name.to_owned(),
        page_title: entry.page_title.clone(),
        named_identifier: entry.named_identifier.clone(),
    })
}

fn by_identifier(course: &Course, identifier: &str) -> Result<Resolved, SiteError> {
    let entry = course
        .registry()
        .resolve_by_identifier(identifier)
        .map_err(|source| lookup_error(course, source))?;
    Ok(Resolved {
        href: course.page_context(&entry.path_name).href(),
        path_name: entry.path_name.clone(),
        page_title: entry.page_title.clone(),
        named_identifier: identifier.to_owned(),
    })
}

fn lookup_error(course: &Course, source: LookupError) -> SiteError {
    SiteError::Lookup {
        course: course.name().to_owned(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use lectern_config::CourseConfig;
    use lectern_registry::{PageDescriptor, PageRegistry};
    use lectern_site::SiteInfo;
    use pretty_assertions::assert_eq;

    use super::*;

    fn course() -> Course {
        let config = CourseConfig {
            name: "cs-162".to_owned(),
            root_path: "/cs-162/lecture-notes".to_owned(),
            content_dir: PathBuf::from("/content"),
            sources_path: PathBuf::from("/content/sources.yaml"),
            index_title: "CS 162 Lecture Notes".to_owned(),
        };
        let registry = PageRegistry::new(vec![PageDescriptor::new(
            "exceptions",
            "Exceptions",
            "exception-handling",
        )])
        .unwrap();
        Course::new(&config, registry, SiteInfo::default())
    }

    #[test]
    fn test_resolve_by_path() {
        assert_eq!(
            by_path(&course(), "exceptions").unwrap(),
            Resolved {
                href: "/cs-162/lecture-notes/exceptions".to_owned(),
                path_name: "exceptions".to_owned(),
                page_title: "Exceptions".to_owned(),
                named_identifier: "exception-handling".to_owned(),
            }
        );
    }

    #[test]
    fn test_resolve_by_identifier() {
        let resolved = by_identifier(&course(), "exception-handling").unwrap();
        assert_eq!(resolved.path_name, "exceptions");
        assert_eq!(resolved.href, "/cs-162/lecture-notes/exceptions");
    }

    #[test]
    fn test_resolve_by_identifier_keeps_registered_path_name() {
        let config = CourseConfig {
            name: "cs-274".to_owned(),
            root_path: "/cs-274/lecture-notes".to_owned(),
            content_dir: PathBuf::from("/content"),
            sources_path: PathBuf::from("/content/sources.yaml"),
            index_title: "CS 274 Lecture Notes".to_owned(),
        };
        let registry =
            PageRegistry::new(vec![PageDescriptor::new("week-1/intro", "Intro", "intro")]).unwrap();
        let course = Course::new(&config, registry, SiteInfo::default());

        let by_id = by_identifier(&course, "intro").unwrap();
        let by_path_name = by_path(&course, "week-1/intro").unwrap();
        assert_eq!(by_id.path_name, "week-1/intro");
        assert_eq!(by_id, by_path_name);
    }

    #[test]
    fn test_resolve_miss_names_the_key() {
        let err = by_identifier(&course(), "exceptions").unwrap_err();
        assert!(err.to_string().contains("exceptions"));

        let err = by_path(&course(), "exception-handling").unwrap_err();
        assert!(err.to_string().contains("exception-handling"));
    }
}
