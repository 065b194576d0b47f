//! `lectern list` command implementation.

use std::fmt::Write as _;
use std::path::Path;

use clap::{Args, ValueEnum};
use lectern_config::Config;
use lectern_site::{Course, CourseIndex, Site};
use serde::Serialize;

use super::load_course;
use crate::error::CliError;
use crate::output::Output;

/// Output format for listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Only list this course.
    #[arg(long)]
    course: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: Format,
}

/// Serialized form of one course listing.
#[derive(Serialize)]
struct CourseListing<'a> {
    name: &'a str,
    index: CourseIndex,
}

impl<'a> From<&'a Course> for CourseListing<'a> {
    fn from(course: &'a Course) -> Self {
        Self {
            name: course.name(),
            index: course.index(),
        }
    }
}

impl ListArgs {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or a sources file fails to load.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = Config::load(config_path, None)?;
        let rendered = match &self.course {
            Some(name) => {
                let course = load_course(&config, name)?;
                render(std::slice::from_ref(&course), self.format)?
            }
            None => render(Site::load(&config)?.courses(), self.format)?,
        };
        Output::new().data(&rendered);
        Ok(())
    }
}

/// Render course listings in the requested format.
fn render(courses: &[Course], format: Format) -> Result<String, CliError> {
    let listings: Vec<CourseListing<'_>> = courses.iter().map(CourseListing::from).collect();
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(&listings)?),
        Format::Yaml => Ok(serde_yaml::to_string(&listings)?),
        Format::Text => Ok(render_text(&listings)),
    }
}

fn render_text(listings: &[CourseListing<'_>]) -> String {
    let mut out = String::new();
    for listing in listings {
        let _ = writeln!(out, "{} ({})", listing.name, listing.index.metadata.title);
        for (i, entry) in listing.index.entries.iter().enumerate() {
            let _ = writeln!(out, "  {:>3}. {}  {}", i + 1, entry.title, entry.href);
        }
    }
    out
}
