//! `lectern check` command implementation.

use std::path::Path;

use clap::Args;
use lectern_config::{CliSettings, Config};
use lectern_site::{ContentIssue, Site};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Fail when a sources file repeats a path name or identifier.
    #[arg(long)]
    strict: bool,

    /// File that marks a directory as a page (overrides config).
    #[arg(long)]
    page_file: Option<String>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if any course fails to load or has unregistered
    /// page directories.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            strict_duplicates: self.strict.then_some(true),
            page_file: self.page_file,
        };
        let config = Config::load(config_path, Some(&cli_settings))?;
        let site = Site::load(&config)?;

        let mut errors = 0;
        for course in site.courses() {
            output.info(&format!(
                "{}: {} page(s) from {}",
                course.name(),
                course.registry().len(),
                course.content_dir().display()
            ));

            for duplicate in course.registry().duplicates() {
                output.warning(&format!("  warning: {duplicate}"));
            }

            let issues = course.check_content(&config.registry.page_file)?;
            errors += report_issues(&output, &issues);
        }

        if errors > 0 {
            return Err(CliError::Validation(format!(
                "{errors} unregistered page(s) found"
            )));
        }

        output.success("All courses OK");
        Ok(())
    }
}

/// Print content issues, returning how many are errors.
fn report_issues(output: &Output, issues: &[ContentIssue]) -> usize {
    let mut errors = 0;
    for issue in issues {
        if issue.is_error() {
            errors += 1;
            output.error(&format!("  error: {issue}"));
        } else {
            output.warning(&format!("  warning: {issue}"));
        }
    }
    errors
}
