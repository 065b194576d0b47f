//! `lectern manifest` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use lectern_config::Config;
use lectern_site::Site;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the manifest command.
#[derive(Args)]
pub(crate) struct ManifestArgs {
    /// Write the manifest to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ManifestArgs {
    /// Execute the manifest command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site fails to load or the file cannot be written.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = Config::load(config_path, None)?;
        let site = Site::load(&config)?;
        let json = serde_json::to_string_pretty(&site.manifest())?;

        let output = Output::new();
        match self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, format!("{json}\n"))?;
                output.success(&format!("Manifest written to {}", path.display()));
            }
            None => output.data(&json),
        }
        Ok(())
    }
}
