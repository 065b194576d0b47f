//! Configuration management for Lectern.
//!
//! Parses `lectern.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.author`
//! - `site.email`
//! - `courses[].root_path`

mod expand;

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override strict duplicate handling.
    pub strict_duplicates: Option<bool>,
    /// Override the page file name used by the content check.
    pub page_file: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lectern.toml";

/// Title used for a course index page when none is configured.
const DEFAULT_INDEX_TITLE: &str = "Lecture Notes";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide author information.
    pub site: SiteConfig,
    /// Registry loading configuration.
    pub registry: RegistryConfig,
    /// Courses as parsed from TOML (paths are relative strings).
    courses: Vec<CourseConfigRaw>,

    /// Resolved courses (set after loading).
    #[serde(skip)]
    pub courses_resolved: Vec<CourseConfig>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Author shown in page title blocks.
    pub author: Option<String>,
    /// Contact email shown next to the author.
    pub email: Option<String>,
}

/// Registry configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Default sources file name inside each course content directory.
    pub sources_file: String,
    /// Fail instead of warning when a path name or identifier repeats.
    pub strict_duplicates: bool,
    /// File whose presence marks a content subdirectory as a page.
    pub page_file: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            sources_file: "sources.yaml".to_owned(),
            strict_duplicates: false,
            page_file: "page.tsx".to_owned(),
        }
    }
}

/// Raw course configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize)]
struct CourseConfigRaw {
    name: String,
    root_path: String,
    content_dir: Option<String>,
    sources: Option<String>,
    index_title: Option<String>,
}

/// Resolved course configuration with absolute paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseConfig {
    /// Course name (e.g., "cs-274").
    pub name: String,
    /// URL path of the course's lecture-notes root (e.g., "/cs-274/lecture-notes").
    pub root_path: String,
    /// Directory holding one subdirectory per page.
    pub content_dir: PathBuf,
    /// Sources file listing the course's pages.
    pub sources_path: PathBuf,
    /// Title of the course index page.
    pub index_title: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.author`").
        field: String,
        /// Error message (e.g., "${`LECTERN_AUTHOR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL root path to be absolute and without a trailing slash.
///
/// `/` itself is allowed for a course served at the site root.
fn require_root_path(value: &str, field: &str) -> Result<(), ConfigError> {
    if !value.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start with '/'"
        )));
    }
    if value.len() > 1 && value.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must not end with '/'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lectern.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the configuration with CLI overrides applied is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        // Validate after overrides so CLI values get the same checks
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(strict) = settings.strict_duplicates {
            self.registry.strict_duplicates = strict;
        }
        if let Some(page_file) = &settings.page_file {
            self.registry.page_file.clone_from(page_file);
        }
    }

    /// Find a resolved course by name.
    #[must_use]
    pub fn course(&self, name: &str) -> Option<&CourseConfig> {
        self.courses_resolved.iter().find(|c| c.name == name)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    ///
    /// The default is a single `lecture-notes` course whose pages live
    /// directly under `base`.
    fn default_with_base(base: &Path) -> Self {
        let registry = RegistryConfig::default();
        let course = CourseConfig {
            name: "lecture-notes".to_owned(),
            root_path: "/lecture-notes".to_owned(),
            content_dir: base.to_path_buf(),
            sources_path: base.join(&registry.sources_file),
            index_title: DEFAULT_INDEX_TITLE.to_owned(),
        };
        Self {
            site: SiteConfig::default(),
            registry,
            courses: Vec::new(),
            courses_resolved: vec![course],
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_registry()?;
        self.validate_courses()?;
        Ok(())
    }

    /// Validate registry configuration.
    fn validate_registry(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.registry.sources_file, "registry.sources_file")?;
        require_non_empty(&self.registry.page_file, "registry.page_file")?;
        Ok(())
    }

    /// Validate course configuration.
    fn validate_courses(&self) -> Result<(), ConfigError> {
        if self.courses_resolved.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[courses]] entry is required".to_owned(),
            ));
        }

        let mut seen = HashSet::new();
        for (i, course) in self.courses_resolved.iter().enumerate() {
            require_non_empty(&course.name, &format!("courses[{i}].name"))?;
            require_root_path(&course.root_path, &format!("courses[{i}].root_path"))?;
            if !seen.insert(course.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "course '{}' is defined more than once",
                    course.name
                )));
            }
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref author) = self.site.author {
            self.site.author = Some(expand::expand_env(author, "site.author")?);
        }
        if let Some(ref email) = self.site.email {
            self.site.email = Some(expand::expand_env(email, "site.email")?);
        }

        for (i, course) in self.courses.iter_mut().enumerate() {
            course.root_path =
                expand::expand_env(&course.root_path, &format!("courses[{i}].root_path"))?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// `content_dir` defaults to the course name; `sources` is relative to
    /// the content directory and defaults to `registry.sources_file`.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.courses_resolved = self
            .courses
            .iter()
            .map(|raw| {
                let content_dir = config_dir.join(raw.content_dir.as_deref().unwrap_or(&raw.name));
                let sources_path = content_dir.join(
                    raw.sources
                        .as_deref()
                        .unwrap_or(&self.registry.sources_file),
                );
                CourseConfig {
                    name: raw.name.clone(),
                    root_path: raw.root_path.clone(),
                    content_dir,
                    sources_path,
                    index_title: raw
                        .index_title
                        .clone()
                        .unwrap_or_else(|| DEFAULT_INDEX_TITLE.to_owned()),
                }
            })
            .collect();
    }
}
