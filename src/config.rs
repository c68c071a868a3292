//! Configuration for the Cosmic Blog
//!
//! Settings come from three layers: built-in defaults, an optional INI file
//! and the command line, with later layers winning.
//!
//! ```ini
//! [blog]
//! posts = 30
//! archive = 10000
//! seed = 42
//! dark_mode = true
//! ```

use crate::cmd_args::CommandLineArgs;
use anyhow::{bail, Context, Result};
use ini::{Ini, Properties};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "~/.cosmicblog/config";

/// Environment variable name for overriding the configuration path
pub const CONFIG_PATH_ENV_VAR: &str = "COSMICBLOG_CONFIG_PATH";

/// Default log file path; the terminal itself belongs to the UI
pub const DEFAULT_LOG_PATH: &str = "~/.cosmicblog/cosmicblog.log";

/// Environment variable name for overriding the log file path
pub const LOG_PATH_ENV_VAR: &str = "COSMICBLOG_LOG_FILE";

/// Environment variable holding the log filter (e.g. `debug`, `cosmicblog=trace`)
pub const LOG_LEVEL_ENV_VAR: &str = "COSMICBLOG_LOG";

pub const DEFAULT_POST_COUNT: usize = 30;
pub const DEFAULT_ARCHIVE_COUNT: usize = 10_000;

const BLOG_SECTION: &str = "blog";

/// Get the configuration file path, checking environment variable first, then falling back to default
pub fn get_config_path() -> String {
    std::env::var_os(CONFIG_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Get the log file path, checking environment variable first, then falling back to default
pub fn get_log_path() -> String {
    std::env::var_os(LOG_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_LOG_PATH.to_string())
}

/// Expand `~` and environment variables in a path
pub fn expand_path(path: &str) -> Result<PathBuf> {
    let expanded =
        shellexpand::full(path).with_context(|| format!("Failed to expand path '{path}'"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Open the log file for appending, creating it and its directory if needed
///
/// Earlier sessions' logs are kept.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Values read from the `[blog]` section; absent keys stay `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub posts: Option<usize>,
    pub archive: Option<usize>,
    pub seed: Option<u64>,
    pub dark_mode: Option<bool>,
}

impl FileConfig {
    /// Load from `path`; a missing file yields an empty config
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No configuration file at {}", path.display());
            return Ok(Self::default());
        }
        let ini = Ini::load_from_file(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_ini(&ini)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let ini = Ini::load_from_str(text).context("Failed to parse configuration")?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self> {
        let Some(section) = ini.section(Some(BLOG_SECTION)) else {
            return Ok(Self::default());
        };
        Ok(Self {
            posts: parse_key(section, "posts")?,
            archive: parse_key(section, "archive")?,
            seed: parse_key(section, "seed")?,
            dark_mode: parse_flag(section, "dark_mode")?,
        })
    }
}

fn parse_key<T: FromStr>(section: &Properties, key: &str) -> Result<Option<T>> {
    match section.get(key).map(str::trim) {
        None => Ok(None),
        Some(value) => match value.parse() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => bail!("invalid value '{value}' for key '{key}' in [{BLOG_SECTION}]"),
        },
    }
}

fn parse_flag(section: &Properties, key: &str) -> Result<Option<bool>> {
    match section.get(key).map(|value| value.trim().to_ascii_lowercase()) {
        None => Ok(None),
        Some(value) => match value.as_str() {
            "true" | "yes" | "on" | "1" => Ok(Some(true)),
            "false" | "no" | "off" | "0" => Ok(Some(false)),
            _ => bail!("invalid value '{value}' for key '{key}' in [{BLOG_SECTION}]"),
        },
    }
}

/// Effective startup settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogSettings {
    pub post_count: usize,
    pub archive_count: usize,
    pub seed: Option<u64>,
    pub dark_mode: bool,
    pub seed_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for BlogSettings {
    fn default() -> Self {
        Self {
            post_count: DEFAULT_POST_COUNT,
            archive_count: DEFAULT_ARCHIVE_COUNT,
            seed: None,
            dark_mode: false,
            seed_file: None,
            verbose: false,
        }
    }
}

impl BlogSettings {
    /// Read the configuration file named by the arguments (or the
    /// environment, or the default path) and merge the arguments over it
    pub fn resolve(args: &CommandLineArgs) -> Result<Self> {
        let config_path = match args.config() {
            Some(path) => path.to_string(),
            None => get_config_path(),
        };
        let file = FileConfig::load(&expand_path(&config_path)?)?;
        Ok(Self::merge(args, &file))
    }

    /// Command line over file over defaults
    pub fn merge(args: &CommandLineArgs, file: &FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            post_count: args.posts().or(file.posts).unwrap_or(defaults.post_count),
            archive_count: args
                .archive()
                .or(file.archive)
                .unwrap_or(defaults.archive_count),
            seed: args.seed().or(file.seed),
            dark_mode: args.dark() || file.dark_mode.unwrap_or(defaults.dark_mode),
            seed_file: args.seed_file().cloned(),
            verbose: args.verbose(),
        }
    }
}
