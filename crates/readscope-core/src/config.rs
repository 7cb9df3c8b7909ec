//! Layered configuration.
//!
//! Settings come from, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `~/.config/readscope/config.<ext>`
//! 3. `.readscope.<ext>` and `readscope.<ext>` in the nearest directory at or
//!    above the working directory, stopping at the repository root
//! 4. Files passed with `--config`
//! 5. `READSCOPE_*` environment variables
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`. When one directory holds
//! several files they are all merged in that extension order, dotfiles
//! first.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use readscope_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir().unwrap()).unwrap();
//! let (config, _sources) = ConfigLoader::new().with_project_search(&cwd).load().unwrap();
//! let options = config.analysis_options();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::DEFAULT_MAX_INPUT_BYTES;
use crate::analysis::AnalysisOptions;
use crate::error::{ConfigError, ConfigResult};

/// The configuration for readscope.
///
/// Threshold fields left unset fall back to [`AnalysisOptions::default`].
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for log files. Logs go to stderr only when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Sentences with more words than this are reported as complex.
    pub max_sentence_words: Option<usize>,
    /// Paragraphs with more words than this are flagged as long.
    pub max_paragraph_words: Option<usize>,
    /// Maximum number of complex sentences to report.
    pub max_complex_sentences: Option<usize>,
    /// Fail the `score` command when the Flesch-Kincaid grade exceeds this.
    pub max_grade: Option<f64>,
    /// Always strip markdown before scoring, regardless of file extension.
    pub strip_markdown: Option<bool>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Use `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored.
    pub disable_input_limit: bool,
}

impl Config {
    /// Analysis thresholds with unset fields filled from the defaults.
    pub fn analysis_options(&self) -> AnalysisOptions {
        let defaults = AnalysisOptions::default();
        AnalysisOptions {
            max_sentence_words: self
                .max_sentence_words
                .unwrap_or(defaults.max_sentence_words),
            max_paragraph_words: self
                .max_paragraph_words
                .unwrap_or(defaults.max_paragraph_words),
            max_complex_sentences: self
                .max_complex_sentences
                .unwrap_or(defaults.max_complex_sentences),
        }
    }

    /// The effective input size limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The files that fed a loaded [`Config`], so callers can report them
/// without searching again.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Config files from the nearest project directory, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// Per-user config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files named on the command line with `--config`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file whose values win: explicit, then project, then user.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .or(self.project_files.last())
            .map(Utf8PathBuf::as_path)
            .or(self.user_file.as_deref())
    }

    /// True when no config file was found anywhere.
    pub fn is_empty(&self) -> bool {
        self.user_file.is_none() && self.project_files.is_empty() && self.explicit_files.is_empty()
    }

    /// Every file, in the order it is merged (later wins).
    fn merge_order(&self) -> impl Iterator<Item = &Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
            .map(Utf8PathBuf::as_path)
    }
}

/// Recognized config file extensions, in merge order.
const FILE_FORMATS: &[&str] = &["toml", "yaml", "yml", "json"];

const APP_NAME: &str = "readscope";

/// Environment variables with this prefix override file settings.
const ENV_PREFIX: &str = "READSCOPE_";

/// Builder that finds config files and merges them into a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigLoader {
    search_from: Option<Utf8PathBuf>,
    user_config: bool,
    stop_at: Option<String>,
    extra_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// A loader that reads user config and stops project search at `.git`.
    pub fn new() -> Self {
        Self {
            search_from: None,
            user_config: true,
            stop_at: Some(".git".to_string()),
            extra_files: Vec::new(),
        }
    }

    /// Search for project config starting at `path` and walking up.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.search_from = Some(path.as_ref().to_path_buf());
        self
    }

    /// Include or skip the per-user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Stop the upward search at a directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.stop_at = Some(marker.into());
        self
    }

    /// Search all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.stop_at = None;
        self
    }

    /// Merge `path` after every discovered file. Later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.extra_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge defaults, discovered files and `READSCOPE_*` variables.
    ///
    /// Precedence, lowest first: defaults, user config, project config,
    /// explicit files, environment.
    #[tracing::instrument(skip(self), fields(search_from = ?self.search_from))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        Self::merge(sources)
    }

    /// Like [`load`](Self::load), but fails with [`ConfigError::NotFound`]
    /// when no config file exists.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        if sources.is_empty() {
            return Err(ConfigError::NotFound);
        }
        Self::merge(sources)
    }

    fn discover(&self) -> ConfigSources {
        ConfigSources {
            user_file: if self.user_config {
                find_user_config()
            } else {
                None
            },
            project_files: self
                .search_from
                .as_deref()
                .map(|root| self.nearest_project_configs(root))
                .unwrap_or_default(),
            explicit_files: self.extra_files.clone(),
        }
    }

    fn merge(sources: ConfigSources) -> ConfigResult<(Config, ConfigSources)> {
        let figment = sources
            .merge_order()
            .fold(Figment::from(Serialized::defaults(Config::default())), merge_file)
            // READSCOPE_MAX_SENTENCE_WORDS=30, READSCOPE_LOG_LEVEL=debug, ...
            .merge(Env::prefixed(ENV_PREFIX));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            config_file = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Config files in the closest directory at or above `start` that has any.
    ///
    /// The marker directory itself is still searched, but nothing above it.
    fn nearest_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        for dir in start.ancestors() {
            let found = configs_in(dir);
            if !found.is_empty() {
                return found;
            }
            let at_boundary = self
                .stop_at
                .as_ref()
                .is_some_and(|marker| dir != start && dir.join(marker).exists());
            if at_boundary {
                break;
            }
        }
        Vec::new()
    }
}

/// `.readscope.<ext>` then `readscope.<ext>`, so the regular name wins.
fn configs_in(dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    [format!(".{APP_NAME}"), APP_NAME.to_string()]
        .iter()
        .flat_map(|stem| {
            FILE_FORMATS
                .iter()
                .map(move |ext| dir.join(format!("{stem}.{ext}")))
        })
        .filter(|path| path.is_file())
        .collect()
}

fn find_user_config() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    FILE_FORMATS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    let file = path.as_str();
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(file)),
        Some("json") => figment.merge(Json::file_exact(file)),
        _ => figment.merge(Toml::file_exact(file)),
    }
}

/// Per-user config directory, e.g. `~/.config/readscope/` on Linux.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables via `set_var`/`remove_var`.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn write_config(dir: &std::path::Path, name: &str, body: &str) -> Utf8PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert_eq!(config.analysis_options(), AnalysisOptions::default());
        assert_eq!(config.input_limit(), Some(DEFAULT_MAX_INPUT_BYTES));
    }

    #[test]
    fn loader_builds_with_defaults() {
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn thresholds_from_toml() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            tmp.path(),
            "config.toml",
            "max_sentence_words = 20\nmax_complex_sentences = 3\nlog_dir = \"/tmp/readscope\"\n",
        );

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&path)
            .load()
            .unwrap();

        let options = config.analysis_options();
        assert_eq!(options.max_sentence_words, 20);
        assert_eq!(options.max_complex_sentences, 3);
        assert_eq!(options.max_paragraph_words, 120);
        assert_eq!(config.log_dir.as_deref().map(Utf8Path::as_str), Some("/tmp/readscope"));
    }

    #[test]
    fn thresholds_from_yaml() {
        let yaml = "max_paragraph_words: 90\nmax_grade: 9.5\nstrip_markdown: true\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.analysis_options().max_paragraph_words, 90);
        assert_eq!(config.max_grade, Some(9.5));
        assert_eq!(config.strip_markdown, Some(true));
    }

    #[test]
    fn later_file_overrides_earlier() {
        let tmp = TempDir::new().unwrap();
        let base = write_config(tmp.path(), "base.toml", "log_level = \"warn\"\n");
        let over = write_config(tmp.path(), "override.json", r#"{"log_level": "error"}"#);

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base)
            .with_file(&over)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.primary_file(), Some(over.as_path()));
    }

    #[test]
    fn project_config_discovery() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("posts").join("drafts");
        fs::create_dir_all(&sub_dir).unwrap();
        write_config(&project_dir, ".readscope.toml", "max_sentence_words = 18\n");

        let sub_dir = Utf8PathBuf::try_from(sub_dir).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&sub_dir)
            .load()
            .unwrap();

        assert_eq!(config.max_sentence_words, Some(18));
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn regular_file_beats_dotfile_in_same_dir() {
        let tmp = TempDir::new().unwrap();
        write_config(tmp.path(), ".readscope.toml", "max_sentence_words = 18\n");
        write_config(tmp.path(), "readscope.yaml", "max_sentence_words: 22\n");

        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&root)
            .load()
            .unwrap();

        assert_eq!(config.max_sentence_words, Some(22));
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();
        write_config(&parent, ".readscope.toml", "log_level = \"warn\"\n");
        fs::create_dir(child.join(".git")).unwrap();

        let work = Utf8PathBuf::try_from(work).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn load_or_error_fails_when_no_config() {
        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load_or_error();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn invalid_value_is_a_deserialize_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), "bad.toml", "max_sentence_words = \"lots\"\n");
        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&path)
            .load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn disable_input_limit_overrides_max_bytes() {
        let config = Config {
            max_input_bytes: Some(1024),
            disable_input_limit: true,
            ..Config::default()
        };
        assert_eq!(config.input_limit(), None);

        let config = Config {
            max_input_bytes: Some(1024),
            ..Config::default()
        };
        assert_eq!(config.input_limit(), Some(1024));
    }

    #[test]
    #[allow(unsafe_code)]
    fn env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), "config.toml", "max_complex_sentences = 4\n");

        // SAFETY: Test environment — mutex serializes env access across tests.
        unsafe {
            std::env::set_var("READSCOPE_MAX_COMPLEX_SENTENCES", "2");
        }

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&path)
            .load();

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("READSCOPE_MAX_COMPLEX_SENTENCES");
        }

        let (config, _sources) = result.unwrap();
        assert_eq!(config.max_complex_sentences, Some(2));
    }

    #[test]
    fn user_config_dir_named_after_app() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("readscope"));
        }
    }
}
