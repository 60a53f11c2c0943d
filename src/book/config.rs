//! `book.yaml` configuration.
//!
//! ```yaml
//! title: Go 语言实战
//! author: Jane Doe
//! copyright: © 2026 Jane Doe
//! output_dir: output.html
//! categories:
//!   1: 基础核心
//!   2: 并发
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Configuration filename at the project root.
pub const CONFIG_FILENAME: &str = "book.yaml";

/// Output directory used when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT_DIR: &str = "output.html";

const DEFAULT_LANGUAGE: &str = "zh-CN";

/// Book metadata and build settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Book title, shown in page titles and breadcrumbs.
    pub title: String,
    /// Author meta tag.
    pub author: String,
    /// Copyright meta tag.
    pub copyright: String,
    /// Output directory, relative to the project root unless absolute.
    pub output_dir: Option<PathBuf>,
    /// Category name per top-level chapter number.
    pub categories: FxHashMap<u32, String>,
    /// `lang` attribute of generated pages.
    pub language: String,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            copyright: String::new(),
            output_dir: None,
            categories: FxHashMap::default(),
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

/// Configuration loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file.
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl BookConfig {
    /// Load `book.yaml` from the project root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when the file is missing and
    /// [`ConfigError::Parse`] when it is not valid YAML for this shape.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILENAME);
        if !path.is_file() {
            return Err(ConfigError::NotFound(path));
        }
        let text = std::fs::read_to_string(&path)?;
        Self::from_yaml(&text)
    }

    /// Parse configuration from YAML text. An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed YAML.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Category of top-level chapter `number`, if configured.
    pub fn category(&self, number: u32) -> Option<&str> {
        self.categories.get(&number).map(String::as_str)
    }

    /// Resolve the output directory.
    ///
    /// Precedence: `override_dir`, then `output_dir`, then
    /// [`DEFAULT_OUTPUT_DIR`]. Relative paths are joined to `root`.
    pub fn resolve_output_dir(&self, root: &Path, override_dir: Option<&Path>) -> PathBuf {
        let dir = override_dir
            .filter(|p| !p.as_os_str().is_empty())
            .or(self.output_dir.as_deref().filter(|p| !p.as_os_str().is_empty()))
            .unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            root.join(dir)
        }
    }
}
