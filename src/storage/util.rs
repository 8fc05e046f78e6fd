use crate::error::{CatalogError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the fragment directory.
pub const METASTORE_DIR_ENV: &str = "BAGCAT_METASTORE_DIR";

/// Width of the zero-padded creation stamp in fragment names. Wide enough for
/// any `u64` nanosecond value, so names sort in creation order.
pub const STAMP_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Flat directory holding every fragment
    pub directory: PathBuf,
    /// Leading part of every fragment file name
    pub prefix: String,
    /// Fragment file extension, matched case-insensitively on load
    pub extension: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("out/_ciw_metastore"),
            prefix: "BagCAT".to_string(),
            extension: "ttl".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into(), ..Self::default() }
    }

    /// Defaults, with the directory taken from `BAGCAT_METASTORE_DIR` when set.
    pub fn from_env() -> Self {
        match std::env::var_os(METASTORE_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::with_directory(dir),
            _ => Self::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.directory.as_os_str().is_empty() {
            return Err(CatalogError::Config("fragment directory must not be empty".to_string()));
        }
        let name_part = |value: &str| {
            !value.is_empty()
                && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        };
        if !name_part(&self.prefix) {
            return Err(CatalogError::Config(format!(
                "fragment prefix must be non-empty and contain only [A-Za-z0-9_-], got {:?}",
                self.prefix
            )));
        }
        if self.extension.is_empty() || !self.extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CatalogError::Config(format!(
                "fragment extension must be non-empty and alphanumeric, got {:?}",
                self.extension
            )));
        }
        Ok(())
    }
}

/// Identifies one fragment on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentId {
    /// Creation stamp; strictly increasing in creation order within a directory
    pub stamp: u64,
    pub name: String,
    pub path: PathBuf,
}

/// Builds and recognises `<prefix>_<stamp>.<extension>` file names.
#[derive(Debug, Clone)]
pub struct FragmentNaming {
    prefix: String,
    extension: String,
    pattern: Regex,
}

impl FragmentNaming {
    pub fn new(prefix: &str, extension: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"^{}_(\d{{{}}})\.(?i:{})$",
            regex::escape(prefix),
            STAMP_WIDTH,
            regex::escape(extension)
        ))
        .map_err(|e| CatalogError::Config(e.to_string()))?;

        Ok(Self { prefix: prefix.to_string(), extension: extension.to_string(), pattern })
    }

    pub fn file_name(&self, stamp: u64) -> String {
        format!("{}_{:0width$}.{}", self.prefix, stamp, self.extension, width = STAMP_WIDTH)
    }

    /// Creation stamp encoded in `file_name`, if it follows the convention.
    pub fn parse(&self, file_name: &str) -> Option<u64> {
        self.pattern.captures(file_name).and_then(|caps| caps[1].parse().ok())
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}
