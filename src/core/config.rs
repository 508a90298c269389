//! Configuration file management.
//!
//! Reads `sesame.toml` (or a `.yaml`/`.yml` file), expands `$VAR` placeholders in
//! prefixes and secret names, and validates the result.

use serde::{Deserialize, Deserializer};
use std::path::Path;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Resolution configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path prefixes listed recursively, in order. Accepts a single string.
    #[serde(default, deserialize_with = "one_or_many")]
    pub prefix: Vec<String>,
    /// Parameter names fetched exactly, in order.
    #[serde(default)]
    pub secrets: Vec<String>,
    /// Leaf-name overrides.
    #[serde(default)]
    pub rename: Vec<Rename>,
    /// Ask the store to decrypt `SecureString` values.
    #[serde(default = "default_decrypt")]
    pub decrypt: bool,
}

/// Maps a derived leaf name to a different environment variable name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

/// On-disk configuration syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Yaml,
}

impl Format {
    /// Pick the syntax from a file extension; anything but yaml/yml is TOML.
    pub fn from_path(path: &Path) -> Self {
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| constants::YAML_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false);

        if is_yaml {
            Self::Yaml
        } else {
            Self::Toml
        }
    }
}

fn default_decrypt() -> bool {
    true
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

impl Config {
    /// Load, expand against the process environment, and validate.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist, a parse error
    /// if it is malformed, or `ConfigError::InvalidValue` if an entry is empty
    /// after expansion.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with(path, |var| std::env::var(var).ok())
    }

    /// Like [`Config::load`], resolving placeholders through `lookup`.
    pub fn load_with<F>(path: &Path, lookup: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::parse(&contents, Format::from_path(path))?;
        config.expand(lookup);
        config.validate()?;

        debug!(
            prefixes = config.prefix.len(),
            secrets = config.secrets.len(),
            renames = config.rename.len(),
            "config loaded"
        );

        Ok(config)
    }

    /// Parse configuration text without expanding or validating it.
    pub fn parse(contents: &str, format: Format) -> Result<Self> {
        let config = match format {
            Format::Toml => toml::from_str(contents).map_err(ConfigError::ParseToml)?,
            // An empty YAML document is null, not an empty mapping.
            Format::Yaml if contents.trim().is_empty() => Self::empty(),
            Format::Yaml => serde_yaml::from_str(contents).map_err(ConfigError::ParseYaml)?,
        };
        Ok(config)
    }

    /// A configuration that resolves nothing.
    pub fn empty() -> Self {
        Self {
            prefix: Vec::new(),
            secrets: Vec::new(),
            rename: Vec::new(),
            decrypt: default_decrypt(),
        }
    }

    /// Expand `$VAR` and `${VAR}` in prefixes and secret names.
    ///
    /// Unset variables expand to the empty string.
    pub fn expand<F>(&mut self, mut lookup: F)
    where
        F: FnMut(&str) -> Option<String>,
    {
        for item in self.prefix.iter_mut().chain(self.secrets.iter_mut()) {
            let expanded = shellexpand::env_with_context_no_errors(item.as_str(), |var| {
                Some(lookup(var).unwrap_or_default())
            })
            .into_owned();
            *item = expanded;
        }
    }

    /// Check that every prefix and secret name is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first empty entry.
    pub fn validate(&self) -> Result<()> {
        check_entries("prefix", &self.prefix)?;
        check_entries("secrets", &self.secrets)?;
        Ok(())
    }

    /// True when there is nothing to fetch from the store.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.secrets.is_empty()
    }
}

fn check_entries(field: &'static str, entries: &[String]) -> Result<()> {
    if let Some(index) = entries.iter().position(|e| e.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("entry {} is empty after expansion", index),
        }
        .into());
    }
    Ok(())
}
