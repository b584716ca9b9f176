use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::LineMatcher;

pub const CONFIG_FILE_NAME: &str = ".todoxrc.json";

pub const DEFAULT_KEYWORDS: &[&str] = &["TODO", "BUG", "FIXME"];

/// A keyword and the regular expression its lines must match in format mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRule {
    pub keyword: String,
    /// Empty means any line starting with `keyword` is accepted.
    #[serde(default)]
    pub regular_expression: String,
}

/// What the scanner looks for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Marker keywords, matched case-insensitively. Empty means [`DEFAULT_KEYWORDS`].
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Validate lines against `format_rules` instead of reporting every keyword.
    #[serde(default, alias = "useFormatMode")]
    pub format: bool,
    #[serde(default)]
    pub format_rules: Vec<FormatRule>,
}

impl Settings {
    /// The configured keywords, or the defaults when none are set.
    pub fn effective_keywords(&self) -> Vec<String> {
        if self.keywords.is_empty() {
            DEFAULT_KEYWORDS.iter().map(|kw| kw.to_string()).collect()
        } else {
            self.keywords.clone()
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(flatten)]
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: Vec::new(),
            settings: Settings {
                keywords: DEFAULT_KEYWORDS.iter().map(|kw| kw.to_string()).collect(),
                format: false,
                format_rules: Vec::new(),
            },
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores` or `includes`,
    /// empty keywords, and format rules whose pattern is not a valid regex.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.settings.keywords.iter().any(|kw| kw.is_empty()) {
            bail!("Empty keyword in 'keywords'");
        }
        if self
            .settings
            .format_rules
            .iter()
            .any(|rule| rule.keyword.is_empty())
        {
            bail!("Empty keyword in 'formatRules'");
        }

        LineMatcher::formats(&self.settings.format_rules)?;

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
