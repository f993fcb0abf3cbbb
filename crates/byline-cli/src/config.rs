//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use byline_engine::command::DEFAULT_NO_FALLBACK_ARG;
use byline_engine::http::DEFAULT_TIMEOUT_SECS;
use byline_harness::HarnessConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name
    #[serde(default = "default_profile")]
    pub active_profile: String,

    /// Available engine profiles
    #[serde(default)]
    pub profiles: HashMap<String, EngineProfile>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Harness defaults, overridden by `run` flags
    #[serde(default)]
    pub harness: HarnessConfig,

    /// File this configuration was loaded from
    #[serde(skip)]
    source: Option<PathBuf>,
}

/// How an engine profile reaches its extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Spawn a local program per document
    Command,
    /// POST each document to an extraction service
    Http,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Command => write!(f, "command"),
            EngineKind::Http => write!(f, "http"),
        }
    }
}

/// Engine profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineProfile {
    /// Engine kind
    pub kind: EngineKind,

    /// Program to run (command engines)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Argument template; `{url}` is replaced by the entry URL
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Flag that disables fallback heuristics; empty means the program has none
    #[serde(default = "default_no_fallback_arg")]
    pub no_fallback_arg: String,

    /// Service endpoint (http engines)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Per-request timeout (http engines)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl EngineProfile {
    /// Profile that runs `program` with the given argument template
    pub fn command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: EngineKind::Command,
            program: Some(program.into()),
            args: args.into_iter().map(Into::into).collect(),
            no_fallback_arg: default_no_fallback_arg(),
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Profile that posts documents to `endpoint`
    pub fn http(endpoint: impl Into<String>) -> Self {
        Self {
            kind: EngineKind::Http,
            program: None,
            args: Vec::new(),
            no_fallback_arg: default_no_fallback_arg(),
            endpoint: Some(endpoint.into()),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Check that the fields required by `kind` are present
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            EngineKind::Command if is_blank(&self.program) => Err(CliError::Config(
                "command profiles require a program".to_string(),
            )),
            EngineKind::Http if is_blank(&self.endpoint) => Err(CliError::Config(
                "http profiles require an endpoint".to_string(),
            )),
            EngineKind::Http if self.timeout_secs == 0 => Err(CliError::Config(
                "timeout_secs must be greater than zero".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// One-line description for listings
    pub fn target(&self) -> String {
        match self.kind {
            EngineKind::Command => {
                let program = self.program.as_deref().unwrap_or("<unset>");
                if self.args.is_empty() {
                    program.to_string()
                } else {
                    format!("{} {}", program, self.args.join(" "))
                }
            }
            EngineKind::Http => self.endpoint.as_deref().unwrap_or("<unset>").to_string(),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The four-line text report
    Text,
    /// JSON object
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".byline").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if it is missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, or defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str::<Config>(&contents)?
        } else {
            Self::default()
        };
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Save configuration back to where it was loaded from.
    pub fn save(&self) -> Result<()> {
        let path = match &self.source {
            Some(path) => path.clone(),
            None => Self::path()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Get the active profile.
    pub fn get_active_profile(&self) -> Result<&EngineProfile> {
        self.profiles
            .get(&self.active_profile)
            .ok_or_else(|| CliError::Config(format!("Profile '{}' not found", self.active_profile)))
    }

    /// Add or update a profile.
    pub fn set_profile(&mut self, name: String, profile: EngineProfile) {
        self.profiles.insert(name, profile);
    }

    /// Switch to a different profile.
    pub fn switch_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.active_profile = name;
        Ok(())
    }
}

impl Default for Config {
    /// A single `default` profile running the trafilatura command line tool
    fn default() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(
            "default".to_string(),
            EngineProfile::command("trafilatura", ["--json", "--with-metadata"]),
        );

        Self {
            active_profile: "default".to_string(),
            profiles,
            settings: Settings::default(),
            harness: HarnessConfig::default(),
            source: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_no_fallback_arg() -> String {
    DEFAULT_NO_FALLBACK_ARG.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
