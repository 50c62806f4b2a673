use crate::domain::models::{EmptyQueryPolicy, InvocationStyle, TriggerPolicy};
use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub binary_path: PathBuf,
    pub trigger: TriggerPolicy,
    pub empty_query: EmptyQueryPolicy,
    pub invocation: InvocationStyle,
    pub debounce_ms: u64,
    pub timeout_ms: u64,
    pub theme: PaletteType,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            binary_path: PathBuf::new(),
            trigger: TriggerPolicy::default(),
            empty_query: EmptyQueryPolicy::default(),
            invocation: InvocationStyle::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            theme: PaletteType::CatppuccinMocha,
        }
    }
}

impl Preferences {
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Short name of the configured binary for the header.
    #[must_use]
    pub fn binary_label(&self) -> String {
        if self.binary_path.as_os_str().is_empty() {
            return "unconfigured".to_string();
        }
        self.binary_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.binary_path.display().to_string())
    }
}

/// Source of preferences. The invoker asks for a fresh copy before every run.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigLoader: Send + Sync {
    fn load(&self) -> Result<Preferences>;
    fn save_binary_path(&self, path: &Path) -> Result<()>;
    fn location(&self) -> PathBuf;
}

pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("tslaunch");
        path.push("config.toml");
        path
    })
}

pub struct TomlConfigLoader {
    path: PathBuf,
    binary_override: Option<PathBuf>,
}

impl TomlConfigLoader {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            binary_override: None,
        }
    }

    /// Session-only binary path that wins over the file.
    #[must_use]
    pub fn with_binary_override(mut self, path: Option<PathBuf>) -> Self {
        self.binary_override = path;
        self
    }

    fn read_file(&self) -> Result<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences at {}", self.path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Malformed preferences at {}", self.path.display()))
    }
}

impl ConfigLoader for TomlConfigLoader {
    fn load(&self) -> Result<Preferences> {
        let mut prefs = self.read_file()?;
        if let Some(path) = &self.binary_override {
            prefs.binary_path = path.clone();
        }
        Ok(prefs)
    }

    fn save_binary_path(&self, path: &Path) -> Result<()> {
        // A file that does not parse is left for the user to fix.
        let mut prefs = self.read_file()?;
        prefs.binary_path = path.to_path_buf();

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(&prefs)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
