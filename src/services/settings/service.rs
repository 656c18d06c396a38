use crate::models::settings::AgendaSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "agenda.toml";

/// Reads and writes [`AgendaSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the per-user config directory, if one can be resolved.
    pub fn from_project_dirs() -> Option<Self> {
        ProjectDirs::from("com", "NotesAgenda", "NotesAgenda")
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the settings file
    pub fn get(&self) -> Result<AgendaSettings> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: AgendaSettings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or bad.
    pub fn load_or_default(&self) -> AgendaSettings {
        if !self.path.exists() {
            log::info!("No settings at {}, using defaults", self.path.display());
            return AgendaSettings::default();
        }

        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                AgendaSettings::default()
            }
        }
    }

    /// Validate and write settings, creating the parent directory if needed.
    pub fn update(&self, settings: &AgendaSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw).context("Failed to write settings")?;

        Ok(())
    }
}
