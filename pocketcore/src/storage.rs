//! Settings storage for the calculator.
//!
//! Only preferences are stored. Calculator state lives for one session.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that points at an alternative settings file.
pub const CONFIG_ENV: &str = "POCKETCALC_CONFIG";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("app", "pocketcalc", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Text scale of the display panel relative to the body font.
    pub display_scale: f32,
    /// Accept digits and operators from the keyboard.
    pub keyboard_input: bool,
    /// Mark the pending operator key while waiting for the second operand.
    pub highlight_pending: bool,
    /// Fixed window size in points.
    pub window_size: [f32; 2],
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            display_scale: 2.0,
            keyboard_input: true,
            highlight_pending: true,
            window_size: [320.0, 520.0],
        }
    }
}

impl CalcSettings {
    pub const MIN_WINDOW: [f32; 2] = [240.0, 400.0];

    /// Settings file path, honouring [`CONFIG_ENV`].
    pub fn default_path() -> PathBuf {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => config_dir("pocketcalc").join("settings.json"),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from `path`, falling back to defaults. A missing file is silent.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => {
                log::debug!("loaded settings from {}", path.display());
                settings
            }
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values a hand-edited file might get wrong.
    pub fn sanitized(mut self) -> Self {
        if !self.display_scale.is_finite() {
            self.display_scale = Self::default().display_scale;
        }
        self.display_scale = self.display_scale.clamp(1.0, 4.0);
        for (size, min) in self.window_size.iter_mut().zip(Self::MIN_WINDOW) {
            if !size.is_finite() || *size < min {
                *size = min;
            }
        }
        self
    }
}
