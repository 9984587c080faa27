use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defaults::*;

/// Persisted preferences, read at session start and written at session end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Run OCR automatically (silent delivery) once a capture viewer opens.
    #[serde(default = "default_auto_ocr")]
    pub auto_ocr: bool,

    /// Wait before taking the snapshot, so the user can arrange windows.
    #[serde(default = "default_delay_capture")]
    pub delay_capture: bool,

    /// Pre-capture delay in milliseconds when `delay_capture` is set.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u32,

    /// Recognition language preference order (exact tags, tried in order).
    #[serde(default = "default_ocr_languages")]
    pub ocr_languages: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_ocr: default_auto_ocr(),
            delay_capture: default_delay_capture(),
            delay_ms: default_delay_ms(),
            ocr_languages: default_ocr_languages(),
        }
    }
}

impl Settings {
    fn settings_path() -> PathBuf {
        default_config_dir().join("settings.json")
    }

    /// Load settings from disk.
    ///
    /// Falls back to defaults (and persists them) if the file is missing or
    /// unreadable.
    pub fn load() -> Self {
        match Self::load_from_path(&Self::settings_path()) {
            Some(settings) => settings,
            None => {
                let default_settings = Self::default();
                let _ = default_settings.save();
                default_settings
            }
        }
    }

    /// Save settings to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(&Self::settings_path())
    }

    pub fn load_from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str::<Settings>(&content).ok()
    }

    pub fn save_to_path(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
