use std::sync::Arc;

use parking_lot::RwLock;

use crate::Settings;

/// Unified config manager.
///
/// Loads settings once at session start, hands out snapshot copies, and
/// persists changes at session end.
pub struct ConfigManager {
    settings: Arc<RwLock<Settings>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_settings(Settings::load())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    /// Snapshot copy of the current settings.
    pub fn get(&self) -> Settings {
        self.settings.read().clone()
    }

    pub fn update(&self, apply: impl FnOnce(&mut Settings)) {
        apply(&mut self.settings.write());
    }

    /// Persist the current settings to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        self.settings.read().save()
    }

    #[inline]
    pub fn auto_ocr(&self) -> bool {
        self.get().auto_ocr
    }

    #[inline]
    pub fn delay_capture(&self) -> bool {
        self.get().delay_capture
    }

    #[inline]
    pub fn ocr_languages(&self) -> Vec<String> {
        self.get().ocr_languages
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_is_visible_through_accessors() {
        let manager = ConfigManager::with_settings(Settings::default());
        assert!(!manager.auto_ocr());

        manager.update(|s| s.auto_ocr = true);
        assert!(manager.auto_ocr());
        assert!(manager.get().auto_ocr);
    }
}
