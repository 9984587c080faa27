use std::path::PathBuf;

pub fn default_auto_ocr() -> bool {
    false
}

pub fn default_delay_capture() -> bool {
    false
}

/// Pre-capture delay when `delay_capture` is enabled.
pub fn default_delay_ms() -> u32 {
    5000
}

/// Recognition language preference order: Japanese, then English.
pub fn default_ocr_languages() -> Vec<String> {
    vec!["ja".to_string(), "en".to_string()]
}

/// Base directory for the settings file.
pub fn default_config_dir() -> PathBuf {
    let home = std::env::var("USERPROFILE")
        .or_else(|_| std::env::var("HOME"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".snipocr")
}
