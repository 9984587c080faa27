/// Fixed recognition-language preference order: Japanese first, English as
/// the fallback.
pub const DEFAULT_LANGUAGE_PREFERENCE: &[&str] = &["ja", "en"];

/// Pick a recognition language from the host-enumerated set.
///
/// The preference list is walked in order and each entry must match an
/// available tag exactly; there is no prefix or family matching ("ja-JP"
/// does not satisfy a "ja" preference).
pub fn select_language<'a>(available: &'a [String], preference: &[String]) -> Option<&'a str> {
    preference
        .iter()
        .find_map(|wanted| available.iter().find(|tag| *tag == wanted))
        .map(String::as_str)
}

/// Default preference order as owned strings, for orchestrator construction.
pub fn default_preference() -> Vec<String> {
    DEFAULT_LANGUAGE_PREFERENCE
        .iter()
        .map(|tag| tag.to_string())
        .collect()
}
