/// Outcome of one recognition invocation.
///
/// All error variants are terminal for the invocation; there is no automatic
/// retry anywhere in the pipeline. The user must re-trigger manually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    /// Recognition produced text (possibly empty).
    Success(String),
    /// No installed recognition language matched the preference order.
    NoLanguageAvailable,
    /// The engine could not be instantiated for the selected language.
    EngineUnavailable,
    /// Format conversion, engine invocation, or delivery failed.
    Failure(String),
}

impl RecognitionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RecognitionOutcome::Success(_))
    }

    /// Recognized text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            RecognitionOutcome::Success(text) => Some(text),
            _ => None,
        }
    }

    /// User-facing message for error outcomes, `None` on success.
    pub fn error_message(&self) -> Option<String> {
        match self {
            RecognitionOutcome::Success(_) => None,
            RecognitionOutcome::NoLanguageAvailable => {
                Some("No OCR language is installed.".to_string())
            }
            RecognitionOutcome::EngineUnavailable => {
                Some("Failed to initialize the OCR engine.".to_string())
            }
            RecognitionOutcome::Failure(reason) => Some(format!("OCR failed: {reason}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_text_and_no_error() {
        let outcome = RecognitionOutcome::Success("hello".to_string());
        assert!(outcome.is_success());
        assert_eq!(outcome.text(), Some("hello"));
        assert_eq!(outcome.error_message(), None);
    }

    #[test]
    fn error_variants_produce_messages() {
        assert!(
            RecognitionOutcome::NoLanguageAvailable
                .error_message()
                .is_some()
        );
        assert!(
            RecognitionOutcome::EngineUnavailable
                .error_message()
                .is_some()
        );
        let failure = RecognitionOutcome::Failure("boom".to_string());
        assert!(failure.error_message().unwrap().contains("boom"));
        assert_eq!(failure.text(), None);
    }
}
