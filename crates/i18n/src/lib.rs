//! Language selection for LinkUp
//!
//! The login and signup screens expose a language dropdown. The selection is
//! display state only: it never changes validation, navigation, or
//! persistence. Exactly one language is active at any time.

#![warn(missing_docs)]
#![warn(clippy::all)]

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Languages offered by the language dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// German
    De,
}

impl Language {
    /// BCP-47 code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    /// Native display label shown in the dropdown
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
        }
    }

    /// Parse from a BCP-47 code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            "de" => Some(Language::De),
            _ => None,
        }
    }

    /// All languages in dropdown order
    pub fn all() -> [Language; 4] {
        [Language::En, Language::Es, Language::Fr, Language::De]
    }

    /// Structured language identifier for platform APIs
    pub fn identifier(&self) -> LanguageIdentifier {
        self.code().parse().expect("static language codes are valid")
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Dropdown state for the language selector
///
/// Models the open/closed toggle and the select-then-close interaction of the
/// auth screens' picker. Not persisted; each screen starts at the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LanguagePicker {
    /// The active selection
    pub selected: Language,
    /// Whether the dropdown is expanded
    pub open: bool,
}

impl LanguagePicker {
    /// Create a picker with the default language selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the dropdown open or closed
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Select a language and close the dropdown
    pub fn select(&mut self, language: Language) {
        self.selected = language;
        self.open = false;
    }

    /// Label of the active selection
    pub fn selected_label(&self) -> &'static str {
        self.selected.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(LanguagePicker::new().selected, Language::En);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Language::En.label(), "English");
        assert_eq!(Language::Es.label(), "Español");
        assert_eq!(Language::Fr.label(), "Français");
        assert_eq!(Language::De.label(), "Deutsch");
    }

    #[test]
    fn test_code_round_trip() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("pt"), None);
    }

    #[test]
    fn test_identifier() {
        assert_eq!(Language::De.identifier().language.as_str(), "de");
    }

    #[test]
    fn test_picker_toggle() {
        let mut picker = LanguagePicker::new();
        assert!(!picker.open);

        picker.toggle();
        assert!(picker.open);

        picker.toggle();
        assert!(!picker.open);
    }

    #[test]
    fn test_select_closes_dropdown() {
        let mut picker = LanguagePicker::new();
        picker.toggle();

        picker.select(Language::Fr);
        assert_eq!(picker.selected, Language::Fr);
        assert!(!picker.open);
        assert_eq!(picker.selected_label(), "Français");
    }

    #[test]
    fn test_exactly_one_selection() {
        // Reselecting replaces the active value rather than accumulating.
        let mut picker = LanguagePicker::new();
        picker.select(Language::Es);
        picker.select(Language::De);
        assert_eq!(picker.selected, Language::De);
    }

    #[test]
    fn test_serialization() {
        let picker = LanguagePicker { selected: Language::Fr, open: true };
        let json = serde_json::to_string(&picker).unwrap();
        let parsed: LanguagePicker = serde_json::from_str(&json).unwrap();
        assert_eq!(picker, parsed);
    }
}
