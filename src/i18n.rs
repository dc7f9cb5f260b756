//! Bilingual (French/English) strings
//!
//! Page markup carries its own `data-fr`/`data-en` variants; this module only
//! holds the strings the controller produces itself.

use serde::{Deserialize, Serialize};

/// Supported page languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// Exact locale tag lookup; anything else is a miss
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "fr" => Some(Language::Fr),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Default language derived from `navigator.language`
    pub fn from_browser(navigator_language: &str) -> Self {
        if navigator_language.starts_with("en") {
            Language::En
        } else {
            Language::Fr
        }
    }

    /// Document title
    pub fn title(&self) -> &'static str {
        match self {
            Language::Fr => "Club Loulou - Exclusivement pour Louis et Louise",
            Language::En => "Club Loulou - Exclusively for Louis and Louise",
        }
    }

    /// Shown when the first name is not on the list
    pub fn name_error(&self) -> &'static str {
        match self {
            Language::Fr => "Désolé, seuls les prénoms Louis et Louise sont acceptés !",
            Language::En => "Sorry, only the names Louis and Louise are accepted!",
        }
    }

    /// Submit button label while a registration is pending
    pub fn submitting_label(&self) -> &'static str {
        match self {
            Language::Fr => "Inscription en cours...",
            Language::En => "Registration in progress...",
        }
    }

    /// Shown when the registration gateway fails
    pub fn registration_failed(&self) -> &'static str {
        match self {
            Language::Fr => "L'inscription a échoué, veuillez réessayer.",
            Language::En => "Registration failed, please try again.",
        }
    }

    /// Success modal text
    pub fn welcome(&self, first_name: &str) -> String {
        match self {
            Language::Fr => format!(
                "Félicitations {} ! Bienvenue dans le Club Loulou ! Vous êtes maintenant un membre officiel.",
                first_name
            ),
            Language::En => format!(
                "Congratulations {}! Welcome to Club Loulou! You are now an official member.",
                first_name
            ),
        }
    }

    /// Digit group separator for the member counter
    pub fn thousands_separator(&self) -> char {
        match self {
            // Narrow no-break space, as `Intl.NumberFormat("fr")` renders it
            Language::Fr => '\u{202F}',
            Language::En => ',',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_exact() {
        assert_eq!(Language::from_tag("fr"), Some(Language::Fr));
        assert_eq!(Language::from_tag("en"), Some(Language::En));
        assert_eq!(Language::from_tag("EN"), None);
        assert_eq!(Language::from_tag("de"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn test_from_browser() {
        assert_eq!(Language::from_browser("en-US"), Language::En);
        assert_eq!(Language::from_browser("en"), Language::En);
        assert_eq!(Language::from_browser("fr-CA"), Language::Fr);
        assert_eq!(Language::from_browser("de-DE"), Language::Fr);
    }

    #[test]
    fn test_welcome_interpolates_name() {
        assert!(Language::Fr.welcome("Louise").starts_with("Félicitations Louise !"));
        assert!(Language::En.welcome("Louis").starts_with("Congratulations Louis!"));
    }
}
