//! Light/dark theme

use serde::{Deserialize, Serialize};

/// Page color theme, stored in `body[data-theme]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret the document attribute; anything but `dark` reads as light
    pub fn from_attribute(attr: Option<&str>) -> Self {
        match attr {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme to apply at load, if any.
    ///
    /// A saved value is applied verbatim; otherwise dark is applied only when
    /// the system prefers it, and the attribute stays absent.
    pub fn initial(saved: Option<&str>, prefers_dark: bool) -> Option<String> {
        match saved {
            Some(saved) if !saved.is_empty() => Some(saved.to_string()),
            _ if prefers_dark => Some(Theme::Dark.as_str().to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_attribute_is_light() {
        assert_eq!(Theme::from_attribute(None), Theme::Light);
        assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
        assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_initial_prefers_saved() {
        assert_eq!(Theme::initial(Some("dark"), false).as_deref(), Some("dark"));
        assert_eq!(Theme::initial(Some("light"), true).as_deref(), Some("light"));
        assert_eq!(Theme::initial(None, true).as_deref(), Some("dark"));
        assert_eq!(Theme::initial(None, false), None);
    }
}
