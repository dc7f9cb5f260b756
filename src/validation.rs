//! First-name whitelist
//!
//! Membership is reserved to people named Louis or Louise. Compound forms
//! ("Louis-Marie") and middle names ("Louise Anne") are accepted.

/// Given names the club accepts
pub const RESERVED_NAMES: [&str; 2] = ["louis", "louise"];

/// Outcome of checking a first-name field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCheck {
    /// Nothing typed yet; no error is shown
    Empty,
    Accepted,
    Rejected,
}

impl NameCheck {
    /// Whether the form may be submitted with this name
    pub fn is_valid(&self) -> bool {
        !matches!(self, NameCheck::Rejected)
    }
}

/// Trim surrounding whitespace and lowercase
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether a normalized name is one of the reserved names, optionally
/// followed by a space or hyphen and more text
pub fn is_reserved_name(normalized: &str) -> bool {
    RESERVED_NAMES.iter().any(|reserved| {
        normalized
            .strip_prefix(reserved)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(' ') || rest.starts_with('-'))
    })
}

/// Check a raw first-name field value.
///
/// Only a literally empty value counts as [`NameCheck::Empty`]; whitespace-only
/// input is rejected.
pub fn check_name(raw: &str) -> NameCheck {
    if raw.is_empty() {
        NameCheck::Empty
    } else if is_reserved_name(&normalize_name(raw)) {
        NameCheck::Accepted
    } else {
        NameCheck::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_names() {
        assert_eq!(check_name("Louis"), NameCheck::Accepted);
        assert_eq!(check_name("louise"), NameCheck::Accepted);
        assert_eq!(check_name("  LOUISE  "), NameCheck::Accepted);
    }

    #[test]
    fn test_compound_names() {
        assert_eq!(check_name("Louis-Marie"), NameCheck::Accepted);
        assert_eq!(check_name("Louise Anne"), NameCheck::Accepted);
        assert_eq!(check_name("louis-"), NameCheck::Accepted);
    }

    #[test]
    fn test_lookalikes_rejected() {
        assert_eq!(check_name("Louisa"), NameCheck::Rejected);
        assert_eq!(check_name("Marc"), NameCheck::Rejected);
        assert_eq!(check_name("Marie-Louise"), NameCheck::Rejected);
        assert_eq!(check_name("Lou is"), NameCheck::Rejected);
        assert_eq!(check_name("Louis_Marie"), NameCheck::Rejected);
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(check_name(""), NameCheck::Empty);
        assert!(check_name("").is_valid());
        assert_eq!(check_name("   "), NameCheck::Rejected);
        assert!(!check_name("   ").is_valid());
    }

    fn mixed_case(name: &'static str) -> impl Strategy<Value = String> {
        prop::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
            name.chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_reserved_variants_accepted(
            base in prop::sample::select(vec!["louis", "louise"]).prop_flat_map(mixed_case),
            suffix in prop::option::of(("[ -]", "[A-Za-z -]{0,12}")),
            pad_left in " {0,3}",
            pad_right in " {0,3}",
        ) {
            let mut name = format!("{}{}", pad_left, base);
            if let Some((sep, rest)) = suffix {
                name.push_str(&sep);
                name.push_str(&rest);
            }
            name.push_str(&pad_right);
            prop_assert_eq!(check_name(&name), NameCheck::Accepted);
        }

        #[test]
        fn prop_other_names_rejected(name in "[A-Za-z][A-Za-z -]{0,15}") {
            let normalized = normalize_name(&name);
            let reserved = RESERVED_NAMES.iter().any(|r| {
                normalized == *r
                    || normalized.starts_with(&format!("{} ", r))
                    || normalized.starts_with(&format!("{}-", r))
            });
            prop_assume!(!reserved);
            prop_assert_eq!(check_name(&name), NameCheck::Rejected);
        }
    }
}
