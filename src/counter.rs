//! Member counter: reconciliation, formatting and the count-up animation

use crate::i18n::Language;

/// Persisted count wins over the in-memory one when it parses
pub fn reconcile(in_memory: u64, persisted: Option<&str>) -> u64 {
    match persisted {
        Some(text) => match text.trim().parse::<u64>() {
            Ok(count) => count,
            Err(_) => {
                log::warn!("Ignoring unparseable member count {:?}", text);
                in_memory
            }
        },
        None => in_memory,
    }
}

/// Value currently shown in the counter element.
///
/// Group separators of either language are skipped; a display with no digits
/// reads as zero.
pub fn parse_displayed(text: &str) -> u64 {
    text.chars()
        .filter(char::is_ascii_digit)
        .fold(0u64, |acc, c| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(c as u8 - b'0'))
        })
}

/// Format with thousands separators for the page language
pub fn format_count(count: u64, language: Language) -> String {
    let digits = count.to_string();
    let sep = language.thousands_separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len_utf8());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Linear count-up from the displayed value to the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub from: u64,
    pub to: u64,
    /// Timestamp (ms) of the first frame
    pub start_time: f64,
    /// Total length (ms)
    pub duration: f64,
}

impl CounterAnimation {
    pub fn new(from: u64, to: u64, start_time: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start_time,
            duration,
        }
    }

    /// Progress in [0, 1]
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    /// Value to display at `now`, floored to an integer
    pub fn value_at(&self, now: f64) -> u64 {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        let from = self.from as f64;
        let value = (from + (self.to as f64 - from) * p).floor() as u64;
        value.clamp(self.from.min(self.to), self.from.max(self.to))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reconcile_prefers_persisted() {
        assert_eq!(reconcile(1, Some("42")), 42);
        assert_eq!(reconcile(7, None), 7);
        assert_eq!(reconcile(7, Some("many")), 7);
        assert_eq!(reconcile(7, Some("")), 7);
    }

    #[test]
    fn test_parse_displayed() {
        assert_eq!(parse_displayed("1,234"), 1234);
        assert_eq!(parse_displayed("1\u{202F}234"), 1234);
        assert_eq!(parse_displayed(""), 0);
        assert_eq!(parse_displayed("--"), 0);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0, Language::En), "0");
        assert_eq!(format_count(999, Language::En), "999");
        assert_eq!(format_count(1000, Language::En), "1,000");
        assert_eq!(format_count(1234567, Language::En), "1,234,567");
        assert_eq!(format_count(12345, Language::Fr), "12\u{202F}345");
    }

    #[test]
    fn test_animation_endpoints() {
        let anim = CounterAnimation::new(0, 100, 500.0, 1000.0);
        assert_eq!(anim.value_at(500.0), 0);
        assert_eq!(anim.value_at(1000.0), 50);
        assert_eq!(anim.value_at(1499.0), 99);
        assert!(!anim.is_finished(1499.0));
        assert_eq!(anim.value_at(1500.0), 100);
        assert!(anim.is_finished(1500.0));
        // Frames timestamped before the start stay at the origin
        assert_eq!(anim.value_at(0.0), 0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let anim = CounterAnimation::new(3, 9, 0.0, 0.0);
        assert_eq!(anim.value_at(0.0), 9);
    }

    proptest! {
        #[test]
        fn prop_animation_stays_within_bounds(
            from in 0u64..1_000_000,
            to in 0u64..1_000_000,
            frames in prop::collection::vec(0.0f64..2000.0, 1..50),
        ) {
            let anim = CounterAnimation::new(from, to, 0.0, 1000.0);
            let (lo, hi) = (from.min(to), from.max(to));
            for t in frames {
                let v = anim.value_at(t);
                prop_assert!(v >= lo && v <= hi);
            }
        }

        #[test]
        fn prop_animation_is_monotonic(
            from in 0u64..100_000,
            to in 0u64..100_000,
            mut frames in prop::collection::vec(0.0f64..1200.0, 2..40),
        ) {
            frames.sort_by(|a, b| a.total_cmp(b));
            let anim = CounterAnimation::new(from, to, 0.0, 1000.0);
            let values: Vec<u64> = frames.iter().map(|t| anim.value_at(*t)).collect();
            if to >= from {
                prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
            } else {
                prop_assert!(values.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }
}
