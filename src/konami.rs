//! Konami code easter egg (↑↑↓↓←→←→BA)

/// Key codes of the sequence
pub const KONAMI_CODE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// Keyframes for the page shake
pub const SHAKE_KEYFRAMES: &str = "
@keyframes shake {
    0%, 100% { transform: translateX(0); }
    25% { transform: translateX(-5px) rotate(-1deg); }
    75% { transform: translateX(5px) rotate(1deg); }
}";

/// Body animation while shaking
pub const SHAKE_ANIMATION: &str = "shake 0.5s infinite";

/// Position in the key sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KonamiTracker {
    position: usize,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Feed one keydown. Returns true when the sequence just completed.
    ///
    /// A mismatch resets to the start without re-checking the key against the
    /// first element, so ↑↑↑ leaves the position at zero.
    pub fn feed(&mut self, key_code: u32) -> bool {
        if key_code != KONAMI_CODE[self.position] {
            self.position = 0;
            return false;
        }
        self.position += 1;
        if self.position == KONAMI_CODE.len() {
            self.position = 0;
            return true;
        }
        false
    }
}
