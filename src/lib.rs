//! Club Loulou - landing page controller for the Louis & Louise members club
//!
//! Core modules:
//! - `controller`: Page state machine (theme, language, registration, counter)
//! - `view`: Rendering surface abstraction (DOM in the browser, headless natively)
//! - `storage`: Persisted key-value store abstraction
//! - `registration`: Form data, submission phases and the injectable gateway
//! - `platform`: Browser bindings (web-sys DOM view, LocalStorage)

pub mod config;
pub mod confetti;
pub mod controller;
pub mod counter;
pub mod error;
pub mod i18n;
pub mod konami;
pub mod platform;
pub mod registration;
pub mod storage;
pub mod theme;
pub mod validation;
pub mod view;

pub use config::PageConfig;
pub use controller::{Environment, PageController};
pub use error::{PageError, RegistrationError};
pub use i18n::Language;
pub use registration::{RegistrationForm, RegistrationGateway, SubmitPhase};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::Theme;
pub use view::{HeadlessView, PageView};

/// Page timing and sizing constants
pub mod consts {
    /// Simulated registration round trip (ms)
    pub const SUBMIT_DELAY_MS: u32 = 2000;
    /// Member counter animation length (ms)
    pub const COUNTER_ANIMATION_MS: f64 = 1000.0;
    /// Theme toggle spin length (ms)
    pub const THEME_SPIN_MS: u32 = 300;
    /// Page shake after the Konami code (ms)
    pub const SHAKE_MS: u32 = 3000;

    /// Confetti pieces per burst
    pub const CONFETTI_COUNT: usize = 50;
    /// Delay between consecutive confetti spawns (ms)
    pub const CONFETTI_STAGGER_MS: u32 = 50;
    /// Lifetime of one confetti piece before removal (ms)
    pub const CONFETTI_LIFETIME_MS: u32 = 5000;

    /// Member count shown before anything was persisted
    pub const DEFAULT_MEMBER_COUNT: u64 = 1;

    /// Opacity of the submit button while a registration is pending
    pub const SUBMITTING_OPACITY: &str = "0.7";
}
