//! Platform abstraction layer
//!
//! Browser bindings for the controller's seams:
//! - DOM rendering (`dom::DomView`)
//! - Storage (`local_storage::LocalStorage`)
//! - Clock and environment reads
//!
//! One-shot effect timers use `gloo_timers::callback::Timeout`.
//!
//! Everything here is wasm32-only; native builds run against
//! `view::HeadlessView` and `storage::MemoryStore`.

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use dom::DomView;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use crate::controller::Environment;

    /// High-resolution timestamp (ms), matching `requestAnimationFrame` time
    pub fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    /// Color scheme preference and browser language
    pub fn read_environment(window: &web_sys::Window) -> Environment {
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        let browser_language = window.navigator().language().unwrap_or_default();
        Environment {
            prefers_dark,
            browser_language,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{now, read_environment};
