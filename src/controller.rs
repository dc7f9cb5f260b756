//! Page controller
//!
//! Owns the session state (language, member count, submission phase, easter
//! egg position) and reacts to one user event at a time. All output goes
//! through a [`PageView`]; all persistence through a [`KeyValueStore`].

use std::cell::RefCell;

use crate::config::PageConfig;
use crate::confetti::ConfettiPlanner;
use crate::counter::{self, CounterAnimation};
use crate::error::RegistrationError;
use crate::i18n::Language;
use crate::konami::KonamiTracker;
use crate::registration::{PendingRegistration, RegistrationForm, RegistrationGateway, SubmitPhase};
use crate::storage::KeyValueStore;
use crate::theme::Theme;
use crate::validation::{self, NameCheck};
use crate::view::PageView;

/// Browser facts read once at load
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// `(prefers-color-scheme: dark)` matches
    pub prefers_dark: bool,
    /// `navigator.language`
    pub browser_language: String,
}

/// Controller for the landing page
pub struct PageController<S: KeyValueStore, V: PageView> {
    config: PageConfig,
    store: S,
    view: V,
    /// Active locale tag. Not restricted to supported languages.
    language: String,
    member_count: u64,
    phase: SubmitPhase,
    konami: KonamiTracker,
    counter_animation: Option<CounterAnimation>,
    confetti: ConfettiPlanner,
}

impl<S: KeyValueStore, V: PageView> PageController<S, V> {
    pub fn new(config: PageConfig, store: S, view: V, seed: u64) -> Self {
        let confetti = ConfettiPlanner::new(seed, config.confetti_count, config.confetti_stagger_ms);
        Self {
            member_count: config.default_member_count,
            config,
            store,
            view,
            language: Language::default().as_str().to_string(),
            phase: SubmitPhase::Idle,
            konami: KonamiTracker::new(),
            counter_animation: None,
            confetti,
        }
    }

    /// Restore persisted state. Returns true when the counter needs frames.
    pub fn init(&mut self, env: &Environment, now: f64) -> bool {
        let animating = self.refresh_member_count(now);

        let saved_theme = self.store.get_item(&self.config.storage_keys.theme);
        if let Some(theme) = Theme::initial(saved_theme.as_deref(), env.prefers_dark) {
            log::info!("Applying initial theme {}", theme);
            self.view.render_theme(&theme);
        }

        let lang = self
            .store
            .get_item(&self.config.storage_keys.language)
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| Language::from_browser(&env.browser_language).as_str().to_string());
        self.set_language(&lang);

        animating
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active locale tag
    pub fn language_tag(&self) -> &str {
        &self.language
    }

    /// Active language, if the tag is a supported one
    pub fn language(&self) -> Option<Language> {
        Language::from_tag(&self.language)
    }

    pub fn member_count(&self) -> u64 {
        self.member_count
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    // === Theme ===

    /// Flip the theme, persist it and spin the toggle
    pub fn toggle_theme(&mut self) -> Theme {
        let current = Theme::from_attribute(self.view.theme_attribute().as_deref());
        let next = current.toggled();
        self.view.render_theme(next.as_str());
        self.store.set_item(&self.config.storage_keys.theme, next.as_str());
        self.view.spin_theme_toggle(self.config.theme_spin_ms);
        log::info!("Theme switched to {}", next.as_str());
        next
    }

    // === Language ===

    /// Switch every translatable element to `lang` and persist it.
    ///
    /// Unsupported tags are applied and persisted too, but leave the title as
    /// it was.
    pub fn set_language(&mut self, lang: &str) {
        self.language = lang.to_string();
        self.view.render_language(lang);
        self.store.set_item(&self.config.storage_keys.language, lang);

        match Language::from_tag(lang) {
            Some(language) => self.view.render_title(language.title()),
            None => log::warn!("No title for unsupported language {:?}", lang),
        }
    }

    // === Registration ===

    /// Check the first-name field and show or clear the inline error
    pub fn validate_name(&mut self, name: &str) -> bool {
        let check = validation::check_name(name);
        if check == NameCheck::Rejected {
            let message = self.language().map(|l| l.name_error()).unwrap_or_default();
            self.view.render_name_error(Some(message));
        } else {
            self.view.render_name_error(None);
        }
        check.is_valid()
    }

    /// Idle -> Submitting. `None` when the name is rejected or a submission is
    /// already pending.
    pub fn begin_registration(&mut self, form: RegistrationForm) -> Option<PendingRegistration> {
        if self.phase == SubmitPhase::Submitting {
            log::warn!("Ignoring submit while a registration is pending");
            return None;
        }
        if !self.validate_name(&form.first_name) {
            return None;
        }

        self.phase = SubmitPhase::Submitting;
        let label = self.language().map(|l| l.submitting_label()).unwrap_or_default();
        self.view.show_submitting(label);
        Some(PendingRegistration::new(form))
    }

    /// Submitting -> Idle, celebrating on success. Returns true when the
    /// counter needs frames.
    pub fn finish_registration(
        &mut self,
        pending: PendingRegistration,
        result: Result<(), RegistrationError>,
        now: f64,
    ) -> bool {
        self.phase = SubmitPhase::Idle;
        self.view.restore_submit();

        match result {
            Ok(()) => {
                self.show_success_modal(&pending.form().first_name);
                let animating = self.increment_member_count(now);
                self.view.reset_form();
                animating
            }
            Err(e) => {
                log::warn!("Registration failed: {}", e);
                let message = self.language().map(|l| l.registration_failed()).unwrap_or_default();
                self.view.render_name_error(Some(message));
                false
            }
        }
    }

    // === Modal ===

    fn show_success_modal(&mut self, first_name: &str) {
        let message = self.language().map(|l| l.welcome(first_name)).unwrap_or_default();
        self.view.show_modal(&message);
        let burst = self.confetti.plan_burst();
        self.view.launch_confetti(burst, self.config.confetti_lifetime_ms);
    }

    pub fn close_modal(&mut self) {
        self.view.hide_modal();
    }

    /// A window click; only a click on the overlay itself closes the modal
    pub fn window_clicked(&mut self, target_is_overlay: bool) {
        if target_is_overlay {
            self.view.hide_modal();
        }
    }

    // === Member counter ===

    /// Add one member, persist, and animate to the new count
    pub fn increment_member_count(&mut self, now: f64) -> bool {
        let persisted = self.store.get_item(&self.config.storage_keys.members);
        let next = counter::reconcile(self.member_count, persisted.as_deref()) + 1;
        self.store
            .set_item(&self.config.storage_keys.members, &next.to_string());
        log::info!("Member count now {}", next);
        self.refresh_member_count(now)
    }

    /// Reconcile with storage and start animating from the displayed value
    pub fn refresh_member_count(&mut self, now: f64) -> bool {
        let persisted = self.store.get_item(&self.config.storage_keys.members);
        self.member_count = counter::reconcile(self.member_count, persisted.as_deref());

        let from = counter::parse_displayed(&self.view.displayed_count());
        self.counter_animation = Some(CounterAnimation::new(
            from,
            self.member_count,
            now,
            self.config.counter_animation_ms,
        ));
        true
    }

    /// Render one animation frame. Returns true while more frames are needed.
    pub fn advance_counter(&mut self, now: f64) -> bool {
        let Some(animation) = self.counter_animation else {
            return false;
        };
        let language = self.language().unwrap_or(Language::En);
        let text = counter::format_count(animation.value_at(now), language);
        self.view.render_count(&text);

        if animation.is_finished(now) {
            self.counter_animation = None;
            false
        } else {
            true
        }
    }

    // === Easter egg ===

    pub fn key_down(&mut self, key_code: u32) {
        if self.konami.feed(key_code) {
            log::info!("Konami code entered");
            self.view.shake_page(self.config.shake_ms);
        }
    }
}

/// Run one submission through the gateway.
///
/// The controller is only borrowed around the await, so other events keep
/// being handled while the gateway is pending. Returns true when the counter
/// needs frames.
pub async fn submit<S, V, G>(
    controller: &RefCell<PageController<S, V>>,
    gateway: &G,
    form: RegistrationForm,
    clock: impl Fn() -> f64,
) -> bool
where
    S: KeyValueStore,
    V: PageView,
    G: RegistrationGateway,
{
    let Some(pending) = controller.borrow_mut().begin_registration(form) else {
        return false;
    };
    let result = gateway.register(pending.form()).await;
    controller.borrow_mut().finish_registration(pending, result, clock())
}
