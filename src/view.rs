//! Rendering surface
//!
//! Everything the controller shows goes through [`PageView`], so the decision
//! logic runs the same against the real DOM (`platform::dom::DomView`) and the
//! in-memory [`HeadlessView`].

use crate::confetti::ConfettiPiece;
use crate::registration::RegistrationForm;

/// Presentation operations the controller needs
pub trait PageView {
    /// Current `data-theme` attribute on the body, if any
    fn theme_attribute(&self) -> Option<String>;
    fn render_theme(&mut self, theme: &str);
    /// Spin the theme toggle once, resetting after `duration_ms`
    fn spin_theme_toggle(&mut self, duration_ms: u32);

    /// Set the document language, the selector value and every translatable
    /// element's text to the `lang` variant
    fn render_language(&mut self, lang: &str);
    fn render_title(&mut self, title: &str);

    /// Show an inline error under the first-name field, or hide it
    fn render_name_error(&mut self, message: Option<&str>);

    /// Disable and dim the submit button, saving its label
    fn show_submitting(&mut self, label: &str);
    /// Undo [`PageView::show_submitting`]
    fn restore_submit(&mut self);
    fn reset_form(&mut self);

    /// Text currently shown in the member counter
    fn displayed_count(&self) -> String;
    fn render_count(&mut self, text: &str);

    fn show_modal(&mut self, message: &str);
    fn hide_modal(&mut self);

    fn launch_confetti(&mut self, burst: Vec<ConfettiPiece>, lifetime_ms: u32);
    fn shake_page(&mut self, duration_ms: u32);
}

/// Where a translated string is written on an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationTarget {
    /// `value` attribute of a submit-type `<input>`
    Value(String),
    /// Text content of anything else
    Text(String),
}

/// Pick the text for an element and where it goes.
///
/// `variant` is the element's `data-<lang>` attribute; an absent or empty
/// variant leaves the element untouched.
pub fn translation_target(
    variant: Option<&str>,
    tag_name: &str,
    input_type: &str,
) -> Option<TranslationTarget> {
    let text = variant.filter(|t| !t.is_empty())?.to_string();
    if tag_name.eq_ignore_ascii_case("input") && input_type.eq_ignore_ascii_case("submit") {
        Some(TranslationTarget::Value(text))
    } else {
        Some(TranslationTarget::Text(text))
    }
}

/// An element with `data-fr`/`data-en` variants
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslatableElement {
    /// (language tag, text) pairs from the `data-*` attributes
    pub variants: Vec<(String, String)>,
    /// Upper-case tag name, as `Element.tagName` reports it
    pub tag_name: String,
    /// `type` of an `<input>`, empty otherwise
    pub input_type: String,
    pub content: String,
    pub value: String,
}

impl TranslatableElement {
    pub fn new(fr: &str, en: &str) -> Self {
        Self {
            variants: vec![("fr".to_string(), fr.to_string()), ("en".to_string(), en.to_string())],
            tag_name: "SPAN".to_string(),
            ..Default::default()
        }
    }

    /// `<input type="submit">` with translated values
    pub fn submit_input(fr: &str, en: &str) -> Self {
        Self {
            tag_name: "INPUT".to_string(),
            input_type: "submit".to_string(),
            ..Self::new(fr, en)
        }
    }

    /// Variant text for `lang`, if present
    pub fn variant(&self, lang: &str) -> Option<&str> {
        self.variants
            .iter()
            .find(|(tag, _)| tag == lang)
            .map(|(_, text)| text.as_str())
    }

    /// Apply the `lang` variant the way the DOM view does
    pub fn translate(&mut self, lang: &str) {
        match translation_target(self.variant(lang), &self.tag_name, &self.input_type) {
            Some(TranslationTarget::Value(text)) => self.value = text,
            Some(TranslationTarget::Text(text)) => self.content = text,
            None => {}
        }
    }
}

/// Submit button presentation
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    pub opacity: String,
    /// Label saved while submitting (`data-original-text`)
    pub original_label: Option<String>,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            label: String::new(),
            disabled: false,
            opacity: "1".to_string(),
            original_label: None,
        }
    }
}

/// In-memory page used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct HeadlessView {
    pub theme: Option<String>,
    pub theme_spins: u32,
    pub document_lang: Option<String>,
    pub language_select: String,
    pub title: String,
    pub translatables: Vec<TranslatableElement>,
    pub name_error: Option<String>,
    pub submit: SubmitButton,
    /// Variants of the submit button label, if it is translatable
    pub submit_translation: Option<TranslatableElement>,
    pub form: RegistrationForm,
    pub count_text: String,
    pub modal_visible: bool,
    pub modal_message: String,
    pub confetti_bursts: Vec<Vec<ConfettiPiece>>,
    pub shakes: u32,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with the translatable submit button from the landing page markup
    pub fn landing_page() -> Self {
        let submit = TranslatableElement::new("Rejoindre le club", "Join the club");
        Self {
            title: "Club Loulou".to_string(),
            submit: SubmitButton {
                label: submit.variant("fr").unwrap_or_default().to_string(),
                ..Default::default()
            },
            translatables: vec![TranslatableElement::new(
                "Bienvenue au Club Loulou",
                "Welcome to Club Loulou",
            )],
            submit_translation: Some(submit),
            ..Default::default()
        }
    }
}

impl PageView for HeadlessView {
    fn theme_attribute(&self) -> Option<String> {
        self.theme.clone()
    }

    fn render_theme(&mut self, theme: &str) {
        self.theme = Some(theme.to_string());
    }

    fn spin_theme_toggle(&mut self, _duration_ms: u32) {
        self.theme_spins += 1;
    }

    fn render_language(&mut self, lang: &str) {
        self.document_lang = Some(lang.to_string());
        self.language_select = lang.to_string();
        for element in &mut self.translatables {
            element.translate(lang);
        }
        if let Some(text) = self
            .submit_translation
            .as_ref()
            .and_then(|t| t.variant(lang))
            .filter(|t| !t.is_empty())
        {
            self.submit.label = text.to_string();
        }
    }

    fn render_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn render_name_error(&mut self, message: Option<&str>) {
        self.name_error = message.map(str::to_string);
    }

    fn show_submitting(&mut self, label: &str) {
        self.submit.original_label = Some(std::mem::replace(&mut self.submit.label, label.to_string()));
        self.submit.disabled = true;
        self.submit.opacity = crate::consts::SUBMITTING_OPACITY.to_string();
    }

    fn restore_submit(&mut self) {
        self.submit.disabled = false;
        self.submit.opacity = "1".to_string();
        if let Some(original) = self.submit.original_label.take() {
            self.submit.label = original;
        }
    }

    fn reset_form(&mut self) {
        self.form = RegistrationForm::default();
    }

    fn displayed_count(&self) -> String {
        self.count_text.clone()
    }

    fn render_count(&mut self, text: &str) {
        self.count_text = text.to_string();
    }

    fn show_modal(&mut self, message: &str) {
        self.modal_message = message.to_string();
        self.modal_visible = true;
    }

    fn hide_modal(&mut self) {
        self.modal_visible = false;
    }

    fn launch_confetti(&mut self, burst: Vec<ConfettiPiece>, _lifetime_ms: u32) {
        self.confetti_bursts.push(burst);
    }

    fn shake_page(&mut self, _duration_ms: u32) {
        self.shakes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitting_round_trip_restores_label() {
        let mut view = HeadlessView::landing_page();
        view.show_submitting("Inscription en cours...");
        assert!(view.submit.disabled);
        assert_eq!(view.submit.opacity, "0.7");
        assert_eq!(view.submit.label, "Inscription en cours...");
        view.restore_submit();
        assert!(!view.submit.disabled);
        assert_eq!(view.submit.opacity, "1");
        assert_eq!(view.submit.label, "Rejoindre le club");
    }

    #[test]
    fn test_render_language_skips_missing_variant() {
        let mut view = HeadlessView::landing_page();
        view.render_language("en");
        assert_eq!(view.translatables[0].content, "Welcome to Club Loulou");
        view.render_language("de");
        assert_eq!(view.translatables[0].content, "Welcome to Club Loulou");
        assert_eq!(view.document_lang.as_deref(), Some("de"));
    }

    #[test]
    fn test_translation_target_submit_input_gets_value() {
        assert_eq!(
            translation_target(Some("Join the club"), "INPUT", "submit"),
            Some(TranslationTarget::Value("Join the club".to_string()))
        );
    }

    #[test]
    fn test_translation_target_other_elements_get_text() {
        assert_eq!(
            translation_target(Some("Prénom"), "INPUT", "text"),
            Some(TranslationTarget::Text("Prénom".to_string()))
        );
        assert_eq!(
            translation_target(Some("Envoyer"), "BUTTON", "submit"),
            Some(TranslationTarget::Text("Envoyer".to_string()))
        );
        assert_eq!(
            translation_target(Some("Bienvenue"), "H1", ""),
            Some(TranslationTarget::Text("Bienvenue".to_string()))
        );
    }

    #[test]
    fn test_translation_target_missing_or_empty_variant() {
        assert_eq!(translation_target(None, "INPUT", "submit"), None);
        assert_eq!(translation_target(Some(""), "P", ""), None);
    }

    #[test]
    fn test_submit_input_translates_value_not_content() {
        let mut view = HeadlessView::landing_page();
        view.translatables
            .push(TranslatableElement::submit_input("Envoyer", "Send"));
        view.render_language("en");
        assert_eq!(view.translatables[1].value, "Send");
        assert_eq!(view.translatables[1].content, "");
        view.render_language("fr");
        assert_eq!(view.translatables[1].value, "Envoyer");
    }
}
