//! web-sys implementation of [`PageView`]
//!
//! Binds to the landing page markup once at startup. A missing element is a
//! startup failure; after binding every render call is infallible.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::confetti::{CONFETTI_KEYFRAMES, ConfettiPiece};
use crate::consts::SUBMITTING_OPACITY;
use crate::error::PageError;
use crate::konami::{SHAKE_ANIMATION, SHAKE_KEYFRAMES};
use crate::registration::RegistrationForm;
use crate::view::{PageView, TranslationTarget, translation_target};

const ORIGINAL_TEXT_ATTR: &str = "data-original-text";

fn by_id<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType {
            selector: format!("#{}", id),
            expected,
        })
}

fn by_selector<T: JsCast>(
    document: &Document,
    selector: &str,
    expected: &'static str,
) -> Result<T, PageError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| PageError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType {
            selector: selector.to_string(),
            expected,
        })
}

/// Read the `value` property of any form control
fn control_value(form: &HtmlFormElement, name: &str) -> String {
    form.query_selector(&format!("[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|el| js_sys::Reflect::get(&el, &JsValue::from_str("value")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// The bound landing page
pub struct DomView {
    document: Document,
    body: HtmlElement,
    theme_toggle: HtmlElement,
    language_select: HtmlSelectElement,
    form: HtmlFormElement,
    first_name: HtmlInputElement,
    name_error: HtmlElement,
    submit_button: HtmlElement,
    modal: HtmlElement,
    close_button: HtmlElement,
    success_message: Element,
    member_count: Element,
}

impl DomView {
    pub fn bind(document: &Document) -> Result<Self, PageError> {
        let body = document.body().ok_or_else(|| PageError::MissingElement("body".to_string()))?;
        Ok(Self {
            document: document.clone(),
            body,
            theme_toggle: by_id(document, "theme-toggle", "HtmlElement")?,
            language_select: by_id(document, "language-select", "HtmlSelectElement")?,
            form: by_id(document, "registration-form", "HtmlFormElement")?,
            first_name: by_id(document, "firstName", "HtmlInputElement")?,
            name_error: by_id(document, "name-error", "HtmlElement")?,
            submit_button: by_selector(document, ".submit-btn", "HtmlElement")?,
            modal: by_id(document, "success-modal", "HtmlElement")?,
            close_button: by_selector(document, ".close", "HtmlElement")?,
            success_message: by_id(document, "success-message", "Element")?,
            member_count: by_id(document, "member-count", "Element")?,
        })
    }

    /// Add the confetti and shake keyframes to `<head>`
    pub fn install_keyframes(&self) -> Result<(), PageError> {
        let head = self
            .document
            .head()
            .ok_or_else(|| PageError::MissingElement("head".to_string()))?;
        for keyframes in [CONFETTI_KEYFRAMES, SHAKE_KEYFRAMES] {
            let style = self.document.create_element("style")?;
            style.set_text_content(Some(keyframes));
            head.append_child(&style)?;
        }
        Ok(())
    }

    pub fn theme_toggle(&self) -> &HtmlElement {
        &self.theme_toggle
    }

    pub fn language_select(&self) -> &HtmlSelectElement {
        &self.language_select
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    pub fn first_name_input(&self) -> &HtmlInputElement {
        &self.first_name
    }

    pub fn close_button(&self) -> &HtmlElement {
        &self.close_button
    }

    /// Whether a click landed on the modal overlay itself
    pub fn is_modal_overlay(&self, target: Option<web_sys::EventTarget>) -> bool {
        target.is_some_and(|t| {
            let t: &JsValue = t.as_ref();
            let modal: &JsValue = self.modal.as_ref();
            t == modal
        })
    }

    /// Current field values of the registration form
    pub fn read_form(&self) -> RegistrationForm {
        RegistrationForm {
            first_name: control_value(&self.form, "firstName"),
            last_name: control_value(&self.form, "lastName"),
            email: control_value(&self.form, "email"),
            birth_year: control_value(&self.form, "birthYear"),
        }
    }

    fn translate_element(element: &Element, lang: &str) {
        let variant = element.get_attribute(&format!("data-{}", lang));
        let input = element.dyn_ref::<HtmlInputElement>();
        let input_type = input.map(|i| i.type_()).unwrap_or_default();
        match translation_target(variant.as_deref(), &element.tag_name(), &input_type) {
            Some(TranslationTarget::Value(text)) => {
                if let Some(input) = input {
                    input.set_value(&text);
                }
            }
            Some(TranslationTarget::Text(text)) => element.set_text_content(Some(&text)),
            None => {}
        }
    }
}

impl PageView for DomView {
    fn theme_attribute(&self) -> Option<String> {
        self.body.get_attribute("data-theme")
    }

    fn render_theme(&mut self, theme: &str) {
        let _ = self.body.set_attribute("data-theme", theme);
    }

    fn spin_theme_toggle(&mut self, duration_ms: u32) {
        set_style(&self.theme_toggle, "transform", "rotate(360deg)");
        let toggle = self.theme_toggle.clone();
        Timeout::new(duration_ms, move || set_style(&toggle, "transform", "rotate(0deg)")).forget();
    }

    fn render_language(&mut self, lang: &str) {
        if let Some(html) = self.document.document_element() {
            let _ = html.set_attribute("lang", lang);
        }
        self.language_select.set_value(lang);

        let Ok(elements) = self.document.query_selector_all("[data-fr][data-en]") else {
            return;
        };
        for i in 0..elements.length() {
            if let Some(element) = elements.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                Self::translate_element(&element, lang);
            }
        }
    }

    fn render_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn render_name_error(&mut self, message: Option<&str>) {
        match message {
            Some(message) => {
                self.name_error.set_text_content(Some(message));
                set_style(&self.name_error, "display", "block");
            }
            None => {
                self.name_error.set_text_content(Some(""));
                set_style(&self.name_error, "display", "none");
            }
        }
    }

    fn show_submitting(&mut self, label: &str) {
        let original = self.submit_button.text_content().unwrap_or_default();
        let _ = self.submit_button.set_attribute("disabled", "");
        set_style(&self.submit_button, "opacity", SUBMITTING_OPACITY);
        self.submit_button.set_text_content(Some(label));
        let _ = self.submit_button.set_attribute(ORIGINAL_TEXT_ATTR, &original);
    }

    fn restore_submit(&mut self) {
        let _ = self.submit_button.remove_attribute("disabled");
        set_style(&self.submit_button, "opacity", "1");
        let original = self.submit_button.get_attribute(ORIGINAL_TEXT_ATTR);
        self.submit_button.set_text_content(original.as_deref());
    }

    fn reset_form(&mut self) {
        self.form.reset();
    }

    fn displayed_count(&self) -> String {
        self.member_count.text_content().unwrap_or_default()
    }

    fn render_count(&mut self, text: &str) {
        self.member_count.set_text_content(Some(text));
    }

    fn show_modal(&mut self, message: &str) {
        self.success_message.set_text_content(Some(message));
        set_style(&self.modal, "display", "block");
    }

    fn hide_modal(&mut self) {
        set_style(&self.modal, "display", "none");
    }

    fn launch_confetti(&mut self, burst: Vec<ConfettiPiece>, lifetime_ms: u32) {
        for piece in burst {
            let document = self.document.clone();
            let body = self.body.clone();
            Timeout::new(piece.spawn_delay_ms, move || {
                let Ok(dot) = document.create_element("div") else {
                    return;
                };
                let _ = dot.set_attribute("style", &piece.style());
                if body.append_child(&dot).is_ok() {
                    Timeout::new(lifetime_ms, move || dot.remove()).forget();
                }
            })
            .forget();
        }
    }

    fn shake_page(&mut self, duration_ms: u32) {
        set_style(&self.body, "animation", SHAKE_ANIMATION);
        let body = self.body.clone();
        Timeout::new(duration_ms, move || set_style(&body, "animation", "")).forget();
    }
}
