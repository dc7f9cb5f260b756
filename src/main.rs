//! Club Loulou entry point
//!
//! Binds the page controller to the DOM and wires up the event listeners.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Event, KeyboardEvent};

    use club_loulou::controller::submit;
    use club_loulou::platform::{self, DomView, LocalStorage};
    use club_loulou::registration::SimulatedDelay;
    use club_loulou::{PageConfig, PageController, PageError};

    type Controller = PageController<LocalStorage, DomView>;

    /// Page instance shared by all listeners
    struct Page {
        controller: RefCell<Controller>,
        /// A counter animation frame is already requested
        frame_scheduled: Cell<bool>,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Club Loulou starting...");

        if let Err(e) = start() {
            log::error!("Club Loulou failed to start: {}", e);
        }
    }

    fn start() -> Result<(), PageError> {
        let window = web_sys::window().ok_or(PageError::NoDocument)?;
        let document = window.document().ok_or(PageError::NoDocument)?;

        let config = PageConfig::load();
        let view = DomView::bind(&document)?;
        view.install_keyframes()?;

        let seed = js_sys::Date::now() as u64;
        let controller = PageController::new(config, LocalStorage::open(), view, seed);
        let page = Rc::new(Page {
            controller: RefCell::new(controller),
            frame_scheduled: Cell::new(false),
        });

        setup_theme_toggle(&page);
        setup_language_select(&page);
        setup_registration_form(&page);
        setup_modal(&page, &window);
        setup_konami(&page, &document);

        let env = platform::read_environment(&window);
        let animating = page.controller.borrow_mut().init(&env, platform::now());
        if animating {
            request_counter_frame(page.clone());
        }

        log::info!("Club Loulou ready (seed {})", seed);
        Ok(())
    }

    fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
        let closure = Closure::<dyn FnMut(_)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_theme_toggle(page: &Rc<Page>) {
        let toggle = page.controller.borrow().view().theme_toggle().clone();
        let page = page.clone();
        listen(&toggle, "click", move |_event: Event| {
            page.controller.borrow_mut().toggle_theme();
        });
    }

    fn setup_language_select(page: &Rc<Page>) {
        let select = page.controller.borrow().view().language_select().clone();
        let page = page.clone();
        let select_clone = select.clone();
        listen(&select, "change", move |_event: Event| {
            let lang = select_clone.value();
            log::info!("Language switched to {}", lang);
            page.controller.borrow_mut().set_language(&lang);
        });
    }

    fn setup_registration_form(page: &Rc<Page>) {
        // Real-time name validation
        {
            let input = page.controller.borrow().view().first_name_input().clone();
            let page = page.clone();
            let input_clone = input.clone();
            listen(&input, "input", move |_event: Event| {
                page.controller.borrow_mut().validate_name(&input_clone.value());
            });
        }

        // Submit
        {
            let form = page.controller.borrow().view().form().clone();
            let page = page.clone();
            listen(&form, "submit", move |event: Event| {
                event.prevent_default();
                let (fields, delay_ms) = {
                    let c = page.controller.borrow();
                    (c.view().read_form(), c.config().submit_delay_ms)
                };
                let page = page.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let gateway = SimulatedDelay::new(delay_ms);
                    if submit(&page.controller, &gateway, fields, platform::now).await {
                        request_counter_frame(page);
                    }
                });
            });
        }
    }

    fn setup_modal(page: &Rc<Page>, window: &web_sys::Window) {
        // Close button
        {
            let close = page.controller.borrow().view().close_button().clone();
            let page = page.clone();
            listen(&close, "click", move |_event: Event| {
                page.controller.borrow_mut().close_modal();
            });
        }

        // Click on the overlay
        {
            let page = page.clone();
            listen(window, "click", move |event: Event| {
                let mut c = page.controller.borrow_mut();
                let on_overlay = c.view().is_modal_overlay(event.target());
                c.window_clicked(on_overlay);
            });
        }
    }

    fn setup_konami(page: &Rc<Page>, document: &web_sys::Document) {
        let page = page.clone();
        listen(document, "keydown", move |event: Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                page.controller.borrow_mut().key_down(key.key_code());
            }
        });
    }

    fn request_counter_frame(page: Rc<Page>) {
        if page.frame_scheduled.replace(true) {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            counter_frame(page, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn counter_frame(page: Rc<Page>, time: f64) {
        page.frame_scheduled.set(false);
        let more = page.controller.borrow_mut().advance_counter(time);
        if more {
            request_counter_frame(page);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Club Loulou (native) starting...");
    log::info!("The page runs in the browser - build for wasm32 and serve index.html");

    println!("\nRunning headless page walkthrough...");
    headless_walkthrough();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_walkthrough() {
    use club_loulou::controller::Environment;
    use club_loulou::{HeadlessView, MemoryStore, PageConfig, PageController, RegistrationForm};

    let mut page = PageController::new(
        PageConfig::default(),
        MemoryStore::new(),
        HeadlessView::landing_page(),
        7,
    );
    let env = Environment {
        prefers_dark: false,
        browser_language: "fr-FR".to_string(),
    };
    page.init(&env, 0.0);
    while page.advance_counter(1000.0) {}

    let form = RegistrationForm::new("Louise", "Dupont", "louise.dupont@example.com", "1992");
    match page.begin_registration(form) {
        Some(pending) => {
            page.finish_registration(pending, Ok(()), 2000.0);
            while page.advance_counter(3000.0) {}
        }
        None => println!("✗ Registration was rejected"),
    }

    let view = page.view();
    assert!(view.modal_visible, "Success modal should be visible");
    assert_eq!(view.count_text, "2");
    println!("✓ {}", view.modal_message);
    println!("✓ Members: {}", view.count_text);
}
