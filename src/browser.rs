//! Browser Effects
//!
//! Blocking dialogs, navigation, and focus, behind a trait so the controller
//! can be tested off the browser.

use wasm_bindgen::JsCast;

pub trait Browser {
    /// Blocking `alert()`
    fn alert(&self, message: &str);
    /// Blocking `confirm()`; false when declined or unavailable
    fn confirm(&self, message: &str) -> bool;
    /// Set `location.href`
    fn navigate(&self, path: &str);
    /// Move focus to the element with `id`
    fn focus(&self, id: &str);
}

/// The real `window`
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowBrowser;

impl Browser for WindowBrowser {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::error!("navigation to {} failed: {:?}", path, e);
        }
    }

    fn focus(&self, id: &str) {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(element) = element {
            let _ = element.focus();
        }
    }
}
