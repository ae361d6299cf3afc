//! Contact form wiring.

use std::rc::Rc;

use mindsphere_sdk::prelude::{ContactController, ContactForm, FormValues, Navigator, PageLogger};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window};

use crate::dom::listen;
use crate::error::MountError;

/// Navigates by assigning `window.location.href`.
pub struct LocationNavigator {
    window: Window,
    logger: PageLogger,
}

impl LocationNavigator {
    pub fn new(window: Window, logger: &PageLogger) -> Self {
        Self {
            window,
            logger: logger.for_component("forms"),
        }
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&mut self, uri: &str) {
        if self.window.location().set_href(uri).is_err() {
            self.logger.warn("navigation to mail link was blocked");
        }
    }
}

/// Read each of the form's named fields. Missing controls read as empty.
fn read_values(form: &web_sys::Element, kind: ContactForm) -> FormValues {
    kind.fields()
        .iter()
        .map(|(name, _)| {
            let selector = format!("[name=\"{}\"]", name);
            let value = form
                .query_selector(&selector)
                .ok()
                .flatten()
                .map(|control| control_value(&control))
                .unwrap_or_default();
            (*name, value)
        })
        .collect()
}

fn control_value(control: &web_sys::Element) -> String {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Intercept submission of the form with `id`, if the page has it.
///
/// Returns whether the form was found.
pub fn wire_form(
    document: &Document,
    window: &Window,
    id: &str,
    kind: ContactForm,
    contact: Rc<ContactController>,
    logger: &PageLogger,
) -> Result<bool, MountError> {
    let Some(form) = document.get_element_by_id(id) else {
        logger
            .debug_builder("contact form not on page")
            .field("form", kind.as_str())
            .emit();
        return Ok(false);
    };

    let mut navigator = LocationNavigator::new(window.clone(), logger);
    let target = form.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let values = read_values(&target, kind);
        contact.submit(kind, &values, &mut navigator);
    })?;

    Ok(true)
}
