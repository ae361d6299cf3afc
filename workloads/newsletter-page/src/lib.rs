//! Mindsphere newsletter page - browser workload.
//!
//! On start this workload:
//! - Wires the detail overlay (close button, backdrop click)
//! - Wires the newsletter signup and client inquiry forms
//! - Fetches the content document once and renders it into `#content`
//!
//! A failed load leaves `#content` as the static markup shipped it.

mod console;
mod dom;
mod error;
mod fetch;
mod forms;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::Context;
use mindsphere_sdk::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

pub use console::ConsoleSink;
pub use dom::{CardWiring, DomBuilder, DomMount, SharedDetail, WebSurface, HIDDEN_CLASS};
pub use error::MountError;
pub use fetch::FetchSource;
pub use forms::LocationNavigator;

/// Id of an optional `<script type="application/json">` holding [`PageConfig`] overrides.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Page entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let boot = || -> anyhow::Result<(Window, Document)> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        Ok((window, document))
    };

    match boot() {
        Ok((window, document)) => {
            let config = page_config(&document);
            let view_id = PageViewId::from_seed(js_sys::Date::now() as u64);
            let ctx = PageContext::new(view_id, config);
            let logger = PageLogger::from_context(&ctx)
                .with_sink(Arc::new(ConsoleSink))
                .with_clock(js_sys::Date::now);

            run(window, document, ctx, &logger);
        }
        Err(e) => web_sys::console::error_1(&JsValue::from_str(&format!("{:#}", e))),
    }
}

/// Read config overrides from the page, falling back to defaults.
fn page_config(document: &Document) -> PageConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };

    match PageConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            let message = format!("ignoring page config: {}", e);
            web_sys::console::warn_1(&JsValue::from_str(&message));
            PageConfig::default()
        }
    }
}

/// Wire the page. The load and render path does not depend on the overlay or
/// form markup: a wiring failure there is logged and the rest carries on.
fn run(window: Window, document: Document, ctx: PageContext, logger: &PageLogger) {
    let mount = ctx.config.mount.clone();

    let detail = match wire_detail(&document, &mount, logger) {
        Ok(detail) => Some(detail),
        Err(e) => {
            report(logger, "detail view unavailable", e.into());
            None
        }
    };
    let detail_wired = detail.is_some();

    match dom::element_by_id(&document, &mount.content) {
        Ok(root) => load_and_render(window.clone(), document.clone(), root, detail, &ctx, logger),
        Err(e) => report(logger, "content root unavailable", e.into()),
    }

    let contact = Rc::new(ContactController::new(&ctx, logger));
    let mut forms_wired = [false; 2];
    for (wired, (id, form)) in forms_wired.iter_mut().zip([
        (&mount.subscribe_form, ContactForm::Newsletter),
        (&mount.client_form, ContactForm::Inquiry),
    ]) {
        match forms::wire_form(&document, &window, id, form, contact.clone(), logger)
            .with_context(|| format!("wiring {} form", form.as_str()))
        {
            Ok(found) => *wired = found,
            Err(e) => report(logger, "contact form unavailable", e),
        }
    }

    logger
        .info_builder("page wired")
        .field_bool("detail", detail_wired)
        .field_bool("newsletter_form", forms_wired[0])
        .field_bool("inquiry_form", forms_wired[1])
        .emit();
}

/// Fetch the content document once and render it into `root`.
fn load_and_render(
    window: Window,
    document: Document,
    root: web_sys::Element,
    detail: Option<SharedDetail>,
    ctx: &PageContext,
    logger: &PageLogger,
) {
    let ctx = ctx.clone();
    let logger = logger.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let source = FetchSource::new(window);
        let doc = match Loader::new(source, &ctx, &logger).load().await {
            Ok(doc) => Rc::new(doc),
            // Already logged by the loader.
            Err(_) => return,
        };

        let wiring = CardWiring {
            document: doc.clone(),
            detail,
        };
        let mut target = DomMount::new(root, DomBuilder::new(document), wiring, &logger);
        Renderer::new(&ctx, &logger).render(&doc, &mut target);

        if let Err(e) = target.finish() {
            report(&logger, "page rendered incompletely", e.into());
        }
    });
}

fn report(logger: &PageLogger, message: &str, error: anyhow::Error) {
    logger
        .error_builder(message)
        .field("error", format!("{:#}", error))
        .emit();
}

/// Build the detail controller and hook up its close button and backdrop.
fn wire_detail(
    document: &Document,
    mount: &MountPoints,
    logger: &PageLogger,
) -> Result<SharedDetail, MountError> {
    let surface = WebSurface::from_document(document, mount, logger)?;
    let modal = surface.modal().clone();
    let detail: SharedDetail = Rc::new(RefCell::new(DetailController::new(surface, logger)));

    let close = dom::element_by_id(document, &mount.modal_close)?;
    let on_close = detail.clone();
    dom::listen(&close, "click", move |_| {
        if let Ok(mut detail) = on_close.try_borrow_mut() {
            detail.close();
        }
    })?;

    let on_backdrop = detail.clone();
    let backdrop = modal.clone();
    dom::listen(&modal, "click", move |event| {
        let backdrop_node: &web_sys::Node = &backdrop;
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let on_backdrop_itself = target
            .as_ref()
            .is_some_and(|t| t.is_same_node(Some(backdrop_node)));
        let hit = if on_backdrop_itself {
            ClickTarget::Backdrop
        } else {
            ClickTarget::Content
        };
        if let Ok(mut detail) = on_backdrop.try_borrow_mut() {
            detail.handle_click(hit);
        }
    })?;

    Ok(detail)
}
