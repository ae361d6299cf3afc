//! Rendered node trees to live DOM.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use mindsphere_sdk::prelude::{
    ClickAction, ContentDocument, DetailController, DetailSurface, Element, ModalRegion, Mount,
    MountPoints, Node, PageLogger,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

use crate::error::MountError;

/// CSS class that hides the detail overlay.
pub const HIDDEN_CLASS: &str = "hidden";

/// Look up a required element by id.
pub fn element_by_id(document: &Document, id: &str) -> Result<web_sys::Element, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_string()))
}

/// Attach a listener that lives as long as the page.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), MountError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(MountError::dom)?;
    closure.forget();
    Ok(())
}

/// Shared detail controller, driven by card and modal listeners.
pub type SharedDetail = Rc<RefCell<DetailController<WebSurface>>>;

/// What card click listeners need: the loaded document and, when the
/// overlay markup is usable, the detail view.
#[derive(Clone)]
pub struct CardWiring {
    pub document: Rc<ContentDocument>,
    pub detail: Option<SharedDetail>,
}

impl CardWiring {
    /// Run a card's click action. Returns `false` when no detail view is
    /// wired, the controller is busy, or the reference does not resolve.
    pub fn activate(&self, action: ClickAction) -> bool {
        let Some(detail) = &self.detail else {
            return false;
        };
        match detail.try_borrow_mut() {
            Ok(mut detail) => detail.activate(&self.document, action),
            Err(_) => false,
        }
    }
}

/// Builds DOM nodes from rendered trees.
#[derive(Clone)]
pub struct DomBuilder {
    document: Document,
}

impl DomBuilder {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Build a DOM node. Click actions are wired only when `wiring` is given.
    pub fn build(
        &self,
        node: &Node,
        wiring: Option<&CardWiring>,
    ) -> Result<web_sys::Node, MountError> {
        match node {
            Node::Text(text) => Ok(self.document.create_text_node(text).into()),
            Node::Element(el) => Ok(self.build_element(el, wiring)?.into()),
        }
    }

    fn build_element(
        &self,
        el: &Element,
        wiring: Option<&CardWiring>,
    ) -> Result<web_sys::Element, MountError> {
        let dom = self.document.create_element(el.tag).map_err(MountError::dom)?;

        for class in &el.classes {
            dom.class_list().add_1(class).map_err(MountError::dom)?;
        }
        for (name, value) in &el.attributes {
            dom.set_attribute(name, value).map_err(MountError::dom)?;
        }
        for child in &el.children {
            dom.append_child(&self.build(child, wiring)?)
                .map_err(MountError::dom)?;
        }

        let card_wiring = wiring.filter(|w| w.detail.is_some());
        if let (Some(action), Some(wiring)) = (el.on_click, card_wiring) {
            wire_card(&dom, action, wiring.clone())?;
        }

        Ok(dom)
    }
}

fn wire_card(
    dom: &web_sys::Element,
    action: ClickAction,
    wiring: CardWiring,
) -> Result<(), MountError> {
    listen(dom, "click", move |_| {
        wiring.activate(action);
    })
}

/// The `#content` container, accepting rendered sections.
pub struct DomMount {
    root: web_sys::Element,
    builder: DomBuilder,
    wiring: CardWiring,
    logger: PageLogger,
    failures: Vec<MountError>,
}

impl DomMount {
    pub fn new(
        root: web_sys::Element,
        builder: DomBuilder,
        wiring: CardWiring,
        logger: &PageLogger,
    ) -> Self {
        Self {
            root,
            builder,
            wiring,
            logger: logger.for_component("dom"),
            failures: Vec::new(),
        }
    }

    /// First failure seen while appending, if any.
    pub fn finish(self) -> Result<(), MountError> {
        match self.failures.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Mount for DomMount {
    fn append(&mut self, node: Node) {
        let result = self
            .builder
            .build(&node, Some(&self.wiring))
            .and_then(|dom| self.root.append_child(&dom).map_err(MountError::dom));

        if let Err(err) = result {
            self.logger
                .error_builder("failed to mount section")
                .field("error", err.to_string())
                .emit();
            self.failures.push(err);
        }
    }
}

/// Detail overlay backed by the page's modal markup.
pub struct WebSurface {
    modal: web_sys::Element,
    regions: HashMap<ModalRegion, web_sys::Element>,
    builder: DomBuilder,
    logger: PageLogger,
}

impl WebSurface {
    /// Resolve the overlay and every region. Fails if any is missing.
    pub fn from_document(
        document: &Document,
        mount: &MountPoints,
        logger: &PageLogger,
    ) -> Result<Self, MountError> {
        let mut regions = HashMap::new();
        for region in ModalRegion::ALL {
            let id = match region {
                ModalRegion::Title => &mount.modal_title,
                ModalRegion::Meta => &mount.modal_meta,
                ModalRegion::Body => &mount.modal_body,
                ModalRegion::Predictive => &mount.modal_predictive,
                ModalRegion::Sources => &mount.modal_sources,
            };
            regions.insert(region, element_by_id(document, id)?);
        }

        Ok(Self {
            modal: element_by_id(document, &mount.modal)?,
            regions,
            builder: DomBuilder::new(document.clone()),
            logger: logger.for_component("dom"),
        })
    }

    /// The overlay element (the backdrop).
    pub fn modal(&self) -> &web_sys::Element {
        &self.modal
    }

    fn try_fill(&self, region: ModalRegion, nodes: &[Node]) -> Result<(), MountError> {
        let target = self
            .regions
            .get(&region)
            .ok_or_else(|| MountError::MissingElement(format!("{:?}", region)))?;

        target.set_text_content(None);
        for node in nodes {
            target
                .append_child(&self.builder.build(node, None)?)
                .map_err(MountError::dom)?;
        }
        Ok(())
    }
}

impl DetailSurface for WebSurface {
    fn set_visible(&mut self, visible: bool) {
        let classes = self.modal.class_list();
        let result = if visible {
            classes.remove_1(HIDDEN_CLASS)
        } else {
            classes.add_1(HIDDEN_CLASS)
        };

        if let Err(err) = result.map_err(MountError::dom) {
            self.logger
                .warn_builder("failed to toggle detail view")
                .field("error", err.to_string())
                .emit();
        }
    }

    fn fill(&mut self, region: ModalRegion, nodes: Vec<Node>) {
        if let Err(err) = self.try_fill(region, &nodes) {
            self.logger
                .warn_builder("failed to fill detail region")
                .field("region", format!("{:?}", region))
                .field("error", err.to_string())
                .emit();
        }
    }
}

#[cfg(test)]
mod tests {
    use mindsphere_sdk::prelude::{SignalRef, Tier};

    use super::*;

    #[test]
    fn test_cards_without_detail_view_do_nothing() {
        let document = ContentDocument::from_slice(
            br#"{
                "meta": { "hero_headline": "H", "hero_body": [] },
                "signals": { "primary": [{
                    "title": "T",
                    "summary": "S",
                    "automation_readiness": { "readiness": "High", "time_to_value": "30d" },
                    "predictive_conclusion": "P"
                }] }
            }"#,
        )
        .unwrap();
        let wiring = CardWiring {
            document: Rc::new(document),
            detail: None,
        };

        assert!(!wiring.activate(ClickAction::ShowDetail(SignalRef::new(Tier::Primary, 0))));
    }
}
