//! Action items section.

use mindsphere_core::Actions;

use crate::node::{labelled_item, Element};

pub const ACTIONS_HEADING: &str = "Action Items";

/// Render the operator and engagement actions.
pub fn render_actions(actions: &Actions) -> Element {
    Element::new("section")
        .class("section")
        .class("actions")
        .child(Element::with_text("h3", ACTIONS_HEADING))
        .child(
            Element::new("ul")
                .child(labelled_item("Operator Action", &actions.operator_action))
                .child(labelled_item("Engagement Action", &actions.engagement_action)),
        )
}
