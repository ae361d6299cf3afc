//! Playbook section.

use mindsphere_core::Playbook;

use super::titled_section;
use crate::node::{labelled_item, Element};

pub const PLAYBOOKS_HEADING: &str = "Playbook of the Night";

/// Render every playbook. Callers skip this when the list is empty.
pub fn render_playbooks(playbooks: &[Playbook]) -> Element {
    titled_section(PLAYBOOKS_HEADING).children(playbooks.iter().map(render_playbook))
}

fn render_playbook(pb: &Playbook) -> Element {
    Element::new("div")
        .class("playbook")
        .child(Element::with_text("h4", pb.name.as_str()))
        .child(
            Element::new("ul")
                .child(labelled_item("Stack", &pb.stack.join(", ")))
                .child(labelled_item("Trigger", &pb.trigger))
                .child(labelled_item("Action", &pb.action))
                .child(labelled_item("Guardrails", &pb.guardrails))
                .child(labelled_item("KPI", &pb.kpi)),
        )
}
