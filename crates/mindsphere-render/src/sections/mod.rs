//! Section renderers for the newsletter page.

mod actions;
mod hero;
mod office_hours;
mod playbooks;
mod reflection;
mod scoreboard;
mod signals;
mod spotlight;

pub use actions::*;
pub use hero::*;
pub use office_hours::*;
pub use playbooks::*;
pub use reflection::*;
pub use scoreboard::*;
pub use signals::*;
pub use spotlight::*;

use crate::node::Element;

/// `<section class="section">` with an `h2` heading.
fn titled_section(heading: impl Into<String>) -> Element {
    Element::new("section")
        .class("section")
        .child(Element::with_text("h2", heading))
}

/// One `<p>` per paragraph.
fn paragraphs(paras: &[String]) -> impl Iterator<Item = Element> + '_ {
    paras.iter().map(|p| Element::with_text("p", p.as_str()))
}
