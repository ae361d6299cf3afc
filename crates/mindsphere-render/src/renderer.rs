//! Document to page rendering.

use std::fmt;

use mindsphere_core::{ContentDocument, PageContext, Tier};
use mindsphere_observability::PageLogger;

use crate::mount::Mount;
use crate::node::{ClickAction, Element, Node};
use crate::sections::{
    render_actions, render_hero, render_office_hours, render_playbooks, render_reflection,
    render_scoreboard, render_signal_tier, render_spotlight,
};

/// Page sections in their fixed render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Scoreboard,
    Signals(Tier),
    Spotlight,
    Playbooks,
    Reflection,
    Actions,
    OfficeHours,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hero => write!(f, "hero"),
            Self::Scoreboard => write!(f, "scoreboard"),
            Self::Signals(tier) => write!(f, "signals.{}", tier),
            Self::Spotlight => write!(f, "spotlight"),
            Self::Playbooks => write!(f, "playbooks"),
            Self::Reflection => write!(f, "reflection"),
            Self::Actions => write!(f, "actions"),
            Self::OfficeHours => write!(f, "office_hours"),
        }
    }
}

/// A built section, ready to mount.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub element: Element,
}

/// What a render pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Sections appended, in order.
    pub sections: Vec<SectionKind>,
    /// Signal cards across all tiers.
    pub cards: usize,
}

/// Build every present section in fixed order.
///
/// Absent optional sections and empty lists are skipped entirely.
pub fn build_sections(doc: &ContentDocument, default_recipient: &str) -> Vec<RenderedSection> {
    let mut sections = vec![RenderedSection {
        kind: SectionKind::Hero,
        element: render_hero(&doc.meta),
    }];
    let mut push = |kind, element| sections.push(RenderedSection { kind, element });

    if let Some(scoreboard) = &doc.scoreboard {
        push(SectionKind::Scoreboard, render_scoreboard(scoreboard));
    }

    for tier in Tier::ALL {
        let items = doc.signals.tier(tier);
        if !items.is_empty() {
            push(SectionKind::Signals(tier), render_signal_tier(tier, items));
        }
    }

    if let Some(spotlight) = &doc.spotlight {
        push(SectionKind::Spotlight, render_spotlight(spotlight));
    }
    if !doc.playbooks.is_empty() {
        push(SectionKind::Playbooks, render_playbooks(&doc.playbooks));
    }
    if !doc.reflection.is_empty() {
        push(SectionKind::Reflection, render_reflection(&doc.reflection));
    }
    if let Some(actions) = &doc.actions {
        push(SectionKind::Actions, render_actions(actions));
    }
    if let Some(office_hours) = &doc.office_hours {
        push(
            SectionKind::OfficeHours,
            render_office_hours(office_hours, default_recipient),
        );
    }

    sections
}

/// Renders a content document into a root container.
#[derive(Debug, Clone)]
pub struct Renderer {
    default_recipient: String,
    logger: PageLogger,
}

impl Renderer {
    pub fn new(ctx: &PageContext, logger: &PageLogger) -> Self {
        Self {
            default_recipient: ctx.config.contact_recipient.clone(),
            logger: logger.for_component("renderer"),
        }
    }

    /// Append every present section to `root`, in fixed order.
    pub fn render<M: Mount + ?Sized>(&self, doc: &ContentDocument, root: &mut M) -> RenderSummary {
        let mut summary = RenderSummary::default();

        for section in build_sections(doc, &self.default_recipient) {
            let cards = count_cards(&section.element);
            self.logger
                .debug_builder("section rendered")
                .field("section", section.kind.to_string())
                .field_u64("cards", cards as u64)
                .emit();

            summary.sections.push(section.kind);
            summary.cards += cards;
            root.append(Node::Element(section.element));
        }

        self.logger
            .info_builder("page rendered")
            .field_u64("sections", summary.sections.len() as u64)
            .field_u64("cards", summary.cards as u64)
            .emit();

        summary
    }
}

fn count_cards(el: &Element) -> usize {
    el.find_all(|e| matches!(e.on_click, Some(ClickAction::ShowDetail(_))))
        .len()
}
