//! Tiered signal sections and cards.

use mindsphere_core::{SignalItem, SignalRef, Tier};

use super::titled_section;
use crate::node::{ClickAction, Element};

/// Render one tier: heading plus a card per item.
///
/// Callers skip tiers with no items.
pub fn render_signal_tier(tier: Tier, items: &[SignalItem]) -> Element {
    let list = Element::new("div").class("signal-list").children(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| render_signal_card(SignalRef::new(tier, index), item)),
    );

    titled_section(tier.heading()).child(list)
}

/// Render a clickable card. The card carries only the item reference.
pub fn render_signal_card(signal: SignalRef, item: &SignalItem) -> Element {
    Element::new("div")
        .class("signal-card")
        .attr("data-tier", signal.tier.name())
        .child(Element::with_text("h3", item.title.as_str()).class("signal-title"))
        .child(Element::with_text("p", item.summary.as_str()).class("signal-summary"))
        .child(Element::with_text("p", item.readiness_line()).class("signal-meta"))
        .on_click(ClickAction::ShowDetail(signal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindsphere_core::AutomationReadiness;

    fn item(title: &str) -> SignalItem {
        SignalItem {
            title: title.to_string(),
            summary: format!("{} summary", title),
            automation_readiness: AutomationReadiness {
                readiness: "Medium".to_string(),
                time_to_value: "60d".to_string(),
            },
            tags: vec![],
            body_paragraphs: vec![],
            predictive_conclusion: "Later".to_string(),
            citations: vec![],
        }
    }

    #[test]
    fn test_tier_heading_and_cards() {
        let section = render_signal_tier(Tier::Secondary, &[item("A"), item("B")]);

        assert_eq!(section.find_by_tag("h2")[0].text_content(), "Secondary Signals");
        let cards = section.find_by_class("signal-card");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].get_attr("data-tier"), Some("secondary"));
        assert_eq!(
            cards[1].on_click,
            Some(ClickAction::ShowDetail(SignalRef::new(Tier::Secondary, 1)))
        );
    }

    #[test]
    fn test_card_content() {
        let card = render_signal_card(SignalRef::new(Tier::Primary, 0), &item("Copilots"));

        assert_eq!(card.find_by_class("signal-title")[0].text_content(), "Copilots");
        assert_eq!(card.find_by_class("signal-summary")[0].text_content(), "Copilots summary");
        assert_eq!(
            card.find_by_class("signal-meta")[0].text_content(),
            "Readiness: Medium | TTV: 60d"
        );
    }
}
