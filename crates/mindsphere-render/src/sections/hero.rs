//! Hero section.

use mindsphere_core::Meta;

use super::paragraphs;
use crate::node::Element;

/// Render the hero section: headline and body paragraphs.
pub fn render_hero(meta: &Meta) -> Element {
    Element::new("section")
        .class("section")
        .class("hero")
        .child(Element::with_text("h2", meta.hero_headline.as_str()))
        .children(paragraphs(&meta.hero_body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_headline_and_paragraph_order() {
        let section = render_hero(&Meta {
            hero_headline: "Signals this week".to_string(),
            hero_body: vec!["First.".to_string(), "Second.".to_string()],
        });

        assert!(section.has_class("section"));
        assert!(section.has_class("hero"));
        assert_eq!(section.find_by_tag("h2")[0].text_content(), "Signals this week");
        let paras: Vec<String> = section
            .find_by_tag("p")
            .iter()
            .map(|p| p.text_content())
            .collect();
        assert_eq!(paras, vec!["First.", "Second."]);
    }

    #[test]
    fn test_hero_without_body() {
        let section = render_hero(&Meta {
            hero_headline: "Quiet week".to_string(),
            hero_body: vec![],
        });
        assert!(section.find_by_tag("p").is_empty());
    }
}
