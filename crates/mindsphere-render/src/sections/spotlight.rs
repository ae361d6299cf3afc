//! Operator spotlight section.

use mindsphere_core::Spotlight;

use super::{paragraphs, titled_section};
use crate::node::Element;

pub const SPOTLIGHT_HEADING: &str = "Midsized Operator Spotlight";

/// Render the spotlight story.
pub fn render_spotlight(spotlight: &Spotlight) -> Element {
    titled_section(SPOTLIGHT_HEADING)
        .child(Element::with_text("h3", spotlight.title.as_str()))
        .children(paragraphs(&spotlight.story_paragraphs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spotlight_heading_title_and_story() {
        let section = render_spotlight(&Spotlight {
            title: "A 40-person distributor".to_string(),
            story_paragraphs: vec!["They started small.".to_string(), "Then scaled.".to_string()],
        });

        assert_eq!(section.find_by_tag("h2")[0].text_content(), SPOTLIGHT_HEADING);
        let titles = section.find_by_tag("h3");
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].text_content(), "A 40-person distributor");
        let paras: Vec<String> = section
            .find_by_tag("p")
            .iter()
            .map(|p| p.text_content())
            .collect();
        assert_eq!(paras, vec!["They started small.", "Then scaled."]);
    }
}
