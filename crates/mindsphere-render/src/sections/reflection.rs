//! Reflection section.

use super::{paragraphs, titled_section};
use crate::node::Element;

pub const REFLECTION_HEADING: &str = "Today’s Reflection";

/// Render the reflection paragraphs. Callers skip this when the list is empty.
pub fn render_reflection(reflection: &[String]) -> Element {
    titled_section(REFLECTION_HEADING).children(paragraphs(reflection))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflection_paragraph_order() {
        let paragraphs = ["One.", "Two.", "Three."].map(String::from);
        let section = render_reflection(&paragraphs);

        assert_eq!(section.find_by_tag("h2")[0].text_content(), "Today’s Reflection");
        let paras: Vec<String> = section
            .find_by_tag("p")
            .iter()
            .map(|p| p.text_content())
            .collect();
        assert_eq!(paras, vec!["One.", "Two.", "Three."]);
    }
}
