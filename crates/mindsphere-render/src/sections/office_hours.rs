//! Office hours call to action.

use mindsphere_core::{MailtoLink, OfficeHours};

use super::paragraphs;
use crate::node::Element;

/// Render headline, body and the contact line.
///
/// `default_recipient` is used when the document does not name an address.
pub fn render_office_hours(office_hours: &OfficeHours, default_recipient: &str) -> Element {
    let recipient = office_hours.recipient(default_recipient);

    let mut link = MailtoLink::new(recipient);
    if let Some(subject) = &office_hours.subject_line {
        link = link.with_subject(subject.as_str());
    }

    let contact = Element::new("p")
        .text("Email ")
        .child(Element::with_text("a", recipient).attr("href", link.to_uri()))
        .text(" to apply.");

    Element::new("section")
        .class("section")
        .child(Element::with_text("h2", office_hours.headline.as_str()))
        .children(paragraphs(&office_hours.body_paragraphs))
        .child(contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office_hours(mailto: Option<&str>, subject: Option<&str>) -> OfficeHours {
        OfficeHours {
            headline: "Open office hours".to_string(),
            body_paragraphs: vec!["Bring a workflow.".to_string()],
            mailto: mailto.map(String::from),
            subject_line: subject.map(String::from),
        }
    }

    #[test]
    fn test_contact_line_with_subject() {
        let section = render_office_hours(
            &office_hours(Some("hours@example.com"), Some("Office Hours")),
            "info@example.com",
        );

        let link = section.find_by_tag("a")[0];
        assert_eq!(
            link.get_attr("href"),
            Some("mailto:hours@example.com?subject=Office%20Hours")
        );
        assert_eq!(link.text_content(), "hours@example.com");

        let contact = section.find_by_tag("p").last().unwrap().text_content();
        assert_eq!(contact, "Email hours@example.com to apply.");
    }

    #[test]
    fn test_subject_omitted_when_absent() {
        let section = render_office_hours(&office_hours(Some("hours@example.com"), None), "x@y.z");
        assert_eq!(
            section.find_by_tag("a")[0].get_attr("href"),
            Some("mailto:hours@example.com")
        );
    }

    #[test]
    fn test_default_recipient() {
        let section = render_office_hours(&office_hours(None, None), "info@example.com");
        let link = section.find_by_tag("a")[0];
        assert_eq!(link.get_attr("href"), Some("mailto:info@example.com"));
        assert_eq!(section.find_by_tag("h2")[0].text_content(), "Open office hours");
    }
}
