//! Signals to systems scoreboard.

use mindsphere_core::Scoreboard;

use super::titled_section;
use crate::node::Element;

pub const SCOREBOARD_HEADING: &str = "Signals → Systems Scoreboard";

/// Table header, in the same order as [`Theme::columns`](mindsphere_core::Theme::columns).
pub const SCOREBOARD_COLUMNS: [&str; 4] = ["Theme", "Watchlist", "Pilot", "Production"];

/// Render the scoreboard table with an optional commentary paragraph.
pub fn render_scoreboard(scoreboard: &Scoreboard) -> Element {
    let header_cells = SCOREBOARD_COLUMNS
        .iter()
        .map(|c| Element::with_text("th", *c));
    let head = Element::new("thead").child(Element::new("tr").children(header_cells));

    let rows = scoreboard.themes.iter().map(|theme| {
        let cells = theme
            .columns()
            .into_iter()
            .map(|v| Element::with_text("td", v));
        Element::new("tr").children(cells)
    });
    let body = Element::new("tbody").children(rows);

    let mut section = titled_section(SCOREBOARD_HEADING).child(
        Element::new("table")
            .class("scoreboard-table")
            .child(head)
            .child(body),
    );

    if let Some(commentary) = scoreboard.commentary.as_deref().filter(|c| !c.is_empty()) {
        section = section.child(Element::with_text("p", commentary));
    }

    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindsphere_core::Theme;

    fn theme(name: &str, w: &str, p: &str, prod: &str) -> Theme {
        Theme {
            name: name.to_string(),
            watchlist: w.to_string(),
            pilot: p.to_string(),
            production: prod.to_string(),
        }
    }

    #[test]
    fn test_header_and_rows() {
        let section = render_scoreboard(&Scoreboard {
            themes: vec![theme("Agents", "4", "2", "1"), theme("RAG", "1", "3", "5")],
            commentary: None,
        });

        let headers: Vec<String> = section
            .find_by_tag("th")
            .iter()
            .map(|th| th.text_content())
            .collect();
        assert_eq!(headers, vec!["Theme", "Watchlist", "Pilot", "Production"]);

        let tbody = section.find_by_tag("tbody")[0];
        let rows: Vec<Vec<String>> = tbody
            .find_by_tag("tr")
            .iter()
            .map(|tr| tr.find_by_tag("td").iter().map(|td| td.text_content()).collect())
            .collect();
        assert_eq!(rows, vec![vec!["Agents", "4", "2", "1"], vec!["RAG", "1", "3", "5"]]);

        assert!(section.find_by_tag("p").is_empty());
    }

    #[test]
    fn test_commentary_rendered_when_present() {
        let section = render_scoreboard(&Scoreboard {
            themes: vec![],
            commentary: Some("Pilots are stalling.".to_string()),
        });

        let paras = section.find_by_tag("p");
        assert_eq!(paras.len(), 1);
        assert_eq!(paras[0].text_content(), "Pilots are stalling.");
    }

    #[test]
    fn test_empty_commentary_skipped() {
        let section = render_scoreboard(&Scoreboard {
            themes: vec![],
            commentary: Some(String::new()),
        });
        assert!(section.find_by_tag("p").is_empty());
    }
}
