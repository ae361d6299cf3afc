//! Signal detail view state machine.

use std::collections::HashMap;

use mindsphere_core::{ContentDocument, SignalItem};
use mindsphere_observability::PageLogger;
use mindsphere_render::{ClickAction, Element, Node};

/// Visibility of the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Hidden,
    Visible,
}

impl DetailState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailState::Hidden => "hidden",
            DetailState::Visible => "visible",
        }
    }
}

/// Sub-regions of the detail view that get populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalRegion {
    Title,
    Meta,
    Body,
    Predictive,
    Sources,
}

impl ModalRegion {
    pub const ALL: [ModalRegion; 5] = [
        ModalRegion::Title,
        ModalRegion::Meta,
        ModalRegion::Body,
        ModalRegion::Predictive,
        ModalRegion::Sources,
    ];
}

/// Where a click on the detail view landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The overlay container itself.
    Backdrop,
    /// Anything inside the content panel.
    Content,
}

/// The detail view chrome supplied by the page markup.
pub trait DetailSurface {
    /// Show or hide the overlay.
    fn set_visible(&mut self, visible: bool);

    /// Replace the content of a region.
    fn fill(&mut self, region: ModalRegion, nodes: Vec<Node>);
}

/// Populated content for one signal item.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailContent {
    pub title: String,
    pub meta: String,
    pub body: Vec<Node>,
    pub predictive: Vec<Node>,
    pub sources: Vec<Node>,
}

impl DetailContent {
    /// Build the detail view model for an item.
    pub fn from_item(item: &SignalItem) -> Self {
        let meta = format!("{} | Tags: {}", item.readiness_line(), item.tags.join(", "));

        let body: Vec<Node> = item
            .body_paragraphs
            .iter()
            .map(|p| Node::from(Element::with_text("p", p.as_str())))
            .collect();

        let predictive = vec![
            Node::from(Element::with_text("strong", "Predictive conclusion:")),
            Node::text(format!(" {}", item.predictive_conclusion)),
        ];

        Self {
            title: item.title.clone(),
            meta,
            body,
            predictive,
            sources: source_links(item),
        }
    }

    /// Content per region, in [`ModalRegion::ALL`] order.
    pub fn into_regions(self) -> [(ModalRegion, Vec<Node>); 5] {
        [
            (ModalRegion::Title, vec![Node::text(self.title)]),
            (ModalRegion::Meta, vec![Node::text(self.meta)]),
            (ModalRegion::Body, self.body),
            (ModalRegion::Predictive, self.predictive),
            (ModalRegion::Sources, self.sources),
        ]
    }
}

/// "Sources: " followed by comma-separated links, or nothing without citations.
///
/// Null citation entries are skipped but keep their position for the
/// `Source <n>` fallback label.
fn source_links(item: &SignalItem) -> Vec<Node> {
    let links: Vec<Node> = item
        .citations
        .iter()
        .enumerate()
        .filter_map(|(idx, cite)| cite.as_ref().map(|c| (idx + 1, c)))
        .map(|(position, cite)| {
            Node::from(
                Element::with_text("a", cite.display_label(position))
                    .attr("href", cite.url.as_str())
                    .attr("target", "_blank"),
            )
        })
        .collect();

    if links.is_empty() {
        return Vec::new();
    }

    let mut nodes = vec![Node::from(
        Element::new("span")
            .child(Element::with_text("strong", "Sources:"))
            .text(" "),
    )];
    for (i, link) in links.into_iter().enumerate() {
        if i > 0 {
            nodes.push(Node::text(", "));
        }
        nodes.push(link);
    }
    nodes
}

/// Owns the detail view state and drives its surface.
#[derive(Debug)]
pub struct DetailController<S> {
    surface: S,
    state: DetailState,
    logger: PageLogger,
}

impl<S: DetailSurface> DetailController<S> {
    /// Create a controller in the Hidden state.
    pub fn new(surface: S, logger: &PageLogger) -> Self {
        Self {
            surface,
            state: DetailState::Hidden,
            logger: logger.for_component("interact"),
        }
    }

    /// Populate every region from `item` and show the view.
    pub fn show_detail(&mut self, item: &SignalItem) {
        for (region, nodes) in DetailContent::from_item(item).into_regions() {
            self.surface.fill(region, nodes);
        }
        self.surface.set_visible(true);
        self.state = DetailState::Visible;

        self.logger
            .debug_builder("detail shown")
            .field("title", item.title.as_str())
            .field("state", self.state.as_str())
            .emit();
    }

    /// Hide the view. Safe to call in any state.
    pub fn hide_detail(&mut self) {
        self.surface.set_visible(false);
        let previous = self.state;
        self.state = DetailState::Hidden;
        if previous == DetailState::Visible {
            self.logger
                .debug_builder("detail hidden")
                .field("state", self.state.as_str())
                .emit();
        }
    }

    /// Dedicated close control.
    pub fn close(&mut self) {
        self.hide_detail();
    }

    /// Click on the overlay: only the backdrop itself closes it.
    pub fn handle_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.hide_detail();
        }
    }

    /// Run a card's click action against the loaded document.
    ///
    /// Returns `false` when the reference does not resolve; the state is left unchanged.
    pub fn activate(&mut self, doc: &ContentDocument, action: ClickAction) -> bool {
        match action {
            ClickAction::ShowDetail(signal) => match doc.signal(&signal) {
                Some(item) => {
                    self.show_detail(item);
                    true
                }
                None => {
                    self.logger
                        .warn_builder("card references missing item")
                        .field("signal", signal.to_string())
                        .emit();
                    false
                }
            },
        }
    }

    pub fn state(&self) -> DetailState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// In-memory detail surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySurface {
    pub visible: bool,
    pub regions: HashMap<ModalRegion, Vec<Node>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of a region, or an empty string if never filled.
    pub fn text(&self, region: ModalRegion) -> String {
        self.regions
            .get(&region)
            .map(|nodes| nodes.iter().map(Node::text_content).collect())
            .unwrap_or_default()
    }

    /// Nodes of a region.
    pub fn nodes(&self, region: ModalRegion) -> &[Node] {
        self.regions.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl DetailSurface for MemorySurface {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn fill(&mut self, region: ModalRegion, nodes: Vec<Node>) {
        self.regions.insert(region, nodes);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mindsphere_core::{AutomationReadiness, Citation, LogLevel, PageViewId};
    use mindsphere_observability::MemorySink;
    use mindsphere_render::find_all_in;

    use super::*;

    fn item(title: &str) -> SignalItem {
        SignalItem {
            title: title.to_string(),
            summary: "summary".to_string(),
            automation_readiness: AutomationReadiness {
                readiness: "High".to_string(),
                time_to_value: "30d".to_string(),
            },
            tags: vec!["agents".to_string(), "ops".to_string()],
            body_paragraphs: vec!["First.".to_string(), "Second.".to_string()],
            predictive_conclusion: "Mainstream by Q4.".to_string(),
            citations: vec![],
        }
    }

    fn cite(url: &str, label: Option<&str>) -> Option<Citation> {
        Some(Citation {
            url: url.to_string(),
            label: label.map(String::from),
        })
    }

    fn controller() -> DetailController<MemorySurface> {
        let logger = PageLogger::new(PageViewId::from_string("v"));
        DetailController::new(MemorySurface::new(), &logger)
    }

    #[test]
    fn test_initial_state_hidden() {
        let ctl = controller();
        assert_eq!(ctl.state(), DetailState::Hidden);
        assert!(!ctl.surface().visible);
    }

    #[test]
    fn test_show_detail_populates_regions() {
        let mut ctl = controller();
        ctl.show_detail(&item("Agentic ops"));

        let surface = ctl.surface();
        assert_eq!(ctl.state(), DetailState::Visible);
        assert!(surface.visible);
        assert_eq!(surface.text(ModalRegion::Title), "Agentic ops");
        assert_eq!(
            surface.text(ModalRegion::Meta),
            "Readiness: High | TTV: 30d | Tags: agents, ops"
        );
        let paras = find_all_in(surface.nodes(ModalRegion::Body), |el| el.tag == "p");
        assert_eq!(paras.len(), 2);
        assert_eq!(
            surface.text(ModalRegion::Predictive),
            "Predictive conclusion: Mainstream by Q4."
        );
        assert!(surface.nodes(ModalRegion::Sources).is_empty());
    }

    #[test]
    fn test_show_detail_replaces_previous_content() {
        let mut ctl = controller();
        let mut first = item("First");
        first.body_paragraphs = vec!["a".into(), "b".into(), "c".into()];
        first.citations = vec![cite("http://a", Some("A"))];
        ctl.show_detail(&first);
        ctl.show_detail(&item("Second"));

        let surface = ctl.surface();
        assert_eq!(surface.text(ModalRegion::Title), "Second");
        assert_eq!(surface.nodes(ModalRegion::Body).len(), 2);
        assert!(surface.nodes(ModalRegion::Sources).is_empty());
    }

    #[test]
    fn test_sources_labels_and_separators() {
        let mut it = item("Cited");
        it.citations = vec![cite("http://a", Some("A")), cite("http://b", None)];
        let sources = DetailContent::from_item(&it).sources;

        let links = find_all_in(&sources, |el| el.tag == "a");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].text_content(), "A");
        assert_eq!(links[0].get_attr("href"), Some("http://a"));
        assert_eq!(links[1].text_content(), "Source 2");
        assert!(links.iter().all(|a| a.get_attr("target") == Some("_blank")));

        let text: String = sources.iter().map(Node::text_content).collect();
        assert_eq!(text, "Sources: A, Source 2");
    }

    #[test]
    fn test_sources_skip_null_entries() {
        let mut it = item("Sparse");
        it.citations = vec![None, cite("http://b", None), None, cite("http://d", Some("D"))];
        let sources = DetailContent::from_item(&it).sources;

        let text: String = sources.iter().map(Node::text_content).collect();
        assert_eq!(text, "Sources: Source 2, D");
    }

    #[test]
    fn test_hide_is_idempotent() {
        let mut ctl = controller();
        ctl.show_detail(&item("x"));
        ctl.hide_detail();
        assert_eq!(ctl.state(), DetailState::Hidden);
        assert!(!ctl.surface().visible);

        ctl.hide_detail();
        assert_eq!(ctl.state(), DetailState::Hidden);
        assert!(!ctl.surface().visible);
    }

    #[test]
    fn test_backdrop_click_hides_content_click_does_not() {
        let mut ctl = controller();
        ctl.show_detail(&item("x"));

        ctl.handle_click(ClickTarget::Content);
        assert_eq!(ctl.state(), DetailState::Visible);

        ctl.handle_click(ClickTarget::Backdrop);
        assert_eq!(ctl.state(), DetailState::Hidden);
    }

    #[test]
    fn test_close_control() {
        let mut ctl = controller();
        ctl.show_detail(&item("x"));
        ctl.close();
        assert_eq!(ctl.state(), DetailState::Hidden);
    }

    #[test]
    fn test_transitions_are_logged_with_state() {
        let sink = MemorySink::new();
        let logger = PageLogger::new(PageViewId::from_string("v"))
            .with_min_level(LogLevel::Debug)
            .with_sink(Arc::new(sink.clone()));
        let mut ctl = DetailController::new(MemorySurface::new(), &logger);

        ctl.show_detail(&item("x"));
        ctl.hide_detail();
        ctl.hide_detail();

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"state\":\"visible\""));
        assert!(lines[1].contains("\"state\":\"hidden\""));
    }

    #[test]
    fn test_state_names() {
        assert_eq!(DetailState::default().as_str(), "hidden");
        assert_eq!(DetailState::Visible.as_str(), "visible");
    }
}
