//! Lightweight element tree.

use mindsphere_core::SignalRef;

/// What happens when an element is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Open the detail view for a signal item.
    ShowDetail(SignalRef),
}

/// A node in the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a text node.
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    /// Get the element, if this is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(s),
            Node::Element(el) => {
                for child in &el.children {
                    child.push_text(out);
                }
            }
        }
    }

    /// Serialize to escaped HTML. Click actions are not serialized.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(&html_escape(s)),
            Node::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                if !el.classes.is_empty() {
                    out.push_str(&format!(r#" class="{}""#, html_escape(&el.classes.join(" "))));
                }
                for (name, value) in &el.attributes {
                    out.push_str(&format!(r#" {}="{}""#, name, html_escape(value)));
                }
                out.push('>');
                for child in &el.children {
                    child.write_html(out);
                }
                out.push_str(&format!("</{}>", el.tag));
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with classes, attributes, children and an optional click action.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub on_click: Option<ClickAction>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Create an element holding a single text node.
    pub fn with_text(tag: &'static str, text: impl Into<String>) -> Self {
        Self::new(tag).text(text)
    }

    /// Add a class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes.
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text node.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::text(text));
        self
    }

    /// Attach a click action.
    pub fn on_click(mut self, action: ClickAction) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Get an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// This element and all descendant elements matching `pred`, in document order.
    pub fn find_all<F>(&self, pred: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut out = Vec::new();
        collect(self, &pred, &mut out);
        out
    }

    /// Descendant elements (and self) with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(|el| el.tag == tag)
    }

    /// Descendant elements (and self) with the given class.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|el| el.has_class(class))
    }

    /// Serialize to escaped HTML.
    pub fn to_html(&self) -> String {
        Node::Element(self.clone()).to_html()
    }
}

fn collect<'a, F>(el: &'a Element, pred: &F, out: &mut Vec<&'a Element>)
where
    F: Fn(&Element) -> bool,
{
    if pred(el) {
        out.push(el);
    }
    for child in el.child_elements() {
        collect(child, pred, out);
    }
}

/// Elements matching `pred` across a list of root nodes, in document order.
pub fn find_all_in<F>(nodes: &[Node], pred: F) -> Vec<&Element>
where
    F: Fn(&Element) -> bool,
{
    let mut out = Vec::new();
    for el in nodes.iter().filter_map(Node::as_element) {
        collect(el, &pred, &mut out);
    }
    out
}

/// `<li><strong>Label:</strong> value</li>`
pub fn labelled_item(label: &str, value: &str) -> Element {
    Element::new("li")
        .child(Element::with_text("strong", format!("{}:", label)))
        .text(format!(" {}", value))
}

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindsphere_core::Tier;

    #[test]
    fn test_text_content_concatenates() {
        let el = Element::new("p")
            .text("Email ")
            .child(Element::with_text("a", "a@x.com"))
            .text(" to apply.");
        assert_eq!(el.text_content(), "Email a@x.com to apply.");
    }

    #[test]
    fn test_to_html_escapes() {
        let el = Element::with_text("p", "<b>\"R&D\"</b>")
            .class("note")
            .attr("title", "a\"b");
        assert_eq!(
            el.to_html(),
            r#"<p class="note" title="a&quot;b">&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;</p>"#
        );
    }

    #[test]
    fn test_attr_replaces() {
        let el = Element::new("a").attr("href", "x").attr("href", "y");
        assert_eq!(el.attributes.len(), 1);
        assert_eq!(el.get_attr("href"), Some("y"));
    }

    #[test]
    fn test_find_in_document_order() {
        let tree = Element::new("div")
            .child(Element::with_text("h3", "one").class("t"))
            .child(Element::new("div").child(Element::with_text("h3", "two").class("t")))
            .child(Element::with_text("h3", "three"));

        let titles: Vec<String> = tree.find_by_tag("h3").iter().map(|e| e.text_content()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
        assert_eq!(tree.find_by_class("t").len(), 2);
    }

    #[test]
    fn test_click_action_not_serialized() {
        let el = Element::with_text("div", "card")
            .on_click(ClickAction::ShowDetail(SignalRef::new(Tier::Primary, 0)));
        assert_eq!(el.to_html(), "<div>card</div>");
        assert!(el.on_click.is_some());
    }

    #[test]
    fn test_labelled_item() {
        let li = labelled_item("KPI", "Hours saved");
        assert_eq!(li.text_content(), "KPI: Hours saved");
        assert_eq!(li.find_by_tag("strong")[0].text_content(), "KPI:");
    }

    #[test]
    fn test_find_all_in_roots() {
        let roots = vec![
            Node::from(Element::with_text("h2", "A")),
            Node::text("loose"),
            Node::from(Element::new("section").child(Element::with_text("h2", "B"))),
        ];
        let found = find_all_in(&roots, |el| el.tag == "h2");
        assert_eq!(found.len(), 2);
    }
}
