//! Retained scene tree
//!
//! Minimal element/text tree standing in for the container's DOM subtree.
//! The view mutates it; [`Element::to_markup`] serializes it as HTML with
//! inline SVG.

use std::fmt::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, attrs: Vec::new(), children: Vec::new() }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Sets `name`, replacing an existing value in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(key, _)| key != name);
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class").is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn push(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search for descendants carrying `class`.
    pub fn find_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        for element in self.child_elements() {
            if element.has_class(class) {
                found.push(element);
            }
            element.find_by_class(class, found);
        }
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => out.push_str(&element.text_content()),
            }
        }
        out
    }

    pub fn write_markup(&self, out: &mut String) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(out, " {}=\"{}\"", name, escape_xml(value))?;
        }
        if self.children.is_empty() && is_void(self.tag) {
            out.push_str(" />");
            return Ok(());
        }
        out.push('>');
        for node in &self.children {
            match node {
                Node::Element(element) => element.write_markup(out)?,
                Node::Text(text) => out.push_str(&escape_xml(text)),
            }
        }
        write!(out, "</{}>", self.tag)
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_markup(&mut out);
        out
    }
}

/// SVG shapes are written self-closing; HTML containers never are.
fn is_void(tag: &str) -> bool {
    matches!(tag, "rect" | "line" | "circle" | "path")
}

pub fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_escapes_attributes_and_text() {
        let element = Element::new("span").attr("title", "a \"b\" & c").text("<Kim>");
        assert_eq!(
            element.to_markup(),
            "<span title=\"a &quot;b&quot; &amp; c\">&lt;Kim&gt;</span>"
        );
    }

    #[test]
    fn test_svg_shapes_self_close() {
        let svg = Element::new("svg").child(Element::new("circle").attr("r", "1"));
        assert_eq!(svg.to_markup(), "<svg><circle r=\"1\" /></svg>");
        assert_eq!(Element::new("div").to_markup(), "<div></div>");
    }

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut element = Element::new("div").attr("class", "a").attr("id", "x");
        element.set_attr("class", "b");
        assert_eq!(element.to_markup(), "<div class=\"b\" id=\"x\"></div>");
        element.remove_attr("class");
        assert_eq!(element.get_attr("class"), None);
    }

    #[test]
    fn test_find_by_class_is_recursive() {
        let tree = Element::new("div")
            .child(Element::new("div").attr("class", "layer").child(
                Element::new("span").attr("class", "marker-dot big"),
            ))
            .child(Element::new("span").attr("class", "marker-dot"));

        let mut found = Vec::new();
        tree.find_by_class("marker-dot", &mut found);
        assert_eq!(found.len(), 2);
        assert_eq!(tree.text_content(), "");
    }
}
