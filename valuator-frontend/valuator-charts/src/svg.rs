use std::{collections::HashMap, fmt::Write};

use crate::{format::fmt_number, surface::ChartSurface, ChartError};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SvgTag {
    Path,
    Rect,
    Line,
    Text,
}

impl SvgTag {
    pub fn name(self) -> &'static str {
        match self {
            SvgTag::Path => "path",
            SvgTag::Rect => "rect",
            SvgTag::Line => "line",
            SvgTag::Text => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// A single drawing primitive. Charts are flat lists of these.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgNode {
    tag: SvgTag,
    attributes: Vec<(&'static str, String)>,
    text: Option<String>,
}

impl SvgNode {
    pub fn new(tag: SvgTag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            text: None,
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn num(self, name: &'static str, value: f64) -> Self {
        self.attr(name, fmt_number(value))
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn tag(&self) -> SvgTag {
        self.tag
    }

    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Numeric attribute, `None` if missing or not a number.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.attribute(name)?.parse().ok()
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn write_markup(&self, out: &mut String) {
        let name = self.tag.name();
        let _ = write!(out, "<{name}");
        for (key, value) in &self.attributes {
            let _ = write!(out, " {key}=\"{}\"", escape(value));
        }
        match &self.text {
            Some(text) => {
                let _ = write!(out, ">{}</{name}>", escape(text));
            }
            None => out.push_str("/>"),
        }
    }
}

/// A `<text>` label styled like every other label on the page.
pub fn text_label(x: f64, y: f64, text: &str, anchor: Anchor, color: &str) -> SvgNode {
    SvgNode::new(SvgTag::Text)
        .num("x", x)
        .num("y", y)
        .attr("text-anchor", anchor.as_str())
        .attr("fill", color)
        .attr("font-size", "10px")
        .attr("font-family", "var(--font-sans, sans-serif)")
        .text(text)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// In-memory `<svg>` element. Used for server side rendering and as the test surface.
#[derive(Clone, Debug, Default)]
pub struct SvgDocument {
    client_size: (f64, f64),
    attributes: Vec<(String, String)>,
    theme: HashMap<String, String>,
    children: Vec<SvgNode>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the element would be laid out at. Zero means hidden.
    pub fn with_client_size(mut self, width: f64, height: f64) -> Self {
        self.client_size = (width, height);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.put_attribute(name, value);
        self
    }

    /// Value for a theme custom property such as `--accent-primary`.
    pub fn with_theme_value(mut self, name: &str, value: &str) -> Self {
        self.theme.insert(name.to_string(), value.to_string());
        self
    }

    pub fn children(&self) -> &[SvgNode] {
        &self.children
    }

    pub fn count(&self, tag: SvgTag) -> usize {
        self.children.iter().filter(|c| c.tag() == tag).count()
    }

    pub fn of_tag(&self, tag: SvgTag) -> impl Iterator<Item = &SvgNode> {
        self.children.iter().filter(move |c| c.tag() == tag)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(SvgNode::text_content)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn put_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Markup of the children only, for embedding inside an existing `<svg>` tag.
    pub fn inner_markup(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_markup(&mut out);
        }
        out
    }

    /// A standalone SVG document.
    pub fn to_svg_string(&self) -> String {
        let mut out = format!("<svg xmlns=\"{SVG_NS}\"");
        for (key, value) in &self.attributes {
            let _ = write!(out, " {key}=\"{}\"", escape(value));
        }
        out.push('>');
        out.push_str(&self.inner_markup());
        out.push_str("</svg>");
        out
    }
}

impl ChartSurface for SvgDocument {
    fn client_size(&self) -> (f64, f64) {
        self.client_size
    }

    fn attribute(&self, name: &str) -> Option<String> {
        SvgDocument::attribute(self, name).map(str::to_string)
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ChartError> {
        self.put_attribute(name, value);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ChartError> {
        self.children.clear();
        Ok(())
    }

    fn append(&mut self, node: &SvgNode) -> Result<(), ChartError> {
        self.children.push(node.clone());
        Ok(())
    }

    fn theme_value(&self, name: &str) -> Option<String> {
        self.theme.get(name).cloned()
    }
}
