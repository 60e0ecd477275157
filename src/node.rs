use crate::error::StructuralViolation;

/// HTML attributes in insertion order.
pub type Attrs = Vec<(String, String)>;

/// A node of the output HTML tree.
///
/// Children are owned by their parent, so a tree built from these values can
/// never share a node or contain a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text run or self-contained element. `tag: None` renders the value raw.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attrs,
    },
    /// Container element. An empty `children` is valid and renders no content.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attrs,
    },
}

impl HtmlNode {
    /// Untagged leaf holding raw text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attrs::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attrs::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Attrs::new(),
        }
    }

    /// Append an attribute, keeping earlier ones first.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => {
                attrs.push((key.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag.as_str()),
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children.as_slice(),
        }
    }

    /// Render this node and its descendants to an HTML string.
    pub fn render(&self) -> Result<String, StructuralViolation> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), StructuralViolation> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => {
                let value = value.as_deref().ok_or(StructuralViolation::LeafWithoutValue)?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(tag, attrs, out);
                        out.push_str(value);
                        close_tag(tag, out);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if tag.is_empty() {
                    return Err(StructuralViolation::ParentWithoutTag);
                }
                open_tag(tag, attrs, out);
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attrs: &Attrs, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    attrs_to_html(attrs, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn attrs_to_html(attrs: &Attrs, out: &mut String) {
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
