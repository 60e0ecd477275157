use crate::node::HtmlNode;

/// Inline text spans with a single style.
///
/// Links and images carry their URL inline, so a URL exists exactly when the
/// span is a link or an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

/// Style applied by a delimiter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Code,
}

impl Style {
    pub(crate) fn span(self, text: &str) -> Span {
        let text = text.to_string();
        match self {
            Style::Bold => Span::Bold(text),
            Style::Italic => Span::Italic(text),
            Style::Code => Span::Code(text),
        }
    }
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::Plain(text.into())
    }

    /// The span's text; the alt text for images.
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => {
                text.as_str()
            }
            Span::Link { text, .. } => text.as_str(),
            Span::Image { alt, .. } => alt.as_str(),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url.as_str()),
            Span::Plain(_) | Span::Bold(_) | Span::Italic(_) | Span::Code(_) => None,
        }
    }

    /// Convert to the leaf node that renders this span.
    pub fn to_html_node(&self) -> HtmlNode {
        match self {
            Span::Plain(text) => HtmlNode::text(text.as_str()),
            Span::Bold(text) => HtmlNode::leaf("b", text.as_str()),
            Span::Italic(text) => HtmlNode::leaf("i", text.as_str()),
            Span::Code(text) => HtmlNode::leaf("code", text.as_str()),
            Span::Link { text, url } => {
                HtmlNode::leaf("a", text.as_str()).with_attr("href", url.as_str())
            }
            Span::Image { alt, url } => HtmlNode::leaf("img", "")
                .with_attr("src", url.as_str())
                .with_attr("alt", alt.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        assert_eq!(Span::plain("a"), Span::Plain("a".to_string()));
        assert_ne!(Span::Bold("a".into()), Span::Italic("a".into()));
        assert_ne!(
            Span::Link {
                text: "a".into(),
                url: "x".into()
            },
            Span::Link {
                text: "a".into(),
                url: "y".into()
            }
        );
    }

    #[test]
    fn url_only_on_links_and_images() {
        assert_eq!(Span::Code("x".into()).url(), None);
        let image = Span::Image {
            alt: "cat".into(),
            url: "/cat.png".into(),
        };
        assert_eq!(image.url(), Some("/cat.png"));
        assert_eq!(image.text(), "cat");
    }

    #[test]
    fn plain_renders_without_tag() {
        let html = Span::plain("just text").to_html_node().render().unwrap();
        assert_eq!(html, "just text");
    }

    #[test]
    fn styled_spans_render_tags() {
        let cases = [
            (Span::Bold("b".into()), "<b>b</b>"),
            (Span::Italic("i".into()), "<i>i</i>"),
            (Span::Code("c".into()), "<code>c</code>"),
        ];
        for (span, expected) in cases {
            assert_eq!(span.to_html_node().render().unwrap(), expected);
        }
    }

    #[test]
    fn link_and_image_attributes() {
        let link = Span::Link {
            text: "boot dev".into(),
            url: "https://www.boot.dev".into(),
        };
        assert_eq!(
            link.to_html_node().render().unwrap(),
            r#"<a href="https://www.boot.dev">boot dev</a>"#
        );

        let image = Span::Image {
            alt: "logo".into(),
            url: "/logo.png".into(),
        };
        assert_eq!(
            image.to_html_node().render().unwrap(),
            r#"<img src="/logo.png" alt="logo"></img>"#
        );
    }
}
