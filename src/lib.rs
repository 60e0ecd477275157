mod block;
mod config;
mod error;
mod inline;
mod node;
mod render;
mod span;

pub mod site;

pub use block::{BlockKind, classify, segment};
pub use config::Config;
pub use error::{Error, SiteError, StructuralViolation};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_delimiter, split_images, split_links,
    tokenize,
};
pub use node::{Attrs, HtmlNode};
pub use render::block_to_html_node;
pub use span::{Span, Style};

/// Convert a markdown document into an HTML tree rooted at a `div`.
pub fn convert(markdown: &str) -> Result<HtmlNode, Error> {
    render::markdown_to_html_node(markdown)
}

/// Convert markdown straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    Ok(convert(markdown)?.render()?)
}
