use tracing::debug;

use crate::block::{self, BlockKind, FENCE};
use crate::error::Error;
use crate::inline;
use crate::node::HtmlNode;
use crate::span::Span;

/// Convert a markdown document into a `div` holding one node per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, Error> {
    let blocks = block::segment(markdown);
    let mut children = Vec::with_capacity(blocks.len());

    for block in blocks {
        let kind = block::classify(block);
        debug!(?kind, len = block.len(), "rendering block");
        children.push(block_to_html_node(block, kind)?);
    }

    Ok(HtmlNode::parent("div", children))
}

/// Render a single classified block.
pub fn block_to_html_node(block: &str, kind: BlockKind) -> Result<HtmlNode, Error> {
    match kind {
        BlockKind::Paragraph => paragraph(block),
        BlockKind::Heading => heading(block),
        BlockKind::Code => Ok(code(block)),
        BlockKind::Quote => quote(block),
        BlockKind::UnorderedList => unordered_list(block),
        BlockKind::OrderedList => ordered_list(block),
    }
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, Error> {
    Ok(inline::tokenize(text)?
        .iter()
        .map(Span::to_html_node)
        .collect())
}

fn paragraph(block: &str) -> Result<HtmlNode, Error> {
    let text = block.split('\n').map(str::trim).collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

fn heading(block: &str) -> Result<HtmlNode, Error> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    let text = block[level..].trim();
    Ok(HtmlNode::parent(format!("h{level}"), text_to_children(text)?))
}

fn code(block: &str) -> HtmlNode {
    let inner = block
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_suffix(FENCE))
        .unwrap_or(block);
    // Only the newline right after the opening fence belongs to the fence.
    let inner = inner.strip_prefix('\n').unwrap_or(inner);
    let text = Span::plain(inner).to_html_node();
    HtmlNode::parent("pre", vec![HtmlNode::parent("code", vec![text])])
}

fn quote(block: &str) -> Result<HtmlNode, Error> {
    let text = block
        .split('\n')
        .map(|line| {
            line.strip_prefix("> ")
                .or_else(|| line.strip_prefix('>'))
                .unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
}

fn unordered_list(block: &str) -> Result<HtmlNode, Error> {
    let items = block
        .split('\n')
        .map(|line| list_item(line.get(2..).unwrap_or("")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list(block: &str) -> Result<HtmlNode, Error> {
    let items = block
        .split('\n')
        .filter_map(|line| line.find(". ").map(|dot| &line[dot + 2..]))
        .map(list_item)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("ol", items))
}

fn list_item(text: &str) -> Result<HtmlNode, Error> {
    Ok(HtmlNode::parent("li", text_to_children(text)?))
}
