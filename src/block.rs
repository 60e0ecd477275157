/// Block-level elements recognised in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

pub(crate) const FENCE: &str = "```";

/// Split a document into trimmed, non-empty blocks separated by blank lines.
pub fn segment(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a trimmed block. The first matching kind wins.
pub fn classify(block: &str) -> BlockKind {
    if heading_level(block).is_some() {
        return BlockKind::Heading;
    }

    if block.len() >= 2 * FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE) {
        return BlockKind::Code;
    }

    if block.split('\n').all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }

    if block.split('\n').all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }

    if block
        .split('\n')
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Number of leading `#` when the block opens with a 1-6 level heading marker.
pub(crate) fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
        u8::try_from(hashes).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn segment_blocks() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            segment(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn extra_blank_lines_collapse() {
        assert_eq!(segment("a\n\n\n\n\nb\n\n\n"), vec!["a", "b"]);
    }

    #[test]
    fn whitespace_only_document_has_no_blocks() {
        assert!(segment("").is_empty());
        assert!(segment("  \n\n \t \n\n").is_empty());
    }

    #[test]
    fn segment_then_join_is_stable() {
        let blocks = vec!["# Title", "para\nline two", "- a\n- b", "```\ncode\n```"];
        assert_eq!(segment(&blocks.join("\n\n")), blocks);
    }

    #[test]
    fn headings() {
        for block in ["# H1", "## H2", "### H3", "#### H4", "##### H5", "###### H6"] {
            assert_eq!(classify(block), BlockKind::Heading, "{block}");
        }
        assert_eq!(heading_level("### three"), Some(3));
    }

    #[test]
    fn not_headings() {
        assert_eq!(classify("####### Seven"), BlockKind::Paragraph);
        assert_eq!(classify("#NoSpace"), BlockKind::Paragraph);
        assert_eq!(classify("This is # not a heading"), BlockKind::Paragraph);
    }

    #[test]
    fn code_blocks() {
        assert_eq!(classify("```\nprint('hello')\n```"), BlockKind::Code);
        assert_eq!(classify("```python\nprint('hello')\n```"), BlockKind::Code);
        assert_eq!(classify("``````"), BlockKind::Code);
    }

    #[test]
    fn not_code_blocks() {
        assert_eq!(classify("```\ncode without closing"), BlockKind::Paragraph);
        assert_eq!(classify("code without opening\n```"), BlockKind::Paragraph);
        assert_eq!(classify("``code``"), BlockKind::Paragraph);
        assert_eq!(classify("`````"), BlockKind::Paragraph);
    }

    #[test]
    fn quotes() {
        assert_eq!(classify(">quote"), BlockKind::Quote);
        assert_eq!(classify("> one\n>two\n> three"), BlockKind::Quote);
        assert_eq!(classify(">quoted\nnot quoted"), BlockKind::Paragraph);
    }

    #[test]
    fn unordered_lists() {
        assert_eq!(classify("- one\n- two"), BlockKind::UnorderedList);
        assert_eq!(classify("- one\n-two"), BlockKind::Paragraph);
        assert_eq!(classify("* one\n* two"), BlockKind::Paragraph);
    }

    #[test]
    fn ordered_lists_must_count_from_one() {
        assert_eq!(classify("1. x\n2. y\n3. z"), BlockKind::OrderedList);
        assert_eq!(classify("2. x\n3. y"), BlockKind::Paragraph);
        assert_eq!(classify("1. x\n3. y"), BlockKind::Paragraph);
        assert_eq!(classify("1.x"), BlockKind::Paragraph);
    }

    #[test]
    fn ordered_list_past_nine() {
        let block = (1..=11)
            .map(|i| format!("{i}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify(&block), BlockKind::OrderedList);
    }

    #[test]
    fn heading_wins_over_other_kinds() {
        assert_eq!(classify("# Title ```"), BlockKind::Heading);
    }
}
