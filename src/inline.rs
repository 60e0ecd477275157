//! Inline tokenizer: raw text to a flat sequence of styled spans.
//!
//! Styles are applied in fixed passes over the spans that are still plain:
//! bold (`**`), italic (`_`), code (`` ` ``), then images and links. A lone
//! `*` is literal text. Styles never nest.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;
use crate::span::{Span, Style};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Split `text` into spans.
///
/// Adjacent delimiters with nothing between them produce no span, so an empty
/// code span like ``` `` ``` disappears from the output.
pub fn tokenize(text: &str) -> Result<Vec<Span>, Error> {
    let spans = vec![Span::plain(text)];
    let spans = split_delimiter(spans, "**", Style::Bold)?;
    let spans = split_delimiter(spans, "_", Style::Italic)?;
    let spans = split_delimiter(spans, "`", Style::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Split every plain span on `delimiter`, styling the odd-numbered parts.
///
/// Non-plain spans pass through unchanged.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    style: Style,
) -> Result<Vec<Span>, Error> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Span::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(Error::UnmatchedDelimiter { delimiter });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Span::plain(part));
            } else {
                out.push(style.span(part));
            }
        }
    }

    Ok(out)
}

/// Replace `![alt](url)` in plain spans with image spans.
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_matches(spans, find_images, |alt, url| Span::Image {
        alt: alt.to_string(),
        url: url.to_string(),
    })
}

/// Replace `[text](url)` in plain spans with link spans.
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_matches(spans, find_links, |text, url| Span::Link {
        text: text.to_string(),
        url: url.to_string(),
    })
}

/// All `(alt, url)` pairs of markdown images in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_images(text).into_iter().map(Found::into_pair).collect()
}

/// All `(text, url)` pairs of markdown links in `text`, skipping images.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_links(text).into_iter().map(Found::into_pair).collect()
}

struct Found<'a> {
    range: Range<usize>,
    label: &'a str,
    url: &'a str,
}

impl Found<'_> {
    fn into_pair(self) -> (String, String) {
        (self.label.to_string(), self.url.to_string())
    }
}

fn found_from<'h>(caps: &regex::Captures<'h>) -> Option<Found<'h>> {
    let whole = caps.get(0)?;
    Some(Found {
        range: whole.range(),
        label: caps.get(1)?.as_str(),
        url: caps.get(2)?.as_str(),
    })
}

fn find_images(text: &str) -> Vec<Found<'_>> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| found_from(&caps))
        .collect()
}

fn find_links(text: &str) -> Vec<Found<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(caps) = LINK_RE.captures_at(text, pos) {
        let Some(link) = found_from(&caps) else {
            break;
        };
        // `regex` has no look-behind: reject `![..](..)` here and retry one
        // byte later so a link starting inside the rejected match is found.
        if text[..link.range.start].ends_with('!') {
            pos = link.range.start + 1;
            continue;
        }
        pos = link.range.end;
        found.push(link);
    }

    found
}

fn split_matches(
    spans: Vec<Span>,
    find: for<'a> fn(&'a str) -> Vec<Found<'a>>,
    make: fn(&str, &str) -> Span,
) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Span::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut rest = 0;
        for found in find(&text) {
            if found.range.start > rest {
                out.push(Span::plain(&text[rest..found.range.start]));
            }
            out.push(make(found.label, found.url));
            rest = found.range.end;
        }
        if rest < text.len() {
            out.push(Span::plain(&text[rest..]));
        }
    }

    out
}
