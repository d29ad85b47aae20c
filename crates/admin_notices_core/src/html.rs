//! Small HTML helpers shared by the model and the renderer.
//!
//! These work on strings only; no DOM is built.

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)<(/?)(address|blockquote|div|dl|fieldset|form|h[1-6]|hr|ol|p|pre|section|table|ul)\b[^>]*>",
    )
    .expect("valid block tag regex")
});

/// Block elements whose text may be split into paragraphs.
const PARAGRAPH_CONTAINERS: &[&str] = &[
    "address",
    "blockquote",
    "div",
    "fieldset",
    "form",
    "section",
];

/// Escapes text for interpolation into a quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Wraps blank-line separated text in `<p>` and turns single newlines
/// into `<br />`.
///
/// A line holding only whitespace counts as blank. Block-level tags are
/// never wrapped. Text inside `div`-like containers is split into
/// paragraphs only when it holds more than one; text inside any other
/// block element (`p`, `pre`, lists, tables, headings) is copied as-is.
pub fn auto_paragraph(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut output = String::new();
    let mut open_blocks: Vec<String> = Vec::new();
    let mut cursor = 0;

    for tag in BLOCK_TAG_RE.captures_iter(&normalized) {
        let Some(whole) = tag.get(0) else {
            continue;
        };
        let closing = tag.get(1).is_some_and(|slash| !slash.as_str().is_empty());
        let name = tag
            .get(2)
            .map_or_else(String::new, |name| name.as_str().to_ascii_lowercase());

        push_text(
            &mut output,
            &normalized[cursor..whole.start()],
            open_blocks.last().map(String::as_str),
        );
        output.push_str(whole.as_str());
        cursor = whole.end();

        if closing {
            if let Some(position) = open_blocks.iter().rposition(|open| *open == name) {
                open_blocks.truncate(position);
            }
        } else if name != "hr" && !whole.as_str().ends_with("/>") {
            open_blocks.push(name);
        }
        if open_blocks.is_empty() {
            output.push('\n');
        }
    }

    push_text(
        &mut output,
        &normalized[cursor..],
        open_blocks.last().map(String::as_str),
    );
    output
}

fn push_text(output: &mut String, text: &str, enclosing: Option<&str>) {
    match enclosing {
        Some(block) if !PARAGRAPH_CONTAINERS.contains(&block) => output.push_str(text),
        Some(_) => match paragraphs(text).as_slice() {
            [single] => output.push_str(single),
            many => many
                .iter()
                .for_each(|paragraph| push_paragraph(output, paragraph)),
        },
        None => paragraphs(text)
            .iter()
            .for_each(|paragraph| push_paragraph(output, paragraph)),
    }
}

fn push_paragraph(output: &mut String, paragraph: &str) {
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    output.push_str("<p>");
    output.push_str(paragraph);
    output.push_str("</p>\n");
}

/// Groups non-blank lines into paragraphs joined with `<br />`.
fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut lines: Vec<&str> = Vec::new();
    for line in text.split('\n').map(str::trim) {
        if !line.is_empty() {
            lines.push(line);
            continue;
        }
        if !lines.is_empty() {
            paragraphs.push(lines.join("<br />\n"));
            lines.clear();
        }
    }
    if !lines.is_empty() {
        paragraphs.push(lines.join("<br />\n"));
    }
    paragraphs
}

/// Inserts `attributes` into the first opening tag of `markup`, right after
/// the tag name.
///
/// Comments, doctype/processing declarations and closing tags are skipped.
/// Returns `None` when no opening tag exists.
pub fn inject_first_tag_attributes(markup: &str, attributes: &str) -> Option<String> {
    let bytes = markup.as_bytes();
    let mut index = 0;

    while let Some(offset) = markup[index..].find('<') {
        let start = index + offset;
        let rest = &markup[start..];

        if rest.starts_with("<!--") {
            index = match rest.find("-->") {
                Some(end) => start + end + 3,
                None => return None,
            };
            continue;
        }

        let name_start = start + 1;
        if bytes.get(name_start).is_some_and(u8::is_ascii_alphabetic) {
            let name_len = markup[name_start..]
                .bytes()
                .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b':')
                .count();
            let insert_at = name_start + name_len;

            let mut output = String::with_capacity(markup.len() + attributes.len() + 1);
            output.push_str(&markup[..insert_at]);
            output.push(' ');
            output.push_str(attributes);
            output.push_str(&markup[insert_at..]);
            return Some(output);
        }

        index = name_start;
    }

    None
}
