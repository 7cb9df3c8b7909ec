//! Markdown preprocessing.
//!
//! Uses pulldown-cmark to reduce a markdown draft to the prose a reader
//! actually reads. Block structure is kept: every paragraph, list item, and
//! blockquote paragraph ends with a blank line, so the paragraph segmenter
//! sees the same boundaries the author wrote.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning blank-line-separated prose.
///
/// Removes fenced and indented code blocks, inline code, raw HTML, YAML
/// frontmatter, headings, tables, and image alt text. Keeps link text,
/// emphasis text without markers, blockquote text, and list item text.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut blocks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(
                Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_) | Tag::Image { .. },
            ) => {
                skip_depth += 1;
            }
            Event::End(
                TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table | TagEnd::Image,
            ) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => current.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => current.push(' '),

            // Block ends close the running paragraph. A list item holding a
            // nested list flushes once for its own text and once per child.
            Event::End(TagEnd::Paragraph | TagEnd::Item) if skip_depth == 0 => {
                flush(&mut blocks, &mut current);
            }

            _ => {}
        }
    }
    flush(&mut blocks, &mut current);

    blocks.join("\n\n")
}

fn flush(blocks: &mut Vec<String>, current: &mut String) {
    let block = current.trim();
    if !block.is_empty() {
        blocks.push(block.to_string());
    }
    current.clear();
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
