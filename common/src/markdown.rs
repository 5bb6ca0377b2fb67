//! Markdown rendering for blog posts and about sections.
//!
//! Rendering goes straight through pulldown-cmark. Headings get an `id` so the
//! table of contents built by [`extract_headings`] can link to them, and links
//! that leave the page open in a new tab.

use std::sync::LazyLock;

use pulldown_cmark::{
    CowStr, Event, HeadingLevel, LinkType, Options, Parser, Tag, TagEnd, html::push_html,
};
use regex::Regex;

use crate::palette::Palette;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

pub const LINK_COLOR_PLACEHOLDER: &str = "${linkColor}";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    pub text: String,
    pub id: String,
    pub level: u8,
}

/// Anchor id for a heading: lowercased, whitespace runs become `-`.
pub fn heading_id(text: &str) -> String {
    WHITESPACE
        .replace_all(text.trim(), "-")
        .to_lowercase()
}

fn level_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS | Options::ENABLE_TABLES
}

pub fn extract_headings(content: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new_ext(content, options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((level_number(level), String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take() {
                    let id = heading_id(&text);
                    headings.push(Heading { text, id, level });
                }
            }
            _ => {}
        }
    }

    headings
}

fn is_page_anchor(dest: &str) -> bool {
    dest.starts_with('#')
}

pub fn render_markdown(content: &str) -> String {
    let headings = extract_headings(content);
    let mut heading_ids = headings.into_iter().map(|h| h.id);

    let mut external_link = Vec::new();
    let mut events = Vec::new();

    for event in Parser::new_ext(content, options()) {
        match event {
            Event::Start(Tag::Heading {
                level,
                id: None,
                classes,
                attrs,
            }) => {
                let id = heading_ids.next().filter(|id| !id.is_empty());
                events.push(Event::Start(Tag::Heading {
                    level,
                    id: id.map(CowStr::from),
                    classes,
                    attrs,
                }));
            }
            Event::Start(Tag::Heading { .. }) => {
                // explicit {#id} wins, but keep the id iterator aligned
                heading_ids.next();
                events.push(event);
            }
            Event::Start(Tag::Link {
                link_type,
                ref dest_url,
                ref title,
                ..
            }) if !is_page_anchor(dest_url) => {
                let href = match link_type {
                    LinkType::Email => format!("mailto:{dest_url}"),
                    _ => dest_url.to_string(),
                };
                let title_attr = if title.is_empty() {
                    String::new()
                } else {
                    format!(" title=\"{}\"", escape_attr(title))
                };
                events.push(Event::InlineHtml(
                    format!(
                        "<a href=\"{}\"{} target=\"_blank\" rel=\"noopener noreferrer\">",
                        escape_attr(&href),
                        title_attr
                    )
                    .into(),
                ));
                external_link.push(true);
            }
            Event::Start(Tag::Link { .. }) => {
                external_link.push(false);
                events.push(event);
            }
            Event::End(TagEnd::Link) => {
                if external_link.pop().unwrap_or(false) {
                    events.push(Event::InlineHtml("</a>".into()));
                } else {
                    events.push(event);
                }
            }
            _ => events.push(event),
        }
    }

    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, events.into_iter());
    html
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// about bodies are authored with a placeholder for the current link colour
pub fn substitute_link_color(body: &str, palette: &Palette) -> String {
    body.replace(LINK_COLOR_PLACEHOLDER, palette.text.links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{palette::resolve_palette, theme::Theme};

    const POST: &str = "# Getting Started\n\nSome text.\n\n## Setting  up `cargo`\n\nMore.\n\n### Next steps\n";

    #[test]
    fn extracts_heading_outline() {
        let headings = extract_headings(POST);

        assert_eq!(
            headings,
            vec![
                Heading {
                    text: String::from("Getting Started"),
                    id: String::from("getting-started"),
                    level: 1
                },
                Heading {
                    text: String::from("Setting  up cargo"),
                    id: String::from("setting-up-cargo"),
                    level: 2
                },
                Heading {
                    text: String::from("Next steps"),
                    id: String::from("next-steps"),
                    level: 3
                },
            ]
        );
    }

    #[test]
    fn headings_get_ids() {
        let html = render_markdown(POST);

        assert!(html.contains("<h1 id=\"getting-started\">Getting Started</h1>"));
        assert!(html.contains("<h3 id=\"next-steps\">"));
    }

    #[test]
    fn external_links_open_in_new_tab() {
        let html = render_markdown("see [the docs](https://docs.rs) or [below](#next-steps)");

        assert!(html.contains(
            "<a href=\"https://docs.rs\" target=\"_blank\" rel=\"noopener noreferrer\">the docs</a>"
        ));
        assert!(html.contains("<a href=\"#next-steps\">below</a>"));
    }

    #[test]
    fn reference_and_autolinks_open_in_new_tab() {
        let html = render_markdown(
            "read [the book][book], <https://crates.io> or <me@example.com>\n\n[book]: https://doc.rust-lang.org/book/\n",
        );

        assert!(html.contains(
            "<a href=\"https://doc.rust-lang.org/book/\" target=\"_blank\" rel=\"noopener noreferrer\">the book</a>"
        ));
        assert!(html.contains(
            "<a href=\"https://crates.io\" target=\"_blank\" rel=\"noopener noreferrer\">https://crates.io</a>"
        ));
        assert!(html.contains("href=\"mailto:me@example.com\""));
    }

    #[test]
    fn code_blocks_are_plain() {
        let html = render_markdown("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre><code class=\"language-rust\">fn main() {}"));
    }

    #[test]
    fn link_colour_placeholder() {
        let body = "<a href='https://example.com' style='color: ${linkColor};'>site</a>";
        let dark = substitute_link_color(body, &resolve_palette(Theme::Dark));

        assert_eq!(
            dark,
            "<a href='https://example.com' style='color: #71a2c7;'>site</a>"
        );
    }
}
