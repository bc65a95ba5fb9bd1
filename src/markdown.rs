//! Markdown Rendering
//!
//! Message bodies and resource descriptions are authored in markdown.
//! On top of pulldown-cmark:
//! - raw HTML is shown as text, never injected
//! - links open in a new tab and unsafe schemes are dropped
//! - code blocks are escaped with a `language-*` class for styling
//! - `excerpt` gives a plain-text preview for list rows

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Characters escaped in link targets
const URL_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn render(text: &str) -> String {
    let parser = Parser::new_ext(text, options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Plain-text preview of at most `max_chars` characters
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut plain = String::new();
    for event in Parser::new_ext(text, options()) {
        match event {
            Event::Text(t) | Event::Code(t) | Event::Html(t) | Event::InlineHtml(t) => plain.push_str(&t),
            Event::SoftBreak | Event::HardBreak | Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Heading(_)) => {
                plain.push(' ')
            }
            _ => {}
        }
    }
    let plain = plain.split_whitespace().collect::<Vec<_>>().join(" ");
    if plain.chars().count() <= max_chars {
        return plain;
    }
    let cut: String = plain.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
    /// Dropping an image's alt-text events until its end tag
    SkipAlt { depth: usize },
}

fn transform_events(parser: Parser<'_>) -> Vec<Event<'_>> {
    let mut events = Vec::new();
    let mut state = State::Normal;
    // One entry per open link: whether an <a> was emitted for it
    let mut open_links: Vec<bool> = Vec::new();

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),

                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }

                Event::Start(Tag::Link { dest_url, .. }) => {
                    let emitted = is_safe_url(&dest_url);
                    if emitted {
                        let html = format!(
                            r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
                            encode_url(&dest_url)
                        );
                        events.push(Event::Html(CowStr::from(html)));
                    }
                    open_links.push(emitted);
                }
                Event::End(TagEnd::Link) => {
                    if open_links.pop().unwrap_or(false) {
                        events.push(Event::Html(CowStr::from("</a>")));
                    }
                }

                Event::Start(Tag::Image { dest_url, .. }) => {
                    if is_safe_url(&dest_url) {
                        let html = format!(r#"<img class="md-image" src="{}" alt="" />"#, encode_url(&dest_url));
                        events.push(Event::Html(CowStr::from(html)));
                    }
                    state = State::SkipAlt { depth: 0 };
                }

                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let class = lang
                        .as_deref()
                        .map(|l| format!(r#" class="language-{}""#, escape_html(l)))
                        .unwrap_or_default();
                    let html = format!("<pre><code{}>{}</code></pre>\n", class, escape_html(content));
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },

            State::SkipAlt { ref mut depth } => match event {
                Event::Start(_) => *depth += 1,
                Event::End(_) => {
                    if *depth == 0 {
                        state = State::Normal;
                    } else {
                        *depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_lowercase();
    let scheme_end = lower.find(':');
    let path_start = lower.find(&['/', '?', '#'][..]);
    let has_scheme = match (scheme_end, path_start) {
        (Some(colon), Some(slash)) => colon < slash,
        (Some(_), None) => true,
        (None, _) => false,
    };
    !has_scheme || lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("mailto:")
}

fn encode_url(url: &str) -> String {
    escape_html(&utf8_percent_encode(url.trim(), URL_ENCODE_SET).to_string())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = render("# Week 3\n\nRead **chapter 4** before _Friday_.");
        assert!(html.contains("<h1>Week 3</h1>"));
        assert!(html.contains("<strong>chapter 4</strong>"));
        assert!(html.contains("<em>Friday</em>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render("Hello <script>alert(1)</script>\n\n<div onclick=\"x()\">block</div>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<div onclick"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_links_open_in_new_tab() {
        let html = render("See [the worksheet](<https://example.com/a b.pdf>).");
        assert!(html.contains(r#"<a href="https://example.com/a%20b.pdf" target="_blank" rel="noopener noreferrer">the worksheet</a>"#));
    }

    #[test]
    fn test_unsafe_links_keep_text_only() {
        let html = render("[click](javascript:alert(1)) and [site](/student/resources)");
        assert!(!html.contains("javascript"));
        assert!(html.contains("click"));
        assert!(html.contains(r#"href="/student/resources""#));
    }

    #[test]
    fn test_code_block_is_escaped() {
        let html = render("```rust\nlet a = 1 < 2;\n```");
        assert!(html.contains(r#"<pre><code class="language-rust">let a = 1 &lt; 2;"#));
    }

    #[test]
    fn test_image_drops_alt_events() {
        let html = render("![diagram **bold**](https://example.com/d.png)");
        assert!(html.contains(r#"<img class="md-image" src="https://example.com/d.png" alt="" />"#));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("# Title\n\nSome *body* text", 100), "Title Some body text");
        assert_eq!(excerpt("abcdefghij", 4), "abcd…");
        assert_eq!(excerpt("", 10), "");
    }
}
