//! Markdown preview rendering

use pulldown_cmark::{html, CowStr, Event, Options, Parser as MdParser, Tag};
use regex::Regex;
use std::sync::OnceLock;

/// Opening `<li>` of a task item, tight or loose
fn task_item_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r#"<li>(\s*(?:<p>)?<input disabled="" type="checkbox")"#).unwrap()
    })
}

fn unsafe_protocol_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)^(?:javascript|vbscript|file|data):").unwrap())
}

fn safe_data_image_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)^data:image/(?:png|gif|jpeg|webp)").unwrap())
}

fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    !unsafe_protocol_regex().is_match(url) || safe_data_image_regex().is_match(url)
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("")
    }
}

/// Neutralise raw HTML and dangerous link targets
fn make_safe(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

/// Render markdown to HTML that is safe to inject into the editor page
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = MdParser::new_ext(markdown, options).map(make_safe);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);

    task_item_regex()
        .replace_all(&out, r#"<li class="task-list-item">$1"#)
        .into_owned()
}
