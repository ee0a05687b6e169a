//! Server-rendered HTML pages and fragments

use crate::application::EditorView;
use crate::domain::title::{first_line_title, slug_from_filename};
use crate::domain::SearchHit;

/// Escape text for HTML bodies and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `/doc/<slug>` link target for a document filename
pub fn doc_href(name: &str) -> String {
    format!("/doc/{}", urlencoding::encode(slug_from_filename(name)))
}

const HEAD_COMMON: &str = r#"  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="apple-mobile-web-app-capable" content="yes">
  <meta name="mobile-web-app-capable" content="yes">
  <link rel="stylesheet" type="text/css" href="/main.css">"#;

fn plugin_scripts(plugins: &[String]) -> String {
    plugins
        .iter()
        .map(|name| {
            format!(
                r#"<script src="/plugins/{}"></script>"#,
                urlencoding::encode(name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n  ")
}

/// The editor: nav bar, plugin menu, and the autosaving textarea
pub fn editor_page(view: &EditorView) -> String {
    format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <title>{title} - Slipbox</title>
{head}
</head>
<body>
  <div id="title">
    <p id="nav" style="float: right;">
      <a href="/search" title="Search">&#8981;</a>
      <a href="{prev}" title="Previous Document">&#8249;</a>
      <a href="{next}" title="Next Document">&#8250;</a>
      <a href="/new" title="Add New Document">+</a>
      <a href="#" id="pluginsButton" title="Menu">&#9776;</a>
    </p>
    <p id="page">{name}</p>
  </div>

  <div id="menu">
    <ul id="pluginMenuItems">
      <li>No plugins loaded</li>
    </ul>
  </div>

  <input type="hidden" name="doc" value="{name}">
  <textarea id="typebox" name="text" spellcheck="true">
{text}</textarea>

  <script src="/view/edit/plugins.js"></script>
  <script src="/view/edit/edit.js"></script>
  {plugins}
</body>
</html>"##,
        title = escape_html(&first_line_title(&view.text)),
        head = HEAD_COMMON,
        prev = doc_href(&view.previous),
        next = doc_href(&view.next),
        name = escape_html(&view.name),
        text = escape_html(&view.text),
        plugins = plugin_scripts(&view.plugins),
    )
}

/// The search page; results are fetched from `/find` as the user types
pub fn search_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Slipbox - Search</title>
{head}
  <link rel="stylesheet" type="text/css" href="/view/search/search.css">
</head>
<body>
  <div id="title">
    <p id="nav" style="float: right;">
      <a href="/" title="Close Search">&#10005;</a>
    </p>
    <p id="page"></p>
  </div>

  <div id="searchPane">
    <input type="text" name="search" placeholder="Enter your search..." autofocus>
    <div id="results"></div>
  </div>

  <script src="/view/search/search.js"></script>
</body>
</html>"#,
        head = HEAD_COMMON,
    )
}

/// One paragraph per hit: linked title, then the body fragment
pub fn search_results(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| {
            format!(
                r#"<p><a href="/doc/{}">{}</a><br>{}</p>"#,
                urlencoding::encode(&hit.slug),
                escape_html(&hit.title),
                escape_html(&hit.fragment)
            )
        })
        .collect()
}
