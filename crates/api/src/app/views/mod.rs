//! Server-rendered HTML.
//!
//! Pages are plain strings built with `write!`. Every value that comes from
//! the store or the request goes through [`escape`].

use stockbook_core::RecordId;

pub mod detail;
pub mod error;
pub mod list;

const STYLE: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; color: #0f172a; background: #fff; }
.page { max-width: 72rem; margin: 0 auto; padding: 2.5rem 1rem; }
.page.narrow { max-width: 56rem; }
h1 { font-size: 1.5rem; margin: 0 0 1.5rem; }
h2 { font-size: 1.25rem; margin: 0; }
h3 { font-size: .875rem; font-weight: 500; margin: 0 0 .5rem; }
a { color: inherit; text-decoration: none; }
.card { border: 1px solid #e2e8f0; border-radius: .375rem; }
.toolbar, .footer { display: flex; align-items: center; justify-content: space-between; gap: .5rem; padding: 1rem; font-size: .75rem; }
.toolbar form { display: flex; gap: .5rem; width: 100%; max-width: 24rem; }
.toolbar input[type=search] { flex: 1; height: 2rem; padding: 0 .5rem; font-size: .75rem; border: 1px solid #e2e8f0; border-radius: .375rem; }
.menus { display: flex; gap: .5rem; }
.menu { position: relative; }
.menu summary, .button { display: inline-flex; align-items: center; height: 2rem; padding: 0 .75rem; border: 1px solid #e2e8f0; border-radius: .375rem; cursor: pointer; list-style: none; background: #fff; font-size: .75rem; }
.menu ul { position: absolute; right: 0; z-index: 10; min-width: 12rem; margin: .25rem 0 0; padding: .25rem; list-style: none; background: #fff; border: 1px solid #e2e8f0; border-radius: .375rem; }
.menu li a { display: block; padding: .375rem .5rem; }
.menu li a:hover, tbody tr:hover { background: #f1f5f9; }
.button.disabled { color: #94a3b8; cursor: default; }
table { width: 100%; border-collapse: collapse; font-size: .75rem; border-top: 1px solid #e2e8f0; }
th, td { text-align: left; padding: .5rem 1rem; border-bottom: 1px solid #e2e8f0; }
th { font-weight: 500; }
td a { display: block; }
td.truncate a { max-width: 500px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
td.empty { height: 6rem; text-align: center; }
.badge { display: inline-block; padding: .125rem .5rem; border: 1px solid #e2e8f0; border-radius: 9999px; font-size: .75rem; }
.muted { color: #64748b; }
.card-header { display: flex; align-items: center; justify-content: space-between; padding: 1.5rem 1.5rem .5rem; }
.card-body { display: grid; gap: 1.5rem; padding: 1rem 1.5rem 1.5rem; font-size: .75rem; }
.fields { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.fields p { margin: 0; }
.fields .value { font-weight: 600; }
.sections p { margin: 0 0 .75rem; }
.extra { padding-top: 1rem; border-top: 1px solid #e2e8f0; }
code { font-family: ui-monospace, monospace; }
"#;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Escape an optional value; missing renders as nothing.
pub fn escape_opt(text: Option<&str>) -> String {
    text.map(escape).unwrap_or_default()
}

/// Route of the detail page for `id`.
pub fn item_href(id: &RecordId) -> String {
    format!("/item/{}", urlencoding::encode(id.as_str()))
}

/// Wrap `body` in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}
