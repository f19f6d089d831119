//! Record detail page.

use std::fmt::Write;

use chrono::NaiveDate;
use stockbook_inventory::InventoryRecord;

use super::{escape, escape_opt, layout};

pub fn render(record: &InventoryRecord, rendered_on: NaiveDate) -> String {
    let title = record.item.as_deref().unwrap_or_default();

    let mut html = String::new();
    html.push_str(r#"<div class="page narrow">"#);
    html.push_str(r#"<p><a class="button" href="/">&larr; Back to Inventory</a></p>"#);
    html.push_str(r#"<div class="card"><div class="card-header">"#);
    let _ = write!(html, "<h2>{}</h2>", escape(title));
    if let Some(category) = record.category() {
        let _ = write!(html, r#"<span class="badge">{}</span>"#, escape(category));
    }
    html.push_str(r#"</div><div class="card-body">"#);

    html.push_str(r#"<div class="fields">"#);
    field(&mut html, "Item Code", &escape_opt(record.item_code.as_deref()));
    field(&mut html, "HTS Code", &escape_opt(record.hts_code.as_deref()));
    html.push_str("</div>");

    html.push_str(r#"<div><h3>Specifications</h3><div class="sections">"#);
    for section in record.specification_sections() {
        let _ = write!(html, "<p>{}</p>", escape(section));
    }
    html.push_str("</div></div>");

    html.push_str(r#"<div class="extra"><h3>Additional Information</h3><div class="fields">"#);
    field(
        &mut html,
        "Record ID",
        &format!("<code>{}</code>", escape(record.id.as_str())),
    );
    field(&mut html, "Last Updated", &rendered_on.format("%Y-%m-%d").to_string());
    html.push_str("</div></div>");

    html.push_str("</div></div></div>");

    let page_title = if title.is_empty() { record.id.as_str() } else { title };
    layout(page_title, &html)
}

/// Label/value pair. `value` must already be escaped.
fn field(html: &mut String, label: &str, value: &str) {
    let _ = write!(
        html,
        r#"<div><p class="muted">{}</p><p class="value">{value}</p></div>"#,
        escape(label)
    );
}
