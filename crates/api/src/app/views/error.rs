use super::layout;

/// Terminal page for an identifier that is not in the catalog.
pub fn not_found() -> String {
    layout(
        "Item not found",
        r#"<div class="page narrow">
<h1>404</h1>
<p class="muted">This item could not be found.</p>
<p><a class="button" href="/">&larr; Back to Inventory</a></p>
</div>"#,
    )
}

/// Page shown when the inventory could not be loaded.
pub fn unavailable() -> String {
    layout(
        "Inventory unavailable",
        r#"<div class="page narrow">
<h1>Something went wrong</h1>
<p class="muted">The inventory could not be loaded. Please try again later.</p>
</div>"#,
    )
}
