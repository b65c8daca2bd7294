//! Section renderers for the e-commerce PDP.
//!
//! Every renderer returns an HTML fragment as a `String`. Pickers,
//! thumbnails and the stepper are GET forms that re-request the page with
//! the selection in the query string; the purchase buttons POST the same
//! fields back to the page.

mod details;
mod document;
mod gallery;
mod options;
mod purchase;
mod status;
mod summary;

pub use details::*;
pub use document::*;
pub use gallery::*;
pub use options::*;
pub use purchase::*;
pub use status::*;
pub use summary::*;

use turbo_commerce::selection::Selection;

use crate::page::ProductPage;

/// Render the full product layout for a loaded page.
pub fn render_product(page: &ProductPage) -> String {
    format!(
        r#"<section class="pdp" data-section="product">
    <div class="pdp-card">
        <div class="pdp-grid">
            {gallery}
            <div class="pdp-info">
                {summary}
                {description}
                {options}
                {purchase}
                {features}
            </div>
        </div>
        {details}
    </div>
</section>"#,
        gallery = render_gallery(page),
        summary = render_summary(page),
        description = render_description(page.product()),
        options = render_options(page),
        purchase = render_purchase(page),
        features = render_features(),
        details = render_details(page),
    )
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Hidden inputs carrying the current selection, minus `skip`.
pub(crate) fn hidden_inputs(selection: &Selection, skip: &[&str]) -> String {
    let image = selection.image_index.to_string();
    let quantity = selection.quantity.to_string();
    let fields = [
        ("size", selection.size.as_deref()),
        ("color", selection.color.as_deref()),
        ("image", Some(image.as_str())),
        ("qty", Some(quantity.as_str())),
    ];

    fields
        .iter()
        .filter(|(name, _)| !skip.contains(name))
        .filter_map(|(name, value)| {
            value.map(|v| {
                format!(
                    r#"<input type="hidden" name="{}" value="{}">"#,
                    name,
                    escape_html(v)
                )
            })
        })
        .collect()
}
