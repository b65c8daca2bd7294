//! Product details table and shipping information.

use super::escape_html;
use crate::page::ProductPage;

const SHIPPING_NOTES: [&str; 4] = [
    "Free standard shipping on orders over $50",
    "Express shipping available at checkout",
    "Estimated delivery: 3-7 business days",
    "International shipping available",
];

/// Render the details table and the shipping notes.
pub fn render_details(page: &ProductPage) -> String {
    let product = page.product();
    let in_stock = page.available_stock() > 0;

    let mut rows = vec![
        row("SKU", &escape_html(&product.sku), ""),
        row("Category", &escape_html(&product.category), ""),
        row("Brand", &escape_html(&product.brand), ""),
        row(
            "Availability",
            if in_stock { "In Stock" } else { "Out of Stock" },
            if in_stock { " detail--in" } else { " detail--out" },
        ),
    ];
    if let Some(label) = product.variant_type_label() {
        rows.push(row("Variant Type", label, ""));
    }

    let shipping: String = SHIPPING_NOTES
        .iter()
        .map(|note| format!("<p>• {note}</p>"))
        .collect();

    format!(
        r#"<div class="pdp-details" data-section="details">
    <div class="details-table">
        <h3>Product Details</h3>
        {rows}
    </div>
    <div class="shipping-info">
        <h3>Shipping Information</h3>
        {shipping}
    </div>
</div>"#,
        rows = rows.join("\n        "),
        shipping = shipping
    )
}

fn row(label: &str, value: &str, modifier: &str) -> String {
    format!(
        r#"<div class="detail-row"><span class="detail-label">{label}:</span><span class="detail-value{modifier}">{value}</span></div>"#
    )
}
