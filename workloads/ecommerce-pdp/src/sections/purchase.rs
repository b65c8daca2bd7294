//! Quantity stepper, action buttons and notices.

use super::{escape_html, hidden_inputs};
use crate::actions::PageAction;
use crate::page::ProductPage;

/// Render the stepper, add-to-cart and wishlist buttons, and any notice
/// or selection warning.
pub fn render_purchase(page: &ProductPage) -> String {
    let selection = page.selection();
    let available = page.available_stock();
    let quantity = selection.quantity;

    let stepper_hidden = hidden_inputs(selection, &["qty"]);
    let disabled = |off: bool| if off { " disabled" } else { "" };

    let stepper = format!(
        r#"<div class="pdp-quantity">
    <h3>Quantity</h3>
    <form method="get" class="stepper">
        {hidden}
        <button type="submit" name="qty" value="{down}" class="stepper-button"{down_disabled}>−</button>
        <span class="stepper-value">{quantity}</span>
        <button type="submit" name="qty" value="{up}" class="stepper-button"{up_disabled}>+</button>
    </form>
    <span class="stock-count">{available} pieces available</span>
</div>"#,
        hidden = stepper_hidden,
        down = quantity.saturating_sub(1).max(1),
        down_disabled = disabled(quantity <= 1),
        quantity = quantity,
        up = quantity.saturating_add(1),
        up_disabled = disabled(quantity >= available),
        available = available,
    );

    // Posts back to this page, which validates before anything is forwarded.
    let actions = format!(
        r#"<div class="pdp-actions">
    <form method="post" class="purchase-actions">
        {hidden}
        <button type="submit" name="action" value="{cart_action}" class="add-to-cart-button"{cart_disabled}>Add to Cart</button>
        <button type="submit" name="action" value="{wishlist_action}" class="wishlist-button" aria-label="Add to wishlist">♥</button>
    </form>
</div>"#,
        hidden = hidden_inputs(selection, &[]),
        cart_action = PageAction::AddToCart.as_str(),
        wishlist_action = PageAction::AddToWishlist.as_str(),
        cart_disabled = disabled(available == 0),
    );

    let notice = page
        .notice()
        .map(|notice| {
            let class = if notice.is_blocking() {
                "notice notice--error"
            } else {
                "notice notice--success"
            };
            format!(
                r#"<div class="{class}" role="alert">{}</div>"#,
                escape_html(&notice.message())
            )
        })
        .unwrap_or_default();

    let warning = page
        .selection_warning()
        .map(|text| {
            format!(
                r#"<div class="selection-warning"><p>{}</p></div>"#,
                escape_html(&text)
            )
        })
        .unwrap_or_default();

    format!("{stepper}\n{actions}\n{notice}{warning}")
}

/// Render the three store guarantee tiles.
pub fn render_features() -> String {
    const FEATURES: [(&str, &str, &str); 3] = [
        ("shipping", "Free Shipping", "On orders over $50"),
        ("secure", "Secure Payment", "100% secure"),
        ("returns", "Easy Returns", "30-day return"),
    ];

    let tiles: String = FEATURES
        .iter()
        .map(|(kind, title, detail)| {
            format!(
                r#"<div class="feature feature--{kind}"><p class="feature-title">{title}</p><p class="feature-detail">{detail}</p></div>"#
            )
        })
        .collect();

    format!(r#"<div class="pdp-features">{tiles}</div>"#)
}
