//! Title, rating, price and description renderers.

use turbo_commerce::catalog::Product;

use super::escape_html;
use crate::page::ProductPage;

/// Render the title block: stars, price and stock badge.
pub fn render_summary(page: &ProductPage) -> String {
    let product = page.product();
    let badge = page.stock_badge();

    let original_price = product
        .original_price
        .map(|price| format!(r#"<span class="original-price">{}</span>"#, price.display()))
        .unwrap_or_default();

    format!(
        r#"<div class="pdp-summary" data-section="summary">
    <h1 class="product-title">{title}</h1>
    <div class="product-rating">
        {stars}
        <span class="rating-text">{rating} ({reviews} reviews)</span>
    </div>
    <div class="product-price">
        <span class="current-price">{price}</span>
        {original_price}
    </div>
    <span class="stock-badge {badge_class}">{badge_text}</span>
</div>"#,
        title = escape_html(&product.title),
        stars = render_stars(product.full_stars()),
        rating = product.rating,
        reviews = product.reviews,
        price = product.price.display(),
        original_price = original_price,
        badge_class = if badge.in_stock {
            "stock-badge--in"
        } else {
            "stock-badge--out"
        },
        badge_text = escape_html(&badge.text),
    )
}

/// Five stars, the first `filled` of them highlighted.
pub fn render_stars(filled: usize) -> String {
    let stars: String = (0..5)
        .map(|i| {
            if i < filled {
                r#"<span class="star star--filled">★</span>"#
            } else {
                r#"<span class="star">★</span>"#
            }
        })
        .collect();
    format!(r#"<span class="stars" aria-label="{filled} out of 5 stars">{stars}</span>"#)
}

pub fn render_description(product: &Product) -> String {
    format!(
        r#"<div class="pdp-description">
    <h3>Description</h3>
    <p>{}</p>
</div>"#,
        escape_html(&product.description)
    )
}
