//! Image gallery section renderer.

use super::{escape_html, hidden_inputs};
use crate::page::ProductPage;

/// Render the main image, discount badge and thumbnail strip.
pub fn render_gallery(page: &ProductPage) -> String {
    let product = page.product();
    let selected = page.selection().image_index;

    let badge = match product.discount {
        Some(discount) => format!(
            r#"<div class="discount-badge">-{}% OFF</div>"#,
            discount
        ),
        None => String::new(),
    };

    // Thumbnails only when there is something to switch between.
    let thumbnails = if product.has_gallery() {
        let hidden = hidden_inputs(page.selection(), &["image"]);
        let buttons: String = product
            .images
            .iter()
            .enumerate()
            .map(|(index, url)| {
                let class = if index == selected {
                    "thumbnail thumbnail--selected"
                } else {
                    "thumbnail"
                };
                format!(
                    r#"<button type="submit" name="image" value="{index}" class="{class}"><img src="{url}" alt="Product {n}"></button>"#,
                    index = index,
                    class = class,
                    url = escape_html(url),
                    n = index + 1
                )
            })
            .collect();
        format!(
            r#"<form method="get" class="thumbnail-strip">{hidden}{buttons}</form>"#
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="pdp-gallery" data-section="gallery">
    <div class="main-image">
        <img src="{src}" alt="{alt}">
        {badge}
    </div>
    {thumbnails}
</div>"#,
        src = escape_html(product.image(selected)),
        alt = escape_html(&product.title),
        badge = badge,
        thumbnails = thumbnails
    )
}
