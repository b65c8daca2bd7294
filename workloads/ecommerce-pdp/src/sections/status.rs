//! Loading and not-found renderers.

/// Placeholder blocks shown while the product loads.
pub fn render_loading() -> String {
    r#"<section class="pdp pdp--loading" data-section="product" aria-busy="true">
    <div class="skeleton-grid">
        <div class="skeleton skeleton-image"></div>
        <div class="skeleton-lines">
            <div class="skeleton skeleton-title"></div>
            <div class="skeleton skeleton-subtitle"></div>
            <div class="skeleton skeleton-body"></div>
        </div>
    </div>
</section>"#
        .to_string()
}

/// Shown when the product is missing or failed to load.
pub fn render_not_found() -> String {
    r#"<section class="pdp pdp--not-found" data-section="product">
    <div class="not-found">
        <h2>Product not found</h2>
    </div>
</section>"#
        .to_string()
}
