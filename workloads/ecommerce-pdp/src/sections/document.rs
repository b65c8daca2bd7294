//! Full HTML document around the page sections.

use turbo_observability::RequestId;

use super::{escape_html, render_loading, render_not_found, render_product};
use crate::page::PageState;

/// Render a complete HTML document for `state`.
pub fn render_document(state: &PageState, request_id: &RequestId) -> String {
    let (title, body) = match state {
        PageState::Loading { .. } => ("Loading… | Pick & Go".to_string(), render_loading()),
        PageState::NotFound => ("Product not found | Pick & Go".to_string(), render_not_found()),
        PageState::Ready(page) => (
            format!("{} | Pick & Go", page.product().title),
            render_product(page),
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
    <header class="site-header">
        <nav><a href="/">Home</a> / <a href="/allproducts">Products</a></nav>
    </header>
    <main class="pdp-container" data-request-id="{request_id}">
{body}
    </main>
</body>
</html>"#,
        title = escape_html(&title),
        styles = PDP_STYLES,
        request_id = escape_html(request_id.as_str()),
        body = body
    )
}

/// CSS styles for the PDP
const PDP_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; background: #f9fafb; }
.site-header { background: #333; color: white; padding: 1rem 2rem; }
.site-header a { color: #88f; }
.pdp-container { max-width: 1200px; margin: 0 auto; padding: 3rem 1rem; }
.pdp-card { background: white; border-radius: 1rem; box-shadow: 0 10px 15px rgba(0,0,0,0.1); padding: 2rem; }
.pdp-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
.pdp-info > * + * { margin-top: 1.5rem; }

/* Gallery */
.main-image { position: relative; overflow: hidden; border-radius: 0.75rem; background: #f3f4f6; aspect-ratio: 1; }
.main-image img { width: 100%; height: 100%; object-fit: cover; }
.discount-badge { position: absolute; top: 1rem; left: 1rem; background: #ef4444; color: white; font-weight: bold; font-size: 0.875rem; padding: 0.5rem 1rem; border-radius: 9999px; }
.thumbnail-strip { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.75rem; margin-top: 1rem; }
.thumbnail { border: 2px solid #e5e7eb; border-radius: 0.5rem; padding: 0; overflow: hidden; aspect-ratio: 1; cursor: pointer; background: none; }
.thumbnail img { width: 100%; height: 100%; object-fit: cover; }
.thumbnail--selected { border-color: #2563eb; box-shadow: 0 0 0 2px #bfdbfe; }

/* Summary */
.product-title { font-size: 2.25rem; margin: 0 0 0.75rem 0; }
.stars { color: #d1d5db; font-size: 1.125rem; }
.star--filled { color: #facc15; }
.rating-text { font-size: 0.875rem; color: #4b5563; margin-left: 0.5rem; }
.current-price { font-size: 2.25rem; font-weight: bold; }
.original-price { font-size: 1.25rem; color: #6b7280; text-decoration: line-through; margin-left: 0.75rem; }
.stock-badge { display: inline-block; padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.875rem; font-weight: 500; }
.stock-badge--in { background: #dcfce7; color: #15803d; }
.stock-badge--out { background: #fee2e2; color: #b91c1c; }
.pdp-description { border-top: 1px solid #e5e7eb; padding-top: 1.5rem; color: #4b5563; line-height: 1.6; }

/* Options */
.option-list { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.option { padding: 0.5rem 1.5rem; border: 2px solid #d1d5db; border-radius: 0.5rem; background: white; font-weight: 500; cursor: pointer; }
.option--selected { border-color: #2563eb; background: #eff6ff; color: #2563eb; }
.option--disabled { border-color: #e5e7eb; color: #9ca3af; opacity: 0.5; cursor: not-allowed; }
.required { color: #ef4444; }

/* Quantity and actions */
.stepper { display: inline-flex; align-items: center; border: 2px solid #d1d5db; border-radius: 0.5rem; }
.stepper-button { padding: 0.75rem; background: none; border: none; cursor: pointer; }
.stepper-value { padding: 0.5rem 1.5rem; font-weight: 600; font-size: 1.125rem; }
.stock-count { margin-left: 1rem; font-size: 0.875rem; color: #4b5563; }
.pdp-actions { display: flex; gap: 0.75rem; }
.purchase-actions { display: flex; gap: 1rem; }
.add-to-cart-button { flex: 1; background: linear-gradient(to right, #2563eb, #9333ea); color: white; font-weight: 600; padding: 1rem 1.5rem; border: none; border-radius: 0.75rem; cursor: pointer; }
.add-to-cart-button:disabled { opacity: 0.5; cursor: not-allowed; }
.wishlist-button { background: #f3f4f6; padding: 1rem; border: none; border-radius: 0.75rem; font-size: 1.25rem; cursor: pointer; }
.notice { padding: 0.75rem; border-radius: 0.5rem; font-size: 0.875rem; }
.notice--error { background: #fee2e2; color: #991b1b; }
.notice--success { background: #dcfce7; color: #166534; }
.selection-warning { background: #fefce8; border: 1px solid #fef08a; border-radius: 0.5rem; padding: 0.75rem; font-size: 0.875rem; color: #854d0e; }

/* Features and details */
.pdp-features { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; border-top: 1px solid #e5e7eb; padding-top: 1.5rem; }
.feature-title { font-size: 0.875rem; font-weight: 600; margin: 0; }
.feature-detail { font-size: 0.75rem; color: #4b5563; margin: 0; }
.pdp-details { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; margin-top: 3rem; padding-top: 2rem; border-top: 1px solid #e5e7eb; }
.detail-row { display: flex; justify-content: space-between; padding: 0.5rem 0; border-bottom: 1px solid #f3f4f6; font-size: 0.875rem; }
.detail-label { color: #4b5563; }
.detail-value { font-weight: 500; }
.detail--in { color: #16a34a; }
.detail--out { color: #dc2626; }
.shipping-info { font-size: 0.875rem; color: #4b5563; }

/* Loading/Not found */
.skeleton-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.skeleton { background: #d1d5db; border-radius: 0.5rem; animation: pulse 2s infinite; }
.skeleton-image { height: 24rem; }
.skeleton-title { height: 2rem; width: 75%; }
.skeleton-subtitle { height: 1.5rem; width: 50%; margin-top: 1rem; }
.skeleton-body { height: 8rem; margin-top: 1rem; }
.not-found { text-align: center; padding: 3rem 0; }
@keyframes pulse { 50% { opacity: 0.5; } }
"#;
