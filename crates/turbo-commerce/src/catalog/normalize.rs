//! Normalization from the raw wire shape to [`Product`].
//!
//! All display fallbacks live here so rendering and resolution code can
//! treat every field as present. Normalization never fails: malformed
//! values fall back exactly like missing ones.

use crate::catalog::raw::{Loose, RawProduct, RawVariant};
use crate::catalog::{Product, StockModel, Variant, MULTI_VARIANT_TAG};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";
pub const PLACEHOLDER_DESCRIPTION: &str = "High-quality product...";
pub const DEFAULT_RATING: f32 = 4.5;
pub const DEFAULT_REVIEW_COUNT: u32 = 128;
pub const DEFAULT_CATEGORY: &str = "Fashion";
pub const DEFAULT_BRAND: &str = "Pick & Go";
pub const SKU_PREFIX: &str = "PG-";

/// Knobs for normalization that come from deployment config.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub placeholder_image: String,
    pub currency: Currency,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            currency: Currency::USD,
        }
    }
}

/// Normalizes a raw record with default options.
pub fn normalize_product(raw: RawProduct) -> Product {
    normalize_product_with(raw, &NormalizeOptions::default())
}

/// Normalizes a raw record into a fully populated [`Product`].
pub fn normalize_product_with(raw: RawProduct, options: &NormalizeOptions) -> Product {
    let id = ProductId::new(
        text(&raw.id)
            .or_else(|| text(&raw.document_id))
            .unwrap_or_default(),
    );

    let title = text(&raw.title)
        .or_else(|| text(&raw.name))
        .unwrap_or_default();

    let description =
        text(&raw.description).unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string());

    // `images` wins over `image`; an empty list counts as missing.
    let mut images = texts(&raw.images);
    if images.is_empty() {
        images = texts(&raw.image);
    }
    if images.is_empty() {
        images.push(options.placeholder_image.clone());
    }

    let price = money(&raw.price, options.currency).unwrap_or(Money::zero(options.currency));
    let original_price = money(&raw.original_price, options.currency).filter(Money::is_positive);
    let discount = number(&raw.discount).filter(|d| *d > 0.0);

    let rating = number(&raw.rating)
        .map(|r| r as f32)
        .filter(|r| *r > 0.0)
        .unwrap_or(DEFAULT_RATING);
    let reviews = count(&raw.reviews)
        .filter(|r| *r > 0)
        .unwrap_or(DEFAULT_REVIEW_COUNT);

    let sku = text(&raw.sku).unwrap_or_else(|| generated_sku(&id));

    let listed_stock = count(&raw.stock);
    let is_multi_variant = text(&raw.variant_type).as_deref() == Some(MULTI_VARIANT_TAG);
    let stock_model = if is_multi_variant {
        StockModel::MultiVariant
    } else {
        StockModel::Simple {
            stock: listed_stock.or_else(|| count(&raw.total_stock)).unwrap_or(0),
        }
    };

    Product {
        id,
        title,
        description,
        images,
        discount,
        price,
        original_price,
        rating,
        reviews,
        sku,
        category: text(&raw.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        brand: text(&raw.brand).unwrap_or_else(|| DEFAULT_BRAND.to_string()),
        sizes: list_texts(&raw.sizes),
        colors: list_texts(&raw.colors),
        variants: raw.variants.iter().map(normalize_variant).collect(),
        stock_model,
        listed_stock,
    }
}

fn normalize_variant(raw: &RawVariant) -> Variant {
    Variant {
        size: text(&raw.size),
        color: text(&raw.color),
        stock: count(&raw.stock).unwrap_or(0),
    }
}

/// `PG-` plus the last six characters of the product id.
fn generated_sku(id: &ProductId) -> String {
    if id.is_empty() {
        format!("{SKU_PREFIX}000000")
    } else {
        format!("{SKU_PREFIX}{}", id.tail(6))
    }
}

fn text(value: &Option<Loose>) -> Option<String> {
    value.as_ref().and_then(Loose::as_text)
}

fn texts(value: &Option<Loose>) -> Vec<String> {
    value.as_ref().map(Loose::texts).unwrap_or_default()
}

fn list_texts(value: &Option<Loose>) -> Vec<String> {
    value.as_ref().map(Loose::list_texts).unwrap_or_default()
}

fn number(value: &Option<Loose>) -> Option<f64> {
    value.as_ref().and_then(Loose::as_f64)
}

fn count(value: &Option<Loose>) -> Option<u32> {
    value.as_ref().and_then(Loose::as_count)
}

fn money(value: &Option<Loose>, currency: Currency) -> Option<Money> {
    number(value).map(|amount| Money::from_decimal(amount, currency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(value: serde_json::Value) -> Product {
        normalize_product(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_empty_record_gets_every_fallback() {
        let product = normalize(json!({}));
        assert_eq!(product.title, "");
        assert_eq!(product.description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(product.images, vec![PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(product.price, Money::zero(Currency::USD));
        assert_eq!(product.rating, DEFAULT_RATING);
        assert_eq!(product.reviews, DEFAULT_REVIEW_COUNT);
        assert_eq!(product.sku, "PG-000000");
        assert_eq!(product.category, "Fashion");
        assert_eq!(product.brand, "Pick & Go");
        assert_eq!(product.stock_model, StockModel::Simple { stock: 0 });
        assert!(product.discount.is_none());
        assert!(product.original_price.is_none());
    }

    #[test]
    fn test_title_falls_back_to_name() {
        assert_eq!(normalize(json!({"name": "Linen Shirt"})).title, "Linen Shirt");
        assert_eq!(
            normalize(json!({"title": "", "name": "Linen Shirt"})).title,
            "Linen Shirt"
        );
        assert_eq!(
            normalize(json!({"title": "Oxford", "name": "Linen Shirt"})).title,
            "Oxford"
        );
    }

    #[test]
    fn test_image_fallback_chain() {
        let product = normalize(json!({"images": ["/a.jpg", "/b.jpg"], "image": "/c.jpg"}));
        assert_eq!(product.images, vec!["/a.jpg", "/b.jpg"]);

        let product = normalize(json!({"images": [], "image": "/c.jpg"}));
        assert_eq!(product.images, vec!["/c.jpg"]);

        let product = normalize(json!({"image": ["/d.jpg"]}));
        assert_eq!(product.images, vec!["/d.jpg"]);
        assert!(!product.has_gallery());
    }

    #[test]
    fn test_custom_placeholder() {
        let options = NormalizeOptions {
            placeholder_image: "/static/none.png".to_string(),
            ..NormalizeOptions::default()
        };
        let product = normalize_product_with(RawProduct::default(), &options);
        assert_eq!(product.images, vec!["/static/none.png"]);
    }

    #[test]
    fn test_simple_stock_prefers_stock_then_total() {
        let product = normalize(json!({"stock": 5, "totalStock": 9}));
        assert_eq!(product.stock_model, StockModel::Simple { stock: 5 });

        let product = normalize(json!({"totalStock": 9}));
        assert_eq!(product.stock_model, StockModel::Simple { stock: 9 });

        // An explicit zero is a value, not a missing field.
        let product = normalize(json!({"stock": 0, "totalStock": 9}));
        assert_eq!(product.stock_model, StockModel::Simple { stock: 0 });

        let product = normalize(json!({"stock": null, "totalStock": "4"}));
        assert_eq!(product.stock_model, StockModel::Simple { stock: 4 });
    }

    #[test]
    fn test_multi_variant_tag_is_exact() {
        let product = normalize(json!({"variantType": "MultiVarient", "stock": 3}));
        assert_eq!(product.stock_model, StockModel::MultiVariant);
        assert_eq!(product.listed_stock, Some(3));

        let product = normalize(json!({"variantType": "Simple", "stock": 3}));
        assert_eq!(product.stock_model, StockModel::Simple { stock: 3 });
    }

    #[test]
    fn test_variants_keep_order_and_clean_values() {
        let product = normalize(json!({
            "variants": [
                {"size": "S", "color": "Red", "stock": 3},
                {"size": "", "color": "Blue", "stock": -2},
                {"size": 42}
            ]
        }));
        assert_eq!(
            product.variants,
            vec![
                Variant::new(Some("S"), Some("Red"), 3),
                Variant::new(None, Some("Blue"), 0),
                Variant::new(Some("42"), None, 0),
            ]
        );
    }

    #[test]
    fn test_sku_generated_from_document_id() {
        let product = normalize(json!({"_id": "65f1c2aa9b03d4e5f6a7b8c9"}));
        assert_eq!(product.sku, "PG-a7b8c9");
        assert_eq!(product.id.as_str(), "65f1c2aa9b03d4e5f6a7b8c9");

        let product = normalize(json!({"_id": "abc", "sku": "LIN-001"}));
        assert_eq!(product.sku, "LIN-001");
    }

    #[test]
    fn test_zero_rating_and_reviews_use_defaults() {
        let product = normalize(json!({"rating": 0, "reviews": 0}));
        assert_eq!(product.rating, DEFAULT_RATING);
        assert_eq!(product.reviews, DEFAULT_REVIEW_COUNT);

        let product = normalize(json!({"rating": "3.8", "reviews": 12}));
        assert_eq!(product.rating, 3.8);
        assert_eq!(product.reviews, 12);
        assert_eq!(product.full_stars(), 3);
    }

    #[test]
    fn test_prices() {
        let product = normalize(json!({"price": "49.99", "originalPrice": 0, "discount": 20}));
        assert_eq!(product.price.amount_cents, 4999);
        assert!(product.original_price.is_none());
        assert_eq!(product.discount, Some(20.0));

        let product = normalize(json!({"price": 40, "originalPrice": 50}));
        assert_eq!(product.original_price.map(|p| p.amount_cents), Some(5000));
    }
}
