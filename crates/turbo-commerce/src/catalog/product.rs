//! Normalized product and variant types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Wire value of `variantType` for per-variant inventory.
pub const MULTI_VARIANT_TAG: &str = "MultiVarient";

/// How a product tracks inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockModel {
    /// One stock count for the whole product.
    Simple { stock: u32 },
    /// Stock is tracked per variant.
    MultiVariant,
}

impl StockModel {
    pub fn is_multi_variant(&self) -> bool {
        matches!(self, StockModel::MultiVariant)
    }
}

/// A product with every display fallback already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Never empty; falls back to a placeholder path.
    pub images: Vec<String>,
    /// Discount percentage shown on the gallery badge.
    pub discount: Option<f64>,
    pub price: Money,
    pub original_price: Option<Money>,
    pub rating: f32,
    pub reviews: u32,
    pub sku: String,
    pub category: String,
    pub brand: String,
    /// Explicit product-level size list (may be empty).
    pub sizes: Vec<String>,
    /// Explicit product-level color list (may be empty).
    pub colors: Vec<String>,
    /// Variants in declaration order.
    pub variants: Vec<Variant>,
    pub stock_model: StockModel,
    /// The raw `stock` field, kept for the stock badge text.
    pub listed_stock: Option<u32>,
}

impl Product {
    pub fn is_multi_variant(&self) -> bool {
        self.stock_model.is_multi_variant()
    }

    /// Label shown in the details table for multi-variant products.
    pub fn variant_type_label(&self) -> Option<&'static str> {
        self.is_multi_variant().then_some(MULTI_VARIANT_TAG)
    }

    /// Image at `index`, falling back to the first image.
    pub fn image(&self, index: usize) -> &str {
        self.images
            .get(index)
            .or_else(|| self.images.first())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Whether a thumbnail strip is worth showing.
    pub fn has_gallery(&self) -> bool {
        self.images.len() > 1
    }

    /// Number of filled stars out of five.
    pub fn full_stars(&self) -> usize {
        self.rating.floor().clamp(0.0, 5.0) as usize
    }
}

/// A specific size/color combination with its own stock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    pub size: Option<String>,
    pub color: Option<String>,
    pub stock: u32,
}

impl Variant {
    pub fn new(size: Option<&str>, color: Option<&str>, stock: u32) -> Self {
        Self {
            size: size.map(str::to_string),
            color: color.map(str::to_string),
            stock,
        }
    }

    pub fn has_stock(&self) -> bool {
        self.stock > 0
    }
}
