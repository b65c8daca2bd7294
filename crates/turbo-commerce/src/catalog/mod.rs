//! Product catalog module.
//!
//! Raw storefront records, their normalized form, and the variant resolver
//! that derives selectable options and available stock.

mod normalize;
mod product;
pub mod raw;
mod resolver;

pub use normalize::{
    normalize_product, normalize_product_with, NormalizeOptions, DEFAULT_BRAND,
    DEFAULT_CATEGORY, DEFAULT_RATING, DEFAULT_REVIEW_COUNT, PLACEHOLDER_DESCRIPTION,
    PLACEHOLDER_IMAGE,
};
pub use product::{Product, StockModel, Variant, MULTI_VARIANT_TAG};
pub use raw::{RawProduct, RawVariant};
pub use resolver::{
    available_stock, color_has_stock, find_variant, resolve, size_has_stock, ProductOptions,
    Resolution,
};
