//! Variant resolution and stock derivation.
//!
//! Everything here is a pure function of the product and the shopper's
//! current size/color choice. Callers re-run [`resolve`] whenever either
//! changes; nothing is cached.

use crate::catalog::{Product, StockModel, Variant};

/// Size and color options offered for a product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductOptions {
    /// Effective sizes: the explicit list if non-empty, else derived.
    pub sizes: Vec<String>,
    /// Effective colors: the explicit list if non-empty, else derived.
    pub colors: Vec<String>,
    /// Distinct non-empty variant sizes in first-seen order.
    pub sizes_from_variants: Vec<String>,
    /// Distinct non-empty variant colors in first-seen order.
    pub colors_from_variants: Vec<String>,
    size_axis: bool,
    color_axis: bool,
}

impl ProductOptions {
    pub fn derive(product: &Product) -> Self {
        let sizes_from_variants =
            distinct(product.variants.iter().map(|v| v.size.as_deref()));
        let colors_from_variants =
            distinct(product.variants.iter().map(|v| v.color.as_deref()));

        let size_axis = !sizes_from_variants.is_empty() || !product.sizes.is_empty();
        let color_axis = !colors_from_variants.is_empty() || !product.colors.is_empty();

        let sizes = if product.sizes.is_empty() {
            sizes_from_variants.clone()
        } else {
            product.sizes.clone()
        };
        let colors = if product.colors.is_empty() {
            colors_from_variants.clone()
        } else {
            product.colors.clone()
        };

        Self {
            sizes,
            colors,
            sizes_from_variants,
            colors_from_variants,
            size_axis,
            color_axis,
        }
    }

    /// Whether size distinguishes variants of this product.
    pub fn has_size_axis(&self) -> bool {
        self.size_axis
    }

    /// Whether color distinguishes variants of this product.
    pub fn has_color_axis(&self) -> bool {
        self.color_axis
    }
}

/// Derived state for one (product, size, color) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    pub options: ProductOptions,
    pub selected_variant: Option<&'a Variant>,
    pub available_stock: u32,
}

/// Derives options, the matched variant and available stock.
pub fn resolve<'a>(
    product: &'a Product,
    size: Option<&str>,
    color: Option<&str>,
) -> Resolution<'a> {
    let options = ProductOptions::derive(product);
    let selected_variant = find_variant(product, &options, size, color);
    let available_stock = available_stock(product, selected_variant);
    Resolution {
        options,
        selected_variant,
        available_stock,
    }
}

/// First variant, in declaration order, compatible with the selection.
///
/// An axis the product does not use, or a value the shopper has not picked,
/// matches anything. With only a size chosen, several colors may qualify;
/// the earliest declared one wins.
pub fn find_variant<'a>(
    product: &'a Product,
    options: &ProductOptions,
    size: Option<&str>,
    color: Option<&str>,
) -> Option<&'a Variant> {
    let size = size.filter(|s| !s.is_empty());
    let color = color.filter(|c| !c.is_empty());

    product.variants.iter().find(|variant| {
        let size_matches = match size {
            Some(wanted) if options.has_size_axis() => variant.size.as_deref() == Some(wanted),
            _ => true,
        };
        let color_matches = match color {
            Some(wanted) if options.has_color_axis() => variant.color.as_deref() == Some(wanted),
            _ => true,
        };
        size_matches && color_matches
    })
}

/// Stock the shopper can buy right now.
pub fn available_stock(product: &Product, selected: Option<&Variant>) -> u32 {
    match product.stock_model {
        StockModel::MultiVariant => selected.map(|v| v.stock).unwrap_or(0),
        StockModel::Simple { stock } => stock,
    }
}

/// Whether any variant of this size has stock.
pub fn size_has_stock(product: &Product, size: &str) -> bool {
    product
        .variants
        .iter()
        .any(|v| v.size.as_deref() == Some(size) && v.has_stock())
}

/// Whether any variant of this color has stock, within the selected size
/// when one is chosen.
pub fn color_has_stock(product: &Product, color: &str, selected_size: Option<&str>) -> bool {
    let selected_size = selected_size.filter(|s| !s.is_empty());
    product.variants.iter().any(|v| {
        v.color.as_deref() == Some(color)
            && v.has_stock()
            && selected_size.map_or(true, |size| v.size.as_deref() == Some(size))
    })
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values.flatten() {
        if !value.is_empty() && !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
