//! Shopper selection state for a product page.
//!
//! A [`Selection`] belongs to one product. When the product changes, build a
//! new one with [`Selection::for_product`] instead of carrying choices over.

use crate::catalog::{resolve, Product, ProductOptions, Resolution};
use serde::{Deserialize, Serialize};

/// Ephemeral choices the shopper has made on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub image_index: usize,
    pub quantity: u32,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            image_index: 0,
            quantity: 1,
            size: None,
            color: None,
        }
    }
}

impl Selection {
    /// Fresh selection for a newly loaded product, with defaults applied.
    pub fn for_product(product: &Product) -> Self {
        let mut selection = Self::default();
        selection.apply_defaults(&ProductOptions::derive(product));
        selection
    }

    /// Pre-selects the first effective size and color when none is chosen.
    ///
    /// The first option is taken even if it has no stock.
    pub fn apply_defaults(&mut self, options: &ProductOptions) {
        if self.size.is_none() {
            self.size = options.sizes.first().cloned();
        }
        if self.color.is_none() {
            self.color = options.colors.first().cloned();
        }
    }

    /// Derived variant and stock for the current choice.
    pub fn resolve<'a>(&self, product: &'a Product) -> Resolution<'a> {
        resolve(product, self.size.as_deref(), self.color.as_deref())
    }

    /// Chooses a size. Quantity goes back to 1 since stock may differ.
    pub fn select_size(&mut self, size: impl Into<String>) {
        self.size = non_empty(size.into());
        self.quantity = 1;
    }

    /// Chooses a color. Quantity goes back to 1 since stock may differ.
    pub fn select_color(&mut self, color: impl Into<String>) {
        self.color = non_empty(color.into());
        self.quantity = 1;
    }

    /// Shows the image at `index`; out-of-range indices are ignored.
    pub fn select_image(&mut self, index: usize, image_count: usize) -> bool {
        if index < image_count {
            self.image_index = index;
            true
        } else {
            false
        }
    }

    /// Adds one while below `available`.
    pub fn increment(&mut self, available: u32) -> bool {
        if self.quantity < available {
            self.quantity += 1;
            true
        } else {
            false
        }
    }

    /// Removes one while above 1.
    pub fn decrement(&mut self) -> bool {
        if self.quantity > 1 {
            self.quantity -= 1;
            true
        } else {
            false
        }
    }

    /// Sets the quantity directly, clamped into `1..=max(available, 1)`.
    pub fn set_quantity(&mut self, quantity: u32, available: u32) {
        self.quantity = quantity.clamp(1, available.max(1));
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
