//! In-memory wishlist.

use crate::cart::WishlistService;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Saved products, one entry per product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wishlist {
    pub items: Vec<WishlistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistItem {
    pub product_id: ProductId,
    pub title: String,
    pub image: String,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product. Returns false if it was already saved.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(WishlistItem {
            product_id: product.id.clone(),
            title: product.title.clone(),
            image: product.image(0).to_string(),
        });
        true
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl WishlistService for Wishlist {
    fn add_to_wishlist(&mut self, product: &Product) -> Result<(), CommerceError> {
        self.add(product);
        Ok(())
    }
}
