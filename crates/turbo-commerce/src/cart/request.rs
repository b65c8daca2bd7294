//! What the page hands to cart and wishlist collaborators.

use crate::catalog::{Product, Variant};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A validated add-to-cart request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartRequest {
    /// Product with a single stock count.
    Simple { product: Product, quantity: u32 },
    /// A specific variant of a multi-variant product.
    Variant {
        product: Product,
        variant: Variant,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    },
}

impl CartRequest {
    pub fn product(&self) -> &Product {
        match self {
            CartRequest::Simple { product, .. } | CartRequest::Variant { product, .. } => product,
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            CartRequest::Simple { quantity, .. } | CartRequest::Variant { quantity, .. } => {
                *quantity
            }
        }
    }

    pub fn size(&self) -> Option<&str> {
        match self {
            CartRequest::Simple { .. } => None,
            CartRequest::Variant { size, .. } => size.as_deref(),
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            CartRequest::Simple { .. } => None,
            CartRequest::Variant { color, .. } => color.as_deref(),
        }
    }
}

/// Receives validated add-to-cart requests.
///
/// Persistence, idempotency and failure handling belong to the implementor.
pub trait CartService {
    fn add_to_cart(&mut self, request: CartRequest) -> Result<(), CommerceError>;
}

/// Receives wishlist additions. No validation happens before the call.
pub trait WishlistService {
    fn add_to_wishlist(&mut self, product: &Product) -> Result<(), CommerceError>;
}
