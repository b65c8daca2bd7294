//! Product detail domain types and logic for TurboCommerce.
//!
//! This crate provides the pieces a product detail page is built from:
//!
//! - **Catalog**: Raw storefront records, normalized products, variant resolution
//! - **Selection**: The shopper's size, color, quantity and image choice
//! - **Cart**: Add-to-cart gating, cart and wishlist collaborators
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_commerce::prelude::*;
//!
//! let raw: RawProduct = serde_json::from_str(body)?;
//! let product = normalize_product(raw);
//!
//! let mut selection = Selection::for_product(&product);
//! selection.select_size("M");
//!
//! let mut cart = Cart::default();
//! match add_to_cart(&mut cart, &product, &selection) {
//!     Ok(_) => println!("Added {} items", cart.item_count()),
//!     Err(e) => println!("{e}"),
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod selection;

pub use error::{ActionError, CommerceError, SelectionError};
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{ActionError, CommerceError, SelectionError};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        normalize_product, normalize_product_with, resolve, NormalizeOptions, Product,
        ProductOptions, RawProduct, Resolution, StockModel, Variant,
    };

    // Selection
    pub use crate::selection::Selection;

    // Cart
    pub use crate::cart::{
        add_to_cart, add_to_wishlist, prepare_add_to_cart, Cart, CartRequest, CartService,
        LineItem, Wishlist, WishlistService,
    };
}
