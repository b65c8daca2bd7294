//! Shopper actions posted back to the product page.
//!
//! Add-to-cart and wishlist submissions are validated by
//! [`crate::page::ProductPage`] before they reach the collaborators here.
//! The collaborators live for one request and log what they accept; cart
//! and wishlist storage belong to the storefront.

use turbo_commerce::cart::{Cart, CartRequest, CartService, Wishlist, WishlistService};
use turbo_commerce::catalog::Product;
use turbo_commerce::{CommerceError, Currency};
use turbo_observability::StructuredLogger;

use crate::route::QueryParams;

/// Form field naming the submitted action.
pub const ACTION_FIELD: &str = "action";

/// A purchase button on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    AddToCart,
    AddToWishlist,
}

impl PageAction {
    /// Value carried by the submit button.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageAction::AddToCart => "add-to-cart",
            PageAction::AddToWishlist => "wishlist",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "add-to-cart" => Some(PageAction::AddToCart),
            "wishlist" => Some(PageAction::AddToWishlist),
            _ => None,
        }
    }

    /// The action named in submitted form fields.
    pub fn from_params(params: &QueryParams) -> Option<Self> {
        params.get(ACTION_FIELD).and_then(|v| Self::parse(v))
    }
}

/// Cart collaborator for a single request.
pub struct RequestCart<'a> {
    cart: Cart,
    logger: &'a StructuredLogger,
}

impl<'a> RequestCart<'a> {
    pub fn new(currency: Currency, logger: &'a StructuredLogger) -> Self {
        Self {
            cart: Cart::new(currency),
            logger,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

impl CartService for RequestCart<'_> {
    fn add_to_cart(&mut self, request: CartRequest) -> Result<(), CommerceError> {
        self.cart.add_request(&request)?;

        let mut entry = self
            .logger
            .info_builder("Cart request accepted")
            .field("product_id", request.product().id.as_str())
            .field_i64("quantity", i64::from(request.quantity()))
            .field_i64("cart_items", i64::from(self.cart.item_count()));
        if let Some(variant) = self.cart.line_for(&request).and_then(|l| l.variant_name()) {
            entry = entry.field("variant", variant);
        }
        entry.emit();
        Ok(())
    }
}

/// Wishlist collaborator for a single request.
pub struct RequestWishlist<'a> {
    wishlist: Wishlist,
    logger: &'a StructuredLogger,
}

impl<'a> RequestWishlist<'a> {
    pub fn new(logger: &'a StructuredLogger) -> Self {
        Self {
            wishlist: Wishlist::new(),
            logger,
        }
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }
}

impl WishlistService for RequestWishlist<'_> {
    fn add_to_wishlist(&mut self, product: &Product) -> Result<(), CommerceError> {
        let added = self.wishlist.add(product);
        self.logger
            .info_builder("Wishlist request accepted")
            .field("product_id", product.id.as_str())
            .field_bool("added", added)
            .field_i64("wishlist_items", self.wishlist.len() as i64)
            .emit();
        Ok(())
    }
}
