//! Shopping cart module.
//!
//! Add-to-cart gating, the collaborator traits the page talks to, and
//! in-memory cart and wishlist implementations.

mod cart;
mod dispatch;
mod request;
mod wishlist;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use dispatch::{add_to_cart, add_to_wishlist, prepare_add_to_cart};
pub use request::{CartRequest, CartService, WishlistService};
pub use wishlist::{Wishlist, WishlistItem};
