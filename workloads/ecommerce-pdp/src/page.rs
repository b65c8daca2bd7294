//! Page state for the product detail view.
//!
//! [`ProductView`] tracks which slug is being shown and discards stale
//! loads. [`ProductPage`] holds a loaded product together with the
//! shopper's selection and the last action notice.

use turbo_commerce::cart::{self, CartRequest, CartService, WishlistService};
use turbo_commerce::catalog::{color_has_stock, size_has_stock, Resolution};
use turbo_commerce::selection::Selection;
use turbo_commerce::catalog::Product;
use turbo_commerce::{ActionError, ProductSlug, SelectionError};

use crate::route::QueryParams;

/// Handle for one navigation's fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    slug: ProductSlug,
}

impl LoadTicket {
    pub fn slug(&self) -> &ProductSlug {
        &self.slug
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What the page is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading { slug: ProductSlug },
    NotFound,
    Ready(ProductPage),
}

/// Owns the page state across navigations.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    state: PageState,
    generation: u64,
}

impl ProductView {
    /// A view about to load `slug`, with the ticket for that load.
    pub fn start(slug: ProductSlug) -> (Self, LoadTicket) {
        let mut view = Self {
            state: PageState::NotFound,
            generation: 0,
        };
        let ticket = view.navigate(slug);
        (view, ticket)
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn into_state(self) -> PageState {
        self.state
    }

    pub fn page(&self) -> Option<&ProductPage> {
        match &self.state {
            PageState::Ready(page) => Some(page),
            _ => None,
        }
    }

    pub fn page_mut(&mut self) -> Option<&mut ProductPage> {
        match &mut self.state {
            PageState::Ready(page) => Some(page),
            _ => None,
        }
    }

    /// Begin showing `slug`. Any load still in flight becomes stale.
    pub fn navigate(&mut self, slug: ProductSlug) -> LoadTicket {
        self.generation += 1;
        self.state = PageState::Loading { slug: slug.clone() };
        LoadTicket {
            generation: self.generation,
            slug,
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a finished load. Returns false, changing nothing, if a newer
    /// navigation has started since `ticket` was issued.
    pub fn complete(&mut self, ticket: &LoadTicket, product: Option<Product>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = match product {
            Some(product) => PageState::Ready(ProductPage::new(product)),
            None => PageState::NotFound,
        };
        true
    }
}

/// Feedback from the last page action.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The selection was rejected; nothing reached the cart.
    Rejected(SelectionError),
    /// A collaborator failed.
    Failed(String),
    AddedToCart { quantity: u32 },
    AddedToWishlist,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Rejected(reason) => reason.to_string(),
            Notice::Failed(message) => message.clone(),
            Notice::AddedToCart { quantity: 1 } => "Added to cart".to_string(),
            Notice::AddedToCart { quantity } => format!("Added {quantity} items to cart"),
            Notice::AddedToWishlist => "Added to wishlist".to_string(),
        }
    }

    /// Whether the shopper must act on this before continuing.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Notice::Rejected(_) | Notice::Failed(_))
    }
}

/// Text and tone of the stock badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockBadge {
    pub text: String,
    pub in_stock: bool,
}

/// A loaded product and the shopper's interaction with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    product: Product,
    selection: Selection,
    notice: Option<Notice>,
}

impl ProductPage {
    /// Page for a freshly loaded product, with default selection.
    pub fn new(product: Product) -> Self {
        let selection = Selection::for_product(&product);
        Self {
            product,
            selection,
            notice: None,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Options, matched variant and available stock for the current choice.
    pub fn resolution(&self) -> Resolution<'_> {
        self.selection.resolve(&self.product)
    }

    pub fn available_stock(&self) -> u32 {
        self.resolution().available_stock
    }

    pub fn select_size(&mut self, size: &str) {
        self.selection.select_size(size);
    }

    pub fn select_color(&mut self, color: &str) {
        self.selection.select_color(color);
    }

    pub fn select_image(&mut self, index: usize) -> bool {
        self.selection.select_image(index, self.product.images.len())
    }

    pub fn increment(&mut self) -> bool {
        let available = self.available_stock();
        self.selection.increment(available)
    }

    pub fn decrement(&mut self) -> bool {
        self.selection.decrement()
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        let available = self.available_stock();
        self.selection.set_quantity(quantity, available);
    }

    /// Whether the size picker entry for `size` can be chosen.
    pub fn size_enabled(&self, size: &str) -> bool {
        size_has_stock(&self.product, size)
    }

    /// Whether the color picker entry for `color` can be chosen.
    pub fn color_enabled(&self, color: &str) -> bool {
        color_has_stock(&self.product, color, self.selection.size.as_deref())
    }

    /// Validate and forward the selection to `cart`.
    ///
    /// On rejection the cart is not called and the reason becomes the
    /// page notice.
    pub fn add_to_cart<C: CartService + ?Sized>(
        &mut self,
        cart: &mut C,
    ) -> Result<CartRequest, ActionError> {
        let result = cart::add_to_cart(cart, &self.product, &self.selection);
        self.notice = Some(match &result {
            Ok(request) => Notice::AddedToCart {
                quantity: request.quantity(),
            },
            Err(ActionError::Rejected(reason)) => Notice::Rejected(reason.clone()),
            Err(ActionError::Collaborator(e)) => Notice::Failed(e.to_string()),
        });
        result
    }

    /// Forward the product to `wishlist`. No validation.
    pub fn add_to_wishlist<W: WishlistService + ?Sized>(
        &mut self,
        wishlist: &mut W,
    ) -> Result<(), ActionError> {
        let result = cart::add_to_wishlist(wishlist, &self.product);
        self.notice = Some(match &result {
            Ok(()) => Notice::AddedToWishlist,
            Err(e) => Notice::Failed(e.to_string()),
        });
        result
    }

    pub fn stock_badge(&self) -> StockBadge {
        let available = self.available_stock();
        if available == 0 {
            return StockBadge {
                text: "Out of Stock".to_string(),
                in_stock: false,
            };
        }

        let selected_any = self.selection.size.is_some() || self.selection.color.is_some();
        let text = if self.product.is_multi_variant() && selected_any {
            format!("In Stock ({available} available)")
        } else {
            format!(
                "In Stock ({})",
                self.product.listed_stock.unwrap_or(available)
            )
        };
        StockBadge {
            text,
            in_stock: true,
        }
    }

    /// Reminder shown while a multi-variant product is missing a choice.
    pub fn selection_warning(&self) -> Option<String> {
        if !self.product.is_multi_variant() {
            return None;
        }
        let options = self.resolution().options;
        let missing_size = !options.sizes.is_empty() && self.selection.size.is_none();
        let missing_color = !options.colors.is_empty() && self.selection.color.is_none();

        let missing = match (missing_size, missing_color) {
            (true, true) => "size and color",
            (true, false) => "size",
            (false, true) => "color",
            (false, false) => return None,
        };
        Some(format!("Please select {missing} before adding to cart"))
    }

    /// Apply `size`, `color`, `image` and `qty` query parameters.
    ///
    /// Unknown options and unparsable numbers are ignored. Quantity is
    /// applied last, clamped to the stock of the resulting selection.
    pub fn apply_query(&mut self, query: &QueryParams) {
        let options = self.resolution().options;

        if let Some(size) = query.get("size") {
            if options.sizes.iter().any(|s| s == size) {
                self.selection.select_size(size.as_str());
            }
        }
        if let Some(color) = query.get("color") {
            if options.colors.iter().any(|c| c == color) {
                self.selection.select_color(color.as_str());
            }
        }
        if let Some(index) = query.get("image").and_then(|v| v.parse::<usize>().ok()) {
            self.select_image(index);
        }
        if let Some(quantity) = query.get("qty").and_then(|v| v.parse::<u32>().ok()) {
            self.set_quantity(quantity);
        }
    }
}
