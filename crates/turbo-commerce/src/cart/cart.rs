//! In-memory cart and line item types.

use crate::cart::{CartRequest, CartService};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// A shopping cart that lives for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add a validated request to the cart.
    ///
    /// Lines are merged by product, size and color. Returns an error if:
    /// - Quantity is zero
    /// - The merged quantity would exceed MAX_QUANTITY_PER_ITEM
    /// - Arithmetic overflow would occur
    pub fn add_request(&mut self, request: &CartRequest) -> Result<(), CommerceError> {
        let quantity = request.quantity();
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let product = request.product();
        let (size, color) = (request.size(), request.color());

        if let Some(existing) = self.items.iter_mut().find(|i| i.matches(&product.id, size, color)) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            existing.update_total()?;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let mut item = LineItem::new(product.id.clone(), &product.title, quantity, product.price)?;
        item.size = size.map(str::to_string);
        item.color = color.map(str::to_string);
        self.items.push(item);
        Ok(())
    }

    /// The line a request was merged into.
    pub fn line_for(&self, request: &CartRequest) -> Option<&LineItem> {
        self.items
            .iter()
            .find(|i| i.matches(&request.product().id, request.size(), request.color()))
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartService for Cart {
    fn add_to_cart(&mut self, request: CartRequest) -> Result<(), CommerceError> {
        self.add_request(&request)
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product ID.
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub product_name: String,
    pub size: Option<String>,
    pub color: Option<String>,
    /// Quantity.
    pub quantity: u32,
    /// Unit price.
    pub unit_price: Money,
    /// Total price (unit_price * quantity).
    pub total_price: Money,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Result<Self, CommerceError> {
        let total_price = unit_price
            .checked_mul(i64::from(quantity))
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            product_id,
            product_name: product_name.into(),
            size: None,
            color: None,
            quantity,
            unit_price,
            total_price,
        })
    }

    /// Update the total price based on quantity.
    pub fn update_total(&mut self) -> Result<(), CommerceError> {
        self.total_price = self
            .unit_price
            .checked_mul(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)?;
        Ok(())
    }

    /// Variant label such as "M / Blue", if any option was chosen.
    pub fn variant_name(&self) -> Option<String> {
        match (self.size.as_deref(), self.color.as_deref()) {
            (Some(size), Some(color)) => Some(format!("{size} / {color}")),
            (Some(one), None) | (None, Some(one)) => Some(one.to_string()),
            (None, None) => None,
        }
    }

    fn matches(&self, product_id: &ProductId, size: Option<&str>, color: Option<&str>) -> bool {
        &self.product_id == product_id
            && self.size.as_deref() == size
            && self.color.as_deref() == color
    }
}
