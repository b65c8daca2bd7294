//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in e-commerce operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u32, u32),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// A cart or wishlist collaborator refused the request.
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

/// Reasons an add-to-cart attempt is rejected before reaching the cart.
///
/// The `Display` text is the notice shown to the shopper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Please select a size")]
    MissingSize,

    #[error("Please select a color")]
    MissingColor,

    #[error("Selected variant is not available")]
    VariantUnavailable,

    #[error("Only {available} items available for this variant")]
    InsufficientVariantStock { available: u32 },

    #[error("Only {available} items available")]
    InsufficientStock { available: u32 },
}

impl SelectionError {
    /// Short machine-readable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            SelectionError::MissingSize => "missing_size",
            SelectionError::MissingColor => "missing_color",
            SelectionError::VariantUnavailable => "variant_unavailable",
            SelectionError::InsufficientVariantStock { .. } => "insufficient_variant_stock",
            SelectionError::InsufficientStock { .. } => "insufficient_stock",
        }
    }
}

/// Outcome of a failed page action.
#[derive(Error, Debug)]
pub enum ActionError {
    /// The selection failed validation; nothing was forwarded.
    #[error(transparent)]
    Rejected(#[from] SelectionError),

    /// The cart or wishlist collaborator failed.
    #[error(transparent)]
    Collaborator(#[from] CommerceError),
}
