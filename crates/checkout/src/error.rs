//! Checkout error types.

use thiserror::Error;

/// Errors that can occur during cart and checkout operations.
///
/// Validation failures abort the mutating call with no partial state
/// change. A declined payment is not an error; it is reported through
/// [`crate::OrderStatus::PaymentFailed`].
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Discount rate is outside the accepted range.
    #[error("Invalid discount rate: {rate} (must be between 0.0 and 0.9)")]
    InvalidDiscountRate { rate: f64 },

    /// Invalid quantity.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Merging a quantity into an existing line would overflow.
    #[error("Quantity overflow: {current} + {added} exceeds the largest supported line quantity")]
    QuantityOverflow { current: u32, added: u32 },

    /// Checkout was attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,
}
