//! Shopping cart: the mutable basket for a single user.

use std::sync::Arc;

use common::UserId;

use crate::error::CheckoutError;
use crate::order::{Order, OrderItem};
use crate::payment::PaymentMethod;
use crate::product::Product;
use crate::sequence::OrderSequence;

/// Largest accepted discount rate.
pub const MAX_DISCOUNT_RATE: f64 = 0.9;

/// One distinct product line in a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem<P> {
    /// The product being purchased.
    pub product: P,

    /// Number of units.
    pub quantity: u32,
}

impl<P: Product> CartItem<P> {
    /// Returns the live subtotal for this line (price × quantity).
    ///
    /// Recomputed on every call, so a price change on the product is
    /// reflected immediately.
    pub fn subtotal(&self) -> f64 {
        self.product.price() * f64::from(self.quantity)
    }
}

/// Mutable basket for a single user; the source of truth until checkout.
///
/// Holds at most one [`CartItem`] per distinct product: adding a product
/// that is already present merges quantities instead of duplicating the
/// line. The discount rate applies to the aggregate total, not per line,
/// so per-line rounding artifacts cannot accumulate.
#[derive(Debug, Clone)]
pub struct ShoppingCart<P> {
    user_id: UserId,
    items: Vec<CartItem<P>>,
    discount_rate: f64,
}

impl<P: Product + PartialEq> ShoppingCart<P> {
    /// Creates an empty cart for a user with no discount.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            discount_rate: 0.0,
        }
    }

    /// Returns the owning user.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns a read-only view of the cart lines.
    pub fn items(&self) -> &[CartItem<P>] {
        &self.items
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total unit count across all lines.
    ///
    /// Widened to `u64` so the sum cannot overflow even when individual
    /// lines sit at the `u32` maximum.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Returns the current discount rate.
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Adds `quantity` units of a product.
    ///
    /// If an equal product is already in the cart, its quantity is
    /// increased; otherwise a new line is appended. A zero quantity, or
    /// a merge that would overflow the line's quantity, is rejected and
    /// leaves the cart untouched.
    pub fn add_item(&mut self, product: P, quantity: u32) -> Result<(), CheckoutError> {
        if quantity == 0 {
            return Err(CheckoutError::InvalidQuantity { quantity });
        }

        if let Some(existing) = self.items.iter_mut().find(|item| item.product == product) {
            existing.quantity = existing.quantity.checked_add(quantity).ok_or(
                CheckoutError::QuantityOverflow {
                    current: existing.quantity,
                    added: quantity,
                },
            )?;
            tracing::debug!(
                user_id = %self.user_id,
                quantity = existing.quantity,
                "merged units into existing cart line"
            );
        } else {
            self.items.push(CartItem { product, quantity });
            tracing::debug!(
                user_id = %self.user_id,
                lines = self.items.len(),
                "added cart line"
            );
        }

        Ok(())
    }

    /// Sets the discount rate, replacing any previous rate.
    ///
    /// Rates outside `[0.0, 0.9]` are rejected with no state change.
    pub fn set_discount(&mut self, rate: f64) -> Result<(), CheckoutError> {
        if !(0.0..=MAX_DISCOUNT_RATE).contains(&rate) {
            return Err(CheckoutError::InvalidDiscountRate { rate });
        }

        self.discount_rate = rate;
        Ok(())
    }

    /// Returns the discounted total without rounding.
    pub fn calculate_total_unrounded(&self) -> f64 {
        let subtotal: f64 = self.items.iter().map(CartItem::subtotal).sum();
        subtotal * (1.0 - self.discount_rate)
    }

    /// Returns the discounted total, rounded to whole cents with
    /// half-to-even rounding.
    pub fn calculate_total(&self) -> f64 {
        round_to_cents(self.calculate_total_unrounded())
    }

    /// Removes all lines. The discount rate survives a clear and applies
    /// to whatever is added next.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!(user_id = %self.user_id, "cleared cart");
    }
}

impl<P: Product + PartialEq + Clone> ShoppingCart<P> {
    /// Snapshots the cart into a new [`Order`].
    ///
    /// Each line is captured as an [`OrderItem`] with its subtotal at
    /// this moment; the order total is the rounded discounted total. The
    /// cart is left untouched — callers that want the usual post-checkout
    /// clear should go through [`crate::CheckoutSession::checkout`].
    pub fn create_order(
        &self,
        payment_method: Arc<dyn PaymentMethod>,
        sequence: &dyn OrderSequence,
    ) -> Order<P> {
        let items = self.items.iter().map(OrderItem::snapshot).collect();

        Order::new(
            sequence.next_id(),
            self.user_id,
            items,
            self.calculate_total(),
            payment_method,
        )
    }
}

/// Rounds a currency amount to whole cents using half-to-even
/// (banker's) rounding.
pub(crate) fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round_ties_even() / 100.0
}
