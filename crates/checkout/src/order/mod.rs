//! Order record and lifecycle.

mod status;

pub use status::OrderStatus;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::{OrderId, UserId};

use crate::cart::CartItem;
use crate::payment::PaymentMethod;
use crate::product::Product;

/// Immutable snapshot of one order line.
///
/// Captured at order-creation time; later price changes to the product
/// do not retroactively affect past orders.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem<P> {
    /// The product as it was at order time.
    pub product: P,

    /// Quantity ordered.
    pub quantity: u32,

    /// Price × quantity at the moment the order was created.
    pub subtotal: f64,
}

impl<P: Product + Clone> OrderItem<P> {
    /// Captures a cart line, freezing its subtotal.
    pub(crate) fn snapshot(line: &CartItem<P>) -> Self {
        Self {
            subtotal: line.subtotal(),
            quantity: line.quantity,
            product: line.product.clone(),
        }
    }
}

/// A confirmed purchase.
///
/// Identity fields (ID, user, items, total, payment method, creation
/// time) are fixed at creation; `status` is the only mutable field and
/// is driven by the state machine in [`OrderStatus`].
#[derive(Debug, Clone)]
pub struct Order<P> {
    id: OrderId,
    user_id: UserId,
    items: Vec<OrderItem<P>>,
    total_amount: f64,
    payment_method: Arc<dyn PaymentMethod>,
    created_at: DateTime<Utc>,
    status: OrderStatus,
}

impl<P> Order<P> {
    pub(crate) fn new(
        id: OrderId,
        user_id: UserId,
        items: Vec<OrderItem<P>>,
        total_amount: f64,
        payment_method: Arc<dyn PaymentMethod>,
    ) -> Self {
        tracing::info!(order_id = %id, user_id = %user_id, total = total_amount, "order created");

        Self {
            id,
            user_id,
            items,
            total_amount,
            payment_method,
            created_at: Utc::now(),
            status: OrderStatus::Pending,
        }
    }

    /// Returns the order ID.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the user who placed the order.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the snapshotted order lines.
    pub fn items(&self) -> &[OrderItem<P>] {
        &self.items
    }

    /// Returns the total charged for this order.
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    /// Returns when the order was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Runs the payment method for the full order total.
    ///
    /// Only permitted from `Pending` or `Payment Failed`; once an order
    /// is paid, shipped, or cancelled the payment method is never
    /// invoked again, so a captured charge cannot be repeated. A decline
    /// moves the order to `Payment Failed`, from which payment may be
    /// retried or the order cancelled.
    pub fn confirm_payment(&mut self) -> bool {
        if !self.status.can_pay() {
            tracing::warn!(
                order_id = %self.id,
                status = %self.status,
                "payment attempt rejected: order is not payable"
            );
            return false;
        }

        if self.payment_method.process_payment(self.total_amount) {
            self.status = OrderStatus::Paid;
            tracing::info!(order_id = %self.id, total = self.total_amount, "payment confirmed");
            true
        } else {
            self.status = OrderStatus::PaymentFailed;
            tracing::warn!(order_id = %self.id, total = self.total_amount, "payment declined");
            false
        }
    }

    /// Ships the order.
    ///
    /// Requires a paid order; shipping an unpaid, failed, or cancelled
    /// order returns false with no status change.
    pub fn ship(&mut self) -> bool {
        if !self.status.can_ship() {
            tracing::warn!(
                order_id = %self.id,
                status = %self.status,
                "ship rejected: order is not paid"
            );
            return false;
        }

        self.status = OrderStatus::Shipped;
        tracing::info!(order_id = %self.id, "order shipped");
        true
    }

    /// Cancels the order.
    ///
    /// Succeeds only from `Pending` or `Payment Failed`; otherwise
    /// returns false and leaves the status unchanged.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_cancel() {
            tracing::warn!(
                order_id = %self.id,
                status = %self.status,
                "cancel rejected"
            );
            return false;
        }

        self.status = OrderStatus::Cancelled;
        tracing::info!(order_id = %self.id, "order cancelled");
        true
    }
}
