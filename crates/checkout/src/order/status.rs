//! Order status state machine.

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// Status transitions:
/// ```text
/// Pending ──┬──► Paid ──────────► Shipped
///           │
///           └──► PaymentFailed ──┬──► Paid (retry)
///           │                    │
///           └────────────────────┴──► Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order has been created, payment not yet attempted.
    #[default]
    Pending,

    /// Payment captured, awaiting shipment.
    Paid,

    /// The payment method declined the charge; retry or cancel.
    PaymentFailed,

    /// Order has left the warehouse (terminal state).
    Shipped,

    /// Order was cancelled before payment succeeded (terminal state).
    Cancelled,
}

impl OrderStatus {
    /// Returns true if payment can be attempted in this status.
    pub fn can_pay(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::PaymentFailed)
    }

    /// Returns true if the order can be shipped in this status.
    pub fn can_ship(&self) -> bool {
        matches!(self, OrderStatus::Paid)
    }

    /// Returns true if the order can be cancelled in this status.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::PaymentFailed)
    }

    /// Returns true if this is a terminal status (no further transitions
    /// possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Shipped | OrderStatus::Cancelled)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::PaymentFailed => "Payment Failed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
