//! Payment method port and an in-memory implementation.

use std::sync::{Arc, RwLock};

/// Trait for payment processing.
///
/// Implementations capture funds for an order total. There is no retry,
/// partial-capture, or refund contract; a declined charge is reported as
/// `false` and the caller decides what to do next.
pub trait PaymentMethod: std::fmt::Debug + Send + Sync {
    /// Attempts to capture `amount`.
    ///
    /// Returns `true` when funds were captured, `false` when the payment
    /// was declined.
    fn process_payment(&self, amount: f64) -> bool;
}

#[derive(Debug, Default)]
struct InMemoryPaymentState {
    charges: Vec<f64>,
    decline: bool,
}

/// In-memory payment method for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentMethod {
    state: Arc<RwLock<InMemoryPaymentState>>,
}

impl InMemoryPaymentMethod {
    /// Creates a new in-memory payment method that approves every charge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the method to decline subsequent charges.
    pub fn set_decline(&self, decline: bool) {
        self.state.write().unwrap().decline = decline;
    }

    /// Returns the number of captured charges.
    pub fn charge_count(&self) -> usize {
        self.state.read().unwrap().charges.len()
    }

    /// Returns the amounts captured so far, in charge order.
    pub fn charged_amounts(&self) -> Vec<f64> {
        self.state.read().unwrap().charges.clone()
    }
}

impl PaymentMethod for InMemoryPaymentMethod {
    fn process_payment(&self, amount: f64) -> bool {
        let mut state = self.state.write().unwrap();

        if state.decline {
            return false;
        }

        state.charges.push(amount);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_is_recorded() {
        let method = InMemoryPaymentMethod::new();

        assert!(method.process_payment(49.99));
        assert_eq!(method.charge_count(), 1);
        assert_eq!(method.charged_amounts(), vec![49.99]);
    }

    #[test]
    fn test_decline_captures_nothing() {
        let method = InMemoryPaymentMethod::new();
        method.set_decline(true);

        assert!(!method.process_payment(10.00));
        assert_eq!(method.charge_count(), 0);
    }

    #[test]
    fn test_decline_can_be_lifted() {
        let method = InMemoryPaymentMethod::new();
        method.set_decline(true);
        assert!(!method.process_payment(5.00));

        method.set_decline(false);
        assert!(method.process_payment(5.00));
        assert_eq!(method.charge_count(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let method = InMemoryPaymentMethod::new();
        let handle = method.clone();

        assert!(method.process_payment(1.00));
        assert_eq!(handle.charge_count(), 1);
    }
}
