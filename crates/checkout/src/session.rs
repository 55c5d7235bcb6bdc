//! Checkout session: a user's cart plus the orders placed through it.

use std::sync::Arc;

use common::{OrderId, UserId};

use crate::cart::ShoppingCart;
use crate::error::CheckoutError;
use crate::order::Order;
use crate::payment::PaymentMethod;
use crate::product::Product;
use crate::sequence::OrderSequence;

/// A user's shopping session.
///
/// Owns the user's cart and every order placed through it.
/// [`checkout`](CheckoutSession::checkout) converts the current cart into
/// an order and clears the cart; [`order_mut`](CheckoutSession::order_mut)
/// gives access for driving the order lifecycle afterwards.
#[derive(Debug)]
pub struct CheckoutSession<P> {
    cart: ShoppingCart<P>,
    orders: Vec<Order<P>>,
}

impl<P: Product + PartialEq + Clone> CheckoutSession<P> {
    /// Starts a session with an empty cart and no order history.
    pub fn new(user_id: UserId) -> Self {
        Self {
            cart: ShoppingCart::new(user_id),
            orders: Vec::new(),
        }
    }

    /// Returns the session's user.
    pub fn user_id(&self) -> UserId {
        self.cart.user_id()
    }

    /// Returns the cart.
    pub fn cart(&self) -> &ShoppingCart<P> {
        &self.cart
    }

    /// Returns the cart for mutation (adding items, setting a discount).
    pub fn cart_mut(&mut self) -> &mut ShoppingCart<P> {
        &mut self.cart
    }

    /// Returns the orders placed through this session, oldest first.
    pub fn orders(&self) -> &[Order<P>] {
        &self.orders
    }

    /// Looks up an order by ID.
    pub fn order(&self, id: OrderId) -> Option<&Order<P>> {
        self.orders.iter().find(|order| order.id() == id)
    }

    /// Looks up an order by ID for lifecycle calls.
    pub fn order_mut(&mut self, id: OrderId) -> Option<&mut Order<P>> {
        self.orders.iter_mut().find(|order| order.id() == id)
    }

    /// Converts the cart into an order and clears the cart.
    ///
    /// Fails on an empty cart with no state change. The new order starts
    /// in `Pending` and is kept in the session's history; the cart's
    /// discount rate survives for the next round of shopping.
    pub fn checkout(
        &mut self,
        payment_method: Arc<dyn PaymentMethod>,
        sequence: &dyn OrderSequence,
    ) -> Result<OrderId, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = self.cart.create_order(payment_method, sequence);
        let id = order.id();
        self.orders.push(order);
        self.cart.clear();

        tracing::info!(user_id = %self.user_id(), order_id = %id, "checkout complete");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderStatus;
    use crate::payment::InMemoryPaymentMethod;
    use crate::sequence::AtomicOrderSequence;

    #[derive(Debug, Clone, PartialEq)]
    struct Candy {
        sku: &'static str,
        price: f64,
    }

    impl Product for Candy {
        fn price(&self) -> f64 {
            self.price
        }
    }

    fn licorice() -> Candy {
        Candy {
            sku: "LICO-001",
            price: 1.75,
        }
    }

    #[test]
    fn test_checkout_empty_cart_fails() {
        let mut session: CheckoutSession<Candy> = CheckoutSession::new(UserId::new());
        let sequence = AtomicOrderSequence::new();

        let result = session.checkout(Arc::new(InMemoryPaymentMethod::new()), &sequence);

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
        assert!(session.orders().is_empty());
    }

    #[test]
    fn test_checkout_creates_order_and_clears_cart() {
        let mut session = CheckoutSession::new(UserId::new());
        let sequence = AtomicOrderSequence::new();
        session.cart_mut().add_item(licorice(), 4).unwrap();
        session.cart_mut().set_discount(0.2).unwrap();

        let id = session
            .checkout(Arc::new(InMemoryPaymentMethod::new()), &sequence)
            .unwrap();

        assert!(session.cart().is_empty());
        // Discount is a property of the cart, not of its contents.
        assert_eq!(session.cart().discount_rate(), 0.2);

        let order = session.order(id).unwrap();
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.items()[0].product.sku, "LICO-001");
        // 4 × 1.75 = 7.00, minus 20% = 5.60
        assert_eq!(order.total_amount(), 5.6);
    }

    #[test]
    fn test_order_lifecycle_through_session() {
        let mut session = CheckoutSession::new(UserId::new());
        let sequence = AtomicOrderSequence::new();
        session.cart_mut().add_item(licorice(), 2).unwrap();

        let id = session
            .checkout(Arc::new(InMemoryPaymentMethod::new()), &sequence)
            .unwrap();

        let order = session.order_mut(id).unwrap();
        assert!(order.confirm_payment());
        assert!(order.ship());
        assert_eq!(session.order(id).unwrap().status(), OrderStatus::Shipped);
    }

    #[test]
    fn test_repeated_checkouts_accumulate_history() {
        let mut session = CheckoutSession::new(UserId::new());
        let sequence = AtomicOrderSequence::new();
        let payment_method: Arc<dyn PaymentMethod> = Arc::new(InMemoryPaymentMethod::new());

        session.cart_mut().add_item(licorice(), 1).unwrap();
        let first = session
            .checkout(Arc::clone(&payment_method), &sequence)
            .unwrap();

        session.cart_mut().add_item(licorice(), 2).unwrap();
        let second = session
            .checkout(Arc::clone(&payment_method), &sequence)
            .unwrap();

        assert_eq!(session.orders().len(), 2);
        assert!(first < second);
    }

    #[test]
    fn test_unknown_order_id_is_none() {
        let session: CheckoutSession<Candy> = CheckoutSession::new(UserId::new());
        assert!(session.order(OrderId::new(9999)).is_none());
    }
}
