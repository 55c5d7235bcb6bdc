//! Checkout domain for the candy store.
//!
//! This crate provides the cart-to-order pipeline:
//! - [`ShoppingCart`] accumulates items and computes discounted totals
//! - [`Order`] records a confirmed purchase and drives its status state machine
//! - [`CheckoutSession`] ties a user's cart to their order history
//! - Ports for the product catalog ([`Product`]), payment processing
//!   ([`PaymentMethod`]), and order ID issuance ([`OrderSequence`])
//!
//! Persistence, catalog management, and real payment gateways live outside
//! this crate and are consumed through the port traits.

pub mod cart;
pub mod error;
pub mod order;
pub mod payment;
pub mod product;
pub mod sequence;
pub mod session;

pub use cart::{CartItem, MAX_DISCOUNT_RATE, ShoppingCart};
pub use common::{OrderId, UserId};
pub use error::CheckoutError;
pub use order::{Order, OrderItem, OrderStatus};
pub use payment::{InMemoryPaymentMethod, PaymentMethod};
pub use product::Product;
pub use sequence::{AtomicOrderSequence, FIRST_ORDER_ID, OrderSequence};
pub use session::CheckoutSession;
