//! Product catalog port.

/// A purchasable product, as seen by the checkout core.
///
/// The catalog itself lives outside this crate; carts and orders only
/// need a unit price. Cart deduplication compares products with
/// `PartialEq` on the implementing type, so two values that compare
/// equal are treated as the same catalog entry.
pub trait Product {
    /// Unit price in currency units. Must be non-negative.
    fn price(&self) -> f64;
}
