//! Shared types for the candy checkout system.

mod types;

pub use types::{OrderId, UserId};
