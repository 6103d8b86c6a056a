//! Data stored in the visitor session.
//!
//! The cart itself is stored as a JSON list of line items under
//! [`session_keys::CART`] and replaced wholesale after every transition.

/// Session keys.
pub mod session_keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";
}
