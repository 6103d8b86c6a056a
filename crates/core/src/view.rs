//! Presentation logic for cart front ends.
//!
//! Rendering lives with each front end; this module holds what every one of
//! them shares: derived totals, the mapping from row controls to cart
//! actions, and the behaviour of the Continue Shopping and Checkout controls.

use serde::Serialize;

use crate::types::{Cart, CartAction, LineItem, format_amount};

/// Notice shown when the shopper asks to check out.
pub const CHECKOUT_NOTICE: &str = "Functionality to be added for future reference";

/// Per-row quantity controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartControl {
    /// The `+` button.
    Increment,
    /// The `-` button. Decrementing past 1 removes the item.
    Decrement,
    /// The Delete button.
    Delete,
}

impl CartControl {
    /// The action this control dispatches for an item.
    #[must_use]
    pub fn action_for(self, item: &LineItem) -> CartAction {
        match self {
            Self::Increment => {
                CartAction::set_quantity(item.name.clone(), i64::from(item.qty) + 1)
            }
            Self::Decrement if item.qty > 1 => {
                CartAction::set_quantity(item.name.clone(), i64::from(item.qty) - 1)
            }
            Self::Decrement | Self::Delete => CartAction::remove(item.name.clone()),
        }
    }
}

/// Result of pressing Checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Checkout is not available yet; the cart is left as is.
    NotImplemented,
}

impl CheckoutOutcome {
    /// Message to show the shopper.
    #[must_use]
    pub const fn notice(self) -> &'static str {
        match self {
            Self::NotImplemented => CHECKOUT_NOTICE,
        }
    }
}

/// Handle the Checkout control.
#[must_use]
pub const fn checkout() -> CheckoutOutcome {
    CheckoutOutcome::NotImplemented
}

/// Handle the Continue Shopping control.
///
/// Invokes the host's callback if one was supplied; otherwise does nothing.
pub fn continue_shopping<F, R>(callback: Option<F>) -> Option<R>
where
    F: FnOnce() -> R,
{
    callback.map(|f| f())
}

/// Formatted totals for one line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSummary {
    pub name: String,
    pub qty: u32,
    /// Unit price with two decimals.
    pub unit_price: String,
    /// Unit price times quantity with two decimals.
    pub total: String,
}

/// Formatted totals for a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<LineSummary>,
    /// Sum of line totals with two decimals.
    pub total_amount: String,
    pub total_quantity: u64,
}

impl From<&LineItem> for LineSummary {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            qty: item.qty,
            unit_price: format_amount(item.price),
            total: format_amount(item.line_total()),
        }
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.items().iter().map(LineSummary::from).collect(),
            total_amount: format_amount(cart.total_amount()),
            total_quantity: cart.total_quantity(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn cart_with_qty(qty: i64) -> Cart {
        Cart::new()
            .reduce(CartAction::Add(Product::new("Aloe", "$15")))
            .reduce(CartAction::set_quantity("Aloe", qty))
    }

    fn press(cart: Cart, control: CartControl) -> Cart {
        let action = control.action_for(cart.get("Aloe").unwrap());
        cart.reduce(action)
    }

    #[test]
    fn test_increment() {
        let cart = press(cart_with_qty(1), CartControl::Increment);
        assert_eq!(cart.get("Aloe").unwrap().qty, 2);
    }

    #[test]
    fn test_decrement_from_two() {
        let cart = press(cart_with_qty(2), CartControl::Decrement);
        assert_eq!(cart.get("Aloe").unwrap().qty, 1);
    }

    #[test]
    fn test_decrement_from_one_removes() {
        let item = cart_with_qty(1).get("Aloe").cloned().unwrap();
        assert_eq!(
            CartControl::Decrement.action_for(&item),
            CartAction::remove("Aloe")
        );

        let cart = press(cart_with_qty(1), CartControl::Decrement);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_delete() {
        let cart = press(cart_with_qty(7), CartControl::Delete);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_is_stub() {
        let outcome = checkout();
        assert_eq!(outcome, CheckoutOutcome::NotImplemented);
        assert_eq!(outcome.notice(), CHECKOUT_NOTICE);
    }

    #[test]
    fn test_continue_shopping_invokes_callback() {
        let mut called = false;
        let result = continue_shopping(Some(|| {
            called = true;
            "/products"
        }));
        assert_eq!(result, Some("/products"));
        assert!(called);
    }

    #[test]
    fn test_continue_shopping_without_callback() {
        let result = continue_shopping::<fn() -> (), ()>(None);
        assert!(result.is_none());
    }

    #[test]
    fn test_summary_scenario() {
        let cart = Cart::new().reduce(CartAction::Add(Product::new("Aloe", "$15")));
        assert_eq!(CartSummary::from(&cart).total_amount, "15.00");

        let cart = cart.reduce(CartAction::Add(Product::new("Aloe", "$15")));
        assert_eq!(CartSummary::from(&cart).total_amount, "30.00");

        let cart = cart.reduce(CartAction::set_quantity("Aloe", 5));
        let summary = CartSummary::from(&cart);
        assert_eq!(summary.total_amount, "75.00");
        assert_eq!(summary.lines[0].total, "75.00");
        assert_eq!(summary.lines[0].unit_price, "15.00");
        assert_eq!(summary.total_quantity, 5);

        let cart = cart.reduce(CartAction::remove("Aloe"));
        let summary = CartSummary::from(&cart);
        assert!(summary.lines.is_empty());
        assert_eq!(summary.total_amount, "0.00");
    }
}
