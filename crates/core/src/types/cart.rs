//! The cart, its actions and the state container that applies them.
//!
//! A [`Cart`] is an ordered list of [`LineItem`]s keyed by name. It changes
//! only through [`Cart::reduce`], a pure transition from the current cart and
//! a [`CartAction`] to the next cart. [`CartStore`] owns one cart and replaces
//! it wholesale on every dispatch.
//!
//! # Example
//!
//! ```
//! use paradise_nursery_core::{CartAction, CartStore, Product};
//!
//! let mut store = CartStore::new();
//! store.dispatch(CartAction::Add(Product::new("Aloe", "$15")));
//! store.dispatch(CartAction::Add(Product::new("Aloe", "$15")));
//! assert_eq!(store.items()[0].qty, 2);
//!
//! store.dispatch(CartAction::remove("Aloe"));
//! assert!(store.cart().is_empty());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::line_item::{LineItem, RawLineItem};
use super::product::Product;

/// An operation dispatched against a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartAction {
    /// Add one unit of a product, creating the line item if needed.
    Add(Product),
    /// Delete the line item with this name.
    Remove { name: String },
    /// Set the quantity of the named line item; zero or less removes it.
    SetQuantity { name: String, amount: i64 },
}

impl CartAction {
    /// Shorthand for [`CartAction::Remove`].
    #[must_use]
    pub fn remove(name: impl Into<String>) -> Self {
        Self::Remove { name: name.into() }
    }

    /// Shorthand for [`CartAction::SetQuantity`].
    #[must_use]
    pub fn set_quantity(name: impl Into<String>, amount: i64) -> Self {
        Self::SetQuantity {
            name: name.into(),
            amount,
        }
    }

    /// Name of the line item the action targets.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Add(product) => &product.name,
            Self::Remove { name } | Self::SetQuantity { name, .. } => name,
        }
    }
}

/// Ordered list of line items with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from loosely shaped external items.
    ///
    /// Each item is normalized; items whose quantity resolves below 1 are
    /// dropped and repeated names are merged into the first occurrence with
    /// their quantities summed.
    #[must_use]
    pub fn from_raw(raw: impl IntoIterator<Item = RawLineItem>) -> Self {
        let mut items: Vec<LineItem> = Vec::new();
        for item in raw.into_iter().filter_map(RawLineItem::normalize) {
            match items.iter_mut().find(|i| i.name == item.name) {
                Some(existing) => existing.qty = existing.qty.saturating_add(item.qty),
                None => items.push(item),
            }
        }
        Self { items }
    }

    /// Apply an action and return the resulting cart.
    ///
    /// Every action is total: unknown names are no-ops and malformed price
    /// tags become a zero price.
    #[must_use]
    pub fn reduce(self, action: CartAction) -> Self {
        match action {
            CartAction::Add(product) => self.add(product),
            CartAction::Remove { name } => self.remove(&name),
            CartAction::SetQuantity { name, amount } => self.set_quantity(&name, amount),
        }
    }

    fn add(mut self, product: Product) -> Self {
        match self.position(&product.name) {
            Some(idx) => {
                if let Some(item) = self.items.get_mut(idx) {
                    item.qty = item.qty.saturating_add(1);
                }
            }
            None => self.items.push(LineItem::from_product(product)),
        }
        self
    }

    fn remove(mut self, name: &str) -> Self {
        self.items.retain(|item| item.name != name);
        self
    }

    fn set_quantity(mut self, name: &str, amount: i64) -> Self {
        let Some(idx) = self.position(name) else {
            return self;
        };

        if amount <= 0 {
            self.items.remove(idx);
        } else if let Some(item) = self.items.get_mut(idx) {
            item.qty = u32::try_from(amount).unwrap_or(u32::MAX);
        }
        self
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Whether a line item with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.qty)).sum()
    }

    /// Sum of unit price times quantity over all items.
    ///
    /// Saturates at the bounds of [`Decimal`] instead of overflowing.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<RawLineItem>::deserialize(deserializer)?;
        Ok(Self::from_raw(raw))
    }
}

/// Owned container for one cart.
///
/// The cart is only ever replaced as a whole, so readers never observe a
/// half-applied transition.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Cart,
}

impl CartStore {
    /// Create a store holding an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { cart: Cart::new() }
    }

    /// Create a store holding an existing cart.
    #[must_use]
    pub const fn from_cart(cart: Cart) -> Self {
        Self { cart }
    }

    /// Apply an action and return the new cart.
    pub fn dispatch(&mut self, action: CartAction) -> &Cart {
        let current = std::mem::take(&mut self.cart);
        self.cart = current.reduce(action);
        &self.cart
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Line items of the current cart.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Consume the store and return its cart.
    #[must_use]
    pub fn into_cart(self) -> Cart {
        self.cart
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn aloe() -> Product {
        Product::new("Aloe", "$15")
    }

    fn cart_with(products: &[(&str, &str)]) -> Cart {
        products.iter().fold(Cart::new(), |cart, (name, cost)| {
            cart.reduce(CartAction::Add(Product::new(*name, *cost)))
        })
    }

    // =========================================================================
    // Add
    // =========================================================================

    #[test]
    fn test_add_distinct_products() {
        let cart = cart_with(&[("Aloe", "$15"), ("Mint", "$12"), ("Lavender", "$20")]);

        assert_eq!(cart.len(), 3);
        assert!(cart.items().iter().all(|item| item.qty == 1));
        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Aloe", "Mint", "Lavender"]);
    }

    #[test]
    fn test_add_same_name_increments() {
        let cart = cart_with(&[("Aloe", "$15"), ("Aloe", "$15")]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].qty, 2);
        assert_eq!(cart.items()[0].price, Decimal::from(15));
    }

    #[test]
    fn test_add_repeat_keeps_first_price() {
        let cart = Cart::new()
            .reduce(CartAction::Add(aloe()))
            .reduce(CartAction::Add(
                Product::new("Aloe", "$99").with_description("changed"),
            ));

        let item = cart.get("Aloe").unwrap();
        assert_eq!(item.qty, 2);
        assert_eq!(item.cost, "$15");
        assert_eq!(item.price, Decimal::from(15));
        assert_eq!(item.description, "");
    }

    #[test]
    fn test_add_malformed_cost_is_zero_price() {
        let cart = Cart::new().reduce(CartAction::Add(Product::new("Fern", "ask")));
        assert_eq!(cart.get("Fern").unwrap().price, Decimal::ZERO);
    }

    // =========================================================================
    // Remove
    // =========================================================================

    #[test]
    fn test_remove_existing() {
        let cart = cart_with(&[("Aloe", "$15"), ("Mint", "$12")]).reduce(CartAction::remove("Aloe"));

        assert_eq!(cart.len(), 1);
        assert!(!cart.contains("Aloe"));
        assert!(cart.contains("Mint"));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let before = cart_with(&[("Aloe", "$15")]);
        let after = before.clone().reduce(CartAction::remove("Cactus"));
        assert_eq!(before, after);
    }

    // =========================================================================
    // SetQuantity
    // =========================================================================

    #[test]
    fn test_set_quantity_absolute() {
        let cart = cart_with(&[("Aloe", "$15")]).reduce(CartAction::set_quantity("Aloe", 5));
        assert_eq!(cart.get("Aloe").unwrap().qty, 5);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let cart = cart_with(&[("Aloe", "$15")]).reduce(CartAction::set_quantity("Aloe", 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let cart = cart_with(&[("Aloe", "$15")]).reduce(CartAction::set_quantity("Aloe", -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_missing_is_noop() {
        let before = cart_with(&[("Aloe", "$15")]);
        let after = before.clone().reduce(CartAction::set_quantity("Mint", 3));
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_quantity_saturates() {
        let cart =
            cart_with(&[("Aloe", "$15")]).reduce(CartAction::set_quantity("Aloe", i64::MAX));
        assert_eq!(cart.get("Aloe").unwrap().qty, u32::MAX);
    }

    #[test]
    fn test_set_quantity_preserves_order() {
        let cart = cart_with(&[("Aloe", "$15"), ("Mint", "$12"), ("Sage", "$9")])
            .reduce(CartAction::set_quantity("Mint", 0));
        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Aloe", "Sage"]);
    }

    // =========================================================================
    // Totals
    // =========================================================================

    #[test]
    fn test_totals() {
        let cart = cart_with(&[("Aloe", "$15"), ("Mint", "$12.50"), ("Mint", "$12.50")]);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_amount(), Decimal::from(40));
    }

    #[test]
    fn test_empty_totals() {
        let cart = Cart::new();
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_amount(), Decimal::ZERO);
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    #[test]
    fn test_cart_serde_round_trip() {
        let cart = cart_with(&[("Aloe", "$15"), ("Mint", "$12.50"), ("Mint", "$12.50")]);
        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(cart, restored);
    }

    #[test]
    fn test_cart_deserialize_merges_and_drops() {
        let json = r#"[
            {"name": "Aloe", "cost": "$15", "qty": 2},
            {"name": "Mint", "cost": "$12", "qty": 0},
            {"name": "Aloe", "cost": "$99", "quantity": 3}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        assert_eq!(cart.len(), 1);
        let aloe = cart.get("Aloe").unwrap();
        assert_eq!(aloe.qty, 5);
        assert_eq!(aloe.cost, "$15");
    }

    #[test]
    fn test_action_tagged_json() {
        let action: CartAction =
            serde_json::from_str(r#"{"type": "set_quantity", "name": "Aloe", "amount": 3}"#)
                .unwrap();
        assert_eq!(action, CartAction::set_quantity("Aloe", 3));

        let action: CartAction =
            serde_json::from_str(r#"{"type": "add", "name": "Aloe", "cost": "$15"}"#).unwrap();
        assert_eq!(action, CartAction::Add(aloe()));
        assert_eq!(action.name(), "Aloe");
    }

    // =========================================================================
    // Store
    // =========================================================================

    #[test]
    fn test_store_dispatch_scenario() {
        let mut store = CartStore::new();

        store.dispatch(CartAction::Add(aloe()));
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].qty, 1);
        assert_eq!(store.cart().total_amount(), Decimal::from(15));

        store.dispatch(CartAction::Add(aloe()));
        assert_eq!(store.items()[0].qty, 2);
        assert_eq!(store.cart().total_amount(), Decimal::from(30));

        store.dispatch(CartAction::set_quantity("Aloe", 5));
        assert_eq!(store.items()[0].qty, 5);
        assert_eq!(store.cart().total_amount(), Decimal::from(75));

        let cart = store.dispatch(CartAction::remove("Aloe"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_store_from_cart() {
        let store = CartStore::from_cart(cart_with(&[("Aloe", "$15")]));
        assert_eq!(store.into_cart().len(), 1);
    }

    #[test]
    fn test_huge_totals_saturate() {
        let big = "$70000000000000000000000000000";
        let cart = cart_with(&[("Big", big)]).reduce(CartAction::set_quantity("Big", 2));

        assert_eq!(cart.get("Big").unwrap().line_total(), Decimal::MAX);
        assert_eq!(cart.total_amount(), Decimal::MAX);

        let cart = cart.reduce(CartAction::Add(Product::new("Other", big)));
        assert_eq!(cart.total_amount(), Decimal::MAX);
    }
}
