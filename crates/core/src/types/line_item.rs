//! Cart line items and their boundary normalization.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::price::parse_numeric;
use super::product::Product;

/// A single product entry in the cart.
///
/// `qty` is at least 1 for as long as the item exists; a transition that
/// would take it to zero removes the item instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub name: String,
    pub image: String,
    pub description: String,
    /// Display-formatted price tag, the authoritative display source.
    pub cost: String,
    /// Numeric unit price derived from `cost` when the item was created.
    pub price: Decimal,
    pub qty: u32,
}

impl LineItem {
    /// Create a line item for a product with quantity 1.
    ///
    /// The unit price is parsed from the product's price tag here and is
    /// never re-derived afterwards.
    #[must_use]
    pub fn from_product(product: Product) -> Self {
        let price = parse_numeric(&product.cost);
        Self {
            name: product.name,
            image: product.image,
            description: product.description,
            cost: product.cost,
            price,
            qty: 1,
        }
    }

    /// Unit price multiplied by quantity, saturating at the bounds of
    /// [`Decimal`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.qty))
    }
}

/// Loosely shaped line item as found in external data.
///
/// Accepts `qty` or its alias `quantity`, and a numeric `price` or only a
/// `cost` tag. [`RawLineItem::normalize`] converts it into a [`LineItem`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLineItem {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default, alias = "quantity")]
    pub qty: Option<Value>,
}

impl RawLineItem {
    /// Resolve the quantity: a finite numeric `qty`, truncated, else 1.
    ///
    /// Returns `None` when the resolved quantity is below 1; such an entry
    /// must not exist in a cart.
    #[must_use]
    pub fn resolved_qty(&self) -> Option<u32> {
        let qty = self
            .qty
            .as_ref()
            .and_then(Value::as_f64)
            .filter(|q| q.is_finite())
            .map_or(1.0, f64::trunc);

        if qty < 1.0 {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // Bounded by the range check against u32::MAX
        let qty = if qty >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            qty as u32
        };
        Some(qty)
    }

    /// Resolve the unit price: a numeric (or decimal string) `price`, else
    /// the parsed `cost` tag.
    #[must_use]
    pub fn resolved_price(&self) -> Decimal {
        let explicit = match &self.price {
            Some(Value::Number(n)) => n.as_f64().and_then(Decimal::from_f64),
            Some(Value::String(s)) => s.trim().parse::<Decimal>().ok(),
            _ => None,
        };

        explicit.unwrap_or_else(|| parse_numeric(&self.cost))
    }

    /// Convert into a canonical [`LineItem`], or `None` if the quantity
    /// resolves below 1.
    #[must_use]
    pub fn normalize(self) -> Option<LineItem> {
        let qty = self.resolved_qty()?;
        let price = self.resolved_price();
        Some(LineItem {
            name: self.name,
            image: self.image,
            description: self.description,
            cost: self.cost,
            price,
            qty,
        })
    }
}
