//! JSON cart API.
//!
//! Exposes the cart's dispatch contract directly: `POST /api/cart/actions`
//! takes a tagged [`CartAction`] and answers with the resulting cart.

use axum::Json;
use paradise_nursery_core::view::CartSummary;
use paradise_nursery_core::{Cart, CartAction};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::SessionCart;

/// Cart contents with formatted totals.
#[derive(Debug, Serialize)]
pub struct CartSnapshot {
    pub items: Cart,
    #[serde(flatten)]
    pub summary: CartSummary,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.clone(),
            summary: CartSummary::from(cart),
        }
    }
}

/// Get the visitor's cart.
#[instrument(skip(cart))]
pub async fn show(cart: SessionCart) -> Json<CartSnapshot> {
    Json(CartSnapshot::from(cart.cart()))
}

/// Dispatch an action against the visitor's cart.
#[instrument(skip(cart))]
pub async fn dispatch(
    mut cart: SessionCart,
    Json(action): Json<CartAction>,
) -> Result<Json<CartSnapshot>> {
    let updated = cart.dispatch(action).await?;
    Ok(Json(CartSnapshot::from(updated)))
}
