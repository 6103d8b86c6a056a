//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to product listing
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Catalog grouped by category
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns count badge, triggers cart-updated)
//! POST /cart/increment         - Quantity + 1 (returns cart_items fragment)
//! POST /cart/decrement         - Quantity - 1, removes at zero (returns cart_items fragment)
//! POST /cart/update            - Set quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/continue          - Continue Shopping (redirect or 204)
//! POST /cart/checkout          - Checkout placeholder notice
//!
//! # JSON API
//! GET  /api/cart               - Cart snapshot
//! POST /api/cart/actions       - Dispatch a cart action
//! ```

pub mod api;
pub mod cart;
pub mod products;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .route("/continue", post(cart::continue_shopping))
        .route("/checkout", post(cart::checkout))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(api::show))
        .route("/cart/actions", post(api::dispatch))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/products") }))
        .route("/products", get(products::index))
        .nest("/cart", cart_routes())
        .nest("/api", api_routes())
}
