//! Cart route handlers.
//!
//! Cart controls are plain HTML forms enhanced with HTMX. HTMX requests get
//! the `cart_items` fragment back together with an `HX-Trigger: cart-updated`
//! header; plain form posts are redirected to `/cart`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use paradise_nursery_core::view::{self, CartControl};
use paradise_nursery_core::{Cart, CartAction, LineItem, format_amount};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::SessionCart;
use crate::state::AppState;

/// Header HTMX sets on every request it issues.
const HX_REQUEST: &str = "hx-request";

/// Line item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub name: String,
    pub image: String,
    pub description: String,
    pub cost: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total_amount: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&Cart::new())
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total_amount: format_amount(cart.total_amount()),
            item_count: cart.total_quantity(),
        }
    }
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            image: item.image.clone(),
            description: item.description.clone(),
            cost: item.cost.clone(),
            quantity: item.qty,
            line_total: format_amount(item.line_total()),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Form naming a single line item (add, increment, decrement, remove).
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    pub name: String,
}

/// Set-quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub name: String,
    pub quantity: i64,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub notice: Option<String>,
}

/// Cart contents fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
    pub notice: Option<String>,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Checkout notice fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_notice.html")]
pub struct CheckoutNoticeTemplate {
    pub notice: String,
}

// =============================================================================
// Helpers
// =============================================================================

fn is_htmx(headers: &HeaderMap) -> bool {
    headers.get(HX_REQUEST).is_some_and(|v| v == "true")
}

/// Respond after a cart mutation.
fn cart_updated(headers: &HeaderMap, cart: &Cart) -> Response {
    if is_htmx(headers) {
        (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartItemsTemplate {
                cart: CartView::from(cart),
                notice: None,
            },
        )
            .into_response()
    } else {
        Redirect::to("/cart").into_response()
    }
}

/// Redirect an HTMX request with `HX-Redirect`, a plain one with 303.
fn redirect_to(headers: &HeaderMap, target: &str) -> Response {
    if is_htmx(headers) {
        (
            StatusCode::OK,
            AppendHeaders([("HX-Redirect", target.to_string())]),
        )
            .into_response()
    } else {
        Redirect::to(target).into_response()
    }
}

/// Press a row control for the named item. Unknown names leave the cart as is.
async fn press(cart: &mut SessionCart, name: &str, control: CartControl) -> Result<()> {
    let Some(action) = cart.cart().get(name).map(|item| control.action_for(item)) else {
        tracing::debug!(name, ?control, "Control pressed for item not in cart");
        return Ok(());
    };
    cart.dispatch(action).await?;
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(cart))]
pub async fn show(cart: SessionCart) -> impl IntoResponse {
    CartShowTemplate {
        cart: CartView::from(cart.cart()),
        notice: None,
    }
}

/// Add one unit of a catalog product (HTMX).
///
/// Returns the cart count badge with an HTMX trigger so other elements can
/// refresh.
#[instrument(skip(state, cart, headers))]
pub async fn add(
    State(state): State<AppState>,
    mut cart: SessionCart,
    headers: HeaderMap,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    let product = state
        .catalog()
        .find(&form.name)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.name)))?;

    add_breadcrumb("cart", "Added to cart", Some(&[("product", form.name.as_str())]));
    let updated = cart.dispatch(CartAction::Add(product)).await?;
    let count = updated.total_quantity();

    if is_htmx(&headers) {
        Ok((
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartCountTemplate { count },
        )
            .into_response())
    } else {
        Ok(Redirect::to("/products").into_response())
    }
}

/// Increase an item's quantity by one.
#[instrument(skip(cart, headers))]
pub async fn increment(
    mut cart: SessionCart,
    headers: HeaderMap,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    press(&mut cart, &form.name, CartControl::Increment).await?;
    Ok(cart_updated(&headers, cart.cart()))
}

/// Decrease an item's quantity by one, removing it when it reaches zero.
#[instrument(skip(cart, headers))]
pub async fn decrement(
    mut cart: SessionCart,
    headers: HeaderMap,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    press(&mut cart, &form.name, CartControl::Decrement).await?;
    Ok(cart_updated(&headers, cart.cart()))
}

/// Set an item's quantity; zero or less removes it.
#[instrument(skip(cart, headers))]
pub async fn update(
    mut cart: SessionCart,
    headers: HeaderMap,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    cart.dispatch(CartAction::set_quantity(form.name, form.quantity))
        .await?;
    Ok(cart_updated(&headers, cart.cart()))
}

/// Remove an item from the cart.
#[instrument(skip(cart, headers))]
pub async fn remove(
    mut cart: SessionCart,
    headers: HeaderMap,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    add_breadcrumb("cart", "Removed from cart", Some(&[("product", form.name.as_str())]));
    press(&mut cart, &form.name, CartControl::Delete).await?;
    Ok(cart_updated(&headers, cart.cart()))
}

/// Get cart count badge (HTMX).
#[instrument(skip(cart))]
pub async fn count(cart: SessionCart) -> impl IntoResponse {
    CartCountTemplate {
        count: cart.cart().total_quantity(),
    }
}

/// Continue Shopping.
///
/// Leads to the configured target; without one the request is a no-op and
/// answers `204 No Content`.
#[instrument(skip(state, headers))]
pub async fn continue_shopping(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let target = state.config().continue_shopping_url.as_deref();
    let headers = &headers;

    view::continue_shopping(target.map(|url| move || redirect_to(headers, url)))
        .unwrap_or_else(|| StatusCode::NO_CONTENT.into_response())
}

/// Checkout placeholder: shows a notice and leaves the cart untouched.
#[instrument(skip(cart, headers))]
pub async fn checkout(cart: SessionCart, headers: HeaderMap) -> Response {
    let notice = view::checkout().notice().to_string();
    tracing::info!(items = cart.cart().len(), "Checkout requested");

    if is_htmx(&headers) {
        CheckoutNoticeTemplate { notice }.into_response()
    } else {
        CartShowTemplate {
            cart: CartView::from(cart.cart()),
            notice: Some(notice),
        }
        .into_response()
    }
}
