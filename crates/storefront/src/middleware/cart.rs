//! Session-bound cart extractor.
//!
//! Each visitor session owns one cart. [`SessionCart`] loads it into a
//! [`CartStore`] for the duration of a request; [`SessionCart::dispatch`]
//! applies one action and writes the resulting cart back to the session.

use axum::{extract::FromRequestParts, http::request::Parts};
use paradise_nursery_core::{Cart, CartAction, CartStore};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::session_keys;

/// The visitor's cart, loaded from the session.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(mut cart: SessionCart) -> Result<impl IntoResponse> {
///     cart.dispatch(CartAction::remove("Mint")).await?;
///     Ok(format!("{} items", cart.cart().len()))
/// }
/// ```
pub struct SessionCart {
    session: Session,
    store: CartStore,
}

impl SessionCart {
    /// Load the cart stored in a session, or an empty cart.
    ///
    /// Unreadable session data is logged and treated as an empty cart.
    pub async fn load(session: Session) -> Self {
        let cart = match session.get::<Cart>(session_keys::CART).await {
            Ok(cart) => cart.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Discarding unreadable session cart: {e}");
                Cart::default()
            }
        };

        Self {
            session,
            store: CartStore::from_cart(cart),
        }
    }

    /// Apply an action and store the resulting cart in the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn dispatch(&mut self, action: CartAction) -> Result<&Cart, AppError> {
        tracing::debug!(?action, "Dispatching cart action");
        self.store.dispatch(action);
        self.session
            .insert(session_keys::CART, self.store.cart())
            .await?;
        Ok(self.store.cart())
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        self.store.cart()
    }
}

impl<S> FromRequestParts<S> for SessionCart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        Ok(Self::load(session).await)
    }
}
