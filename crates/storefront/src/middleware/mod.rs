//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame options, etc.)
//! 5. Session layer (tower-sessions with in-memory store)
//!
//! The [`SessionCart`] extractor sits on top of the session layer and hands
//! each cart handler the visitor's cart store.

pub mod cart;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use cart::SessionCart;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
