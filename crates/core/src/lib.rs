//! Paradise Nursery Core - Cart domain library.
//!
//! This crate provides the cart model used across all Paradise Nursery components:
//! - `storefront` - Web front end rendering the catalog and the cart
//! - `cli` - Command-line tools for replaying cart scripts and checking catalogs
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no sessions. Every cart transition is a function of `(Cart, CartAction)`
//! returning a new `Cart`.
//!
//! # Modules
//!
//! - [`types`] - Products, line items, the cart and its reducer, prices, catalogs
//! - [`view`] - Presentation logic shared by every cart front end

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod view;

pub use types::*;
