//! Core types for Paradise Nursery.
//!
//! This module provides the cart domain: products, line items, the cart and
//! its reducer, prices and the catalog.

pub mod cart;
pub mod catalog;
pub mod line_item;
pub mod price;
pub mod product;

pub use cart::{Cart, CartAction, CartStore};
pub use catalog::{Catalog, CatalogError, Category};
pub use line_item::{LineItem, RawLineItem};
pub use price::{format_amount, parse_numeric};
pub use product::Product;
