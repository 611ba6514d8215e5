//! Storefront
//!
//! In-memory state containers for an online storefront: a read-only product
//! catalog and a shopping cart with derived totals.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
