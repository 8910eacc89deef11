//! Luxtive Core - Shared types library.
//!
//! This crate provides common types used across the Luxtive storefront
//! client components:
//! - `storefront` - The reactive client core (catalog, cart, rendering)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no access
//! to the page's persistent store. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and metal sets

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
