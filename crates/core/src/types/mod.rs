//! Core types for the Luxtive storefront client.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod metal;
pub mod price;

pub use id::*;
pub use metal::{format_metals, parse_metals};
pub use price::{CurrencyCode, Price};
