//! Integration tests for the Luxtive storefront client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p luxtive-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shop_browsing` - catalog snapshot, filters, and rendered states
//! - `cart_checkout` - cart and wishlist flows across page loads
//! - `cross_tab_sync` - storage-change notifications between open pages
//! - `catalog_endpoint` - live fetch against a reachable endpoint (ignored
//!   by default)
//!
//! All scenarios except `catalog_endpoint` run fully in process: the
//! persistent store is a `MemoryStore` and rendering targets a
//! `BufferSurface`, so no browser, server, or network is involved.

#![cfg_attr(not(test), forbid(unsafe_code))]
