//! Luxtive Storefront - Reactive client core.
//!
//! This crate implements the state layer of the Luxtive jewelry storefront
//! client: the catalog filter/sort/search engine, the cart and wishlist
//! store, the idempotent view-rendering layer, and the merchandising
//! widgets. The page shell it embeds in supplies the three external
//! collaborators as trait objects:
//!
//! - the rendering surface ([`render::Surface`])
//! - the persistent key-value store ([`storage::StorageArea`])
//! - the remote catalog endpoint (reached via [`catalog::CatalogClient`])
//!
//! # Architecture
//!
//! - [`app::AppContext`] is constructed once per page load and owns all
//!   mutable state; there are no page-global singletons.
//! - Filter state is the single source of truth; rendered markup always
//!   reflects it, never the reverse.
//! - Cart and wishlist counters are recomputed from the just-persisted
//!   collections after every mutation, so displays can never drift from
//!   the store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod cart;
pub mod catalog;
pub mod chrome;
pub mod config;
pub mod error;
pub mod render;
pub mod storage;
pub mod telemetry;
pub mod widgets;

pub use app::AppContext;
pub use config::StorefrontConfig;
pub use error::{AppError, Result};
