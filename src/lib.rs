//! Shopfront: storefront API client and view-model layer.
//!
//! Talks to a remote REST backend for catalog browsing, the cart
//! aggregate, and order submission, and keeps a versioned local cache of
//! the province/district reference dataset. Views receive the session and
//! the API client explicitly; there are no ambient singletons.

pub mod addresses;
pub mod api;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod geo;
pub mod logging;
pub mod session;
