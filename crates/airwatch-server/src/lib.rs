//! Airwatch Server - HTTP surface for the cache-backed WAQI proxy.
//!
//! Exposes the router and server startup so integration tests can bind the
//! real application on an ephemeral port; the `airwatch-server` binary is a
//! thin wrapper around [`server::start_server`].

pub mod handlers;
pub mod server;
