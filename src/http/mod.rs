//! HTTP server module.
//!
//! Binds the configured address and serves the router until SIGTERM/SIGINT,
//! then drains in-flight connections before exiting.

mod server;
mod shutdown;

pub use server::{listen_addr, start_server, ServerError};
