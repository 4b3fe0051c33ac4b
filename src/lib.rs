//! RePitchBook - property presentation slide service
//!
//! A small JSON API that validates a property's type, location and price and
//! renders them into three fixed presentation slides.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod pitch;
pub mod routes;
pub mod state;
pub mod templates;

pub use error::*;
pub use routes::create_router;
pub use state::AppState;
