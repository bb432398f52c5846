//! HTTP server layer.
//!
//! Plays the hosting-environment role around the edge pipeline: routes every
//! request path through [`EdgeHandler`](crate::edge::EdgeHandler) and serves
//! whatever the store holds afterwards.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        HTTP Layer                          │
//! │              GET /<width>x<height>,<color>,<format>        │
//! │                                                            │
//! │   ┌──────────────┐              ┌────────────────────┐     │
//! │   │   handlers   │              │       routes       │     │
//! │   │  (requests)  │              │  (router config)   │     │
//! │   └──────────────┘              └────────────────────┘     │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{health_handler, placeholder_handler, AppState, HealthResponse};
pub use routes::{create_router, RouterConfig};
