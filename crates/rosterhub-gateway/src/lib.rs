//! # Rosterhub Gateway - Prefix-Routing Reverse Proxy
//!
//! The single entry point the front-end talks to. A static, ordered
//! [`RouteTable`] maps path prefixes to backend base URLs; the proxy
//! strips the matched prefix and forwards the rest:
//!
//! ```text
//! GET /natacion/getTodas  ->  http://localhost:8002/getTodas
//! GET /waterpolo/acercade ->  http://localhost:8003/acercade
//! ```
//!
//! The table is built once at startup, from code or a YAML file, and
//! validated then: duplicate or shadowed prefixes are load-time errors.
//! There is no dynamic registration. Resolution is first-match in
//! declaration order; a path no prefix matches is a 404.
//!
//! ```rust,no_run
//! use rosterhub_gateway::{router, serve, RouteEntry, RouteTable};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let table = RouteTable::new(vec![
//!     RouteEntry { prefix: "/natacion".into(), target: "http://localhost:8002".into() },
//!     RouteEntry { prefix: "/waterpolo".into(), target: "http://localhost:8003".into() },
//! ])?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8001").await?;
//! serve(listener, router(table)).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod proxy;
mod routes;

pub use error::GatewayError;
pub use proxy::router;
pub use routes::{Resolved, RouteEntry, RouteTable};

use axum::Router;
use tokio::net::TcpListener;

/// Serves the gateway router on an already-bound listener.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    tracing::info!(addr = %listener.local_addr()?, "gateway listening");
    axum::serve(listener, router).await
}
