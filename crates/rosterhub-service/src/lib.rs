//! # Rosterhub Service - Per-Sport REST Backend
//!
//! One generic backend, instantiated five times with different
//! [`SportConfig`]s. Each instance exposes the same small surface over its
//! own document collection:
//!
//! | Route | Payload |
//! |---|---|
//! | `GET /` | `{"mensaje": "<service>: home"}` |
//! | `GET /acercade` | `{"mensaje", "autor", "email", "fecha"}` |
//! | `GET /test_db` | store page envelope (connectivity probe) |
//! | `GET /getTodas` | `{"data": [<document>, ...]}` |
//! | `GET /getPorId/{id}` | raw document envelope |
//! | `POST /setTodo` | updated document (id inside the body) |
//! | `POST /crear` | created document |
//! | `DELETE /borrar/{id}` | removed document |
//!
//! Every response carries permissive CORS headers. Store failures map to
//! HTTP 500 with `{"error": description}`; there are no retries and no
//! multi-document transactions.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rosterhub_service::{router, serve, About, SportConfig};
//! use rosterhub_store::MemoryStore;
//!
//! # async fn run() -> std::io::Result<()> {
//! let config = SportConfig {
//!     name: "natacion".into(),
//!     display_name: "MS Natacion".into(),
//!     id_field: "id_deportista".into(),
//!     about: About {
//!         message: "MS Natacion: acerca de".into(),
//!         author: "Ana Torres".into(),
//!         email: "ana@example.org".into(),
//!         date: "22/03/2023".into(),
//!     },
//! };
//! let app = router(config, Arc::new(MemoryStore::new()));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8002").await?;
//! serve(listener, app).await
//! # }
//! ```

mod body;
mod config;
mod error;
mod handlers;

pub use body::{decode_object, split_id};
pub use config::{About, SportConfig};
pub use error::ServiceError;
pub use handlers::{router, AppState};

use axum::Router;
use tokio::net::TcpListener;

/// Serves a backend router on an already-bound listener.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    tracing::info!(addr = %listener.local_addr()?, "roster service listening");
    axum::serve(listener, router).await
}
