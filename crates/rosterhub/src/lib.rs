//! # Rosterhub - Sports-Club Roster System
//!
//! Rosterhub is a small teaching system: five near-identical REST
//! backends (one per sport) over a document store, a prefix-routing API
//! gateway in front of them, and a client layer that renders rosters by
//! tag substitution.
//!
//! This crate is the facade; each concern lives in its own member crate
//! and is re-exported here:
//!
//! - [`template`]: `### NAME ###` token substitution over
//!   header/body/footer templates
//! - [`store`]: the document-store trait, the in-memory store, and the
//!   wire envelopes
//! - [`service`]: the per-sport backend router
//!   (`/getTodas`, `/getPorId/{id}`, `/setTodo`, ...)
//! - [`gateway`]: the validated prefix route table and reverse proxy
//! - [`client`]: the gateway client and the list/form/info presenters
//!
//! ## Data flow
//!
//! ```text
//! presenter -> GatewayClient -> gateway (prefix strip) -> backend -> store
//!     ^                                                               |
//!     '------------------- page envelope {"data": [...]} <-----------'
//! ```
//!
//! The presenter feeds the returned documents through a sport's templates
//! and writes the resulting HTML into its content region.
//!
//! ## Quick Start
//!
//! ```rust
//! use rosterhub::template::{Entity, Tag, TagSet, Template};
//! use serde_json::json;
//!
//! let tags = TagSet::new(vec![Tag::id(), Tag::text("NOMBRE", "nombre")]).unwrap();
//! let table = Template::new(
//!     "<table><tbody>",
//!     r####"<tr title="### ID ###"><td>### NOMBRE ###</td></tr>"####,
//!     "</tbody></table>",
//!     tags,
//! );
//!
//! let ana = json!({"nombre": "Ana"});
//! let html = table.render_table(&[Entity { id: "1", data: &ana }]).unwrap();
//! assert!(html.contains("<td>Ana</td>"));
//! ```

pub use rosterhub_client as client;
pub use rosterhub_gateway as gateway;
pub use rosterhub_service as service;
pub use rosterhub_store as store;
pub use rosterhub_template as template;

pub use rosterhub_client::{
    ActionHistory, Article, ClientError, ContentRegion, FormPresenter, FormState, GatewayClient,
    InfoPresenter, ListPresenter, SportModule,
};
pub use rosterhub_gateway::{GatewayError, RouteEntry, RouteTable};
pub use rosterhub_service::{About, ServiceError, SportConfig};
pub use rosterhub_store::{Document, DocumentStore, MemoryStore, StoreError};
pub use rosterhub_template::{Entity, Tag, TagSet, Template, TemplateError};
