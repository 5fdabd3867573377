//! # Rosterhub Client - Gateway Client and Presenters
//!
//! The "front-end" half of the roster system, built as explicit
//! components with their dependencies passed in:
//!
//! - [`GatewayClient`]: HTTP client for the gateway, built with its base
//!   URL (never read from a global)
//! - [`SportModule`]: one sport's field layout, templates and sort keys
//!   ([`swimming`], [`water_polo`], [`rowing`], [`baseball`],
//!   [`american_football`])
//! - [`ListPresenter`]: roster and names listings, plain and sorted
//! - [`FormPresenter`]: the two-state single-entity editor
//! - [`InfoPresenter`]: home and about payloads with the invalid-data
//!   fallback
//! - [`ContentRegion`] / [`Article`]: where rendered HTML goes
//! - [`ActionHistory`]: the bounded list of user actions
//!
//! ## A typical flow
//!
//! ```rust,no_run
//! use rosterhub_client::{
//!     ActionHistory, Article, GatewayClient, ListPresenter, sports,
//! };
//!
//! # async fn run() -> Result<(), rosterhub_client::ClientError> {
//! let client = GatewayClient::new("http://localhost:8001");
//! let module = sports::swimming();
//! let mut article = Article::new();
//! let mut history = ActionHistory::new();
//!
//! ListPresenter::new(&module, &client)
//!     .list_roster_sorted_by("nombre", &mut article, &mut history)
//!     .await?;
//! println!("{}", article.content());
//! # Ok(())
//! # }
//! ```
//!
//! Presenters render through `rosterhub-template`, so every field value is
//! HTML-escaped on its way into the page unless a tag opted out.

mod article;
mod error;
mod form;
mod history;
mod http;
mod info;
mod list;
mod sort;
pub mod sports;

pub use article::{Article, ContentRegion};
pub use error::ClientError;
pub use form::{FormPresenter, FormState};
pub use history::{ActionHistory, HISTORY_CAPACITY};
pub use http::GatewayClient;
pub use info::{InfoPresenter, INVALID_DOWNLOAD};
pub use list::{list_names_across, ListPresenter};
pub use sort::{sort_documents, Direction, SortKey, SortKind};
pub use sports::{
    all_sports, american_football, baseball, names_template, rowing, swimming, water_polo,
    FieldSpec, SportModule,
};
