//! Client error type.

use rosterhub_store::StoreError;
use rosterhub_template::TemplateError;
use thiserror::Error;

/// Errors surfaced by the client layer.
///
/// `Gateway` is the connectivity case the UI turns into its blocking
/// alert; everything else is a programming or data-shape problem the UI
/// leaves to the console.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot reach the API gateway: {0}")]
    Gateway(String),

    #[error("cannot decode response: {0}")]
    Decode(String),

    #[error(transparent)]
    Envelope(#[from] StoreError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("field is not editable: {0}")]
    NotEditable(String),

    #[error("no entity is being displayed")]
    NothingDisplayed,

    #[error("no sort key for field: {0}")]
    UnknownSortField(String),
}
