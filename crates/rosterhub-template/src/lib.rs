//! # Rosterhub Template - Tag-Substitution Templates
//!
//! `rosterhub-template` renders roster tables and forms by literal token
//! substitution. A template is plain HTML carrying `### NAME ###` tokens; a
//! [`TagSet`] binds each token to a field of an entity; rendering replaces
//! every occurrence of every token with the entity's field value.
//!
//! This is deliberately not a general template engine: no control flow, no
//! filters, no includes. The whole contract is "find token, insert value",
//! because that is what the table and form presentations need.
//!
//! ## Core Concepts
//!
//! - [`Tag`]: one token bound to one field (`Tag::id()` binds `### ID ###`
//!   to the store-assigned reference id)
//! - [`TagSet`]: the validated set of tags for one entity type
//! - [`Template`]: header/body/footer triple; [`Template::render_table`]
//!   concatenates header + one filled body per entity + footer
//! - [`Entity`]: borrowed view of an id plus a `serde_json::Value` data map
//!
//! ## Quick Start
//!
//! ```rust
//! use rosterhub_template::{Entity, Tag, TagSet, Template};
//! use serde_json::json;
//!
//! let tags = TagSet::new(vec![Tag::id(), Tag::text("NOMBRE", "nombre")]).unwrap();
//! let template = Template::new(
//!     "<table><tbody>",
//!     r####"<tr title="### ID ###"><td>### NOMBRE ###</td></tr>"####,
//!     "</tbody></table>",
//!     tags,
//! );
//!
//! let ana = json!({"nombre": "Ana"});
//! let html = template
//!     .render_table(&[Entity { id: "1", data: &ana }])
//!     .unwrap();
//! assert_eq!(html, r#"<table><tbody><tr title="1"><td>Ana</td></tr></tbody></table>"#);
//! ```
//!
//! ## Escaping
//!
//! Field values are HTML-escaped before insertion. A tag built with
//! [`Tag::raw`] opts out for values that are themselves trusted markup.
//!
//! ## Failure Semantics
//!
//! Substitution is pure and infallible for text fields (missing fields
//! render the literal `undefined`). Date fields are stricter: a declared
//! date that is missing entirely fails the whole render with
//! [`TemplateError::MalformedField`]; callers guard upstream. A scalar in
//! a date position renders as `undefined/undefined/undefined` instead,
//! which is what a roster looks like after a form save stored the date as
//! its display string.

mod error;
mod escape;
mod table;
mod tags;

pub use error::TemplateError;
pub use escape::escape_html;
pub use table::Template;
pub use tags::{display_field, Entity, Tag, TagKind, TagSet, UNDEFINED};
