//! Placeholder tags and the substitution engine.
//!
//! Templates carry uniquely-named positional tokens of the form
//! `### NAME ###`. A [`TagSet`] declares, for one entity type, which tokens
//! exist and which entity field each one reads. [`TagSet::substitute`]
//! globally replaces every token of the set in a template string.
//!
//! # Substitution rules
//!
//! - String, number and bool fields are inserted via their display form.
//! - Date fields are objects with `dia`/`mes`/`año` keys (the year key may
//!   also be spelled `anio`), rendered as `day/month/year`. A date stored
//!   as a one-element array takes element `[0]`.
//! - A token whose field is absent from the entity renders the literal
//!   string `undefined`. Dates are stricter: a declared date field that is
//!   missing (or null) is an error, because there is nothing to take the
//!   parts from. A scalar in a date position is not an error; its parts
//!   all render as `undefined`.
//! - Values are HTML-escaped before insertion unless the tag was built
//!   with [`Tag::raw`].
//!
//! # Example
//!
//! ```rust
//! use rosterhub_template::{Entity, Tag, TagSet};
//! use serde_json::json;
//!
//! let tags = TagSet::new(vec![
//!     Tag::id(),
//!     Tag::text("NOMBRE", "nombre"),
//! ]).unwrap();
//!
//! let data = json!({"nombre": "Ana"});
//! let entity = Entity { id: "1", data: &data };
//!
//! let row = tags
//!     .substitute("<tr title=\"### ID ###\"><td>### NOMBRE ###</td></tr>", &entity)
//!     .unwrap();
//! assert_eq!(row, "<tr title=\"1\"><td>Ana</td></tr>");
//! ```

use serde_json::Value;

use crate::error::TemplateError;
use crate::escape::escape_html;

/// Rendered in place of a token whose field is absent from the entity.
///
/// Deliberate: listings make missing fields visible instead of papering
/// over them with a default.
pub const UNDEFINED: &str = "undefined";

/// A borrowed view of one entity: its store-assigned id plus its data object.
#[derive(Debug, Clone, Copy)]
pub struct Entity<'a> {
    /// Reference id assigned by the backing store.
    pub id: &'a str,
    /// The entity's field map.
    pub data: &'a Value,
}

/// How a tag's field value is interpreted before insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Insert the field's display form verbatim.
    Text,
    /// Render a `{dia, mes, año}` object as `day/month/year`.
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TagSource {
    /// The store-assigned reference id, not a data field.
    RefId,
    /// A named field of the entity's data object.
    Field(String),
}

/// One placeholder: a token name bound to an entity field.
#[derive(Debug, Clone)]
pub struct Tag {
    name: String,
    source: TagSource,
    kind: TagKind,
    raw: bool,
}

impl Tag {
    /// The `### ID ###` tag, bound to the entity's reference id.
    pub fn id() -> Self {
        Tag {
            name: "ID".to_string(),
            source: TagSource::RefId,
            kind: TagKind::Text,
            raw: false,
        }
    }

    /// A text tag: token `### name ###` reading data field `field`.
    pub fn text(name: &str, field: &str) -> Self {
        Tag {
            name: name.to_string(),
            source: TagSource::Field(field.to_string()),
            kind: TagKind::Text,
            raw: false,
        }
    }

    /// A date tag: token `### name ###` reading a `{dia, mes, año}` field.
    pub fn date(name: &str, field: &str) -> Self {
        Tag {
            name: name.to_string(),
            source: TagSource::Field(field.to_string()),
            kind: TagKind::Date,
            raw: false,
        }
    }

    /// Opts this tag out of HTML escaping. Use only for values that are
    /// themselves trusted markup.
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    /// The literal token this tag matches in templates.
    pub fn token(&self) -> String {
        format!("### {} ###", self.name)
    }

    /// Resolves this tag's value for `entity` as an unescaped string.
    fn resolve(&self, entity: &Entity<'_>) -> Result<String, TemplateError> {
        match &self.source {
            TagSource::RefId => Ok(entity.id.to_string()),
            TagSource::Field(field) => match self.kind {
                TagKind::Text => Ok(match entity.data.get(field) {
                    Some(value) => display_value(value),
                    None => UNDEFINED.to_string(),
                }),
                TagKind::Date => format_date(entity.data.get(field), field),
            },
        }
    }
}

/// Display form of a scalar field value.
///
/// Arrays and objects fall back to their JSON text; listings showing raw
/// JSON for a mis-shaped field beats hiding the field.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Renders a date field as `day/month/year`.
///
/// Accepts either the object itself or a one-element array holding it
/// (both shapes exist in the stored data). Missing parts render as
/// `undefined`, and so do scalar values, which have no parts at all.
/// Only a field that is missing entirely, or an array with nothing
/// usable in front, is an error; there is no date to render at all in
/// that case.
fn format_date(value: Option<&Value>, field: &str) -> Result<String, TemplateError> {
    let value = value.ok_or_else(|| TemplateError::MalformedField(field.to_string()))?;

    let obj = match value {
        Value::Object(map) => Some(map),
        Value::Array(items) => match items.first() {
            Some(Value::Object(map)) => Some(map),
            _ => return Err(TemplateError::MalformedField(field.to_string())),
        },
        Value::Null => return Err(TemplateError::MalformedField(field.to_string())),
        // A scalar where a date object should be. Property access on it
        // yields nothing, so every part renders undefined.
        _ => None,
    };

    let part = |keys: &[&str]| -> String {
        obj.and_then(|map| keys.iter().find_map(|k| map.get(*k)))
            .map(display_value)
            .unwrap_or_else(|| UNDEFINED.to_string())
    };

    Ok(format!(
        "{}/{}/{}",
        part(&["dia"]),
        part(&["mes"]),
        part(&["año", "anio"])
    ))
}

/// Resolves one field of `entity` to its display string, unescaped.
///
/// This is the same resolution substitution uses; form presenters call it
/// to seed editable input values from a fetched entity.
pub fn display_field(
    entity: &Entity<'_>,
    field: &str,
    kind: TagKind,
) -> Result<String, TemplateError> {
    match kind {
        TagKind::Text => Ok(match entity.data.get(field) {
            Some(value) => display_value(value),
            None => UNDEFINED.to_string(),
        }),
        TagKind::Date => format_date(entity.data.get(field), field),
    }
}

/// The full set of placeholders for one entity type.
#[derive(Debug, Clone)]
pub struct TagSet {
    tags: Vec<Tag>,
}

impl TagSet {
    /// Builds a tag set, rejecting empty names and duplicate tokens.
    pub fn new(tags: Vec<Tag>) -> Result<Self, TemplateError> {
        let mut seen = Vec::with_capacity(tags.len());
        for tag in &tags {
            if tag.name.trim().is_empty() {
                return Err(TemplateError::InvalidTag("empty tag name".to_string()));
            }
            if let TagSource::Field(field) = &tag.source {
                if field.trim().is_empty() {
                    return Err(TemplateError::InvalidTag(format!(
                        "tag {} has an empty field",
                        tag.name
                    )));
                }
            }
            let token = tag.token();
            if seen.contains(&token) {
                return Err(TemplateError::DuplicateToken(token));
            }
            seen.push(token);
        }
        Ok(TagSet { tags })
    }

    /// The tags in declaration order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Globally replaces every token of this set in `template` with the
    /// corresponding value from `entity`.
    pub fn substitute(
        &self,
        template: &str,
        entity: &Entity<'_>,
    ) -> Result<String, TemplateError> {
        let mut out = template.to_string();
        for tag in &self.tags {
            let value = tag.resolve(entity)?;
            let value = if tag.raw { value } else { escape_html(&value) };
            out = out.replace(&tag.token(), &value);
        }
        Ok(out)
    }
}
