//! Error type for template substitution.

use std::fmt;

/// Error type for template substitution operations.
///
/// Substitution is pure string work, so the only failures are structural:
/// a tag set that was built wrong, or an entity whose fields don't have the
/// shape the tag promised.
#[derive(Debug)]
pub enum TemplateError {
    /// A field declared as a date is missing or is not a date object.
    ///
    /// Carries the wire field name. Callers are expected to guard entities
    /// before rendering; this is not recoverable mid-substitution.
    MalformedField(String),

    /// Two tags in the same set share a token.
    DuplicateToken(String),

    /// A tag was declared with an empty name or empty field.
    InvalidTag(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MalformedField(field) => {
                write!(f, "field is not a date object: {}", field)
            }
            TemplateError::DuplicateToken(token) => {
                write!(f, "duplicate token in tag set: {}", token)
            }
            TemplateError::InvalidTag(msg) => write!(f, "invalid tag: {}", msg),
        }
    }
}

impl std::error::Error for TemplateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TemplateError::MalformedField("fecha_nacimiento".to_string());
        assert!(err.to_string().contains("not a date object"));
        assert!(err.to_string().contains("fecha_nacimiento"));
    }

    #[test]
    fn test_duplicate_token_display() {
        let err = TemplateError::DuplicateToken("### ID ###".to_string());
        assert!(err.to_string().contains("### ID ###"));
    }
}
