//! Sorting for list presenters.
//!
//! Each sport module declares one [`SortKey`] per sortable field. The
//! direction is part of the key because the sport modules are not uniform
//! about it (participation counts list descending, names ascending) and
//! each module's behavior is kept as-is.

use std::cmp::Ordering;

use deunicode::deunicode;
use rosterhub_store::Document;
use serde_json::Value;

/// How a field's values compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    /// Accent-folding text order, case used only as a tiebreak.
    Text,
    /// Numeric order; string values are parsed.
    Number,
    /// Calendar order over a `{dia, mes, año}` object.
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One sortable field of a sport module.
#[derive(Debug, Clone)]
pub struct SortKey {
    pub field: String,
    pub kind: SortKind,
    pub direction: Direction,
}

impl SortKey {
    pub fn text(field: &str, direction: Direction) -> Self {
        SortKey {
            field: field.to_string(),
            kind: SortKind::Text,
            direction,
        }
    }

    pub fn number(field: &str, direction: Direction) -> Self {
        SortKey {
            field: field.to_string(),
            kind: SortKind::Number,
            direction,
        }
    }

    pub fn date(field: &str, direction: Direction) -> Self {
        SortKey {
            field: field.to_string(),
            kind: SortKind::Date,
            direction,
        }
    }
}

/// Stably sorts documents by `key`. Ties keep their original order.
pub fn sort_documents(documents: &mut [Document], key: &SortKey) {
    documents.sort_by(|a, b| {
        let ordering = compare_field(&a.data, &b.data, key);
        match key.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });
}

fn compare_field(a: &Value, b: &Value, key: &SortKey) -> Ordering {
    match key.kind {
        SortKind::Text => {
            let left = text_value(a, &key.field);
            let right = text_value(b, &key.field);
            fold(&left).cmp(&fold(&right)).then_with(|| left.cmp(&right))
        }
        SortKind::Number => {
            numeric_value(a, &key.field).total_cmp(&numeric_value(b, &key.field))
        }
        SortKind::Date => date_value(a, &key.field).cmp(&date_value(b, &key.field)),
    }
}

fn fold(s: &str) -> String {
    deunicode(s).to_lowercase()
}

fn text_value(data: &Value, field: &str) -> String {
    match data.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn numeric_value(data: &Value, field: &str) -> f64 {
    match data.get(field) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::MIN),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(f64::MIN),
        _ => f64::MIN,
    }
}

/// `(year, month, day)` for calendar comparison; missing parts become 0.
fn date_value(data: &Value, field: &str) -> (i64, i64, i64) {
    let obj = match data.get(field) {
        Some(Value::Object(map)) => Some(map),
        Some(Value::Array(items)) => match items.first() {
            Some(Value::Object(map)) => Some(map),
            _ => None,
        },
        _ => None,
    };
    let part = |keys: &[&str]| -> i64 {
        obj.and_then(|m| keys.iter().find_map(|k| m.get(*k)))
            .map(|v| match v {
                Value::Number(n) => n.as_i64().unwrap_or(0),
                Value::String(s) => s.trim().parse().unwrap_or(0),
                _ => 0,
            })
            .unwrap_or(0)
    };
    (part(&["año", "anio"]), part(&["mes"]), part(&["dia"]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: &str, data: Value) -> Document {
        Document::new(id, data)
    }

    #[test]
    fn test_text_ascending() {
        let mut docs = vec![
            doc("1", json!({"nombre": "Bea"})),
            doc("2", json!({"nombre": "Ana"})),
        ];
        sort_documents(&mut docs, &SortKey::text("nombre", Direction::Ascending));
        assert_eq!(docs[0].data["nombre"], "Ana");
        assert_eq!(docs[1].data["nombre"], "Bea");
    }

    #[test]
    fn test_text_folds_accents_and_case() {
        let mut docs = vec![
            doc("1", json!({"nombre": "Óscar"})),
            doc("2", json!({"nombre": "ana"})),
            doc("3", json!({"nombre": "Bea"})),
        ];
        sort_documents(&mut docs, &SortKey::text("nombre", Direction::Ascending));
        let names: Vec<&str> = docs
            .iter()
            .map(|d| d.data["nombre"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["ana", "Bea", "Óscar"]);
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let mut docs = vec![
            doc("1", json!({"nombre": "Ana", "peso": 80})),
            doc("2", json!({"nombre": "Ana", "peso": 70})),
            doc("3", json!({"nombre": "Ana", "peso": 90})),
        ];
        let key = SortKey::text("nombre", Direction::Ascending);
        sort_documents(&mut docs, &key);
        let first: Vec<String> = docs.iter().map(|d| d.ref_id.clone()).collect();
        assert_eq!(first, vec!["1", "2", "3"]);

        sort_documents(&mut docs, &key);
        let second: Vec<String> = docs.iter().map(|d| d.ref_id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_number_descending() {
        let mut docs = vec![
            doc("1", json!({"peso": 70})),
            doc("2", json!({"peso": "90"})),
            doc("3", json!({"peso": 80})),
        ];
        sort_documents(&mut docs, &SortKey::number("peso", Direction::Descending));
        let ids: Vec<&str> = docs.iter().map(|d| d.ref_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_date_calendar_order() {
        let mut docs = vec![
            doc("1", json!({"fecha_nacimiento": {"dia": 1, "mes": 12, "año": 1999}})),
            doc("2", json!({"fecha_nacimiento": {"dia": 30, "mes": 1, "año": 1999}})),
            doc("3", json!({"fecha_nacimiento": {"dia": 15, "mes": 6, "año": 1998}})),
        ];
        sort_documents(
            &mut docs,
            &SortKey::date("fecha_nacimiento", Direction::Ascending),
        );
        let ids: Vec<&str> = docs.iter().map(|d| d.ref_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_date_in_array_and_anio_spelling() {
        let mut docs = vec![
            doc("1", json!({"fec_nac": {"dia": 1, "mes": 1, "anio": 2001}})),
            doc("2", json!({"fec_nac": [{"dia": 1, "mes": 1, "año": 1991}]})),
        ];
        sort_documents(&mut docs, &SortKey::date("fec_nac", Direction::Ascending));
        assert_eq!(docs[0].ref_id, "2");
    }

    #[test]
    fn test_missing_field_sorts_first_ascending() {
        let mut docs = vec![
            doc("1", json!({"nombre": "Ana"})),
            doc("2", json!({})),
        ];
        sort_documents(&mut docs, &SortKey::text("nombre", Direction::Ascending));
        assert_eq!(docs[0].ref_id, "2");
    }
}
