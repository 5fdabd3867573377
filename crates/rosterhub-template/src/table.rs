//! Header/body/footer templates for one presentation of one entity type.

use crate::error::TemplateError;
use crate::tags::{Entity, TagSet};

/// A three-part template: fixed header, per-entity body, fixed footer.
///
/// The body carries the placeholder tokens; header and footer are inserted
/// verbatim. Rendering is eager and produces one finite string, there is no
/// streaming.
#[derive(Debug, Clone)]
pub struct Template {
    header: String,
    body: String,
    footer: String,
    tags: TagSet,
}

impl Template {
    pub fn new(header: &str, body: &str, footer: &str, tags: TagSet) -> Self {
        Template {
            header: header.to_string(),
            body: body.to_string(),
            footer: footer.to_string(),
            tags,
        }
    }

    /// A single-part template (forms are one body string, no header/footer).
    pub fn body_only(body: &str, tags: TagSet) -> Self {
        Template::new("", body, "", tags)
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Fills the body template for one entity.
    pub fn render_row(&self, entity: &Entity<'_>) -> Result<String, TemplateError> {
        self.tags.substitute(&self.body, entity)
    }

    /// Concatenates header, one filled body per entity, and footer.
    ///
    /// An empty slice yields exactly `header + footer`.
    pub fn render_table(&self, entities: &[Entity<'_>]) -> Result<String, TemplateError> {
        let mut out = self.header.clone();
        for entity in entities {
            out.push_str(&self.render_row(entity)?);
        }
        out.push_str(&self.footer);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::Tag;
    use serde_json::json;

    fn names_template() -> Template {
        Template::new(
            "<table><thead><th>Nombre</th></thead><tbody>",
            "<tr><td>### NOMBRE ###</td></tr>",
            "</tbody></table>",
            TagSet::new(vec![Tag::text("NOMBRE", "nombre")]).unwrap(),
        )
    }

    #[test]
    fn test_empty_table_is_header_plus_footer() {
        let out = names_template().render_table(&[]).unwrap();
        assert_eq!(
            out,
            "<table><thead><th>Nombre</th></thead><tbody></tbody></table>"
        );
    }

    #[test]
    fn test_rows_rendered_in_order() {
        let ana = json!({"nombre": "Ana"});
        let bea = json!({"nombre": "Bea"});
        let entities = [
            Entity { id: "1", data: &ana },
            Entity { id: "2", data: &bea },
        ];

        let out = names_template().render_table(&entities).unwrap();
        assert_eq!(out.matches("<tr>").count(), 2);
        let ana_at = out.find("Ana").unwrap();
        let bea_at = out.find("Bea").unwrap();
        assert!(ana_at < bea_at);
    }

    #[test]
    fn test_row_error_propagates() {
        let template = Template::new(
            "<table>",
            "<tr><td>### FECHA_NAC ###</td></tr>",
            "</table>",
            TagSet::new(vec![Tag::date("FECHA_NAC", "fecha_nacimiento")]).unwrap(),
        );
        let data = json!({});
        let entities = [Entity { id: "1", data: &data }];
        assert!(template.render_table(&entities).is_err());
    }

    #[test]
    fn test_body_only_template() {
        let tags = TagSet::new(vec![Tag::id(), Tag::text("NOMBRE", "nombre")]).unwrap();
        let form = Template::body_only("<form><input value=\"### NOMBRE ###\"/></form>", tags);
        let data = json!({"nombre": "Ana"});
        let entity = Entity { id: "1", data: &data };

        let out = form.render_row(&entity).unwrap();
        assert_eq!(out, "<form><input value=\"Ana\"/></form>");
        // render_table over one entity wraps the same body with empty ends.
        assert_eq!(form.render_table(&[entity]).unwrap(), out);
    }
}
