//! The five sport modules.
//!
//! Each sport is one [`SportModule`]: its gateway prefix, its field
//! layout, and the templates and sort keys derived from that layout. The
//! layouts differ per sport on purpose, as five separately maintained
//! rosters would, and so do the sort directions (participation
//! counts list descending, names ascending; per module, as observed).

use rosterhub_template::{Tag, TagKind, TagSet, Template};

use crate::error::ClientError;
use crate::sort::{Direction, SortKey};

/// One field of a sport's roster as the form and table present it.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Column heading / form label.
    pub label: String,
    /// Placeholder token name, e.g. `NOMBRE`.
    pub token: String,
    /// Wire field name, e.g. `nombre`.
    pub field: String,
    pub kind: TagKind,
    /// Whether the form's multi-field edit enables this input.
    pub editable: bool,
}

impl FieldSpec {
    fn new(label: &str, token: &str, field: &str, kind: TagKind, editable: bool) -> Self {
        FieldSpec {
            label: label.to_string(),
            token: token.to_string(),
            field: field.to_string(),
            kind,
            editable,
        }
    }
}

/// One sport: prefix, field layout, templates, sort keys.
#[derive(Debug, Clone)]
pub struct SportModule {
    /// Short name, also the route name: `natacion`, `remo`, ...
    pub name: String,
    /// Gateway path prefix, e.g. `/natacion`.
    pub prefix: String,
    /// Human-facing name used in titles and history entries.
    pub display_name: String,
    /// Key the form serializer uses for the document id.
    pub id_field: String,
    pub fields: Vec<FieldSpec>,
    pub table: Template,
    pub names_table: Template,
    pub form: Template,
    sort_keys: Vec<SortKey>,
}

impl SportModule {
    fn new(
        name: &str,
        display_name: &str,
        id_field: &str,
        fields: Vec<FieldSpec>,
        sort_keys: Vec<SortKey>,
    ) -> Self {
        SportModule {
            name: name.to_string(),
            prefix: format!("/{name}"),
            display_name: display_name.to_string(),
            id_field: id_field.to_string(),
            table: roster_table(&fields),
            names_table: names_template(),
            form: roster_form(&fields),
            fields,
            sort_keys,
        }
    }

    /// The sort key declared for `field`.
    pub fn sort_key(&self, field: &str) -> Result<&SortKey, ClientError> {
        self.sort_keys
            .iter()
            .find(|k| k.field == field)
            .ok_or_else(|| ClientError::UnknownSortField(field.to_string()))
    }

    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    /// Fields the multi-field edit enables.
    pub fn editable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.editable)
    }
}

fn tag_set(fields: &[FieldSpec]) -> TagSet {
    let mut tags = vec![Tag::id()];
    for spec in fields {
        tags.push(match spec.kind {
            TagKind::Text => Tag::text(&spec.token, &spec.field),
            TagKind::Date => Tag::date(&spec.token, &spec.field),
        });
    }
    TagSet::new(tags).expect("static field layout")
}

/// Builds the full-roster table template from a field layout.
fn roster_table(fields: &[FieldSpec]) -> Template {
    let mut header = String::from("<table class=\"listado-personas\">\n<thead>\n<th>Id</th>");
    for spec in fields {
        header.push_str(&format!("<th>{}</th>", spec.label));
    }
    header.push_str("\n</thead>\n<tbody>\n");

    let mut body = String::from("<tr title=\"### ID ###\">\n<td>### ID ###</td>");
    for spec in fields {
        body.push_str(&format!("<td>### {} ###</td>", spec.token));
    }
    body.push_str("\n</tr>\n");

    Template::new(&header, &body, "</tbody></table>", tag_set(fields))
}

/// The names-only table every sport (and the cross-sport listing) uses.
pub fn names_template() -> Template {
    Template::new(
        "<table class=\"listado-personas\">\n<thead>\n<th>Nombre</th>\n</thead>\n<tbody>\n",
        "<tr>\n<td>### NOMBRE ###</td>\n</tr>\n",
        "</tbody></table>",
        TagSet::new(vec![Tag::text("NOMBRE", "nombre")]).expect("static field layout"),
    )
}

/// Builds the single-entity form template from a field layout.
fn roster_form(fields: &[FieldSpec]) -> Template {
    let mut body = String::from(
        "<form method=\"post\" action=\"\">\n<table class=\"listado-personas\">\n<tbody>\n<tr title=\"### ID ###\">\n",
    );
    body.push_str(
        "<td><input type=\"text\" disabled id=\"form-id\" value=\"### ID ###\" name=\"id\"/></td>\n",
    );
    for spec in fields {
        body.push_str(&format!(
            "<td><input type=\"text\" disabled id=\"form-{field}\" value=\"### {token} ###\" name=\"{field}\"/></td>\n",
            field = spec.field,
            token = spec.token,
        ));
    }
    body.push_str("</tr>\n</tbody>\n</table>\n</form>\n");
    Template::body_only(&body, tag_set(fields))
}

/// The swimming roster.
pub fn swimming() -> SportModule {
    SportModule::new(
        "natacion",
        "Swimming",
        "id_deportista",
        vec![
            FieldSpec::new("Nombre", "NOMBRE", "nombre", TagKind::Text, true),
            FieldSpec::new("Apellidos", "APELLIDOS", "apellidos", TagKind::Text, true),
            FieldSpec::new(
                "Fecha Nacimiento",
                "FECHA_NAC",
                "fecha_nacimiento",
                TagKind::Date,
                false,
            ),
            FieldSpec::new("Nacionalidad", "NACIONALIDAD", "nacionalidad", TagKind::Text, true),
            FieldSpec::new(
                "Años de Participacion Mundial",
                "AÑOS_MUNDIAL",
                "años_de_participacion_mundial",
                TagKind::Text,
                false,
            ),
            FieldSpec::new(
                "Nº de participacion en Juegos Olimpicos",
                "NUM_JJOO",
                "numero_de_participaciones_juegos_olimpicos",
                TagKind::Text,
                true,
            ),
        ],
        vec![
            SortKey::text("nombre", Direction::Ascending),
            SortKey::text("apellidos", Direction::Ascending),
            SortKey::date("fecha_nacimiento", Direction::Ascending),
            SortKey::text("nacionalidad", Direction::Ascending),
            SortKey::number("años_de_participacion_mundial", Direction::Descending),
            SortKey::number(
                "numero_de_participaciones_juegos_olimpicos",
                Direction::Descending,
            ),
        ],
    )
}

/// The water polo roster.
pub fn water_polo() -> SportModule {
    SportModule::new(
        "waterpolo",
        "Water polo",
        "id",
        vec![
            FieldSpec::new("Nombre", "NOMBRE", "nombre", TagKind::Text, true),
            FieldSpec::new("Apellidos", "APELLIDOS", "apellidos", TagKind::Text, true),
            FieldSpec::new("Fecha Nacimiento", "FEC_NAC", "fec_nac", TagKind::Date, false),
            FieldSpec::new("Competiciones", "COMPETICIONES", "competiciones", TagKind::Text, false),
            FieldSpec::new("Nacionalidad", "NACIONALIDAD", "nacionalidad", TagKind::Text, true),
            FieldSpec::new("Peso", "PESO", "peso", TagKind::Text, true),
            FieldSpec::new("Posicion", "POSICION", "posicion", TagKind::Text, true),
        ],
        vec![
            SortKey::text("nombre", Direction::Ascending),
            SortKey::text("apellidos", Direction::Ascending),
            SortKey::date("fec_nac", Direction::Ascending),
            SortKey::text("nacionalidad", Direction::Ascending),
            // Numeric columns list heaviest/most first in this module.
            SortKey::number("peso", Direction::Descending),
            SortKey::number("competiciones", Direction::Descending),
            SortKey::text("posicion", Direction::Ascending),
        ],
    )
}

/// The rowing roster.
pub fn rowing() -> SportModule {
    SportModule::new(
        "remo",
        "Rowing",
        "id_deportista",
        vec![
            FieldSpec::new("Nombre", "NOMBRE", "nombre", TagKind::Text, true),
            FieldSpec::new("Edad", "EDAD", "edad", TagKind::Text, true),
            FieldSpec::new(
                "Campeonatos del Mundo",
                "CAMPEONATOS_MUNDO",
                "campeonatosMundo",
                TagKind::Text,
                false,
            ),
            FieldSpec::new(
                "Participaciones JJOO",
                "PARTICIPACIONES_JJOO",
                "participacionesJJOO",
                TagKind::Text,
                true,
            ),
            FieldSpec::new("Altura", "ALTURA", "altura", TagKind::Text, false),
            FieldSpec::new("Sexo", "SEXO", "sexo", TagKind::Text, false),
            FieldSpec::new("Retirado", "RETIRADO", "retirado", TagKind::Text, false),
        ],
        vec![
            SortKey::text("nombre", Direction::Ascending),
            SortKey::number("edad", Direction::Descending),
            SortKey::number("campeonatosMundo", Direction::Descending),
            SortKey::number("participacionesJJOO", Direction::Descending),
            SortKey::number("altura", Direction::Ascending),
        ],
    )
}

/// The baseball roster.
pub fn baseball() -> SportModule {
    SportModule::new(
        "beisbol",
        "Baseball",
        "id_persona",
        vec![
            FieldSpec::new("Nombre", "NOMBRE", "nombre", TagKind::Text, true),
            FieldSpec::new("Apellidos", "APELLIDOS", "apellidos", TagKind::Text, true),
            FieldSpec::new(
                "Fecha Nacimiento",
                "FECHA_NAC",
                "fecha_nacimiento",
                TagKind::Date,
                false,
            ),
            FieldSpec::new("Equipo", "EQUIPO", "equipo", TagKind::Text, true),
            FieldSpec::new("Posicion", "POSICION", "posicion", TagKind::Text, true),
            FieldSpec::new(
                "Promedio de Bateo",
                "PROMEDIO_BATEO",
                "promedio_bateo",
                TagKind::Text,
                false,
            ),
        ],
        vec![
            SortKey::text("nombre", Direction::Ascending),
            SortKey::text("apellidos", Direction::Ascending),
            SortKey::date("fecha_nacimiento", Direction::Ascending),
            SortKey::text("equipo", Direction::Ascending),
            SortKey::number("promedio_bateo", Direction::Descending),
        ],
    )
}

/// The American football roster.
pub fn american_football() -> SportModule {
    SportModule::new(
        "futbol",
        "American football",
        "id_persona",
        vec![
            FieldSpec::new("Nombre", "NOMBRE", "nombre", TagKind::Text, true),
            FieldSpec::new("Edad", "EDAD", "edad", TagKind::Text, true),
            // This roster stores the birth date wrapped in a one-element
            // array; the date tag takes element [0].
            FieldSpec::new(
                "Fecha Nacimiento",
                "FECHA_NACIMIENTO",
                "fechaNacimiento",
                TagKind::Date,
                false,
            ),
            FieldSpec::new("Equipo", "EQUIPO", "equipo", TagKind::Text, true),
            FieldSpec::new("Dorsal", "DORSAL", "dorsal", TagKind::Text, true),
            FieldSpec::new("Posicion", "POSICION", "posicion", TagKind::Text, true),
            FieldSpec::new("Nacionalidad", "NACIONALIDAD", "nacionalidad", TagKind::Text, true),
            FieldSpec::new("Apodo", "APODO", "apodo", TagKind::Text, false),
        ],
        vec![
            SortKey::text("nombre", Direction::Ascending),
            SortKey::number("edad", Direction::Ascending),
            SortKey::number("dorsal", Direction::Ascending),
            SortKey::text("equipo", Direction::Ascending),
            SortKey::text("apodo", Direction::Ascending),
        ],
    )
}

/// All five modules, in gateway declaration order.
pub fn all_sports() -> Vec<SportModule> {
    vec![
        swimming(),
        water_polo(),
        rowing(),
        baseball(),
        american_football(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterhub_template::Entity;
    use serde_json::json;

    #[test]
    fn test_five_sports_with_distinct_prefixes() {
        let sports = all_sports();
        assert_eq!(sports.len(), 5);
        let mut prefixes: Vec<&str> = sports.iter().map(|s| s.prefix.as_str()).collect();
        prefixes.sort();
        prefixes.dedup();
        assert_eq!(prefixes.len(), 5);
    }

    #[test]
    fn test_swimming_table_renders_all_columns() {
        let data = json!({
            "nombre": "Ana",
            "apellidos": "Torres",
            "fecha_nacimiento": {"dia": 3, "mes": 5, "año": 1998},
            "nacionalidad": "España",
            "años_de_participacion_mundial": 4,
            "numero_de_participaciones_juegos_olimpicos": 2,
        });
        let entity = Entity { id: "42", data: &data };

        let row = swimming().table.render_row(&entity).unwrap();
        assert!(row.contains("<td>42</td>"));
        assert!(row.contains("<td>Ana</td>"));
        assert!(row.contains("<td>3/5/1998</td>"));
        assert!(!row.contains("###"));
    }

    #[test]
    fn test_sort_directions_preserved_per_module() {
        let swimming = swimming();
        assert_eq!(
            swimming.sort_key("nombre").unwrap().direction,
            Direction::Ascending
        );
        assert_eq!(
            swimming
                .sort_key("numero_de_participaciones_juegos_olimpicos")
                .unwrap()
                .direction,
            Direction::Descending
        );

        let water_polo = water_polo();
        assert_eq!(
            water_polo.sort_key("peso").unwrap().direction,
            Direction::Descending
        );
    }

    #[test]
    fn test_unknown_sort_field_is_error() {
        assert!(swimming().sort_key("dorsal").is_err());
    }

    #[test]
    fn test_form_carries_wire_field_names() {
        let form_body = baseball().form;
        let data = json!({
            "nombre": "Ana",
            "apellidos": "Ruiz",
            "fecha_nacimiento": {"dia": 1, "mes": 2, "año": 1990},
            "equipo": "Toros",
            "posicion": "Catcher",
            "promedio_bateo": "0.310",
        });
        let entity = Entity { id: "9", data: &data };
        let html = form_body.render_row(&entity).unwrap();
        assert!(html.contains("name=\"equipo\""));
        assert!(html.contains("value=\"Toros\""));
        assert!(html.contains("value=\"1/2/1990\""));
    }

    #[test]
    fn test_american_football_array_date() {
        let data = json!({
            "nombre": "Max",
            "edad": 27,
            "fechaNacimiento": [{"dia": 9, "mes": 12, "año": 1997}],
            "equipo": "Lobos",
            "dorsal": 23,
            "posicion": "QB",
            "nacionalidad": "México",
            "apodo": "Rayo",
        });
        let entity = Entity { id: "3", data: &data };
        let row = american_football().table.render_row(&entity).unwrap();
        assert!(row.contains("<td>9/12/1997</td>"));
    }
}
