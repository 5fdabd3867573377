//! List presenters: fetch a collection, optionally sort it, render it.

use rosterhub_store::Document;
use rosterhub_template::Entity;

use crate::article::ContentRegion;
use crate::error::ClientError;
use crate::history::ActionHistory;
use crate::http::GatewayClient;
use crate::sort::{sort_documents, Direction, SortKey};
use crate::sports::{names_template, SportModule};

fn entities(documents: &[Document]) -> Vec<Entity<'_>> {
    documents
        .iter()
        .map(|d| Entity {
            id: &d.ref_id,
            data: &d.data,
        })
        .collect()
}

/// Renders one sport's listings into a content region.
///
/// Constructed with its dependencies (the module descriptor and the
/// gateway client) and handed the region per call; nothing is read from
/// shared state.
pub struct ListPresenter<'a> {
    module: &'a SportModule,
    client: &'a GatewayClient,
}

impl<'a> ListPresenter<'a> {
    pub fn new(module: &'a SportModule, client: &'a GatewayClient) -> Self {
        ListPresenter { module, client }
    }

    /// Full-roster table for the given documents, in their given order.
    pub fn render_roster(&self, documents: &[Document]) -> Result<String, ClientError> {
        Ok(self.module.table.render_table(&entities(documents))?)
    }

    /// Names-only table for the given documents, in their given order.
    pub fn render_names(&self, documents: &[Document]) -> Result<String, ClientError> {
        Ok(self.module.names_table.render_table(&entities(documents))?)
    }

    /// Fetches and shows the whole roster.
    pub async fn list_roster(
        &self,
        region: &mut dyn ContentRegion,
        history: &mut ActionHistory,
    ) -> Result<(), ClientError> {
        history.record(format!("Listed roster ({})", self.module.name));
        let documents = self.client.fetch_all(&self.module.prefix).await?;
        let html = self.render_roster(&documents)?;
        region.update(&format!("{} roster", self.module.display_name), &html);
        Ok(())
    }

    /// Fetches and shows the names-only listing, in store order.
    pub async fn list_names(
        &self,
        region: &mut dyn ContentRegion,
        history: &mut ActionHistory,
    ) -> Result<(), ClientError> {
        history.record(format!("Listed names ({})", self.module.name));
        let documents = self.client.fetch_all(&self.module.prefix).await?;
        let html = self.render_names(&documents)?;
        region.update(&format!("{} names", self.module.display_name), &html);
        Ok(())
    }

    /// Fetches and shows the names-only listing, alphabetically.
    pub async fn list_names_sorted(
        &self,
        region: &mut dyn ContentRegion,
        history: &mut ActionHistory,
    ) -> Result<(), ClientError> {
        history.record(format!("Listed names alphabetically ({})", self.module.name));
        let mut documents = self.client.fetch_all(&self.module.prefix).await?;
        sort_documents(&mut documents, &SortKey::text("nombre", Direction::Ascending));
        let html = self.render_names(&documents)?;
        region.update(
            &format!("{} names, alphabetical", self.module.display_name),
            &html,
        );
        Ok(())
    }

    /// Fetches and shows the roster ordered by one of the module's
    /// declared sort fields, in that field's declared direction.
    pub async fn list_roster_sorted_by(
        &self,
        field: &str,
        region: &mut dyn ContentRegion,
        history: &mut ActionHistory,
    ) -> Result<(), ClientError> {
        let key = self.module.sort_key(field)?.clone();
        history.record(format!("Listed roster by {} ({})", field, self.module.name));
        let mut documents = self.client.fetch_all(&self.module.prefix).await?;
        sort_documents(&mut documents, &key);
        let html = self.render_roster(&documents)?;
        region.update(&format!("{} roster", self.module.display_name), &html);
        Ok(())
    }
}

/// Names of every athlete across all the given sports in one table.
///
/// Fetches each sport's collection through the gateway, concatenates in
/// module order, and renders the shared names table; `sorted` orders the
/// combined list alphabetically first.
pub async fn list_names_across(
    modules: &[SportModule],
    client: &GatewayClient,
    sorted: bool,
    region: &mut dyn ContentRegion,
    history: &mut ActionHistory,
) -> Result<(), ClientError> {
    history.record(if sorted {
        "Listed names alphabetically (all sports)".to_string()
    } else {
        "Listed names (all sports)".to_string()
    });

    let mut combined = Vec::new();
    for module in modules {
        combined.extend(client.fetch_all(&module.prefix).await?);
    }
    if sorted {
        sort_documents(&mut combined, &SortKey::text("nombre", Direction::Ascending));
    }

    let html = names_template().render_table(&entities(&combined))?;
    let title = if sorted {
        "All athletes, alphabetical"
    } else {
        "All athletes"
    };
    region.update(title, &html);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Article;
    use crate::sports::swimming;
    use serde_json::json;

    fn swimmer(id: &str, nombre: &str) -> Document {
        Document::new(
            id,
            json!({
                "nombre": nombre,
                "apellidos": "X",
                "fecha_nacimiento": {"dia": 1, "mes": 1, "año": 2000},
                "nacionalidad": "España",
                "años_de_participacion_mundial": 1,
                "numero_de_participaciones_juegos_olimpicos": 1,
            }),
        )
    }

    #[test]
    fn test_render_names_keeps_order_and_row_count() {
        let module = swimming();
        let client = GatewayClient::new("http://localhost:0");
        let presenter = ListPresenter::new(&module, &client);

        let docs = vec![swimmer("1", "Ana"), swimmer("2", "Bea")];
        let html = presenter.render_names(&docs).unwrap();
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.find("Ana").unwrap() < html.find("Bea").unwrap());
    }

    #[test]
    fn test_render_roster_empty_is_header_plus_footer() {
        let module = swimming();
        let client = GatewayClient::new("http://localhost:0");
        let presenter = ListPresenter::new(&module, &client);

        let html = presenter.render_roster(&[]).unwrap();
        assert!(html.starts_with("<table"));
        assert!(html.ends_with("</tbody></table>"));
        assert!(!html.contains("<tr"));
    }

    #[tokio::test]
    async fn test_list_roster_unreachable_gateway_records_history_first() {
        let module = swimming();
        let client = GatewayClient::new("http://127.0.0.1:9");
        let presenter = ListPresenter::new(&module, &client);
        let mut region = Article::new();
        let mut history = ActionHistory::new();

        let result = presenter.list_roster(&mut region, &mut history).await;
        assert!(result.is_err());
        // The history records the click, not the outcome, so the entry is
        // there even though the fetch failed.
        assert_eq!(history.len(), 1);
        // The region keeps its previous (empty) content.
        assert_eq!(region.content(), "");
    }
}
