//! Home and about presenters.
//!
//! Both endpoints return tiny fixed payloads. The presenters guard the
//! download before trusting it: a payload that is missing, is not an
//! object, or lacks the expected keys is replaced wholesale by a canned
//! invalid-data record before rendering.

use serde_json::Value;

use rosterhub_template::escape_html;

use crate::article::ContentRegion;
use crate::error::ClientError;
use crate::history::ActionHistory;
use crate::http::GatewayClient;
use crate::sports::SportModule;

/// Message shown when a download is missing or mis-shaped.
pub const INVALID_DOWNLOAD: &str = "Downloaded data is not valid";

/// Presents the home and about payloads of one sport's backend.
pub struct InfoPresenter<'a> {
    module: &'a SportModule,
    client: &'a GatewayClient,
}

impl<'a> InfoPresenter<'a> {
    pub fn new(module: &'a SportModule, client: &'a GatewayClient) -> Self {
        InfoPresenter { module, client }
    }

    /// Renders a home payload. Anything without a `mensaje` string falls
    /// back to the canned record.
    pub fn show_home(&self, payload: Option<&Value>, region: &mut dyn ContentRegion) {
        let message = payload
            .and_then(|p| p.get("mensaje"))
            .and_then(Value::as_str)
            .unwrap_or(INVALID_DOWNLOAD);
        region.update(
            &format!("{} Home", self.module.display_name),
            &escape_html(message),
        );
    }

    /// Renders an about payload. All four keys must be present.
    pub fn show_about(&self, payload: Option<&Value>, region: &mut dyn ContentRegion) {
        let fields = payload.and_then(|p| {
            let get = |k: &str| p.get(k).and_then(Value::as_str).map(str::to_string);
            Some((get("mensaje")?, get("autor")?, get("email")?, get("fecha")?))
        });

        let content = match fields {
            Some((message, author, email, date)) => format!(
                "<div>\n<p>{}</p>\n<ul>\n<li><b>Autor/a</b>: {}</li>\n<li><b>E-mail</b>: {}</li>\n<li><b>Fecha</b>: {}</li>\n</ul>\n</div>",
                escape_html(&message),
                escape_html(&author),
                escape_html(&email),
                escape_html(&date),
            ),
            None => format!("<div>\n<p>{}</p>\n</div>", INVALID_DOWNLOAD),
        };
        region.update(
            &format!("{} About", self.module.display_name),
            &content,
        );
    }

    /// Fetches and shows the home payload.
    pub async fn process_home(
        &self,
        region: &mut dyn ContentRegion,
        history: &mut ActionHistory,
    ) -> Result<(), ClientError> {
        history.record(format!("Opened home ({})", self.module.name));
        let payload = self.client.home(&self.module.prefix).await?;
        self.show_home(Some(&payload), region);
        Ok(())
    }

    /// Fetches and shows the about payload.
    pub async fn process_about(
        &self,
        region: &mut dyn ContentRegion,
        history: &mut ActionHistory,
    ) -> Result<(), ClientError> {
        history.record(format!("Opened about ({})", self.module.name));
        let payload = self.client.about(&self.module.prefix).await?;
        self.show_about(Some(&payload), region);
        Ok(())
    }
}
