//! Single-entity form presenter.
//!
//! A two-state machine per displayed entity. In **Viewing** every input is
//! disabled and the primary actions (edit, edit name) are offered; in
//! **Editing** the configured subset of inputs is enabled and the actions
//! become save/cancel.
//!
//! The presenter holds the one "last-displayed" snapshot; `cancel` always
//! restores from it, never from a server round-trip. `save` is optimistic:
//! it serializes the visible values, POSTs them, ignores the response
//! body, and re-fetches the entity to re-render.

use std::collections::{BTreeMap, BTreeSet};

use rosterhub_store::Document;
use rosterhub_template::{display_field, Entity};
use serde_json::{Map, Value};

use crate::article::ContentRegion;
use crate::error::ClientError;
use crate::history::ActionHistory;
use crate::http::GatewayClient;
use crate::sports::SportModule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Viewing,
    Editing,
}

/// Form over one sport's entity.
pub struct FormPresenter<'a> {
    module: &'a SportModule,
    client: &'a GatewayClient,
    state: FormState,
    /// The last-displayed entity; exactly one is held at a time.
    snapshot: Option<Document>,
    /// Current input values, keyed by wire field name.
    values: BTreeMap<String, String>,
    /// Fields currently enabled for editing.
    enabled: BTreeSet<String>,
}

impl<'a> FormPresenter<'a> {
    pub fn new(module: &'a SportModule, client: &'a GatewayClient) -> Self {
        FormPresenter {
            module,
            client,
            state: FormState::Viewing,
            snapshot: None,
            values: BTreeMap::new(),
            enabled: BTreeSet::new(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// The actions currently on offer, the way a page toggles its action
    /// links' visibility per state.
    pub fn available_actions(&self) -> &'static [&'static str] {
        match self.state {
            FormState::Viewing => &["edit", "edit-name"],
            FormState::Editing => &["save", "cancel"],
        }
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn is_enabled(&self, field: &str) -> bool {
        self.enabled.contains(field)
    }

    /// Renders an already-fetched document and installs it as the
    /// snapshot. Inputs start disabled.
    pub fn show_document(
        &mut self,
        document: Document,
        region: &mut dyn ContentRegion,
    ) -> Result<(), ClientError> {
        let entity = Entity {
            id: &document.ref_id,
            data: &document.data,
        };
        let html = self.module.form.render_row(&entity)?;

        let mut values = BTreeMap::new();
        for spec in &self.module.fields {
            values.insert(
                spec.field.clone(),
                display_field(&entity, &spec.field, spec.kind)?,
            );
        }

        region.update(
            &format!("Show one athlete ({})", self.module.display_name),
            &html,
        );
        self.values = values;
        self.snapshot = Some(document);
        self.state = FormState::Viewing;
        self.enabled.clear();
        Ok(())
    }

    /// Fetches one entity by id and shows it.
    pub async fn show(
        &mut self,
        id: &str,
        region: &mut dyn ContentRegion,
        history: &mut ActionHistory,
    ) -> Result<(), ClientError> {
        history.record(format!("Showed athlete ({})", self.module.name));
        let document = self.client.fetch_one(&self.module.prefix, id).await?;
        self.show_document(document, region)
    }

    /// Viewing → Editing, enabling the module's editable field set.
    pub fn edit(&mut self) -> Result<(), ClientError> {
        if self.snapshot.is_none() {
            return Err(ClientError::NothingDisplayed);
        }
        self.state = FormState::Editing;
        self.enabled = self
            .module
            .editable_fields()
            .map(|f| f.field.clone())
            .collect();
        Ok(())
    }

    /// Viewing → Editing, enabling only the name field.
    pub fn edit_name(&mut self) -> Result<(), ClientError> {
        if self.snapshot.is_none() {
            return Err(ClientError::NothingDisplayed);
        }
        self.state = FormState::Editing;
        self.enabled = std::iter::once("nombre".to_string()).collect();
        Ok(())
    }

    /// Changes one input. Only enabled fields accept changes.
    pub fn set_value(&mut self, field: &str, value: &str) -> Result<(), ClientError> {
        if self.state != FormState::Editing || !self.enabled.contains(field) {
            return Err(ClientError::NotEditable(field.to_string()));
        }
        self.values.insert(field.to_string(), value.to_string());
        Ok(())
    }

    /// Editing → Viewing, restoring from the snapshot slot.
    pub fn cancel(
        &mut self,
        region: &mut dyn ContentRegion,
        history: &mut ActionHistory,
    ) -> Result<(), ClientError> {
        history.record(format!("Cancelled edit ({})", self.module.name));
        let snapshot = self.snapshot.take().ok_or(ClientError::NothingDisplayed)?;
        self.show_document(snapshot, region)
    }

    /// The outgoing `setTodo` body: the id under the sport's id key plus
    /// every form field's current string value.
    pub fn save_body(&self) -> Result<Value, ClientError> {
        let snapshot = self.snapshot.as_ref().ok_or(ClientError::NothingDisplayed)?;
        let mut body = Map::new();
        body.insert(
            self.module.id_field.clone(),
            Value::String(snapshot.ref_id.clone()),
        );
        for spec in &self.module.fields {
            let value = self.values.get(&spec.field).cloned().unwrap_or_default();
            body.insert(spec.field.clone(), Value::String(value));
        }
        Ok(Value::Object(body))
    }

    /// Editing → Viewing. POSTs the serialized form, then re-fetches and
    /// re-renders the entity regardless of what the save returned.
    pub async fn save(
        &mut self,
        region: &mut dyn ContentRegion,
        history: &mut ActionHistory,
    ) -> Result<(), ClientError> {
        history.record(format!("Saved athlete ({})", self.module.name));
        let body = self.save_body()?;
        let id = {
            let snapshot = self.snapshot.as_ref().ok_or(ClientError::NothingDisplayed)?;
            snapshot.ref_id.clone()
        };
        self.client.save(&self.module.prefix, &body).await?;
        let document = self.client.fetch_one(&self.module.prefix, &id).await?;
        self.show_document(document, region)
    }
}
