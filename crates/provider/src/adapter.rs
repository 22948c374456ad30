//! Resource Adapter
//!
//! Drives a [`ResourceDefinition`] against an injected [`VnfSvcApi`] for one
//! resource instance. The host engine decides when each operation runs; the
//! adapter only maps properties to requests and records the remote id.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use vnfsvc_common::{Error, Lifecycle, ResourceKind, Result};

use crate::client::{Body, VnfSvcApi};
use crate::config::DeletePolicy;
use crate::resources::{unwrap, wrap, ResourceDefinition};
use crate::schema::Properties;
use crate::state::{redacted, ResourceState};

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The remote service accepted the delete
    Deleted,
    /// The remote service had no such resource
    AlreadyAbsent,
    /// Accepted; the caller should confirm removal before moving on
    AwaitingConfirmation,
}

/// One resource instance bound to its definition and client
pub struct ResourceAdapter {
    definition: Arc<dyn ResourceDefinition>,
    client: Arc<dyn VnfSvcApi>,
    state: ResourceState,
}

impl ResourceAdapter {
    /// Bind a definition and a client to existing or fresh state
    pub fn new(
        definition: Arc<dyn ResourceDefinition>,
        client: Arc<dyn VnfSvcApi>,
        state: ResourceState,
    ) -> Self {
        Self {
            definition,
            client,
            state,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.definition.kind()
    }

    pub fn resource_id(&self) -> Option<&str> {
        self.state.resource_id.as_deref()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state.lifecycle
    }

    pub fn properties(&self) -> &Properties {
        &self.state.properties
    }

    pub fn state(&self) -> &ResourceState {
        &self.state
    }

    pub fn into_state(self) -> ResourceState {
        self.state
    }

    fn require_lifecycle(&self, expected: Lifecycle, to: &str) -> Result<()> {
        if self.state.lifecycle != expected {
            return Err(Error::InvalidStateTransition {
                from: self.state.lifecycle.to_string(),
                to: to.to_string(),
            });
        }
        Ok(())
    }

    fn require_id(&self) -> Result<&str> {
        self.resource_id().ok_or_else(|| Error::MissingIdentifier {
            kind: self.kind().to_string(),
        })
    }

    /// Supplied properties with `name` defaulted to the physical name
    fn prepared_properties(&self) -> Properties {
        let mut props = self.state.properties.clone();
        if self.definition.properties_schema().contains("name") {
            let missing = props.get("name").map_or(true, Value::is_null);
            if missing {
                props.insert(
                    "name".to_string(),
                    Value::String(self.state.physical_name.clone()),
                );
            }
        }
        props
    }

    /// Create the remote resource and record its identifier
    pub async fn create(&mut self) -> Result<Option<String>> {
        self.require_lifecycle(Lifecycle::Uncreated, "created")?;
        info!("Creating {} {}", self.state.type_name, self.state.physical_name);

        let props = self.prepared_properties();
        let payload = self.definition.build_payload(&props);
        debug!("Create payload: {}", redacted(&payload));

        let response = self
            .definition
            .create_remote(self.client.as_ref(), payload)
            .await?;
        let created = unwrap(self.kind(), response)?;
        let id = self.definition.extract_id(&props, &created)?;

        self.state.resource_id = id.clone();
        self.state.lifecycle = Lifecycle::Created;
        info!(
            "Created {} {} with id {:?}",
            self.state.type_name, self.state.physical_name, id
        );
        Ok(id)
    }

    /// Apply a property diff. Returns whether a remote call was made.
    pub async fn update(&mut self, diff: Properties) -> Result<bool> {
        if diff.is_empty() {
            debug!("Empty diff for {}, nothing to update", self.state.physical_name);
            return Ok(false);
        }
        self.require_lifecycle(Lifecycle::Created, "updated")?;
        let id = self.require_id()?.to_string();
        info!("Updating {} {}", self.state.type_name, id);

        let payload = wrap(self.kind(), diff.clone());
        debug!("Update payload: {}", redacted(&payload));
        self.definition
            .update_remote(self.client.as_ref(), &id, payload)
            .await?;

        for (key, value) in diff {
            if value.is_null() {
                self.state.properties.remove(&key);
            } else {
                self.state.properties.insert(key, value);
            }
        }
        Ok(true)
    }

    /// Delete the remote resource; a missing resource counts as deleted
    pub async fn delete(&mut self) -> Result<DeleteOutcome> {
        let Some(id) = self.state.resource_id.clone() else {
            debug!("{} has no resource id, nothing to delete", self.state.physical_name);
            self.state.lifecycle = Lifecycle::Deleted;
            return Ok(DeleteOutcome::Deleted);
        };
        info!("Deleting {} {}", self.state.type_name, id);

        let outcome = match self.definition.delete_remote(self.client.as_ref(), &id).await {
            Ok(()) if self.definition.confirms_delete() => DeleteOutcome::AwaitingConfirmation,
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) if e.is_not_found() => {
                warn!("{} {} already gone: {}", self.state.type_name, id, e);
                DeleteOutcome::AlreadyAbsent
            }
            Err(e) => return Err(e),
        };

        self.state.lifecycle = Lifecycle::Deleted;
        Ok(outcome)
    }

    /// Current remote representation; `None` when the service reports it empty
    pub async fn show(&self) -> Result<Option<Body>> {
        let Some(id) = self.resource_id() else {
            return Ok(None);
        };

        let response = self.definition.show_remote(self.client.as_ref(), id).await?;
        let inner = unwrap(self.kind(), response)?;
        if inner.is_empty() {
            return Ok(None);
        }
        Ok(Some(inner))
    }

    /// One probe for delete completion
    pub async fn check_delete_complete(&self) -> Result<bool> {
        match self.show().await {
            Ok(None) => Ok(true),
            Ok(Some(_)) => Ok(false),
            Err(e) if e.is_not_found() => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// Poll until the resource is gone or the policy is exhausted
    pub async fn wait_for_deletion(&self, policy: &DeletePolicy) -> Result<()> {
        for attempt in 0..policy.max_attempts {
            if self.check_delete_complete().await? {
                debug!(
                    "{} confirmed deleted after {} probe(s)",
                    self.state.physical_name,
                    attempt + 1
                );
                return Ok(());
            }
            tokio::time::sleep(policy.poll_interval()).await;
        }

        Err(Error::Timeout {
            seconds: policy.budget_secs(),
        })
    }

    /// Read one declared attribute from the remote representation
    pub async fn resolve_attribute(&self, name: &str) -> Result<Value> {
        if !self.definition.attributes_schema().contains(name) {
            return Err(Error::invalid_property(name, "unknown attribute"));
        }

        let value = self
            .show()
            .await?
            .and_then(|mut body| body.remove(name))
            .unwrap_or(Value::Null);
        Ok(value)
    }
}
