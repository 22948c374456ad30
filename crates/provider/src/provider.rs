//! VNFSvc Provider
//!
//! Ties the registry, the client and the configuration together. The host
//! engine asks the provider for adapters by type name.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use tracing::{debug, info};

use vnfsvc_common::{Error, Result};

use crate::adapter::ResourceAdapter;
use crate::client::{HttpVnfSvcClient, VnfSvcApi};
use crate::config::ProviderConfig;
use crate::registry::ResourceRegistry;
use crate::schema::Properties;
use crate::state::ResourceState;

/// VNFSvc resource provider
pub struct VnfSvcProvider {
    registry: ResourceRegistry,
    client: Arc<dyn VnfSvcApi>,
    config: ProviderConfig,
}

impl VnfSvcProvider {
    /// Provider talking HTTP to the configured endpoint
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = HttpVnfSvcClient::new(&config)?;
        info!("Using VNFSvc endpoint {}", client.endpoint());
        Ok(Self::with_client(
            ResourceRegistry::with_defaults(),
            Arc::new(client),
            config,
        ))
    }

    pub fn with_client(
        registry: ResourceRegistry,
        client: Arc<dyn VnfSvcApi>,
        config: ProviderConfig,
    ) -> Self {
        Self {
            registry,
            client,
            config,
        }
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Adapter for a new resource; properties are validated first
    pub fn adapter(
        &self,
        type_name: &str,
        name: &str,
        properties: Properties,
    ) -> Result<ResourceAdapter> {
        let definition = self.registry.get(type_name)?;
        definition.properties_schema().validate(&properties)?;
        debug!("Instantiating {} {}", type_name, name);

        let state = ResourceState::new(type_name, name, properties);
        Ok(ResourceAdapter::new(definition, self.client.clone(), state))
    }

    /// Adapter for a resource the host already tracks
    pub fn restore(&self, state: ResourceState) -> Result<ResourceAdapter> {
        let definition = self.registry.get(&state.type_name)?;
        Ok(ResourceAdapter::new(definition, self.client.clone(), state))
    }

    /// Adapter addressing an existing remote object by id only
    pub fn import(&self, type_name: &str, id: &str) -> Result<ResourceAdapter> {
        if id.is_empty() {
            return Err(Error::MissingIdentifier {
                kind: type_name.to_string(),
            });
        }
        let mut state = ResourceState::new(type_name, id, Properties::new());
        state.lifecycle = vnfsvc_common::Lifecycle::Created;
        state.resource_id = Some(id.to_string());
        self.restore(state)
    }

    /// Schema document for every registered type
    pub fn provider_schema(&self) -> Value {
        let mut resources = Map::new();
        for (type_name, definition) in self.registry.iter() {
            resources.insert(type_name.to_string(), resource_schema(definition.as_ref()));
        }
        json!({
            "version": vnfsvc_common::VERSION,
            "resource_schemas": resources,
        })
    }

    /// Schema document for one type
    pub fn resource_schema(&self, type_name: &str) -> Result<Value> {
        let definition = self.registry.get(type_name)?;
        Ok(resource_schema(definition.as_ref()))
    }
}

fn resource_schema(definition: &dyn crate::resources::ResourceDefinition) -> Value {
    let attributes: Map<String, Value> = definition
        .attributes_schema()
        .names()
        .into_iter()
        .map(|name| {
            let description = definition.attributes_schema().description(name).unwrap_or("");
            (name.to_string(), Value::String(description.to_string()))
        })
        .collect();

    json!({
        "kind": definition.kind(),
        "properties": definition.properties_schema(),
        "attributes": attributes,
    })
}
