//! Resource type registry

use std::collections::BTreeMap;
use std::sync::Arc;

use vnfsvc_common::{Error, Result};

use crate::resources::{ResourceDefinition, ServiceResource, VnfResource, VnfTemplateResource};

/// Maps template-facing type names to resource definitions
#[derive(Default, Clone)]
pub struct ResourceRegistry {
    definitions: BTreeMap<String, Arc<dyn ResourceDefinition>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the Service, VNF and VNF template kinds
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let defaults: [Arc<dyn ResourceDefinition>; 3] = [
            Arc::new(VnfResource::new()),
            Arc::new(VnfTemplateResource::new()),
            Arc::new(ServiceResource::new()),
        ];
        for definition in defaults {
            let type_name = definition.kind().type_name();
            // names are distinct constants
            let _ = registry.register(type_name, definition);
        }
        registry
    }

    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        definition: Arc<dyn ResourceDefinition>,
    ) -> Result<()> {
        let type_name = type_name.into();
        if self.definitions.contains_key(&type_name) {
            return Err(Error::AlreadyExists {
                kind: "resource type".to_string(),
                id: type_name,
            });
        }
        self.definitions.insert(type_name, definition);
        Ok(())
    }

    pub fn get(&self, type_name: &str) -> Result<Arc<dyn ResourceDefinition>> {
        self.definitions
            .get(type_name)
            .cloned()
            .ok_or_else(|| Error::UnknownResourceType(type_name.to_string()))
    }

    /// Registered type names, sorted
    pub fn type_names(&self) -> Vec<&str> {
        self.definitions.keys().map(|k| k.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn ResourceDefinition>)> {
        self.definitions.iter().map(|(k, v)| (k.as_str(), v))
    }
}
