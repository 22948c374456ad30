//! Resource State
//!
//! The persisted view of one resource instance. The host engine stores it
//! between lifecycle calls and hands it back to restore an adapter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use vnfsvc_common::Lifecycle;

use crate::client::Body;
use crate::schema::Properties;

/// Persistable state of a resource instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Resource type name, e.g. `OS::VNFSvc::VNF`
    pub type_name: String,
    /// Logical name from the template
    pub name: String,
    /// Unique name derived from the logical name
    pub physical_name: String,
    #[serde(default)]
    pub lifecycle: Lifecycle,
    /// Identifier assigned by the remote service
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub properties: Properties,
}

impl ResourceState {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, properties: Properties) -> Self {
        let name = name.into();
        let physical_name = physical_name(&name);
        Self {
            type_name: type_name.into(),
            name,
            physical_name,
            lifecycle: Lifecycle::Uncreated,
            resource_id: None,
            properties,
        }
    }

    pub fn with_physical_name(mut self, physical_name: impl Into<String>) -> Self {
        self.physical_name = physical_name.into();
        self
    }

    /// Decode state previously produced by [`ResourceState::to_json`]
    pub fn from_json(data: &[u8]) -> vnfsvc_common::Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn to_json(&self) -> vnfsvc_common::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Unique physical name for a logical resource name
pub fn physical_name(name: &str) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", name, &suffix[..12])
}

/// Helper to extract a string attribute from a body
pub fn get_string_attr(body: &Body, key: &str) -> Option<String> {
    body.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Helper to extract a nested object from a body
pub fn get_object_attr<'a>(body: &'a Body, key: &str) -> Option<&'a Body> {
    body.get(key).and_then(|v| v.as_object())
}

/// Copy of `body` with credentials blanked, for logging
pub fn redacted(body: &Body) -> Value {
    let mut value = Value::Object(body.clone());
    redact_in_place(&mut value);
    value
}

fn redact_in_place(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map.iter_mut() {
                if key == "password" {
                    *v = Value::String("***".to_string());
                } else {
                    redact_in_place(v);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_in_place),
        _ => {}
    }
}
