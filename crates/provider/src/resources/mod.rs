//! Resource Definitions
//!
//! Per-kind configuration for the generic adapter: schemas, payload shape,
//! identifier extraction and which client operations to call.

pub mod service;
pub mod vnf;
pub mod vnf_template;

use async_trait::async_trait;
use serde_json::Value;

use vnfsvc_common::{Error, ResourceKind, Result};

use crate::client::{Body, VnfSvcApi};
use crate::schema::{AttributeSchema, Properties, PropertiesSchema};
use crate::state::get_string_attr;

pub use service::ServiceResource;
pub use vnf::VnfResource;
pub use vnf_template::VnfTemplateResource;

/// Trait for resource kinds
#[async_trait]
pub trait ResourceDefinition: Send + Sync {
    fn kind(&self) -> ResourceKind;

    fn properties_schema(&self) -> &PropertiesSchema;

    fn attributes_schema(&self) -> &AttributeSchema;

    /// Whether a successful delete must be confirmed by polling
    fn confirms_delete(&self) -> bool {
        false
    }

    /// Request body holding exactly the declared properties.
    ///
    /// Absent optional properties are sent as `null`.
    fn build_payload(&self, props: &Properties) -> Body {
        let mut inner = Body::new();
        for prop in self.properties_schema().iter() {
            let value = props.get(prop.name).cloned().unwrap_or(Value::Null);
            inner.insert(prop.name.to_string(), value);
        }
        wrap(self.kind(), inner)
    }

    /// Identifier of a freshly created resource.
    ///
    /// `created` is the unwrapped response body. `Ok(None)` means the kind
    /// deliberately stores no identifier for this response.
    fn extract_id(&self, _props: &Properties, created: &Body) -> Result<Option<String>> {
        required_id(self.kind(), created, "id").map(Some)
    }

    async fn create_remote(&self, client: &dyn VnfSvcApi, body: Body) -> Result<Body>;

    async fn update_remote(&self, client: &dyn VnfSvcApi, id: &str, body: Body) -> Result<()>;

    async fn delete_remote(&self, client: &dyn VnfSvcApi, id: &str) -> Result<()>;

    async fn show_remote(&self, client: &dyn VnfSvcApi, id: &str) -> Result<Body>;
}

/// Wrap `inner` under the kind's body key
pub fn wrap(kind: ResourceKind, inner: Body) -> Body {
    let mut body = Body::new();
    body.insert(kind.body_key().to_string(), Value::Object(inner));
    body
}

/// Take the object stored under the kind's body key
pub fn unwrap(kind: ResourceKind, mut body: Body) -> Result<Body> {
    match body.remove(kind.body_key()) {
        Some(Value::Object(inner)) => Ok(inner),
        _ => Err(Error::Internal(format!(
            "response has no '{}' object",
            kind.body_key()
        ))),
    }
}

pub(crate) fn required_id(kind: ResourceKind, body: &Body, key: &str) -> Result<String> {
    get_string_attr(body, key).ok_or_else(|| Error::MissingIdentifier {
        kind: kind.to_string(),
    })
}
