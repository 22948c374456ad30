//! VNF resource

use async_trait::async_trait;

use vnfsvc_common::{ResourceKind, Result};

use super::{required_id, ResourceDefinition};
use crate::client::{Body, VnfSvcApi};
use crate::schema::{AttributeSchema, Properties, PropertiesSchema, PropertySchema};
use crate::state::get_object_attr;

pub struct VnfResource {
    properties: PropertiesSchema,
    attributes: AttributeSchema,
}

impl VnfResource {
    pub fn new() -> Self {
        Self {
            properties: PropertiesSchema::new(vec![
                PropertySchema::string("template_id", "VNF template id to create vnf based on.")
                    .required()
                    .update_allowed(),
                PropertySchema::list("service_contexts", "Service context to insert service.")
                    .update_allowed(),
                PropertySchema::string("username", "Username to create vnf based on.")
                    .required()
                    .update_allowed(),
                PropertySchema::string("password", "Password to create vnf based on.")
                    .required()
                    .update_allowed(),
                PropertySchema::string("group_id", "Group id for a vnf group.")
                    .update_allowed(),
            ]),
            attributes: AttributeSchema::new(vec![
                ("template_id", "VNF template id to create vnf based on."),
                ("service_contexts", "Service context to insert service."),
                ("username", "Username to create vnf based on."),
                ("password", "Password to create vnf based on."),
                ("group_id", "Group id for a vnf group."),
            ]),
        }
    }
}

impl Default for VnfResource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceDefinition for VnfResource {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Vnf
    }

    fn properties_schema(&self) -> &PropertiesSchema {
        &self.properties
    }

    fn attributes_schema(&self) -> &AttributeSchema {
        &self.attributes
    }

    fn confirms_delete(&self) -> bool {
        true
    }

    /// Device-backed VNFs are addressed by their device id.
    fn extract_id(&self, _props: &Properties, created: &Body) -> Result<Option<String>> {
        let id = match get_object_attr(created, "device") {
            Some(device) => required_id(self.kind(), device, "id")?,
            None => required_id(self.kind(), created, "id")?,
        };
        Ok(Some(id))
    }

    async fn create_remote(&self, client: &dyn VnfSvcApi, body: Body) -> Result<Body> {
        client.create_vnf(body).await
    }

    async fn update_remote(&self, client: &dyn VnfSvcApi, id: &str, body: Body) -> Result<()> {
        client.update_vnf(id, body).await?;
        Ok(())
    }

    async fn delete_remote(&self, client: &dyn VnfSvcApi, id: &str) -> Result<()> {
        client.delete_vnf(id).await
    }

    async fn show_remote(&self, client: &dyn VnfSvcApi, id: &str) -> Result<Body> {
        client.show_vnf(id).await
    }
}
