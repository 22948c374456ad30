//! Service resource

use async_trait::async_trait;

use vnfsvc_common::{ResourceKind, Result};

use super::ResourceDefinition;
use crate::client::{Body, VnfSvcApi};
use crate::schema::{AttributeSchema, PropertiesSchema, PropertySchema};

/// A VNFSvc service, e.g. a firewall service with a QoS level
pub struct ServiceResource {
    properties: PropertiesSchema,
    attributes: AttributeSchema,
}

impl ServiceResource {
    pub fn new() -> Self {
        Self {
            properties: PropertiesSchema::new(vec![
                PropertySchema::string("name", "Service name to create the cluster")
                    .required()
                    .update_allowed(),
                PropertySchema::string("description", "Description of the service")
                    .required()
                    .update_allowed(),
                PropertySchema::string("quality_of_service", "Quality of service")
                    .required()
                    .update_allowed(),
                PropertySchema::map("attributes", "Attributes")
                    .required()
                    .update_allowed(),
            ]),
            attributes: AttributeSchema::new(vec![
                ("name", "Name of service"),
                ("description", "Description of the service"),
                ("quality_of_service", "Quality of service"),
                ("attributes", "Attributes"),
            ]),
        }
    }
}

impl Default for ServiceResource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceDefinition for ServiceResource {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Service
    }

    fn properties_schema(&self) -> &PropertiesSchema {
        &self.properties
    }

    fn attributes_schema(&self) -> &AttributeSchema {
        &self.attributes
    }

    async fn create_remote(&self, client: &dyn VnfSvcApi, body: Body) -> Result<Body> {
        client.create_service(body).await
    }

    async fn update_remote(&self, client: &dyn VnfSvcApi, id: &str, body: Body) -> Result<()> {
        client.update_service(id, body).await?;
        Ok(())
    }

    async fn delete_remote(&self, client: &dyn VnfSvcApi, id: &str) -> Result<()> {
        client.delete_service(id).await
    }

    async fn show_remote(&self, client: &dyn VnfSvcApi, id: &str) -> Result<Body> {
        client.show_service(id).await
    }
}
