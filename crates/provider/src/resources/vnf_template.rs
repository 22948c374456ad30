//! VNF template resource

use async_trait::async_trait;
use tracing::warn;

use vnfsvc_common::{ResourceKind, Result};

use super::{required_id, ResourceDefinition};
use crate::client::{Body, VnfSvcApi};
use crate::schema::{AttributeSchema, Properties, PropertiesSchema, PropertySchema};
use crate::state::get_object_attr;

/// Service types whose templates are backed by a device template
pub const DEVICE_SERVICE_TYPES: [&str; 3] = ["firewall", "router", "loadbalancer"];

/// Where the identifier of a created template comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateIdSource {
    /// Top-level `id` of the template
    TopLevel,
    /// `device_template.id`
    DeviceTemplate,
    /// Router and load balancer templates record no identifier
    None,
}

impl TemplateIdSource {
    pub fn for_service_type(service_type: Option<&str>) -> Self {
        match service_type {
            Some(t) if DEVICE_SERVICE_TYPES.contains(&t) => match t {
                "router" | "loadbalancer" => TemplateIdSource::None,
                _ => TemplateIdSource::DeviceTemplate,
            },
            _ => TemplateIdSource::TopLevel,
        }
    }
}

pub struct VnfTemplateResource {
    properties: PropertiesSchema,
    attributes: AttributeSchema,
}

impl VnfTemplateResource {
    pub fn new() -> Self {
        Self {
            properties: PropertiesSchema::new(vec![
                PropertySchema::string("name", "Name for the vnf template.").update_allowed(),
                PropertySchema::string("description", "Description for the vnf template.")
                    .update_allowed(),
                PropertySchema::string("service_type", "Service type for the vnf template.")
                    .update_allowed(),
                PropertySchema::string("mgmt_driver", "Management driver name for the vnf template.")
                    .update_allowed(),
                PropertySchema::map("attributes", "Set service types for the vnf template.")
                    .update_allowed(),
            ]),
            // Published attribute is `attribute`, not `attributes`.
            attributes: AttributeSchema::new(vec![
                ("name", "Name for the vnf template."),
                ("description", "Description of the vnf template."),
                ("service_type", "Service type for vnf template."),
                ("mgmt_driver", "Management driver for this vnf template."),
                ("attribute", "Service types for vnf template."),
            ]),
        }
    }
}

impl Default for VnfTemplateResource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceDefinition for VnfTemplateResource {
    fn kind(&self) -> ResourceKind {
        ResourceKind::VnfTemplate
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

    fn extract_id(&self, props: &Properties, created: &Body) -> Result<Option<String>> {
        let service_type = props.get("service_type").and_then(|v| v.as_str());

        match TemplateIdSource::for_service_type(service_type) {
            TemplateIdSource::TopLevel => required_id(self.kind(), created, "id").map(Some),
            TemplateIdSource::DeviceTemplate => {
                let device_template = get_object_attr(created, "device_template")
                    .ok_or_else(|| vnfsvc_common::Error::MissingIdentifier {
                        kind: self.kind().to_string(),
                    })?;
                required_id(self.kind(), device_template, "id").map(Some)
            }
            TemplateIdSource::None => {
                warn!(
                    "vnf_template with service_type {:?} created without a resource id",
                    service_type
                );
                Ok(None)
            }
        }
    }

    async fn create_remote(&self, client: &dyn VnfSvcApi, body: Body) -> Result<Body> {
        client.create_vnf_template(body).await
    }

    async fn update_remote(&self, client: &dyn VnfSvcApi, id: &str, body: Body) -> Result<()> {
        client.update_vnf_template(id, body).await?;
        Ok(())
    }

    async fn delete_remote(&self, client: &dyn VnfSvcApi, id: &str) -> Result<()> {
        client.delete_vnf_template(id).await
    }

    async fn show_remote(&self, client: &dyn VnfSvcApi, id: &str) -> Result<Body> {
        client.show_vnf_template(id).await
    }
}
