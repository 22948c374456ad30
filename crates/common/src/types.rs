//! Core types for the VNFSvc provider

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kinds of objects managed through the VNFSvc API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Service,
    Vnf,
    VnfTemplate,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Service,
        ResourceKind::Vnf,
        ResourceKind::VnfTemplate,
    ];

    /// Key wrapping request and response bodies, e.g. `{"vnf": {...}}`
    pub fn body_key(&self) -> &'static str {
        match self {
            ResourceKind::Service => "service",
            ResourceKind::Vnf => "vnf",
            ResourceKind::VnfTemplate => "vnf_template",
        }
    }

    /// REST collection name
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceKind::Service => "services",
            ResourceKind::Vnf => "vnfs",
            ResourceKind::VnfTemplate => "vnf_templates",
        }
    }

    /// Template-facing resource type name
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceKind::Service => "OS::VNFSvc::Service",
            ResourceKind::Vnf => "OS::VNFSvc::VNF",
            ResourceKind::VnfTemplate => "OS::VNFSvc::VNFTemplate",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.type_name() == name)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.body_key())
    }
}

/// Property value types understood by the schema layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    String,
    Map,
    List,
}

impl PropertyType {
    /// Whether a non-null JSON value has this type
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            PropertyType::String => value.is_string(),
            PropertyType::Map => value.is_object(),
            PropertyType::List => value.is_array(),
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::String => write!(f, "string"),
            PropertyType::Map => write!(f, "map"),
            PropertyType::List => write!(f, "list"),
        }
    }
}

/// Lifecycle of a single resource instance.
///
/// Updates mutate a `Created` resource in place, so there is no separate
/// updated state. `Deleted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    Uncreated,
    Created,
    Deleted,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::Uncreated
    }
}

impl std::fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lifecycle::Uncreated => write!(f, "uncreated"),
            Lifecycle::Created => write!(f, "created"),
            Lifecycle::Deleted => write!(f, "deleted"),
        }
    }
}
