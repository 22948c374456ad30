//! VNFSvc Resource Provider
//!
//! Orchestration resource adapters for the VNFSvc API: services, VNFs and
//! VNF templates, each driven through an injected [`client::VnfSvcApi`].

pub mod adapter;
pub mod client;
pub mod config;
pub mod provider;
pub mod registry;
pub mod resources;
pub mod schema;
pub mod state;

pub use adapter::{DeleteOutcome, ResourceAdapter};
pub use client::{Body, HttpVnfSvcClient, VnfSvcApi};
pub use config::{DeletePolicy, ProviderConfig};
pub use provider::VnfSvcProvider;
pub use registry::ResourceRegistry;
pub use resources::ResourceDefinition;
pub use schema::{AttributeSchema, Properties, PropertiesSchema, PropertySchema};
pub use state::ResourceState;
