//! Client for communicating with the VNFSvc API
//!
//! `VnfSvcApi` is the capability injected into every resource adapter. It
//! exposes one method per remote operation; bodies are JSON objects keyed
//! by the resource kind (`{"vnf": {...}}`). `HttpVnfSvcClient` is the
//! production implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};
use tracing::debug;

use vnfsvc_common::{Error, ResourceKind, Result};

use crate::config::ProviderConfig;

/// Request or response body
pub type Body = Map<String, Value>;

/// Remote VNFSvc operations
#[async_trait]
pub trait VnfSvcApi: Send + Sync {
    // Service operations

    async fn create_service(&self, body: Body) -> Result<Body>;
    async fn update_service(&self, id: &str, body: Body) -> Result<Body>;
    async fn delete_service(&self, id: &str) -> Result<()>;
    async fn show_service(&self, id: &str) -> Result<Body>;

    // VNF operations

    async fn create_vnf(&self, body: Body) -> Result<Body>;
    async fn update_vnf(&self, id: &str, body: Body) -> Result<Body>;
    async fn delete_vnf(&self, id: &str) -> Result<()>;
    async fn show_vnf(&self, id: &str) -> Result<Body>;

    // VNF template operations

    async fn create_vnf_template(&self, body: Body) -> Result<Body>;
    async fn update_vnf_template(&self, id: &str, body: Body) -> Result<Body>;
    async fn delete_vnf_template(&self, id: &str) -> Result<()>;
    async fn show_vnf_template(&self, id: &str) -> Result<Body>;
}

/// JSON-over-HTTP client for the VNFSvc API
#[derive(Debug, Clone)]
pub struct HttpVnfSvcClient {
    http: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl HttpVnfSvcClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        if config.endpoint.is_empty() {
            return Err(Error::InvalidConfig("endpoint must not be empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::InvalidConfig(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/v1.0/{}", self.endpoint, kind.collection())
    }

    fn member_url(&self, kind: ResourceKind, id: &str) -> String {
        format!("{}/{}", self.collection_url(kind), id)
    }

    async fn send(
        &self,
        kind: ResourceKind,
        method: Method,
        url: String,
        id: Option<&str>,
        body: Option<&Body>,
    ) -> Result<Body> {
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header("Accept", "application/json");
        if let Some(token) = &self.auth_token {
            request = request.header("X-Auth-Token", token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                kind: kind.to_string(),
                id: id.unwrap_or_default().to_string(),
            });
        }
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Body::new());
        }
        match serde_json::from_str::<Value>(&text)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::Internal(format!(
                "expected JSON object from {}, got {}",
                url, other
            ))),
        }
    }

    async fn create(&self, kind: ResourceKind, body: Body) -> Result<Body> {
        self.send(kind, Method::POST, self.collection_url(kind), None, Some(&body))
            .await
    }

    async fn update(&self, kind: ResourceKind, id: &str, body: Body) -> Result<Body> {
        self.send(kind, Method::PUT, self.member_url(kind, id), Some(id), Some(&body))
            .await
    }

    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<()> {
        self.send(kind, Method::DELETE, self.member_url(kind, id), Some(id), None)
            .await?;
        Ok(())
    }

    async fn show(&self, kind: ResourceKind, id: &str) -> Result<Body> {
        self.send(kind, Method::GET, self.member_url(kind, id), Some(id), None)
            .await
    }
}

#[async_trait]
impl VnfSvcApi for HttpVnfSvcClient {
    async fn create_service(&self, body: Body) -> Result<Body> {
        self.create(ResourceKind::Service, body).await
    }

    async fn update_service(&self, id: &str, body: Body) -> Result<Body> {
        self.update(ResourceKind::Service, id, body).await
    }

    async fn delete_service(&self, id: &str) -> Result<()> {
        self.delete(ResourceKind::Service, id).await
    }

    async fn show_service(&self, id: &str) -> Result<Body> {
        self.show(ResourceKind::Service, id).await
    }

    async fn create_vnf(&self, body: Body) -> Result<Body> {
        self.create(ResourceKind::Vnf, body).await
    }

    async fn update_vnf(&self, id: &str, body: Body) -> Result<Body> {
        self.update(ResourceKind::Vnf, id, body).await
    }

    async fn delete_vnf(&self, id: &str) -> Result<()> {
        self.delete(ResourceKind::Vnf, id).await
    }

    async fn show_vnf(&self, id: &str) -> Result<Body> {
        self.show(ResourceKind::Vnf, id).await
    }

    async fn create_vnf_template(&self, body: Body) -> Result<Body> {
        self.create(ResourceKind::VnfTemplate, body).await
    }

    async fn update_vnf_template(&self, id: &str, body: Body) -> Result<Body> {
        self.update(ResourceKind::VnfTemplate, id, body).await
    }

    async fn delete_vnf_template(&self, id: &str) -> Result<()> {
        self.delete(ResourceKind::VnfTemplate, id).await
    }

    async fn show_vnf_template(&self, id: &str) -> Result<Body> {
        self.show(ResourceKind::VnfTemplate, id).await
    }
}
