//! In-memory VNFSvc API used by the lifecycle tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use vnfsvc_common::{Error, ResourceKind, Result};
use vnfsvc_provider::{Body, VnfSvcApi};

/// One recorded remote call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(ResourceKind, Value),
    Update(ResourceKind, String, Value),
    Delete(ResourceKind, String),
    Show(ResourceKind, String),
}

#[derive(Default)]
pub struct FakeVnfSvc {
    calls: Mutex<Vec<Call>>,
    objects: Mutex<HashMap<(ResourceKind, String), Body>>,
    /// Objects still visible to `show` after delete, with remaining probes
    lingering: Mutex<HashMap<(ResourceKind, String), u32>>,
    create_response: Mutex<Option<Body>>,
    failure: Mutex<Option<u16>>,
    linger_probes: Mutex<u32>,
    next_id: Mutex<u32>,
}

impl FakeVnfSvc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Return this inner body (wrapped under the kind key) from the next create
    pub fn respond_to_create_with(&self, inner: Value) {
        *self.create_response.lock().unwrap() = inner.as_object().cloned();
    }

    /// Fail every call with this HTTP-like status
    pub fn fail_with(&self, status: u16) {
        *self.failure.lock().unwrap() = Some(status);
    }

    /// Keep deleted objects visible for this many show probes
    pub fn linger_after_delete(&self, probes: u32) {
        *self.linger_probes.lock().unwrap() = probes;
    }

    pub fn insert(&self, kind: ResourceKind, id: &str, inner: Value) {
        self.objects
            .lock()
            .unwrap()
            .insert((kind, id.to_string()), inner.as_object().cloned().unwrap());
    }

    pub fn remove(&self, kind: ResourceKind, id: &str) {
        self.objects.lock().unwrap().remove(&(kind, id.to_string()));
    }

    pub fn contains(&self, kind: ResourceKind, id: &str) -> bool {
        self.objects
            .lock()
            .unwrap()
            .contains_key(&(kind, id.to_string()))
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match *self.failure.lock().unwrap() {
            Some(status) => Err(Error::Api {
                status,
                message: "injected failure".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn not_found(kind: ResourceKind, id: &str) -> Error {
        Error::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }

    fn wrap(kind: ResourceKind, inner: Body) -> Body {
        vnfsvc_provider::resources::wrap(kind, inner)
    }

    fn create(&self, kind: ResourceKind, body: Body) -> Result<Body> {
        self.record(Call::Create(kind, Value::Object(body.clone())))?;

        if let Some(inner) = self.create_response.lock().unwrap().take() {
            return Ok(Self::wrap(kind, inner));
        }

        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let id = format!("{}-{}", kind.body_key(), *next);

        let mut inner = body
            .get(kind.body_key())
            .and_then(|v| v.as_object())
            .cloned()
            .unwrap_or_default();
        inner.insert("id".to_string(), Value::String(id.clone()));
        self.objects
            .lock()
            .unwrap()
            .insert((kind, id), inner.clone());
        Ok(Self::wrap(kind, inner))
    }

    fn update(&self, kind: ResourceKind, id: &str, body: Body) -> Result<Body> {
        self.record(Call::Update(kind, id.to_string(), Value::Object(body.clone())))?;

        let mut objects = self.objects.lock().unwrap();
        let inner = objects
            .get_mut(&(kind, id.to_string()))
            .ok_or_else(|| Self::not_found(kind, id))?;
        if let Some(Value::Object(diff)) = body.get(kind.body_key()) {
            for (k, v) in diff {
                inner.insert(k.clone(), v.clone());
            }
        }
        Ok(Self::wrap(kind, inner.clone()))
    }

    fn delete(&self, kind: ResourceKind, id: &str) -> Result<()> {
        self.record(Call::Delete(kind, id.to_string()))?;

        let removed = self.objects.lock().unwrap().remove(&(kind, id.to_string()));
        if removed.is_none() {
            return Err(Self::not_found(kind, id));
        }
        let probes = *self.linger_probes.lock().unwrap();
        if probes > 0 {
            self.lingering
                .lock()
                .unwrap()
                .insert((kind, id.to_string()), probes);
        }
        Ok(())
    }

    fn show(&self, kind: ResourceKind, id: &str) -> Result<Body> {
        self.record(Call::Show(kind, id.to_string()))?;

        let key = (kind, id.to_string());
        if let Some(inner) = self.objects.lock().unwrap().get(&key) {
            return Ok(Self::wrap(kind, inner.clone()));
        }

        let mut lingering = self.lingering.lock().unwrap();
        if let Some(remaining) = lingering.get_mut(&key) {
            if *remaining > 0 {
                *remaining -= 1;
                return Ok(Self::wrap(kind, json!({"id": id, "status": "PENDING_DELETE"})
                    .as_object()
                    .cloned()
                    .unwrap()));
            }
        }
        Err(Self::not_found(kind, id))
    }
}

#[async_trait]
impl VnfSvcApi for FakeVnfSvc {
    async fn create_service(&self, body: Body) -> Result<Body> {
        self.create(ResourceKind::Service, body)
    }

    async fn update_service(&self, id: &str, body: Body) -> Result<Body> {
        self.update(ResourceKind::Service, id, body)
    }

    async fn delete_service(&self, id: &str) -> Result<()> {
        self.delete(ResourceKind::Service, id)
    }

    async fn show_service(&self, id: &str) -> Result<Body> {
        self.show(ResourceKind::Service, id)
    }

    async fn create_vnf(&self, body: Body) -> Result<Body> {
        self.create(ResourceKind::Vnf, body)
    }

    async fn update_vnf(&self, id: &str, body: Body) -> Result<Body> {
        self.update(ResourceKind::Vnf, id, body)
    }

    async fn delete_vnf(&self, id: &str) -> Result<()> {
        self.delete(ResourceKind::Vnf, id)
    }

    async fn show_vnf(&self, id: &str) -> Result<Body> {
        self.show(ResourceKind::Vnf, id)
    }

    async fn create_vnf_template(&self, body: Body) -> Result<Body> {
        self.create(ResourceKind::VnfTemplate, body)
    }

    async fn update_vnf_template(&self, id: &str, body: Body) -> Result<Body> {
        self.update(ResourceKind::VnfTemplate, id, body)
    }

    async fn delete_vnf_template(&self, id: &str) -> Result<()> {
        self.delete(ResourceKind::VnfTemplate, id)
    }

    async fn show_vnf_template(&self, id: &str) -> Result<Body> {
        self.show(ResourceKind::VnfTemplate, id)
    }
}
