//! Property and attribute schemas
//!
//! Each resource kind declares an ordered list of properties and a set of
//! readable attributes. Schemas are built once and never change afterwards.

use serde::Serialize;
use serde_json::{Map, Value};

use vnfsvc_common::{Error, PropertyType, Result};

/// Property values supplied by the host engine
pub type Properties = Map<String, Value>;

/// A single declared property
#[derive(Debug, Clone, Serialize)]
pub struct PropertySchema {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub description: &'static str,
    pub required: bool,
    pub update_allowed: bool,
}

impl PropertySchema {
    pub fn new(name: &'static str, property_type: PropertyType, description: &'static str) -> Self {
        Self {
            name,
            property_type,
            description,
            required: false,
            update_allowed: false,
        }
    }

    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, PropertyType::String, description)
    }

    pub fn map(name: &'static str, description: &'static str) -> Self {
        Self::new(name, PropertyType::Map, description)
    }

    pub fn list(name: &'static str, description: &'static str) -> Self {
        Self::new(name, PropertyType::List, description)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn update_allowed(mut self) -> Self {
        self.update_allowed = true;
        self
    }

    fn check_type(&self, value: &Value) -> Result<()> {
        if value.is_null() || self.property_type.matches(value) {
            return Ok(());
        }
        Err(Error::invalid_property(
            self.name,
            format!("expected {}", self.property_type),
        ))
    }
}

/// Ordered property schema for one resource kind
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PropertiesSchema {
    properties: Vec<PropertySchema>,
}

impl PropertiesSchema {
    pub fn new(properties: Vec<PropertySchema>) -> Self {
        Self { properties }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertySchema> {
        self.properties.iter()
    }

    pub fn get(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Declared property names in declaration order
    pub fn keys(&self) -> Vec<&'static str> {
        self.properties.iter().map(|p| p.name).collect()
    }

    /// Validate a complete property set before create.
    pub fn validate(&self, props: &Properties) -> Result<()> {
        for key in props.keys() {
            if !self.contains(key) {
                return Err(Error::invalid_property(key, "unknown property"));
            }
        }

        for prop in &self.properties {
            match props.get(prop.name) {
                Some(value) if !value.is_null() => prop.check_type(value)?,
                _ if prop.required => {
                    return Err(Error::invalid_property(
                        prop.name,
                        "required property is missing",
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Validate a sparse update diff.
    pub fn validate_update(&self, diff: &Properties) -> Result<()> {
        for (key, value) in diff {
            let prop = self
                .get(key)
                .ok_or_else(|| Error::invalid_property(key, "unknown property"))?;
            if !prop.update_allowed {
                return Err(Error::invalid_property(key, "property cannot be updated"));
            }
            if value.is_null() && prop.required {
                return Err(Error::invalid_property(key, "required property cannot be unset"));
            }
            prop.check_type(value)?;
        }
        Ok(())
    }

    /// Changed declared properties between two property sets.
    ///
    /// A key present in `old` but absent from `new` maps to `null`.
    pub fn diff(&self, old: &Properties, new: &Properties) -> Properties {
        let mut changed = Properties::new();
        for prop in &self.properties {
            let before = old.get(prop.name).unwrap_or(&Value::Null);
            let after = new.get(prop.name).unwrap_or(&Value::Null);
            if before != after {
                changed.insert(prop.name.to_string(), after.clone());
            }
        }
        changed
    }
}

/// Readable attributes, name to description
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AttributeSchema {
    attributes: Vec<(&'static str, &'static str)>,
}

impl AttributeSchema {
    pub fn new(attributes: Vec<(&'static str, &'static str)>) -> Self {
        Self { attributes }
    }

    pub fn description(&self, name: &str) -> Option<&'static str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, d)| *d)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.description(name).is_some()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.attributes.iter().map(|(n, _)| *n).collect()
    }
}
