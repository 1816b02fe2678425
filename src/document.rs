//! Generic Document
//!
//! The loosely-typed, self-describing representation of a resource: a mapping
//! from string keys to JSON values. Keys are kept in lexicographic order, so
//! rendering a document is deterministic.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::meta::GroupVersionKind;
use crate::error::{Error, Result};
use crate::resource::shape::json_type_name;

/// A generic document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    object: Map<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(object: Map<String, Value>) -> Self {
        Self { object }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.object
    }

    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.object
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.object
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.object.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.object.insert(key.into(), value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.object.contains_key(key)
    }

    pub fn api_version(&self) -> Option<&str> {
        self.object.get("apiVersion").and_then(Value::as_str)
    }

    pub fn kind(&self) -> Option<&str> {
        self.object.get("kind").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get_path("metadata.name").and_then(Value::as_str)
    }

    pub fn namespace(&self) -> Option<&str> {
        self.get_path("metadata.namespace").and_then(Value::as_str)
    }

    /// Identity named by the document, if it names a kind.
    pub fn group_version_kind(&self) -> Option<GroupVersionKind> {
        let kind = self.kind().filter(|kind| !kind.is_empty())?;
        Some(GroupVersionKind::from_api_version(
            self.api_version().unwrap_or_default(),
            kind,
        ))
    }

    /// Look up a value by dot-notation path. Numeric segments index sequences.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.object.get(parts.next()?)?;

        for part in parts {
            current = match part.parse::<usize>() {
                Ok(idx) if current.is_array() => current.get(idx)?,
                _ => current.get(part)?,
            };
        }

        Some(current)
    }

    /// Parse a single JSON document.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::try_from(value)
    }

    /// Parse a single YAML document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(content)?;
        Self::try_from(value)
    }

    /// Parse a YAML stream of `---` separated documents. Empty documents are skipped.
    pub fn from_yaml_stream(content: &str) -> Result<Vec<Self>> {
        let mut documents = Vec::new();
        for part in serde_yaml::Deserializer::from_str(content) {
            let value = Value::deserialize(part)?;
            if value.is_null() {
                continue;
            }
            documents.push(Self::try_from(value)?);
        }
        Ok(documents)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.object)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.object)?)
    }
}

impl TryFrom<Value> for Document {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(object) => Ok(Self { object }),
            other => Err(Error::NotAnObject(json_type_name(&other))),
        }
    }
}

impl From<Map<String, Value>> for Document {
    fn from(object: Map<String, Value>) -> Self {
        Self { object }
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        Value::Object(document.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn machine() -> Document {
        Document::try_from(json!({
            "apiVersion": "vitistack.io/v1alpha1",
            "kind": "Machine",
            "metadata": {"name": "web-1", "namespace": "prod"},
            "spec": {"disks": [{"name": "root"}, {"name": "data"}]}
        }))
        .unwrap()
    }

    #[test]
    fn test_identity_accessors() {
        let doc = machine();
        assert_eq!(doc.api_version(), Some("vitistack.io/v1alpha1"));
        assert_eq!(doc.kind(), Some("Machine"));
        assert_eq!(doc.name(), Some("web-1"));
        assert_eq!(doc.namespace(), Some("prod"));
        assert_eq!(
            doc.group_version_kind(),
            Some(GroupVersionKind::new("vitistack.io", "v1alpha1", "Machine"))
        );
    }

    #[test]
    fn test_get_path_indexes_sequences() {
        let doc = machine();
        assert_eq!(doc.get_path("spec.disks.1.name"), Some(&json!("data")));
        assert_eq!(doc.get_path("spec.disks.5.name"), None);
        assert_eq!(doc.get_path("spec.missing"), None);
    }

    #[test]
    fn test_non_mapping_is_rejected() {
        assert!(matches!(Document::from_json("[1, 2]"), Err(Error::NotAnObject("array"))));
        assert!(matches!(Document::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_yaml_stream() {
        let docs = Document::from_yaml_stream(
            "kind: Machine\nmetadata:\n  name: a\n---\n---\nkind: Datacenter\nspec:\n  region: west\n",
        )
        .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].name(), Some("a"));
        assert_eq!(docs[1].get_path("spec.region"), Some(&json!("west")));
    }

    #[test]
    fn test_keys_render_sorted() {
        let doc = Document::from_json(r#"{"spec": {}, "kind": "Machine", "apiVersion": "v1"}"#).unwrap();
        let keys: Vec<&String> = doc.as_map().keys().collect();
        assert_eq!(keys, vec!["apiVersion", "kind", "spec"]);
        assert!(doc.to_yaml().unwrap().starts_with("apiVersion: v1\n"));
    }
}
