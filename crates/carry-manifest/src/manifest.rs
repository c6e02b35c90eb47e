//! The resource manifest: a keyed catalog of assets plus collection defaults.
//!
//! On the wire a manifest is a single JSON object. The reserved key `"*"`
//! holds collection-level defaults (at least a `mimeType`); every other key
//! is an asset entry.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::conventions::AssetConventions;
use crate::entry::ResourceEntry;
use crate::error::{ManifestError, ManifestResult};

/// Key of the reserved defaults entry.
pub const DEFAULTS_KEY: &str = "*";

/// Contents of the reserved `"*"` entry, kept exactly as decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct ManifestDefaults {
    value: Value,
}

impl ManifestDefaults {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Defaults declaring only a collection MIME type.
    pub fn with_mime_type(mime: impl Into<String>) -> Self {
        let mut object = Map::new();
        object.insert("mimeType".to_string(), Value::String(mime.into()));
        Self::new(Value::Object(object))
    }

    /// The collection MIME type, if `"*"` is an object with a string `mimeType`.
    pub fn mime_type(&self) -> Option<&str> {
        self.value.get("mimeType").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.value.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }
}

/// A decoded resource manifest.
///
/// Entries are kept in key order, so every traversal of a manifest is
/// deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceManifest {
    defaults: Option<ManifestDefaults>,
    default_mime: String,
    entries: BTreeMap<String, ResourceEntry>,
}

impl ResourceManifest {
    /// Create an empty manifest with no `"*"` entry.
    ///
    /// Entries without a MIME type fall back to `default_mime`.
    pub fn new(default_mime: impl Into<String>) -> Self {
        Self {
            defaults: None,
            default_mime: default_mime.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Create an empty manifest carrying a `"*"` entry.
    pub fn with_defaults(defaults: ManifestDefaults, conventions: &AssetConventions) -> Self {
        let default_mime = defaults
            .mime_type()
            .unwrap_or(conventions.image_mime.as_str())
            .to_string();
        Self {
            defaults: Some(defaults),
            default_mime,
            entries: BTreeMap::new(),
        }
    }

    /// Parse manifest text.
    pub fn parse(text: &str, conventions: &AssetConventions) -> ManifestResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value, conventions)
    }

    /// Decode an already-parsed JSON value.
    pub fn from_value(value: Value, conventions: &AssetConventions) -> ManifestResult<Self> {
        let mut object = match value {
            Value::Object(object) => object,
            Value::Null => return Err(ManifestError::NotAnObject("null")),
            Value::Bool(_) => return Err(ManifestError::NotAnObject("boolean")),
            Value::Number(_) => return Err(ManifestError::NotAnObject("number")),
            Value::String(_) => return Err(ManifestError::NotAnObject("string")),
            Value::Array(_) => return Err(ManifestError::NotAnObject("array")),
        };

        let mut manifest = match object.remove(DEFAULTS_KEY) {
            Some(raw) => Self::with_defaults(ManifestDefaults::new(raw), conventions),
            None => Self::new(conventions.image_mime.clone()),
        };

        for (key, raw) in object {
            let entry = ResourceEntry::decode(&key, raw, &manifest.default_mime, conventions)?;
            manifest.entries.insert(key, entry);
        }
        Ok(manifest)
    }

    /// Encode to a JSON object.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        if let Some(defaults) = &self.defaults {
            object.insert(DEFAULTS_KEY.to_string(), defaults.as_value().clone());
        }
        for (key, entry) in &self.entries {
            object.insert(key.clone(), entry.to_value());
        }
        Value::Object(object)
    }

    /// Encode to manifest text.
    pub fn to_json_string(&self) -> ManifestResult<String> {
        Ok(serde_json::to_string(&self.to_value())?)
    }

    pub fn defaults(&self) -> Option<&ManifestDefaults> {
        self.defaults.as_ref()
    }

    /// MIME type applied to entries that omit one.
    pub fn default_mime(&self) -> &str {
        &self.default_mime
    }

    pub fn get(&self, key: &str) -> Option<&ResourceEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, entry: ResourceEntry) -> Option<ResourceEntry> {
        self.entries.insert(key.into(), entry)
    }

    /// All non-default entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &ResourceEntry)> {
        self.entries.iter()
    }

    /// Number of entries, excluding `"*"`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
