//! Manifest entries and their content fingerprints.
//!
//! An entry arrives in one of three shapes: a bare data string, an object
//! describing an image/tile/animation, or an object describing a tilemap. The
//! shape is decided once, at decode time, by [`ResourceEntry::decode`].

use serde_json::{Map, Value};

use crate::conventions::AssetConventions;
use crate::error::{ManifestError, ManifestResult};

const DATA: &str = "data";
const DISPLAY_NAME: &str = "displayName";
const MIME_TYPE: &str = "mimeType";
const TILEMAP_TILE: &str = "tilemapTile";
const TILESET: &str = "tileset";
const ID: &str = "id";

/// An object-shaped entry, held as the JSON object it was decoded from.
///
/// Known fields are read leniently: a value of the wrong JSON type reads as
/// absent, but stays in the object and is written back unchanged. Encoding a
/// record that was never modified reproduces its input exactly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetRecord {
    fields: Map<String, Value>,
}

impl AssetRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// A record holding only a `data` field.
    pub fn with_data(data: impl Into<String>) -> Self {
        Self::new().with_field(DATA, Value::String(data.into()))
    }

    /// Builder form of [`AssetRecord::set_field`].
    pub fn with_field(mut self, name: &str, value: Value) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }

    /// Raw value of any field, known or not.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Encoded asset data; empty when missing or not a string.
    pub fn data(&self) -> &str {
        self.str_field(DATA).unwrap_or_default()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.str_field(DISPLAY_NAME)
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.set_field(DISPLAY_NAME, Value::String(name.into()));
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.str_field(MIME_TYPE)
    }

    pub fn set_mime_type(&mut self, mime: impl Into<String>) {
        self.set_field(MIME_TYPE, Value::String(mime.into()));
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field(ID)
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.set_field(ID, Value::String(id.into()));
    }

    /// `true` only for an explicit boolean `tilemapTile: true`.
    pub fn is_tilemap_tile(&self) -> bool {
        matches!(self.fields.get(TILEMAP_TILE), Some(Value::Bool(true)))
    }

    /// String references in `tileset`, skipping anything else.
    pub fn tileset(&self) -> Vec<&str> {
        match self.fields.get(TILESET) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Mutable `tileset` array, if the field is an array.
    pub fn tileset_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.fields.get_mut(TILESET).and_then(Value::as_array_mut)
    }
}

/// A single asset in a resource manifest.
#[derive(Clone, Debug, PartialEq)]
pub enum ResourceEntry {
    /// Key maps directly to a data string; MIME kind is the manifest default.
    Plain(String),
    /// An image, tile (`tilemapTile: true`), or animation.
    Rich(AssetRecord),
    /// A tilemap whose `tileset` references tiles by namespaced key.
    Tilemap(AssetRecord),
}

/// Content identity of an asset: `(mimeType, isTile, data)`.
///
/// Two entries with equal fingerprints are the same asset, whatever their
/// keys or display names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint {
    pub mime_type: String,
    pub is_tile: bool,
    pub data: String,
}

impl ResourceEntry {
    /// Decode one entry, classifying object entries by their effective MIME
    /// type (`default_mime` when the entry omits one).
    ///
    /// Only the entry's own shape can fail: it must be a string or an object.
    pub fn decode(
        key: &str,
        value: Value,
        default_mime: &str,
        conventions: &AssetConventions,
    ) -> ManifestResult<Self> {
        match value {
            Value::String(data) => Ok(Self::Plain(data)),
            Value::Object(fields) => {
                let record = AssetRecord::from_fields(fields);
                let mime = record.mime_type().unwrap_or(default_mime);
                if conventions.is_tilemap(mime) {
                    Ok(Self::Tilemap(record))
                } else {
                    Ok(Self::Rich(record))
                }
            }
            other => Err(ManifestError::InvalidEntry {
                key: key.to_string(),
                reason: format!("expected string or object, got {}", json_kind(&other)),
            }),
        }
    }

    /// Encode back to the wire shape.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Plain(data) => Value::String(data.clone()),
            Self::Rich(record) | Self::Tilemap(record) => Value::Object(record.fields.clone()),
        }
    }

    /// The object-shaped record, if any.
    pub fn record(&self) -> Option<&AssetRecord> {
        match self {
            Self::Plain(_) => None,
            Self::Rich(record) | Self::Tilemap(record) => Some(record),
        }
    }

    pub fn data(&self) -> &str {
        match self {
            Self::Plain(data) => data,
            Self::Rich(record) | Self::Tilemap(record) => record.data(),
        }
    }

    /// The display name, treating an empty string as absent.
    pub fn display_name(&self) -> Option<&str> {
        self.record()
            .and_then(AssetRecord::display_name)
            .filter(|name| !name.is_empty())
    }

    /// The entry's MIME type, or `default_mime` if it does not declare one.
    pub fn mime_type<'a>(&'a self, default_mime: &'a str) -> &'a str {
        self.record()
            .and_then(AssetRecord::mime_type)
            .unwrap_or(default_mime)
    }

    pub fn is_tile(&self) -> bool {
        matches!(self, Self::Rich(record) if record.is_tilemap_tile())
    }

    pub fn is_tilemap(&self) -> bool {
        matches!(self, Self::Tilemap(_))
    }

    /// Tile references of a tilemap; empty for every other entry.
    pub fn tileset(&self) -> Vec<&str> {
        match self {
            Self::Tilemap(record) => record.tileset(),
            _ => Vec::new(),
        }
    }

    /// Compute the content fingerprint under the given default MIME type.
    pub fn fingerprint(&self, default_mime: &str) -> Fingerprint {
        Fingerprint {
            mime_type: self.mime_type(default_mime).to_string(),
            is_tile: self.is_tile(),
            data: self.data().to_string(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
