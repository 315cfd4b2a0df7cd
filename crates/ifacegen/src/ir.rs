//! Schema representation consumed by the generator.
//!
//! The upstream schema source builds a [`SchemaCollection`] once per run.
//! Nothing here is mutated by rendering or emission.

use crate::error::Error;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// All object and enum schemas for one generation run.
///
/// Both maps keep insertion order, which is also emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaCollection {
    /// Object schemas keyed by their interface name.
    #[serde(default)]
    pub objects: IndexMap<String, ObjectInfo>,
    /// Enum schemas keyed by enum name.
    #[serde(default)]
    pub enums: IndexMap<String, EnumInfo>,
}

/// Ordered field list of one object schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectInfo {
    pub properties: Vec<PropertyInfo>,
}

/// A single field of an object schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInfo {
    /// Member name, emitted verbatim.
    pub name: String,
    /// Resolved type reference (primitive, interface or enum name).
    #[serde(rename = "type")]
    pub ty: String,
    /// Field holds a sequence of `ty`.
    #[serde(default)]
    pub is_array: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Illustrative value. A present JSON `null` is kept as `Some(Value::Null)`.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub example: Option<Value>,
}

/// An enum schema with its ordered members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumInfo {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

/// One enum member. The value is always text, whatever its source form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    #[serde(deserialize_with = "literal_text")]
    pub value: String,
}

/// One renderable entry of a [`SchemaCollection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Definition<'a> {
    /// An object schema, rendered as an interface.
    Object {
        name: &'a str,
        object: &'a ObjectInfo,
    },
    /// An enum schema, rendered as a string enum.
    Enum(&'a EnumInfo),
}

impl SchemaCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON dump of the schema, reporting the JSON path of any
    /// malformed entry.
    pub fn from_json_str(src: &str) -> Result<Self, Error> {
        let de = &mut serde_json::Deserializer::from_str(src);
        serde_path_to_error::deserialize(de).map_err(|err| Error::Schema {
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        })
    }

    pub fn add_object(&mut self, name: impl Into<String>, properties: Vec<PropertyInfo>) {
        self.objects.insert(name.into(), ObjectInfo { properties });
    }

    /// Add an enum, keyed by its own name.
    pub fn add_enum(&mut self, info: EnumInfo) {
        self.enums.insert(info.name.clone(), info);
    }

    /// All objects in map order, followed by all enums in map order.
    pub fn definitions(&self) -> impl Iterator<Item = Definition<'_>> {
        let objects = self
            .objects
            .iter()
            .map(|(name, object)| Definition::Object {
                name: name.as_str(),
                object,
            });
        objects.chain(self.enums.values().map(Definition::Enum))
    }
}

impl Definition<'_> {
    pub fn name(&self) -> &str {
        match self {
            Definition::Object { name, .. } => name,
            Definition::Enum(info) => &info.name,
        }
    }
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_array: false,
            description: None,
            example: None,
        }
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }
}

impl EnumInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push(EnumValue {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn literal_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!(
            "enum value must be a string, number or boolean, got {}",
            other
        ))),
    }
}
