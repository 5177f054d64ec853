//! Spark schema types
//!
//! The schema model mirrors Spark's StructType JSON layout: scalar kinds
//! serialize to their bare lowercase name, structs and arrays to tagged
//! objects. A schema is a pure value tree rebuilt on every inference call.

use crate::error::Error;
use crate::types::JsonObject;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Scalar Kinds
// ============================================================================

/// Atomic (non-recursive) type kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    String,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Null,
}

impl ScalarKind {
    /// The lowercase name used in the schema JSON
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Long => "long",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Null => "null",
        }
    }

    /// Parse a lowercase scalar name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(ScalarKind::String),
            "integer" => Some(ScalarKind::Integer),
            "long" => Some(ScalarKind::Long),
            "float" => Some(ScalarKind::Float),
            "double" => Some(ScalarKind::Double),
            "boolean" => Some(ScalarKind::Boolean),
            "null" => Some(ScalarKind::Null),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Type Tags
// ============================================================================

/// Coarse classification of a value or field type
///
/// Structs and arrays collapse their nested detail to a single tag; scalars
/// use their own kind. This is the currency of the classifier and of the
/// field filter allow-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Struct,
    Array,
    Null,
}

impl TypeTag {
    /// All tags, in display order
    pub const ALL: [TypeTag; 9] = [
        TypeTag::String,
        TypeTag::Integer,
        TypeTag::Long,
        TypeTag::Float,
        TypeTag::Double,
        TypeTag::Boolean,
        TypeTag::Struct,
        TypeTag::Array,
        TypeTag::Null,
    ];

    /// The lowercase name used in settings files and CLI flags
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Long => "long",
            TypeTag::Float => "float",
            TypeTag::Double => "double",
            TypeTag::Boolean => "boolean",
            TypeTag::Struct => "struct",
            TypeTag::Array => "array",
            TypeTag::Null => "null",
        }
    }

    /// The scalar kind behind this tag, if it has one
    pub fn scalar(self) -> Option<ScalarKind> {
        match self {
            TypeTag::String => Some(ScalarKind::String),
            TypeTag::Integer => Some(ScalarKind::Integer),
            TypeTag::Long => Some(ScalarKind::Long),
            TypeTag::Float => Some(ScalarKind::Float),
            TypeTag::Double => Some(ScalarKind::Double),
            TypeTag::Boolean => Some(ScalarKind::Boolean),
            TypeTag::Null => Some(ScalarKind::Null),
            TypeTag::Struct | TypeTag::Array => None,
        }
    }
}

impl From<ScalarKind> for TypeTag {
    fn from(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::String => TypeTag::String,
            ScalarKind::Integer => TypeTag::Integer,
            ScalarKind::Long => TypeTag::Long,
            ScalarKind::Float => TypeTag::Float,
            ScalarKind::Double => TypeTag::Double,
            ScalarKind::Boolean => TypeTag::Boolean,
            ScalarKind::Null => TypeTag::Null,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(TypeTag::String),
            "integer" => Ok(TypeTag::Integer),
            "long" => Ok(TypeTag::Long),
            "float" => Ok(TypeTag::Float),
            "double" => Ok(TypeTag::Double),
            "boolean" => Ok(TypeTag::Boolean),
            "struct" => Ok(TypeTag::Struct),
            "array" => Ok(TypeTag::Array),
            "null" => Ok(TypeTag::Null),
            other => Err(Error::config(format!("unknown type name: {other}"))),
        }
    }
}

// ============================================================================
// Schema Tree
// ============================================================================

/// An inferred schema node
///
/// Closed tagged union; every consumer matches exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaType {
    /// A leaf kind with no children
    Scalar(ScalarKind),
    /// An ordered list of named, typed, nullable fields
    Struct(StructType),
    /// A homogeneous sequence described by one element type
    Array(ArrayType),
}

impl SchemaType {
    /// Coarse tag of this node
    pub fn tag(&self) -> TypeTag {
        match self {
            SchemaType::Scalar(kind) => (*kind).into(),
            SchemaType::Struct(_) => TypeTag::Struct,
            SchemaType::Array(_) => TypeTag::Array,
        }
    }

    /// Check if this node is a scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self, SchemaType::Scalar(_))
    }

    /// Check if this node is a struct
    pub fn is_struct(&self) -> bool {
        matches!(self, SchemaType::Struct(_))
    }

    /// Check if this node is an array
    pub fn is_array(&self) -> bool {
        matches!(self, SchemaType::Array(_))
    }

    /// The struct behind this node, if it is one
    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            SchemaType::Struct(st) => Some(st),
            _ => None,
        }
    }

    /// The array behind this node, if it is one
    pub fn as_array(&self) -> Option<&ArrayType> {
        match self {
            SchemaType::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

/// A named, typed field of a struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name (the source object's key)
    pub name: String,

    /// Inferred type of the field's value
    #[serde(rename = "type")]
    pub data_type: SchemaType,

    /// Whether the source value at this key was exactly null
    pub nullable: bool,

    /// Reserved for future extension, always empty today
    #[serde(default)]
    pub metadata: JsonObject,
}

impl Field {
    /// Create a field with empty metadata
    pub fn new(name: impl Into<String>, data_type: SchemaType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
            metadata: JsonObject::new(),
        }
    }
}

/// A struct schema: the source object's fields in key insertion order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructType {
    /// Fields in source key order; never resorted
    pub fields: Vec<Field>,
}

impl StructType {
    /// Create an empty struct schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in schema order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the struct has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// An array schema: one representative element type plus a null flag
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    /// Type describing every element
    pub element_type: Box<SchemaType>,

    /// Whether the array may contain null elements
    pub contains_null: bool,

    /// Reserved for future extension, always empty today
    pub metadata: JsonObject,
}

impl ArrayType {
    /// Create an array schema with empty metadata
    pub fn new(element_type: SchemaType, contains_null: bool) -> Self {
        Self {
            element_type: Box::new(element_type),
            contains_null,
            metadata: JsonObject::new(),
        }
    }
}

// ============================================================================
// Canonical JSON form
// ============================================================================
//
// Scalars serialize to their bare name; structs and arrays to tagged objects:
//
//   "long"
//   { "type": "struct", "fields": [ ... ] }
//   { "type": "array", "elementType": ..., "containsNull": bool, "metadata": {} }
//
// Deserialization accepts either a string or a tagged map at every position.

impl Serialize for SchemaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SchemaType::Scalar(kind) => kind.serialize(serializer),
            SchemaType::Struct(st) => st.serialize(serializer),
            SchemaType::Array(arr) => arr.serialize(serializer),
        }
    }
}

impl Serialize for StructType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "struct")?;
        map.serialize_entry("fields", &self.fields)?;
        map.end()
    }
}

impl Serialize for ArrayType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("type", "array")?;
        map.serialize_entry("elementType", &self.element_type)?;
        map.serialize_entry("containsNull", &self.contains_null)?;
        map.serialize_entry("metadata", &self.metadata)?;
        map.end()
    }
}

/// Tagged-map side of the canonical form
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ComplexSchema {
    Struct {
        fields: Vec<Field>,
    },
    Array {
        #[serde(rename = "elementType")]
        element_type: SchemaType,
        #[serde(rename = "containsNull")]
        contains_null: bool,
        #[serde(default)]
        metadata: JsonObject,
    },
}

impl From<ComplexSchema> for SchemaType {
    fn from(complex: ComplexSchema) -> Self {
        match complex {
            ComplexSchema::Struct { fields } => SchemaType::Struct(StructType { fields }),
            ComplexSchema::Array {
                element_type,
                contains_null,
                metadata,
            } => SchemaType::Array(ArrayType {
                element_type: Box::new(element_type),
                contains_null,
                metadata,
            }),
        }
    }
}

impl<'de> Deserialize<'de> for SchemaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SchemaTypeVisitor;

        impl<'de> Visitor<'de> for SchemaTypeVisitor {
            type Value = SchemaType;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a scalar kind string or a struct/array object")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                ScalarKind::from_name(v)
                    .map(SchemaType::Scalar)
                    .ok_or_else(|| E::custom(format!("unknown scalar kind: {v}")))
            }

            fn visit_map<M: MapAccess<'de>>(self, map: M) -> Result<Self::Value, M::Error> {
                let complex =
                    ComplexSchema::deserialize(de::value::MapAccessDeserializer::new(map))?;
                Ok(complex.into())
            }
        }

        deserializer.deserialize_any(SchemaTypeVisitor)
    }
}

impl<'de> Deserialize<'de> for StructType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SchemaType::deserialize(deserializer)? {
            SchemaType::Struct(st) => Ok(st),
            other => Err(de::Error::custom(format!(
                "expected a struct schema, got {}",
                other.tag()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for ArrayType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SchemaType::deserialize(deserializer)? {
            SchemaType::Array(arr) => Ok(arr),
            other => Err(de::Error::custom(format!(
                "expected an array schema, got {}",
                other.tag()
            ))),
        }
    }
}
