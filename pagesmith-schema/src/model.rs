use std::{collections::BTreeMap, fmt};

use serde::Deserialize;

/// A set of property rules, keyed by property name.
///
/// Rules are kept in ascending name order, which is also the order in
/// which [`Schema::validate`] applies them.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Schema version (informational only)
    pub version: i64,

    /// Property name to rule
    pub types: BTreeMap<String, PropertyRule>,
}

/// Validation and transformation contract for one property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRule {
    /// Whether the property must be present (ignored when a default is set)
    pub required: bool,

    /// Property type
    pub property_type: PropertyType,

    /// Value substituted when the property is absent
    pub default: Option<Scalar>,
}

/// Supported property types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Number,
    Boolean,
    /// Accepted raw values mapped to their display text
    Enum(BTreeMap<String, String>),
    Link,
    Date,
}

/// A scalar default value.
///
/// Stringified when it is substituted into a property set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

/// On-disk shape of a schema, before type names are resolved.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSchema {
    #[serde(default)]
    pub version: i64,

    #[serde(default)]
    pub types: BTreeMap<String, RawRule>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRule {
    #[serde(default)]
    pub required: bool,

    #[serde(rename = "type", default)]
    pub type_name: String,

    #[serde(default)]
    pub default: Option<Scalar>,

    #[serde(default)]
    pub keys: Option<BTreeMap<String, RawEnumKey>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEnumKey {
    #[serde(default)]
    pub display: String,
}

/// Why a raw rule could not be resolved into a [`PropertyType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TypeError {
    Unknown,
    EmptyEnumKeys,
}

impl RawRule {
    /// Resolve the type name (and enum keys) into a rule.
    pub fn resolve(self) -> Result<PropertyRule, TypeError> {
        let property_type = match self.type_name.as_str() {
            "string" => PropertyType::String,
            "number" => PropertyType::Number,
            "boolean" => PropertyType::Boolean,
            "link" => PropertyType::Link,
            "date" => PropertyType::Date,
            "enum" => {
                let keys: BTreeMap<String, String> = self
                    .keys
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(key, value)| (key, value.display))
                    .collect();
                if keys.is_empty() {
                    return Err(TypeError::EmptyEnumKeys);
                }
                PropertyType::Enum(keys)
            }
            _ => return Err(TypeError::Unknown),
        };

        Ok(PropertyRule {
            required: self.required,
            property_type,
            default: self.default,
        })
    }
}
