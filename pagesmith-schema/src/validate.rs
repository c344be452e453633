//! Applying a schema to a property set.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
    error::ValidationError,
    model::{PropertyType, Schema},
};

/// Property name to string value.
pub type PropertyMap = BTreeMap<String, String>;

impl Schema {
    /// Validate `raw` against this schema and return the transformed set.
    ///
    /// Properties the schema does not mention pass through unchanged.
    /// Rules are applied in ascending property-name order and the first
    /// failure is returned.
    pub fn validate(&self, raw: &PropertyMap) -> Result<PropertyMap, ValidationError> {
        let mut result = raw.clone();

        for (name, rule) in &self.types {
            if !result.contains_key(name) {
                if let Some(default) = &rule.default {
                    result.insert(name.clone(), default.to_string());
                } else if rule.required {
                    return Err(ValidationError::MissingRequiredProperty { name: name.clone() });
                } else {
                    continue;
                }
            }

            let Some(value) = result.get_mut(name) else {
                continue;
            };

            match &rule.property_type {
                PropertyType::String | PropertyType::Link => {}
                PropertyType::Number => {
                    if value.parse::<f64>().is_err() {
                        return Err(ValidationError::InvalidNumber {
                            name: name.clone(),
                            value: value.clone(),
                        });
                    }
                }
                PropertyType::Boolean => {
                    if parse_bool(value).is_none() {
                        return Err(ValidationError::InvalidBoolean {
                            name: name.clone(),
                            value: value.clone(),
                        });
                    }
                }
                PropertyType::Enum(keys) => match keys.get(value.as_str()) {
                    Some(display) => *value = format!("[[{}/{}]]", name, display),
                    None => {
                        return Err(ValidationError::InvalidEnumKey {
                            name: name.clone(),
                            value: value.clone(),
                        });
                    }
                },
                PropertyType::Date => {
                    if !is_date(value) {
                        return Err(ValidationError::InvalidDate {
                            name: name.clone(),
                            value: value.clone(),
                        });
                    }
                    *value = format!("[[{}]]", value);
                }
            }
        }

        Ok(result)
    }
}

/// Boolean literals accepted in property values.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// A calendar date written exactly as `YYYY-MM-DD`.
fn is_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    shaped && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        for v in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(v), Some(true), "{v}");
        }
        for v in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(v), Some(false), "{v}");
        }
        for v in ["yes", "no", "tRUE", "", " true", "not-a-bool"] {
            assert_eq!(parse_bool(v), None, "{v}");
        }
    }

    #[test]
    fn test_is_date() {
        assert!(is_date("2025-09-15"));
        assert!(is_date("2024-02-29"));
        assert!(!is_date("2023-02-29"));
        assert!(!is_date("2025-9-15"));
        assert!(!is_date("2025-13-01"));
        assert!(!is_date("2025/09/15"));
        assert!(!is_date("not-a-date"));
        assert!(!is_date(" 2025-09-15"));
    }
}
