// Schema translation
// Derives custom GraphQL types from dereferenced JSON-schema objects

use crate::action::models::{CustomType, CustomTypeField};
use crate::spec::api_spec::{OrReference, Schema};
use crate::utils::error::{ActionGenError, Result};

/// The four OpenAPI primitive scalars with a GraphQL counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Integer,
    Number,
    String,
    Boolean,
}

impl ScalarType {
    /// Classify an OpenAPI `type` value.
    ///
    /// Anything outside the four primitive scalars (`array`, `object`,
    /// `null`, unknown strings) is rejected rather than coerced.
    pub fn from_openapi(value: &str) -> Result<Self> {
        match value {
            "integer" => Ok(ScalarType::Integer),
            "number" => Ok(ScalarType::Number),
            "string" => Ok(ScalarType::String),
            "boolean" => Ok(ScalarType::Boolean),
            other => Err(ActionGenError::UnsupportedScalarType(other.to_string())),
        }
    }

    /// Non-null GraphQL type string for this scalar.
    pub fn graphql(self) -> &'static str {
        match self {
            ScalarType::Integer => "Int!",
            ScalarType::Number => "Float!",
            ScalarType::String => "String!",
            ScalarType::Boolean => "Boolean!",
        }
    }
}

/// Derive a custom type from an object schema.
///
/// Walks the directly-declared properties in declaration order. Reference
/// properties and properties without a `type` are dropped; scalar
/// properties become non-null GraphQL fields. A property declaring any
/// non-scalar `type` fails the whole translation.
pub fn translate_schema(schema: &Schema) -> Result<CustomType> {
    let name = match &schema.title {
        Some(title) => title.clone(),
        None => return Err(ActionGenError::MissingTypeName),
    };

    let mut fields = Vec::new();
    if let Some(properties) = &schema.properties {
        for (property_name, property) in properties {
            let property = match property {
                OrReference::Reference(_) => continue,
                OrReference::Item(property) => property,
            };
            let property_type = match property.r#type.as_deref() {
                Some(property_type) => property_type,
                None => continue,
            };
            fields.push(CustomTypeField {
                name: property_name.clone(),
                r#type: ScalarType::from_openapi(property_type)?.graphql().to_string(),
            });
        }
    }

    Ok(CustomType { name, fields })
}
