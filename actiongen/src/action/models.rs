// Action metadata models
// Output shapes for generated actions and their custom GraphQL types

use crate::utils::error::{ActionGenError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Handler base URL used when no configuration overrides it.
pub const DEFAULT_HANDLER_BASE_URL: &str = "http://localhost:8000/api";

/// Options controlling action generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Base URL the literal operation path is appended to
    pub handler_base_url: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            handler_base_url: DEFAULT_HANDLER_BASE_URL.to_string(),
        }
    }
}

/// One generated action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDefinition {
    /// Action name, derived from the operation path
    pub name: String,
    pub definition: ActionDefinitionBody,
}

/// The definition body of a generated action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDefinitionBody {
    /// Handler URL the action forwards to
    pub handler: String,
    /// Non-null reference to the response object type, e.g. "AuthToken!"
    pub output_type: String,
    /// Single fixed "params" argument typed as the input object
    pub arguments: Vec<ActionArgument>,
    pub request_transform: RequestTransform,
    pub r#type: ActionType,
    pub kind: ActionKind,
}

/// One argument of a generated action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionArgument {
    pub name: String,
    pub r#type: String,
}

/// Request transform forwarded to the templating engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestTransform {
    /// Body template; consumed verbatim downstream
    pub body: String,
    pub content_type: String,
    pub template_engine: String,
}

impl RequestTransform {
    /// Transform carrying the given body template with the fixed JSON
    /// content type and Kriti engine.
    pub fn kriti_json(body: String) -> Self {
        Self {
            body,
            content_type: "application/json".to_string(),
            template_engine: "Kriti".to_string(),
        }
    }
}

/// GraphQL root the action is exposed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Query,
    Mutation,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionType::Query => write!(f, "query"),
            ActionType::Mutation => write!(f, "mutation"),
        }
    }
}

/// Action execution kind. Only synchronous actions are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Synchronous,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Synchronous => write!(f, "synchronous"),
        }
    }
}

/// A custom GraphQL type derived from a JSON-schema object. Object types and
/// input-object types share this shape; only the catalog they land in
/// differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomType {
    pub name: String,
    pub fields: Vec<CustomTypeField>,
}

impl CustomType {
    /// Non-null GraphQL reference to this type, e.g. "AuthInput!".
    pub fn non_null_name(&self) -> String {
        format!("{}!", self.name)
    }
}

/// One scalar field of a custom type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTypeField {
    pub name: String,
    pub r#type: String,
}

/// Insertion-ordered custom-type catalog keyed by type name.
///
/// Registering an identical definition twice keeps the first entry;
/// registering a structurally different definition under an existing name
/// aborts the conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeCatalog {
    types: IndexMap<String, CustomType>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type to the catalog, applying the duplicate policy.
    pub fn register(&mut self, custom_type: CustomType) -> Result<()> {
        match self.types.get(&custom_type.name) {
            None => {
                self.types
                    .insert(custom_type.name.clone(), custom_type);
                Ok(())
            }
            Some(existing) if *existing == custom_type => Ok(()),
            Some(_) => Err(ActionGenError::ConflictingTypeName(custom_type.name)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CustomType> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Consume the catalog in registration order.
    pub fn into_types(self) -> Vec<CustomType> {
        self.types.into_values().collect()
    }
}

/// Custom types referenced by the generated actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomTypes {
    /// Response object types
    pub objects: Vec<CustomType>,
    /// Request input-object types
    pub input_objects: Vec<CustomType>,
}

/// Result of one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub actions: Vec<ActionDefinition>,
    pub custom_types: CustomTypes,
}
