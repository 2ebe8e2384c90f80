// OpenAPI document model
// Typed view of an already-dereferenced OpenAPI document. The loader hands
// documents to the converter in this shape; no reference resolution happens
// anywhere in this crate.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A dereferenced OpenAPI document of any supported version.
///
/// The variant is picked by the version marker field: documents carrying
/// `openapi` parse as 3.x, documents carrying `swagger` parse as 2.0.
/// Conversion of 2.0 documents is rejected by the converter, but the
/// document still deserializes so the rejection can name the version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpenApiDocument {
    V3(DocumentV3),
    V2(DocumentV2),
}

impl OpenApiDocument {
    /// Document metadata, regardless of version.
    pub fn info(&self) -> &Info {
        match self {
            OpenApiDocument::V3(document) => &document.info,
            OpenApiDocument::V2(document) => &document.info,
        }
    }
}

/// OpenAPI 3.x document root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentV3 {
    /// Version marker, e.g. "3.0.2"
    pub openapi: String,
    pub info: Info,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Component schemas; already inlined at point of use, kept for fidelity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

/// OpenAPI 2.0 (Swagger) document root. Parsed only far enough to be
/// recognized and rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentV2 {
    /// Version marker, e.g. "2.0"
    pub swagger: String,
    pub info: Info,
    #[serde(default)]
    pub paths: IndexMap<String, serde_json::Value>,
}

/// API metadata block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// HTTP methods eligible for action conversion, in compilation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// The fixed method set, in the order operations are compiled.
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One path entry with its per-method operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
}

impl PathItem {
    /// Operation registered under the given method, if any.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
        }
    }
}

/// One HTTP operation under one path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default, rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBodyOrReference>,
    /// Responses keyed by status code string ("200", "422", "default")
    #[serde(default)]
    pub responses: IndexMap<String, ResponseOrReference>,
}

/// Either an inline item or a `$ref` placeholder.
///
/// Dereferenced input should not contain references at these positions;
/// where one survives anyway, the converter treats it per its location
/// (skipped for request bodies and properties, fatal for responses).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrReference<T> {
    Reference(Reference),
    Item(T),
}

/// A raw `$ref` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub reference: String,
}

pub type SchemaOrReference = OrReference<Schema>;
pub type RequestBodyOrReference = OrReference<RequestBody>;
pub type ResponseOrReference = OrReference<Response>;

/// Request body with its content-type negotiation map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single response, structured like a request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// One entry of a content-type map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrReference>,
}

/// JSON-schema object as it appears in a dereferenced document.
///
/// `properties` stays optional so a schema that lacks the key entirely can
/// be told apart from one declaring an empty property map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaOrReference>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

/// Reusable component schemas. Not consulted by the converter once the
/// document is dereferenced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaOrReference>,
}
