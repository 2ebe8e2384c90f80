pub mod api_spec;

// Re-export commonly used types with explicit imports
pub use api_spec::{
    Components, DocumentV2, DocumentV3, HttpMethod, Info, MediaType, OpenApiDocument, Operation,
    OrReference, PathItem, Reference, RequestBody, Response, Schema,
    // Type aliases
    RequestBodyOrReference, ResponseOrReference, SchemaOrReference,
};
