//! Actiongen - OpenAPI document to GraphQL action metadata generator
//!
//! Consumes an already-dereferenced OpenAPI document and produces one
//! action definition per HTTP operation together with the custom
//! object/input-object types derived from the request and response
//! schemas.

pub mod action;
pub mod spec;
pub mod utils;

pub use action::converter::ActionConverter;
pub use action::models::{
    ActionDefinition, ConversionResult, ConvertOptions, CustomType, CustomTypes,
};
pub use spec::api_spec::OpenApiDocument;
pub use utils::error::{ActionGenError, Result};
