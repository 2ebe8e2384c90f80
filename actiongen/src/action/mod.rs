// Action generation module
// Turns dereferenced OpenAPI operations into action metadata

pub mod converter;
pub mod models;
pub mod translator;

pub use converter::{request_body_template, ActionConverter};
pub use models::{
    ActionArgument, ActionDefinition, ActionDefinitionBody, ActionKind, ActionType,
    ConversionResult, ConvertOptions, CustomType, CustomTypeField, CustomTypes, RequestTransform,
    TypeCatalog, DEFAULT_HANDLER_BASE_URL,
};
pub use translator::{translate_schema, ScalarType};
