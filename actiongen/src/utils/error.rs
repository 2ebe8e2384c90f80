#[derive(Debug, thiserror::Error)]
pub enum ActionGenError {
    #[error("operationId is not set for {method} {path}")]
    MissingOperationId { method: String, path: String },

    #[error("requestBody is empty for {method} {path}")]
    MissingRequestBody { method: String, path: String },

    #[error("response is not set for {method} {path}")]
    MissingResponse { method: String, path: String },

    #[error("responseSchema is not set for {method} {path}")]
    MissingResponseSchema { method: String, path: String },

    #[error("unsupported scalar type: {0}")]
    UnsupportedScalarType(String),

    #[error("object schema has no title to name its type")]
    MissingTypeName,

    #[error("conflicting definitions for custom type: {0}")]
    ConflictingTypeName(String),

    #[error("OpenAPI 2.0 conversion is not implemented")]
    UnimplementedDocumentVersion,

    #[error("Parsing error: {0}")]
    ParseError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for ActionGenError {
    fn from(err: std::io::Error) -> Self {
        ActionGenError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ActionGenError {
    fn from(err: serde_json::Error) -> Self {
        ActionGenError::ParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ActionGenError {
    fn from(err: serde_yaml::Error) -> Self {
        ActionGenError::ParseError(err.to_string())
    }
}

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ActionGenError>;

// Helper functions for creating common errors
impl ActionGenError {
    /// Operation precondition failure: no operationId.
    pub fn missing_operation_id(method: impl std::fmt::Display, path: impl Into<String>) -> Self {
        ActionGenError::MissingOperationId {
            method: method.to_string(),
            path: path.into(),
        }
    }

    /// Operation precondition failure: no requestBody declared at all.
    pub fn missing_request_body(method: impl std::fmt::Display, path: impl Into<String>) -> Self {
        ActionGenError::MissingRequestBody {
            method: method.to_string(),
            path: path.into(),
        }
    }

    /// Operation precondition failure: no "200" response entry.
    pub fn missing_response(method: impl std::fmt::Display, path: impl Into<String>) -> Self {
        ActionGenError::MissingResponse {
            method: method.to_string(),
            path: path.into(),
        }
    }

    /// Operation precondition failure: the success response has no JSON schema.
    pub fn missing_response_schema(
        method: impl std::fmt::Display,
        path: impl Into<String>,
    ) -> Self {
        ActionGenError::MissingResponseSchema {
            method: method.to_string(),
            path: path.into(),
        }
    }

    /// Shortcut method to create a parsing error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        ActionGenError::ParseError(msg.into())
    }

    /// Shortcut method to create an IO error
    pub fn io<S: Into<String>>(msg: S) -> Self {
        ActionGenError::IoError(msg.into())
    }

    /// Shortcut method to create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ActionGenError::ConfigError(msg.into())
    }
}
