use crate::spec::api_spec::OpenApiDocument;
use crate::utils::error::{ActionGenError, Result};
use std::fs;
use std::path::Path;

/// Load an already-dereferenced OpenAPI document from a JSON or YAML file.
///
/// YAML is a superset of JSON, so one parser covers both formats. No
/// reference resolution happens here: `$ref` entries survive as
/// `Reference` nodes and the converter treats them per their location.
/// On error, includes the filename and (when available) line/column in the
/// message.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<OpenApiDocument> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .map_err(|e| ActionGenError::io(format!("failed to read {}: {}", path.display(), e)))?;

    match serde_yaml::from_str::<OpenApiDocument>(&content) {
        Ok(document) => Ok(document),
        Err(err) => {
            if let Some(loc) = err.location() {
                Err(ActionGenError::parse(format!(
                    "document parse error at {}:{} in {}: {}",
                    loc.line(),
                    loc.column(),
                    path.display(),
                    err
                )))
            } else {
                Err(ActionGenError::parse(format!(
                    "document parse error in {}: {}",
                    path.display(),
                    err
                )))
            }
        }
    }
}
