// Action conversion
// Compiles the operations of a dereferenced OpenAPI document into action
// definitions plus the custom types their schemas derive to.

use crate::action::models::{
    ActionArgument, ActionDefinition, ActionDefinitionBody, ActionKind, ActionType,
    ConversionResult, ConvertOptions, CustomType, CustomTypes, RequestTransform, TypeCatalog,
};
use crate::action::translator::translate_schema;
use crate::spec::api_spec::{
    DocumentV3, HttpMethod, MediaType, OpenApiDocument, OrReference, RequestBodyOrReference,
    ResponseOrReference, Schema,
};
use crate::utils::error::{ActionGenError, Result};
use indexmap::IndexMap;

/// Content type the request/response schemas are read from.
const JSON_CONTENT_TYPE: &str = "application/json";

/// Status code whose response schema backs the action output type.
const SUCCESS_STATUS: &str = "200";

/// Compiles dereferenced OpenAPI documents into action metadata.
pub struct ActionConverter {
    options: ConvertOptions,
}

impl ActionConverter {
    /// Create a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Create a converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConvertOptions::default())
    }

    /// Convert a document into actions and custom types.
    ///
    /// Aborts on the first violated precondition; no partial results are
    /// returned. OpenAPI 2.0 documents are rejected outright.
    pub fn convert(&self, document: &OpenApiDocument) -> Result<ConversionResult> {
        match document {
            OpenApiDocument::V3(document) => self.convert_v3(document),
            OpenApiDocument::V2(_) => Err(ActionGenError::UnimplementedDocumentVersion),
        }
    }

    fn convert_v3(&self, document: &DocumentV3) -> Result<ConversionResult> {
        let mut actions = Vec::new();
        let mut objects = TypeCatalog::new();
        let mut input_objects = TypeCatalog::new();

        for (path, path_item) in &document.paths {
            for method in HttpMethod::ALL {
                let operation = match path_item.operation(method) {
                    Some(operation) => operation,
                    None => continue,
                };

                if operation.operation_id.is_none() {
                    return Err(ActionGenError::missing_operation_id(method, path));
                }

                let request_body = operation
                    .request_body
                    .as_ref()
                    .ok_or_else(|| ActionGenError::missing_request_body(method, path))?;

                // A declared request body without a JSON object schema is
                // not an error; the operation is skipped as a whole.
                let request_schema = match request_json_schema(request_body) {
                    Some(schema) => schema,
                    None => continue,
                };
                let input_type = translate_schema(request_schema)?;
                input_objects.register(input_type.clone())?;

                let response = operation
                    .responses
                    .get(SUCCESS_STATUS)
                    .ok_or_else(|| ActionGenError::missing_response(method, path))?;

                // Unlike the request side, a success response without a JSON
                // object schema always fails the run.
                let response_schema = response_json_schema(response)
                    .ok_or_else(|| ActionGenError::missing_response_schema(method, path))?;
                let output_type = translate_schema(response_schema)?;
                objects.register(output_type.clone())?;

                actions.push(self.build_action(path, method, &input_type, &output_type));

                tracing::debug!(method = %method, path = %path, "compiled operation");
            }
        }

        Ok(ConversionResult {
            actions,
            custom_types: CustomTypes {
                objects: objects.into_types(),
                input_objects: input_objects.into_types(),
            },
        })
    }

    fn build_action(
        &self,
        path: &str,
        method: HttpMethod,
        input_type: &CustomType,
        output_type: &CustomType,
    ) -> ActionDefinition {
        let action_type = match method {
            HttpMethod::Get => ActionType::Query,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Delete => ActionType::Mutation,
        };

        ActionDefinition {
            name: path.replace('/', ""),
            definition: ActionDefinitionBody {
                handler: format!("{}{}", self.options.handler_base_url, path),
                output_type: output_type.non_null_name(),
                arguments: vec![ActionArgument {
                    name: "params".to_string(),
                    r#type: input_type.non_null_name(),
                }],
                request_transform: RequestTransform::kriti_json(request_body_template(input_type)),
                r#type: action_type,
                kind: ActionKind::Synchronous,
            },
        }
    }
}

/// JSON object schema of a request body, if one can be located.
fn request_json_schema(request_body: &RequestBodyOrReference) -> Option<&Schema> {
    match request_body {
        OrReference::Reference(_) => None,
        OrReference::Item(request_body) => json_object_schema(&request_body.content),
    }
}

/// JSON object schema of a response, if one can be located.
fn response_json_schema(response: &ResponseOrReference) -> Option<&Schema> {
    match response {
        OrReference::Reference(_) => None,
        OrReference::Item(response) => json_object_schema(&response.content),
    }
}

/// Inline object schema declared under the `application/json` entry of a
/// content map. Reference schemas and schemas without a `properties` key
/// do not qualify.
fn json_object_schema(content: &IndexMap<String, MediaType>) -> Option<&Schema> {
    let media_type = content.get(JSON_CONTENT_TYPE)?;
    match media_type.schema.as_ref()? {
        OrReference::Reference(_) => None,
        OrReference::Item(schema) if schema.properties.is_some() => Some(schema),
        OrReference::Item(_) => None,
    }
}

/// Single-line body template forwarding every input field to the handler.
///
/// The downstream templating engine consumes this string verbatim, so the
/// byte layout must stay stable for a given field sequence.
pub fn request_body_template(input_type: &CustomType) -> String {
    let fields: Vec<String> = input_type
        .fields
        .iter()
        .map(|field| format!("\"{}\": {{{{$body.input.params.{}}}}}", field.name, field.name))
        .collect();
    format!("{{ {} }}", fields.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::models::CustomTypeField;
    use crate::spec::api_spec::{
        DocumentV2, Info, Operation, PathItem, Reference, RequestBody, Response,
        SchemaOrReference,
    };

    fn scalar(scalar_type: &str) -> SchemaOrReference {
        OrReference::Item(Schema {
            r#type: Some(scalar_type.to_string()),
            ..Default::default()
        })
    }

    fn object_schema(title: &str, properties: Vec<(&str, SchemaOrReference)>) -> Schema {
        Schema {
            title: Some(title.to_string()),
            r#type: Some("object".to_string()),
            properties: Some(
                properties
                    .into_iter()
                    .map(|(name, schema)| (name.to_string(), schema))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    fn json_content(schema: Schema) -> IndexMap<String, MediaType> {
        IndexMap::from([(
            JSON_CONTENT_TYPE.to_string(),
            MediaType {
                schema: Some(OrReference::Item(schema)),
            },
        )])
    }

    fn json_request_body(schema: Schema) -> RequestBodyOrReference {
        OrReference::Item(RequestBody {
            content: json_content(schema),
            required: true,
            description: None,
        })
    }

    fn ok_response(schema: Schema) -> ResponseOrReference {
        OrReference::Item(Response {
            description: "Successful Response".to_string(),
            content: json_content(schema),
        })
    }

    fn operation(
        operation_id: Option<&str>,
        request_body: Option<RequestBodyOrReference>,
        responses: Vec<(&str, ResponseOrReference)>,
    ) -> Operation {
        Operation {
            operation_id: operation_id.map(str::to_string),
            request_body,
            responses: responses
                .into_iter()
                .map(|(status, response)| (status.to_string(), response))
                .collect(),
            ..Default::default()
        }
    }

    fn login_operation() -> Operation {
        operation(
            Some("login_login_post"),
            Some(json_request_body(object_schema(
                "AuthInput",
                vec![("email", scalar("string")), ("password", scalar("string"))],
            ))),
            vec![(
                "200",
                ok_response(object_schema("AuthToken", vec![("token", scalar("string"))])),
            )],
        )
    }

    fn v3_document(paths: Vec<(&str, PathItem)>) -> OpenApiDocument {
        OpenApiDocument::V3(DocumentV3 {
            openapi: "3.0.2".to_string(),
            info: Info {
                title: "Test API".to_string(),
                version: "0.1.0".to_string(),
                description: None,
            },
            paths: paths
                .into_iter()
                .map(|(path, item)| (path.to_string(), item))
                .collect(),
            components: None,
        })
    }

    #[test]
    fn test_convert_single_post_operation() {
        let document = v3_document(vec![(
            "/login",
            PathItem {
                post: Some(login_operation()),
                ..Default::default()
            },
        )]);

        let result = ActionConverter::with_defaults().convert(&document).unwrap();

        assert_eq!(result.actions.len(), 1);
        let action = &result.actions[0];
        assert_eq!(action.name, "login");
        assert_eq!(action.definition.handler, "http://localhost:8000/api/login");
        assert_eq!(action.definition.output_type, "AuthToken!");
        assert_eq!(action.definition.r#type, ActionType::Mutation);
        assert_eq!(action.definition.kind, ActionKind::Synchronous);
        assert_eq!(action.definition.arguments.len(), 1);
        assert_eq!(action.definition.arguments[0].name, "params");
        assert_eq!(action.definition.arguments[0].r#type, "AuthInput!");
        assert_eq!(
            action.definition.request_transform.body,
            r#"{ "email": {{$body.input.params.email}}, "password": {{$body.input.params.password}} }"#
        );

        assert_eq!(result.custom_types.input_objects.len(), 1);
        assert_eq!(result.custom_types.input_objects[0].name, "AuthInput");
        assert_eq!(result.custom_types.objects.len(), 1);
        assert_eq!(result.custom_types.objects[0].name, "AuthToken");
    }

    #[test]
    fn test_missing_operation_id_is_fatal_and_names_the_operation() {
        let mut op = login_operation();
        op.operation_id = None;
        let document = v3_document(vec![(
            "/login",
            PathItem {
                post: Some(op),
                ..Default::default()
            },
        )]);

        let err = ActionConverter::with_defaults()
            .convert(&document)
            .unwrap_err();
        assert_eq!(err.to_string(), "operationId is not set for post /login");
    }

    #[test]
    fn test_missing_request_body_is_fatal() {
        let mut op = login_operation();
        op.request_body = None;
        let document = v3_document(vec![(
            "/login",
            PathItem {
                post: Some(op),
                ..Default::default()
            },
        )]);

        let err = ActionConverter::with_defaults()
            .convert(&document)
            .unwrap_err();
        assert!(matches!(err, ActionGenError::MissingRequestBody { .. }));
    }

    #[test]
    fn test_request_body_without_json_schema_skips_the_operation() {
        // Declared body, but only form-encoded content: soft skip, not an error.
        let mut op = login_operation();
        op.request_body = Some(OrReference::Item(RequestBody {
            content: IndexMap::from([(
                "application/x-www-form-urlencoded".to_string(),
                MediaType {
                    schema: Some(OrReference::Item(object_schema("Form", vec![]))),
                },
            )]),
            required: true,
            description: None,
        }));
        let document = v3_document(vec![(
            "/login",
            PathItem {
                post: Some(op),
                ..Default::default()
            },
        )]);

        let result = ActionConverter::with_defaults().convert(&document).unwrap();
        assert!(result.actions.is_empty());
        assert!(result.custom_types.input_objects.is_empty());
        assert!(result.custom_types.objects.is_empty());
    }

    #[test]
    fn test_request_schema_without_properties_skips_the_operation() {
        let mut op = login_operation();
        op.request_body = Some(json_request_body(Schema {
            title: Some("Opaque".to_string()),
            r#type: Some("object".to_string()),
            ..Default::default()
        }));
        let document = v3_document(vec![(
            "/login",
            PathItem {
                post: Some(op),
                ..Default::default()
            },
        )]);

        let result = ActionConverter::with_defaults().convert(&document).unwrap();
        assert!(result.actions.is_empty());
    }

    #[test]
    fn test_referenced_request_schema_skips_the_operation() {
        let mut op = login_operation();
        op.request_body = Some(OrReference::Item(RequestBody {
            content: IndexMap::from([(
                JSON_CONTENT_TYPE.to_string(),
                MediaType {
                    schema: Some(OrReference::Reference(Reference {
                        reference: "#/components/schemas/AuthInput".to_string(),
                    })),
                },
            )]),
            required: true,
            description: None,
        }));
        let document = v3_document(vec![(
            "/login",
            PathItem {
                post: Some(op),
                ..Default::default()
            },
        )]);

        let result = ActionConverter::with_defaults().convert(&document).unwrap();
        assert!(result.actions.is_empty());
    }

    #[test]
    fn test_missing_success_response_is_fatal() {
        let mut op = login_operation();
        op.responses.shift_remove("200");
        op.responses.insert(
            "201".to_string(),
            ok_response(object_schema("AuthToken", vec![("token", scalar("string"))])),
        );
        let document = v3_document(vec![(
            "/login",
            PathItem {
                post: Some(op),
                ..Default::default()
            },
        )]);

        let err = ActionConverter::with_defaults()
            .convert(&document)
            .unwrap_err();
        assert_eq!(err.to_string(), "response is not set for post /login");
    }

    #[test]
    fn test_success_response_without_json_schema_is_fatal() {
        // The request-side soft skip does not apply to responses.
        let mut op = login_operation();
        op.responses.insert(
            "200".to_string(),
            OrReference::Item(Response {
                description: "no content".to_string(),
                content: IndexMap::new(),
            }),
        );
        let document = v3_document(vec![(
            "/login",
            PathItem {
                post: Some(op),
                ..Default::default()
            },
        )]);

        let err = ActionConverter::with_defaults()
            .convert(&document)
            .unwrap_err();
        assert_eq!(err.to_string(), "responseSchema is not set for post /login");
    }

    #[test]
    fn test_get_maps_to_query_and_other_methods_to_mutation() {
        let item = PathItem {
            get: Some(login_operation()),
            post: Some(login_operation()),
            put: Some(login_operation()),
            delete: Some(login_operation()),
        };
        let document = v3_document(vec![("/login", item)]);

        let result = ActionConverter::with_defaults().convert(&document).unwrap();
        let types: Vec<ActionType> = result
            .actions
            .iter()
            .map(|action| action.definition.r#type)
            .collect();
        assert_eq!(
            types,
            [
                ActionType::Query,
                ActionType::Mutation,
                ActionType::Mutation,
                ActionType::Mutation,
            ]
        );
    }

    #[test]
    fn test_actions_follow_path_then_method_order() {
        let document = v3_document(vec![
            (
                "/b",
                PathItem {
                    post: Some(login_operation()),
                    get: Some(login_operation()),
                    ..Default::default()
                },
            ),
            (
                "/a",
                PathItem {
                    put: Some(login_operation()),
                    ..Default::default()
                },
            ),
        ]);

        let result = ActionConverter::with_defaults().convert(&document).unwrap();
        let names_and_types: Vec<(&str, ActionType)> = result
            .actions
            .iter()
            .map(|action| (action.name.as_str(), action.definition.r#type))
            .collect();
        // Path declaration order first, then the fixed get/post/put/delete order.
        assert_eq!(
            names_and_types,
            [
                ("b", ActionType::Query),
                ("b", ActionType::Mutation),
                ("a", ActionType::Mutation),
            ]
        );
    }

    #[test]
    fn test_action_name_strips_every_path_separator() {
        let document = v3_document(vec![(
            "/a/b",
            PathItem {
                post: Some(login_operation()),
                ..Default::default()
            },
        )]);

        let result = ActionConverter::with_defaults().convert(&document).unwrap();
        assert_eq!(result.actions[0].name, "ab");
        assert_eq!(result.actions[0].definition.handler, "http://localhost:8000/api/a/b");
    }

    #[test]
    fn test_handler_base_url_is_configurable() {
        let converter = ActionConverter::new(ConvertOptions {
            handler_base_url: "http://backend:9000".to_string(),
        });
        let document = v3_document(vec![(
            "/login",
            PathItem {
                post: Some(login_operation()),
                ..Default::default()
            },
        )]);

        let result = converter.convert(&document).unwrap();
        assert_eq!(result.actions[0].definition.handler, "http://backend:9000/login");
    }

    #[test]
    fn test_repeated_identical_schema_registers_once() {
        let document = v3_document(vec![
            (
                "/login",
                PathItem {
                    post: Some(login_operation()),
                    ..Default::default()
                },
            ),
            (
                "/relogin",
                PathItem {
                    post: Some(login_operation()),
                    ..Default::default()
                },
            ),
        ]);

        let result = ActionConverter::with_defaults().convert(&document).unwrap();
        assert_eq!(result.actions.len(), 2);
        assert_eq!(result.custom_types.input_objects.len(), 1);
        assert_eq!(result.custom_types.objects.len(), 1);
    }

    #[test]
    fn test_conflicting_type_names_abort_the_run() {
        let mut other = login_operation();
        other.request_body = Some(json_request_body(object_schema(
            "AuthInput",
            vec![("username", scalar("string"))],
        )));
        let document = v3_document(vec![
            (
                "/login",
                PathItem {
                    post: Some(login_operation()),
                    ..Default::default()
                },
            ),
            (
                "/other",
                PathItem {
                    post: Some(other),
                    ..Default::default()
                },
            ),
        ]);

        let err = ActionConverter::with_defaults()
            .convert(&document)
            .unwrap_err();
        assert!(matches!(err, ActionGenError::ConflictingTypeName(name) if name == "AuthInput"));
    }

    #[test]
    fn test_v2_document_is_rejected() {
        let document = OpenApiDocument::V2(DocumentV2 {
            swagger: "2.0".to_string(),
            info: Info {
                title: "Legacy".to_string(),
                version: "1.0".to_string(),
                description: None,
            },
            paths: IndexMap::new(),
        });

        let err = ActionConverter::with_defaults()
            .convert(&document)
            .unwrap_err();
        assert!(matches!(err, ActionGenError::UnimplementedDocumentVersion));
    }

    #[test]
    fn test_request_body_template_layout() {
        let input_type = CustomType {
            name: "AuthInput".to_string(),
            fields: vec![
                CustomTypeField {
                    name: "email".to_string(),
                    r#type: "String!".to_string(),
                },
                CustomTypeField {
                    name: "password".to_string(),
                    r#type: "String!".to_string(),
                },
            ],
        };
        assert_eq!(
            request_body_template(&input_type),
            r#"{ "email": {{$body.input.params.email}}, "password": {{$body.input.params.password}} }"#
        );
    }

    #[test]
    fn test_request_body_template_with_no_fields() {
        let input_type = CustomType {
            name: "Empty".to_string(),
            fields: vec![],
        };
        assert_eq!(request_body_template(&input_type), "{  }");
    }
}
