//! OpenAPI document for a generic resource router.
//!
//! The generic handlers cannot carry `#[utoipa::path]`, so the five operations
//! are assembled with utoipa's builders. Paths are relative (`""` and `/{id}`);
//! the application nests each document under its mount point with
//! [`OpenApi::nest`].

use axum_helpers::ErrorResponse;
use utoipa::openapi::content::{Content, ContentBuilder};
use utoipa::openapi::path::{
    HttpMethod, Operation, OperationBuilder, Parameter, ParameterBuilder, ParameterIn,
    PathItemBuilder, PathsBuilder,
};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::response::{Response, ResponseBuilder};
use utoipa::openapi::schema::{Array, ComponentsBuilder, ObjectBuilder, Ref, Schema};
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::{OpenApi, OpenApiBuilder, RefOr, Required};
use utoipa::{IntoParams, PartialSchema, ToSchema};

use crate::resource::{Resource, StoreKey};
use crate::service::{PageMeta, PageQuery};

const JSON: &str = "application/json";

pub fn openapi<R: Resource>() -> OpenApi {
    let mut schemas = Vec::new();
    collect::<R::Record>(&mut schemas);
    collect::<R::Create>(&mut schemas);
    collect::<R::Update>(&mut schemas);
    collect::<PageMeta>(&mut schemas);
    collect::<ErrorResponse>(&mut schemas);

    let collection = PathItemBuilder::new()
        .operation(HttpMethod::Get, list_operation::<R>())
        .operation(HttpMethod::Post, create_operation::<R>())
        .build();

    let item = PathItemBuilder::new()
        .operation(HttpMethod::Get, get_one_operation::<R>())
        .operation(HttpMethod::Patch, update_operation::<R>())
        .operation(HttpMethod::Delete, delete_operation::<R>())
        .build();

    OpenApiBuilder::new()
        .paths(
            PathsBuilder::new()
                .path("", collection)
                .path("/{id}", item),
        )
        .components(Some(ComponentsBuilder::new().schemas_from_iter(schemas).build()))
        .tags(Some(vec![TagBuilder::new().name(R::TAG).build()]))
        .build()
}

fn collect<T: ToSchema>(schemas: &mut Vec<(String, RefOr<Schema>)>) {
    schemas.push((T::name().into_owned(), <T as PartialSchema>::schema()));
    T::schemas(schemas);
}

fn schema_ref<T: ToSchema>() -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(T::name()))
}

fn json(schema: RefOr<Schema>) -> Content {
    ContentBuilder::new().schema(Some(schema)).build()
}

/// `{"data": <schema>}`
fn envelope(data: RefOr<Schema>) -> Content {
    let object = ObjectBuilder::new().property("data", data).required("data");
    json(RefOr::T(Schema::Object(object.build())))
}

fn success(description: &str, data: RefOr<Schema>) -> RefOr<Response> {
    RefOr::T(
        ResponseBuilder::new()
            .description(description)
            .content(JSON, envelope(data))
            .build(),
    )
}

fn failure(description: &str) -> RefOr<Response> {
    RefOr::T(
        ResponseBuilder::new()
            .description(description)
            .content(JSON, json(schema_ref::<ErrorResponse>()))
            .build(),
    )
}

fn id_parameter<R: Resource>() -> Parameter {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(format!("{} id", R::NAME)))
        .schema(Some(<R::Id as StoreKey>::schema()))
        .build()
}

fn operation<R: Resource>(id: &str, summary: String) -> OperationBuilder {
    OperationBuilder::new()
        .tag(R::TAG)
        .operation_id(Some(format!("{}_{}", id, R::PLURAL)))
        .summary(Some(summary))
}

fn list_operation<R: Resource>() -> Operation {
    let listing = ObjectBuilder::new()
        .property(
            R::PLURAL,
            RefOr::T(Schema::Array(Array::new(schema_ref::<R::Record>()))),
        )
        .required(R::PLURAL)
        .property("meta", schema_ref::<PageMeta>())
        .required("meta")
        .build();

    operation::<R>("list", format!("List {}", R::PLURAL))
        .parameters(Some(PageQuery::into_params(|| Some(ParameterIn::Query))))
        .response("200", success("One page of records", RefOr::T(Schema::Object(listing))))
        .response("400", failure("Malformed pagination query"))
        .response("500", failure("Store failure"))
        .build()
}

fn create_operation<R: Resource>() -> Operation {
    operation::<R>("create", format!("Create a {}", R::NAME))
        .request_body(Some(
            RequestBodyBuilder::new()
                .content(JSON, json(schema_ref::<R::Create>()))
                .required(Some(Required::True))
                .build(),
        ))
        .response("201", success("Created", schema_ref::<R::Record>()))
        .response("400", failure("Invalid input"))
        .response("500", failure("Store failure"))
        .build()
}

fn get_one_operation<R: Resource>() -> Operation {
    operation::<R>("get", format!("Get a {} by id", R::NAME))
        .parameter(id_parameter::<R>())
        .response("200", success("Found", schema_ref::<R::Record>()))
        .response("400", failure("Malformed id"))
        .response("404", failure("No record with this id"))
        .response("500", failure("Store failure"))
        .build()
}

fn update_operation<R: Resource>() -> Operation {
    operation::<R>("update", format!("Partially update a {}", R::NAME))
        .parameter(id_parameter::<R>())
        .request_body(Some(
            RequestBodyBuilder::new()
                .description(Some(
                    "Absent fields are kept; null clears nullable fields",
                ))
                .content(JSON, json(schema_ref::<R::Update>()))
                .required(Some(Required::True))
                .build(),
        ))
        .response("200", success("Updated", schema_ref::<R::Record>()))
        .response("400", failure("Invalid input"))
        .response("404", failure("No record with this id"))
        .response("500", failure("Store failure"))
        .build()
}

fn delete_operation<R: Resource>() -> Operation {
    operation::<R>("delete", format!("Delete a {}", R::NAME))
        .parameter(id_parameter::<R>())
        .response(
            "204",
            RefOr::T(ResponseBuilder::new().description("Deleted").build()),
        )
        .response("400", failure("Malformed id"))
        .response("404", failure("No record with this id"))
        .response("500", failure("Store failure"))
        .build()
}
