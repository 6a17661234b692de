use crate::error::PersonServiceError;
use crate::service::PersonService;
use crate::state::PersonAppState;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response, Result},
};
use metrics_exporter_prometheus::PrometheusHandle;
use people_core::PersonEngine;
use people_core::model::{Person, PersonId};
use requests::CreatePersonRequest;
use responses::PersonResponse;
use routing::RouterBuilder;
use routing::error::EndpointError;
use tracing::{info, instrument};
use utoipa::OpenApi;

mod requests;
mod responses;

const PERSON_ROOT_PATH: &str = "/person";

#[derive(OpenApi)]
#[openapi(
    nest(
        (path = PERSON_ROOT_PATH, api = PersonDocs),
    )
)]
struct ApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_person, create_person))]
struct PersonDocs;

const PERSON_GET_PATH: &str = "/{person_id}";
const PERSON_CREATE_PATH: &str = "/";

/// Builds the person routes. Metrics are served at `/metrics` when a handle is given.
pub fn build<E: PersonEngine>(
    app_state: PersonAppState<E>,
    metrics_handle: Option<PrometheusHandle>,
) -> Router {
    let builder = RouterBuilder::new(PERSON_ROOT_PATH)
        .get(PERSON_GET_PATH, get_person::<E>)
        .post(PERSON_CREATE_PATH, create_person::<E>);

    match metrics_handle {
        Some(handle) => {
            info!("metrics enabled, setting up metrics handler");
            builder.build_with_metrics(app_state, ApiDoc::openapi(), handle)
        }
        None => {
            info!("metrics not enabled, setting up service unavailable metrics handler");
            builder.build_no_metrics(app_state, ApiDoc::openapi())
        }
    }
}

/// Get the person associated with the given id.
#[utoipa::path(
    get,
    path = PERSON_GET_PATH,
    responses(
        (status = OK, description = "A person was found that matched the given id", body = Person),
        (status = NOT_FOUND, description = "No person with the given id exists. The body is empty"),
        (status = BAD_REQUEST, description = "The id is not an integer"),
    ),
    params(
        ("person_id" = i64, Path, description = "The id of the person to find"),
    )
)]
#[instrument(skip(service), err(Debug))]
pub async fn get_person<E>(
    State(service): State<PersonService<E>>,
    Path(person_id): Path<PersonId>,
) -> Result<Response, EndpointError<PersonServiceError>>
where
    E: PersonEngine,
{
    let person = service.get(person_id).await?;

    Ok(person
        .map(|p| PersonResponse::ok(p).into_response())
        .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response()))
}

/// Save a new person and return it with its assigned id.
#[utoipa::path(
    post,
    path = PERSON_CREATE_PATH,
    responses(
        (status = CREATED, description = "The person was saved", body = Person),
        (status = UNPROCESSABLE_ENTITY, description = "The name was missing or not a string"),
    ),
    request_body = CreatePersonRequest
)]
#[instrument(skip_all, err(Debug), fields(req.name = person.name.as_str()))]
pub async fn create_person<E>(
    State(service): State<PersonService<E>>,
    Json(person): Json<CreatePersonRequest>,
) -> Result<Response, EndpointError<PersonServiceError>>
where
    E: PersonEngine,
{
    let saved = service.create(person.into()).await?;
    Ok(PersonResponse::created(saved).into_response())
}
