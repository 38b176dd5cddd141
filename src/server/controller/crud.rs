//! Axum adapters exposing a `BaseController` as a family of routes.
//!
//! Each entity implements `Resource` once and mounts `routes::<Entity>()` under
//! its own prefix. The handlers only extract the request, build the caller
//! context and delegate to the controller.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{
    model::api::ResponseEnvelope,
    server::{
        controller::base::BaseController,
        data::repository::Repository,
        error::AppError,
        middleware::auth::Actor,
        model::record::EntityForm,
        state::AppState,
        util::parse::split_ids,
    },
};

pub static CRUD_TAG: &str = "crud";

/// Binds an entity's form to its repository.
pub trait Resource: Send + Sync + 'static {
    type Form: EntityForm;
    type Repo: Repository<Record = <Self::Form as EntityForm>::Record> + 'static;

    fn repository(db: &DatabaseConnection) -> Self::Repo;

    fn controller(state: &AppState) -> BaseController<Self::Form, Self::Repo> {
        BaseController::new(Self::repository(&state.db), state.page_size)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteManyParams {
    #[serde(default)]
    pub page_no: i64,
}

/// Routes of one entity, relative to the prefix it is nested under.
pub fn routes<T: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(get_default::<T>))
        .route("/get/{id}", get(get_one::<T>))
        .route("/delete/{id}", get(delete_one::<T>))
        .route("/deleteMany/{ids}", post(delete_many::<T>))
        .route("/search", post(search::<T>).get(search::<T>))
        .route("/search/{page_no}", post(search_page::<T>))
        .route("/save", post(save::<T>))
}

/// Liveness echo naming the entity and the server time.
///
/// # Returns
/// - `200 OK` - Envelope with `"I am okay <label> --<time>"` as data
#[utoipa::path(
    get,
    path = "/api/{entity}",
    tag = CRUD_TAG,
    params(
        ("entity" = String, Path, description = "Resource name: user, role or course")
    ),
    responses(
        (status = 200, description = "Liveness message", body = ResponseEnvelope)
    ),
)]
pub async fn get_default<T: Resource>(State(state): State<AppState>) -> Json<ResponseEnvelope> {
    Json(T::controller(&state).get_default())
}

/// Fetches one record by id.
///
/// # Arguments
/// - `id` - Numeric record id from the path
///
/// # Returns
/// - `200 OK` - Envelope with the record as data, or `"Record not found"`
/// - `400 Bad Request` - `id` is not a number
/// - `401 Unauthorized` - Bearer token sent but invalid
#[utoipa::path(
    get,
    path = "/api/{entity}/get/{id}",
    tag = CRUD_TAG,
    params(
        ("entity" = String, Path, description = "Resource name: user, role or course"),
        ("id" = i32, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Record or not found message", body = ResponseEnvelope),
        (status = 400, description = "Malformed id", body = ResponseEnvelope),
        (status = 401, description = "Invalid bearer token", body = ResponseEnvelope)
    ),
)]
pub async fn get_one<T: Resource>(
    State(state): State<AppState>,
    Actor(ctx): Actor,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let Path(id) = id?;

    Ok(Json(T::controller(&state).get(id, &ctx).await))
}

/// Deletes one record, returning it as data.
///
/// # Arguments
/// - `id` - Numeric record id from the path
///
/// # Returns
/// - `200 OK` - Envelope with the removed record, or a failure when none matched
/// - `400 Bad Request` - `id` is not a number
#[utoipa::path(
    get,
    path = "/api/{entity}/delete/{id}",
    tag = CRUD_TAG,
    params(
        ("entity" = String, Path, description = "Resource name: user, role or course"),
        ("id" = i32, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Deleted record or failure message", body = ResponseEnvelope),
        (status = 400, description = "Malformed id", body = ResponseEnvelope)
    ),
)]
pub async fn delete_one<T: Resource>(
    State(state): State<AppState>,
    Actor(ctx): Actor,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let Path(id) = id?;

    Ok(Json(T::controller(&state).delete(id, &ctx).await))
}

/// Deletes several records, then returns the requested page of the filter.
///
/// # Arguments
/// - `ids` - Comma separated ids from the path
/// - `params` - `pageNo` of the page to return afterwards
/// - `form` - Search filter applied to the returned page
///
/// # Returns
/// - `200 OK` - Envelope with the refreshed page, or the first failure
/// - `400 Bad Request` - Malformed query or body
#[utoipa::path(
    post,
    path = "/api/{entity}/deleteMany/{ids}",
    tag = CRUD_TAG,
    params(
        ("entity" = String, Path, description = "Resource name: user, role or course"),
        ("ids" = String, Path, description = "Comma separated record ids"),
        ("pageNo" = Option<i64>, Query, description = "Page to return (default: 0)")
    ),
    request_body(content = Object, description = "Entity form used as the search filter"),
    responses(
        (status = 200, description = "Refreshed page or failure message", body = ResponseEnvelope),
        (status = 400, description = "Malformed request", body = ResponseEnvelope)
    ),
)]
pub async fn delete_many<T: Resource>(
    State(state): State<AppState>,
    Actor(ctx): Actor,
    ids: Result<Path<String>, PathRejection>,
    params: Result<Query<DeleteManyParams>, QueryRejection>,
    form: Result<Json<T::Form>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let Path(ids) = ids?;
    let Query(params) = params?;
    let Json(form) = form?;

    let res = T::controller(&state)
        .delete_many(&split_ids(&ids), params.page_no, &form, &ctx)
        .await;

    Ok(Json(res))
}

/// Searches with the page driven by the form's `operation`.
///
/// # Arguments
/// - `form` - Entity form; `pageNo` and `operation` select the page
///
/// # Returns
/// - `200 OK` - Envelope with the page as data and the resolved `pageNo`
/// - `400 Bad Request` - Body is not a form of this entity
#[utoipa::path(
    post,
    path = "/api/{entity}/search",
    tag = CRUD_TAG,
    params(
        ("entity" = String, Path, description = "Resource name: user, role or course")
    ),
    request_body(content = Object, description = "Entity form used as the search filter"),
    responses(
        (status = 200, description = "Page of records", body = ResponseEnvelope),
        (status = 400, description = "Malformed form", body = ResponseEnvelope)
    ),
)]
pub async fn search<T: Resource>(
    State(state): State<AppState>,
    Actor(ctx): Actor,
    form: Result<Json<T::Form>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let Json(mut form) = form?;

    Ok(Json(T::controller(&state).search(&mut form, &ctx).await))
}

/// Searches an explicit page and reports the size of the next one.
///
/// # Arguments
/// - `page_no` - Page to return, negative values mean the first page
/// - `form` - Entity form used as the filter
///
/// # Returns
/// - `200 OK` - Envelope with the page as data and `nextList` under results
/// - `400 Bad Request` - Malformed page number or form
#[utoipa::path(
    post,
    path = "/api/{entity}/search/{page_no}",
    tag = CRUD_TAG,
    params(
        ("entity" = String, Path, description = "Resource name: user, role or course"),
        ("page_no" = i64, Path, description = "Zero based page number")
    ),
    request_body(content = Object, description = "Entity form used as the search filter"),
    responses(
        (status = 200, description = "Page of records with next page size", body = ResponseEnvelope),
        (status = 400, description = "Malformed request", body = ResponseEnvelope)
    ),
)]
pub async fn search_page<T: Resource>(
    State(state): State<AppState>,
    Actor(ctx): Actor,
    page_no: Result<Path<i64>, PathRejection>,
    form: Result<Json<T::Form>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let Path(page_no) = page_no?;
    let Json(form) = form?;

    let res = T::controller(&state)
        .search_page(&form, page_no, &ctx)
        .await;

    Ok(Json(res))
}

/// Validates and inserts or updates a record.
///
/// # Arguments
/// - `form` - Entity form; a positive `id` selects the update path
///
/// # Returns
/// - `200 OK` - Envelope with the record id, input errors or a duplicate message
/// - `400 Bad Request` - Body is not a form of this entity
#[utoipa::path(
    post,
    path = "/api/{entity}/save",
    tag = CRUD_TAG,
    params(
        ("entity" = String, Path, description = "Resource name: user, role or course")
    ),
    request_body(content = Object, description = "Entity form to persist"),
    responses(
        (status = 200, description = "Saved id, input errors or conflict", body = ResponseEnvelope),
        (status = 400, description = "Malformed form", body = ResponseEnvelope)
    ),
)]
pub async fn save<T: Resource>(
    State(state): State<AppState>,
    Actor(ctx): Actor,
    form: Result<Json<T::Form>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let Json(form) = form?;

    Ok(Json(T::controller(&state).save(&form, &ctx).await))
}
