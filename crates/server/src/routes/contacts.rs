use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageResponse;
use service::contacts::domain::{Contact, ContactInput, UpcomingBirthday};
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;

type ApiResult<T> = Result<T, ApiError>;

#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    responses(
        (status = 200, description = "All contacts with their phones", body = [crate::openapi::ContactDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_contacts(State(state): State<ServerState>) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = state
        .contacts
        .list()
        .await
        .map_err(|e| ApiError::from_service(e, "failed to get contacts"))?;
    info!(count = contacts.len(), "list contacts");
    Ok(Json(contacts))
}

#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = i32, Path, description = "Contact id")),
    responses(
        (status = 200, description = "The contact", body = crate::openapi::ContactDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_contact(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Contact>> {
    let Path(id) = id?;
    let contact = state
        .contacts
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(e, "failed to get contact"))?;
    Ok(Json(contact))
}

#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contacts",
    request_body = crate::openapi::ContactInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MessageDoc),
        (status = 400, description = "Missing name or phones", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_contact(
    State(state): State<ServerState>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(input) = payload?;
    let id = state
        .contacts
        .create(input)
        .await
        .map_err(|e| ApiError::from_service(e, "failed to create contact"))?;
    Ok((StatusCode::CREATED, Json(MessageResponse::with_id("Contact created", id))))
}

#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = i32, Path, description = "Contact id")),
    request_body = crate::openapi::ContactInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 400, description = "Missing name or phones", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_contact(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    // An unknown id wins over a bad body, so resolve it before the payload.
    let contacts = &state.contacts;
    contacts
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(e, "failed to update contact"))?;
    let Json(input) = payload?;
    contacts
        .update(id, input)
        .await
        .map_err(|e| ApiError::from_service(e, "failed to update contact"))?;
    Ok(Json(MessageResponse::new("Contact updated")))
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = i32, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Deleted together with its phones", body = crate::openapi::MessageDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_contact(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    state
        .contacts
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(e, "failed to delete contact"))?;
    Ok(Json(MessageResponse::new("Contact deleted")))
}

#[utoipa::path(
    get,
    path = "/api/groups",
    tag = "contacts",
    responses(
        (status = 200, description = "Distinct non-empty group labels", body = [String]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_groups(State(state): State<ServerState>) -> ApiResult<Json<Vec<String>>> {
    let groups = state
        .contacts
        .groups()
        .await
        .map_err(|e| ApiError::from_service(e, "failed to get groups"))?;
    Ok(Json(groups))
}

#[utoipa::path(
    get,
    path = "/api/birthdays",
    tag = "contacts",
    responses(
        (status = 200, description = "Birthdays in the next 30 days, ordered by MM-DD", body = [crate::openapi::UpcomingBirthdayDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_birthdays(State(state): State<ServerState>) -> ApiResult<Json<Vec<UpcomingBirthday>>> {
    let upcoming = state
        .contacts
        .upcoming_birthdays()
        .await
        .map_err(|e| ApiError::from_service(e, "failed to get birthdays"))?;
    Ok(Json(upcoming))
}
