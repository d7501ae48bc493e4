//! User REST API handlers
//!
//! `/api/user/` operates on the collection, `/api/user/{id}` on one user.
//! Create and delete answer with the full list of users after the change.

use crate::{ApiError, ApiResult, AppState, UserDto, UserRequest, parse_user_id};

use ua_core::NewUser;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/user/
///
/// List all users in storage order
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    Ok(Json(all_users(&state).await?))
}

/// POST /api/user/
///
/// Create a user and return the updated list with 201
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Vec<UserDto>>)> {
    let Json(req) = payload?;
    let input = NewUser::parse(req.name.as_deref(), req.email.as_deref(), &state.limits)?;

    let user = state.users().create(&input).await?;

    log::info!("Created user {} ({}) via REST API", user.id, user.name);

    Ok((StatusCode::CREATED, Json(all_users(&state).await?)))
}

/// GET /api/user/{id}
///
/// Get a single user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let user_id = parse_user_id(&id)?;

    let user = state
        .users()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", user_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(user.into()))
}

/// PATCH /api/user/{id}
///
/// Overwrite name and email. Input is validated before the lookup.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let user_id = parse_user_id(&id)?;
    let Json(req) = payload?;
    let input = NewUser::parse(req.name.as_deref(), req.email.as_deref(), &state.limits)?;

    let repo = state.users();
    let mut user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", user_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    user.apply(input);

    // Row can vanish between the lookup and the write
    if !repo.update(&user).await? {
        return Err(ApiError::NotFound {
            message: format!("User {} not found", user_id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Updated user {} ({}) via REST API", user.id, user.name);

    Ok(Json(user.into()))
}

/// DELETE /api/user/{id}
///
/// Remove a user and return the remaining list with 204
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<Vec<UserDto>>)> {
    let user_id = parse_user_id(&id)?;

    if !state.users().delete(user_id).await? {
        return Err(ApiError::NotFound {
            message: format!("User {} not found", user_id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted user {} via REST API", user_id);

    Ok((StatusCode::NO_CONTENT, Json(all_users(&state).await?)))
}

// =============================================================================
// Helpers
// =============================================================================

async fn all_users(state: &AppState) -> ApiResult<Vec<UserDto>> {
    let users = state.users().find_all().await?;
    Ok(users.into_iter().map(UserDto::from).collect())
}
