//! User handlers
//!
//! Endpoints for the caller's profile and public tag lookup.

use axum::{
    extract::{Path, State},
    Json,
};
use tagchat_core::UserTag;
use tagchat_service::dto::{ProfileResponse, PublicUserResponse, UpdateProfileRequest};
use tagchat_service::UserService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the caller's profile
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_profile(auth.user_id).await?;
    Ok(Json(response))
}

/// Partially update the caller's profile
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Look up a user's public profile by tag
///
/// GET /users/{tag}
pub async fn get_user_by_tag(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(tag): Path<String>,
) -> ApiResult<Json<PublicUserResponse>> {
    let tag = UserTag::parse(&tag)?;
    let service = UserService::new(state.service_context());
    let response = service.get_by_tag(&tag).await?;
    Ok(Json(response))
}
