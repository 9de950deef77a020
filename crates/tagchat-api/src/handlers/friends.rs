//! Friend handlers
//!
//! Endpoints for the friend-request workflow and the friend list.

use axum::{
    extract::{Path, State},
    Json,
};
use tagchat_core::Snowflake;
use tagchat_service::dto::{FriendRequestResponse, FriendResponse, SendFriendRequestRequest};
use tagchat_service::FriendService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Send a friend request by tag
///
/// POST /friends/requests
pub async fn send_request(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SendFriendRequestRequest>,
) -> ApiResult<Created<Json<FriendRequestResponse>>> {
    let service = FriendService::new(state.service_context());
    let response = service.send_request(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Pending requests addressed to the caller
///
/// GET /friends/requests/incoming
pub async fn incoming_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FriendRequestResponse>>> {
    let service = FriendService::new(state.service_context());
    let response = service.list_incoming(auth.user_id).await?;
    Ok(Json(response))
}

/// Pending requests sent by the caller
///
/// GET /friends/requests/outgoing
pub async fn outgoing_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FriendRequestResponse>>> {
    let service = FriendService::new(state.service_context());
    let response = service.list_outgoing(auth.user_id).await?;
    Ok(Json(response))
}

/// Accept a pending request
///
/// POST /friends/requests/{request_id}/accept
pub async fn accept_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(request_id): Path<String>,
) -> ApiResult<Json<FriendResponse>> {
    let request_id = parse_request_id(&request_id)?;
    let service = FriendService::new(state.service_context());
    let response = service.accept_request(auth.user_id, request_id).await?;
    Ok(Json(response))
}

/// Reject a pending request
///
/// POST /friends/requests/{request_id}/reject
pub async fn reject_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(request_id): Path<String>,
) -> ApiResult<NoContent> {
    let request_id = parse_request_id(&request_id)?;
    let service = FriendService::new(state.service_context());
    service.reject_request(auth.user_id, request_id).await?;
    Ok(NoContent)
}

/// The caller's friend list
///
/// GET /friends
pub async fn list_friends(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FriendResponse>>> {
    let service = FriendService::new(state.service_context());
    let response = service.list_friends(auth.user_id).await?;
    Ok(Json(response))
}

fn parse_request_id(raw: &str) -> Result<Snowflake, ApiError> {
    Snowflake::parse(raw).map_err(|_| ApiError::invalid_path("Invalid request_id format"))
}
