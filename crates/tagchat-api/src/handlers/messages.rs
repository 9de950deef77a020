//! Message handlers
//!
//! Endpoints for private messaging and channel messaging.

use axum::{
    extract::{Path, State},
    Json,
};
use tagchat_service::dto::{
    ChannelMessageResponse, ConversationEntryResponse, PrivateMessageResponse,
    SendChannelMessageRequest, SendMessageResponse, SendPrivateMessageRequest,
};
use tagchat_service::MessageService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Send a private message to a friend by tag
///
/// POST /messages/private
pub async fn send_private(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SendPrivateMessageRequest>,
) -> ApiResult<Created<Json<SendMessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.send_private(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// The latest page of the conversation with a friend, oldest first
///
/// GET /messages/private/{tag}
pub async fn conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tag): Path<String>,
) -> ApiResult<Json<Vec<PrivateMessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.conversation(auth.user_id, &tag).await?;
    Ok(Json(response))
}

/// The caller's conversations, newest activity first
///
/// GET /messages/conversations
pub async fn conversations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ConversationEntryResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.conversations(auth.user_id).await?;
    Ok(Json(response))
}

/// Post a message to a channel
///
/// POST /messages/channel
pub async fn send_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SendChannelMessageRequest>,
) -> ApiResult<Created<Json<SendMessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.send_channel(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// The latest page of a channel's history, oldest first
///
/// GET /channels/{channel}/messages
pub async fn channel_messages(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(channel): Path<String>,
) -> ApiResult<Json<Vec<ChannelMessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.channel_messages(&channel).await?;
    Ok(Json(response))
}
