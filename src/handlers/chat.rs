use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{BotResponseCategory, QuickAction};
use crate::services::responder;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    reply: &'static str,
    category: BotResponseCategory,
}

// POST /api/chat
pub async fn send_message(Json(payload): Json<ChatRequest>) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("message is empty".to_string()));
    }

    let category = responder::categorize(message);
    let reply = responder::reply_for(category, &mut rand::thread_rng());
    tracing::debug!(category = category.as_str(), "chat reply");

    Ok(Json(ChatResponse { reply, category }))
}

#[derive(Serialize)]
pub struct QuickActionResponse {
    reply: &'static str,
    scroll_to_booking: bool,
}

// POST /api/chat/quick/:action
pub async fn quick_action(Path(action): Path<String>) -> Result<Json<QuickActionResponse>, AppError> {
    let action = QuickAction::parse(&action)
        .ok_or_else(|| AppError::NotFound(format!("unknown quick action: {action}")))?;

    Ok(Json(QuickActionResponse {
        reply: responder::quick_reply(action),
        scroll_to_booking: action.scrolls_to_booking(),
    }))
}
