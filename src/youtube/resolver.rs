use serde::Serialize;

use super::client::LiveChatApi;
use super::errors::ResolutionError;

/// 解決済みのライブチャットセッション
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub video_id: String,
    pub live_chat_id: String,
}

/// 動画IDからactiveLiveChatIdを取得
///
/// リトライはしない。失敗した場合はハンドラーの構築自体を中止する
pub async fn resolve_chat_session<A>(
    api: &A,
    video_id: &str,
) -> Result<ChatSession, ResolutionError>
where
    A: LiveChatApi + ?Sized,
{
    let response = api
        .list_live_streaming_details(video_id)
        .await
        .map_err(ResolutionError::Transport)?;

    let item = response.items.into_iter().next().ok_or_else(|| {
        log::warn!("Video not found: {}", video_id);
        ResolutionError::NotFound
    })?;

    let live_chat_id = item
        .live_streaming_details
        .and_then(|details| details.active_live_chat_id)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            log::warn!("No active live chat for video: {}", video_id);
            ResolutionError::NoActiveChat(video_id.to_string())
        })?;

    log::info!("Live chat ID retrieved: {}", live_chat_id);
    Ok(ChatSession {
        video_id: video_id.to_string(),
        live_chat_id,
    })
}
