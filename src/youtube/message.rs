use chrono::{DateTime, Utc};
use serde::Serialize;

use super::types::LiveChatMessageItem;
use crate::superchat::SuperChatTier;

/// ハンドラーへ渡すチャットメッセージ
///
/// 取得したアイテムごとに作られ、ディスパッチ後は保持しない
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub message: String,
    pub author_name: String,
    pub author_channel_id: String,
    pub is_member: bool,                     // → isMember (isChatSponsor)
    pub published_at: Option<DateTime<Utc>>, // → publishedAt
    pub message_kind: MessageKind,           // → messageKind
}

/// メッセージの分類（1メッセージにつき必ず1つ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MessageKind {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "member")]
    Member,
    #[serde(rename = "superChat", rename_all = "camelCase")]
    SuperChat {
        tier: SuperChatTier,
        comment: String,
        amount_display: String,
    },
}

impl MessageKind {
    /// 優先順位に従って分類する
    ///
    /// 1. スパチャ情報あり → SuperChat（メンバーかどうかは問わない）
    /// 2. 投稿者がメンバー → Member
    /// 3. それ以外 → Text
    pub fn classify(item: &LiveChatMessageItem) -> Self {
        if let Some(details) = &item.snippet.super_chat_details {
            return MessageKind::SuperChat {
                tier: SuperChatTier::from_api(details.tier),
                comment: details.user_comment.clone(),
                amount_display: details.amount_display_string.clone(),
            };
        }
        if item.author_details.is_chat_sponsor {
            return MessageKind::Member;
        }
        MessageKind::Text
    }
}

impl From<LiveChatMessageItem> for ChatMessage {
    fn from(item: LiveChatMessageItem) -> Self {
        let message_kind = MessageKind::classify(&item);

        let published_at = if item.snippet.published_at.is_empty() {
            None
        } else {
            match DateTime::parse_from_rfc3339(&item.snippet.published_at) {
                Ok(dt) => Some(dt.with_timezone(&Utc)),
                Err(e) => {
                    log::warn!(
                        "Failed to parse publishedAt for message {}: {}",
                        item.id,
                        e
                    );
                    None
                }
            }
        };

        ChatMessage {
            id: item.id,
            message: item.snippet.display_message,
            author_name: item.author_details.display_name,
            author_channel_id: item.author_details.channel_id,
            is_member: item.author_details.is_chat_sponsor,
            published_at,
            message_kind,
        }
    }
}
