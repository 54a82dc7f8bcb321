use serde::Deserialize;

// YouTube API レスポンス型
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveChatMessagesResponse {
    /// 次回リクエストまでの推奨待機時間（ミリ秒）
    #[serde(rename = "pollingIntervalMillis", default)]
    pub polling_interval_millis: u64,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub items: Vec<LiveChatMessageItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveChatMessageItem {
    pub id: String,
    /// `part=id` の場合は含まれない
    #[serde(default)]
    pub snippet: MessageSnippet,
    #[serde(rename = "authorDetails", default)]
    pub author_details: AuthorDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageSnippet {
    #[serde(rename = "type", default)]
    pub message_type: String,
    #[serde(rename = "publishedAt", default)]
    pub published_at: String,
    #[serde(rename = "displayMessage", default)]
    pub display_message: String,
    #[serde(rename = "superChatDetails")]
    pub super_chat_details: Option<SuperChatDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuperChatDetails {
    /// APIはuint64を文字列で返す
    #[serde(rename = "amountMicros", default)]
    pub amount_micros: String,
    #[serde(default)]
    pub currency: String,
    #[serde(rename = "amountDisplayString", default)]
    pub amount_display_string: String,
    #[serde(rename = "userComment", default)]
    pub user_comment: String,
    #[serde(default)]
    pub tier: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorDetails {
    #[serde(rename = "channelId", default)]
    pub channel_id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(rename = "isChatSponsor", default)]
    pub is_chat_sponsor: bool,
    #[serde(rename = "isChatOwner", default)]
    pub is_chat_owner: bool,
    #[serde(rename = "isChatModerator", default)]
    pub is_chat_moderator: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoItem {
    #[serde(rename = "liveStreamingDetails")]
    pub live_streaming_details: Option<LiveStreamingDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveStreamingDetails {
    #[serde(rename = "activeLiveChatId")]
    pub active_live_chat_id: Option<String>,
}

/// liveChatMessages.list のリクエストパラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveChatMessagesRequest<'a> {
    pub live_chat_id: &'a str,
    pub part: &'a str,
    pub page_token: Option<&'a str>,
    pub max_results: Option<u32>,
}
