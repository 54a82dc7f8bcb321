use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};

use super::{errors::YouTubeError, types::*};
use crate::config::http_timeout;
use crate::util::mask_credential;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// 認証情報
///
/// アクセストークンの取得・更新は呼び出し側（OAuth2クライアント）の責務
#[derive(Clone)]
pub enum Credential {
    /// `key` クエリパラメータで送るAPIキー
    ApiKey(String),
    /// `Authorization: Bearer` で送るOAuth2アクセストークン
    AccessToken(String),
}

impl Credential {
    fn masked(&self) -> String {
        match self {
            Credential::ApiKey(key) => format!("key {}", mask_credential(key)),
            Credential::AccessToken(token) => format!("bearer {}", mask_credential(token)),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.masked())
    }
}

/// ポーリングループが使うリモートAPI
#[async_trait]
pub trait LiveChatApi: Send + Sync {
    /// videos.list (part=liveStreamingDetails)
    async fn list_live_streaming_details(
        &self,
        video_id: &str,
    ) -> Result<VideoResponse, YouTubeError>;

    /// liveChatMessages.list
    async fn list_live_chat_messages(
        &self,
        request: &LiveChatMessagesRequest<'_>,
    ) -> Result<LiveChatMessagesResponse, YouTubeError>;
}

/// YouTube Data API v3 クライアント
#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    credential: Credential,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(credential: Credential) -> Result<Self, YouTubeError> {
        Self::with_base_url(credential, API_BASE)
    }

    /// APIのベースURLを差し替えて作成（モックサーバー向け）
    pub fn with_base_url(
        credential: Credential,
        base_url: impl Into<String>,
    ) -> Result<Self, YouTubeError> {
        let client = Client::builder().timeout(http_timeout()).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        log::debug!(
            "YouTube client created (base: {}, credential: {})",
            base_url,
            credential.masked()
        );
        Ok(Self {
            client,
            credential,
            base_url,
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self.client.get(format!("{}{}", self.base_url, path));
        match &self.credential {
            Credential::ApiKey(key) => request.query(&[("key", key.as_str())]),
            Credential::AccessToken(token) => request.bearer_auth(token),
        }
    }

    /// エラーレスポンスを分類する
    ///
    /// `not_found` は404の意味が呼び出し先で異なるため引数で受け取る
    async fn error_from_response(response: Response, not_found: YouTubeError) -> YouTubeError {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();

        match status {
            StatusCode::BAD_REQUEST if error_text.contains("keyInvalid") => {
                log::error!("API key is invalid");
                YouTubeError::InvalidCredential
            }
            StatusCode::BAD_REQUEST => {
                log::error!("YouTube API bad request: {}", error_text);
                YouTubeError::ParseError(format!("Bad request: {}", error_text))
            }
            StatusCode::UNAUTHORIZED => {
                log::error!("Unauthorized - credential invalid or expired");
                YouTubeError::InvalidCredential
            }
            StatusCode::FORBIDDEN => {
                if error_text.contains("quotaExceeded") {
                    log::error!("Quota exceeded - daily limit reached");
                    YouTubeError::QuotaExceeded
                } else if error_text.contains("rateLimitExceeded") {
                    log::warn!("Rate limit exceeded");
                    YouTubeError::RateLimitExceeded
                } else if error_text.contains("liveChatDisabled") {
                    log::warn!("Live chat is disabled");
                    YouTubeError::LiveChatDisabled
                } else {
                    log::error!("Credential invalid or insufficient permissions");
                    YouTubeError::InvalidCredential
                }
            }
            StatusCode::NOT_FOUND => {
                log::warn!("YouTube API returned 404: {}", not_found);
                not_found
            }
            status => {
                log::error!(
                    "Unexpected API response - status: {}, body: {}",
                    status,
                    error_text
                );
                YouTubeError::ParseError(format!(
                    "Unexpected status: {} - {}",
                    status, error_text
                ))
            }
        }
    }
}

#[async_trait]
impl LiveChatApi for YouTubeClient {
    async fn list_live_streaming_details(
        &self,
        video_id: &str,
    ) -> Result<VideoResponse, YouTubeError> {
        log::info!(
            "Fetching live streaming details for video: {} (quota cost: 1 unit)",
            video_id
        );

        let response = self
            .get("/videos")
            .query(&[("part", "liveStreamingDetails"), ("id", video_id)])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Self::error_from_response(response, YouTubeError::VideoNotFound).await);
        }

        Ok(response.json().await?)
    }

    async fn list_live_chat_messages(
        &self,
        request: &LiveChatMessagesRequest<'_>,
    ) -> Result<LiveChatMessagesResponse, YouTubeError> {
        log::debug!(
            "Fetching live chat messages for chat ID: {} (part: {}, quota cost: ~5 units)",
            request.live_chat_id,
            request.part
        );

        let mut query_params = vec![
            ("liveChatId", request.live_chat_id.to_string()),
            ("part", request.part.to_string()),
        ];
        if let Some(token) = request.page_token {
            query_params.push(("pageToken", token.to_string()));
            log::debug!("Using page token: {}", token);
        }
        if let Some(max_results) = request.max_results {
            query_params.push(("maxResults", max_results.to_string()));
        }

        let response = self
            .get("/liveChat/messages")
            .query(&query_params)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(
                Self::error_from_response(response, YouTubeError::LiveChatNotFound).await,
            );
        }

        let data: LiveChatMessagesResponse = response.json().await?;
        log::debug!(
            "Fetched {} messages (polling interval: {}ms)",
            data.items.len(),
            data.polling_interval_millis
        );
        Ok(data)
    }
}
