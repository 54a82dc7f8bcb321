//! テスト用の台本付き `LiveChatApi`

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::client::LiveChatApi;
use super::errors::YouTubeError;
use super::types::*;

/// 記録したliveChatMessages.listの呼び出し
#[derive(Debug, Clone)]
pub struct RecordedFetch {
    pub part: String,
    pub page_token: Option<String>,
    pub max_results: Option<u32>,
    pub at: Instant,
}

#[derive(Default)]
struct Inner {
    videos: HashMap<String, Option<String>>,
    video_error: Option<YouTubeError>,
    pages: VecDeque<Result<LiveChatMessagesResponse, YouTubeError>>,
    fetches: Vec<RecordedFetch>,
    /// n回目（1始まり）の取得中にキャンセルする
    cancel_on_fetch: Option<(usize, CancellationToken)>,
    fetch_delay: Duration,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<Inner>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_video(self, video_id: &str, chat_id: Option<&str>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .videos
            .insert(video_id.to_string(), chat_id.map(str::to_string));
        self
    }

    pub fn with_video_error(self, error: YouTubeError) -> Self {
        self.inner.lock().unwrap().video_error = Some(error);
        self
    }

    pub fn with_page(self, page: LiveChatMessagesResponse) -> Self {
        self.inner.lock().unwrap().pages.push_back(Ok(page));
        self
    }

    pub fn with_page_error(self, error: YouTubeError) -> Self {
        self.inner.lock().unwrap().pages.push_back(Err(error));
        self
    }

    pub fn with_fetch_delay(self, delay: Duration) -> Self {
        self.inner.lock().unwrap().fetch_delay = delay;
        self
    }

    pub fn cancel_on_fetch(self, nth: usize, cancel: CancellationToken) -> Self {
        self.inner.lock().unwrap().cancel_on_fetch = Some((nth, cancel));
        self
    }

    pub fn fetches(&self) -> Vec<RecordedFetch> {
        self.inner.lock().unwrap().fetches.clone()
    }
}

#[async_trait]
impl LiveChatApi for FakeApi {
    async fn list_live_streaming_details(
        &self,
        video_id: &str,
    ) -> Result<VideoResponse, YouTubeError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(error) = inner.video_error.take() {
            return Err(error);
        }
        let items = match inner.videos.get(video_id) {
            Some(chat_id) => vec![VideoItem {
                live_streaming_details: Some(LiveStreamingDetails {
                    active_live_chat_id: chat_id.clone(),
                }),
            }],
            None => Vec::new(),
        };
        Ok(VideoResponse { items })
    }

    async fn list_live_chat_messages(
        &self,
        request: &LiveChatMessagesRequest<'_>,
    ) -> Result<LiveChatMessagesResponse, YouTubeError> {
        let (delay, page) = {
            let mut inner = self.inner.lock().unwrap();
            inner.fetches.push(RecordedFetch {
                part: request.part.to_string(),
                page_token: request.page_token.map(str::to_string),
                max_results: request.max_results,
                at: Instant::now(),
            });
            let count = inner.fetches.len();
            if let Some((nth, cancel)) = &inner.cancel_on_fetch {
                if *nth == count {
                    cancel.cancel();
                }
            }
            let page = inner.pages.pop_front().unwrap_or_else(|| {
                Err(YouTubeError::ParseError("script exhausted".to_string()))
            });
            (inner.fetch_delay, page)
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        page
    }
}

/// テスト用のページを組み立てる
pub fn page(
    next: Option<&str>,
    interval: u64,
    items: Vec<LiveChatMessageItem>,
) -> LiveChatMessagesResponse {
    LiveChatMessagesResponse {
        polling_interval_millis: interval,
        next_page_token: next.map(str::to_string),
        items,
    }
}

pub fn text_item(id: &str, author: &str, text: &str, sponsor: bool) -> LiveChatMessageItem {
    LiveChatMessageItem {
        id: id.to_string(),
        snippet: MessageSnippet {
            message_type: "textMessageEvent".to_string(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
            display_message: text.to_string(),
            super_chat_details: None,
        },
        author_details: AuthorDetails {
            display_name: author.to_string(),
            is_chat_sponsor: sponsor,
            ..Default::default()
        },
    }
}

pub fn super_chat_item(id: &str, author: &str, tier: u32, comment: &str) -> LiveChatMessageItem {
    let mut item = text_item(id, author, &format!("{} sent a super chat", author), false);
    item.snippet.message_type = "superChatEvent".to_string();
    item.snippet.super_chat_details = Some(SuperChatDetails {
        user_comment: comment.to_string(),
        tier,
        ..Default::default()
    });
    item
}
