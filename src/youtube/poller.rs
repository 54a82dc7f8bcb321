use tokio_util::sync::CancellationToken;

use super::{
    client::LiveChatApi,
    dispatcher::MessageHandler,
    errors::{LiveChatError, YouTubeError},
    interval::IntervalReconciler,
    message::ChatMessage,
    resolver::{resolve_chat_session, ChatSession},
    state::{PollCycle, PollingStats},
    types::{LiveChatMessagesRequest, LiveChatMessagesResponse},
    waiter::{CancellableWaiter, WaitOutcome},
};
use crate::config::PollerConfig;

/// 初回取得ではカーソルと間隔だけが欲しい（過去ログはディスパッチしない）
const INITIAL_PART: &str = "id";

const MESSAGE_PART: &str = "snippet,authorDetails";

/// 何回ごとに状態をログ出力するか
const STATS_LOG_EVERY: u64 = 10;

/// 1つのライブチャットをポーリングしてハンドラーへ流す
pub struct LiveChatHandler<A> {
    api: A,
    session: ChatSession,
    reconciler: IntervalReconciler,
    max_results: u32,
}

impl<A> LiveChatHandler<A>
where
    A: LiveChatApi,
{
    /// 動画IDを検証し、ライブチャットIDを解決してハンドラーを作成
    pub async fn new(api: A, video_id: &str, config: PollerConfig) -> Result<Self, LiveChatError> {
        let video_id = video_id.trim();
        if video_id.is_empty() {
            return Err(LiveChatError::Configuration(
                "video id must not be empty".to_string(),
            ));
        }
        if video_id.chars().any(char::is_whitespace) {
            return Err(LiveChatError::Configuration(format!(
                "video id must not contain whitespace: {:?}",
                video_id
            )));
        }

        let session = resolve_chat_session(&api, video_id).await?;

        Ok(Self {
            api,
            session,
            reconciler: IntervalReconciler::new(
                config.polling_interval_millis(),
                config.interval_observer,
            ),
            max_results: config.max_results,
        })
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// キャンセルされるか取得に失敗するまでポーリングする
    ///
    /// キャンセルはループ先頭と待機中にだけ確認する。取得済みのページは
    /// 最後までディスパッチしてから終了するため、サーバー側のカーソルとずれない。
    /// 取得失敗・ハンドラーのエラーはリトライせずそのまま返す。
    pub async fn polling<H>(
        &self,
        cancel: &CancellationToken,
        handler: &H,
    ) -> Result<(), LiveChatError>
    where
        H: MessageHandler + ?Sized,
    {
        let live_chat_id = self.session.live_chat_id.as_str();
        log::info!("Polling started for live chat: {}", live_chat_id);

        let mut stats = PollingStats::new();
        let mut first = self.fetch(INITIAL_PART, None, None).await?;
        stats.record_poll();
        let mut cycle = PollCycle::take_from(&mut first).map_err(LiveChatError::Fetch)?;

        let mut waiter = CancellableWaiter::new();

        while !cancel.is_cancelled() {
            let interval = self.reconciler.reconcile(cycle.polling_interval_millis);
            if waiter.wait(interval, cancel).await == WaitOutcome::Cancelled {
                break;
            }

            let mut response = self
                .fetch(MESSAGE_PART, Some(&cycle.page_token), Some(self.max_results))
                .await?;
            stats.record_poll();

            let next = PollCycle::take_from(&mut response);
            let count = response.items.len();
            for item in response.items {
                let message = ChatMessage::from(item);
                handler.handle_message(&message).map_err(|e| {
                    log::error!("Message handler failed on {}: {}", message.id, e);
                    LiveChatError::Handler(e)
                })?;
            }
            stats.record_dispatched(count);

            cycle = next.map_err(|e| {
                log::error!("Polling stopped: {}", e);
                LiveChatError::Fetch(e)
            })?;

            if stats.poll_count % STATS_LOG_EVERY == 0 {
                log::info!(
                    "Polling state: {} polls, {} messages, quota used {} (remaining ~{})",
                    stats.poll_count,
                    stats.messages_dispatched,
                    stats.quota_used,
                    stats.estimated_remaining_quota()
                );
            }
        }

        log::info!(
            "Polling loop ended ({} polls, {} messages)",
            stats.poll_count,
            stats.messages_dispatched
        );
        Ok(())
    }

    async fn fetch(
        &self,
        part: &str,
        page_token: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<LiveChatMessagesResponse, LiveChatError> {
        let request = LiveChatMessagesRequest {
            live_chat_id: &self.session.live_chat_id,
            part,
            page_token,
            max_results,
        };
        self.api
            .list_live_chat_messages(&request)
            .await
            .map_err(|e: YouTubeError| {
                log::error!("Polling error: {}", e);
                LiveChatError::Fetch(e)
            })
    }
}
