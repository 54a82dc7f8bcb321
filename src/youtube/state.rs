use super::errors::YouTubeError;
use super::types::LiveChatMessagesResponse;

/// liveChatMessages.list のクォータコスト（約5 units）
const QUOTA_PER_POLL: u64 = 5;

/// 1日あたりのデフォルトクォータ
const DAILY_QUOTA: i64 = 10_000;

/// 1サイクル分のポーリング状態
///
/// レスポンスごとに丸ごと置き換える
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollCycle {
    /// 次回リクエストで使うページトークン
    pub page_token: String,
    /// サーバー推奨ポーリング間隔（ミリ秒）
    pub polling_interval_millis: u64,
}

impl PollCycle {
    /// レスポンスから次のサイクルを作る
    ///
    /// nextPageTokenが無いとカーソルを進められないためエラーにする
    pub fn from_response(
        next_page_token: Option<String>,
        polling_interval_millis: u64,
    ) -> Result<Self, YouTubeError> {
        match next_page_token {
            Some(page_token) if !page_token.is_empty() => Ok(Self {
                page_token,
                polling_interval_millis,
            }),
            _ => Err(YouTubeError::MissingPageToken),
        }
    }

    /// レスポンスのうちカーソル部分だけを取り出す（itemsは呼び出し側が使う）
    pub fn take_from(response: &mut LiveChatMessagesResponse) -> Result<Self, YouTubeError> {
        Self::from_response(
            response.next_page_token.take(),
            response.polling_interval_millis,
        )
    }
}

/// ポーリングの累計（ログ出力用）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollingStats {
    /// ポーリング実施回数
    pub poll_count: u64,
    /// ハンドラーへ渡したメッセージ数
    pub messages_dispatched: u64,
    /// 累積クォータ消費量（推定）
    pub quota_used: u64,
}

impl PollingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1回のリクエストを記録
    pub fn record_poll(&mut self) {
        self.poll_count += 1;
        self.quota_used += QUOTA_PER_POLL;
    }

    pub fn record_dispatched(&mut self, count: usize) {
        self.messages_dispatched += count as u64;
    }

    /// 残りクォータを推定（デフォルト10,000 units）
    pub fn estimated_remaining_quota(&self) -> i64 {
        DAILY_QUOTA - self.quota_used as i64
    }

    /// あと何回ポーリングできるかを推定
    pub fn estimated_remaining_polls(&self) -> i64 {
        self.estimated_remaining_quota() / QUOTA_PER_POLL as i64
    }
}
