use thiserror::Error;

/// YouTube Data API 呼び出しの失敗
#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("credential is invalid or lacks permission")]
    InvalidCredential,

    #[error("Video not found or not a live stream")]
    VideoNotFound,

    #[error("Live chat not found or disabled")]
    LiveChatNotFound,

    #[error("Live chat is disabled for this video")]
    LiveChatDisabled,

    #[error("Quota exceeded - please try again tomorrow")]
    QuotaExceeded,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("response carried no nextPageToken")]
    MissingPageToken,

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// 動画IDからライブチャットIDへの解決失敗
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("get broadcast: Not Found")]
    NotFound,

    #[error("get broadcast: no active live chat for video {0}")]
    NoActiveChat(String),

    #[error("get broadcast: {0}")]
    Transport(#[source] YouTubeError),
}

/// メッセージハンドラーが返すエラー
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// ハンドラー構築・ポーリングの失敗
#[derive(Error, Debug)]
pub enum LiveChatError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("get livechat: {0}")]
    Fetch(#[source] YouTubeError),

    #[error("message handler failed: {0}")]
    Handler(#[source] HandlerError),
}
