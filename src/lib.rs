//! YouTube ライブチャットのポーリングエンジン
//!
//! 動画IDからライブチャットを解決し、設定した最低間隔とサーバー推奨間隔の
//! 長い方だけ待ってから新着メッセージを取得する。取得したメッセージは
//! スパチャ・メンバー・通常の3種類に分類してハンドラーへ渡す。
//!
//! ```no_run
//! use livechat_poller::{
//!     CancellationToken, Credential, HandlerResult, LiveChatHandler, MessageDispatcher,
//!     PollerConfig, SuperChatTier, YouTubeClient,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = YouTubeClient::new(Credential::AccessToken("ya29.token".to_string()))?;
//! let config = PollerConfig::new()
//!     .with_interval(8)
//!     .with_interval_observer(|millis: u64| println!("interval: {}ms", millis));
//! let handler = LiveChatHandler::new(client, "VIDEO_ID", config).await?;
//!
//! let dispatcher = MessageDispatcher::new(|text: &str| -> HandlerResult {
//!     println!("{}", text);
//!     Ok(())
//! })
//! .with_member(|user: &str, text: &str| -> HandlerResult {
//!     println!("member: {}, message: {}", user, text);
//!     Ok(())
//! })
//! .with_super_chat(|tier: SuperChatTier, user: &str, text: &str| -> HandlerResult {
//!     println!("tier: {}, color: {}, user: {}, message: {}", tier, tier.color(), user, text);
//!     Ok(())
//! });
//!
//! let cancel = CancellationToken::new();
//! handler.polling(&cancel, &dispatcher).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod superchat;
pub mod util; // doctestのためpubにする
pub mod youtube;

pub use config::PollerConfig;
pub use superchat::SuperChatTier;
pub use youtube::client::{Credential, LiveChatApi, YouTubeClient};
pub use youtube::dispatcher::{
    HandlerResult, IntervalObserver, MemberMessageHandler, MessageDispatcher, MessageHandler,
    SimpleMessageHandler, SuperChatHandler,
};
pub use youtube::errors::{HandlerError, LiveChatError, ResolutionError, YouTubeError};
pub use youtube::message::{ChatMessage, MessageKind};
pub use youtube::poller::LiveChatHandler;
pub use youtube::resolver::ChatSession;

// 呼び出し側がキャンセルトークンを作れるように再公開
pub use tokio_util::sync::CancellationToken;
