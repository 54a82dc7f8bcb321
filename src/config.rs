// =============================================================================
// 共通設定・定数モジュール
// =============================================================================
// ポーリングエンジン全体で使用する設定値・定数と、利用者向けの設定ビルダーを定義
// =============================================================================

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::youtube::dispatcher::IntervalObserver;

/// HTTPリクエストのデフォルトタイムアウト（秒）
///
/// YouTube Data API へのリクエストで使用。
/// ネットワーク状況が悪い場合でも適切にタイムアウトし、
/// ポーリングループが無期限に止まらないようにする。
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// デフォルトのポーリング間隔（秒）
pub const DEFAULT_POLLING_INTERVAL_SECS: u64 = 5;

/// liveChatMessages.list の1回あたり最大取得件数
pub const MAX_RESULTS: u32 = 2000;

/// liveChatMessages.list が受け付ける maxResults の下限
pub const MIN_RESULTS: u32 = 200;

/// HTTPリクエストのデフォルトタイムアウト（Duration）
///
/// HTTPクライアント構築時に直接使用可能
pub fn http_timeout() -> Duration {
    Duration::from_secs(HTTP_TIMEOUT_SECS)
}

/// ポーラーの設定
///
/// `LiveChatHandler` の構築時に渡し、以後ループの間は変更されない。
#[derive(Clone)]
pub struct PollerConfig {
    /// 最低ポーリング間隔（秒）
    pub polling_interval_secs: u64,
    /// 1ページあたりの最大取得件数
    pub max_results: u32,
    /// 実効ポーリング間隔の通知先（観測専用）
    pub interval_observer: Option<Arc<dyn IntervalObserver>>,
}

impl PollerConfig {
    /// デフォルト設定で作成
    pub fn new() -> Self {
        Self {
            polling_interval_secs: DEFAULT_POLLING_INTERVAL_SECS,
            max_results: MAX_RESULTS,
            interval_observer: None,
        }
    }

    /// 最低ポーリング間隔（秒）を上書き
    pub fn with_interval(mut self, secs: u64) -> Self {
        self.polling_interval_secs = secs;
        self
    }

    /// 1ページあたりの最大取得件数を上書き
    ///
    /// APIの受け付ける範囲（200〜2000）に丸める
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results.clamp(MIN_RESULTS, MAX_RESULTS);
        self
    }

    /// 実効ポーリング間隔の通知先を設定
    pub fn with_interval_observer<O>(mut self, observer: O) -> Self
    where
        O: IntervalObserver + 'static,
    {
        self.interval_observer = Some(Arc::new(observer));
        self
    }

    /// 最低ポーリング間隔（ミリ秒）
    pub fn polling_interval_millis(&self) -> u64 {
        self.polling_interval_secs.saturating_mul(1000)
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PollerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollerConfig")
            .field("polling_interval_secs", &self.polling_interval_secs)
            .field("max_results", &self.max_results)
            .field("interval_observer", &self.interval_observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_timeout_duration() {
        assert_eq!(http_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_default_config() {
        let config = PollerConfig::default();
        assert_eq!(config.polling_interval_secs, 5);
        assert_eq!(config.polling_interval_millis(), 5000);
        assert_eq!(config.max_results, 2000);
        assert!(config.interval_observer.is_none());
    }

    #[test]
    fn test_with_interval() {
        let config = PollerConfig::new().with_interval(8);
        assert_eq!(config.polling_interval_millis(), 8000);
    }

    #[test]
    fn test_max_results_clamped() {
        assert_eq!(PollerConfig::new().with_max_results(10).max_results, 200);
        assert_eq!(PollerConfig::new().with_max_results(500).max_results, 500);
        assert_eq!(PollerConfig::new().with_max_results(5000).max_results, 2000);
    }

    #[test]
    fn test_with_interval_observer() {
        let config = PollerConfig::new().with_interval_observer(|_millis: u64| {});
        assert!(config.interval_observer.is_some());
        assert!(format!("{:?}", config).contains("interval_observer: true"));
    }
}
