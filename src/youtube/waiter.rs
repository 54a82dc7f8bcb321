use std::pin::Pin;
use std::time::Duration;

use tokio::time::{sleep_until, Instant, Sleep};
use tokio_util::sync::CancellationToken;

/// 待機状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaiterState {
    Idle,
    Waiting,
}

/// 待機の終わり方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Elapsed,
    Cancelled,
}

/// キャンセル可能な待機タイマー
///
/// 1つの `Sleep` を毎サイクル期限ごと差し替えて使い回す。
/// 期限の差し替えは `Sleep::reset` で行うため、前サイクルの発火が残らない。
/// `Sleep` はランタイム内でしか作れないので最初の待機時に作る。
pub struct CancellableWaiter {
    sleep: Option<Pin<Box<Sleep>>>,
    state: WaiterState,
}

impl CancellableWaiter {
    pub fn new() -> Self {
        Self {
            sleep: None,
            state: WaiterState::Idle,
        }
    }

    pub fn state(&self) -> WaiterState {
        self.state
    }

    /// 現在の期限
    pub fn deadline(&self) -> Option<Instant> {
        self.sleep.as_ref().map(|sleep| sleep.deadline())
    }

    /// `duration` 経過かキャンセルまで待つ
    ///
    /// どちらで終わっても Idle に戻る
    pub async fn wait(&mut self, duration: Duration, cancel: &CancellationToken) -> WaitOutcome {
        let deadline = Instant::now() + duration;
        let sleep = self
            .sleep
            .get_or_insert_with(|| Box::pin(sleep_until(deadline)));
        sleep.as_mut().reset(deadline);
        self.state = WaiterState::Waiting;
        log::debug!("Waiting {}ms before next fetch", duration.as_millis());

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => WaitOutcome::Cancelled,
            _ = sleep.as_mut() => WaitOutcome::Elapsed,
        };

        self.state = WaiterState::Idle;
        outcome
    }
}

impl Default for CancellableWaiter {
    fn default() -> Self {
        Self::new()
    }
}
