use std::sync::Arc;
use std::time::Duration;

use super::dispatcher::IntervalObserver;

/// 設定された最低間隔とサーバー推奨間隔から実効ポーリング間隔を決める
///
/// サーバー推奨値より短い間隔でポーリングするとAPI側で弾かれるため、
/// 推奨値は常に下限として扱う。
pub struct IntervalReconciler {
    configured_millis: u64,
    observer: Option<Arc<dyn IntervalObserver>>,
}

impl IntervalReconciler {
    pub fn new(configured_millis: u64, observer: Option<Arc<dyn IntervalObserver>>) -> Self {
        Self {
            configured_millis,
            observer,
        }
    }

    pub fn configured_millis(&self) -> u64 {
        self.configured_millis
    }

    /// 実効間隔 = max(設定値, 推奨値)
    ///
    /// 観測者がいれば計算後の値を通知する
    pub fn reconcile(&self, suggested_millis: u64) -> Duration {
        let effective = self.configured_millis.max(suggested_millis);
        if let Some(observer) = &self.observer {
            observer.observe_interval(effective);
        }
        Duration::from_millis(effective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_reconciled_is_max() {
        let values = [0u64, 1, 999, 5000, 5001, 8000, 60_000];
        for &configured in &values {
            let reconciler = IntervalReconciler::new(configured, None);
            for &suggested in &values {
                let effective = reconciler.reconcile(suggested);
                assert_eq!(effective, Duration::from_millis(configured.max(suggested)));
                assert!(effective >= Duration::from_millis(configured));
            }
        }
    }

    #[test]
    fn test_first_cycle_uses_default() {
        let reconciler = IntervalReconciler::new(5000, None);
        assert_eq!(reconciler.reconcile(0), Duration::from_millis(5000));
        assert_eq!(reconciler.reconcile(8000), Duration::from_millis(8000));
    }

    #[test]
    fn test_observer_receives_effective_value() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let observer: Arc<dyn IntervalObserver> =
            Arc::new(move |millis: u64| seen_clone.lock().unwrap().push(millis));

        let reconciler = IntervalReconciler::new(5000, Some(observer));
        reconciler.reconcile(0);
        reconciler.reconcile(8000);

        assert_eq!(*seen.lock().unwrap(), vec![5000, 8000]);
    }
}
