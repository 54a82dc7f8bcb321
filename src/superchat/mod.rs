//! スパチャのTierメタデータ
//!
//! YouTube Data API の `superChatDetails.tier`（1〜11）から
//! 表示色と固定表示時間を引くための静的テーブルを提供する。
//!
//! ## 金額帯（2020/01/13 時点、$1 = ¥100）
//! | Tier | 金額帯 | 色 | 固定表示 |
//! |------|--------|----|----------|
//! | 1 | $1.00 - $1.99 | Blue | なし |
//! | 2 | $2.00 - $4.99 | Light blue | なし |
//! | 3 | $5.00 - $9.99 | Green | 2分 |
//! | 4 | $10.00 - $19.99 | Yellow | 5分 |
//! | 5 | $20.00 - $49.99 | Orange | 10分 |
//! | 6 | $50.00 - $99.99 | Magenta | 30分 |
//! | 7 | $100.00 - $199.99 | Red | 1時間 |
//! | 8 | $200.00 - $299.99 | Red | 2時間 |
//! | 9 | $300.00 - $399.99 | Red | 3時間 |
//! | 10 | $400.00 - $499.99 | Red | 4時間 |
//! | 11 | $500.00 | Red | 5時間 |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Tierの最小値
pub const MIN_TIER: u8 = 1;

/// Tierの最大値
pub const MAX_TIER: u8 = 11;

struct TierInfo {
    tier: u8,
    color: &'static str,
    /// 固定表示時間（秒）
    pinned_secs: u64,
    /// 金額帯の下限（USDセント）
    min_usd_cents: u64,
}

/// Tier別の表示色・固定表示時間
const TIER_TABLE: [TierInfo; MAX_TIER as usize] = [
    TierInfo {
        tier: 1,
        color: "Blue",
        pinned_secs: 0,
        min_usd_cents: 100,
    },
    TierInfo {
        tier: 2,
        color: "Light blue",
        pinned_secs: 0,
        min_usd_cents: 200,
    },
    TierInfo {
        tier: 3,
        color: "Green",
        pinned_secs: 2 * 60,
        min_usd_cents: 500,
    },
    TierInfo {
        tier: 4,
        color: "Yellow",
        pinned_secs: 5 * 60,
        min_usd_cents: 1_000,
    },
    TierInfo {
        tier: 5,
        color: "Orange",
        pinned_secs: 10 * 60,
        min_usd_cents: 2_000,
    },
    TierInfo {
        tier: 6,
        color: "Magenta",
        pinned_secs: 30 * 60,
        min_usd_cents: 5_000,
    },
    TierInfo {
        tier: 7,
        color: "Red",
        pinned_secs: 60 * 60,
        min_usd_cents: 10_000,
    },
    TierInfo {
        tier: 8,
        color: "Red",
        pinned_secs: 2 * 60 * 60,
        min_usd_cents: 20_000,
    },
    TierInfo {
        tier: 9,
        color: "Red",
        pinned_secs: 3 * 60 * 60,
        min_usd_cents: 30_000,
    },
    TierInfo {
        tier: 10,
        color: "Red",
        pinned_secs: 4 * 60 * 60,
        min_usd_cents: 40_000,
    },
    TierInfo {
        tier: 11,
        color: "Red",
        pinned_secs: 5 * 60 * 60,
        min_usd_cents: 50_000,
    },
];

/// テーブルが1..=11を順番に過不足なく網羅しているか
const fn table_is_complete() -> bool {
    let mut i = 0;
    while i < TIER_TABLE.len() {
        if TIER_TABLE[i].tier as usize != i + 1 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(table_is_complete(), "tier table must cover 1..=11");

/// スパチャのTier
///
/// 範囲外の値も保持でき、その場合は空の色・ゼロ時間を返す
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuperChatTier(pub u8);

impl SuperChatTier {
    /// APIの生の値からTierを作成（u8に収まらない値は範囲外扱い）
    pub fn from_api(tier: u32) -> Self {
        Self(u8::try_from(tier).unwrap_or(0))
    }

    fn info(self) -> Option<&'static TierInfo> {
        TIER_TABLE.get(usize::from(self.0).checked_sub(1)?)
    }

    /// 1〜11の範囲内かどうか
    pub fn is_valid(self) -> bool {
        self.info().is_some()
    }

    /// 表示色（範囲外は空文字列）
    pub fn color(self) -> &'static str {
        self.info().map(|info| info.color).unwrap_or("")
    }

    /// チャット欄上部への固定表示時間（範囲外はゼロ）
    pub fn visibility_duration(self) -> Duration {
        self.info()
            .map(|info| Duration::from_secs(info.pinned_secs))
            .unwrap_or(Duration::ZERO)
    }

    /// 金額帯の下限（USDセント、範囲外はゼロ）
    pub fn min_usd_cents(self) -> u64 {
        self.info().map(|info| info.min_usd_cents).unwrap_or(0)
    }
}

impl fmt::Display for SuperChatTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for SuperChatTier {
    fn from(tier: u8) -> Self {
        Self(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(SuperChatTier(1).color(), "Blue");
        assert_eq!(SuperChatTier(2).color(), "Light blue");
        assert_eq!(SuperChatTier(3).color(), "Green");
        assert_eq!(SuperChatTier(4).color(), "Yellow");
        assert_eq!(SuperChatTier(5).color(), "Orange");
        assert_eq!(SuperChatTier(6).color(), "Magenta");
        for tier in 7..=11 {
            assert_eq!(SuperChatTier(tier).color(), "Red");
        }
    }

    #[test]
    fn test_visibility_duration() {
        assert_eq!(SuperChatTier(1).visibility_duration(), Duration::ZERO);
        assert_eq!(SuperChatTier(2).visibility_duration(), Duration::ZERO);
        assert_eq!(SuperChatTier(3).visibility_duration(), Duration::from_secs(120));
        assert_eq!(SuperChatTier(6).visibility_duration(), Duration::from_secs(1800));
        assert_eq!(SuperChatTier(7).visibility_duration(), Duration::from_secs(3600));
        assert_eq!(SuperChatTier(11).visibility_duration(), Duration::from_secs(5 * 3600));
    }

    #[test]
    fn test_out_of_range_is_sentinel() {
        for tier in [SuperChatTier(0), SuperChatTier(12), SuperChatTier::from_api(300)] {
            assert!(!tier.is_valid());
            assert_eq!(tier.color(), "");
            assert_eq!(tier.visibility_duration(), Duration::ZERO);
            assert_eq!(tier.min_usd_cents(), 0);
        }
    }

    #[test]
    fn test_durations_do_not_decrease() {
        let durations: Vec<Duration> = (MIN_TIER..=MAX_TIER)
            .map(|t| SuperChatTier(t).visibility_duration())
            .collect();
        assert!(durations.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_min_usd_cents() {
        assert_eq!(SuperChatTier(1).min_usd_cents(), 100);
        assert_eq!(SuperChatTier(3).min_usd_cents(), 500);
        assert_eq!(SuperChatTier(11).min_usd_cents(), 50_000);
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&SuperChatTier(3)).unwrap(), "3");
    }
}
