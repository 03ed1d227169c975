//! 報表與排名組態模型
//!
//! 臨界門檻（5 單位）、Top-N（10）、銷售視窗（90 天）等皆為顯式
//! 組態參數而非模組常數，引擎得以在不同門檻下直接測試。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CapacityError, Result};

/// 目錄產能報表組態
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// 可生產排行榜筆數上限
    pub top_n: usize,

    /// 臨界產品的單位數上限（0 < maxUnits ≤ 此值列入臨界名單）
    pub critical_max_units: u64,
}

impl ReportConfig {
    /// 建構器模式：設置排行榜筆數上限
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// 建構器模式：設置臨界單位數上限
    pub fn with_critical_max_units(mut self, critical_max_units: u64) -> Self {
        self.critical_max_units = critical_max_units;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            critical_max_units: 5,
        }
    }
}

/// 補貨優先度排名組態
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// 銷售追蹤視窗（天）
    pub window_days: u32,

    /// 優先度分數的預估時界（天）：分數 = max(0, 日均銷量 × 時界 − 在庫)
    pub horizon_days: u32,

    /// 高緊急度門檻（分數嚴格大於此值為 high）
    pub high_score_threshold: Decimal,

    /// 中緊急度門檻（medium ≤ 分數 ≤ high 為 medium）
    pub medium_score_threshold: Decimal,

    /// 臨界續航天數（嚴格小於此值標記 critical）
    pub critical_runway_days: Decimal,

    /// 警戒續航天數（critical ≤ 續航 < 此值標記 warning）
    pub warning_runway_days: Decimal,

    /// 續航上限哨兵值（零銷量產品的續航以此值表示，不做除以零）
    pub runway_cap_days: Decimal,
}

impl RankingConfig {
    /// 建構器模式：設置銷售視窗
    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    /// 建構器模式：設置預估時界
    pub fn with_horizon_days(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// 建構器模式：設置緊急度門檻
    pub fn with_score_thresholds(mut self, medium: Decimal, high: Decimal) -> Self {
        self.medium_score_threshold = medium;
        self.high_score_threshold = high;
        self
    }

    /// 建構器模式：設置續航區間
    pub fn with_runway_bands(mut self, critical_days: Decimal, warning_days: Decimal) -> Self {
        self.critical_runway_days = critical_days;
        self.warning_runway_days = warning_days;
        self
    }

    /// 建構器模式：設置續航上限哨兵值
    pub fn with_runway_cap_days(mut self, cap_days: Decimal) -> Self {
        self.runway_cap_days = cap_days;
        self
    }

    /// 檢查組態一致性
    pub fn validate(&self) -> Result<()> {
        if self.window_days == 0 {
            return Err(CapacityError::InvalidWindow(self.window_days));
        }
        if self.medium_score_threshold > self.high_score_threshold {
            return Err(CapacityError::ThresholdOrder {
                medium: self.medium_score_threshold,
                high: self.high_score_threshold,
            });
        }
        if self.critical_runway_days > self.warning_runway_days {
            return Err(CapacityError::RunwayBandOrder {
                critical: self.critical_runway_days,
                warning: self.warning_runway_days,
            });
        }
        if self.runway_cap_days <= Decimal::ZERO {
            return Err(CapacityError::InvalidRunwayCap(self.runway_cap_days));
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            window_days: 90,
            horizon_days: 30,
            high_score_threshold: Decimal::from(20),
            medium_score_threshold: Decimal::from(10),
            critical_runway_days: Decimal::from(30),
            warning_runway_days: Decimal::from(60),
            runway_cap_days: Decimal::from(9999),
        }
    }
}
