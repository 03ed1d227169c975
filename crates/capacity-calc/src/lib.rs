//! # Capacity Calculation Engine
//!
//! 核心產能與補貨優先度計算引擎

pub mod calculator;
pub mod ranking;
pub mod report;
pub mod velocity;

// Re-export 主要類型
pub use calculator::{CapacityCalculator, CapacityResult};
pub use ranking::{PriorityEntry, PriorityRanker, RunwayStatus, UrgencyTier};
pub use report::{CatalogCapacityReport, CatalogSummary, ProductUnits};
pub use velocity::VelocityCalculator;

use serde::{Deserialize, Serialize};

/// 目錄產能報表（單次執行的完整輸出）
///
/// 每次執行重新產生，回傳後不可變；引擎不回寫帳本。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogReport {
    /// 彙總統計
    pub summary: CatalogSummary,

    /// 全部產品的產能結果（依產品ID排序）
    pub results: Vec<CapacityResult>,

    /// 計算耗時（毫秒；不參與序列化，輸出保持逐位元穩定）
    #[serde(skip)]
    pub calculation_time_ms: Option<u128>,
}
