//! # Capacity Core
//!
//! 產能引擎核心資料模型與類型定義

pub mod config;
pub mod ledger;
pub mod material;
pub mod recipe;
pub mod requirement;
pub mod sales;

// Re-export 主要類型
pub use config::{RankingConfig, ReportConfig};
pub use ledger::ResourceLedger;
pub use material::{MaterialType, RawMaterialStock, Unit};
pub use recipe::{
    AdditiveLine, CastLine, FragranceDosage, FragranceLine, MoldLine, PackagingLine,
    ProductCategory, Recipe, SoapBaseLine,
};
pub use requirement::{RequirementRole, ResourceRequirement};
pub use sales::{ProductStock, SalesVelocitySnapshot};

use rust_decimal::Decimal;

/// 產能引擎錯誤類型
///
/// 引擎本體是對已驗證快照的純算術運算，資料品質缺口一律以
/// 結果內的 `problems` 呈現而非錯誤；只有組態不一致才是錯誤。
#[derive(Debug, thiserror::Error)]
pub enum CapacityError {
    #[error("銷售視窗天數無效: {0}")]
    InvalidWindow(u32),

    #[error("緊急度門檻順序錯誤: medium {medium} > high {high}")]
    ThresholdOrder { medium: Decimal, high: Decimal },

    #[error("續航區間順序錯誤: critical {critical} > warning {warning}")]
    RunwayBandOrder { critical: Decimal, warning: Decimal },

    #[error("續航上限無效: {0}")]
    InvalidRunwayCap(Decimal),
}

pub type Result<T> = std::result::Result<T, CapacityError>;
