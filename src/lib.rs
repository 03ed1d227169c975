//! # Capacity Engine
//!
//! 產能與補貨優先度引擎的統一入口：給定共用一池原物料的配方目錄，
//! 計算每個產品自目前庫存可產出的最大單位數、指出瓶頸資源，
//! 並以銷售速率推導補貨緊急度排名。
//!
//! 引擎是純函數式的程式庫：消費唯讀快照、回傳報表，從不回寫庫存。

pub use capacity_cache::{DirtyTracker, RecipeIndex};
pub use capacity_calc::{
    CapacityCalculator, CapacityResult, CatalogCapacityReport, CatalogReport, CatalogSummary,
    PriorityEntry, PriorityRanker, ProductUnits, RunwayStatus, UrgencyTier, VelocityCalculator,
};
pub use capacity_core::{
    AdditiveLine, CapacityError, CastLine, FragranceDosage, FragranceLine, MaterialType, MoldLine,
    PackagingLine, ProductCategory, ProductStock, RankingConfig, RawMaterialStock, Recipe,
    ReportConfig, RequirementRole, ResourceLedger, ResourceRequirement, Result,
    SalesVelocitySnapshot, SoapBaseLine, Unit,
};
