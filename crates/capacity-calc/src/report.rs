//! 目錄產能報表

use std::collections::BTreeMap;

use capacity_core::{MaterialType, Recipe, ReportConfig, ResourceLedger};
use rayon::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculator::{CapacityCalculator, CapacityResult};
use crate::CatalogReport;

/// 排行榜/臨界名單的精簡條目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUnits {
    /// 產品ID
    pub product_id: String,

    /// 產品名稱
    pub name: String,

    /// 可產出單位數
    pub max_units: u64,
}

impl ProductUnits {
    fn from_result(result: &CapacityResult) -> Self {
        Self {
            product_id: result.product_id.clone(),
            name: result.product_name.clone(),
            max_units: result.max_units,
        }
    }
}

/// 目錄彙總統計
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    /// 產品總數
    pub total_products: usize,

    /// 可生產產品數（maxUnits > 0）
    pub producible_count: usize,

    /// 不可生產產品數
    pub non_producible_count: usize,

    /// 可生產比率（四捨五入百分比；空目錄回報 0）
    pub production_rate_percent: u32,

    /// 限制因素直方圖：計入所有具明確限制因素的結果（可生產與否皆然），
    /// 用於找出目錄層級最大的結構性瓶頸
    pub limiting_factor_histogram: BTreeMap<MaterialType, usize>,

    /// 可生產排行榜（maxUnits 遞減，平手依產品名稱，截至 top_n 筆）
    pub top_producible: Vec<ProductUnits>,

    /// 臨界名單（0 < maxUnits ≤ 臨界上限，maxUnits 遞增，最危急在前）
    pub critical_products: Vec<ProductUnits>,
}

/// 目錄產能報表產生器
pub struct CatalogCapacityReport;

impl CatalogCapacityReport {
    /// 對每個上架配方執行產能計算並彙總
    pub fn build(
        recipes: &[Recipe],
        ledger: &ResourceLedger,
        config: &ReportConfig,
    ) -> CatalogReport {
        tracing::info!(
            "開始目錄產能計算：配方 {} 筆，帳本物料 {} 筆",
            recipes.len(),
            ledger.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 逐配方計算產能（無共享狀態，平行映射）
        tracing::debug!("Step 1: 逐配方產能計算");
        let mut results: Vec<CapacityResult> = recipes
            .par_iter()
            .map(|recipe| CapacityCalculator::compute(recipe, ledger))
            .collect();

        // 輸出順序不得依賴排程，統一依產品ID排序
        results.sort_by(|a, b| a.product_id.cmp(&b.product_id));

        // Step 2: 彙總統計
        tracing::debug!("Step 2: 彙總統計");
        let summary = Self::summarize(&results, config);

        tracing::info!(
            "目錄產能計算完成，耗時 {:?}，可生產 {}/{}",
            start_time.elapsed(),
            summary.producible_count,
            summary.total_products
        );

        CatalogReport {
            summary,
            results,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        }
    }

    /// 由已排序的結果列表建立彙總
    fn summarize(results: &[CapacityResult], config: &ReportConfig) -> CatalogSummary {
        let total_products = results.len();
        let producible_count = results.iter().filter(|r| r.max_units > 0).count();
        let non_producible_count = total_products - producible_count;

        // 空目錄回報 0%，不做除以零
        let production_rate_percent = if total_products == 0 {
            0
        } else {
            (Decimal::from(producible_count as u64) * Decimal::from(100)
                / Decimal::from(total_products as u64))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
        };

        let mut limiting_factor_histogram: BTreeMap<MaterialType, usize> = BTreeMap::new();
        for result in results {
            if let Some(factor) = result.limiting_factor {
                *limiting_factor_histogram.entry(factor).or_insert(0) += 1;
            }
        }

        let mut producible: Vec<&CapacityResult> =
            results.iter().filter(|r| r.max_units > 0).collect();
        producible.sort_by(|a, b| {
            b.max_units
                .cmp(&a.max_units)
                .then_with(|| a.product_name.cmp(&b.product_name))
        });
        let top_producible = producible
            .into_iter()
            .take(config.top_n)
            .map(ProductUnits::from_result)
            .collect();

        let mut critical: Vec<&CapacityResult> = results
            .iter()
            .filter(|r| r.max_units > 0 && r.max_units <= config.critical_max_units)
            .collect();
        critical.sort_by(|a, b| {
            a.max_units
                .cmp(&b.max_units)
                .then_with(|| a.product_name.cmp(&b.product_name))
        });
        let critical_products = critical
            .into_iter()
            .map(ProductUnits::from_result)
            .collect();

        CatalogSummary {
            total_products,
            producible_count,
            non_producible_count,
            production_rate_percent,
            limiting_factor_histogram,
            top_producible,
            critical_products,
        }
    }
}
