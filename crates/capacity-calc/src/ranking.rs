//! 補貨優先度排名

use std::collections::HashMap;

use capacity_core::{ProductStock, RankingConfig, SalesVelocitySnapshot};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::velocity::VelocityCalculator;

/// 緊急度層級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    Low,
    Medium,
    High,
}

/// 續航狀態旗標
///
/// 與分數公式各自獨立呈現：即使分數為低，續航不足仍須被看見。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunwayStatus {
    /// 續航嚴格小於臨界天數
    Critical,
    /// 臨界 ≤ 續航 < 警戒天數
    Warning,
    /// 警戒天數以上
    Normal,
}

/// 補貨優先度條目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityEntry {
    /// 產品ID
    pub product_id: String,

    /// 目前在庫單位數
    pub units_on_hand: Decimal,

    /// 追蹤視窗內售出單位數
    pub units_sold_window: Decimal,

    /// 日均銷量
    pub average_daily_sales: Decimal,

    /// 預估續航天數（零銷量為上限哨兵值）
    pub projected_runway_days: Decimal,

    /// 預估斷貨日期（續航落在哨兵值時為 None）
    pub projected_stockout_date: Option<NaiveDate>,

    /// 優先度分數：未來時界內的預估單位缺口
    pub priority_score: Decimal,

    /// 緊急度層級
    pub urgency: UrgencyTier,

    /// 續航狀態旗標
    pub runway_status: RunwayStatus,
}

/// 補貨優先度排名器
///
/// 純函數：對帳本以外的世界無副作用，輸入相同則輸出相同。
pub struct PriorityRanker;

impl PriorityRanker {
    /// 建立補貨優先度排名
    ///
    /// 僅對同時具有庫存記錄與銷售快照的產品產生條目（內部聯集；
    /// 未出現在銷售饋送中的產品直接排除，不以零銷量替代）。
    /// 輸出依分數遞減排序，平手時續航短者在前，再依產品ID確保確定性。
    pub fn rank(
        stocks: &[ProductStock],
        sales: &[SalesVelocitySnapshot],
        as_of: NaiveDate,
        config: &RankingConfig,
    ) -> capacity_core::Result<Vec<PriorityEntry>> {
        config.validate()?;

        tracing::info!(
            "開始補貨排名：庫存 {} 筆，銷售快照 {} 筆",
            stocks.len(),
            sales.len()
        );

        // 重複ID以後者為準（與帳本相同的鍵值語義）
        let mut stock_map: HashMap<&str, Decimal> = HashMap::new();
        for stock in stocks {
            stock_map.insert(stock.product_id.as_str(), stock.units_on_hand);
        }
        let mut sales_map: HashMap<&str, Decimal> = HashMap::new();
        for snapshot in sales {
            sales_map.insert(snapshot.product_id.as_str(), snapshot.units_sold);
        }

        let mut entries: Vec<PriorityEntry> = stock_map
            .iter()
            .filter_map(|(&product_id, &units_on_hand)| {
                let units_sold = match sales_map.get(product_id) {
                    Some(&sold) => sold,
                    None => {
                        // 無資料 ≠ 零銷量：缺快照者排除於排名之外
                        tracing::debug!("產品 {} 無銷售快照，排除於排名", product_id);
                        return None;
                    }
                };
                Some(Self::build_entry(
                    product_id,
                    units_on_hand,
                    units_sold,
                    as_of,
                    config,
                ))
            })
            .collect();

        entries.sort_by(|a, b| {
            b.priority_score
                .cmp(&a.priority_score)
                .then_with(|| a.projected_runway_days.cmp(&b.projected_runway_days))
                .then_with(|| a.product_id.cmp(&b.product_id))
        });

        tracing::info!("補貨排名完成：{} 筆條目", entries.len());

        Ok(entries)
    }

    /// 建立單一產品的優先度條目
    fn build_entry(
        product_id: &str,
        units_on_hand: Decimal,
        units_sold: Decimal,
        as_of: NaiveDate,
        config: &RankingConfig,
    ) -> PriorityEntry {
        let average_daily_sales =
            VelocityCalculator::average_daily_sales(units_sold, config.window_days);
        let projected_runway_days = VelocityCalculator::runway_days(
            units_on_hand,
            average_daily_sales,
            config.runway_cap_days,
        );

        // 分數 = 未來時界內的預估單位缺口，對銷量遞增、對庫存遞減
        let projected_demand = average_daily_sales * Decimal::from(config.horizon_days);
        let priority_score = (projected_demand - units_on_hand).max(Decimal::ZERO);

        let urgency = if priority_score > config.high_score_threshold {
            UrgencyTier::High
        } else if priority_score >= config.medium_score_threshold {
            UrgencyTier::Medium
        } else {
            UrgencyTier::Low
        };

        // 臨界為嚴格小於，警戒下界含臨界天數本身
        let runway_status = if projected_runway_days < config.critical_runway_days {
            RunwayStatus::Critical
        } else if projected_runway_days < config.warning_runway_days {
            RunwayStatus::Warning
        } else {
            RunwayStatus::Normal
        };

        let projected_stockout_date = if projected_runway_days >= config.runway_cap_days {
            None
        } else {
            // 不足一日以整日計
            projected_runway_days
                .ceil()
                .to_i64()
                .and_then(|days| as_of.checked_add_signed(chrono::Duration::days(days)))
        };

        PriorityEntry {
            product_id: product_id.to_string(),
            units_on_hand,
            units_sold_window: units_sold,
            average_daily_sales,
            projected_runway_days,
            projected_stockout_date,
            priority_score,
            urgency,
            runway_status,
        }
    }
}
