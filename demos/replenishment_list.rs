//! 補貨優先度排名範例
//!
//! 展示從成品庫存與銷售速率快照到補貨排名的流程

use capacity::{PriorityRanker, ProductStock, RankingConfig, SalesVelocitySnapshot};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("===== Replenishment Priority Example =====\n");

    // 步驟 1: 成品庫存快照
    println!("[1] Finished-Goods Stock Snapshot");
    let stocks = vec![
        ProductStock::new("SOAP-LAV".to_string(), Decimal::from(15)),
        ProductStock::new("SOAP-DUO".to_string(), Decimal::from(2)),
        ProductStock::new("CAST-HEART".to_string(), Decimal::from(30)),
        ProductStock::new("SOAP-SLOW".to_string(), Decimal::from(50)),
        // SOAP-NEW 尚無銷售資料，將被排除（無資料 ≠ 零銷量）
        ProductStock::new("SOAP-NEW".to_string(), Decimal::from(10)),
    ];
    for stock in &stocks {
        println!("    {:<12} {} units on hand", stock.product_id, stock.units_on_hand);
    }
    println!();

    // 步驟 2: 銷售速率快照（外部統計供應方，90 天視窗）
    println!("[2] Sales Velocity Snapshots (trailing 90 days)");
    let sales = vec![
        SalesVelocitySnapshot::new("SOAP-LAV".to_string(), Decimal::from(45)),
        SalesVelocitySnapshot::new("SOAP-DUO".to_string(), Decimal::from(90)),
        SalesVelocitySnapshot::new("CAST-HEART".to_string(), Decimal::from(9)),
        SalesVelocitySnapshot::new("SOAP-SLOW".to_string(), Decimal::ZERO),
    ];
    for snapshot in &sales {
        println!("    {:<12} {} units sold", snapshot.product_id, snapshot.units_sold);
    }
    println!();

    // 步驟 3: 執行排名
    println!("[3] Rank Replenishment Priorities");
    let as_of = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
    let config = RankingConfig::default();
    let entries = PriorityRanker::rank(&stocks, &sales, as_of, &config)?;
    println!("    Entries: {}\n", entries.len());

    // 步驟 4: 檢視排名
    println!("[4] Ranked List");
    println!(
        "    {:<12} {:>6} {:>8} {:>8} {:>8}  tier    runway",
        "product", "stock", "sold/90d", "score", "runway"
    );
    for entry in &entries {
        println!(
            "    {:<12} {:>6} {:>8} {:>8} {:>8}  {:<7} {:?}",
            entry.product_id,
            entry.units_on_hand,
            entry.units_sold_window,
            entry.priority_score,
            entry.projected_runway_days,
            format!("{:?}", entry.urgency),
            entry.runway_status
        );
        if let Some(date) = entry.projected_stockout_date {
            println!("                 projected stock-out: {}", date);
        }
    }
    println!();

    // 步驟 5: 序列化為 JSON（交給展示層）
    println!("[5] Serialize as JSON");
    println!("{}", serde_json::to_string_pretty(&entries)?);

    Ok(())
}
