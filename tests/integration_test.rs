//! 集成測試

use capacity_cache::{DirtyTracker, RecipeIndex};
use capacity_calc::{CatalogCapacityReport, PriorityRanker, RunwayStatus, UrgencyTier};
use capacity_core::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn stock(id: &str, material_type: MaterialType, unit: Unit, qty: i64) -> RawMaterialStock {
    RawMaterialStock::new(
        id.to_string(),
        material_type,
        id.to_string(),
        unit,
        Decimal::from(qty),
    )
}

/// 小型手工皂坊目錄：兩款皂、一件澆鑄件、一筆壞引用配方
fn manufactory_recipes() -> Vec<Recipe> {
    vec![
        // 薰衣草皂：100 g 皂基、每單位 2 滴香精、乾燥花添加物
        Recipe::soap_bar(
            "SOAP-LAV".to_string(),
            "Lavendelseife".to_string(),
            Decimal::from(100),
            SoapBaseLine::new("BASE-OLIVE".to_string(), Decimal::from(100)),
            "PACK-BOX".to_string(),
        )
        .with_fragrance(FragranceLine::new(
            "FRAG-LAV".to_string(),
            FragranceDosage::FixedDrops(Decimal::from(2)),
        ))
        .with_additive(AdditiveLine::new(
            "ADD-DRIED-LAV".to_string(),
            Decimal::from(3),
        )),
        // 雙皂基皂：60 + 40 = 100 g
        Recipe::soap_bar(
            "SOAP-DUO".to_string(),
            "Olive-Shea-Seife".to_string(),
            Decimal::from(100),
            SoapBaseLine::new("BASE-OLIVE".to_string(), Decimal::from(60)),
            "PACK-BOX".to_string(),
        )
        .with_second_base(SoapBaseLine::new(
            "BASE-SHEA".to_string(),
            Decimal::from(40),
        )),
        // 澆鑄件：120 ml 澆鑄蠟 + 模具槽位
        Recipe::cast_piece(
            "CAST-HEART".to_string(),
            "Herzguss".to_string(),
            Decimal::from(120),
            CastLine::new("CAST-WAX".to_string(), Decimal::from(120)),
            "PACK-BAG".to_string(),
        )
        .with_mold(MoldLine::new("MOLD-HEART".to_string())),
        // 壞引用：皂基不在帳本中
        Recipe::soap_bar(
            "SOAP-GHOST".to_string(),
            "Geisterseife".to_string(),
            Decimal::from(100),
            SoapBaseLine::new("BASE-GONE".to_string(), Decimal::from(100)),
            "PACK-BOX".to_string(),
        ),
    ]
}

fn manufactory_ledger() -> ResourceLedger {
    ResourceLedger::from_stocks(vec![
        stock("BASE-OLIVE", MaterialType::RawSoap, Unit::Grams, 1200),
        stock("BASE-SHEA", MaterialType::RawSoap, Unit::Grams, 200),
        stock("FRAG-LAV", MaterialType::FragranceOil, Unit::Drops, 14),
        stock("ADD-DRIED-LAV", MaterialType::Additive, Unit::Grams, 90),
        stock("CAST-WAX", MaterialType::CastMaterial, Unit::Milliliters, 600),
        stock("MOLD-HEART", MaterialType::CastMaterial, Unit::Pieces, 2),
        stock("PACK-BOX", MaterialType::Packaging, Unit::Pieces, 40),
        stock("PACK-BAG", MaterialType::Packaging, Unit::Pieces, 25),
    ])
}

#[test]
fn test_end_to_end_worked_example() {
    // 場景：50 g 皂基（600 g → 12）、每單位 2 滴香精（20 滴 → 10）、
    // 包材 7 件 → 7 ⇒ maxUnits = 7，限制因素為包材
    let recipe = Recipe::soap_bar(
        "SOAP-1".to_string(),
        "Beispielseife".to_string(),
        Decimal::from(50),
        SoapBaseLine::new("BASE-1".to_string(), Decimal::from(50)),
        "PACK-1".to_string(),
    )
    .with_fragrance(FragranceLine::new(
        "FRAG-1".to_string(),
        FragranceDosage::FixedDrops(Decimal::from(2)),
    ));
    let ledger = ResourceLedger::from_stocks(vec![
        stock("BASE-1", MaterialType::RawSoap, Unit::Grams, 600),
        stock("FRAG-1", MaterialType::FragranceOil, Unit::Drops, 20),
        stock("PACK-1", MaterialType::Packaging, Unit::Pieces, 7),
    ]);

    let report = CatalogCapacityReport::build(&[recipe], &ledger, &ReportConfig::default());

    assert_eq!(report.results.len(), 1);
    let result = &report.results[0];
    assert_eq!(result.max_units, 7);
    assert_eq!(result.limiting_factor, Some(MaterialType::Packaging));
    assert!(result.problems.is_empty());
}

#[test]
fn test_manufactory_catalog_report() {
    // 場景：完整皂坊目錄的一次報表
    //   SOAP-LAV:   皂基 1200/100=12、香精 14/2=7、添加物 90/3=30、包材 40 → 7（香精）
    //   SOAP-DUO:   皂基 1200/60=20 與 200/40=5、包材 40 → 5（皂基）
    //   CAST-HEART: 澆鑄蠟 600/120=5、模具 2、包材袋 25 → 2（澆鑄材料）
    //   SOAP-GHOST: 皂基缺引用 → 0（皂基）
    let report = CatalogCapacityReport::build(
        &manufactory_recipes(),
        &manufactory_ledger(),
        &ReportConfig::default(),
    );

    assert_eq!(report.summary.total_products, 4);
    assert_eq!(report.summary.producible_count, 3);
    assert_eq!(report.summary.non_producible_count, 1);
    // 3/4 = 75%
    assert_eq!(report.summary.production_rate_percent, 75);

    // 結果依產品ID排序
    let ids: Vec<&str> = report.results.iter().map(|r| r.product_id.as_str()).collect();
    assert_eq!(ids, vec!["CAST-HEART", "SOAP-DUO", "SOAP-GHOST", "SOAP-LAV"]);

    let by_id = |id: &str| report.results.iter().find(|r| r.product_id == id).unwrap();
    assert_eq!(by_id("SOAP-LAV").max_units, 7);
    assert_eq!(
        by_id("SOAP-LAV").limiting_factor,
        Some(MaterialType::FragranceOil)
    );
    assert_eq!(by_id("SOAP-DUO").max_units, 5);
    assert_eq!(by_id("SOAP-DUO").limiting_factor, Some(MaterialType::RawSoap));
    assert_eq!(by_id("CAST-HEART").max_units, 2);
    assert_eq!(
        by_id("CAST-HEART").limiting_factor,
        Some(MaterialType::CastMaterial)
    );
    assert_eq!(by_id("SOAP-GHOST").max_units, 0);
    assert!(!by_id("SOAP-GHOST").problems.is_empty());

    // 直方圖總和 == 具明確限制因素的結果數（含不可生產者）
    let histogram_sum: usize = report.summary.limiting_factor_histogram.values().sum();
    assert_eq!(histogram_sum, 4);
    assert_eq!(
        report.summary.limiting_factor_histogram[&MaterialType::RawSoap],
        2
    );

    // 臨界名單：0 < maxUnits ≤ 5，遞增排序
    let critical: Vec<&str> = report
        .summary
        .critical_products
        .iter()
        .map(|p| p.product_id.as_str())
        .collect();
    assert_eq!(critical, vec!["CAST-HEART", "SOAP-DUO"]);

    // 排行榜：遞減排序
    assert_eq!(report.summary.top_producible[0].product_id, "SOAP-LAV");
}

#[test]
fn test_empty_catalog_and_empty_ledger_do_not_fail() {
    let empty_report =
        CatalogCapacityReport::build(&[], &ResourceLedger::new(), &ReportConfig::default());
    assert_eq!(empty_report.summary.total_products, 0);
    assert_eq!(empty_report.summary.production_rate_percent, 0);

    // 空帳本：所有引用皆缺失，全數回報為不可生產而非錯誤
    let report = CatalogCapacityReport::build(
        &manufactory_recipes(),
        &ResourceLedger::new(),
        &ReportConfig::default(),
    );
    assert_eq!(report.summary.producible_count, 0);
    assert!(report.results.iter().all(|r| r.max_units == 0));
    assert!(report.results.iter().all(|r| !r.problems.is_empty()));
}

#[test]
fn test_priority_worked_example() {
    // 場景：在庫 15、90 天售出 45 ⇒ 日均 0.5、續航 30 天、分數 0
    // ⇒ 層級 low，但續航旗標為 warning（臨界為嚴格 < 30，下界含 30）
    let as_of = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
    let stocks = vec![ProductStock::new("SOAP-LAV".to_string(), Decimal::from(15))];
    let sales = vec![SalesVelocitySnapshot::new(
        "SOAP-LAV".to_string(),
        Decimal::from(45),
    )];

    let entries = PriorityRanker::rank(&stocks, &sales, as_of, &RankingConfig::default()).unwrap();

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.average_daily_sales, Decimal::new(5, 1));
    assert_eq!(entry.projected_runway_days, Decimal::from(30));
    assert_eq!(entry.priority_score, Decimal::ZERO);
    assert_eq!(entry.urgency, UrgencyTier::Low);
    assert_eq!(entry.runway_status, RunwayStatus::Warning);
}

#[test]
fn test_zero_velocity_product_is_not_urgent() {
    let as_of = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
    let stocks = vec![ProductStock::new("SOAP-SLOW".to_string(), Decimal::from(8))];
    let sales = vec![SalesVelocitySnapshot::new(
        "SOAP-SLOW".to_string(),
        Decimal::ZERO,
    )];

    let entries = PriorityRanker::rank(&stocks, &sales, as_of, &RankingConfig::default()).unwrap();

    let entry = &entries[0];
    // 零銷量 → 續航為哨兵值、無斷貨日期、排除於緊急層級之外
    assert_eq!(entry.projected_runway_days, Decimal::from(9999));
    assert_eq!(entry.projected_stockout_date, None);
    assert_eq!(entry.urgency, UrgencyTier::Low);
    assert_eq!(entry.runway_status, RunwayStatus::Normal);
}

#[test]
fn test_full_pipeline_is_deterministic() {
    // 場景：report 與 rank 對相同輸入重複執行，序列化輸出逐位元相同
    let recipes = manufactory_recipes();
    let ledger = manufactory_ledger();
    let report_config = ReportConfig::default();

    let report_a = CatalogCapacityReport::build(&recipes, &ledger, &report_config);
    let report_b = CatalogCapacityReport::build(&recipes, &ledger, &report_config);
    assert_eq!(
        serde_json::to_string(&report_a).unwrap(),
        serde_json::to_string(&report_b).unwrap()
    );

    let as_of = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
    let stocks = vec![
        ProductStock::new("SOAP-LAV".to_string(), Decimal::from(15)),
        ProductStock::new("SOAP-DUO".to_string(), Decimal::from(2)),
        ProductStock::new("CAST-HEART".to_string(), Decimal::from(30)),
    ];
    let sales = vec![
        SalesVelocitySnapshot::new("SOAP-LAV".to_string(), Decimal::from(45)),
        SalesVelocitySnapshot::new("SOAP-DUO".to_string(), Decimal::from(90)),
        SalesVelocitySnapshot::new("CAST-HEART".to_string(), Decimal::from(9)),
    ];
    let ranking_config = RankingConfig::default();

    let rank_a = PriorityRanker::rank(&stocks, &sales, as_of, &ranking_config).unwrap();
    let rank_b = PriorityRanker::rank(&stocks, &sales, as_of, &ranking_config).unwrap();
    assert_eq!(
        serde_json::to_string(&rank_a).unwrap(),
        serde_json::to_string(&rank_b).unwrap()
    );

    // 快賣低庫存者在前：SOAP-DUO 分數 = 1×30 − 2 = 28
    assert_eq!(rank_a[0].product_id, "SOAP-DUO");
    assert_eq!(rank_a[0].urgency, UrgencyTier::High);
}

#[test]
fn test_dirty_tracking_limits_recomputation_scope() {
    // 場景：香精庫存異動後，僅重算受波及的產品，結果與全量重算一致
    let recipes = manufactory_recipes();
    let index = RecipeIndex::from_recipes(&recipes);

    let mut tracker = DirtyTracker::new();
    tracker.mark_dirty("FRAG-LAV".to_string());

    let affected = index.affected_products(&tracker);
    assert_eq!(affected, vec!["SOAP-LAV"]);

    // 異動後帳本：香精 14 → 40 滴
    let updated_ledger = ResourceLedger::from_stocks(vec![
        stock("BASE-OLIVE", MaterialType::RawSoap, Unit::Grams, 1200),
        stock("BASE-SHEA", MaterialType::RawSoap, Unit::Grams, 200),
        stock("FRAG-LAV", MaterialType::FragranceOil, Unit::Drops, 40),
        stock("ADD-DRIED-LAV", MaterialType::Additive, Unit::Grams, 90),
        stock("CAST-WAX", MaterialType::CastMaterial, Unit::Milliliters, 600),
        stock("MOLD-HEART", MaterialType::CastMaterial, Unit::Pieces, 2),
        stock("PACK-BOX", MaterialType::Packaging, Unit::Pieces, 40),
        stock("PACK-BAG", MaterialType::Packaging, Unit::Pieces, 25),
    ]);

    let full = CatalogCapacityReport::build(&recipes, &updated_ledger, &ReportConfig::default());

    let partial: Vec<Recipe> = recipes
        .iter()
        .filter(|r| affected.contains(&r.product_id))
        .cloned()
        .collect();
    let scoped = CatalogCapacityReport::build(&partial, &updated_ledger, &ReportConfig::default());

    let full_lav = full
        .results
        .iter()
        .find(|r| r.product_id == "SOAP-LAV")
        .unwrap();
    // 香精 40/2 = 20 不再是瓶頸；皂基 1200/100 = 12 接手
    assert_eq!(scoped.results[0].max_units, full_lav.max_units);
    assert_eq!(full_lav.max_units, 12);
    assert_eq!(full_lav.limiting_factor, Some(MaterialType::RawSoap));
}
