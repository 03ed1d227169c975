//! 皂坊目錄產能報表完整範例
//!
//! 展示從配方與庫存快照到產能報表的完整流程

use capacity::{
    AdditiveLine, CastLine, CatalogCapacityReport, FragranceDosage, FragranceLine, MaterialType,
    MoldLine, RawMaterialStock, Recipe, ReportConfig, ResourceLedger, SoapBaseLine, Unit,
};
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("===== Manufactory Capacity Report Example =====\n");

    // 步驟 1: 建立資源帳本（目前庫存快照）
    println!("[1] Create Resource Ledger");
    let ledger = create_ledger();
    println!("    Materials: {}", ledger.len());
    for material in ledger.low_stock() {
        println!(
            "    LOW STOCK {:<12} {} left (threshold {})",
            material.id, material.quantity_available, material.minimum_threshold
        );
    }
    println!();

    // 步驟 2: 建立配方目錄
    println!("[2] Create Recipe Catalog");
    let recipes = create_recipes();
    for recipe in &recipes {
        println!("    {} ({})", recipe.product_id, recipe.name);
    }
    println!();

    // 步驟 3: 設定報表組態
    println!("[3] Configure Report");
    let config = ReportConfig::default().with_top_n(5);
    println!(
        "    Top-N: {}, Critical threshold: {} units\n",
        config.top_n, config.critical_max_units
    );

    // 步驟 4: 執行目錄產能計算
    println!("[4] Build Catalog Capacity Report");
    let report = CatalogCapacityReport::build(&recipes, &ledger, &config);
    println!(
        "    Producible: {}/{} ({}%)\n",
        report.summary.producible_count,
        report.summary.total_products,
        report.summary.production_rate_percent
    );

    // 步驟 5: 檢視各產品的瓶頸
    println!("[5] Per-Product Bottlenecks");
    for result in &report.results {
        let factor = result
            .limiting_factor
            .map(|f| format!("{:?}", f))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "    {:<12} max {:>4} units, limited by {}",
            result.product_id, result.max_units, factor
        );
        for problem in &result.problems {
            println!("                 problem: {}", problem);
        }
    }
    println!();

    // 步驟 6: 臨界名單與結構性瓶頸
    println!("[6] Critical Products & Structural Constraint");
    for entry in &report.summary.critical_products {
        println!(
            "    CRITICAL {:<12} only {} units left producible",
            entry.product_id, entry.max_units
        );
    }
    if let Some((factor, count)) = report
        .summary
        .limiting_factor_histogram
        .iter()
        .max_by_key(|(_, &count)| count)
    {
        println!(
            "    Biggest structural constraint: {:?} ({} products)\n",
            factor, count
        );
    }

    // 步驟 7: 序列化為 JSON（交給展示層）
    println!("[7] Serialize Summary as JSON");
    println!("{}", serde_json::to_string_pretty(&report.summary)?);

    Ok(())
}

/// 皂坊庫存：皂基、香精、添加物、澆鑄材料、模具、包材
fn create_ledger() -> ResourceLedger {
    ResourceLedger::from_stocks(vec![
        RawMaterialStock::new(
            "BASE-OLIVE".to_string(),
            MaterialType::RawSoap,
            "Olivenöl-Seifenbasis".to_string(),
            Unit::Grams,
            Decimal::from(2400),
        )
        .with_minimum_threshold(Decimal::from(500)),
        RawMaterialStock::new(
            "BASE-SHEA".to_string(),
            MaterialType::RawSoap,
            "Sheabutter-Seifenbasis".to_string(),
            Unit::Grams,
            Decimal::from(320),
        )
        .with_minimum_threshold(Decimal::from(400)),
        RawMaterialStock::new(
            "FRAG-LAV".to_string(),
            MaterialType::FragranceOil,
            "Lavendel-Duftöl".to_string(),
            Unit::Drops,
            Decimal::from(36),
        ),
        RawMaterialStock::new(
            "ADD-DRIED-LAV".to_string(),
            MaterialType::Additive,
            "Getrocknete Lavendelblüten".to_string(),
            Unit::Grams,
            Decimal::from(120),
        ),
        RawMaterialStock::new(
            "CAST-WAX".to_string(),
            MaterialType::CastMaterial,
            "Gießwachs".to_string(),
            Unit::Milliliters,
            Decimal::from(900),
        ),
        RawMaterialStock::new(
            "MOLD-HEART".to_string(),
            MaterialType::CastMaterial,
            "Herzform".to_string(),
            Unit::Pieces,
            Decimal::from(4),
        ),
        RawMaterialStock::new(
            "PACK-BOX".to_string(),
            MaterialType::Packaging,
            "Faltschachtel".to_string(),
            Unit::Pieces,
            Decimal::from(60),
        ),
        RawMaterialStock::new(
            "PACK-BAG".to_string(),
            MaterialType::Packaging,
            "Organzabeutel".to_string(),
            Unit::Pieces,
            Decimal::from(15),
        ),
    ])
}

fn create_recipes() -> Vec<Recipe> {
    vec![
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
        Recipe::cast_piece(
            "CAST-HEART".to_string(),
            "Herzguss".to_string(),
            Decimal::from(120),
            CastLine::new("CAST-WAX".to_string(), Decimal::from(120)),
            "PACK-BAG".to_string(),
        )
        .with_mold(MoldLine::new("MOLD-HEART".to_string())),
        // 故意保留一筆壞引用，展示資料品質問題的呈現方式
        Recipe::soap_bar(
            "SOAP-GHOST".to_string(),
            "Geisterseife".to_string(),
            Decimal::from(100),
            SoapBaseLine::new("BASE-GONE".to_string(), Decimal::from(100)),
            "PACK-BOX".to_string(),
        ),
    ]
}
