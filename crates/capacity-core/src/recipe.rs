//! 配方模型（單一產品的物料清單）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 產品類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// 手工皂
    Soap,
    /// 澆鑄件
    CastPiece,
}

/// 皂基成分行
///
/// 一個配方可有一或兩個皂基成分；兩者為共同必需的獨立成分，
/// 不是可互相調配的共用池。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoapBaseLine {
    /// 物料ID
    pub material_id: String,

    /// 每單位用量（公克）
    pub grams_per_unit: Decimal,
}

impl SoapBaseLine {
    pub fn new(material_id: String, grams_per_unit: Decimal) -> Self {
        Self {
            material_id,
            grams_per_unit,
        }
    }
}

/// 香精劑量規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragranceDosage {
    /// 依目標重量計滴數（滴/公克）
    DropsPerGram(Decimal),
    /// 每單位固定滴數
    FixedDrops(Decimal),
}

/// 香精成分行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FragranceLine {
    /// 物料ID
    pub material_id: String,

    /// 劑量規則
    pub dosage: FragranceDosage,
}

impl FragranceLine {
    pub fn new(material_id: String, dosage: FragranceDosage) -> Self {
        Self {
            material_id,
            dosage,
        }
    }
}

/// 添加物成分行（Zusatzstoff）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditiveLine {
    /// 物料ID
    pub material_id: String,

    /// 每單位用量
    pub amount_per_unit: Decimal,
}

impl AdditiveLine {
    pub fn new(material_id: String, amount_per_unit: Decimal) -> Self {
        Self {
            material_id,
            amount_per_unit,
        }
    }
}

/// 包材引用（每單位產品固定消耗一件）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagingLine {
    /// 物料ID
    pub material_id: String,
}

impl PackagingLine {
    pub fn new(material_id: String) -> Self {
        Self { material_id }
    }
}

/// 澆鑄材料成分行（澆鑄件專用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastLine {
    /// 物料ID
    pub material_id: String,

    /// 每單位用量（毫升）
    pub volume_per_unit_ml: Decimal,
}

impl CastLine {
    pub fn new(material_id: String, volume_per_unit_ml: Decimal) -> Self {
        Self {
            material_id,
            volume_per_unit_ml,
        }
    }
}

/// 模具引用（澆鑄件專用，每單位占用一個槽位）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoldLine {
    /// 物料ID
    pub material_id: String,
}

impl MoldLine {
    pub fn new(material_id: String) -> Self {
        Self { material_id }
    }
}

/// 配方（每個上架產品一筆）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// 產品ID
    pub product_id: String,

    /// 產品名稱
    pub name: String,

    /// 產品類別
    pub category: ProductCategory,

    /// 目標重量（公克，手工皂；亦供依重量計的香精劑量使用）
    pub target_weight_grams: Decimal,

    /// 目標體積（毫升，澆鑄件）
    pub target_volume_ml: Option<Decimal>,

    /// 皂基成分（1 或 2 行；2 行時重量拆分須恰等於目標重量）
    pub soap_bases: Vec<SoapBaseLine>,

    /// 香精成分（可無；無香精不構成零瓶頸）
    pub fragrance: Option<FragranceLine>,

    /// 添加物成分
    pub additives: Vec<AdditiveLine>,

    /// 包材引用（必有）
    pub packaging: PackagingLine,

    /// 澆鑄材料（澆鑄件）
    pub cast: Option<CastLine>,

    /// 模具引用（澆鑄件）
    pub mold: Option<MoldLine>,
}

impl Recipe {
    /// 創建手工皂配方
    pub fn soap_bar(
        product_id: String,
        name: String,
        target_weight_grams: Decimal,
        base: SoapBaseLine,
        packaging_material_id: String,
    ) -> Self {
        Self {
            product_id,
            name,
            category: ProductCategory::Soap,
            target_weight_grams,
            target_volume_ml: None,
            soap_bases: vec![base],
            fragrance: None,
            additives: Vec::new(),
            packaging: PackagingLine::new(packaging_material_id),
            cast: None,
            mold: None,
        }
    }

    /// 創建澆鑄件配方
    pub fn cast_piece(
        product_id: String,
        name: String,
        target_volume_ml: Decimal,
        cast: CastLine,
        packaging_material_id: String,
    ) -> Self {
        Self {
            product_id,
            name,
            category: ProductCategory::CastPiece,
            target_weight_grams: Decimal::ZERO,
            target_volume_ml: Some(target_volume_ml),
            soap_bases: Vec::new(),
            fragrance: None,
            additives: Vec::new(),
            packaging: PackagingLine::new(packaging_material_id),
            cast: Some(cast),
            mold: None,
        }
    }

    /// 建構器模式：加入第二個皂基成分
    pub fn with_second_base(mut self, base: SoapBaseLine) -> Self {
        self.soap_bases.push(base);
        self
    }

    /// 建構器模式：設置香精成分
    pub fn with_fragrance(mut self, fragrance: FragranceLine) -> Self {
        self.fragrance = Some(fragrance);
        self
    }

    /// 建構器模式：加入添加物成分
    pub fn with_additive(mut self, additive: AdditiveLine) -> Self {
        self.additives.push(additive);
        self
    }

    /// 建構器模式：設置模具
    pub fn with_mold(mut self, mold: MoldLine) -> Self {
        self.mold = Some(mold);
        self
    }

    /// 檢查配方的資料品質問題
    ///
    /// 驗證失敗是資料品質問題而非靜默歸零：問題以字串回報，
    /// 產能仍按申報值計算，引擎不「修正」資料。
    pub fn validation_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        match self.category {
            ProductCategory::Soap => {
                if self.soap_bases.is_empty() {
                    problems.push("soap recipe has no soap base line".to_string());
                }
                if self.soap_bases.len() > 2 {
                    problems.push(format!(
                        "soap recipe declares {} base components (at most 2 allowed)",
                        self.soap_bases.len()
                    ));
                }
                if self.soap_bases.len() == 2 {
                    let split_sum: Decimal =
                        self.soap_bases.iter().map(|b| b.grams_per_unit).sum();
                    if split_sum != self.target_weight_grams {
                        problems.push(format!(
                            "soap base weight split sums to {} g, target weight is {} g",
                            split_sum, self.target_weight_grams
                        ));
                    }
                }
            }
            ProductCategory::CastPiece => {
                if self.cast.is_none() {
                    problems.push("cast recipe has no cast material line".to_string());
                }
            }
        }

        problems
    }
}
