//! 資源需求展開（統一的標記變體列表）
//!
//! 配方展開為同質的每單位資源需求行，瓶頸歸約對此列表做統一摺疊，
//! 手工皂與澆鑄件共用同一套邏輯，不需要資源種類的類型階層。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::material::MaterialType;
use crate::recipe::{FragranceDosage, Recipe};

/// 資源需求角色
///
/// 角色決定問題字串中的標籤；多個角色可對應同一種物料類型
/// （模具與澆鑄材料同為 `CastMaterial` 入帳）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementRole {
    /// 皂基
    SoapBase,
    /// 澆鑄材料
    CastMaterial,
    /// 模具槽位
    Mold,
    /// 香精
    Fragrance,
    /// 添加物
    Additive,
    /// 包材
    Packaging,
}

impl RequirementRole {
    /// 對應的物料類型（限制因素以此類型回報）
    pub fn material_type(self) -> MaterialType {
        match self {
            RequirementRole::SoapBase => MaterialType::RawSoap,
            RequirementRole::CastMaterial | RequirementRole::Mold => MaterialType::CastMaterial,
            RequirementRole::Fragrance => MaterialType::FragranceOil,
            RequirementRole::Additive => MaterialType::Additive,
            RequirementRole::Packaging => MaterialType::Packaging,
        }
    }

    /// 問題字串使用的穩定標籤
    pub fn label(self) -> &'static str {
        match self {
            RequirementRole::SoapBase => "raw-soap",
            RequirementRole::CastMaterial => "cast-material",
            RequirementRole::Mold => "mold",
            RequirementRole::Fragrance => "fragrance",
            RequirementRole::Additive => "additive",
            RequirementRole::Packaging => "packaging",
        }
    }
}

/// 每單位資源需求行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRequirement {
    /// 需求角色
    pub role: RequirementRole,

    /// 物料ID
    pub material_id: String,

    /// 每單位產品的用量
    pub per_unit_amount: Decimal,
}

impl ResourceRequirement {
    pub fn new(role: RequirementRole, material_id: String, per_unit_amount: Decimal) -> Self {
        Self {
            role,
            material_id,
            per_unit_amount,
        }
    }
}

impl Recipe {
    /// 展開為每單位資源需求列表
    ///
    /// 兩個皂基成分展開為兩行共同必需的需求（各自獨立換算，
    /// 取較少者為準）；未申報香精則不產生香精需求行；包材必有，
    /// 每單位固定一件；澆鑄件另含澆鑄材料與模具槽位（每單位一個）。
    pub fn unit_requirements(&self) -> Vec<ResourceRequirement> {
        let mut requirements = Vec::new();

        for base in &self.soap_bases {
            requirements.push(ResourceRequirement::new(
                RequirementRole::SoapBase,
                base.material_id.clone(),
                base.grams_per_unit,
            ));
        }

        if let Some(cast) = &self.cast {
            requirements.push(ResourceRequirement::new(
                RequirementRole::CastMaterial,
                cast.material_id.clone(),
                cast.volume_per_unit_ml,
            ));
        }

        if let Some(mold) = &self.mold {
            requirements.push(ResourceRequirement::new(
                RequirementRole::Mold,
                mold.material_id.clone(),
                Decimal::ONE,
            ));
        }

        if let Some(fragrance) = &self.fragrance {
            let drops_per_unit = match fragrance.dosage {
                FragranceDosage::DropsPerGram(per_gram) => per_gram * self.target_weight_grams,
                FragranceDosage::FixedDrops(drops) => drops,
            };
            requirements.push(ResourceRequirement::new(
                RequirementRole::Fragrance,
                fragrance.material_id.clone(),
                drops_per_unit,
            ));
        }

        for additive in &self.additives {
            requirements.push(ResourceRequirement::new(
                RequirementRole::Additive,
                additive.material_id.clone(),
                additive.amount_per_unit,
            ));
        }

        requirements.push(ResourceRequirement::new(
            RequirementRole::Packaging,
            self.packaging.material_id.clone(),
            Decimal::ONE,
        ));

        requirements
    }
}
