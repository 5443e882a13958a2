// ==========================================
// 危险品包装标记系统 - 标记方案领域模型
// ==========================================
// 输出契约: 槽位 → 资产键 / 槽位 → 展示文本 / 强制隐藏槽位集合
// 红线: 引擎只产出标识符, 资产解析与渲染由宿主负责
// ==========================================

use crate::domain::types::ShapeCategory;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ==========================================
// 槽位名称 (3D 模型上的命名锚点)
// ==========================================
pub mod slots {
    pub const DG_CLASS: &str = "DG_class";
    pub const DG_SUBRISK1: &str = "DG_subrisk1";
    pub const DG_SUBRISK2: &str = "DG_subrisk2";
    pub const DG_SUBRISK3: &str = "DG_subrisk3";
    pub const ENVIRON_HAZ: &str = "Environ_haz";
    pub const LIMITED_QUANTITY: &str = "Limited_quantity";
    pub const ORIENTATION_ARROW_FRONT: &str = "Orientation_arrow_front";
    pub const ORIENTATION_ARROW_SIDE: &str = "Orientation_arrow_side";
    pub const AIRCRAFT_ONLY: &str = "Aircraft_only";
    pub const MAGNETIZED_MATERIAL: &str = "Magnetized_material";
    pub const CRYOGENIC_LIQUIDS: &str = "Cryogenic_liquids";
    pub const BATTERY_MARK: &str = "Battery_mark";
    pub const UN_NUMBER_BATTERY: &str = "UN_number_battery";
    pub const NET_QUANTITY: &str = "Net_quantity";
    pub const AWAY_FROM_HEAT: &str = "Away_from_heat";
    pub const RADIOACTIVE_EXCEPTED: &str = "Radioactive_excepted";
    pub const SHIPPER_ADDRESS: &str = "Shipper_address";
    pub const CONSIGNEE_ADDRESS: &str = "Consignee_address";
    pub const TECHNICAL_NAME: &str = "Technical_name";
    pub const UN_NUMBER_RADIOACTIVE: &str = "UN_number_radioactive";
    pub const EXCEPTED_CLASS: &str = "Excepted_class";
    pub const EXCEPTED_QUANTITY: &str = "Excepted_quantity";
    pub const UN_NUMBER: &str = "UN_number";
    pub const PSN: &str = "PSN";
    /// UN 认证标记（模型自带纹理, 仅受隐藏控制, 引擎从不赋值）
    pub const UN_CERTIFICATION: &str = "UN_certification";

    /// 集合打包用的类别限定槽位名, 如 "6.1" → "DG_class_6_1"
    ///
    /// 点号替换为下划线, 允许多个类别同时渲染
    pub fn dg_class_qualified(code: &str) -> String {
        format!("DG_class_{}", code.replace('.', "_"))
    }
}

/// 单件评估的基线隐藏槽位（未赋值槽位渲染为空白而非残留贴图）
pub const SINGLE_PACKAGE_SLOTS: &[&str] = &[
    slots::DG_CLASS,
    slots::DG_SUBRISK1,
    slots::DG_SUBRISK2,
    slots::DG_SUBRISK3,
    slots::ENVIRON_HAZ,
    slots::LIMITED_QUANTITY,
    slots::ORIENTATION_ARROW_FRONT,
    slots::ORIENTATION_ARROW_SIDE,
    slots::AIRCRAFT_ONLY,
    slots::MAGNETIZED_MATERIAL,
    slots::CRYOGENIC_LIQUIDS,
    slots::BATTERY_MARK,
    slots::UN_NUMBER_BATTERY,
    slots::NET_QUANTITY,
    slots::AWAY_FROM_HEAT,
    slots::RADIOACTIVE_EXCEPTED,
    slots::SHIPPER_ADDRESS,
    slots::CONSIGNEE_ADDRESS,
    slots::TECHNICAL_NAME,
    slots::UN_NUMBER_RADIOACTIVE,
    slots::EXCEPTED_CLASS,
    slots::EXCEPTED_QUANTITY,
    slots::UN_NUMBER,
    slots::PSN,
];

/// 集合打包的基线隐藏槽位（类别限定槽位 + 共享槽位, 是单件集合的变体子集）
pub const OVERPACK_SLOTS: &[&str] = &[
    "DG_class_1",
    "DG_class_2_1",
    "DG_class_2_2",
    "DG_class_2_3",
    "DG_class_3",
    "DG_class_4_1",
    "DG_class_4_2",
    "DG_class_4_3",
    "DG_class_5_1",
    "DG_class_5_2",
    "DG_class_6_1",
    "DG_class_6_2",
    "DG_class_7",
    "DG_class_8",
    "DG_class_9",
    "DG_class_9A",
    slots::ENVIRON_HAZ,
    slots::LIMITED_QUANTITY,
    slots::ORIENTATION_ARROW_SIDE,
    slots::BATTERY_MARK,
    slots::UN_NUMBER_BATTERY,
    slots::PSN,
    slots::UN_NUMBER,
    slots::TECHNICAL_NAME,
];

// ==========================================
// AssetKey - 不透明资产标识符
// ==========================================
// 宿主加载器负责解析为图片/模型资源; 引擎永不触碰文件
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetKey(String);

impl AssetKey {
    pub fn new(key: impl Into<String>) -> Self {
        AssetKey(key.into())
    }

    /// 危险类别标签资产键（按类别/次危险性代码派生, 永不失败）
    pub fn hazard_label(code: &str) -> Self {
        AssetKey(format!("ADRbook/{}", code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetKey {
    fn from(key: &str) -> Self {
        AssetKey(key.to_string())
    }
}

// ==========================================
// 固定标签/模型资产键
// ==========================================
pub mod assets {
    /// 限量标记
    pub const LIMITED_QUANTITY: &str = "Labels/LQ";
    /// 限量标记（航空变体, 中心带 "Y"）
    pub const LIMITED_QUANTITY_AIR: &str = "Labels/LQ_air";
    /// 定向箭头 "This Way Up"
    pub const ORIENTATION_ARROW: &str = "Labels/OA";
    /// 仅限货机
    pub const CARGO_AIRCRAFT_ONLY: &str = "Labels/Air";
    /// 磁性物质
    pub const MAGNETIZED_MATERIAL: &str = "Labels/Magnetized";
    /// 远离热源
    pub const AWAY_FROM_HEAT: &str = "Labels/away_from_heat";
    /// 放射性例外包装
    pub const RADIOACTIVE_EXCEPTED: &str = "Labels/Radioactive_excepted";
    /// 锂电池标记
    pub const BATTERY_MARK: &str = "Labels/battery";
    /// 例外数量标记
    pub const EXCEPTED_QUANTITY: &str = "Labels/Excepted_quantity";
    /// 锂电池专用类别代码（覆盖危险类别标签）
    pub const BATTERY_CLASS_CODE: &str = "9A";
    /// 集合打包外包装模型
    pub const OVERPACK_MODEL: &str = "Models/overpack";
}

impl ShapeCategory {
    /// 形状类别对应的 3D 模型资产键
    pub fn model_asset(&self) -> AssetKey {
        let key = match self {
            ShapeCategory::Drum => "Models/Drum",
            ShapeCategory::SteelDrumRemovableHead => "Models/1A2_N2",
            ShapeCategory::PlasticDrum => "Models/PlasticDrum",
            ShapeCategory::AluminiumDrum => "Models/AluminiumDrum",
            ShapeCategory::WoodenDrum => "Models/WoodenDrum",
            ShapeCategory::Jerrican => "Models/Jerrican",
            ShapeCategory::Box => "Models/Box",
            ShapeCategory::Tank => "Models/Container",
        };
        AssetKey::from(key)
    }
}

// ==========================================
// MarkingPlan - 标记方案
// ==========================================
// 不变量: 同一槽位至多出现在 textures 或 texts 之一;
// 赋值即取消隐藏, 清除纹理则重新隐藏对应槽位。
// 使用 BTreeMap/BTreeSet 保证迭代与相等判定的确定性。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkingPlan {
    textures: BTreeMap<String, AssetKey>,
    texts: BTreeMap<String, String>,
    hidden: BTreeSet<String>,
}

impl MarkingPlan {
    /// 以基线隐藏集合创建空方案
    pub fn with_hidden_baseline<'a>(slots: impl IntoIterator<Item = &'a str>) -> Self {
        MarkingPlan {
            textures: BTreeMap::new(),
            texts: BTreeMap::new(),
            hidden: slots.into_iter().map(str::to_string).collect(),
        }
    }

    /// 赋纹理资产并取消该槽位隐藏
    ///
    /// 同一槽位写入纹理与文本属于引擎缺陷（契约违反）, 非输入错误
    pub fn set_texture(&mut self, slot: &str, asset: impl Into<AssetKey>) {
        debug_assert!(
            !self.texts.contains_key(slot),
            "槽位 {} 已被赋文本, 不得再赋纹理",
            slot
        );
        self.hidden.remove(slot);
        self.textures.insert(slot.to_string(), asset.into());
    }

    /// 赋展示文本并取消该槽位隐藏
    pub fn set_text(&mut self, slot: &str, text: impl Into<String>) {
        debug_assert!(
            !self.textures.contains_key(slot),
            "槽位 {} 已被赋纹理, 不得再赋文本",
            slot
        );
        self.hidden.remove(slot);
        self.texts.insert(slot.to_string(), text.into());
    }

    /// 强制隐藏槽位（不清除已有赋值之外的状态）
    pub fn hide(&mut self, slot: &str) {
        self.hidden.insert(slot.to_string());
    }

    /// 清空全部纹理赋值, 对应槽位回到隐藏状态
    ///
    /// 航空规则层整体替换纹理集时使用; 文本赋值不受影响
    pub fn clear_textures(&mut self) {
        for slot in std::mem::take(&mut self.textures).into_keys() {
            self.hidden.insert(slot);
        }
    }

    // ===== 只读访问 =====

    pub fn texture(&self, slot: &str) -> Option<&AssetKey> {
        self.textures.get(slot)
    }

    pub fn text(&self, slot: &str) -> Option<&str> {
        self.texts.get(slot).map(String::as_str)
    }

    pub fn is_hidden(&self, slot: &str) -> bool {
        self.hidden.contains(slot)
    }

    pub fn textures(&self) -> &BTreeMap<String, AssetKey> {
        &self.textures
    }

    pub fn texts(&self) -> &BTreeMap<String, String> {
        &self.texts
    }

    pub fn hidden_slots(&self) -> &BTreeSet<String> {
        &self.hidden
    }
}
