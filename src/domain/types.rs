// ==========================================
// 危险品包装标记系统 - 领域类型定义
// ==========================================
// 序列化格式与宿主输入记录保持一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 运输方式 (Transport Mode)
// ==========================================
// 由宿主 UI 传入; 未识别的取值等价于公路/铁路(无追加规则层)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Road,
    Rail,
    Sea,
    Air,
}

impl TransportMode {
    /// 从宿主传入的代码解析运输方式
    ///
    /// 未识别的取值回落为 Road（无追加规则层），不报错
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "road" => TransportMode::Road,
            "rail" => TransportMode::Rail,
            "sea" => TransportMode::Sea,
            "air" => TransportMode::Air,
            other => {
                tracing::warn!("未识别的运输方式: {}, 按 road 处理", other);
                TransportMode::Road
            }
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Road => write!(f, "road"),
            TransportMode::Rail => write!(f, "rail"),
            TransportMode::Sea => write!(f, "sea"),
            TransportMode::Air => write!(f, "air"),
        }
    }
}

// ==========================================
// 包装形状类别 (Shape Category)
// ==========================================
// 分类器输出; 未知代码一律回落为 Box (安全兜底)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeCategory {
    Drum,
    SteelDrumRemovableHead,
    PlasticDrum,
    AluminiumDrum,
    WoodenDrum,
    Jerrican,
    Box,
    Tank,
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeCategory::Drum => write!(f, "Drum"),
            ShapeCategory::SteelDrumRemovableHead => write!(f, "SteelDrumRemovableHead"),
            ShapeCategory::PlasticDrum => write!(f, "PlasticDrum"),
            ShapeCategory::AluminiumDrum => write!(f, "AluminiumDrum"),
            ShapeCategory::WoodenDrum => write!(f, "WoodenDrum"),
            ShapeCategory::Jerrican => write!(f, "Jerrican"),
            ShapeCategory::Box => write!(f, "Box"),
            ShapeCategory::Tank => write!(f, "Tank"),
        }
    }
}

// ==========================================
// 相容性标记 (Compatibility Flag)
// ==========================================
// 矩阵配置文件(JSON)中以字符串 "true"/"false" 存储;
// 缺失条目视为"未规定", 查询时按相容处理(fail-open)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatFlag {
    #[serde(rename = "true")]
    Compatible,
    #[serde(rename = "false")]
    Incompatible,
}
