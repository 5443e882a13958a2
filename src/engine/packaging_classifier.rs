// ==========================================
// 危险品包装标记系统 - 包装分类器
// ==========================================
// 职责: 外包装代码 → 规范形状类别的全函数映射
// 红线: 无状态、无副作用; 未知代码一律回落为 Box, 永不失败
// ==========================================

use crate::domain::types::ShapeCategory;

// ==========================================
// PackagingClassifier - 纯函数工具类
// ==========================================
pub struct PackagingClassifier;

impl PackagingClassifier {
    /// 分类外包装描述为规范形状类别
    ///
    /// # 规则
    /// 1. 描述含括号代码列表（如 "Steel drum (1A1, 1A2)"）时取首个元素（去空白）
    /// 2. 生效代码查固定映射表
    /// 3. 未命中 → Box（安全兜底）
    pub fn classify(code: &str) -> ShapeCategory {
        let effective = Self::effective_code(code);
        match effective {
            "1A1" | "1N1" | "1N2" | "1D" => ShapeCategory::Drum,
            "1A2" => ShapeCategory::SteelDrumRemovableHead,
            "1B1" | "1B2" => ShapeCategory::AluminiumDrum,
            "1G" => ShapeCategory::WoodenDrum,
            "1H1" | "1H2" => ShapeCategory::PlasticDrum,
            "4A" | "4B" | "4N" | "4C1" | "4D" | "4F" | "4G" | "4H1" | "4H2" | "Box" => {
                ShapeCategory::Box
            }
            "3A1" | "3B1" | "3H1" => ShapeCategory::Jerrican,
            "T01" | "T02" | "T03" | "T04" => ShapeCategory::Tank,
            _ => ShapeCategory::Box,
        }
    }

    /// 提取生效代码: 首个括号组内逗号列表的首元素, 无括号时原样返回
    fn effective_code(code: &str) -> &str {
        if let Some(open) = code.find('(') {
            if let Some(len) = code[open + 1..].find(')') {
                let group = &code[open + 1..open + 1 + len];
                return group.split(',').next().unwrap_or("").trim();
            }
        }
        code
    }
}
