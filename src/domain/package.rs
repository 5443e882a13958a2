// ==========================================
// 危险品包装标记系统 - 包装件领域模型
// ==========================================
// 用途: 宿主表单/表格写入, 引擎层只读
// 红线: 每次评估新建实体, 无生命周期、无共享可变状态
// ==========================================

use serde::{Deserialize, Serialize};

/// UN 编号缺省值（四位编号约定）
pub const DEFAULT_UN: &str = "0010";

/// 危险类别/次危险性"不适用"代码
pub const NOT_APPLICABLE_CODE: &str = "0";

/// 外包装代码缺省值（纤维板箱）
pub const DEFAULT_PACKAGING_CODE: &str = "4G";

/// 包装说明缺省首令牌
pub const DEFAULT_PACKAGING_INSTRUCTION: &str = "P001";

/// 锂电池 UN 编号集合（触发电池标记规则）
pub const BATTERY_UNS: [&str; 5] = ["3090", "3091", "3480", "3481", "3536"];

// ==========================================
// LimitedQuantity - 限量申报
// ==========================================
// 监管阈值: 数值 + 单位, 体积单位需按密度换算为质量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitedQuantity {
    pub value: f64,
    pub unit: String,
}

// ==========================================
// Package - 包装件输入记录
// ==========================================
// 字段名与宿主 JSON 记录对齐 (camelCase);
// 可缺省字段按文档缺省值回落
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    // ===== 识别信息 =====
    #[serde(default)]
    pub un: Option<String>, // UN 编号（缺省 "0010"）
    #[serde(default, rename = "class")]
    pub hazard_class: Option<String>, // 危险类别（缺失/空 = 不适用）
    #[serde(default, rename = "division")]
    pub subdivision: Option<String>, // 次危险性（缺失/空 = 不适用）
    #[serde(default)]
    pub shipping_name: Option<String>, // 运输专用名称（仅宿主表格展示）

    // ===== 数量维度 =====
    pub net_mass: f64,   // 净重（kg）
    pub quantity: f64,   // 件数（单件净重分母, 必须 > 0）
    #[serde(default)]
    pub gross_mass: Option<f64>, // 毛重（kg）
    #[serde(default = "default_density")]
    pub density: f64,    // 相对密度 S.G.（体积限量换算用, 缺省 1.0）

    // ===== 包装信息 =====
    #[serde(default)]
    pub outer_packaging: Option<String>, // 外包装描述（可含括号代码列表）
    #[serde(default)]
    pub single_packaging: Option<String>, // 单一包装描述（存在即视为单一包装）
    #[serde(default)]
    pub packaging_instructions: Option<String>, // 包装说明（首令牌驱动规则, 缺省 "P001"）
    #[serde(default)]
    pub packaging_format: Option<String>, // 包装形式（"Excepted Quantity" 触发例外数量规则）

    // ===== 监管属性 =====
    pub limited_quantity: LimitedQuantity, // 限量阈值申报
    #[serde(default)]
    pub technical_name_required: bool, // N.O.S. 条目是否要求技术名称
}

fn default_density() -> f64 {
    1.0
}

impl Package {
    /// UN 编号（缺失/空回落 "0010"）
    pub fn un_code(&self) -> &str {
        self.un
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_UN)
    }

    /// 格式化 UN 编号, 如 "UN 0010"
    pub fn formatted_un(&self) -> String {
        format!("UN {}", self.un_code())
    }

    /// 危险类别代码（缺失/空回落 "0" = 不适用）
    pub fn class_code(&self) -> &str {
        self.hazard_class
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(NOT_APPLICABLE_CODE)
    }

    /// 次危险性代码（缺失/空回落 "0" = 不适用）
    pub fn subdivision_code(&self) -> &str {
        self.subdivision
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(NOT_APPLICABLE_CODE)
    }

    /// 类别或次危险性命中指定代码
    pub fn has_class_or_subdivision(&self, code: &str) -> bool {
        self.class_code() == code || self.subdivision_code() == code
    }

    /// 生效的包装描述: 外包装 → 单一包装 → 缺省 "4G"
    pub fn packaging_code(&self) -> &str {
        self.outer_packaging
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.single_packaging.as_deref())
            .unwrap_or(DEFAULT_PACKAGING_CODE)
    }

    /// 是否为单一包装（抑制定向箭头规则）
    pub fn is_single_packaging(&self) -> bool {
        self.single_packaging.is_some()
    }

    /// 包装说明首令牌（如 "P001 LP01" → "P001"; 缺失回落 "P001"）
    pub fn packaging_instruction(&self) -> &str {
        match self.packaging_instructions.as_deref() {
            Some(s) => s.split_whitespace().next().unwrap_or(""),
            None => DEFAULT_PACKAGING_INSTRUCTION,
        }
    }

    /// 是否属于锂电池 UN 编号集合
    pub fn is_battery_un(&self) -> bool {
        BATTERY_UNS.contains(&self.un_code())
    }
}
