// ==========================================
// 危险品包装标记系统 - 领域模型层
// ==========================================
// 职责: 定义输入记录、输出契约与领域类型
// 红线: 不含规则逻辑, 不含 I/O
// ==========================================

pub mod marking;
pub mod package;
pub mod types;

// 重导出核心类型
pub use marking::{assets, slots, AssetKey, MarkingPlan, OVERPACK_SLOTS, SINGLE_PACKAGE_SLOTS};
pub use package::{
    LimitedQuantity, Package, BATTERY_UNS, DEFAULT_PACKAGING_CODE,
    DEFAULT_PACKAGING_INSTRUCTION, DEFAULT_UN, NOT_APPLICABLE_CODE,
};
pub use types::{CompatFlag, ShapeCategory, TransportMode};
