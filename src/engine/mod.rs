// ==========================================
// 危险品包装标记系统 - 规则引擎层
// ==========================================
// 职责: 全部决策规则（分类、限量、相容性、单件标记、集合打包）
// 红线: 纯同步、无 I/O; 状态由调用方持有并传入
// ==========================================

pub mod compatibility;
pub mod limited_quantity;
pub mod marking_core;
pub mod marking_info;
pub mod overpack;
pub mod packaging_classifier;

// 重导出引擎入口
pub use compatibility::{CompatibilityChecker, CompatibilityMatrix};
pub use limited_quantity::LimitedQuantityEvaluator;
pub use marking_core::MarkingRuleEngine;
pub use marking_info::regulatory_note;
pub use overpack::OverpackAggregator;
pub use packaging_classifier::PackagingClassifier;
