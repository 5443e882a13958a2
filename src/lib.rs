// ==========================================
// 危险品包装标记系统 - 核心库
// ==========================================
// 系统定位: 标记规则引擎 (决策支持库, 渲染由宿主负责)
// 红线: 引擎纯同步、无 I/O、无共享可变状态
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 标记规则
pub mod engine;

// 配置层 - 相容性矩阵加载
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CompatFlag, ShapeCategory, TransportMode};

// 领域实体
pub use domain::{AssetKey, LimitedQuantity, MarkingPlan, Package};

// 引擎
pub use engine::{
    CompatibilityChecker, CompatibilityMatrix, LimitedQuantityEvaluator, MarkingRuleEngine,
    OverpackAggregator, PackagingClassifier,
};

// 错误
pub use error::{CompatibilityError, DomainError, IncompatibilityViolation, OverpackError};

// API
pub use api::{ApiError, ApiResult, MarkingApi, OverpackView, PackageView};
