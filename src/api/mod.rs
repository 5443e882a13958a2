// ==========================================
// 危险品包装标记系统 - API 层
// ==========================================
// 职责: 提供业务接口, 供宿主渲染层调用
// ==========================================

pub mod error;
pub mod marking_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use marking_api::{MarkingApi, OverpackView, PackageView};
