// ==========================================
// 危险品包装标记系统 - API层错误类型
// ==========================================
// 职责: 将引擎层技术错误转换为用户友好的业务错误
// 红线: 所有错误信息必须包含显式原因
// ==========================================

use thiserror::Error;

use crate::config::ConfigError;
use crate::error::{CompatibilityError, DomainError, OverpackError};

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    /// 数值/单位输入非法（件数、净重、限量单位、密度）
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 选中包装件两两相容性检查失败
    #[error("不相容的包装件组合: un_a={un_a}, un_b={un_b}")]
    IncompatibleSelection { un_a: String, un_b: String },

    /// 集合打包选择不足（至少两件, 或单件且申报数量 >= 2）
    #[error("集合打包选择不足: 已选 {selected} 件")]
    InsufficientSelection { selected: usize },

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置加载失败")]
    Config(#[from] ConfigError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从引擎层错误转换
// ==========================================
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<CompatibilityError> for ApiError {
    fn from(err: CompatibilityError) -> Self {
        match err {
            CompatibilityError::Domain(e) => e.into(),
            CompatibilityError::Incompatible(v) => ApiError::IncompatibleSelection {
                un_a: v.un_a,
                un_b: v.un_b,
            },
        }
    }
}

impl From<OverpackError> for ApiError {
    fn from(err: OverpackError) -> Self {
        match err {
            OverpackError::InsufficientSelection { selected, .. } => {
                ApiError::InsufficientSelection { selected }
            }
            OverpackError::Domain(e) => e.into(),
            OverpackError::Incompatible(v) => ApiError::IncompatibleSelection {
                un_a: v.un_a,
                un_b: v.un_b,
            },
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
