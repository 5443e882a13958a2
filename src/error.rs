// ==========================================
// 危险品包装标记系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 所有错误必须带显式原因, 引擎内禁止 panic
// ==========================================

use thiserror::Error;

// ==========================================
// DomainError - 数值/单位域错误
// ==========================================
// 分类与资产键派生永不失败（安全兜底）；
// 数值与单位错误必须显式上抛，宿主负责提示用户。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 计算单件净重时除数非法
    #[error("包装件数必须大于 0: quantity={0}")]
    NonPositiveQuantity(f64),

    #[error("净重不能为负: net_mass={0}")]
    NegativeNetMass(f64),

    /// 限量阈值换算失败
    #[error("无法识别的限量单位: {0}")]
    UnknownUnit(String),

    /// 体积单位换算为质量时需要正密度
    #[error("密度非法: unit={unit}, density={density}")]
    InvalidDensity { unit: String, density: f64 },

    #[error("限量阈值不能为负: value={0}")]
    NegativeThreshold(f64),
}

// ==========================================
// IncompatibilityViolation - 相容性违规
// ==========================================
// 结构化结果而非进程级异常: 携带两个 UN 编号
// 与首个失败的检查口径, 供宿主向用户解释。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("不相容组合: un_a={un_a}, un_b={un_b}, 检查口径={pairing}")]
pub struct IncompatibilityViolation {
    pub un_a: String,
    pub un_b: String,
    pub pairing: CheckedPairing,
}

/// 相容性检查口径（四种排列, 按原始检查顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckedPairing {
    ClassClass,
    ClassSubdivision,
    SubdivisionSubdivision,
    SubdivisionClass,
}

impl std::fmt::Display for CheckedPairing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckedPairing::ClassClass => write!(f, "CLASS_CLASS"),
            CheckedPairing::ClassSubdivision => write!(f, "CLASS_SUBDIVISION"),
            CheckedPairing::SubdivisionSubdivision => write!(f, "SUBDIVISION_SUBDIVISION"),
            CheckedPairing::SubdivisionClass => write!(f, "SUBDIVISION_CLASS"),
        }
    }
}

// ==========================================
// CompatibilityError - 相容性检查错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompatibilityError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Incompatible(#[from] IncompatibilityViolation),
}

// ==========================================
// OverpackError - 集合打包错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverpackError {
    /// 选中不足两件且首件申报数量 < 2
    #[error("集合打包选择不足: selected={selected}, first_quantity={first_quantity}")]
    InsufficientSelection { selected: usize, first_quantity: f64 },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Incompatible(#[from] IncompatibilityViolation),
}

impl From<CompatibilityError> for OverpackError {
    fn from(err: CompatibilityError) -> Self {
        match err {
            CompatibilityError::Domain(e) => OverpackError::Domain(e),
            CompatibilityError::Incompatible(v) => OverpackError::Incompatible(v),
        }
    }
}
