// ==========================================
// 危险品包装标记系统 - 限量评估器
// ==========================================
// 职责: 限量阈值单位换算 + 单件净重与阈值比较
// 红线: 无状态、无副作用; 数值/单位错误显式上抛
// ==========================================

use crate::domain::package::Package;
use crate::error::DomainError;

// ==========================================
// LimitedQuantityEvaluator - 纯函数工具类
// ==========================================
pub struct LimitedQuantityEvaluator;

impl LimitedQuantityEvaluator {
    /// 将申报限量换算为单件质量阈值（kg）
    ///
    /// # 规则
    /// - 质量单位直接归一: kg 原值, g 除以 1000
    /// - 体积单位按密度换算: 质量 = 体积 × 密度 (L 原值, mL 除以 1000)
    /// - 体积换算要求 density > 0
    /// - 未识别单位、负值 → DomainError（不得静默兜底）
    pub fn threshold_kg(value: f64, unit: &str, density: f64) -> Result<f64, DomainError> {
        if value < 0.0 {
            return Err(DomainError::NegativeThreshold(value));
        }
        match unit.trim().to_ascii_lowercase().as_str() {
            "kg" => Ok(value),
            "g" => Ok(value / 1000.0),
            "l" => Self::volume_to_kg(value, unit, density),
            "ml" => Self::volume_to_kg(value / 1000.0, unit, density),
            _ => Err(DomainError::UnknownUnit(unit.to_string())),
        }
    }

    fn volume_to_kg(litres: f64, unit: &str, density: f64) -> Result<f64, DomainError> {
        if density <= 0.0 || !density.is_finite() {
            return Err(DomainError::InvalidDensity {
                unit: unit.to_string(),
                density,
            });
        }
        Ok(litres * density)
    }

    /// 包装件的限量阈值（kg）
    pub fn threshold_for(pkg: &Package) -> Result<f64, DomainError> {
        Self::threshold_kg(
            pkg.limited_quantity.value,
            &pkg.limited_quantity.unit,
            pkg.density,
        )
    }

    /// 单件净重 = 净重 / 件数
    ///
    /// quantity <= 0 与负净重属非法输入, 必须上抛
    pub fn per_unit_mass(net_mass: f64, quantity: f64) -> Result<f64, DomainError> {
        if quantity <= 0.0 {
            return Err(DomainError::NonPositiveQuantity(quantity));
        }
        if net_mass < 0.0 {
            return Err(DomainError::NegativeNetMass(net_mass));
        }
        Ok(net_mass / quantity)
    }

    /// 单件净重严格低于阈值（< 口径）
    ///
    /// 调用方: 单件评估（MarkingApi::view_package）。
    /// 集合打包一律用 [`Self::is_at_or_below_limit`]; 两种口径按原始
    /// 调用点各自保留, 不做统一。
    pub fn is_below_limit(
        net_mass: f64,
        quantity: f64,
        threshold_kg: f64,
    ) -> Result<bool, DomainError> {
        Ok(Self::per_unit_mass(net_mass, quantity)? < threshold_kg)
    }

    /// 单件净重不高于阈值（<= 口径）
    ///
    /// 调用方: 集合打包的逐件限量判定与"全部低于限量"相容性豁免门
    pub fn is_at_or_below_limit(
        net_mass: f64,
        quantity: f64,
        threshold_kg: f64,
    ) -> Result<bool, DomainError> {
        Ok(Self::per_unit_mass(net_mass, quantity)? <= threshold_kg)
    }
}
