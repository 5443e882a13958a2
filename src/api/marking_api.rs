// ==========================================
// 危险品包装标记系统 - 标记业务接口
// ==========================================
// 职责: 宿主唯一入口, 组合分类/限量/规则引擎为视图输出
// 红线: 接口纯同步; 相容性矩阵由本门面持有, 引擎按引用借用
// ==========================================

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::api::error::ApiResult;
use crate::config;
use crate::domain::marking::{assets, AssetKey, MarkingPlan};
use crate::domain::package::Package;
use crate::domain::types::{ShapeCategory, TransportMode};
use crate::engine::compatibility::{CompatibilityChecker, CompatibilityMatrix};
use crate::engine::limited_quantity::LimitedQuantityEvaluator;
use crate::engine::marking_core::MarkingRuleEngine;
use crate::engine::overpack::OverpackAggregator;
use crate::engine::packaging_classifier::PackagingClassifier;

// ==========================================
// 视图输出 (宿主渲染层的数据契约)
// ==========================================

/// 单件评估视图
#[derive(Debug, Clone, Serialize)]
pub struct PackageView {
    /// 规范形状类别
    pub shape: ShapeCategory,
    /// 3D 模型资产键
    pub model: AssetKey,
    /// 单件净重是否严格低于限量阈值
    pub is_below_limit: bool,
    /// 标记方案
    pub plan: MarkingPlan,
}

/// 集合打包视图
#[derive(Debug, Clone, Serialize)]
pub struct OverpackView {
    /// 集合外包装模型资产键（固定）
    pub model: AssetKey,
    /// 聚合标记方案
    pub plan: MarkingPlan,
}

// ==========================================
// MarkingApi - 标记业务门面
// ==========================================
pub struct MarkingApi {
    matrix: CompatibilityMatrix,
}

impl MarkingApi {
    pub fn new(matrix: CompatibilityMatrix) -> Self {
        Self { matrix }
    }

    /// 从 JSON 配置文件构造（incompatibilitytable.json 格式）
    pub fn from_matrix_file(path: impl AsRef<Path>) -> ApiResult<Self> {
        Ok(Self::new(config::load_compatibility_matrix(path)?))
    }

    /// 评估单个包装件: 形状分类 + 限量判定(< 口径) + 标记方案
    #[tracing::instrument(skip(self, pkg), fields(un = pkg.un_code(), mode = %mode))]
    pub fn view_package(&self, pkg: &Package, mode: TransportMode) -> ApiResult<PackageView> {
        let shape = PackagingClassifier::classify(pkg.packaging_code());
        let threshold = LimitedQuantityEvaluator::threshold_for(pkg)?;
        let is_below_limit =
            LimitedQuantityEvaluator::is_below_limit(pkg.net_mass, pkg.quantity, threshold)?;
        let plan = MarkingRuleEngine::evaluate(pkg, mode, is_below_limit)?;

        info!(shape = %shape, is_below_limit, "单件评估完成");
        Ok(PackageView {
            model: shape.model_asset(),
            shape,
            is_below_limit,
            plan,
        })
    }

    /// 检查选中包装件集合的两两相容性（不产出标记方案）
    #[tracing::instrument(skip(self, packages), fields(selected = packages.len()))]
    pub fn check_compatibility(&self, packages: &[Package]) -> ApiResult<()> {
        CompatibilityChecker::check_all(packages, &self.matrix)?;
        Ok(())
    }

    /// 聚合选中包装件集合为集合打包视图
    #[tracing::instrument(skip(self, packages), fields(selected = packages.len(), mode = %mode))]
    pub fn view_overpack(
        &self,
        packages: &[Package],
        mode: TransportMode,
    ) -> ApiResult<OverpackView> {
        let plan = OverpackAggregator::aggregate(packages, mode, &self.matrix)?;

        info!(selected = packages.len(), "集合打包评估完成");
        Ok(OverpackView {
            model: AssetKey::from(assets::OVERPACK_MODEL),
            plan,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::domain::package::LimitedQuantity;
    use crate::domain::marking::slots;

    fn api() -> MarkingApi {
        MarkingApi::new(CompatibilityMatrix::new())
    }

    fn test_package(net_mass: f64) -> Package {
        Package {
            un: Some("1263".to_string()),
            hazard_class: Some("3".to_string()),
            subdivision: None,
            shipping_name: None,
            net_mass,
            quantity: 1.0,
            gross_mass: None,
            density: 1.0,
            outer_packaging: Some("1A1".to_string()),
            single_packaging: None,
            packaging_instructions: Some("P001".to_string()),
            packaging_format: None,
            limited_quantity: LimitedQuantity {
                value: 5.0,
                unit: "kg".to_string(),
            },
            technical_name_required: false,
        }
    }

    #[test]
    fn test_view_package_combines_shape_and_plan() {
        let view = api().view_package(&test_package(40.0), TransportMode::Road).unwrap();
        assert_eq!(view.shape, ShapeCategory::Drum);
        assert_eq!(view.model.as_str(), "Models/Drum");
        assert!(!view.is_below_limit);
        assert_eq!(view.plan.text(slots::UN_NUMBER), Some("UN 1263"));
    }

    #[test]
    fn test_view_package_strict_comparison_at_threshold() {
        // 单件净重恰好等于阈值 → 单件评估口径为"不低于限量"
        let view = api().view_package(&test_package(5.0), TransportMode::Road).unwrap();
        assert!(!view.is_below_limit);
        assert!(view.plan.texture(slots::LIMITED_QUANTITY).is_none());

        let view = api().view_package(&test_package(4.0), TransportMode::Road).unwrap();
        assert!(view.is_below_limit);
        assert!(view.plan.texture(slots::LIMITED_QUANTITY).is_some());
    }

    #[test]
    fn test_view_package_invalid_quantity_is_api_error() {
        let mut pkg = test_package(40.0);
        pkg.quantity = 0.0;
        let err = api().view_package(&pkg, TransportMode::Road).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn test_view_overpack_uses_fixed_model() {
        let packages = vec![test_package(40.0), test_package(30.0)];
        let view = api().view_overpack(&packages, TransportMode::Road).unwrap();
        assert_eq!(view.model.as_str(), "Models/overpack");
        assert!(view.plan.texture("DG_class_3").is_some());
    }

    #[test]
    fn test_view_overpack_insufficient_selection() {
        let err = api()
            .view_overpack(&[test_package(40.0)], TransportMode::Road)
            .unwrap_err();
        assert!(matches!(err, ApiError::InsufficientSelection { selected: 1 }));
    }
}
