// ==========================================
// 危险品包装标记系统 - 集合打包聚合器
// ==========================================
// 职责: 多个包装件 → 集合外包装的聚合标记方案
// 红线: 入口先过选择门与相容性门; 逐件累积使用 <= 口径;
//       "全部低于限量"标志随迭代动态更新(有意保留的运行时语义)
// ==========================================

use tracing::debug;

use crate::domain::marking::{assets, slots, AssetKey, MarkingPlan, OVERPACK_SLOTS};
use crate::domain::package::Package;
use crate::domain::types::TransportMode;
use crate::engine::compatibility::{CompatibilityChecker, CompatibilityMatrix};
use crate::engine::limited_quantity::LimitedQuantityEvaluator;
use crate::error::OverpackError;

// ==========================================
// OverpackAggregator - 集合打包引擎
// ==========================================
pub struct OverpackAggregator;

impl OverpackAggregator {
    /// 聚合选中包装件集合的标记方案
    ///
    /// # 规则
    /// 1. 选择门: 空选择, 或单件且 quantity < 2 → InsufficientSelection
    /// 2. 相容性门: 委托 CompatibilityChecker(全部低于限量时豁免)
    /// 3. 基线: 集合槽位全部隐藏
    /// 4. 逐件累积(<= 口径):
    ///    - 低于限量 → 共享限量标记槽位
    ///    - 否则 → 类别限定槽位贴对应标签(电池 UN 与代码 "0" 跳过类别,
    ///      "0" 跳过次危险性), 置"非全部低于限量", PSN 复数占位
    ///    - 定向箭头: 包装说明 P001 且单件净重 > 0.12 kg(仅侧面槽位)
    ///    - 电池 UN → 共享 9A 槽位 + 电池标记 + 电池 UN 累积
    ///    - 技术名称: 需要且当前"全部低于限量"标志已失效时追加
    /// 5. UN 编号去重(保首见顺序)后拼接; 仅当存在不低于限量的包装件
    ///    时写入; 电池 UN 文本不受该门限制
    ///
    /// transport mode 仅为接口对称而接受, 集合打包暂无运输方式层。
    pub fn aggregate(
        packages: &[Package],
        mode: TransportMode,
        matrix: &CompatibilityMatrix,
    ) -> Result<MarkingPlan, OverpackError> {
        Self::check_selection(packages)?;
        CompatibilityChecker::check_all(packages, matrix)?;

        let mut plan = MarkingPlan::with_hidden_baseline(OVERPACK_SLOTS.iter().copied());
        let mut all_below = true;
        let mut un_numbers: Vec<String> = Vec::new();
        let mut battery_un_numbers: Vec<String> = Vec::new();

        for pkg in packages {
            let threshold = LimitedQuantityEvaluator::threshold_for(pkg)?;
            let per_unit = LimitedQuantityEvaluator::per_unit_mass(pkg.net_mass, pkg.quantity)?;
            let below = LimitedQuantityEvaluator::is_at_or_below_limit(
                pkg.net_mass,
                pkg.quantity,
                threshold,
            )?;

            if below {
                plan.set_texture(slots::LIMITED_QUANTITY, assets::LIMITED_QUANTITY);
            } else {
                all_below = false;
                let class_code = pkg.class_code();
                if !pkg.is_battery_un() && class_code != "0" {
                    plan.set_texture(
                        &slots::dg_class_qualified(class_code),
                        AssetKey::hazard_label(class_code),
                    );
                }
                let sub_code = pkg.subdivision_code();
                if sub_code != "0" {
                    plan.set_texture(
                        &slots::dg_class_qualified(sub_code),
                        AssetKey::hazard_label(sub_code),
                    );
                }
                plan.set_text(slots::PSN, "ALL PROPER SHIPPING NAMES");
            }

            // 液体定向箭头(集合外包装仅侧面槽位)
            if pkg.packaging_instruction() == "P001" && per_unit > 0.12 {
                plan.set_texture(slots::ORIENTATION_ARROW_SIDE, assets::ORIENTATION_ARROW);
            }

            // 锂电池
            if pkg.is_battery_un() {
                plan.set_texture(
                    &slots::dg_class_qualified(assets::BATTERY_CLASS_CODE),
                    AssetKey::hazard_label(assets::BATTERY_CLASS_CODE),
                );
                plan.set_texture(slots::BATTERY_MARK, assets::BATTERY_MARK);
                battery_un_numbers.push(pkg.formatted_un());
            }

            // 技术名称: 对照迭代至此的运行时标志, 而非终值
            if pkg.technical_name_required && !all_below {
                plan.set_text(slots::PSN, "ALL PROPER SHIPPING NAMES");
                plan.set_text(
                    slots::TECHNICAL_NAME,
                    "with their technical names, if available",
                );
            }

            un_numbers.push(pkg.formatted_un());
        }

        if !all_below {
            plan.set_text(slots::UN_NUMBER, Self::dedup_join(&un_numbers));
        }
        if !battery_un_numbers.is_empty() {
            plan.set_text(slots::UN_NUMBER_BATTERY, Self::dedup_join(&battery_un_numbers));
        }

        debug!(
            selected = packages.len(),
            mode = %mode,
            all_below,
            textures = plan.textures().len(),
            "集合打包标记方案完成"
        );
        Ok(plan)
    }

    /// 选择门: 至少两件, 或单件但件数 quantity >= 2
    fn check_selection(packages: &[Package]) -> Result<(), OverpackError> {
        match packages {
            [] => Err(OverpackError::InsufficientSelection {
                selected: 0,
                first_quantity: 0.0,
            }),
            [only] if only.quantity < 2.0 => Err(OverpackError::InsufficientSelection {
                selected: 1,
                first_quantity: only.quantity,
            }),
            _ => Ok(()),
        }
    }

    /// 去重(保首见顺序)后以 ", " 拼接
    fn dedup_join(values: &[String]) -> String {
        let mut seen: Vec<&str> = Vec::with_capacity(values.len());
        for value in values {
            if !seen.contains(&value.as_str()) {
                seen.push(value);
            }
        }
        seen.join(", ")
    }
}
