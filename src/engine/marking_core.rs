// ==========================================
// 危险品包装标记系统 - 单件标记规则引擎
// ==========================================
// 职责: 单个包装件 → 标记方案 (槽位赋值序列)
// 红线: 规则按固定顺序折叠, 后写覆盖前写(有意分层, 非缺陷);
//       无状态、无副作用、除显式域错误外为全函数
// ==========================================

use tracing::debug;

use crate::domain::marking::{assets, slots, AssetKey, MarkingPlan, SINGLE_PACKAGE_SLOTS};
use crate::domain::package::Package;
use crate::domain::types::TransportMode;
use crate::engine::limited_quantity::LimitedQuantityEvaluator;
use crate::error::DomainError;

/// 规则求值上下文（一次评估内的只读快照）
pub(crate) struct RuleContext<'a> {
    pub pkg: &'a Package,
    pub mode: TransportMode,
    pub is_below_limit: bool,
    pub per_unit_mass: f64,
}

/// 单条标记规则: 读取上下文, 向方案追加/覆盖槽位赋值
type MarkingRule = fn(&RuleContext<'_>, &mut MarkingPlan);

// ==========================================
// MarkingRuleEngine - 单件规则引擎
// ==========================================
pub struct MarkingRuleEngine;

impl MarkingRuleEngine {
    /// 规则链（顺序即语义, 不可重排）
    const RULES: &'static [MarkingRule] = &[
        rule_hazard_identity,
        rule_transport_mode,
        rule_orientation_arrows,
        rule_infectious_orientation,
        rule_battery,
        rule_excepted_quantity,
        rule_radioactive_address,
        rule_technical_name,
    ];

    /// 评估单个包装件的标记方案
    ///
    /// # 规则
    /// 1. 基线: 全部标记槽位先置为隐藏（未赋值槽位渲染空白）
    /// 2. 其后按 RULES 固定顺序折叠各规则
    ///
    /// # 错误
    /// - quantity <= 0 或净重为负 → DomainError
    pub fn evaluate(
        pkg: &Package,
        mode: TransportMode,
        is_below_limit: bool,
    ) -> Result<MarkingPlan, DomainError> {
        let per_unit_mass = LimitedQuantityEvaluator::per_unit_mass(pkg.net_mass, pkg.quantity)?;
        let ctx = RuleContext {
            pkg,
            mode,
            is_below_limit,
            per_unit_mass,
        };

        let mut plan = MarkingPlan::with_hidden_baseline(SINGLE_PACKAGE_SLOTS.iter().copied());
        for rule in Self::RULES {
            rule(&ctx, &mut plan);
        }

        debug!(
            un = pkg.un_code(),
            mode = %mode,
            is_below_limit,
            textures = plan.textures().len(),
            texts = plan.texts().len(),
            "单件标记方案完成"
        );
        Ok(plan)
    }
}

// ==========================================
// 规则实现
// ==========================================

/// 规则 2/3: 限量门与危险识别标记
///
/// - 低于限量: 仅限量标记, 并隐藏 UN 认证标记（缩减标记集）
/// - 不低于限量: 类别/次危险性标签 + UN 编号文本 + PSN 占位
fn rule_hazard_identity(ctx: &RuleContext<'_>, plan: &mut MarkingPlan) {
    if ctx.is_below_limit {
        plan.set_texture(slots::LIMITED_QUANTITY, assets::LIMITED_QUANTITY);
        plan.hide(slots::UN_CERTIFICATION);
    } else {
        plan.set_texture(slots::DG_CLASS, AssetKey::hazard_label(ctx.pkg.class_code()));
        plan.set_texture(
            slots::DG_SUBRISK1,
            AssetKey::hazard_label(ctx.pkg.subdivision_code()),
        );
        plan.set_text(slots::UN_NUMBER, ctx.pkg.formatted_un());
        plan.set_text(slots::PSN, "PROPER SHIPPING NAME");
    }
}

/// 规则 4: 运输方式追加层
///
/// road/rail 无追加规则（预留）; sea 补净量文本; air 见 [`air_layer`]
fn rule_transport_mode(ctx: &RuleContext<'_>, plan: &mut MarkingPlan) {
    match ctx.mode {
        TransportMode::Road | TransportMode::Rail => {}
        TransportMode::Sea => {
            if ctx.per_unit_mass > 50.0 {
                plan.set_text(
                    slots::NET_QUANTITY,
                    format!("NET QUANTITY: {} kg", ctx.pkg.net_mass),
                );
            }
        }
        TransportMode::Air => air_layer(ctx, plan),
    }
}

/// 航空追加层
///
/// 整体替换纹理集（已写入的限量标记随之失效, 槽位回到隐藏）,
/// 重申类别/次危险性标签, 并补齐航空运输要求的文本槽位。
/// 注意: 航空限量覆盖比较的是申报原值, 不做单位换算（按观察行为保留）。
fn air_layer(ctx: &RuleContext<'_>, plan: &mut MarkingPlan) {
    plan.clear_textures();
    plan.set_texture(slots::DG_CLASS, AssetKey::hazard_label(ctx.pkg.class_code()));
    plan.set_texture(
        slots::DG_SUBRISK1,
        AssetKey::hazard_label(ctx.pkg.subdivision_code()),
    );
    plan.set_texture(slots::AIRCRAFT_ONLY, assets::CARGO_AIRCRAFT_ONLY);

    plan.set_text(
        slots::NET_QUANTITY,
        format!("NET QUANTITY: {}kg", ctx.pkg.net_mass),
    );
    plan.set_text(slots::SHIPPER_ADDRESS, "SHIPPER NAME AND ADDRESS");
    plan.set_text(slots::CONSIGNEE_ADDRESS, "CONSIGNEE NAME AND ADDRESS");
    plan.set_text(slots::UN_NUMBER, ctx.pkg.formatted_un());
    plan.set_text(slots::PSN, "PROPER SHIPPING NAME");

    // 磁性物质
    if ctx.pkg.un_code() == "2807" {
        plan.set_texture(slots::MAGNETIZED_MATERIAL, assets::MAGNETIZED_MATERIAL);
    }
    // 远离热源
    if ctx.pkg.has_class_or_subdivision("4.1") || ctx.pkg.has_class_or_subdivision("5.2") {
        plan.set_texture(slots::AWAY_FROM_HEAT, assets::AWAY_FROM_HEAT);
    }
    // 放射性例外包装
    if ctx.pkg.has_class_or_subdivision("7") {
        plan.set_texture(slots::RADIOACTIVE_EXCEPTED, assets::RADIOACTIVE_EXCEPTED);
        plan.set_text(slots::UN_NUMBER_RADIOACTIVE, ctx.pkg.formatted_un());
    }
    // 航空限量变体（中心带 "Y"）
    if ctx.per_unit_mass < ctx.pkg.limited_quantity.value {
        plan.set_texture(slots::LIMITED_QUANTITY, assets::LIMITED_QUANTITY_AIR);
    }
}

/// 规则 5: 液体定向箭头
///
/// 包装说明首令牌为 P001、非单一包装、单件净重 > 0.12 kg
/// → 两个对侧槽位各贴一枚定向箭头
fn rule_orientation_arrows(ctx: &RuleContext<'_>, plan: &mut MarkingPlan) {
    if ctx.pkg.packaging_instruction() == "P001"
        && !ctx.pkg.is_single_packaging()
        && ctx.per_unit_mass > 0.12
    {
        plan.set_texture(slots::ORIENTATION_ARROW_SIDE, assets::ORIENTATION_ARROW);
        plan.set_texture(slots::ORIENTATION_ARROW_FRONT, assets::ORIENTATION_ARROW);
    }
}

/// 规则 6: 感染性物质定向箭头（6.2 类, 与规则 5 相互独立, 可同时触发）
fn rule_infectious_orientation(ctx: &RuleContext<'_>, plan: &mut MarkingPlan) {
    if ctx.pkg.has_class_or_subdivision("6.2") && ctx.per_unit_mass > 0.05 {
        plan.set_texture(slots::ORIENTATION_ARROW_SIDE, assets::ORIENTATION_ARROW);
        plan.set_texture(slots::ORIENTATION_ARROW_FRONT, assets::ORIENTATION_ARROW);
    }
}

/// 规则 7: 锂电池
///
/// 电池 UN 集合命中时覆盖类别标签为 9A, 加电池标记与专用 UN 文本槽
fn rule_battery(ctx: &RuleContext<'_>, plan: &mut MarkingPlan) {
    if ctx.pkg.is_battery_un() {
        plan.set_texture(
            slots::DG_CLASS,
            AssetKey::hazard_label(assets::BATTERY_CLASS_CODE),
        );
        plan.set_texture(slots::BATTERY_MARK, assets::BATTERY_MARK);
        plan.set_text(slots::UN_NUMBER_BATTERY, ctx.pkg.formatted_un());
    }
}

/// 规则 8: 例外数量包装
fn rule_excepted_quantity(ctx: &RuleContext<'_>, plan: &mut MarkingPlan) {
    if ctx.pkg.packaging_format.as_deref() == Some("Excepted Quantity") {
        plan.set_texture(slots::EXCEPTED_QUANTITY, assets::EXCEPTED_QUANTITY);
        plan.set_text(slots::EXCEPTED_CLASS, ctx.pkg.class_code());
    }
}

/// 规则 9: 放射性(7 类)地址与净量
///
/// 与运输方式无关: 收发货人地址恒补;
/// 单件净重 > 50 kg 时追加/覆盖净量文本
fn rule_radioactive_address(ctx: &RuleContext<'_>, plan: &mut MarkingPlan) {
    if ctx.pkg.has_class_or_subdivision("7") {
        plan.set_text(slots::SHIPPER_ADDRESS, "SHIPPER NAME AND ADDRESS");
        plan.set_text(slots::CONSIGNEE_ADDRESS, "CONSIGNEE NAME AND ADDRESS");
        if ctx.per_unit_mass > 50.0 {
            plan.set_text(
                slots::NET_QUANTITY,
                format!("NET QUANTITY: {}kg", ctx.pkg.net_mass),
            );
        }
    }
}

/// 规则 10: 技术名称占位（N.O.S. 条目, 低于限量时豁免）
fn rule_technical_name(ctx: &RuleContext<'_>, plan: &mut MarkingPlan) {
    if ctx.pkg.technical_name_required && !ctx.is_below_limit {
        plan.set_text(slots::TECHNICAL_NAME, "(TECHNICAL NAME)");
    }
}
