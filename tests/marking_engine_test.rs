// ==========================================
// 标记规则引擎集成端到端测试
// ==========================================
// 目标: 验证 JSON 输入 → MarkingApi → 视图输出的完整链路
// ==========================================

use std::io::Write;

use dg_marking::api::{ApiError, MarkingApi};
use dg_marking::domain::{slots, LimitedQuantity, Package};
use dg_marking::engine::CompatibilityMatrix;
use dg_marking::{ShapeCategory, TransportMode};

fn create_test_package(un: &str, class: &str, net_mass: f64) -> Package {
    Package {
        un: Some(un.to_string()),
        hazard_class: Some(class.to_string()),
        subdivision: None,
        shipping_name: Some("FLAMMABLE LIQUID, N.O.S.".to_string()),
        net_mass,
        quantity: 1.0,
        gross_mass: Some(net_mass + 2.0),
        density: 1.0,
        outer_packaging: Some("Steel drum (1A1, 1A2)".to_string()),
        single_packaging: None,
        packaging_instructions: Some("P001 P002".to_string()),
        packaging_format: None,
        limited_quantity: LimitedQuantity {
            value: 5.0,
            unit: "L".to_string(),
        },
        technical_name_required: false,
    }
}

fn create_test_api() -> MarkingApi {
    MarkingApi::new(CompatibilityMatrix::new())
}

// ==========================================
// 测试 1: JSON 输入记录反序列化（宿主表格字段名）
// ==========================================

#[test]
fn test_package_deserializes_from_host_json() {
    let json = r#"{
        "un": "1263",
        "class": "3",
        "division": "6.1",
        "netMass": 40.0,
        "quantity": 4.0,
        "density": 0.8,
        "outerPackaging": "4G",
        "packagingInstructions": "P001",
        "limitedQuantity": { "value": 5.0, "unit": "L" },
        "technicalNameRequired": true
    }"#;
    let pkg: Package = serde_json::from_str(json).unwrap();

    assert_eq!(pkg.un_code(), "1263");
    assert_eq!(pkg.class_code(), "3");
    assert_eq!(pkg.subdivision_code(), "6.1");
    assert_eq!(pkg.quantity, 4.0);
    assert_eq!(pkg.density, 0.8);
    assert!(pkg.technical_name_required);
    // density 缺省为 1.0
    let pkg: Package = serde_json::from_str(
        r#"{ "netMass": 1.0, "quantity": 1.0, "limitedQuantity": { "value": 1.0, "unit": "kg" } }"#,
    )
    .unwrap();
    assert_eq!(pkg.density, 1.0);
    assert_eq!(pkg.un_code(), "0010");
}

// ==========================================
// 测试 2: 单件评估端到端（场景 A/B）
// ==========================================

#[test]
fn test_single_package_above_limit_full_marking() {
    let api = create_test_api();
    let pkg = create_test_package("1263", "3", 40.0);
    let view = api.view_package(&pkg, TransportMode::Road).unwrap();

    // 括号代码列表取首元素 → 1A1 → 钢桶
    assert_eq!(view.shape, ShapeCategory::Drum);
    assert_eq!(view.model.as_str(), "Models/Drum");
    assert!(!view.is_below_limit);
    assert_eq!(
        view.plan.texture(slots::DG_CLASS).unwrap().as_str(),
        "ADRbook/3"
    );
    assert_eq!(view.plan.text(slots::UN_NUMBER), Some("UN 1263"));
    assert_eq!(view.plan.text(slots::PSN), Some("PROPER SHIPPING NAME"));
    assert!(view.plan.texture(slots::LIMITED_QUANTITY).is_none());
    // 液体定向箭头: P001 首令牌 + 非单一包装 + 40 kg > 0.12 kg
    assert!(view.plan.texture(slots::ORIENTATION_ARROW_SIDE).is_some());
}

#[test]
fn test_single_package_below_limit_reduced_marking() {
    let api = create_test_api();
    // 5 L × 密度 1.0 = 5 kg 阈值, 单件 2 kg
    let pkg = create_test_package("1263", "3", 2.0);
    let view = api.view_package(&pkg, TransportMode::Road).unwrap();

    assert!(view.is_below_limit);
    assert_eq!(
        view.plan.texture(slots::LIMITED_QUANTITY).unwrap().as_str(),
        "Labels/LQ"
    );
    assert!(view.plan.texture(slots::DG_CLASS).is_none());
    assert!(view.plan.text(slots::UN_NUMBER).is_none());
    assert!(view.plan.is_hidden(slots::UN_CERTIFICATION));
}

// ==========================================
// 测试 3: 航空模式端到端（场景 C）
// ==========================================

#[test]
fn test_air_mode_battery_package() {
    let api = create_test_api();
    let mut pkg = create_test_package("3090", "9", 40.0);
    pkg.limited_quantity = LimitedQuantity {
        value: 2.0,
        unit: "kg".to_string(),
    };
    let view = api.view_package(&pkg, TransportMode::Air).unwrap();

    // 电池覆盖: 类别标签 9A + 电池标记 + 专用 UN 文本
    assert_eq!(
        view.plan.texture(slots::DG_CLASS).unwrap().as_str(),
        "ADRbook/9A"
    );
    assert_eq!(
        view.plan.texture(slots::BATTERY_MARK).unwrap().as_str(),
        "Labels/battery"
    );
    assert_eq!(view.plan.text(slots::UN_NUMBER_BATTERY), Some("UN 3090"));
    // 航空层文本
    assert_eq!(
        view.plan.texture(slots::AIRCRAFT_ONLY).unwrap().as_str(),
        "Labels/Air"
    );
    assert_eq!(view.plan.text(slots::NET_QUANTITY), Some("NET QUANTITY: 40kg"));
}

// ==========================================
// 测试 4: 相容性检查端到端（场景 D）
// ==========================================

#[test]
fn test_compatibility_matrix_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "3": {{ "5.1": "false" }}, "8": {{ "4.2": "false" }} }}"#
    )
    .unwrap();
    let api = MarkingApi::from_matrix_file(file.path()).unwrap();

    let packages = vec![
        create_test_package("1263", "3", 40.0),
        create_test_package("1479", "5.1", 40.0),
    ];
    let err = api.check_compatibility(&packages).unwrap_err();
    match err {
        ApiError::IncompatibleSelection { un_a, un_b } => {
            assert_eq!(un_a, "1263");
            assert_eq!(un_b, "1479");
        }
        other => panic!("期望 IncompatibleSelection, 实际 {:?}", other),
    }

    // UN 相同的两件即使类别不相容也通过
    let packages = vec![
        create_test_package("1234", "3", 40.0),
        create_test_package("1234", "5.1", 40.0),
    ];
    assert!(api.check_compatibility(&packages).is_ok());

    // 全部低于限量 → 豁免
    let packages = vec![
        create_test_package("1263", "3", 2.0),
        create_test_package("1479", "5.1", 2.0),
    ];
    assert!(api.check_compatibility(&packages).is_ok());
}

// ==========================================
// 测试 5: 集合打包端到端（场景 E）
// ==========================================

#[test]
fn test_overpack_aggregation_flow() {
    let api = create_test_api();
    let packages = vec![
        create_test_package("1263", "3", 40.0),
        create_test_package("1760", "8", 40.0),
    ];
    let view = api.view_overpack(&packages, TransportMode::Road).unwrap();

    assert_eq!(view.model.as_str(), "Models/overpack");
    assert_eq!(view.plan.texture("DG_class_3").unwrap().as_str(), "ADRbook/3");
    assert_eq!(view.plan.texture("DG_class_8").unwrap().as_str(), "ADRbook/8");
    assert_eq!(view.plan.text(slots::UN_NUMBER), Some("UN 1263, UN 1760"));
    assert_eq!(view.plan.text(slots::PSN), Some("ALL PROPER SHIPPING NAMES"));
}

#[test]
fn test_overpack_rejects_single_unit_selection() {
    let api = create_test_api();
    let err = api
        .view_overpack(
            &[create_test_package("1263", "3", 40.0)],
            TransportMode::Road,
        )
        .unwrap_err();
    assert!(matches!(err, ApiError::InsufficientSelection { selected: 1 }));
}

#[test]
fn test_overpack_blocked_by_incompatibility() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "3": {{ "8": "false" }} }}"#).unwrap();
    let api = MarkingApi::from_matrix_file(file.path()).unwrap();

    let packages = vec![
        create_test_package("1263", "3", 40.0),
        create_test_package("1760", "8", 40.0),
    ];
    let err = api.view_overpack(&packages, TransportMode::Road).unwrap_err();
    assert!(matches!(err, ApiError::IncompatibleSelection { .. }));
}

// ==========================================
// 测试 6: 视图输出可序列化（宿主契约）
// ==========================================

#[test]
fn test_views_serialize_to_json() {
    let api = create_test_api();
    let pkg = create_test_package("1263", "3", 40.0);
    let view = api.view_package(&pkg, TransportMode::Road).unwrap();
    let json = serde_json::to_string(&view).unwrap();
    assert!(json.contains("\"Models/Drum\""));
    assert!(json.contains("\"UN 1263\""));

    let packages = vec![pkg, create_test_package("1760", "8", 40.0)];
    let view = api.view_overpack(&packages, TransportMode::Road).unwrap();
    let json = serde_json::to_string(&view).unwrap();
    assert!(json.contains("\"Models/overpack\""));
}
