// ==========================================
// 危险品包装标记系统 - 相容性检查
// ==========================================
// 职责: 危险类别两两相容性判定, 作为集合打包的准入门
// 红线: 矩阵未规定的组合按相容处理(fail-open, 按观察行为保留);
//       仅显式 "false" 才阻断集合打包
// ==========================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::package::Package;
use crate::domain::types::CompatFlag;
use crate::engine::limited_quantity::LimitedQuantityEvaluator;
use crate::error::{CheckedPairing, CompatibilityError, IncompatibilityViolation};

// ==========================================
// CompatibilityMatrix - 类别相容性矩阵
// ==========================================
// 宿主从静态配置(JSON)加载, 引擎只读。
// 外层键 → 内层键 → "true"/"false"; 缺失条目 = 未规定。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityMatrix {
    entries: HashMap<String, HashMap<String, CompatFlag>>,
}

impl CompatibilityMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文本解析（incompatibilitytable.json 格式）
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 写入一条有向条目（测试与程序化构造用）
    pub fn insert(&mut self, class_a: &str, class_b: &str, flag: CompatFlag) {
        self.entries
            .entry(class_a.to_string())
            .or_default()
            .insert(class_b.to_string(), flag);
    }

    /// 两个类别代码是否相容
    ///
    /// 矩阵无 (a, b) 条目 → true (fail-open); 有条目按存储值
    pub fn compatible(&self, class_a: &str, class_b: &str) -> bool {
        match self.entries.get(class_a).and_then(|row| row.get(class_b)) {
            Some(CompatFlag::Compatible) | None => true,
            Some(CompatFlag::Incompatible) => false,
        }
    }
}

// ==========================================
// CompatibilityChecker - 集合准入检查
// ==========================================
pub struct CompatibilityChecker;

impl CompatibilityChecker {
    /// 检查选中包装件集合的两两相容性
    ///
    /// # 规则
    /// 1. 全部包装件单件净重不高于限量阈值(<= 口径) → 豁免检查, 直接通过
    /// 2. 对每对 i<j: UN 编号相同则跳过该对
    /// 3. 按顺序检查四种口径: 类别/类别, 类别/次危险性,
    ///    次危险性/次危险性, 次危险性/类别
    /// 4. 首个显式不相容即失败(短路), 携带两件的 UN 编号与失败口径
    pub fn check_all(
        packages: &[Package],
        matrix: &CompatibilityMatrix,
    ) -> Result<(), CompatibilityError> {
        if Self::all_at_or_below_limit(packages)? {
            debug!("全部包装件低于限量阈值, 豁免相容性检查");
            return Ok(());
        }

        for i in 0..packages.len() {
            for j in (i + 1)..packages.len() {
                let a = &packages[i];
                let b = &packages[j];

                // 同一 UN 编号的两件永不判为不相容
                if a.un_code() == b.un_code() {
                    continue;
                }

                let orderings = [
                    (a.class_code(), b.class_code(), CheckedPairing::ClassClass),
                    (
                        a.class_code(),
                        b.subdivision_code(),
                        CheckedPairing::ClassSubdivision,
                    ),
                    (
                        a.subdivision_code(),
                        b.subdivision_code(),
                        CheckedPairing::SubdivisionSubdivision,
                    ),
                    (
                        a.subdivision_code(),
                        b.class_code(),
                        CheckedPairing::SubdivisionClass,
                    ),
                ];
                for (code_a, code_b, pairing) in orderings {
                    if !matrix.compatible(code_a, code_b) {
                        return Err(IncompatibilityViolation {
                            un_a: a.un_code().to_string(),
                            un_b: b.un_code().to_string(),
                            pairing,
                        }
                        .into());
                    }
                }
            }
        }
        Ok(())
    }

    /// 全部包装件是否低于限量（<= 口径, 见 LimitedQuantityEvaluator）
    fn all_at_or_below_limit(packages: &[Package]) -> Result<bool, CompatibilityError> {
        for pkg in packages {
            let threshold = LimitedQuantityEvaluator::threshold_for(pkg)?;
            if !LimitedQuantityEvaluator::is_at_or_below_limit(
                pkg.net_mass,
                pkg.quantity,
                threshold,
            )? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
