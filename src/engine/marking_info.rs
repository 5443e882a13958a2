// ==========================================
// 危险品包装标记系统 - 法规说明文本
// ==========================================
// 职责: 槽位 → 法规摆放/尺寸要求说明（宿主点击槽位时展示）
// 红线: 纯静态数据, 不做本地化, 文本原样来自法规摘录
// ==========================================

use crate::domain::marking::slots;

/// 槽位对应的法规说明文本
///
/// 类别限定槽位（DG_class_*）共享危险类别标签的说明;
/// 未收录的槽位返回 None, 宿主不展示说明。
pub fn regulatory_note(slot: &str) -> Option<&'static str> {
    if slot.starts_with("DG_class") {
        return Some(NOTE_HAZARD_LABEL);
    }
    match slot {
        slots::UN_NUMBER => Some(NOTE_UN_NUMBER),
        slots::NET_QUANTITY => Some(NOTE_NET_QUANTITY),
        slots::ORIENTATION_ARROW_FRONT | slots::ORIENTATION_ARROW_SIDE => {
            Some(NOTE_ORIENTATION_ARROW)
        }
        slots::DG_SUBRISK1 | slots::DG_SUBRISK2 | slots::DG_SUBRISK3 => Some(NOTE_HAZARD_LABEL),
        slots::AIRCRAFT_ONLY => Some(NOTE_AIRCRAFT_ONLY),
        slots::LIMITED_QUANTITY => Some(NOTE_LIMITED_QUANTITY),
        _ => None,
    }
}

const NOTE_UN_NUMBER: &str = "The UN number and the letters \"UN\" must be at least 12 mm high, except for \
packages of 30 litres capacity or less or of 30 kg maximum net mass and for \
cylinders of 60 litres water capacity or less when they must be at least 6 mm in \
height and except for packages of 5 litres capacity or less or 5 kg maximum net \
mass when they must be of an appropriate size.";

const NOTE_NET_QUANTITY: &str = "- The net quantity must be marked adjacent to the UN number and the Proper \
Shipping Name.\n- Required when transporting by air.";

const NOTE_ORIENTATION_ARROW: &str = "When package orientation \"This Way Up\" labels are required, at least two of these \
labels must be used. One label must be affixed to each of the two opposite sides of \
the package, with the arrows pointing in the upright position.";

const NOTE_HAZARD_LABEL: &str = "The label must be in the form of a square set at an angle of 45 degrees (diamond-\
shaped). The minimum dimensions must be 100 mm x 100 mm. There must be a \
line inside the edge forming the diamond which must be parallel and approximately 5 \
mm from the outside of that line to the edge of the label.";

const NOTE_AIRCRAFT_ONLY: &str = "When a \"Cargo Aircraft Only\" label is required, it must be affixed on the same \
surface of the package near the hazard label(s).\n- Required when transporting by air.";

const NOTE_LIMITED_QUANTITY: &str = "The mark must be in the form of a square set at an angle of 45 degrees (diamond-\
shaped). The top and bottom portions and the surrounding line must be black. The \
centre area must be white or a suitable contrasting background. The minimum \
dimensions must be 100 mm x 100 mm and the minimum width of the line forming \
the diamond must be 2 mm. Only when transporting by air, the symbol \"Y\" must be \
placed in the centre of the mark and must be clearly visible.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_slots_have_notes() {
        assert!(regulatory_note(slots::UN_NUMBER).is_some());
        assert!(regulatory_note(slots::NET_QUANTITY).is_some());
        assert!(regulatory_note(slots::AIRCRAFT_ONLY).is_some());
        assert!(regulatory_note(slots::LIMITED_QUANTITY).is_some());
    }

    #[test]
    fn test_arrow_slots_share_note() {
        assert_eq!(
            regulatory_note(slots::ORIENTATION_ARROW_FRONT),
            regulatory_note(slots::ORIENTATION_ARROW_SIDE)
        );
    }

    #[test]
    fn test_qualified_class_slots_share_hazard_note() {
        assert_eq!(
            regulatory_note("DG_class_6_1"),
            regulatory_note(slots::DG_CLASS)
        );
        assert_eq!(
            regulatory_note(slots::DG_SUBRISK1),
            regulatory_note(slots::DG_CLASS)
        );
    }

    #[test]
    fn test_unknown_slot_has_no_note() {
        assert_eq!(regulatory_note(slots::PSN), None);
        assert_eq!(regulatory_note("Nonexistent"), None);
    }
}
