//! Display text for the allocation panel.
use room_allocation_core::GuestKind;

pub const ADULT_LABEL: &str = "大人";
pub const ADULT_HINT: &str = "年齡 20+";
pub const CHILD_LABEL: &str = "小孩";

#[must_use]
pub fn trip_summary(guests: u32, rooms: u32) -> String {
    format!("住客人數：{guests} 人 / {rooms} 房")
}

#[must_use]
pub fn unassigned_notice(count: u32) -> String {
    format!("尚未分配人數：{count} 人")
}

#[must_use]
pub fn room_occupancy(total: u32) -> String {
    format!("房間：{total} 人")
}

#[must_use]
pub const fn field_label(kind: GuestKind) -> &'static str {
    match kind {
        GuestKind::Adult => ADULT_LABEL,
        GuestKind::Child => CHILD_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_counts_into_copy() {
        assert_eq!(trip_summary(10, 3), "住客人數：10 人 / 3 房");
        assert_eq!(unassigned_notice(7), "尚未分配人數：7 人");
        assert_eq!(room_occupancy(4), "房間：4 人");
        assert_eq!(field_label(GuestKind::Adult), "大人");
        assert_eq!(field_label(GuestKind::Child), "小孩");
    }
}
