use futures::executor::block_on;
use room_allocation_core::{AllocationConfig, GuestKind, RoomAllocation, RoomEdit, TripParams};
use room_allocation_web::components::foundation::{StatusBox, StatusBoxProps, StatusTone};
use room_allocation_web::components::room_allocation::{RoomList, RoomListProps};
use room_allocation_web::components::{
    NumberStepper, RoomAllocationPanel, RoomAllocationProps, StepperProps,
};
use yew::{AttrValue, Callback, Classes, LocalServerRenderer};

fn panel(guest: u32, room: u32) -> String {
    let props = RoomAllocationProps {
        guest,
        room,
        on_change: Callback::noop(),
    };
    block_on(LocalServerRenderer::<RoomAllocationPanel>::with_props(props).render())
}

#[test]
fn panel_defaults_render_ten_guests_in_three_rooms() {
    let props = yew::props!(RoomAllocationProps {});
    let html = block_on(LocalServerRenderer::<RoomAllocationPanel>::with_props(props).render());
    assert!(html.contains("住客人數：10 人 / 3 房"));
    assert!(html.contains("尚未分配人數：7 人"));
    assert!(html.contains(r#"data-mode="Allocating""#));
}

#[test]
fn invalid_trips_expose_their_mode() {
    assert!(panel(2, 3).contains(r#"data-mode="TooFewGuests""#));
    assert!(panel(13, 3).contains(r#"data-mode="TooManyGuests""#));
    let html = panel(12, 3);
    assert!(html.contains(r#"data-mode="Allocating""#));
    assert!(html.contains("尚未分配人數：9 人"));
}

#[test]
fn alert_box_carries_alert_role() {
    let props = StatusBoxProps {
        tone: StatusTone::Alert,
        message: AttrValue::from("nope"),
        class: Classes::new(),
    };
    let html = block_on(LocalServerRenderer::<StatusBox>::with_props(props).render());
    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains("status-box--alert"));
    assert!(html.contains("nope"));
}

#[test]
fn stepper_step_attribute_follows_props() {
    let props = StepperProps {
        min: 0,
        max: 20,
        step: 5,
        name: AttrValue::from("qty"),
        value: 10,
        disabled: false,
        repeat_interval_ms: Some(50),
        on_change: Callback::noop(),
        on_blur: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NumberStepper>::with_props(props).render());
    assert!(html.contains(r#"step="5""#));
    assert!(html.contains(r#"value="10""#));
    assert!(html.contains(r#"inputmode="numeric""#));
}

#[test]
fn room_list_marks_only_full_rooms() {
    let allocation = RoomAllocation::new(TripParams::new(8, 2), &AllocationConfig::default())
        .expect("valid trip")
        .with_edit(RoomEdit::new(1, GuestKind::Adult, 4))
        .expect("fill second room");
    let props = RoomListProps {
        allocation,
        revision: 0,
        on_edit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RoomList>::with_props(props).render());
    assert_eq!(html.matches("room--full").count(), 1);
    assert!(html.contains("房間：4 人"));
    assert!(html.contains("尚未分配人數：3 人"));
}
