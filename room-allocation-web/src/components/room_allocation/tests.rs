use super::*;
use futures::executor::block_on;
use room_allocation_core::{AllocationConfig, GuestKind, RoomAllocation, RoomEdit};
use yew::LocalServerRenderer;

fn render_panel(guest: u32, room: u32) -> String {
    let props = RoomAllocationProps {
        guest,
        room,
        on_change: Callback::noop(),
    };
    block_on(LocalServerRenderer::<RoomAllocationPanel>::with_props(props).render())
}

fn render_list(allocation: RoomAllocation) -> String {
    let props = RoomListProps {
        allocation,
        revision: 0,
        on_edit: Callback::noop(),
    };
    block_on(LocalServerRenderer::<RoomList>::with_props(props).render())
}

fn allocation(guests: u32, rooms: u32) -> RoomAllocation {
    RoomAllocation::new(TripParams::new(guests, rooms), &AllocationConfig::default())
        .expect("valid trip")
}

fn button_tags<'a>(html: &'a str, class_fragment: &str) -> Vec<&'a str> {
    html.split("<button")
        .filter(|segment| segment.contains(class_fragment))
        .filter_map(|segment| segment.split('>').next())
        .collect()
}

fn increment_tags(html: &str) -> Vec<&str> {
    button_tags(html, "stepper__button--increment")
}

#[test]
fn default_trip_shows_three_rooms_and_remaining_count() {
    let html = render_panel(10, 3);
    assert!(html.contains("住客人數：10 人 / 3 房"), "summary: {html}");
    assert!(html.contains("尚未分配人數：7 人"), "remaining: {html}");
    assert_eq!(html.matches("房間：1 人").count(), 3);
    assert_eq!(html.matches("class=\"stepper\"").count(), 6);
    assert_eq!(html.matches("class=\"divider\"").count(), 2);
    assert!(html.contains("大人") && html.contains("年齡 20+") && html.contains("小孩"));
}

#[test]
fn too_few_guests_renders_message_without_controls() {
    let html = render_panel(2, 3);
    assert!(html.contains("住客人數最少需等於房間數量"), "message: {html}");
    assert!(html.contains("住客人數：2 人 / 3 房"));
    assert!(!html.contains("stepper"));
    assert!(!html.contains("<input"));
}

#[test]
fn too_many_guests_renders_capacity_without_controls() {
    let html = render_panel(13, 3);
    assert!(html.contains("每間房為四人房，住客人數最多等於 12"), "message: {html}");
    assert!(!html.contains("stepper"));
    assert!(!html.contains("<button"));
}

#[test]
fn fully_assigned_trip_disables_every_increment() {
    let html = render_panel(3, 3);
    assert!(!html.contains("尚未分配人數"), "no remaining notice: {html}");
    let tags = increment_tags(&html);
    assert_eq!(tags.len(), 6);
    assert!(tags.iter().all(|tag| tag.contains("disabled")));
    assert_eq!(html.matches(r#"max="1""#).count(), 3, "adult max collapses to 1");
    assert_eq!(html.matches(r#"max="0""#).count(), 3, "child max collapses to 0");
}

#[test]
fn full_room_blocks_increments_only_there() {
    let alloc = allocation(10, 3)
        .with_edit(RoomEdit::new(0, GuestKind::Adult, 2))
        .and_then(|a| a.with_edit(RoomEdit::new(0, GuestKind::Child, 2)))
        .expect("fill first room");
    let html = render_list(alloc);
    assert!(html.contains("房間：4 人"));
    assert!(html.contains("room--full"));
    let tags = increment_tags(&html);
    assert_eq!(tags.len(), 6);
    assert!(tags[0].contains("disabled") && tags[1].contains("disabled"));
    assert!(tags[2..].iter().all(|tag| !tag.contains("disabled")));
    let decrements = button_tags(&html, "stepper__button--decrement");
    assert!(!decrements[0].contains("disabled") && !decrements[1].contains("disabled"));
    assert!(html.contains("尚未分配人數：4 人"));
}

#[test]
fn open_room_bounds_follow_the_other_field() {
    let alloc = allocation(10, 2)
        .with_edit(RoomEdit::new(1, GuestKind::Child, 1))
        .expect("child edit");
    let html = render_list(alloc);
    assert!(html.contains(r#"name="room-1-adult""#));
    let adult = html
        .split("<input")
        .find(|segment| segment.contains(r#"name="room-1-adult""#))
        .and_then(|segment| segment.split('>').next())
        .expect("room 1 adult input");
    assert!(adult.contains(r#"max="3""#), "adult max is 4 - child: {adult}");
    assert!(adult.contains(r#"min="1""#));
}
