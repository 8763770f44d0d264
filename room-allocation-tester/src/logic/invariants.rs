//! Invariants every reachable allocation must hold.
use anyhow::{Result, ensure};
use room_allocation_core::{
    GuestKind, RoomAllocation, RoomEdit, assigned_guest_count, unassigned_guest_count,
};

pub fn check_allocation(allocation: &RoomAllocation, min_adults: u32) -> Result<()> {
    let trip = allocation.trip();
    let max = allocation.max_room_guest();
    let rooms = allocation.rooms();

    ensure!(
        u32::try_from(rooms.len()).ok() == Some(trip.rooms),
        "room list has {} entries for {} rooms",
        rooms.len(),
        trip.rooms
    );
    let assigned = assigned_guest_count(rooms);
    ensure!(
        assigned <= trip.guests,
        "assigned {assigned} exceeds {} guests",
        trip.guests
    );
    let unassigned = unassigned_guest_count(trip.guests, rooms);
    ensure!(
        unassigned == unassigned_guest_count(trip.guests, rooms),
        "unassigned count is not stable"
    );
    ensure!(
        assigned + unassigned == trip.guests,
        "assigned {assigned} + unassigned {unassigned} != {}",
        trip.guests
    );

    for (index, room) in rooms.iter().enumerate() {
        ensure!(
            room.total() <= max,
            "room {index} holds {} guests (max {max})",
            room.total()
        );
        ensure!(
            room.adult >= min_adults,
            "room {index} has {} adults (min {min_adults})",
            room.adult
        );
    }

    check_controls(allocation)
}

fn check_controls(allocation: &RoomAllocation) -> Result<()> {
    let full_trip = allocation.is_fully_assigned();
    for room in allocation.controls() {
        for kind in GuestKind::ALL {
            let field = room.field(kind);
            ensure!(
                field.min <= field.value && field.value <= field.max,
                "room {} {kind}: value {} outside [{}, {}]",
                room.index,
                field.value,
                field.min,
                field.max
            );
            if full_trip {
                ensure!(
                    field.max == field.value,
                    "room {} {kind}: max {} should collapse to {} once every guest is placed",
                    room.index,
                    field.max,
                    field.value
                );
            }
            if room.is_full || full_trip {
                ensure!(
                    field.disabled && !field.can_increase(),
                    "room {} {kind} should lock text and increments",
                    room.index
                );
            }
            if field.can_decrease() {
                let edit = RoomEdit::new(room.index, kind, field.value - 1);
                ensure!(
                    allocation.with_edit(edit).is_ok(),
                    "room {} {kind}: enabled decrement to {} was refused",
                    room.index,
                    field.value - 1
                );
            }
        }
    }
    Ok(())
}
