//! Allocation state for a trip and the pure derivations the panel renders from.
//!
//! A [`RoomAllocation`] is an immutable snapshot. Edits produce a new snapshot through
//! [`RoomAllocation::with_edit`], which enforces the room and trip invariants centrally,
//! so nothing that reaches the host can break them regardless of how the edit arrived.

use thiserror::Error;

use crate::config::AllocationConfig;
use crate::numbers::count_to_value;
use crate::room::{GuestKind, RoomCount, RoomEdit};
use crate::stepper::StepperBounds;
use crate::trip::{TripError, TripParams};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("room {index} does not exist (trip has {len} rooms)")]
    RoomOutOfRange { index: usize, len: usize },
    #[error("room {room} needs at least {min} {kind} (got {value})")]
    BelowMinimum {
        room: usize,
        kind: GuestKind,
        min: u32,
        value: u32,
    },
    #[error("room {room} would hold {total} guests (max {max})")]
    RoomOverCapacity { room: usize, total: u32, max: u32 },
    #[error("{assigned} guests would be assigned but the trip has {guests}")]
    TripOverCapacity { assigned: u32, guests: u32 },
}

/// Total guests placed across `rooms`.
#[must_use]
pub fn assigned_guest_count(rooms: &[RoomCount]) -> u32 {
    rooms
        .iter()
        .fold(0_u32, |acc, room| acc.saturating_add(room.total()))
}

/// Guests still waiting for a room. Never negative.
#[must_use]
pub fn unassigned_guest_count(guests: u32, rooms: &[RoomCount]) -> u32 {
    guests.saturating_sub(assigned_guest_count(rooms))
}

/// Stepper settings derived for one counter of one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldControl {
    pub kind: GuestKind,
    pub value: u32,
    pub min: u32,
    pub max: u32,
    /// Text entry is read-only. The buttons follow `value` against `min`/`max`.
    pub disabled: bool,
}

impl FieldControl {
    #[must_use]
    pub fn bounds(self) -> StepperBounds {
        StepperBounds::new(count_to_value(self.min), count_to_value(self.max), 1)
    }

    #[must_use]
    pub const fn can_increase(self) -> bool {
        self.value < self.max
    }

    #[must_use]
    pub const fn can_decrease(self) -> bool {
        self.value > self.min
    }
}

/// Everything the panel needs to render one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomControls {
    pub index: usize,
    pub total: u32,
    pub is_full: bool,
    pub adult: FieldControl,
    pub child: FieldControl,
}

impl RoomControls {
    #[must_use]
    pub const fn field(&self, kind: GuestKind) -> FieldControl {
        match kind {
            GuestKind::Adult => self.adult,
            GuestKind::Child => self.child,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomAllocation {
    trip: TripParams,
    max_room_guest: u32,
    min_adults: u32,
    rooms: Vec<RoomCount>,
}

impl RoomAllocation {
    /// Seed one default room per trip room.
    ///
    /// # Errors
    ///
    /// Returns the trip validation failure when the guests cannot be placed at all.
    pub fn new(trip: TripParams, config: &AllocationConfig) -> Result<Self, TripError> {
        trip.validate(config.max_room_guest)?;
        let len = usize::try_from(trip.rooms).unwrap_or(usize::MAX);
        Ok(Self {
            trip,
            max_room_guest: config.max_room_guest,
            min_adults: config.min_adults_per_room,
            rooms: vec![config.default_room; len],
        })
    }

    #[must_use]
    pub const fn trip(&self) -> TripParams {
        self.trip
    }

    #[must_use]
    pub const fn max_room_guest(&self) -> u32 {
        self.max_room_guest
    }

    #[must_use]
    pub fn rooms(&self) -> &[RoomCount] {
        &self.rooms
    }

    #[must_use]
    pub fn into_rooms(self) -> Vec<RoomCount> {
        self.rooms
    }

    #[must_use]
    pub fn assigned(&self) -> u32 {
        assigned_guest_count(&self.rooms)
    }

    #[must_use]
    pub fn unassigned(&self) -> u32 {
        unassigned_guest_count(self.trip.guests, &self.rooms)
    }

    /// Every guest has a room; increases are blocked everywhere.
    #[must_use]
    pub fn is_fully_assigned(&self) -> bool {
        self.unassigned() == 0
    }

    fn field_control(
        &self,
        room: RoomCount,
        kind: GuestKind,
        fully_assigned: bool,
    ) -> FieldControl {
        let value = room.get(kind);
        let min = match kind {
            GuestKind::Adult => self.min_adults,
            GuestKind::Child => 0,
        };
        let max = if fully_assigned {
            value
        } else {
            self.max_room_guest.saturating_sub(room.get(kind.other()))
        };
        FieldControl {
            kind,
            value,
            min,
            max,
            disabled: room.is_full(self.max_room_guest) || fully_assigned,
        }
    }

    /// Controls for every room, recomputed from this snapshot.
    #[must_use]
    pub fn controls(&self) -> Vec<RoomControls> {
        let fully_assigned = self.is_fully_assigned();
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, &room)| RoomControls {
                index,
                total: room.total(),
                is_full: room.is_full(self.max_room_guest),
                adult: self.field_control(room, GuestKind::Adult, fully_assigned),
                child: self.field_control(room, GuestKind::Child, fully_assigned),
            })
            .collect()
    }

    /// Apply one field change and return the new snapshot.
    ///
    /// # Errors
    ///
    /// Rejects edits addressing a missing room, dropping below the per-field minimum,
    /// overfilling the room, or placing more guests than the trip has.
    pub fn with_edit(&self, edit: RoomEdit) -> Result<Self, AllocationError> {
        let len = self.rooms.len();
        let current = *self
            .rooms
            .get(edit.room)
            .ok_or(AllocationError::RoomOutOfRange {
                index: edit.room,
                len,
            })?;
        if edit.kind == GuestKind::Adult && edit.value < self.min_adults {
            return Err(AllocationError::BelowMinimum {
                room: edit.room,
                kind: edit.kind,
                min: self.min_adults,
                value: edit.value,
            });
        }
        let updated = current.with(edit.kind, edit.value);
        if updated.total() > self.max_room_guest {
            return Err(AllocationError::RoomOverCapacity {
                room: edit.room,
                total: updated.total(),
                max: self.max_room_guest,
            });
        }
        let assigned = self
            .assigned()
            .saturating_sub(current.total())
            .saturating_add(updated.total());
        if assigned > self.trip.guests {
            return Err(AllocationError::TripOverCapacity {
                assigned,
                guests: self.trip.guests,
            });
        }
        let mut rooms = self.rooms.clone();
        rooms[edit.room] = updated;
        Ok(Self {
            trip: self.trip,
            max_room_guest: self.max_room_guest,
            min_adults: self.min_adults,
            rooms,
        })
    }
}
