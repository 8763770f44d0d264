//! Per-room guest counts and single-field edits.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_ROOM_ADULTS, DEFAULT_ROOM_CHILDREN};

/// Guests placed in one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomCount {
    pub adult: u32,
    pub child: u32,
}

impl Default for RoomCount {
    fn default() -> Self {
        Self {
            adult: DEFAULT_ROOM_ADULTS,
            child: DEFAULT_ROOM_CHILDREN,
        }
    }
}

impl RoomCount {
    #[must_use]
    pub const fn new(adult: u32, child: u32) -> Self {
        Self { adult, child }
    }

    #[must_use]
    pub const fn total(self) -> u32 {
        self.adult.saturating_add(self.child)
    }

    #[must_use]
    pub const fn is_full(self, max_room_guest: u32) -> bool {
        self.total() == max_room_guest
    }

    #[must_use]
    pub const fn get(self, kind: GuestKind) -> u32 {
        match kind {
            GuestKind::Adult => self.adult,
            GuestKind::Child => self.child,
        }
    }

    /// Copy of this room with one field replaced.
    #[must_use]
    pub const fn with(self, kind: GuestKind, value: u32) -> Self {
        match kind {
            GuestKind::Adult => Self {
                adult: value,
                ..self
            },
            GuestKind::Child => Self {
                child: value,
                ..self
            },
        }
    }
}

/// Which counter of a room an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestKind {
    Adult,
    Child,
}

impl GuestKind {
    pub const ALL: [Self; 2] = [Self::Adult, Self::Child];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Adult => "adult",
            Self::Child => "child",
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Adult => Self::Child,
            Self::Child => Self::Adult,
        }
    }
}

impl fmt::Display for GuestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One single-field change coming from a room's stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomEdit {
    pub room: usize,
    pub kind: GuestKind,
    pub value: u32,
}

impl RoomEdit {
    #[must_use]
    pub const fn new(room: usize, kind: GuestKind, value: u32) -> Self {
        Self { room, kind, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_room_holds_one_adult() {
        let room = RoomCount::default();
        assert_eq!(room, RoomCount::new(1, 0));
        assert_eq!(room.total(), 1);
    }

    #[test]
    fn with_replaces_only_the_target_field() {
        let room = RoomCount::new(2, 1);
        assert_eq!(room.with(GuestKind::Adult, 3), RoomCount::new(3, 1));
        assert_eq!(room.with(GuestKind::Child, 0), RoomCount::new(2, 0));
        assert_eq!(room.get(GuestKind::Child), 1);
    }

    #[test]
    fn full_room_matches_ceiling_exactly() {
        assert!(RoomCount::new(2, 2).is_full(4));
        assert!(!RoomCount::new(2, 1).is_full(4));
    }

    #[test]
    fn serializes_as_adult_child_pair() {
        let json = serde_json::to_string(&RoomCount::new(2, 1)).expect("serialize room");
        assert_eq!(json, r#"{"adult":2,"child":1}"#);
        assert_eq!(GuestKind::Adult.other(), GuestKind::Child);
        assert_eq!(GuestKind::Child.key(), "child");
    }
}
