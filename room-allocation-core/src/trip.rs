//! Trip parameters and the pre-render validation that selects the panel mode.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trip-level validation failures. The `Display` text is what the panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripError {
    #[error("住客人數最少需等於房間數量")]
    TooFewGuests { guests: u32, rooms: u32 },
    #[error("每間房為{}人房，住客人數最多等於 {capacity}", room_size_numeral(.per_room))]
    TooManyGuests {
        guests: u32,
        rooms: u32,
        per_room: u32,
        capacity: u32,
    },
}

/// Room size as written in the capacity message: Chinese numerals up to ten, digits beyond.
fn room_size_numeral(per_room: &u32) -> String {
    const NUMERALS: [&str; 11] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];
    usize::try_from(*per_room)
        .ok()
        .and_then(|index| NUMERALS.get(index))
        .map_or_else(|| per_room.to_string(), |numeral| (*numeral).to_string())
}

/// Guests to place and rooms to place them in, fixed for the panel's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripParams {
    pub guests: u32,
    pub rooms: u32,
}

/// Which of the three exclusive views the panel renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    TooFewGuests,
    TooManyGuests,
    Allocating,
}

impl TripParams {
    #[must_use]
    pub const fn new(guests: u32, rooms: u32) -> Self {
        Self { guests, rooms }
    }

    /// Most guests the rooms can hold.
    #[must_use]
    pub const fn capacity(self, max_room_guest: u32) -> u32 {
        self.rooms.saturating_mul(max_room_guest)
    }

    /// Validate in order: too few guests first, then too many.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub const fn validate(self, max_room_guest: u32) -> Result<(), TripError> {
        if self.guests < self.rooms {
            return Err(TripError::TooFewGuests {
                guests: self.guests,
                rooms: self.rooms,
            });
        }
        let capacity = self.capacity(max_room_guest);
        if self.guests > capacity {
            return Err(TripError::TooManyGuests {
                guests: self.guests,
                rooms: self.rooms,
                per_room: max_room_guest,
                capacity,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn mode(self, max_room_guest: u32) -> PanelMode {
        match self.validate(max_room_guest) {
            Ok(()) => PanelMode::Allocating,
            Err(err) => err.mode(),
        }
    }
}

impl TripError {
    #[must_use]
    pub const fn mode(&self) -> PanelMode {
        match self {
            Self::TooFewGuests { .. } => PanelMode::TooFewGuests,
            Self::TooManyGuests { .. } => PanelMode::TooManyGuests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_guests_is_checked_first() {
        let trip = TripParams::new(2, 3);
        assert_eq!(trip.mode(4), PanelMode::TooFewGuests);
        let err = trip.validate(4).unwrap_err();
        assert_eq!(err.to_string(), "住客人數最少需等於房間數量");
    }

    #[test]
    fn too_many_guests_reports_capacity() {
        let trip = TripParams::new(13, 3);
        let err = trip.validate(4).unwrap_err();
        assert_eq!(
            err,
            TripError::TooManyGuests {
                guests: 13,
                rooms: 3,
                per_room: 4,
                capacity: 12
            }
        );
        assert_eq!(err.to_string(), "每間房為四人房，住客人數最多等於 12");
        assert_eq!(err.mode(), PanelMode::TooManyGuests);
    }

    #[test]
    fn capacity_message_spells_small_room_sizes() {
        let err = TripParams::new(7, 2).validate(3).unwrap_err();
        assert_eq!(err.to_string(), "每間房為三人房，住客人數最多等於 6");
        let err = TripParams::new(25, 2).validate(12).unwrap_err();
        assert_eq!(err.to_string(), "每間房為12人房，住客人數最多等於 24");
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(TripParams::new(3, 3).mode(4), PanelMode::Allocating);
        assert_eq!(TripParams::new(12, 3).mode(4), PanelMode::Allocating);
        assert_eq!(TripParams::new(10, 3).mode(4), PanelMode::Allocating);
    }

    #[test]
    fn capacity_saturates() {
        assert_eq!(TripParams::new(1, u32::MAX).capacity(4), u32::MAX);
    }
}
