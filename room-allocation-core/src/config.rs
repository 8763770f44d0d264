//! Tunable allocation limits loaded from bundled JSON.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_REPEAT_INTERVAL_MS, MAX_ROOM_GUEST, MIN_ADULTS_PER_ROOM};
use crate::room::RoomCount;

const DEFAULT_ALLOCATION_DATA: &str =
    include_str!("../../room-allocation-web/static/assets/data/allocation.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be at least {min} (got {value})")]
    BelowMinimum {
        field: &'static str,
        min: u32,
        value: u32,
    },
    #[error("min_adults_per_room {min_adults} exceeds max_room_guest {max_room_guest}")]
    AdultsExceedCapacity { min_adults: u32, max_room_guest: u32 },
    #[error("default room {adult}+{child} does not fit limits (min adults {min_adults}, max {max_room_guest})")]
    DefaultRoomOutOfBounds {
        adult: u32,
        child: u32,
        min_adults: u32,
        max_room_guest: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationConfig {
    #[serde(default = "default_max_room_guest")]
    pub max_room_guest: u32,
    #[serde(default = "default_min_adults")]
    pub min_adults_per_room: u32,
    #[serde(default)]
    pub default_room: RoomCount,
    #[serde(default = "default_repeat_interval")]
    pub repeat_interval_ms: u32,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            max_room_guest: default_max_room_guest(),
            min_adults_per_room: default_min_adults(),
            default_room: RoomCount::default(),
            repeat_interval_ms: default_repeat_interval(),
        }
    }
}

impl AllocationConfig {
    /// Load the bundled configuration, falling back to defaults when it does not parse.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_ALLOCATION_DATA).unwrap_or_default()
    }

    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the limits contradict each other.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the limits describe a satisfiable room.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first contradictory field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_room_guest < 1 {
            return Err(ConfigError::BelowMinimum {
                field: "max_room_guest",
                min: 1,
                value: self.max_room_guest,
            });
        }
        if self.repeat_interval_ms < 1 {
            return Err(ConfigError::BelowMinimum {
                field: "repeat_interval_ms",
                min: 1,
                value: self.repeat_interval_ms,
            });
        }
        if self.min_adults_per_room > self.max_room_guest {
            return Err(ConfigError::AdultsExceedCapacity {
                min_adults: self.min_adults_per_room,
                max_room_guest: self.max_room_guest,
            });
        }
        let room = self.default_room;
        if room.adult < self.min_adults_per_room || room.total() > self.max_room_guest {
            return Err(ConfigError::DefaultRoomOutOfBounds {
                adult: room.adult,
                child: room.child,
                min_adults: self.min_adults_per_room,
                max_room_guest: self.max_room_guest,
            });
        }
        Ok(())
    }
}

const fn default_max_room_guest() -> u32 {
    MAX_ROOM_GUEST
}

const fn default_min_adults() -> u32 {
    MIN_ADULTS_PER_ROOM
}

const fn default_repeat_interval() -> u32 {
    DEFAULT_REPEAT_INTERVAL_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(AllocationConfig::load_from_static(), AllocationConfig::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = AllocationConfig::from_json("{}").expect("empty object parses");
        assert_eq!(cfg.max_room_guest, 4);
        assert_eq!(cfg.min_adults_per_room, 1);
        assert_eq!(cfg.default_room, RoomCount::new(1, 0));
        assert_eq!(cfg.repeat_interval_ms, 100);
    }

    #[test]
    fn rejects_contradictory_limits() {
        let err = AllocationConfig::from_json(r#"{"max_room_guest":0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::BelowMinimum { field: "max_room_guest", .. }));

        let err = AllocationConfig::from_json(r#"{"max_room_guest":2,"min_adults_per_room":3}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::AdultsExceedCapacity { .. }));

        let err =
            AllocationConfig::from_json(r#"{"default_room":{"adult":3,"child":3}}"#).unwrap_err();
        assert!(err.to_string().contains("does not fit"));

        let err = AllocationConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
