//! Shared numeric constants for allocation rules.

/// Occupancy ceiling of a single room (adults plus children).
pub const MAX_ROOM_GUEST: u32 = 4;

/// Adults every room keeps in the steady state.
pub const MIN_ADULTS_PER_ROOM: u32 = 1;

/// Cadence of press-and-hold auto-repeat.
pub const DEFAULT_REPEAT_INTERVAL_MS: u32 = 100;

/// Seed occupancy of every room at mount.
pub const DEFAULT_ROOM_ADULTS: u32 = 1;
pub const DEFAULT_ROOM_CHILDREN: u32 = 0;

/// Stepper defaults when a call site leaves a property unset.
pub const STEPPER_DEFAULT_MIN: i32 = 0;
pub const STEPPER_DEFAULT_MAX: i32 = 10;
pub const STEPPER_DEFAULT_STEP: i32 = 1;
pub const STEPPER_DEFAULT_NAME: &str = "CustomInputNumber";
