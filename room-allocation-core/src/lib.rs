//! Room Allocation Core
//!
//! Platform-agnostic rules for distributing a fixed number of guests across a fixed
//! number of rooms. This crate holds the allocation state, the pure derivations the
//! panel renders from, and the stepper state machine, without UI dependencies.

pub mod allocation;
pub mod config;
pub mod constants;
pub mod numbers;
pub mod repeat;
pub mod room;
pub mod stepper;
pub mod trip;

// Re-export commonly used types
pub use allocation::{
    AllocationError, FieldControl, RoomAllocation, RoomControls, assigned_guest_count,
    unassigned_guest_count,
};
pub use config::{AllocationConfig, ConfigError};
pub use constants::{DEFAULT_REPEAT_INTERVAL_MS, MAX_ROOM_GUEST, MIN_ADULTS_PER_ROOM};
pub use repeat::RepeatSlots;
pub use room::{GuestKind, RoomCount, RoomEdit};
pub use stepper::{StepDirection, Stepper, StepperBounds};
pub use trip::{PanelMode, TripError, TripParams};
