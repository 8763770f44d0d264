pub mod foundation;
pub mod room_allocation;
pub mod stepper;

pub use room_allocation::{RoomAllocationPanel, RoomAllocationProps};
pub use stepper::{NumberStepper, StepperChange, StepperProps};
