//! Single-slot-per-direction ownership of auto-repeat handles.
//!
//! A handle is any value whose `Drop` cancels its timer. Replacing or clearing a slot
//! drops the previous handle before anything new is scheduled.

use crate::stepper::StepDirection;

#[derive(Debug)]
pub struct RepeatSlots<H> {
    increment: Option<H>,
    decrement: Option<H>,
}

impl<H> Default for RepeatSlots<H> {
    fn default() -> Self {
        Self {
            increment: None,
            decrement: None,
        }
    }
}

impl<H> RepeatSlots<H> {
    const fn slot(&mut self, direction: StepDirection) -> &mut Option<H> {
        match direction {
            StepDirection::Increment => &mut self.increment,
            StepDirection::Decrement => &mut self.decrement,
        }
    }

    /// Stop any repeat in `direction`, then store whatever `schedule` produces.
    pub fn start<F>(&mut self, direction: StepDirection, schedule: F) -> bool
    where
        F: FnOnce() -> Option<H>,
    {
        self.stop(direction);
        let handle = schedule();
        let started = handle.is_some();
        *self.slot(direction) = handle;
        started
    }

    /// Drop the handle in `direction`. Returns whether one was active.
    pub fn stop(&mut self, direction: StepDirection) -> bool {
        self.slot(direction).take().is_some()
    }

    pub fn stop_all(&mut self) {
        self.increment = None;
        self.decrement = None;
    }

    #[must_use]
    pub const fn is_active(&self, direction: StepDirection) -> bool {
        match direction {
            StepDirection::Increment => self.increment.is_some(),
            StepDirection::Decrement => self.decrement.is_some(),
        }
    }

    #[must_use]
    pub fn get(&self, direction: StepDirection) -> Option<&H> {
        match direction {
            StepDirection::Increment => self.increment.as_ref(),
            StepDirection::Decrement => self.decrement.as_ref(),
        }
    }
}
