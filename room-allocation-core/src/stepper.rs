//! Numeric stepper state machine: direct text entry, bounded steps, read-only field.
//!
//! Every mutating operation returns `Some(value)` only when the value actually changed
//! and a change event should be emitted. `None` means the edit was a no-op.

use crate::constants::{STEPPER_DEFAULT_MAX, STEPPER_DEFAULT_MIN, STEPPER_DEFAULT_STEP};
use crate::numbers::integral_f64_to_i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    Increment,
    Decrement,
}

impl StepDirection {
    pub const ALL: [Self; 2] = [Self::Decrement, Self::Increment];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Increment => "+",
            Self::Decrement => "-",
        }
    }
}

/// Inclusive range and step size. `max < min` collapses to `min`, and steps are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperBounds {
    min: i32,
    max: i32,
    step: i32,
}

impl Default for StepperBounds {
    fn default() -> Self {
        Self::new(STEPPER_DEFAULT_MIN, STEPPER_DEFAULT_MAX, STEPPER_DEFAULT_STEP)
    }
}

impl StepperBounds {
    #[must_use]
    pub fn new(min: i32, max: i32, step: i32) -> Self {
        Self {
            min,
            max: max.max(min),
            step: step.max(1),
        }
    }

    #[must_use]
    pub const fn min(self) -> i32 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> i32 {
        self.max
    }

    #[must_use]
    pub const fn step(self) -> i32 {
        self.step
    }

    #[must_use]
    pub const fn contains(self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub fn clamp(self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepper {
    value: i32,
    bounds: StepperBounds,
    disabled: bool,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new(STEPPER_DEFAULT_MIN, StepperBounds::default(), false)
    }
}

impl Stepper {
    /// Build a stepper; an initial value outside the bounds is clamped into range.
    #[must_use]
    pub fn new(value: i32, bounds: StepperBounds, disabled: bool) -> Self {
        Self {
            value: bounds.clamp(value),
            bounds,
            disabled,
        }
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    #[must_use]
    pub const fn bounds(&self) -> StepperBounds {
        self.bounds
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Refresh bounds and the disabled flag from the latest render. The value is kept.
    pub const fn set_limits(&mut self, bounds: StepperBounds, disabled: bool) {
        self.bounds = bounds;
        self.disabled = disabled;
    }

    /// Replace the value from outside (the host re-seeded it).
    pub fn reseed(&mut self, value: i32) {
        self.value = self.bounds.clamp(value);
    }

    /// Button state depends on the value and bounds only; `disabled` locks text entry.
    #[must_use]
    pub const fn decrement_disabled(&self) -> bool {
        self.value <= self.bounds.min
    }

    #[must_use]
    pub const fn increment_disabled(&self) -> bool {
        self.value >= self.bounds.max
    }

    #[must_use]
    pub const fn direction_disabled(&self, direction: StepDirection) -> bool {
        match direction {
            StepDirection::Increment => self.increment_disabled(),
            StepDirection::Decrement => self.decrement_disabled(),
        }
    }

    /// Interpret entered text. Accepts integers (including integral decimals such as
    /// `"3.0"`) within bounds; anything else yields `None`.
    #[must_use]
    pub fn parse_entry(&self, text: &str) -> Option<i32> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let value = trimmed
            .parse::<i32>()
            .ok()
            .or_else(|| trimmed.parse::<f64>().ok().and_then(integral_f64_to_i32))?;
        self.bounds.contains(value).then_some(value)
    }

    /// Apply a direct text edit.
    pub fn enter_text(&mut self, text: &str) -> Option<i32> {
        if self.disabled {
            return None;
        }
        let value = self.parse_entry(text)?;
        self.value = value;
        Some(value)
    }

    /// Move one step in `direction`, clamped to the bounds.
    pub fn step(&mut self, direction: StepDirection) -> Option<i32> {
        if self.direction_disabled(direction) {
            return None;
        }
        let next = match direction {
            StepDirection::Increment => self.value.saturating_add(self.bounds.step),
            StepDirection::Decrement => self.value.saturating_sub(self.bounds.step),
        };
        let next = self.bounds.clamp(next);
        if next == self.value {
            return None;
        }
        self.value = next;
        Some(next)
    }
}
