use super::StepperChange;
use crate::dom::{self, Interval};
use room_allocation_core::{RepeatSlots, StepDirection, Stepper, StepperBounds};
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;
use yew::functional::UseForceUpdateHandle;
use yew::{AttrValue, Callback};

/// Shared state a stepper's event handlers and repeat timers act on.
#[derive(Clone)]
pub struct StepperHandle {
    pub live: Rc<RefCell<Stepper>>,
    pub name: AttrValue,
    pub on_change: Callback<StepperChange>,
    pub refresh: UseForceUpdateHandle,
}

impl StepperHandle {
    /// Apply typed text. The field is re-rendered either way so a rejected entry
    /// falls back to the last accepted value.
    pub fn enter_text(&self, text: &str) -> bool {
        let accepted = self.live.borrow_mut().enter_text(text);
        if let Some(value) = accepted {
            self.emit(value);
        }
        self.refresh.force_update();
        accepted.is_some()
    }

    /// A single button click. A click refused at the bound is not reported.
    pub fn click(&self, direction: StepDirection) {
        if self.step(direction).is_break() {
            log::trace!("{} ignored at bound", direction.symbol());
        }
    }

    /// One step; `Break` once the bound stops further change.
    pub fn step(&self, direction: StepDirection) -> ControlFlow<()> {
        let next = self.live.borrow_mut().step(direction);
        let Some(value) = next else {
            return ControlFlow::Break(());
        };
        self.emit(value);
        self.refresh.force_update();
        ControlFlow::Continue(())
    }

    fn emit(&self, value: i32) {
        self.on_change.emit(StepperChange {
            name: self.name.clone(),
            value,
        });
    }
}

/// Bring the live stepper in line with the latest props. The value is only replaced
/// when the host passes a different `value` than it did last render.
pub fn sync_from_props(
    live: &RefCell<Stepper>,
    seeded: &RefCell<i32>,
    value: i32,
    bounds: StepperBounds,
    disabled: bool,
) {
    let mut stepper = live.borrow_mut();
    stepper.set_limits(bounds, disabled);
    let mut last = seeded.borrow_mut();
    if *last != value {
        *last = value;
        stepper.reseed(value);
    }
}

/// Begin press-and-hold repeat in `direction`, replacing any repeat already running there.
pub fn start_hold(
    slots: &RefCell<RepeatSlots<Interval>>,
    handle: &StepperHandle,
    direction: StepDirection,
    period_ms: u32,
) -> bool {
    if handle.live.borrow().direction_disabled(direction) {
        slots.borrow_mut().stop(direction);
        return false;
    }
    let tick = handle.clone();
    slots.borrow_mut().start(direction, move || {
        match Interval::start(period_ms, move || tick.step(direction)) {
            Ok(interval) => Some(interval),
            Err(err) => {
                let message = format!(
                    "Failed to start {} repeat: {}",
                    direction.symbol(),
                    dom::js_error_message(&err)
                );
                log::error!("{message}");
                dom::console_error(&message);
                None
            }
        }
    })
}

pub fn release_hold(slots: &RefCell<RepeatSlots<Interval>>, direction: StepDirection) {
    if slots.borrow_mut().stop(direction) {
        log::trace!("released {} repeat", direction.symbol());
    }
}
