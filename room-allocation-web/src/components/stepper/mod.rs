mod interactions;
#[cfg(test)]
mod tests;

use crate::components::foundation as f;
use crate::config::allocation_config;
use crate::dom::Interval;
use f::TargetCast;
use interactions::{StepperHandle, release_hold, start_hold, sync_from_props};
use room_allocation_core::constants::{
    STEPPER_DEFAULT_MAX, STEPPER_DEFAULT_MIN, STEPPER_DEFAULT_NAME, STEPPER_DEFAULT_STEP,
};
use room_allocation_core::{RepeatSlots, StepDirection, Stepper, StepperBounds};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Emitted whenever the stepper accepts a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepperChange {
    pub name: AttrValue,
    pub value: i32,
}

fn default_name() -> AttrValue {
    AttrValue::Static(STEPPER_DEFAULT_NAME)
}

#[derive(Properties, PartialEq, Clone)]
pub struct StepperProps {
    #[prop_or(STEPPER_DEFAULT_MIN)]
    pub min: i32,
    #[prop_or(STEPPER_DEFAULT_MAX)]
    pub max: i32,
    #[prop_or(STEPPER_DEFAULT_STEP)]
    pub step: i32,
    #[prop_or_else(default_name)]
    pub name: AttrValue,
    /// Initial value; a later, different value re-seeds the control.
    #[prop_or(STEPPER_DEFAULT_MIN)]
    pub value: i32,
    #[prop_or_default]
    pub disabled: bool,
    /// Auto-repeat cadence; the bundled configuration applies when unset.
    #[prop_or_default]
    pub repeat_interval_ms: Option<u32>,
    #[prop_or_default]
    pub on_change: Callback<StepperChange>,
    #[prop_or_default]
    pub on_blur: Callback<AttrValue>,
}

#[function_component(NumberStepper)]
pub fn number_stepper(props: &StepperProps) -> Html {
    let bounds = StepperBounds::new(props.min, props.max, props.step);
    let live = use_mut_ref(|| Stepper::new(props.value, bounds, props.disabled));
    let seeded = use_mut_ref(|| props.value);
    let slots: Rc<RefCell<RepeatSlots<Interval>>> = use_mut_ref(RepeatSlots::default);
    let refresh = use_force_update();

    sync_from_props(&live, &seeded, props.value, bounds, props.disabled);
    let snapshot = *live.borrow();

    {
        let slots = slots.clone();
        use_effect_with((), move |_| move || slots.borrow_mut().stop_all());
    }

    let handle = StepperHandle {
        live,
        name: props.name.clone(),
        on_change: props.on_change.clone(),
        refresh,
    };
    let period_ms = props
        .repeat_interval_ms
        .unwrap_or(allocation_config().repeat_interval_ms);

    let on_input = {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                handle.enter_text(&input.value());
            }
        })
    };
    let on_blur = {
        let cb = props.on_blur.clone();
        let name = props.name.clone();
        Callback::from(move |_: FocusEvent| cb.emit(name.clone()))
    };

    let button = |direction: StepDirection| -> Html {
        let onclick = {
            let handle = handle.clone();
            Callback::from(move |_: MouseEvent| handle.click(direction))
        };
        let onpointerdown = {
            let handle = handle.clone();
            let slots = slots.clone();
            Callback::from(move |_: PointerEvent| {
                start_hold(&slots, &handle, direction, period_ms);
            })
        };
        let release = {
            let slots = slots.clone();
            Callback::from(move |_: PointerEvent| release_hold(&slots, direction))
        };
        let (class, label) = match direction {
            StepDirection::Decrement => ("stepper__button stepper__button--decrement", "減少"),
            StepDirection::Increment => ("stepper__button stepper__button--increment", "增加"),
        };
        html! {
            <button
                type="button"
                class={class}
                aria-label={label}
                disabled={snapshot.direction_disabled(direction)}
                onclick={onclick}
                onpointerdown={onpointerdown}
                onpointerup={release.clone()}
                onpointerleave={release.clone()}
                onpointercancel={release}
            >
                { direction.symbol() }
            </button>
        }
    };

    html! {
        <div class="stepper" data-name={props.name.clone()}>
            { button(StepDirection::Decrement) }
            <label class="stepper__field">
                <input
                    class="stepper__input"
                    type="number"
                    inputmode="numeric"
                    name={props.name.clone()}
                    min={bounds.min().to_string()}
                    max={bounds.max().to_string()}
                    step={bounds.step().to_string()}
                    value={snapshot.value().to_string()}
                    disabled={props.disabled}
                    oninput={on_input}
                    onblur={on_blur}
                />
            </label>
            { button(StepDirection::Increment) }
        </div>
    }
}
