use crate::components::foundation::{StatusBox, StatusTone};
use crate::components::stepper::{NumberStepper, StepperChange};
use crate::copy;
use room_allocation_core::numbers::count_to_value;
use room_allocation_core::{FieldControl, GuestKind, RoomAllocation, RoomControls, TripError};
use yew::prelude::*;

/// A stepper change tagged with the room and counter it came from.
pub type FieldEdit = (usize, GuestKind, i32);

pub fn render_summary(guests: u32, rooms: u32) -> Html {
    html! { <p class="text-100 room-allocation__summary">{ copy::trip_summary(guests, rooms) }</p> }
}

/// Static view for a trip that cannot be allocated. No controls are rendered.
pub fn render_invalid(guests: u32, rooms: u32, error: &TripError) -> Html {
    html! {
        <section class="room-allocation room-allocation--invalid" data-mode={format!("{:?}", error.mode())}>
            { render_summary(guests, rooms) }
            <StatusBox tone={StatusTone::Alert} message={error.to_string()} />
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct RoomListProps {
    pub allocation: RoomAllocation,
    #[prop_or_default]
    pub revision: u32,
    #[prop_or_default]
    pub on_edit: Callback<FieldEdit>,
}

#[function_component(RoomList)]
pub fn room_list(props: &RoomListProps) -> Html {
    let trip = props.allocation.trip();
    let unassigned = props.allocation.unassigned();
    let controls = props.allocation.controls();
    let last = controls.len().saturating_sub(1);
    html! {
        <section class="room-allocation" data-mode="Allocating">
            { render_summary(trip.guests, trip.rooms) }
            { if unassigned > 0 {
                html! { <StatusBox tone={StatusTone::Info} message={copy::unassigned_notice(unassigned)} /> }
            } else {
                Html::default()
            }}
            { for controls.into_iter().map(|room| {
                let key = format!("room-{}-{}", room.index, props.revision);
                html! {
                    <div key={key} class={classes!("room", room.is_full.then_some("room--full"))}>
                        { render_room(room, &props.on_edit) }
                        { if room.index == last { Html::default() } else { html! { <div class="divider" /> } } }
                    </div>
                }
            }) }
        </section>
    }
}

fn render_room(room: RoomControls, on_edit: &Callback<FieldEdit>) -> Html {
    html! {
        <>
            <p class="text-100 room__occupancy">{ copy::room_occupancy(room.total) }</p>
            <div class="room__field room__field--adult">
                <div>
                    <p class="text-200">{ copy::field_label(GuestKind::Adult) }</p>
                    <p class="text-300">{ copy::ADULT_HINT }</p>
                </div>
                { render_field(room.index, room.adult, on_edit) }
            </div>
            <div class="room__field room__field--child">
                <p class="text-200">{ copy::field_label(GuestKind::Child) }</p>
                { render_field(room.index, room.child, on_edit) }
            </div>
        </>
    }
}

fn render_field(index: usize, field: FieldControl, on_edit: &Callback<FieldEdit>) -> Html {
    let on_change = {
        let on_edit = on_edit.clone();
        let kind = field.kind;
        Callback::from(move |change: StepperChange| on_edit.emit((index, kind, change.value)))
    };
    html! {
        <NumberStepper
            name={format!("room-{index}-{}", field.kind)}
            min={count_to_value(field.min)}
            max={count_to_value(field.max)}
            value={count_to_value(field.value)}
            disabled={field.disabled}
            on_change={on_change}
        />
    }
}
