mod outcome;
#[cfg(test)]
mod tests;
mod view;

use crate::config::allocation_config;
use outcome::{PanelState, edit_outcome};
use room_allocation_core::{RoomCount, TripParams};
use yew::prelude::*;

pub use outcome::EditOutcome;
pub use view::{FieldEdit, RoomList, RoomListProps};

#[derive(Properties, PartialEq, Clone)]
pub struct RoomAllocationProps {
    #[prop_or(10)]
    pub guest: u32,
    #[prop_or(3)]
    pub room: u32,
    /// Receives the full list after every accepted edit.
    #[prop_or_default]
    pub on_change: Callback<Vec<RoomCount>>,
}

/// Guest allocation panel. `guest` and `room` are read once at mount.
#[function_component(RoomAllocationPanel)]
pub fn room_allocation_panel(props: &RoomAllocationProps) -> Html {
    let trip = TripParams::new(props.guest, props.room);
    let state = use_mut_ref(|| PanelState::new(trip, allocation_config()));
    let refresh = use_force_update();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            if let Err(err) = &state.borrow().allocation {
                log::warn!(
                    "room allocation unavailable for {} guests / {} rooms: {err}",
                    trip.guests,
                    trip.rooms
                );
            }
            || {}
        });
    }

    let on_edit = {
        let state = state.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |(room, kind, value): FieldEdit| {
            let outcome = edit_outcome(&state.borrow().allocation, room, kind, value);
            let reported = state.borrow_mut().apply(outcome);
            refresh.force_update();
            if let Some(rooms) = reported {
                on_change.emit(rooms);
            }
        })
    };

    let current = state.borrow().clone();
    match current.allocation {
        Err(err) => view::render_invalid(trip.guests, trip.rooms, &err),
        Ok(allocation) => html! {
            <RoomList allocation={allocation} revision={current.revision} on_edit={on_edit} />
        },
    }
}
