use room_allocation_core::numbers::value_to_count;
use room_allocation_core::{
    AllocationConfig, AllocationError, GuestKind, RoomAllocation, RoomCount, RoomEdit, TripError,
    TripParams,
};

/// Result of routing one stepper change through the allocation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Applied(RoomAllocation),
    Rejected(AllocationError),
    Ignored,
}

/// Compute the next allocation for a stepper change without UI side effects.
pub fn edit_outcome(
    allocation: &Result<RoomAllocation, TripError>,
    room: usize,
    kind: GuestKind,
    value: i32,
) -> EditOutcome {
    let Ok(allocation) = allocation else {
        return EditOutcome::Ignored;
    };
    let Some(count) = value_to_count(value) else {
        return EditOutcome::Ignored;
    };
    match allocation.with_edit(RoomEdit::new(room, kind, count)) {
        Ok(next) => EditOutcome::Applied(next),
        Err(err) => EditOutcome::Rejected(err),
    }
}

/// Everything the panel keeps across renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub allocation: Result<RoomAllocation, TripError>,
    /// Bumped on every rejected edit so the room rows remount with the stored values.
    pub revision: u32,
}

impl PanelState {
    #[must_use]
    pub fn new(trip: TripParams, config: &AllocationConfig) -> Self {
        Self {
            allocation: RoomAllocation::new(trip, config),
            revision: 0,
        }
    }

    /// Fold an outcome into the state, returning the list to report upward when it changed.
    pub fn apply(&mut self, outcome: EditOutcome) -> Option<Vec<RoomCount>> {
        match outcome {
            EditOutcome::Applied(next) => {
                log::debug!(
                    "allocation updated: {} assigned, {} unassigned",
                    next.assigned(),
                    next.unassigned()
                );
                let rooms = next.rooms().to_vec();
                self.allocation = Ok(next);
                Some(rooms)
            }
            EditOutcome::Rejected(err) => {
                log::debug!("allocation edit rejected: {err}");
                self.revision = self.revision.wrapping_add(1);
                None
            }
            EditOutcome::Ignored => None,
        }
    }
}
