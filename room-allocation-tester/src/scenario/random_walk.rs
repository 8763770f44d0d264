//! Seeded random edit walks over random valid trips.
use anyhow::{Context, Result, ensure};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use room_allocation_core::{GuestKind, RoomAllocation, RoomEdit, TripParams};

use super::{ScenarioCtx, ScenarioSummary, TestScenario};
use crate::logic::invariants::check_allocation;

const MAX_WALK_ROOMS: u32 = 6;

pub fn random_walk_scenario() -> TestScenario {
    TestScenario::new("random-walk", "Random Edit Walk", random_walk_expectation)
}

fn random_trip(rng: &mut ChaCha8Rng, max_room_guest: u32) -> TripParams {
    let rooms = rng.gen_range(1..=MAX_WALK_ROOMS);
    let guests = rng.gen_range(rooms..=rooms.saturating_mul(max_room_guest));
    TripParams::new(guests, rooms)
}

/// Pick an edit the way a user would: mostly single clicks, sometimes typed values,
/// occasionally values the controls would never offer.
fn random_edit(rng: &mut ChaCha8Rng, allocation: &RoomAllocation) -> RoomEdit {
    let rooms = allocation.rooms();
    let index = rng.gen_range(0..rooms.len());
    let kind = if rng.gen_bool(0.5) {
        GuestKind::Adult
    } else {
        GuestKind::Child
    };
    let current = rooms[index].get(kind);
    let value = match rng.gen_range(0..10) {
        0..=3 => current.saturating_add(1),
        4..=6 => current.saturating_sub(1),
        7 | 8 => rng.gen_range(0..=allocation.max_room_guest()),
        _ => rng.gen_range(0..=allocation.max_room_guest().saturating_mul(2)),
    };
    RoomEdit::new(index, kind, value)
}

/// Every click the controls allow must be accepted.
fn check_enabled_clicks(allocation: &RoomAllocation) -> Result<()> {
    for room in allocation.controls() {
        for kind in GuestKind::ALL {
            let field = room.field(kind);
            if field.can_increase() {
                allocation
                    .with_edit(RoomEdit::new(room.index, kind, field.value + 1))
                    .with_context(|| format!("enabled increment on room {} {kind}", room.index))?;
            }
            if field.can_decrease() {
                allocation
                    .with_edit(RoomEdit::new(room.index, kind, field.value - 1))
                    .with_context(|| format!("enabled decrement on room {} {kind}", room.index))?;
            }
        }
    }
    Ok(())
}

fn random_walk_expectation(ctx: &ScenarioCtx) -> Result<ScenarioSummary> {
    let mut rng = ChaCha8Rng::seed_from_u64(ctx.seed);
    let min_adults = ctx.config.min_adults_per_room;
    let trip = random_trip(&mut rng, ctx.config.max_room_guest);
    let mut allocation = RoomAllocation::new(trip, &ctx.config)
        .with_context(|| format!("random trip {trip:?} should be valid"))?;
    check_allocation(&allocation, min_adults)?;

    let mut summary = ScenarioSummary::default();
    for step in 0..ctx.max_edits {
        let edit = random_edit(&mut rng, &allocation);
        match allocation.with_edit(edit) {
            Ok(next) => {
                allocation = next;
                summary.record(true);
            }
            Err(err) => {
                log::trace!("step {step}: {edit:?} rejected: {err}");
                summary.record(false);
            }
        }
        check_allocation(&allocation, min_adults)
            .with_context(|| format!("after step {step} ({edit:?}) on {trip:?}"))?;
        check_enabled_clicks(&allocation)?;
    }
    ensure!(
        summary.edits_applied + summary.edits_rejected == ctx.max_edits,
        "walk lost track of edits"
    );
    if ctx.verbose {
        log::info!(
            "random walk seed {} on {trip:?}: final rooms {:?}",
            ctx.seed,
            allocation.rooms()
        );
    }
    Ok(summary)
}
