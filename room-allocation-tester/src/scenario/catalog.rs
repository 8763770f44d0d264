use anyhow::{Context, Result, bail, ensure};
use room_allocation_core::{
    GuestKind, PanelMode, RepeatSlots, RoomAllocation, RoomCount, RoomEdit, StepDirection,
    Stepper, StepperBounds, TripError, TripParams,
};
use std::cell::RefCell;
use std::rc::Rc;

use super::{ScenarioCtx, ScenarioSummary, TestScenario};
use crate::logic::invariants::check_allocation;

pub fn catalog_scenarios() -> Vec<TestScenario> {
    vec![
        TestScenario::new("defaults", "Default Trip Seeding", defaults_expectation),
        TestScenario::new("too-few", "Too Few Guests", too_few_expectation),
        TestScenario::new("too-many", "Too Many Guests", too_many_expectation),
        TestScenario::new("fill-all", "Fill Every Guest", fill_all_expectation),
        TestScenario::new("full-room", "Full Room Limits", full_room_expectation),
        TestScenario::new(
            "stepper-bounds",
            "Stepper Clamp Properties",
            stepper_bounds_expectation,
        ),
        TestScenario::new("hold-repeat", "Press-and-Hold Repeat", hold_repeat_expectation),
    ]
}

fn allocate(ctx: &ScenarioCtx, guests: u32, rooms: u32) -> Result<RoomAllocation> {
    RoomAllocation::new(TripParams::new(guests, rooms), &ctx.config)
        .with_context(|| format!("{guests} guests / {rooms} rooms should be allocatable"))
}

fn defaults_expectation(ctx: &ScenarioCtx) -> Result<ScenarioSummary> {
    let allocation = allocate(ctx, 10, 3)?;
    ensure!(
        allocation.rooms() == [ctx.config.default_room; 3],
        "unexpected seed rooms {:?}",
        allocation.rooms()
    );
    ensure!(
        allocation.unassigned() == 7,
        "expected 7 unassigned, got {}",
        allocation.unassigned()
    );
    check_allocation(&allocation, ctx.config.min_adults_per_room)?;
    Ok(ScenarioSummary::default())
}

fn too_few_expectation(ctx: &ScenarioCtx) -> Result<ScenarioSummary> {
    let trip = TripParams::new(2, 3);
    ensure!(trip.mode(ctx.config.max_room_guest) == PanelMode::TooFewGuests);
    match RoomAllocation::new(trip, &ctx.config) {
        Err(err @ TripError::TooFewGuests { .. }) => {
            ensure!(err.to_string() == "住客人數最少需等於房間數量", "message: {err}");
        }
        other => bail!("expected TooFewGuests, got {other:?}"),
    }
    Ok(ScenarioSummary::default())
}

fn too_many_expectation(ctx: &ScenarioCtx) -> Result<ScenarioSummary> {
    let trip = TripParams::new(13, 3);
    ensure!(trip.mode(ctx.config.max_room_guest) == PanelMode::TooManyGuests);
    match RoomAllocation::new(trip, &ctx.config) {
        Err(TripError::TooManyGuests { capacity, .. }) => {
            ensure!(capacity == 12, "capacity should be 12, got {capacity}");
        }
        other => bail!("expected TooManyGuests, got {other:?}"),
    }
    let edge = allocate(ctx, 12, 3)?;
    check_allocation(&edge, ctx.config.min_adults_per_room)?;
    Ok(ScenarioSummary::default())
}

/// Click the first enabled increment until nothing can grow.
fn click_until_frozen(
    mut allocation: RoomAllocation,
    summary: &mut ScenarioSummary,
) -> Result<RoomAllocation> {
    loop {
        let next = allocation.controls().into_iter().find_map(|room| {
            GuestKind::ALL
                .into_iter()
                .map(|kind| room.field(kind))
                .find(|field| field.can_increase())
                .map(|field| RoomEdit::new(room.index, field.kind, field.value + 1))
        });
        let Some(edit) = next else {
            return Ok(allocation);
        };
        allocation = allocation
            .with_edit(edit)
            .with_context(|| format!("enabled increment rejected: {edit:?}"))?;
        summary.record(true);
    }
}

fn fill_all_expectation(ctx: &ScenarioCtx) -> Result<ScenarioSummary> {
    let mut summary = ScenarioSummary::default();
    let allocation = click_until_frozen(allocate(ctx, 10, 3)?, &mut summary)?;
    ensure!(
        allocation.is_fully_assigned(),
        "{} guests left after every increment froze",
        allocation.unassigned()
    );
    for room in allocation.controls() {
        for kind in GuestKind::ALL {
            let field = room.field(kind);
            ensure!(field.max == field.value, "room {} {kind} max not collapsed", room.index);
            ensure!(!field.can_increase(), "room {} {kind} still increments", room.index);
        }
    }
    check_allocation(&allocation, ctx.config.min_adults_per_room)?;
    Ok(summary)
}

fn full_room_expectation(ctx: &ScenarioCtx) -> Result<ScenarioSummary> {
    let mut summary = ScenarioSummary::default();
    let mut allocation = allocate(ctx, 10, 3)?;
    for edit in [
        RoomEdit::new(1, GuestKind::Adult, 2),
        RoomEdit::new(1, GuestKind::Child, 2),
    ] {
        allocation = allocation.with_edit(edit)?;
        summary.record(true);
    }
    ensure!(allocation.unassigned() > 0, "trip should still have room");
    let controls = allocation.controls();
    let full = controls.get(1).context("room 1 missing")?;
    ensure!(full.is_full && full.total == 4);
    ensure!(
        full.adult.disabled && full.child.disabled,
        "full room text entry is not locked"
    );
    ensure!(
        controls
            .iter()
            .filter(|room| room.index != 1)
            .all(|room| room.adult.can_increase() && room.child.can_increase()),
        "other rooms should stay open"
    );

    let rejected = allocation.with_edit(RoomEdit::new(1, GuestKind::Adult, 3));
    ensure!(rejected.is_err(), "overfilling room 1 must be rejected");
    summary.record(false);
    ensure!(allocation.rooms()[1] == RoomCount::new(2, 2));
    check_allocation(&allocation, ctx.config.min_adults_per_room)?;

    ensure!(
        full.adult.can_decrease() && full.child.can_decrease(),
        "full room should still shrink"
    );
    let relieved = allocation.with_edit(RoomEdit::new(1, GuestKind::Child, 1))?;
    summary.record(true);
    ensure!(relieved.rooms()[1] == RoomCount::new(2, 1));
    ensure!(!relieved.controls()[1].is_full, "room 1 should reopen");
    check_allocation(&relieved, ctx.config.min_adults_per_room)?;
    Ok(summary)
}

fn stepper_bounds_expectation(ctx: &ScenarioCtx) -> Result<ScenarioSummary> {
    let min = -3;
    let max = i32::try_from(ctx.seed % 7).unwrap_or(0) + 2;
    let bounds = StepperBounds::new(min, max, 1);
    for start in min..=max {
        let mut up = Stepper::new(start, bounds, false);
        let stepped = up.step(StepDirection::Increment);
        ensure!(up.value() == (start + 1).min(max), "increment from {start}");
        ensure!(stepped.is_some() == (start < max), "increment emit from {start}");

        let mut down = Stepper::new(start, bounds, false);
        let stepped = down.step(StepDirection::Decrement);
        ensure!(down.value() == (start - 1).max(min), "decrement from {start}");
        ensure!(stepped.is_some() == (start > min), "decrement emit from {start}");

        let mut read_only = Stepper::new(start, bounds, true);
        ensure!(
            read_only.enter_text(&min.to_string()).is_none(),
            "read-only text accepted at {start}"
        );
        ensure!(
            read_only.step(StepDirection::Decrement).is_some() == (start > min),
            "read-only decrement from {start}"
        );
    }
    let mut typed = Stepper::new(min, bounds, false);
    ensure!(typed.enter_text(&(max + 1).to_string()).is_none(), "out-of-range text accepted");
    ensure!(typed.enter_text("abc").is_none(), "garbage text accepted");
    ensure!(typed.enter_text(&format!(" {max} ")) == Some(max));
    Ok(ScenarioSummary::default())
}

/// Drive a stepper the way a held button does: tick until the step is refused, then stop.
fn hold_repeat_expectation(ctx: &ScenarioCtx) -> Result<ScenarioSummary> {
    struct Tick(Rc<RefCell<Vec<&'static str>>>);
    impl Drop for Tick {
        fn drop(&mut self) {
            self.0.borrow_mut().push("cancel");
        }
    }

    let mut summary = ScenarioSummary::default();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slots: RepeatSlots<Tick> = RepeatSlots::default();
    let mut stepper = Stepper::new(1, StepperBounds::new(1, 4, 1), false);
    let mut emitted = Vec::new();

    ensure!(slots.start(StepDirection::Increment, || Some(Tick(log.clone()))));
    for _ in 0..ctx.max_edits.max(10) {
        match stepper.step(StepDirection::Increment) {
            Some(value) => {
                emitted.push(value);
                summary.record(true);
            }
            None => {
                slots.stop(StepDirection::Increment);
                break;
            }
        }
    }
    ensure!(emitted == [2, 3, 4], "hold emitted {emitted:?}");
    ensure!(!slots.is_active(StepDirection::Increment), "repeat still running at bound");
    ensure!(log.borrow().as_slice() == ["cancel"], "timer not cancelled exactly once");

    ensure!(slots.start(StepDirection::Decrement, || Some(Tick(log.clone()))));
    ensure!(slots.start(StepDirection::Decrement, || Some(Tick(log.clone()))));
    ensure!(log.borrow().len() == 2, "restart must cancel the previous timer");
    slots.stop_all();
    ensure!(log.borrow().len() == 3);
    Ok(summary)
}
