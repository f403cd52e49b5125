//! ----- SCHEDULER -----
//! The per-elevator travel-mode state machine. Each call to [`tick`] evaluates
//! one row of the mode table: stop here, give up and go neutral, or move one
//! floor. Only [`open`] touches the cabin queues and the hall-call board.

use log::debug;
use shared_resources::call::Call;
use shared_resources::notification::Notification;

use super::actions::{DoorActuator, NotificationSink};
use super::elevator::Elevator;
use super::error::InvariantViolation;
use super::mode::Mode;
use super::request_board::RequestBoard;

/// Outcome of a single scheduling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved { floor: u8 },
    ModeChanged { mode: Mode },
    /// Halt here; the caller runs [`open`] next.
    Stop,
    /// Neutral with nothing to do anywhere.
    Idle,
}

/// Upper bound on ticks between two stops for a shaft of `num_floors`.
pub fn step_budget(num_floors: u8) -> usize {
    4 * num_floors as usize + 4
}

pub fn tick(
    elevator: &mut Elevator,
    board: &RequestBoard,
    sink: &dyn NotificationSink,
) -> Result<Step, InvariantViolation> {
    let floor = elevator.floor();
    let step = match elevator.mode() {
        Mode::Up => {
            if board.is_requested(floor, Call::HallUp) || elevator.ascending.head_is(floor) {
                Step::Stop
            } else if elevator.ascending.is_empty() {
                abandon(elevator)
            } else {
                Step::Moved { floor: elevator.move_up(sink)? }
            }
        }
        Mode::Down => {
            if board.is_requested(floor, Call::HallDown) || elevator.descending.head_is(floor) {
                Step::Stop
            } else if elevator.descending.is_empty() {
                abandon(elevator)
            } else {
                Step::Moved { floor: elevator.move_down(sink)? }
            }
        }
        Mode::RetrieveAboveUp => {
            let destination = elevator.require_destination()?;
            if floor == destination {
                arrive(elevator, Mode::Up)
            } else if board.is_requested(floor, Call::HallUp) || elevator.ascending.head_is(floor) {
                Step::Stop
            } else if !board.is_requested(destination, Call::HallUp) {
                abandon(elevator)
            } else {
                Step::Moved { floor: elevator.move_up(sink)? }
            }
        }
        Mode::RetrieveBelowUp => {
            let destination = elevator.require_destination()?;
            if floor == destination {
                arrive(elevator, Mode::Up)
            } else if !board.is_requested(destination, Call::HallUp) {
                abandon(elevator)
            } else {
                Step::Moved { floor: elevator.move_down(sink)? }
            }
        }
        Mode::RetrieveAboveDown => {
            let destination = elevator.require_destination()?;
            if floor == destination {
                arrive(elevator, Mode::Down)
            } else if !board.is_requested(destination, Call::HallDown) {
                abandon(elevator)
            } else {
                Step::Moved { floor: elevator.move_up(sink)? }
            }
        }
        Mode::RetrieveBelowDown => {
            let destination = elevator.require_destination()?;
            if floor == destination {
                arrive(elevator, Mode::Down)
            } else if board.is_requested(floor, Call::HallDown) || elevator.descending.head_is(floor) {
                Step::Stop
            } else if !board.is_requested(destination, Call::HallDown) {
                abandon(elevator)
            } else {
                Step::Moved { floor: elevator.move_down(sink)? }
            }
        }
        Mode::Neutral => match search(elevator, board) {
            Some(mode) => Step::ModeChanged { mode },
            None => Step::Idle,
        },
    };
    Ok(step)
}

/// Ticks until the elevator either stops or has nothing left to do.
pub fn run_until_stop(
    elevator: &mut Elevator,
    board: &RequestBoard,
    sink: &dyn NotificationSink,
) -> Result<Step, InvariantViolation> {
    let budget = step_budget(elevator.num_floors());
    for _ in 0..budget {
        match tick(elevator, board, sink)? {
            step @ (Step::Stop | Step::Idle) => return Ok(step),
            Step::Moved { .. } | Step::ModeChanged { .. } => {}
        }
    }
    Err(InvariantViolation::StepBudgetExceeded { elevator: elevator.id(), steps: budget })
}

/// Door cycle at the current floor: let passengers out, take the waiting ones
/// in, and unpress the hall button matching the travel direction.
pub fn open(
    elevator: &mut Elevator,
    board: &mut RequestBoard,
    doors: &mut dyn DoorActuator,
    sink: &dyn NotificationSink,
) -> Result<(), InvariantViolation> {
    let (id, floor) = (elevator.id(), elevator.floor());
    let Some(call) = elevator.mode().to_call() else {
        return Err(InvariantViolation::OpenWhileNeutral { elevator: id });
    };

    doors.open_door(id, floor);
    sink.notify(Notification::DoorOpened { elevator: id, floor });

    elevator.ascending.pop_if_head(floor);
    elevator.descending.pop_if_head(floor);
    board.clear_hall_call(call, floor, sink);

    doors.close_door(id, floor);
    sink.notify(Notification::DoorClosed { elevator: id, floor });
    Ok(())
}

fn arrive(elevator: &mut Elevator, mode: Mode) -> Step {
    debug!("elevator {} reached its pickup on floor {}, now {}", elevator.id(), elevator.floor(), mode);
    elevator.set_mode(mode);
    Step::Stop
}

fn abandon(elevator: &mut Elevator) -> Step {
    debug!("elevator {} has nothing left in its direction, going neutral", elevator.id());
    elevator.set_mode(Mode::Neutral);
    Step::ModeChanged { mode: Mode::Neutral }
}

/// Picks a new mode for a neutral elevator. Cabin requests win; otherwise the
/// nearest hall call is fetched, looking above before below at equal
/// distance. `None` means the elevator stays idle.
fn search(elevator: &mut Elevator, board: &RequestBoard) -> Option<Mode> {
    if elevator.has_cabin_requests() {
        let mode = if elevator.ascending.len() > elevator.descending.len() {
            Mode::Up
        } else {
            Mode::Down
        };
        debug!("elevator {} serving cabin requests going {}", elevator.id(), mode);
        elevator.set_mode(mode);
        return Some(mode);
    }

    let (floor, num_floors) = (elevator.floor(), elevator.num_floors());
    for offset in 1..num_floors {
        let above = floor.checked_add(offset).filter(|candidate| *candidate < num_floors);
        let below = floor.checked_sub(offset);
        for (is_above, candidate) in [(true, above), (false, below)] {
            let Some(candidate) = candidate else { continue };
            if !board.any_at(candidate) {
                continue;
            }
            let call = if board.is_requested(candidate, Call::HallUp) {
                Call::HallUp
            } else {
                Call::HallDown
            };
            let mode = Mode::retrieve(is_above, call);
            debug!("elevator {} fetching {} call on floor {}", elevator.id(), call, candidate);
            elevator.start_retrieval(mode, candidate);
            return Some(mode);
        }
    }
    None
}
