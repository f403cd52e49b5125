use shared_resources::call::Call;
use thiserror::Error;

use super::mode::Mode;

/// Bad input from a caller. Always reported, never corrected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("there is no floor {floor} (building has {num_floors} floors)")]
    FloorOutOfRange { floor: u8, num_floors: u8 },

    #[error("there is no elevator {elevator} (building has {num_elevators} elevators)")]
    ElevatorOutOfRange { elevator: usize, num_elevators: usize },

    #[error("there is no {call} button on floor {floor}")]
    NoSuchButton { floor: u8, call: Call },

    #[error("there is no button for the {0} mode")]
    NotDirectional(Mode),
}

/// A broken contract between the scheduler and its caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("elevator {elevator} was asked to open while in neutral")]
    OpenWhileNeutral { elevator: usize },

    #[error("elevator {elevator} cannot move {direction} from floor {floor}")]
    LeftShaft { elevator: usize, floor: u8, direction: Call },

    #[error("elevator {elevator} is in {mode} without a destination")]
    MissingDestination { elevator: usize, mode: Mode },

    #[error("elevator {elevator} did not settle within {steps} steps")]
    StepBudgetExceeded { elevator: usize, steps: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl DispatchError {
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, DispatchError::Invariant(_))
    }
}
