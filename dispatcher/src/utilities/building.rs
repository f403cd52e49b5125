use log::error;
use shared_resources::config::ElevatorConfig;

use super::actions::{DoorActuator, NotificationSink};
use super::elevator::Elevator;
use super::elevator_status::ElevatorStatus;
use super::error::{DispatchError, InvariantViolation, ValidationError};
use super::mode::Mode;
use super::request_board::RequestBoard;
use super::scheduler::{self, Step};

/// Every elevator in the building together with the hall-call board they
/// share. Single-threaded; each elevator is scheduled independently.
pub struct Building<D: DoorActuator, S: NotificationSink> {
    elevators: Vec<Elevator>,
    board: RequestBoard,
    doors: D,
    sink: S,
}

impl<D: DoorActuator, S: NotificationSink> Building<D, S> {
    pub fn new(config: &ElevatorConfig, doors: D, sink: S) -> Self {
        Building {
            elevators: (0..config.num_elevators)
                .map(|id| Elevator::new(id, config.num_floors))
                .collect(),
            board: RequestBoard::new(config.num_floors),
            doors,
            sink,
        }
    }

    pub fn num_floors(&self) -> u8 {
        self.board.num_floors()
    }

    pub fn num_elevators(&self) -> usize {
        self.elevators.len()
    }

    pub fn board(&self) -> &RequestBoard {
        &self.board
    }

    pub fn elevator(&self, elevator: usize) -> Result<&Elevator, ValidationError> {
        let num_elevators = self.elevators.len();
        self.elevators
            .get(elevator)
            .ok_or(ValidationError::ElevatorOutOfRange { elevator, num_elevators })
    }

    /// Unpresses every button and returns all elevators to the bottom floor.
    pub fn reset(&mut self) {
        self.board.clear_all();
        for elevator in self.elevators.iter_mut() {
            elevator.reset(&self.sink);
        }
    }

    pub fn register_hall_call(&mut self, floor: u8, direction: Mode) -> Result<(), DispatchError> {
        Ok(self.board.register_hall_call(floor, direction)?)
    }

    pub fn request_from_cabin(&mut self, elevator: usize, floor: u8) -> Result<(), DispatchError> {
        Ok(select(&mut self.elevators, elevator)?.request_from_cabin(floor)?)
    }

    pub fn tick(&mut self, elevator: usize) -> Result<Step, DispatchError> {
        let car = select(&mut self.elevators, elevator)?;
        let step = scheduler::tick(car, &self.board, &self.sink).map_err(report)?;
        Ok(step)
    }

    pub fn run_until_stop(&mut self, elevator: usize) -> Result<Step, DispatchError> {
        let car = select(&mut self.elevators, elevator)?;
        let step = scheduler::run_until_stop(car, &self.board, &self.sink).map_err(report)?;
        Ok(step)
    }

    pub fn open(&mut self, elevator: usize) -> Result<(), DispatchError> {
        let car = select(&mut self.elevators, elevator)?;
        scheduler::open(car, &mut self.board, &mut self.doors, &self.sink).map_err(report)?;
        Ok(())
    }

    pub fn statuses(&self) -> Vec<ElevatorStatus> {
        self.elevators
            .iter()
            .map(|elevator| ElevatorStatus::from_elevator(elevator, false))
            .collect()
    }
}

fn select(elevators: &mut [Elevator], elevator: usize) -> Result<&mut Elevator, ValidationError> {
    let num_elevators = elevators.len();
    elevators
        .get_mut(elevator)
        .ok_or(ValidationError::ElevatorOutOfRange { elevator, num_elevators })
}

fn report(violation: InvariantViolation) -> InvariantViolation {
    error!("{}", violation);
    violation
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::{unbounded, Receiver, Sender};
    use shared_resources::notification::Notification;

    use super::*;
    use crate::utilities::actions::DoorCommand;

    fn building() -> (Building<Sender<DoorCommand>, Sender<Notification>>, Receiver<Notification>) {
        let (doors, _door_log) = unbounded();
        let (sink, events) = unbounded();
        (Building::new(&ElevatorConfig::default(), doors, sink), events)
    }

    #[test]
    fn starts_neutral_at_bottom() {
        let (building, _events) = building();
        assert_eq!(building.num_elevators(), 2);
        assert_eq!(building.num_floors(), 5);
        for status in building.statuses() {
            assert_eq!(status, ElevatorStatus::new(status.id));
        }
        assert!(building.board().is_empty());
    }

    #[test]
    fn unknown_elevators_are_rejected() {
        let (mut building, _events) = building();
        let expected = DispatchError::Validation(ValidationError::ElevatorOutOfRange {
            elevator: 2,
            num_elevators: 2,
        });
        assert_eq!(building.request_from_cabin(2, 1), Err(expected.clone()));
        assert_eq!(building.tick(2), Err(expected.clone()));
        assert_eq!(building.open(2), Err(expected));
    }

    #[test]
    fn open_in_neutral_is_an_invariant_violation() {
        let (mut building, _events) = building();
        let err = building.open(0).unwrap_err();
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn reset_clears_everything() {
        let (mut building, events) = building();
        building.register_hall_call(2, Mode::Down).unwrap();
        building.request_from_cabin(1, 3).unwrap();
        building.run_until_stop(1).unwrap();
        events.try_iter().for_each(drop);

        building.reset();
        assert!(building.board().is_empty());
        for status in building.statuses() {
            assert_eq!(status, ElevatorStatus::new(status.id));
        }
        assert_eq!(
            events.try_iter().collect::<Vec<_>>(),
            vec![
                Notification::FloorArrived { elevator: 0, floor: 0 },
                Notification::FloorArrived { elevator: 1, floor: 0 },
            ]
        );
    }
}
