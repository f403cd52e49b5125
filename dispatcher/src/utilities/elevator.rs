use shared_resources::call::Call;
use shared_resources::notification::Notification;

use super::actions::NotificationSink;
use super::error::{InvariantViolation, ValidationError};
use super::floor_queue::{Ascending, Descending, FloorQueue};
use super::mode::Mode;

/// State owned by one elevator car.
#[derive(Clone, Debug)]
pub struct Elevator {
    id: usize,
    num_floors: u8,
    floor: u8,
    mode: Mode,
    destination: Option<u8>,
    pub(crate) ascending: FloorQueue<Ascending>,
    pub(crate) descending: FloorQueue<Descending>,
}

impl Elevator {
    pub fn new(id: usize, num_floors: u8) -> Self {
        Elevator {
            id,
            num_floors,
            floor: 0,
            mode: Mode::Neutral,
            destination: None,
            ascending: FloorQueue::new(),
            descending: FloorQueue::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn num_floors(&self) -> u8 {
        self.num_floors
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn destination(&self) -> Option<u8> {
        self.destination
    }

    pub fn ascending(&self) -> &FloorQueue<Ascending> {
        &self.ascending
    }

    pub fn descending(&self) -> &FloorQueue<Descending> {
        &self.descending
    }

    pub fn has_cabin_requests(&self) -> bool {
        !self.ascending.is_empty() || !self.descending.is_empty()
    }

    /// Switches to a non-retrieval mode, dropping any destination.
    pub(crate) fn set_mode(&mut self, mode: Mode) {
        debug_assert!(!mode.is_retrieval(), "retrieval modes need a destination");
        self.mode = mode;
        self.destination = None;
    }

    pub(crate) fn start_retrieval(&mut self, mode: Mode, destination: u8) {
        debug_assert!(mode.is_retrieval());
        self.mode = mode;
        self.destination = Some(destination);
    }

    pub(crate) fn require_destination(&self) -> Result<u8, InvariantViolation> {
        self.destination.ok_or(InvariantViolation::MissingDestination {
            elevator: self.id,
            mode: self.mode,
        })
    }

    /// Queues a destination pressed inside the cabin.
    pub fn request_from_cabin(&mut self, floor: u8) -> Result<(), ValidationError> {
        if floor >= self.num_floors {
            return Err(ValidationError::FloorOutOfRange { floor, num_floors: self.num_floors });
        }
        // A new passenger cannot ride along while the car heads the opposite
        // way to fetch someone, so re-plan from scratch.
        if matches!(self.mode, Mode::RetrieveAboveDown | Mode::RetrieveBelowUp) {
            self.set_mode(Mode::Neutral);
        }
        if floor > self.floor {
            self.ascending.push(floor);
        } else if floor < self.floor {
            self.descending.push(floor);
        } else {
            match self.mode {
                Mode::Up | Mode::RetrieveAboveUp => {
                    self.ascending.push(floor);
                }
                Mode::Down | Mode::RetrieveBelowDown => {
                    self.descending.push(floor);
                }
                // The direction is arbitrary here.
                Mode::Neutral | Mode::RetrieveAboveDown | Mode::RetrieveBelowUp => {
                    self.set_mode(Mode::Up);
                    self.ascending.push(floor);
                }
            }
        }
        Ok(())
    }

    pub(crate) fn move_up(&mut self, sink: &dyn NotificationSink) -> Result<u8, InvariantViolation> {
        if self.floor + 1 >= self.num_floors {
            return Err(InvariantViolation::LeftShaft {
                elevator: self.id,
                floor: self.floor,
                direction: Call::HallUp,
            });
        }
        self.floor += 1;
        sink.notify(Notification::FloorArrived { elevator: self.id, floor: self.floor });
        Ok(self.floor)
    }

    pub(crate) fn move_down(&mut self, sink: &dyn NotificationSink) -> Result<u8, InvariantViolation> {
        if self.floor == 0 {
            return Err(InvariantViolation::LeftShaft {
                elevator: self.id,
                floor: self.floor,
                direction: Call::HallDown,
            });
        }
        self.floor -= 1;
        sink.notify(Notification::FloorArrived { elevator: self.id, floor: self.floor });
        Ok(self.floor)
    }

    /// Empties both queues and parks the car at the bottom floor.
    pub fn reset(&mut self, sink: &dyn NotificationSink) {
        self.set_mode(Mode::Neutral);
        self.ascending.clear();
        self.descending.clear();
        self.floor = 0;
        sink.notify(Notification::FloorArrived { elevator: self.id, floor: self.floor });
    }
}
