//! Side-effecting collaborators the scheduler calls into: the door motors and
//! whoever is listening for events.

use crossbeam_channel::Sender;
use log::warn;
use shared_resources::notification::Notification;

pub trait DoorActuator {
    fn open_door(&mut self, elevator: usize, floor: u8);
    fn close_door(&mut self, elevator: usize, floor: u8);
}

pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Door command as seen by the door panel: `open == true` lights the door.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorCommand {
    pub elevator: usize,
    pub floor: u8,
    pub open: bool,
}

impl DoorActuator for Sender<DoorCommand> {
    fn open_door(&mut self, elevator: usize, floor: u8) {
        if self.send(DoorCommand { elevator, floor, open: true }).is_err() {
            warn!("door panel for elevator {} is gone, open not delivered", elevator);
        }
    }

    fn close_door(&mut self, elevator: usize, floor: u8) {
        if self.send(DoorCommand { elevator, floor, open: false }).is_err() {
            warn!("door panel for elevator {} is gone, close not delivered", elevator);
        }
    }
}

impl NotificationSink for Sender<Notification> {
    fn notify(&self, notification: Notification) {
        // Nobody listening is not an error for the scheduler.
        let _ = self.send(notification);
    }
}
