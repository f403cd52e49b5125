use std::fmt;

use super::call::Call;

/// Side-effect events emitted by the dispatcher core. Rendering them is up to
/// whoever consumes them.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    FloorArrived { elevator: usize, floor: u8 },
    DoorOpened { elevator: usize, floor: u8 },
    DoorClosed { elevator: usize, floor: u8 },
    HallCallCleared { direction: Call, floor: u8 },
}

// Labels shown to passengers count from one.
impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Notification::FloorArrived { elevator, floor } => {
                write!(f, "elevator {} is now on floor {}", elevator + 1, floor + 1)
            }
            Notification::DoorOpened { elevator, floor } => {
                write!(f, "elevator {} opened door on floor {}", elevator + 1, floor + 1)
            }
            Notification::DoorClosed { elevator, floor } => {
                write!(f, "elevator {} closed door on floor {}", elevator + 1, floor + 1)
            }
            Notification::HallCallCleared { direction, floor } => {
                write!(f, "{} button on floor {} is unpressed", direction, floor + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_based_labels() {
        let arrived = Notification::FloorArrived { elevator: 0, floor: 2 };
        assert_eq!(arrived.to_string(), "elevator 1 is now on floor 3");

        let cleared = Notification::HallCallCleared { direction: Call::HallDown, floor: 4 };
        assert_eq!(cleared.to_string(), "down button on floor 5 is unpressed");
    }

    #[test]
    fn serializes_with_event_tag() {
        let opened = Notification::DoorOpened { elevator: 1, floor: 3 };
        let json = serde_json::to_string(&opened).unwrap();
        assert_eq!(json, r#"{"event":"door_opened","elevator":1,"floor":3}"#);

        let cleared = Notification::HallCallCleared { direction: Call::HallUp, floor: 0 };
        let json = serde_json::to_string(&cleared).unwrap();
        assert_eq!(json, r#"{"event":"hall_call_cleared","direction":"up","floor":0}"#);
    }
}
