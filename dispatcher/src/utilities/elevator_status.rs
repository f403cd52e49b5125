use super::elevator::Elevator;
use super::mode::Mode;

/// Snapshot of one elevator, published to the status display.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct ElevatorStatus {
    pub id: usize,
    pub floor: u8,
    pub mode: Mode,
    pub destination: Option<u8>,
    pub ascending: Vec<u8>,
    pub descending: Vec<u8>,
    pub dwelling: bool,
}

impl ElevatorStatus {
    pub fn new(id: usize) -> Self {
        ElevatorStatus {
            id,
            floor: 0,
            mode: Mode::Neutral,
            destination: None,
            ascending: Vec::new(),
            descending: Vec::new(),
            dwelling: false,
        }
    }

    pub fn from_elevator(elevator: &Elevator, dwelling: bool) -> Self {
        ElevatorStatus {
            id: elevator.id(),
            floor: elevator.floor(),
            mode: elevator.mode(),
            destination: elevator.destination(),
            ascending: elevator.ascending().to_vec(),
            descending: elevator.descending().to_vec(),
            dwelling,
        }
    }

    pub fn queue_string(&self) -> String {
        let floors: Vec<String> = self
            .ascending
            .iter()
            .chain(self.descending.iter())
            .map(|floor| (floor + 1).to_string())
            .collect();
        if floors.is_empty() {
            String::from("-")
        } else {
            floors.join(",")
        }
    }
}
