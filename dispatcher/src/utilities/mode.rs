use std::fmt;

use shared_resources::call::Call;

use super::error::ValidationError;

/// Travel mode of a single elevator.
///
/// The retrieval modes are named after where the waiting passenger is
/// relative to the elevator (above/below) and which way they want to go
/// (up/down).
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Up,
    Down,
    Neutral,
    RetrieveAboveUp,
    RetrieveAboveDown,
    RetrieveBelowUp,
    RetrieveBelowDown,
}

impl Mode {
    pub fn iter() -> impl Iterator<Item = Mode> {
        [
            Mode::Up,
            Mode::Down,
            Mode::Neutral,
            Mode::RetrieveAboveUp,
            Mode::RetrieveAboveDown,
            Mode::RetrieveBelowUp,
            Mode::RetrieveBelowDown,
        ]
        .iter()
        .copied()
    }

    pub fn is_retrieval(self) -> bool {
        matches!(
            self,
            Mode::RetrieveAboveUp | Mode::RetrieveAboveDown | Mode::RetrieveBelowUp | Mode::RetrieveBelowDown
        )
    }

    /// Hall button served when the doors open in this mode.
    pub fn to_call(self) -> Option<Call> {
        match self {
            Mode::Up | Mode::RetrieveAboveUp | Mode::RetrieveBelowUp => Some(Call::HallUp),
            Mode::Down | Mode::RetrieveAboveDown | Mode::RetrieveBelowDown => Some(Call::HallDown),
            Mode::Neutral => None,
        }
    }

    /// Retrieval mode for a passenger waiting `above` (or below) the elevator
    /// who wants to travel in `call`'s direction.
    pub fn retrieve(above: bool, call: Call) -> Self {
        match (above, call) {
            (true, Call::HallUp) => Mode::RetrieveAboveUp,
            (true, Call::HallDown) => Mode::RetrieveAboveDown,
            (false, Call::HallUp) => Mode::RetrieveBelowUp,
            (false, Call::HallDown) => Mode::RetrieveBelowDown,
        }
    }

    pub fn as_string(self) -> String {
        match self {
            Mode::Up => String::from("up"),
            Mode::Down => String::from("down"),
            Mode::Neutral => String::from("neutral"),
            Mode::RetrieveAboveUp => String::from("fetch ^ up"),
            Mode::RetrieveAboveDown => String::from("fetch ^ dn"),
            Mode::RetrieveBelowUp => String::from("fetch v up"),
            Mode::RetrieveBelowDown => String::from("fetch v dn"),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<Call> for Mode {
    fn from(call: Call) -> Self {
        match call {
            Call::HallUp => Mode::Up,
            Call::HallDown => Mode::Down,
        }
    }
}

/// Only the plain `Up`/`Down` modes correspond to a physical hall button.
impl TryFrom<Mode> for Call {
    type Error = ValidationError;

    fn try_from(mode: Mode) -> Result<Self, Self::Error> {
        match mode {
            Mode::Up => Ok(Call::HallUp),
            Mode::Down => Ok(Call::HallDown),
            other => Err(ValidationError::NotDirectional(other)),
        }
    }
}
