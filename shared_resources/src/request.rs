use super::call::Call;

/// A pressed hall button.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub floor: u8,
    pub call: Call,
}

impl Request {
    pub fn new(floor: u8, call: Call) -> Self {
        Request { floor, call }
    }
}
