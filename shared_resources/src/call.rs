use std::fmt;
use std::str::FromStr;

/// The two hall buttons a floor can carry.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    #[serde(rename = "up")]
    HallUp = 0,
    #[serde(rename = "down")]
    HallDown = 1,
}

impl Call {
    pub fn iter_hall() -> impl Iterator<Item = Call> {
        [Call::HallUp, Call::HallDown].iter().copied()
    }

    pub fn as_string(self) -> String {
        match self {
            Call::HallUp => String::from("up"),
            Call::HallDown => String::from("down"),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl FromStr for Call {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Call::HallUp),
            "down" | "d" => Ok(Call::HallDown),
            other => Err(format!("{} is not a hall button, expected up or down", other)),
        }
    }
}
