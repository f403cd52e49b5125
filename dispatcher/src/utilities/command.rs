use std::str::FromStr;

use shared_resources::call::Call;
use thiserror::Error;

use super::mode::Mode;

/// One line typed at the operator console. Floors and elevators are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    HallCall { floor: u8, direction: Mode },
    CabRequest { elevator: usize, floor: u8 },
    Reset,
    Status,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0}, expected hall, cab, reset, status or quit")]
    Unknown(String),

    #[error("{0} is missing its {1}")]
    MissingArgument(&'static str, &'static str),

    #[error("{0} is not a number")]
    NotANumber(String),

    #[error("{0}")]
    BadDirection(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        match keyword.as_str() {
            "hall" | "h" => {
                let floor = number(words.next(), "hall", "floor")?;
                let direction = words
                    .next()
                    .ok_or(CommandError::MissingArgument("hall", "direction"))?
                    .parse::<Call>()
                    .map_err(CommandError::BadDirection)?;
                Ok(Command::HallCall { floor, direction: Mode::from(direction) })
            }
            "cab" | "c" => {
                let elevator = number(words.next(), "cab", "elevator")?;
                let floor = number(words.next(), "cab", "floor")?;
                Ok(Command::CabRequest { elevator, floor })
            }
            "reset" => Ok(Command::Reset),
            "status" | "s" => Ok(Command::Status),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn number<T: FromStr>(word: Option<&str>, command: &'static str, what: &'static str) -> Result<T, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument(command, what))?;
    word.parse::<T>().map_err(|_| CommandError::NotANumber(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        assert_eq!("hall 3 up".parse::<Command>(), Ok(Command::HallCall { floor: 3, direction: Mode::Up }));
        assert_eq!("H 1 down".parse::<Command>(), Ok(Command::HallCall { floor: 1, direction: Mode::Down }));
        assert_eq!("cab 1 4".parse::<Command>(), Ok(Command::CabRequest { elevator: 1, floor: 4 }));
        assert_eq!("  reset ".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("status".parse::<Command>(), Ok(Command::Status));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn reports_what_is_wrong() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("fly 3".parse::<Command>(), Err(CommandError::Unknown(String::from("fly"))));
        assert_eq!("cab 1".parse::<Command>(), Err(CommandError::MissingArgument("cab", "floor")));
        assert_eq!("hall two up".parse::<Command>(), Err(CommandError::NotANumber(String::from("two"))));
        assert!(matches!("hall 2 left".parse::<Command>(), Err(CommandError::BadDirection(_))));
        assert_eq!("cab -1 2".parse::<Command>(), Err(CommandError::NotANumber(String::from("-1"))));
    }
}
