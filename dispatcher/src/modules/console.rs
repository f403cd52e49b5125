//! ----- CONSOLE MODULE -----
//! Stands in for the button panels: reads operator commands from a line
//! based input and forwards every parsed line, mistakes included.

use std::io::BufRead;

use crossbeam_channel::Sender;
use log::warn;

use crate::utilities::command::{Command, CommandError};

pub fn main<R: BufRead>(input: R, command_tx: Sender<Result<Command, CommandError>>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("could not read console input: {}", e);
                break;
            }
        };
        let parsed = line.parse::<Command>();
        if parsed == Err(CommandError::Empty) {
            continue;
        }
        if command_tx.send(parsed).is_err() {
            return;
        }
    }
    // input closed -> nothing more will ever arrive
    let _ = command_tx.send(Ok(Command::Quit));
}
