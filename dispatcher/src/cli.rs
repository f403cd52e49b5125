use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use shared_resources::config::ConfigFile;

/// How notifications reach the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EventsMode {
    /// Redraw the status tables in place.
    #[default]
    Table,
    /// One log line per event.
    Log,
    /// One JSON object per event on stdout.
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "dispatcher", version, about = "Dispatch a bank of elevators from an operator console")]
pub struct Args {
    /// Configuration file (defaults to config.json, then _config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub floors: Option<u8>,

    #[arg(long)]
    pub elevators: Option<usize>,

    /// Milliseconds between scheduler ticks
    #[arg(long = "tick-ms")]
    pub tick_ms: Option<u64>,

    /// Milliseconds an elevator dwells at a stop
    #[arg(long = "door-ms")]
    pub door_ms: Option<u64>,

    #[arg(long, value_enum, default_value_t = EventsMode::Table)]
    pub events: EventsMode,
}

impl Args {
    /// Command-line values win over the configuration file.
    pub fn apply(&self, config: &mut ConfigFile) {
        if let Some(floors) = self.floors {
            config.elevator.num_floors = floors;
        }
        if let Some(elevators) = self.elevators {
            config.elevator.num_elevators = elevators;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.timing.tick_period_ms = tick_ms;
        }
        if let Some(door_ms) = self.door_ms {
            config.timing.door_open_ms = door_ms;
        }
    }

    pub fn default_log_filter(&self) -> &'static str {
        match self.events {
            EventsMode::Table => "warn",
            EventsMode::Log | EventsMode::Json => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_file() {
        let args = Args::try_parse_from(["dispatcher", "--floors", "8", "--tick-ms", "100", "--events", "json"]).unwrap();
        let mut config = ConfigFile::default();
        args.apply(&mut config);

        assert_eq!(config.elevator.num_floors, 8);
        assert_eq!(config.elevator.num_elevators, 2);
        assert_eq!(config.timing.tick_period_ms, 100);
        assert_eq!(args.events, EventsMode::Json);
        assert_eq!(args.default_log_filter(), "info");
    }

    #[test]
    fn table_mode_is_default_and_quiet() {
        let args = Args::try_parse_from(["dispatcher"]).unwrap();
        assert_eq!(args.events, EventsMode::Table);
        assert_eq!(args.default_log_filter(), "warn");
    }
}
