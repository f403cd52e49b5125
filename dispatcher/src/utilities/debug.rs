use std::collections::VecDeque;
use std::io::{self, stdout, Stdout, Write};

use crossterm::{cursor, terminal, ExecutableCommand};
use shared_resources::notification::Notification;

use super::elevator_status::ElevatorStatus;

const RECENT_LINES: usize = 8;

/// Redraws the building status in place on the terminal.
pub struct Debug {
    stdout: Stdout,
    num_floors: u8,
    lines_drawn: u16,
    recent: VecDeque<String>,
}

impl Debug {
    pub fn new(num_floors: u8) -> Self {
        Debug {
            stdout: stdout(),
            num_floors,
            lines_drawn: 0,
            recent: VecDeque::with_capacity(RECENT_LINES),
        }
    }

    pub fn record(&mut self, notification: Notification) {
        self.note(notification.to_string());
    }

    /// Operator feedback shown under the tables, oldest lines scroll away.
    pub fn note(&mut self, message: impl Into<String>) {
        if self.recent.len() == RECENT_LINES {
            self.recent.pop_front();
        }
        self.recent.push_back(message.into());
    }

    pub fn recent(&self) -> &VecDeque<String> {
        &self.recent
    }

    pub fn printstatus(&mut self, hall_requests: &[[bool; 2]], statuses: &[ElevatorStatus]) -> io::Result<()> {
        if self.lines_drawn > 0 {
            self.stdout.execute(cursor::MoveUp(self.lines_drawn))?;
        }
        self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

        let lines = render(self.num_floors, hall_requests, statuses, &self.recent);
        for line in &lines {
            writeln!(self.stdout, "{}", line)?;
        }
        self.stdout.flush()?;
        self.lines_drawn = lines.len() as u16;
        Ok(())
    }
}

/// Status tables, one terminal line per entry. Labels count from one.
pub fn render(
    num_floors: u8,
    hall_requests: &[[bool; 2]],
    statuses: &[ElevatorStatus],
    recent: &VecDeque<String>,
) -> Vec<String> {
    let mut lines = Vec::new();
    let cars_border = "+------------".repeat(statuses.len());

    lines.push(format!("+--------------------------------------{}+", cars_border.replace('+', "-")));
    lines.push(format!("| {0:<width$} |", "HALL CALLS", width = 36 + 13 * statuses.len()));
    lines.push(format!("+------------+------------+------------{}+", cars_border));
    let mut header = format!("| {0:<10} | {1:<10} | {2:<10} ", "FLOOR", "HALL UP", "HALL DOWN");
    for status in statuses {
        header.push_str(&format!("| {0:<10} ", format!("ELEV {}", status.id + 1)));
    }
    lines.push(header + "|");
    for floor in (0..num_floors).rev() {
        lines.push(format!("+------------+------------+------------{}+", cars_border));
        let buttons = hall_requests.get(floor as usize).copied().unwrap_or([false; 2]);
        let mut row = format!(
            "| {0:<10} | {1:<10} | {2:<10} ",
            floor + 1,
            if buttons[0] { "^" } else { "" },
            if buttons[1] { "v" } else { "" },
        );
        for status in statuses {
            let marker = if status.floor != floor {
                ""
            } else if status.dwelling {
                "[ ]"
            } else {
                "[#]"
            };
            row.push_str(&format!("| {0:<10} ", marker));
        }
        lines.push(row + "|");
    }
    lines.push(format!("+------------+------------+------------{}+", cars_border));
    lines.push(String::new());

    lines.push(String::from("+------------+------------+------------+------------+------------+"));
    lines.push(format!(
        "| {0:<10} | {1:<10} | {2:<10} | {3:<10} | {4:<10} |",
        "ELEVATOR", "FLOOR", "MODE", "TARGET", "QUEUE"
    ));
    for status in statuses {
        lines.push(String::from("+------------+------------+------------+------------+------------+"));
        let target = status
            .destination
            .map(|floor| (floor + 1).to_string())
            .unwrap_or_else(|| String::from("-"));
        lines.push(format!(
            "| {0:<10} | {1:<10} | {2:<10} | {3:<10} | {4:<10} |",
            status.id + 1,
            status.floor + 1,
            status.mode.as_string(),
            target,
            status.queue_string(),
        ));
    }
    lines.push(String::from("+------------+------------+------------+------------+------------+"));
    lines.push(String::new());

    for message in recent {
        lines.push(format!("  {}", message));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::mode::Mode;

    #[test]
    fn draws_every_floor_and_elevator() {
        let mut second = ElevatorStatus::new(1);
        second.floor = 2;
        second.mode = Mode::RetrieveAboveUp;
        second.destination = Some(3);
        let statuses = vec![ElevatorStatus::new(0), second];
        let hall_requests = vec![[false; 2], [false; 2], [false; 2], [true, false], [false; 2]];
        let mut recent = VecDeque::new();
        recent.push_back(Notification::FloorArrived { elevator: 1, floor: 2 }.to_string());

        let lines = render(5, &hall_requests, &statuses, &recent);
        let text = lines.join("\n");

        assert!(text.contains("ELEV 2"));
        assert!(text.contains("| 4          | ^          |"));
        assert!(text.contains("| 2          | 3          | fetch ^ up | 4          | -          |"));
        assert_eq!(lines.last().map(String::as_str), Some("  elevator 2 is now on floor 3"));

        let widths: Vec<usize> = lines
            .iter()
            .filter(|line| line.starts_with('+'))
            .map(|line| line.len())
            .collect();
        assert!(widths.iter().all(|width| *width == widths[0]));
    }

    #[test]
    fn keeps_only_the_latest_messages() {
        let mut debug = Debug::new(3);
        debug.note("rejected hall call: no down button on floor 1");
        for floor in 0..RECENT_LINES as u8 {
            debug.record(Notification::FloorArrived { elevator: 0, floor });
        }

        assert_eq!(debug.recent().len(), RECENT_LINES);
        assert_eq!(debug.recent().front().map(String::as_str), Some("elevator 1 is now on floor 1"));

        let lines = render(3, &[], &[], debug.recent());
        assert_eq!(lines.last().map(String::as_str), Some("  elevator 1 is now on floor 8"));
    }
}
