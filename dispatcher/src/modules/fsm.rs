//! ----- FSM MODULE -----
//! One of these runs per elevator. It owns the elevator outright, ticks the
//! scheduler on a clock, runs the door cycle when the scheduler stops, and
//! dwells at the stop before moving on. Cabin requests and resets arrive
//! between ticks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{select, tick, Receiver, Sender};
use log::{error, info, warn};
use parking_lot::Mutex;
use shared_resources::config::TimingConfig;
use shared_resources::notification::Notification;

use crate::utilities::actions::DoorCommand;
use crate::utilities::elevator::Elevator;
use crate::utilities::elevator_status::ElevatorStatus;
use crate::utilities::request_board::RequestBoard;
use crate::utilities::scheduler::{self, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerCommand {
    CabRequest(u8),
    Reset,
}

pub fn main(
    mut elevator: Elevator,
    timing: TimingConfig,
    board: Arc<Mutex<RequestBoard>>,
    command_rx: Receiver<WorkerCommand>,
    mut doors_tx: Sender<DoorCommand>,
    notification_tx: Sender<Notification>,
    elevator_status_tx: Sender<ElevatorStatus>,
) {
    let timer = tick(Duration::from_millis(timing.tick_period_ms));
    let dwell = Duration::from_millis(timing.door_open_ms);
    let mut dwell_until: Option<Instant> = None;
    let mut last_status: Option<ElevatorStatus> = None;

    loop {
        select! {
            recv(command_rx) -> msg => {
                match msg {
                    Ok(WorkerCommand::CabRequest(floor)) => {
                        match elevator.request_from_cabin(floor) {
                            Ok(()) => info!("elevator {} cabin request for floor {}", elevator.id() + 1, floor + 1),
                            Err(e) => warn!("elevator {} rejected cabin request: {}", elevator.id() + 1, e),
                        }
                    },
                    Ok(WorkerCommand::Reset) => {
                        elevator.reset(&notification_tx);
                        dwell_until = None;
                    },
                    // dispatcher is shutting down
                    Err(_) => return,
                }
            },
            recv(timer) -> _ => {
                let dwelling = dwell_until.map_or(false, |until| Instant::now() < until);
                if !dwelling {
                    dwell_until = None;
                    let mut board = board.lock();
                    match scheduler::tick(&mut elevator, &board, &notification_tx) {
                        Ok(Step::Stop) => {
                            info!("elevator {} stopping on floor {}", elevator.id() + 1, elevator.floor() + 1);
                            match scheduler::open(&mut elevator, &mut board, &mut doors_tx, &notification_tx) {
                                Ok(()) => dwell_until = Some(Instant::now() + dwell),
                                Err(violation) => error!("{}", violation),
                            }
                        },
                        Ok(Step::Moved { .. } | Step::ModeChanged { .. } | Step::Idle) => {},
                        Err(violation) => error!("{}", violation),
                    }
                }
            },
        }

        let status = ElevatorStatus::from_elevator(&elevator, dwell_until.is_some());
        if last_status.as_ref() != Some(&status) {
            if elevator_status_tx.send(status.clone()).is_err() {
                return;
            }
            last_status = Some(status);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use crossbeam_channel::unbounded;

    use super::*;
    use crate::utilities::mode::Mode;

    #[test]
    fn worker_serves_a_cabin_request() {
        let board = Arc::new(Mutex::new(RequestBoard::new(5)));
        let (command_tx, command_rx) = unbounded();
        let (doors_tx, doors_rx) = unbounded();
        let (notification_tx, notification_rx) = unbounded();
        let (status_tx, status_rx) = unbounded();
        let timing = TimingConfig { tick_period_ms: 1, door_open_ms: 1 };

        let worker_board = board.clone();
        let handle = thread::spawn(move || {
            main(Elevator::new(0, 5), timing, worker_board, command_rx, doors_tx, notification_tx, status_tx)
        });

        command_tx.send(WorkerCommand::CabRequest(3)).unwrap();
        let opened = notification_rx
            .iter()
            .find(|notification| matches!(notification, Notification::DoorOpened { .. }))
            .unwrap();
        assert_eq!(opened, Notification::DoorOpened { elevator: 0, floor: 3 });
        assert_eq!(doors_rx.recv().unwrap(), DoorCommand { elevator: 0, floor: 3, open: true });

        let settled = status_rx
            .iter()
            .find(|status| status.mode == Mode::Neutral && status.floor == 3 && !status.dwelling)
            .unwrap();
        assert!(settled.ascending.is_empty());

        drop(command_tx);
        handle.join().unwrap();
    }
}
