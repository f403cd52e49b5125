use std::io;
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{select, unbounded, Sender};
use log::{debug, info, log, warn, Level};
use parking_lot::Mutex;
use shared_resources::config::ConfigFile;
use shared_resources::notification::Notification;

use crate::cli::EventsMode;
use crate::utilities::command::Command;
use crate::utilities::debug::Debug;
use crate::utilities::elevator::Elevator;
use crate::utilities::elevator_status::ElevatorStatus;
use crate::utilities::error::ValidationError;
use crate::utilities::request_board::RequestBoard;

mod fsm;
mod console;

use fsm::WorkerCommand;

pub fn run(config: ConfigFile, events: EventsMode) -> io::Result<()> {
    let num_floors = config.elevator.num_floors;
    let num_elevators = config.elevator.num_elevators;

    // INITIALIZE SHARED STATE AND CHANNELS
    let board = Arc::new(Mutex::new(RequestBoard::new(num_floors)));
    let (command_tx, command_rx) = unbounded();
    let (doors_tx, doors_rx) = unbounded();
    let (notification_tx, notification_rx) = unbounded();
    let (elevator_status_tx, elevator_status_rx) = unbounded();

    // INITIALIZE ONE STATE MACHINE THREAD PER ELEVATOR
    let mut workers: Vec<Sender<WorkerCommand>> = Vec::with_capacity(num_elevators);
    for id in 0..num_elevators {
        let (worker_tx, worker_rx) = unbounded();
        let board = board.clone();
        let timing = config.timing.clone();
        let doors_tx = doors_tx.clone();
        let notification_tx = notification_tx.clone();
        let elevator_status_tx = elevator_status_tx.clone();
        thread::Builder::new().name(format!("fsm_{}", id)).spawn(move || fsm::main(
            Elevator::new(id, num_floors),
            timing,
            board,
            worker_rx,
            doors_tx,
            notification_tx,
            elevator_status_tx,
        ))?;
        workers.push(worker_tx);
    }

    // INITIALIZE CONSOLE INPUT
    thread::Builder::new().name("console".to_string()).spawn(move || {
        console::main(io::stdin().lock(), command_tx)
    })?;

    let mut statuses: Vec<ElevatorStatus> = (0..num_elevators).map(ElevatorStatus::new).collect();
    let mut debug = Debug::new(num_floors);
    let redraw = |debug: &mut Debug, statuses: &[ElevatorStatus]| -> io::Result<()> {
        if events == EventsMode::Table {
            let hall_requests: Vec<[bool; 2]> = {
                let board = board.lock();
                (0..num_floors).map(|floor| board.get_requests_at_floor(floor)).collect()
            };
            debug.printstatus(&hall_requests, statuses)?;
        }
        Ok(())
    };
    redraw(&mut debug, &statuses)?;

    loop {
        select! {
            recv(command_rx) -> msg => {
                match msg.unwrap_or(Ok(Command::Quit)) {
                    Err(e) => feedback(events, &mut debug, Level::Warn, e.to_string()),
                    Ok(Command::HallCall { floor, direction }) => {
                        match board.lock().register_hall_call(floor, direction) {
                            Ok(()) => feedback(events, &mut debug, Level::Info, format!("hall call {} on floor {}", direction, floor + 1)),
                            Err(e) => feedback(events, &mut debug, Level::Warn, format!("rejected hall call: {}", e)),
                        }
                    },
                    Ok(Command::CabRequest { elevator, floor }) => {
                        let worker = if floor >= num_floors {
                            Err(ValidationError::FloorOutOfRange { floor, num_floors })
                        } else {
                            workers.get(elevator).ok_or(ValidationError::ElevatorOutOfRange { elevator, num_elevators })
                        };
                        match worker {
                            Ok(worker) => { forward(elevator, worker, WorkerCommand::CabRequest(floor)); },
                            Err(e) => feedback(events, &mut debug, Level::Warn, format!("rejected cabin request: {}", e)),
                        }
                    },
                    Ok(Command::Reset) => {
                        feedback(events, &mut debug, Level::Info, String::from("resetting all elevators"));
                        board.lock().clear_all();
                        for (id, worker) in workers.iter().enumerate() {
                            forward(id, worker, WorkerCommand::Reset);
                        }
                    },
                    Ok(Command::Status) => {
                        let report = status_report(&board.lock(), &statuses);
                        for line in report {
                            feedback(events, &mut debug, Level::Info, line);
                        }
                    },
                    Ok(Command::Quit) => {
                        info!("STOPPING PROGRAM...");
                        return Ok(())
                    },
                }
                redraw(&mut debug, &statuses)?;
            },
            recv(elevator_status_rx) -> msg => {
                if let Ok(status) = msg {
                    let id = status.id;
                    if let Some(slot) = statuses.get_mut(id) {
                        *slot = status;
                    }
                    redraw(&mut debug, &statuses)?;
                }
            },
            recv(notification_rx) -> msg => {
                if let Ok(notification) = msg {
                    publish(events, &mut debug, notification);
                    redraw(&mut debug, &statuses)?;
                }
            },
            recv(doors_rx) -> msg => {
                if let Ok(door) = msg {
                    debug!("door panel: {:?}", door);
                }
            },
        }
    }
}

fn publish(events: EventsMode, debug: &mut Debug, notification: Notification) {
    match events {
        EventsMode::Table => debug.record(notification),
        EventsMode::Log => info!("{}", notification),
        EventsMode::Json => match serde_json::to_string(&notification) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!("could not encode {:?}: {}", notification, e),
        },
    }
}

/// Operator feedback: part of the redrawn tables in table mode, a log line
/// otherwise.
fn feedback(events: EventsMode, debug: &mut Debug, level: Level, message: String) {
    match events {
        EventsMode::Table => debug.note(message),
        EventsMode::Log | EventsMode::Json => log!(level, "{}", message),
    }
}

/// Returns false when the worker thread is gone and the command was dropped.
fn forward(id: usize, worker: &Sender<WorkerCommand>, command: WorkerCommand) -> bool {
    match worker.send(command) {
        Ok(()) => true,
        Err(e) => {
            warn!("elevator {} is not running, {:?} dropped", id + 1, e.into_inner());
            false
        }
    }
}

fn status_report(board: &RequestBoard, statuses: &[ElevatorStatus]) -> Vec<String> {
    let pending: Vec<String> = board
        .pending()
        .map(|request| format!("{} on floor {}", request.call, request.floor + 1))
        .collect();
    let mut report = vec![format!("pending hall calls: [{}]", pending.join(", "))];
    for status in statuses {
        let target = status
            .destination
            .map(|floor| format!(" for floor {}", floor + 1))
            .unwrap_or_default();
        report.push(format!(
            "elevator {} on floor {}, {}{}, queue {}",
            status.id + 1,
            status.floor + 1,
            status.mode,
            target,
            status.queue_string(),
        ));
    }
    report
}
