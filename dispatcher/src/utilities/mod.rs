pub mod actions;
pub mod building;
pub mod command;
pub mod debug;
pub mod elevator;
pub mod elevator_status;
pub mod error;
pub mod floor_queue;
pub mod mode;
pub mod request_board;
pub mod scheduler;
