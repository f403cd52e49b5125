pub mod cli;
pub mod modules;
pub mod utilities;

pub use utilities::actions::{DoorActuator, DoorCommand, NotificationSink};
pub use utilities::building::Building;
pub use utilities::error::{DispatchError, InvariantViolation, ValidationError};
pub use utilities::mode::Mode;
pub use utilities::scheduler::Step;
