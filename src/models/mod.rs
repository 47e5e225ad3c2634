pub mod request;
pub mod screening;
pub mod seat;

pub use request::{Priority, PriorityRequest};
pub use screening::{ScheduledItem, TimeOfDay};
pub use seat::{SeatEntry, SeatId};
