pub mod queue;
pub mod requests;
pub mod schedule;
pub mod seat_index;

pub use queue::{HeapOrder, KeyedHeap};
pub use requests::HighestPriorityQueue;
pub use schedule::EarliestFirstQueue;
pub use seat_index::{SeatIndex, SeatIter};
