use tracing::debug;

use super::queue::{HeapOrder, KeyedHeap};
use crate::error::BookingResult;
use crate::models::{Priority, PriorityRequest};

/// Старший по приоритету клиент стоит в корне
pub struct HighestPriority;

impl HeapOrder for HighestPriority {
    type Item = PriorityRequest;
    const NAME: &'static str = "requests";

    fn outranks(a: &PriorityRequest, b: &PriorityRequest) -> bool {
        a.priority > b.priority
    }
}

pub type HighestPriorityQueue = KeyedHeap<HighestPriority>;

impl KeyedHeap<HighestPriority> {
    pub fn insert(&mut self, label: impl Into<String>, priority: Priority) {
        self.push(PriorityRequest::new(label, priority));
    }

    /// Обслужить следующего клиента. На пустой очереди - `BookingError::Empty`.
    pub fn extract_max(&mut self) -> BookingResult<PriorityRequest> {
        let request = self.pop()?;
        debug!(label = %request.label, priority = request.priority, "request served");
        Ok(request)
    }
}
