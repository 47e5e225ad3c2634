use tracing::debug;

use super::queue::{HeapOrder, KeyedHeap};
use crate::error::BookingResult;
use crate::models::{ScheduledItem, TimeOfDay};

/// Ближайший по времени сеанс стоит в корне
pub struct EarliestFirst;

impl HeapOrder for EarliestFirst {
    type Item = ScheduledItem;
    const NAME: &'static str = "schedule";

    fn outranks(a: &ScheduledItem, b: &ScheduledItem) -> bool {
        a.time_of_day < b.time_of_day
    }
}

pub type EarliestFirstQueue = KeyedHeap<EarliestFirst>;

impl KeyedHeap<EarliestFirst> {
    pub fn insert(&mut self, label: impl Into<String>, time_of_day: TimeOfDay) {
        self.push(ScheduledItem::new(label, time_of_day));
    }

    /// Извлечь ближайший сеанс. На пустой очереди - `BookingError::Empty`.
    pub fn extract_min(&mut self) -> BookingResult<ScheduledItem> {
        let item = self.pop()?;
        debug!(label = %item.label, starts_at = %item.time_of_day, "next screening extracted");
        Ok(item)
    }

    pub fn start_time_of(&self, label: &str) -> Option<TimeOfDay> {
        self.peek_all()
            .into_iter()
            .find(|item| item.label == label)
            .map(|item| item.time_of_day)
    }
}
