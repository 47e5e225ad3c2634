use std::collections::btree_map::{BTreeMap, Entry};
use tracing::{info, warn};

use crate::config::CatalogConfig;
use crate::error::{BookingError, BookingResult};
use crate::models::TimeOfDay;
use crate::services::{EarliestFirstQueue, SeatIndex};

/// Каталог сеансов: название -> места. Принадлежит диспетчеру, ядро о нём
/// ничего не знает.
#[derive(Debug, Default)]
pub struct Catalog {
    screenings: BTreeMap<String, SeatIndex>,
    seat_capacity: Option<usize>,
}

impl Catalog {
    pub fn new(seat_capacity: Option<usize>) -> Self {
        Self {
            screenings: BTreeMap::new(),
            seat_capacity,
        }
    }

    // Заполнение каталога при старте: места 1..=N для каждого сеанса
    // и сеанс в расписании
    pub fn seed(config: &CatalogConfig, schedule: &mut EarliestFirstQueue) -> BookingResult<Self> {
        info!("Seeding catalog with {} screenings", config.screenings.len());

        let mut catalog = Self::new(config.seat_capacity);
        for screening in &config.screenings {
            let starts_at: TimeOfDay = screening.starts_at.parse()?;
            catalog.register(&screening.title, config.seats_per_screening)?;
            schedule.insert(screening.title.as_str(), starts_at);
        }

        info!("Catalog ready: {} screenings", catalog.len());
        Ok(catalog)
    }

    /// Новый сеанс с местами `1..=seat_count`. Места сверх лимита не создаются.
    pub fn register(&mut self, title: &str, seat_count: u32) -> BookingResult<&mut SeatIndex> {
        let slot = match self.screenings.entry(title.to_string()) {
            Entry::Occupied(_) => return Err(BookingError::DuplicateScreening(title.to_string())),
            Entry::Vacant(slot) => slot,
        };

        let mut seats = match self.seat_capacity {
            Some(limit) => SeatIndex::with_seat_limit(limit),
            None => SeatIndex::new(),
        };
        for id in 1..=seat_count {
            match seats.add(id) {
                Ok(()) => {}
                Err(BookingError::CapacityExceeded { capacity }) => {
                    warn!("Screening {} capped at {} seats", title, capacity);
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        info!("Registered screening {} with {} seats", title, seats.len());
        Ok(slot.insert(seats))
    }

    pub fn get(&self, title: &str) -> BookingResult<&SeatIndex> {
        self.screenings
            .get(title)
            .ok_or_else(|| BookingError::UnknownScreening(title.to_string()))
    }

    pub fn get_mut(&mut self, title: &str) -> BookingResult<&mut SeatIndex> {
        self.screenings
            .get_mut(title)
            .ok_or_else(|| BookingError::UnknownScreening(title.to_string()))
    }

    pub fn contains(&self, title: &str) -> bool {
        self.screenings.contains_key(title)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.screenings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.screenings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screenings.is_empty()
    }
}
