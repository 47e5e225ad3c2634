pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

use tracing::info;

use crate::catalog::Catalog;
use crate::error::BookingResult;
use crate::services::{EarliestFirstQueue, HighestPriorityQueue};

// Состояние кассы: каталог мест, расписание сеансов и очередь обращений.
// Каждая структура меняется только через свои операции, общих данных нет.
pub struct AppState {
    pub config: config::Config,
    pub catalog: Catalog,
    pub schedule: EarliestFirstQueue,
    pub requests: HighestPriorityQueue,
    pub current: Option<String>,
}

impl AppState {
    pub fn new(config: config::Config) -> BookingResult<Self> {
        let mut schedule = EarliestFirstQueue::new();
        let catalog = Catalog::seed(&config.catalog, &mut schedule)?;
        info!(
            "State ready: {} screenings, {} scheduled",
            catalog.len(),
            schedule.len()
        );

        Ok(Self {
            config,
            catalog,
            schedule,
            requests: HighestPriorityQueue::new(),
            current: None,
        })
    }
}
