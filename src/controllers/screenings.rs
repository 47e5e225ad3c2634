use std::io::{self, BufRead, Write};
use tracing::info;

use super::Session;
use crate::error::BookingError;
use crate::models::TimeOfDay;

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn view_screenings(&mut self) -> io::Result<()> {
        let schedule = self.state.schedule.peek_all();

        self.out.plain("")?;
        if schedule.is_empty() {
            return self.out.failure("No screenings scheduled.");
        }
        self.out.header("Screenings by Showtime:")?;
        for item in schedule {
            self.out
                .listing(&format!("  {} - {}", item.label, item.time_of_day))?;
        }
        Ok(())
    }

    pub(crate) fn choose_screening(&mut self) -> io::Result<()> {
        let Some(title) = self.ask("Enter the name of the screening you want to select: ")? else {
            return Ok(());
        };

        if !self.state.catalog.contains(&title) {
            self.state.current = None;
            return self.out.failure("Invalid screening selection. Please try again.");
        }

        self.out.plain(&format!("You selected: {title}"))?;
        if let Some(starts_at) = self.state.schedule.start_time_of(&title) {
            self.out.success(&format!(
                "Thank you for choosing {}. Your chosen screening, '{}', will start at {}.",
                self.state.config.app.name, title, starts_at
            ))?;
        }
        info!("Screening selected: {}", title);
        self.state.current = Some(title);
        Ok(())
    }

    pub(crate) fn add_screening(&mut self) -> io::Result<()> {
        let Some(title) = self.ask("Enter screening title: ")? else {
            return Ok(());
        };
        if title.is_empty() {
            return self.out.failure("Screening title cannot be empty.");
        }
        let Some(starts_at) = self.ask("Enter start time (HH:MM or H:MM AM/PM): ")? else {
            return Ok(());
        };
        let starts_at: TimeOfDay = match starts_at.parse() {
            Ok(time) => time,
            Err(e) => return self.report(&e),
        };

        let seat_count = self.state.config.catalog.seats_per_screening;
        let registered = self
            .state
            .catalog
            .register(&title, seat_count)
            .map(|seats| seats.len());
        match registered {
            Ok(seats) => {
                self.state.schedule.insert(title.as_str(), starts_at);
                self.out.success(&format!(
                    "Screening '{title}' scheduled at {starts_at} with {seats} seats."
                ))
            }
            Err(e) => self.report(&e),
        }
    }

    pub(crate) fn start_next_screening(&mut self) -> io::Result<()> {
        match self.state.schedule.extract_min() {
            Ok(item) => self
                .out
                .success(&format!("Now showing: {} ({})", item.label, item.time_of_day)),
            Err(BookingError::Empty) => self.out.failure("No screenings scheduled."),
            Err(e) => self.report(&e),
        }
    }
}
