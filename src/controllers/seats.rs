use std::io::{self, BufRead, Write};

use super::Session;
use crate::models::SeatId;

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn view_seats(&mut self) -> io::Result<()> {
        let Some(title) = self.require_selection()? else {
            return Ok(());
        };

        self.out.plain("")?;
        self.out.header(&format!("Seats for {title}:"))?;
        let listed = self.state.catalog.get(&title).map(|seats| {
            seats
                .iter()
                .map(|seat| format!("  Seat {} ({})", seat.id, seat.status()))
                .collect::<Vec<_>>()
        });
        let lines = match listed {
            Ok(lines) => lines,
            Err(e) => return self.report(&e),
        };

        if lines.is_empty() {
            return self.out.failure("No seats available.");
        }
        for line in lines {
            self.out.listing(&line)?;
        }
        Ok(())
    }

    pub(crate) fn book_seat(&mut self) -> io::Result<()> {
        let Some(title) = self.require_selection()? else {
            return Ok(());
        };
        let Some(id) = self.ask_seat_id("Enter seat number to book: ")? else {
            return Ok(());
        };

        match self.state.catalog.get_mut(&title).and_then(|seats| seats.book(id)) {
            Ok(()) => self.out.success(&format!("Seat {id} successfully booked.")),
            Err(e) => self.report(&e),
        }
    }

    pub(crate) fn cancel_booking(&mut self) -> io::Result<()> {
        let Some(title) = self.require_selection()? else {
            return Ok(());
        };
        let Some(id) = self.ask_seat_id("Enter seat number to cancel booking: ")? else {
            return Ok(());
        };

        match self.state.catalog.get_mut(&title).and_then(|seats| seats.cancel(id)) {
            Ok(_) => self.out.success(&format!(
                "Booking for Seat {id} successfully canceled and seat deleted."
            )),
            Err(e) => self.report(&e),
        }
    }

    pub(crate) fn add_seat(&mut self) -> io::Result<()> {
        let Some(title) = self.require_selection()? else {
            return Ok(());
        };
        let Some(id) = self.ask_seat_id("Enter seat number to add: ")? else {
            return Ok(());
        };

        match self.state.catalog.get_mut(&title).and_then(|seats| seats.add(id)) {
            Ok(()) => self.out.success(&format!("Seat {id} successfully added.")),
            Err(e) => self.report(&e),
        }
    }

    pub(crate) fn delete_seat(&mut self) -> io::Result<()> {
        let Some(title) = self.require_selection()? else {
            return Ok(());
        };
        let Some(id) = self.ask_seat_id("Enter seat number to delete: ")? else {
            return Ok(());
        };

        match self.state.catalog.get_mut(&title).and_then(|seats| seats.remove(id)) {
            Ok(_) => self.out.success(&format!("Seat {id} successfully deleted.")),
            Err(e) => self.report(&e),
        }
    }

    // Все операции с местами работают только с выбранным сеансом
    fn require_selection(&mut self) -> io::Result<Option<String>> {
        let current = self.state.current.clone();
        if current.is_none() {
            self.out.failure("Please select a screening first.")?;
        }
        Ok(current)
    }

    fn ask_seat_id(&mut self, prompt: &str) -> io::Result<Option<SeatId>> {
        let Some(answer) = self.ask(prompt)? else {
            return Ok(None);
        };
        match answer.parse::<SeatId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.out.failure("Invalid seat number.")?;
                Ok(None)
            }
        }
    }
}
