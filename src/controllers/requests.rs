use std::io::{self, BufRead, Write};

use super::Session;
use crate::error::BookingError;
use crate::models::Priority;

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn add_request(&mut self) -> io::Result<()> {
        let Some(name) = self.ask("Enter customer name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            return self.out.failure("Customer name cannot be empty.");
        }
        let Some(age) = self.ask("Enter customer age: ")? else {
            return Ok(());
        };
        let Ok(age) = age.parse::<Priority>() else {
            return self.out.failure("Invalid age.");
        };

        self.state.requests.insert(name.as_str(), age);
        self.out.success(&format!("Request for {name} added (Age: {age})."))
    }

    pub(crate) fn serve_request(&mut self) -> io::Result<()> {
        match self.state.requests.extract_max() {
            Ok(request) => self.out.success(&format!(
                "Processing request for {} (Age: {})",
                request.label, request.priority
            )),
            Err(BookingError::Empty) => self.out.failure("No pending requests."),
            Err(e) => self.report(&e),
        }
    }

    pub(crate) fn view_requests(&mut self) -> io::Result<()> {
        let pending = self.state.requests.peek_all();
        if pending.is_empty() {
            return self.out.failure("No pending requests.");
        }

        self.out.header("Pending requests:")?;
        for request in pending {
            self.out
                .plain(&format!("  {} (Age: {})", request.label, request.priority))?;
        }
        Ok(())
    }
}
