pub mod console;
pub mod requests;
pub mod screenings;
pub mod seats;

use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use crate::error::BookingError;
use crate::AppState;
use console::Console;

/// Пункты главного меню, номера как на кассе
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    ViewScreenings,
    ChooseScreening,
    ViewSeats,
    BookSeat,
    CancelBooking,
    AddRequest,
    ServeRequest,
    ViewRequests,
    AddSeat,
    DeleteSeat,
    AddScreening,
    StartNextScreening,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().parse::<u32>().ok()? {
            0 => Self::Exit,
            1 => Self::ViewScreenings,
            2 => Self::ChooseScreening,
            3 => Self::ViewSeats,
            4 => Self::BookSeat,
            5 => Self::CancelBooking,
            6 => Self::AddRequest,
            7 => Self::ServeRequest,
            8 => Self::ViewRequests,
            9 => Self::AddSeat,
            10 => Self::DeleteSeat,
            11 => Self::AddScreening,
            12 => Self::StartNextScreening,
            _ => return None,
        };
        Some(choice)
    }
}

const MENU_LINES: [&str; 13] = [
    "1. View Screenings by Showtime",
    "2. Choose Screening",
    "3. View Seats",
    "4. Book Seat",
    "5. Cancel Booking",
    "6. Add Priority Request",
    "7. Process Next Priority Request",
    "8. View Priority Requests",
    "9. Add Seat",
    "10. Delete Seat",
    "11. Add Screening",
    "12. Start Next Screening",
    "0. Exit",
];

/// Текстовое меню поверх `AppState`. Читает из любого `BufRead`, пишет в
/// любой `Write`, поэтому в тестах его можно вести скриптом.
pub struct Session<R: BufRead, W: Write> {
    state: AppState,
    input: R,
    out: Console<W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(state: AppState, input: R, out: W) -> Self {
        let color = state.config.app.color;
        Self {
            state,
            input,
            out: Console::new(out, color),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_parts(self) -> (AppState, W) {
        (self.state, self.out.into_inner())
    }

    /// Главный цикл: меню, выбор, обработчик. Конец ввода равен выходу.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_banner()?;

        loop {
            self.print_menu()?;
            let Some(line) = self.ask("Enter your choice: ")? else {
                info!("Input closed, leaving menu");
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                self.out.failure("Invalid choice. Please try again.")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                break;
            }
            self.dispatch(choice)?;
        }

        let farewell = format!("Thank you for visiting {}. Goodbye!", self.state.config.app.name);
        self.out.header(&farewell)
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::Exit => Ok(()),
            MenuChoice::ViewScreenings => self.view_screenings(),
            MenuChoice::ChooseScreening => self.choose_screening(),
            MenuChoice::ViewSeats => self.view_seats(),
            MenuChoice::BookSeat => self.book_seat(),
            MenuChoice::CancelBooking => self.cancel_booking(),
            MenuChoice::AddRequest => self.add_request(),
            MenuChoice::ServeRequest => self.serve_request(),
            MenuChoice::ViewRequests => self.view_requests(),
            MenuChoice::AddSeat => self.add_seat(),
            MenuChoice::DeleteSeat => self.delete_seat(),
            MenuChoice::AddScreening => self.add_screening(),
            MenuChoice::StartNextScreening => self.start_next_screening(),
        }
    }

    fn print_banner(&mut self) -> io::Result<()> {
        let rule = "=".repeat(45);
        self.out.banner(&rule)?;
        self.out.banner(&format!("{:^45}", format!("Welcome to {}!", self.state.config.app.name)))?;
        self.out.banner(&format!("{:^45}", "Your entertainment destination!"))?;
        self.out.banner(&rule)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.out.plain("")?;
        self.out.plain("--- Main Menu ---")?;
        match self.state.current.clone() {
            Some(title) => self.out.plain(&format!("Current Screening: {title}"))?,
            None => self.out.failure("No screening selected.")?,
        }
        for line in MENU_LINES {
            self.out.menu(line)?;
        }
        Ok(())
    }

    // Одна строка ввода без перевода строки; None - ввод закончился
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.out.prompt(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: &BookingError) -> io::Result<()> {
        warn!("Operation rejected: {}", err);
        self.out.failure(&format!("{err}."))
    }
}
