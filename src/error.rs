use thiserror::Error;

use crate::models::SeatId;

/// Ошибки операций над местами, очередями и каталогом
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Seat {0} does not exist")]
    NotFound(SeatId),

    #[error("Seat {0} is already booked")]
    AlreadyBooked(SeatId),

    #[error("Seat {0} is not booked")]
    NotBooked(SeatId),

    #[error("Seat {0} already exists")]
    DuplicateKey(SeatId),

    #[error("Seat index is full ({capacity} seats)")]
    CapacityExceeded { capacity: usize },

    #[error("Queue is empty")]
    Empty,

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Unknown screening: {0}")]
    UnknownScreening(String),

    #[error("Screening {0} already exists")]
    DuplicateScreening(String),
}

pub type BookingResult<T> = Result<T, BookingError>;
