use serde::{Deserialize, Serialize};

pub type SeatId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatEntry {
    pub id: SeatId,
    pub booked: bool,
}

impl SeatEntry {
    // Новое место всегда свободно
    pub fn new(id: SeatId) -> Self {
        Self { id, booked: false }
    }

    pub fn status(&self) -> &'static str {
        if self.booked {
            "Booked"
        } else {
            "Available"
        }
    }
}
