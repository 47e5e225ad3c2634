use serde::{Deserialize, Serialize};

pub type Priority = i64;

/// Обращение клиента в очереди обслуживания (приоритет = возраст)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRequest {
    pub label: String,
    pub priority: Priority,
}

impl PriorityRequest {
    pub fn new(label: impl Into<String>, priority: Priority) -> Self {
        Self {
            label: label.into(),
            priority,
        }
    }
}
