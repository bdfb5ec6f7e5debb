use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const INITIAL_SPEED_MS: u32 = 120;
pub const MIN_SPEED_MS: u32 = 60;
pub const SPEED_DECREMENT_MS: u32 = 6;
pub const INPUT_QUEUE_CAPACITY: u32 = 3;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameSettings {
    pub cols: u32,
    pub rows: u32,
    pub initial_speed_ms: u32,
    pub min_speed_ms: u32,
    pub speed_decrement_ms: u32,
    pub input_queue_capacity: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            cols: 20,
            rows: 30,
            initial_speed_ms: INITIAL_SPEED_MS,
            min_speed_ms: MIN_SPEED_MS,
            speed_decrement_ms: SPEED_DECREMENT_MS,
            input_queue_capacity: INPUT_QUEUE_CAPACITY,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.cols < 4 || self.cols > 100 {
            return Err(format!("cols must be between 4 and 100, got {}", self.cols));
        }
        if self.rows < 4 || self.rows > 100 {
            return Err(format!("rows must be between 4 and 100, got {}", self.rows));
        }
        if self.initial_speed_ms < 50 || self.initial_speed_ms > 5000 {
            return Err(format!(
                "initial_speed_ms must be between 50 and 5000, got {}",
                self.initial_speed_ms
            ));
        }
        if self.min_speed_ms < 16 || self.min_speed_ms > self.initial_speed_ms {
            return Err(format!(
                "min_speed_ms must be between 16 and initial_speed_ms, got {}",
                self.min_speed_ms
            ));
        }
        if self.speed_decrement_ms == 0 || self.speed_decrement_ms > self.initial_speed_ms {
            return Err(format!(
                "speed_decrement_ms must be between 1 and initial_speed_ms, got {}",
                self.speed_decrement_ms
            ));
        }
        if self.input_queue_capacity == 0 || self.input_queue_capacity > 10 {
            return Err(format!(
                "input_queue_capacity must be between 1 and 10, got {}",
                self.input_queue_capacity
            ));
        }
        Ok(())
    }
}
