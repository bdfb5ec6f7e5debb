use std::time::{Duration, Instant};

// Paces the simulation loop. At most one tick is accepted per check; a
// late frame skips the missed intervals instead of queueing catch-up ticks.
#[derive(Clone, Copy, Debug)]
pub struct GameClock {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl GameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn should_tick(&mut self, now: Instant) -> bool {
        match self.last_tick {
            None => {
                // Arm on the first check; the first tick fires one full
                // interval later.
                self.last_tick = Some(now);
                false
            }
            Some(last) if now.duration_since(last) >= self.interval => {
                self.last_tick = Some(now);
                true
            }
            Some(_) => false,
        }
    }

    // Called when leaving and re-entering Running so resuming never fires a
    // spurious immediate tick.
    pub fn rearm(&mut self) {
        self.last_tick = None;
    }
}
