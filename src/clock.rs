// Simulation clock
//
// The composer is a pure function of time. Whoever drives it owns one of
// these and passes `time()` in every frame.

/// Simulation time with variable-rate playback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    /// Current simulation time, in the unit the body periods use.
    time: f32,
    /// Simulation time units per real second. Negative runs time backwards.
    rate: f32,
    paused: bool,
}

impl SimulationClock {
    pub fn new(rate: f32) -> Self {
        Self {
            time: 0.0,
            rate,
            paused: false,
        }
    }

    /// Start at a specific simulation time.
    pub fn starting_at(time: f32, rate: f32) -> Self {
        Self {
            time,
            rate,
            paused: false,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance by a real-world delta and return the new simulation time.
    pub fn tick(&mut self, real_dt_seconds: f32) -> f32 {
        if !self.paused {
            self.time += real_dt_seconds * self.rate;
        }
        self.time
    }
}

impl Default for SimulationClock {
    /// One simulated hour per real second.
    fn default() -> Self {
        Self::new(1.0)
    }
}
