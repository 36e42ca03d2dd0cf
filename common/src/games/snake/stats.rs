use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    length: usize,
    apples_eaten: u32,
    bad_apples_eaten: u32,
    reset_count: u32,
    speed: u32,
    last_tick_at: Option<Duration>,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            length: 1,
            apples_eaten: 0,
            bad_apples_eaten: 0,
            reset_count: 0,
            speed: 0,
            last_tick_at: None,
        }
    }
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn apples_eaten(&self) -> u32 {
        self.apples_eaten
    }

    pub fn bad_apples_eaten(&self) -> u32 {
        self.bad_apples_eaten
    }

    pub fn reset_count(&self) -> u32 {
        self.reset_count
    }

    /// Cells per minute, from the gap between the last two ticks.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    pub fn record_apple_eaten(&mut self) {
        self.apples_eaten += 1;
    }

    pub fn record_bad_apple_eaten(&mut self) {
        self.bad_apples_eaten += 1;
    }

    pub fn record_reset(&mut self) {
        self.length = 1;
        self.reset_count += 1;
    }

    /// Speed and its reference timestamp survive a new game.
    pub fn reset_for_new_game(&mut self) {
        self.length = 1;
        self.apples_eaten = 0;
        self.bad_apples_eaten = 0;
        self.reset_count = 0;
    }

    pub fn record_speed(&mut self, now: Duration) {
        if let Some(previous) = self.last_tick_at {
            let elapsed = now.saturating_sub(previous).as_secs_f64();
            if elapsed > 0.0 {
                self.speed = (60.0 / elapsed).round() as u32;
            }
        }
        self.last_tick_at = Some(now);
    }

    pub fn summary(&self) -> String {
        format!(
            "Length: {} || Apples eaten: {} || Resets: {} || Speed: {} cells per minute",
            self.length, self.apples_eaten, self.reset_count, self.speed
        )
    }
}
