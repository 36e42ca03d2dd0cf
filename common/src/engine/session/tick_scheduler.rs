/// Lets a simulation step through on every `divisor`-th poll, so input can be
/// polled faster than the snake moves.
#[derive(Clone, Debug)]
pub struct TickScheduler {
    divisor: u32,
    frame_count: u32,
}

impl TickScheduler {
    pub fn new(divisor: u32) -> Self {
        Self {
            divisor: divisor.max(1),
            frame_count: 0,
        }
    }

    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    pub fn poll(&mut self) -> bool {
        self.frame_count += 1;
        if self.frame_count >= self.divisor {
            self.frame_count = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.frame_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_every_nth_poll() {
        let mut scheduler = TickScheduler::new(3);
        let ticks: Vec<bool> = (0..9).map(|_| scheduler.poll()).collect();
        assert_eq!(
            ticks,
            vec![false, false, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn test_divisor_one_ticks_every_poll() {
        let mut scheduler = TickScheduler::new(1);
        assert!((0..5).all(|_| scheduler.poll()));
    }

    #[test]
    fn test_zero_divisor_is_clamped() {
        let mut scheduler = TickScheduler::new(0);
        assert_eq!(scheduler.divisor(), 1);
        assert!(scheduler.poll());
    }

    #[test]
    fn test_reset_restarts_count() {
        let mut scheduler = TickScheduler::new(2);
        assert!(!scheduler.poll());
        scheduler.reset();
        assert!(!scheduler.poll());
        assert!(scheduler.poll());
    }
}
