use std::time::{Duration, Instant};

/// In-memory stats for the current terminal session. Nothing here is
/// persisted; the high score lives only until the process exits.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    clock_stopped: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            clock_stopped: false,
        }
    }

    pub fn update(&mut self) {
        if !self.clock_stopped {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.clock_stopped = false;
    }

    /// Records the finished game and freezes the clock at its final
    /// elapsed time; the game-over screen shows the game's duration, not
    /// the time spent staring at it.
    pub fn on_game_over(&mut self, final_score: u32) {
        self.elapsed_time = self.start_time.elapsed();
        self.clock_stopped = true;
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::ZERO;
        assert_eq!(metrics.format_time(), "00:00");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_clock_freezes_at_game_over() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(10));
        metrics.on_game_over(4);
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);

        // A restart unfreezes the clock
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(10));
        metrics.update();
        assert!(metrics.elapsed_time >= Duration::from_millis(10));
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() >= 20);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 20);
    }
}
