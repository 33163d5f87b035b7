//! Pure countdown state machine for the study session timer. Scheduling of
//! the one-second ticks lives in the view; this type only transitions.

pub const DEFAULT_MINUTES: u32 = 25;

#[derive(Clone, Copy, PartialEq)]
pub struct TimerPreset {
    pub label: &'static str,
    pub minutes: u32,
}

pub const PRESETS: &[TimerPreset] = &[
    TimerPreset { label: "Vocab 10' + Lectura 15'", minutes: 25 },
    TimerPreset { label: "Escritura 20' + Corrección 10'", minutes: 30 },
    TimerPreset { label: "Repaso rápido 15'", minutes: 15 },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Countdown {
    minutes: u32,
    seconds: u32,
    running: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_MINUTES)
    }
}

impl Countdown {
    pub fn new(minutes: u32) -> Self {
        Self {
            minutes,
            seconds: 0,
            running: false,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops ticking without touching the remaining time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Back to the default preset, stopped.
    pub fn reset(&mut self) {
        *self = Self::new(DEFAULT_MINUTES);
    }

    /// Sets the remaining time. Does not change the running flag, so a
    /// preset chosen mid-session keeps counting from the new time.
    pub fn apply_preset(&mut self, minutes: u32) {
        self.minutes = minutes;
        self.seconds = 0;
    }

    /// One second elapses. Returns `true` exactly once, on the tick taken
    /// at 00:00, which also stops the timer. Ticks while paused are no-ops.
    #[must_use]
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.seconds == 0 {
            if self.minutes == 0 {
                self.running = false;
                return true;
            }
            self.minutes -= 1;
            self.seconds = 59;
        } else {
            self.seconds -= 1;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_one_ticks_from_25_00_reach_23_59_still_running() {
        let mut timer = Countdown::default();
        timer.start();
        for _ in 0..61 {
            assert!(!timer.tick());
        }
        assert_eq!((timer.minutes(), timer.seconds()), (23, 59));
        assert!(timer.is_running());
    }

    #[test]
    fn pause_freezes_the_remaining_time() {
        let mut timer = Countdown::default();
        timer.start();
        let _ = timer.tick();
        timer.pause();
        for _ in 0..10 {
            assert!(!timer.tick());
        }
        assert_eq!((timer.minutes(), timer.seconds()), (24, 59));
        assert!(!timer.is_running());
    }

    #[test]
    fn completes_once_and_stops_itself() {
        let mut timer = Countdown::new(0);
        timer.start();
        assert!(timer.tick());
        assert!(!timer.is_running());
        assert_eq!((timer.minutes(), timer.seconds()), (0, 0));
        // paused at zero; further ticks do not re-fire
        assert!(!timer.tick());
    }

    #[test]
    fn runs_down_a_full_minute() {
        let mut timer = Countdown::new(1);
        timer.start();
        for _ in 0..60 {
            assert!(!timer.tick());
        }
        assert_eq!((timer.minutes(), timer.seconds()), (0, 0));
        assert!(timer.tick());
    }

    #[test]
    fn reset_restores_the_default_stopped() {
        let mut timer = Countdown::new(1);
        timer.start();
        let _ = timer.tick();
        timer.reset();
        assert_eq!((timer.minutes(), timer.seconds()), (DEFAULT_MINUTES, 0));
        assert!(!timer.is_running());
    }

    #[test]
    fn presets_set_time_without_changing_the_running_flag() {
        let mut timer = Countdown::default();
        timer.apply_preset(15);
        assert_eq!((timer.minutes(), timer.seconds()), (15, 0));
        assert!(!timer.is_running());

        timer.start();
        timer.apply_preset(30);
        assert!(timer.is_running());
        assert_eq!((timer.minutes(), timer.seconds()), (30, 0));
    }

    #[test]
    fn display_is_zero_padded() {
        let mut timer = Countdown::new(5);
        assert_eq!(timer.display(), "05:00");
        timer.start();
        let _ = timer.tick();
        assert_eq!(timer.display(), "04:59");
    }
}
