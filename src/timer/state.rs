#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPhase {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

/// Result of feeding one periodic tick into the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running; nothing changed
    Ignored,
    Ticked,
    /// This tick brought the countdown to zero
    Completed,
}

/// Countdown state for one focus session.
///
/// The periodic callback that drives `tick` lives in the controller; this
/// type only tracks time and phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTimer {
    duration: u32,
    time_left: u32,
    phase: TimerPhase,
}

impl FocusTimer {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            time_left: duration,
            phase: TimerPhase::Idle,
        }
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Idle/Paused -> Running. Returns true when the caller must schedule ticks.
    pub fn start(&mut self) -> bool {
        match self.phase {
            TimerPhase::Idle | TimerPhase::Paused if self.time_left > 0 => {
                self.phase = TimerPhase::Running;
                true
            }
            _ => false,
        }
    }

    /// Running -> Paused, keeping the remaining time. Returns true when ticks must stop.
    pub fn pause(&mut self) -> bool {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Paused;
            true
        } else {
            false
        }
    }

    /// Any phase -> Idle(duration)
    pub fn reset(&mut self) {
        self.time_left = self.duration;
        self.phase = TimerPhase::Idle;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != TimerPhase::Running {
            return TickOutcome::Ignored;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.phase = TimerPhase::Completed;
            TickOutcome::Completed
        } else {
            TickOutcome::Ticked
        }
    }

    /// Completed -> Idle(duration), once the user has been notified
    pub fn finish(&mut self) {
        if self.phase == TimerPhase::Completed {
            self.reset();
        }
    }

    pub fn display(&self) -> String {
        format_clock(self.time_left)
    }
}

/// Zero-padded `MM:SS`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: u32 = 25 * 60;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(FULL), "25:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn test_full_session_completes_once() {
        let mut timer = FocusTimer::new(FULL);
        assert!(timer.start());

        let mut completions = 0;
        for _ in 0..FULL {
            if timer.tick() == TickOutcome::Completed {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(timer.phase(), TimerPhase::Completed);

        timer.finish();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.display(), "25:00");

        // Stray ticks after completion do nothing
        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.display(), "25:00");
    }

    #[test]
    fn test_pause_then_start_resumes() {
        let mut timer = FocusTimer::new(FULL);
        timer.start();
        for _ in 0..90 {
            timer.tick();
        }
        assert!(timer.pause());
        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.display(), "23:30");

        assert!(timer.start());
        assert_eq!(timer.time_left(), FULL - 90);
        timer.tick();
        assert_eq!(timer.display(), "23:29");
    }

    #[test]
    fn test_reset_from_every_phase() {
        let mut running = FocusTimer::new(FULL);
        running.start();
        running.tick();

        let mut paused = running.clone();
        paused.pause();

        let mut completed = FocusTimer::new(1);
        completed.start();
        completed.tick();
        assert_eq!(completed.phase(), TimerPhase::Completed);

        for mut timer in [FocusTimer::new(FULL), running, paused] {
            timer.reset();
            assert_eq!(timer.phase(), TimerPhase::Idle);
            assert_eq!(timer.display(), "25:00");
            assert_eq!(timer.tick(), TickOutcome::Ignored);
            assert_eq!(timer.display(), "25:00");
        }

        completed.reset();
        assert_eq!(completed.phase(), TimerPhase::Idle);
        assert_eq!(completed.display(), "00:01");
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut timer = FocusTimer::new(FULL);
        assert!(timer.start());
        assert!(!timer.start());
        assert_eq!(timer.phase(), TimerPhase::Running);
        assert!(timer.pause());
        assert!(!timer.pause());
    }

    #[test]
    fn test_completed_does_not_restart_before_finish() {
        let mut timer = FocusTimer::new(2);
        timer.start();
        timer.tick();
        timer.tick();
        assert!(!timer.start());
        timer.finish();
        assert!(timer.start());
    }
}
