use crate::CarouselError;

/// Parameters of an auto-advance schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoAdvanceConfig {
    /// Time between two advances.
    pub interval_ms: u64,
    /// Duration of the page animation when `animated` is set.
    pub animation_duration_ms: u64,
    pub animated: bool,
    /// When false, the timer fires once and then stops.
    pub repeating: bool,
}

impl AutoAdvanceConfig {
    pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 300;

    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            animation_duration_ms: Self::DEFAULT_ANIMATION_DURATION_MS,
            animated: true,
            repeating: true,
        }
    }

    pub fn with_animation_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn with_repeating(mut self, repeating: bool) -> Self {
        self.repeating = repeating;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerState {
    Idle,
    Running { next_due_ms: u64 },
    Paused,
    /// Terminal. A stopped timer never fires again and cannot be restarted.
    Stopped,
}

/// A pausable schedule that asks for one-page advances at a fixed interval.
///
/// The timer does not own a clock. The adapter calls [`Self::poll`] from its frame loop or
/// timer callback with the current time, and the timer reports whether a tick became due.
/// Starting again replaces the running schedule, so there is never more than one.
#[derive(Clone, Debug)]
pub struct AutoAdvanceTimer {
    state: TimerState,
    config: Option<AutoAdvanceConfig>,
    generation: u64,
}

impl Default for AutoAdvanceTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoAdvanceTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            config: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn config(&self) -> Option<AutoAdvanceConfig> {
        self.config
    }

    /// Incremented every time a schedule is (re)created. Ticks from an older generation are
    /// never reported.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    pub fn is_paused(&self) -> bool {
        self.state == TimerState::Paused
    }

    pub fn is_stopped(&self) -> bool {
        self.state == TimerState::Stopped
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        match self.state {
            TimerState::Running { next_due_ms } => Some(next_due_ms),
            _ => None,
        }
    }

    /// Starts (or restarts) the schedule. The first tick is due one interval after `now_ms`.
    pub fn start(&mut self, config: AutoAdvanceConfig, now_ms: u64) -> Result<(), CarouselError> {
        if self.is_stopped() {
            return Err(CarouselError::TimerStopped);
        }
        if config.interval_ms == 0 {
            return Err(CarouselError::InvalidInterval);
        }
        if self.is_running() {
            ctrace!(generation = self.generation, "AutoAdvanceTimer: replacing running schedule");
        }
        self.config = Some(config);
        self.schedule(now_ms, config.interval_ms);
        cdebug!(
            interval_ms = config.interval_ms,
            repeating = config.repeating,
            generation = self.generation,
            "AutoAdvanceTimer::start"
        );
        Ok(())
    }

    /// Suspends a running schedule, keeping its configuration for [`Self::resume`].
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = TimerState::Paused;
        true
    }

    /// Recreates a paused schedule with its original configuration.
    pub fn resume(&mut self, now_ms: u64) -> bool {
        if !self.is_paused() {
            return false;
        }
        let Some(config) = self.config else {
            return false;
        };
        self.schedule(now_ms, config.interval_ms);
        true
    }

    /// Invalidates the schedule and forgets its configuration.
    pub fn stop(&mut self) {
        if !self.is_stopped() {
            cdebug!(generation = self.generation, "AutoAdvanceTimer::stop");
        }
        self.state = TimerState::Stopped;
        self.config = None;
    }

    /// Returns `true` if a tick became due at `now_ms`.
    ///
    /// Overdue ticks collapse into one: after a long stall (a suspended app, a frozen frame
    /// loop) the next tick is scheduled on the first interval boundary after `now_ms`. A
    /// non-repeating schedule fires once and then stops.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let TimerState::Running { next_due_ms } = self.state else {
            return false;
        };
        let Some(config) = self.config else {
            return false;
        };
        if now_ms < next_due_ms {
            return false;
        }

        if !config.repeating {
            self.stop();
            return true;
        }

        let interval = config.interval_ms;
        let missed = (now_ms - next_due_ms) / interval + 1;
        if missed > 1 {
            ctrace!(missed, "AutoAdvanceTimer::poll: collapsing overdue ticks");
        }
        self.state = TimerState::Running {
            next_due_ms: next_due_ms.saturating_add(missed.saturating_mul(interval)),
        };
        true
    }

    fn schedule(&mut self, now_ms: u64, interval_ms: u64) {
        self.generation = self.generation.wrapping_add(1);
        self.state = TimerState::Running {
            next_due_ms: now_ms.saturating_add(interval_ms),
        };
    }
}
