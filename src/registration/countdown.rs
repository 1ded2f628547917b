//! Resend cooldown.
//!
//! [`Countdown`] is the pure value: whole seconds left, decremented once per
//! tick and never below zero. [`CooldownTicker`] drives it on native targets;
//! the browser UI drives the same value from a Leptos interval.

use std::time::Duration;

/// Seconds before a new code may be requested.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// Cadence of the cooldown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    start: u32,
    remaining: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(RESEND_COOLDOWN_SECS)
    }
}

impl Countdown {
    #[must_use]
    pub const fn new(start: u32) -> Self {
        Self {
            start,
            remaining: start,
        }
    }

    /// Decrements by one second and returns what is left.
    pub const fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub const fn reset(&mut self) {
        self.remaining = self.start;
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use self::ticker::CooldownTicker;

#[cfg(not(target_arch = "wasm32"))]
mod ticker {
    use std::time::Duration;
    use tokio::{
        task::JoinHandle,
        time::{Instant, MissedTickBehavior, interval_at},
    };
    use tracing::trace;

    /// Repeating task that calls `on_tick` every `period` until cancelled.
    /// Dropping the ticker cancels it, so ticks stop with the step that owns it.
    #[derive(Debug)]
    pub struct CooldownTicker {
        handle: JoinHandle<()>,
    }

    impl CooldownTicker {
        /// Spawns the ticker on the current tokio runtime. The first tick fires
        /// one `period` after the call.
        #[must_use]
        pub fn start<F>(period: Duration, mut on_tick: F) -> Self
        where
            F: FnMut() + Send + 'static,
        {
            let handle = tokio::spawn(async move {
                let mut interval = interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    interval.tick().await;
                    trace!("cooldown tick");
                    on_tick();
                }
            });

            Self { handle }
        }

        pub fn cancel(&self) {
            self.handle.abort();
        }

        #[must_use]
        pub fn is_finished(&self) -> bool {
            self.handle.is_finished()
        }
    }

    impl Drop for CooldownTicker {
        fn drop(&mut self) {
            self.handle.abort();
        }
    }
}
