//! Loading phase between screens
//!
//! Navigation in the gallery passes through a short loading indicator before
//! the target screen is shown. The delay is cosmetic: it always completes and
//! cannot be cancelled. Sessions default to [`NoPacing`].

use super::Transition;
use std::thread;
use std::time::Duration;

/// Hook run during the loading phase of a navigation
pub trait Pacer {
    fn pace(&self, transition: &Transition);
}

impl<P: Pacer + ?Sized> Pacer for &P {
    fn pace(&self, transition: &Transition) {
        (**self).pace(transition);
    }
}

/// Immediate transitions
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pace(&self, _transition: &Transition) {}
}

/// Block for a fixed delay on every navigation
#[derive(Debug, Clone, Copy)]
pub struct DelayPacer {
    delay: Duration,
}

impl DelayPacer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Pacer for DelayPacer {
    fn pace(&self, transition: &Transition) {
        if self.delay.is_zero() {
            return;
        }
        tracing::trace!(to = %transition.to, delay_ms = self.delay.as_millis(), "loading");
        thread::sleep(self.delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Screen;
    use std::time::Instant;

    fn transition() -> Transition {
        Transition {
            from: Screen::MainMenu,
            to: Screen::Gallery,
            paced: true,
        }
    }

    #[test]
    fn test_zero_delay_returns_immediately() {
        let pacer = DelayPacer::from_millis(0);
        let start = Instant::now();
        pacer.pace(&transition());
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_delay_blocks_for_at_least_delay() {
        let pacer = DelayPacer::from_millis(20);
        let start = Instant::now();
        pacer.pace(&transition());
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
