//! Platform abstraction layer
//!
//! Handles what the simulation must not know about:
//! - Time: the blocking tick delay
//! - Input: digital pins mapped to paddle speed
//!
//! The std implementations cover the native demo; the null clock runs the
//! same loop headless for tests.

use std::thread;
use std::time::Duration;

/// Blocking millisecond delay.
pub trait Clock {
    fn wait_ms(&mut self, ms: u64);
}

/// Wall-clock delay via the OS scheduler.
#[derive(Debug, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn wait_ms(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// No-delay clock for headless runs. Accumulates the time that would have
/// been spent sleeping.
#[derive(Debug, Default)]
pub struct NullClock {
    pub elapsed_ms: u64,
}

impl Clock for NullClock {
    fn wait_ms(&mut self, ms: u64) {
        self.elapsed_ms += ms;
    }
}

/// One digital input pin, polled between ticks.
pub trait DigitalInput {
    fn is_high(&mut self) -> bool;
}

/// Two held buttons mapped to a signed paddle speed.
#[derive(Debug)]
pub struct PaddleButtons<P> {
    pub up: P,
    pub down: P,
    pub step: i32,
}

impl<P: DigitalInput> PaddleButtons<P> {
    pub fn new(up: P, down: P, step: i32) -> Self {
        Self { up, down, step }
    }

    /// Poll both pins. Negative moves the paddle up the screen; up wins when
    /// both buttons are held. The result feeds `Paddle::set_speed`.
    pub fn poll(&mut self) -> i32 {
        if self.up.is_high() {
            -self.step
        } else if self.down.is_high() {
            self.step
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pin(bool);

    impl DigitalInput for Pin {
        fn is_high(&mut self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_null_clock_accumulates() {
        let mut clock = NullClock::default();
        clock.wait_ms(200);
        clock.wait_ms(1000);
        assert_eq!(clock.elapsed_ms, 1200);
    }

    #[test]
    fn test_buttons_idle() {
        let mut buttons = PaddleButtons::new(Pin(false), Pin(false), 3);
        assert_eq!(buttons.poll(), 0);
    }

    #[test]
    fn test_buttons_directions() {
        let mut up = PaddleButtons::new(Pin(true), Pin(false), 3);
        assert_eq!(up.poll(), -3);

        let mut down = PaddleButtons::new(Pin(false), Pin(true), 3);
        assert_eq!(down.poll(), 3);
    }

    #[test]
    fn test_up_wins_when_both_held() {
        let mut buttons = PaddleButtons::new(Pin(true), Pin(true), 3);
        assert_eq!(buttons.poll(), -3);
    }
}
