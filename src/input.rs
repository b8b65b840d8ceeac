//! Button debouncing.
//!
//! Buttons are polled every tick rather than waited on, so a debounce window
//! is kept per lane: after a recognised press, the lane ignores its line until
//! the window has passed.

use embedded_hal::digital::InputPin;

use crate::clock::{
    Instant,
    Millis,
    elapsed,
};

/// Read a pull-up button line. Active low; a failed read counts as released.
pub fn is_active<P: InputPin + ?Sized>(pin: &mut P) -> bool {
    pin.is_low().unwrap_or(false)
}

/// Turns a polled line level into discrete press events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    delay: Millis,
    last_press: Option<Instant>,
}

impl Debouncer {
    pub const fn new(delay: Millis) -> Self {
        Self {
            delay,
            last_press: None,
        }
    }

    /// Feed one sample. Returns `true` if this sample is a new press.
    ///
    /// A press needs the line to be active and strictly more than the delay
    /// to have passed since the last recognised press. The timestamp is
    /// taken on recognition, so holding the button re-triggers once per
    /// window.
    pub fn poll(&mut self, active: bool, now: Instant) -> bool {
        if !active {
            return false;
        }
        if let Some(last) = self.last_press
            && elapsed(now, last) <= self.delay
        {
            return false;
        }
        self.last_press = Some(now);
        true
    }

    pub const fn last_press(&self) -> Option<Instant> {
        self.last_press
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::ErrorType;

    use super::*;
    use crate::clock::at;

    const DELAY: Millis = Millis::millis(200);

    #[test]
    fn first_press_is_recognised() {
        let mut debouncer = Debouncer::new(DELAY);
        assert!(debouncer.poll(true, at(100)));
        assert_eq!(debouncer.last_press(), Some(at(100)));
    }

    #[test]
    fn released_line_is_not_a_press() {
        let mut debouncer = Debouncer::new(DELAY);
        assert!(!debouncer.poll(false, at(100)));
        assert_eq!(debouncer.last_press(), None);
    }

    #[test]
    fn second_press_inside_window_is_swallowed() {
        let mut debouncer = Debouncer::new(DELAY);
        assert!(debouncer.poll(true, at(100)));
        assert!(!debouncer.poll(true, at(150)));
        assert_eq!(debouncer.last_press(), Some(at(100)));
    }

    #[test]
    fn window_is_strict() {
        let mut debouncer = Debouncer::new(DELAY);
        assert!(debouncer.poll(true, at(100)));
        assert!(!debouncer.poll(true, at(300)));
        assert!(debouncer.poll(true, at(301)));
    }

    #[test]
    fn window_survives_clock_wrap() {
        let mut debouncer = Debouncer::new(DELAY);
        assert!(debouncer.poll(true, at(u32::MAX - 50)));
        assert!(!debouncer.poll(true, at(100)));
        assert!(debouncer.poll(true, at(200)));
    }

    struct Line(Result<bool, Infallible>);

    impl ErrorType for Line {
        type Error = Infallible;
    }

    impl InputPin for Line {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.0.map(|low| !low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.0
        }
    }

    #[test]
    fn pull_up_line_is_active_low() {
        assert!(is_active(&mut Line(Ok(true))));
        assert!(!is_active(&mut Line(Ok(false))));
    }

    #[derive(Debug)]
    struct Broken;

    impl embedded_hal::digital::Error for Broken {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    struct FaultyLine;

    impl ErrorType for FaultyLine {
        type Error = Broken;
    }

    impl InputPin for FaultyLine {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(Broken)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(Broken)
        }
    }

    #[test]
    fn read_error_counts_as_released() {
        assert!(!is_active(&mut FaultyLine));
    }
}
