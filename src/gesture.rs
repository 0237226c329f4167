//! Press-and-hold qualification for marker placement.

use std::time::Duration;

use crate::traits::ScreenPoint;

/// Default minimum hold before a press counts.
pub const DEFAULT_MIN_PRESS_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One report from the host's gesture pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongPressEvent {
    pub state: GestureState,
    pub location: ScreenPoint,
    /// Time since the finger went down.
    pub elapsed: Duration,
}

impl LongPressEvent {
    pub fn new(state: GestureState, location: ScreenPoint, elapsed: Duration) -> Self {
        Self {
            state,
            location,
            elapsed,
        }
    }
}

/// Filters raw press events down to completed, long-enough holds.
#[derive(Debug, Clone)]
pub struct LongPressRecognizer {
    min_press_duration: Duration,
    cancelled: bool,
}

impl Default for LongPressRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PRESS_DURATION)
    }
}

impl LongPressRecognizer {
    pub fn new(min_press_duration: Duration) -> Self {
        Self {
            min_press_duration,
            cancelled: false,
        }
    }

    pub fn min_press_duration(&self) -> Duration {
        self.min_press_duration
    }

    /// Returns the press location once a qualifying hold ends.
    ///
    /// Began and Changed never qualify. A Cancelled press stays
    /// disqualified until the next Began.
    pub fn handle(&mut self, event: &LongPressEvent) -> Option<ScreenPoint> {
        match event.state {
            GestureState::Began => {
                self.cancelled = false;
                None
            }
            GestureState::Changed => None,
            GestureState::Cancelled => {
                self.cancelled = true;
                None
            }
            GestureState::Ended => {
                let cancelled = std::mem::replace(&mut self.cancelled, false);
                if cancelled || event.elapsed < self.min_press_duration {
                    None
                } else {
                    Some(event.location)
                }
            }
        }
    }
}
