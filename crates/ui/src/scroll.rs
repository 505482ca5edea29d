//! Scroll-driven back-to-top affordance.

use crate::toggle::PanelState;

/// Vertical scroll offset past which the button shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Command for the host shell: scroll the page back to the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollToTop {
    pub smooth: bool,
}

/// Back-to-top button: hidden until the page scrolls past the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackToTop {
    state: PanelState,
}

impl Default for BackToTop {
    fn default() -> Self {
        Self {
            state: PanelState::Closed,
        }
    }
}

impl BackToTop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_open()
    }

    /// Track the current vertical scroll offset.
    pub fn on_scroll(&mut self, offset: f64) {
        self.state = if offset > BACK_TO_TOP_THRESHOLD {
            PanelState::Open
        } else {
            PanelState::Closed
        };
    }

    /// Activation always requests a smooth scroll to the top.
    pub fn activate(&self) -> ScrollToTop {
        ScrollToTop { smooth: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_at_or_below_threshold() {
        let mut button = BackToTop::new();
        button.on_scroll(BACK_TO_TOP_THRESHOLD);
        assert!(!button.is_visible());
    }

    #[test]
    fn shows_past_threshold_and_hides_again() {
        let mut button = BackToTop::new();
        button.on_scroll(301.0);
        assert!(button.is_visible());

        button.on_scroll(0.0);
        assert!(!button.is_visible());
    }

    #[test]
    fn activation_requests_smooth_scroll() {
        assert_eq!(BackToTop::new().activate(), ScrollToTop { smooth: true });
    }
}
