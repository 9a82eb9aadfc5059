//! Transient toast notification state.
//!
//! One toast at a time; a new toast replaces the current one. Lifecycle is
//! a short entering delay, a visible window, then a fade window, all driven
//! by deadlines checked on `Tick`.

use std::time::{Duration, Instant};

pub const TOAST_ENTER: Duration = Duration::from_millis(100);
pub const TOAST_VISIBLE: Duration = Duration::from_millis(2000);
pub const TOAST_FADE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Created but not yet drawn
    Entering,
    Visible,
    /// Still drawn, dimmed, about to disappear
    Fading,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub text: String,
    pub phase: ToastPhase,
    /// When the current phase ends
    deadline: Instant,
}

impl ToastState {
    pub fn new(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            phase: ToastPhase::Entering,
            deadline: now + TOAST_ENTER,
        }
    }

    /// Step the lifecycle. Returns `false` once the toast is finished and
    /// should be dropped.
    pub fn advance(&mut self, now: Instant) -> bool {
        while now >= self.deadline {
            match self.phase {
                ToastPhase::Entering => {
                    self.phase = ToastPhase::Visible;
                    self.deadline += TOAST_VISIBLE;
                }
                ToastPhase::Visible => {
                    self.phase = ToastPhase::Fading;
                    self.deadline += TOAST_FADE;
                }
                ToastPhase::Fading => return false,
            }
        }
        true
    }

    /// Whether the toast should currently be drawn
    pub fn is_rendered(&self) -> bool {
        self.phase != ToastPhase::Entering
    }
}
