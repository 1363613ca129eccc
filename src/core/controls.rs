//! Controls visibility driven by an inactivity deadline.
//!
//! There is one deadline and at most one timer task. Activity pushes the
//! deadline out; the task notices on wake-up and goes back to sleep.

use tokio::time::Instant;

/// Outcome of a timer wake-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleCheck {
    /// Activity moved the deadline; sleep until this instant.
    SleepUntil(Instant),
    /// Controls were hidden.
    Hidden,
    /// Deadline reached outside fullscreen; nothing to hide.
    Expired,
}

#[derive(Debug, Clone)]
pub struct InactivityTimer {
    visible: bool,
    deadline: Option<Instant>,
    task_pending: bool,
}

impl Default for InactivityTimer {
    fn default() -> Self {
        Self {
            visible: true,
            deadline: None,
            task_pending: false,
        }
    }
}

impl InactivityTimer {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Show controls and move the deadline. Returns `true` when no timer task
    /// is running and the caller has to spawn one.
    pub fn rearm(&mut self, deadline: Instant) -> bool {
        self.visible = true;
        self.deadline = Some(deadline);
        let spawn = !self.task_pending;
        self.task_pending = true;
        spawn
    }

    /// Called by the timer task when it wakes at `now`.
    pub fn check(&mut self, now: Instant, fullscreen_active: bool) -> IdleCheck {
        match self.deadline {
            Some(deadline) if deadline > now => IdleCheck::SleepUntil(deadline),
            _ => {
                self.deadline = None;
                self.task_pending = false;
                if fullscreen_active {
                    self.visible = false;
                    IdleCheck::Hidden
                } else {
                    IdleCheck::Expired
                }
            }
        }
    }

    /// Controls are always shown outside fullscreen.
    pub fn reveal(&mut self) {
        self.visible = true;
    }
}
