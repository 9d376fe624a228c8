//! Controller state — the two states of the actuation state machine.

use std::fmt;

/// State of an actuation controller.
///
/// A transition into [`Actuating`](Self::Actuating) always completes
/// with a transition back to [`Idle`](Self::Idle); there is no exit
/// path that leaves the actuator stuck on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControllerState {
    /// Waiting for a reading that satisfies the policy.
    #[default]
    Idle,
    /// An actuation cycle (on, hold, off, cooldown) is in flight;
    /// new triggers are suppressed until it completes.
    Actuating,
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Actuating => f.write_str("actuating"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_idle_by_default() {
        assert_eq!(ControllerState::default(), ControllerState::Idle);
    }

    #[test]
    fn should_display_lowercase_names() {
        assert_eq!(ControllerState::Idle.to_string(), "idle");
        assert_eq!(ControllerState::Actuating.to_string(), "actuating");
    }
}
